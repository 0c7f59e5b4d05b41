use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use rollcall::AppError;

/// Overrides the default base directory for data, archive and roster
pub(crate) const HOME_ENV: &str = "ROLLCALL_HOME";

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigColorMode {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) data_dir: Option<PathBuf>,
    #[serde(default)]
    pub(crate) archive_dir: Option<PathBuf>,
    #[serde(default)]
    pub(crate) roster: Option<PathBuf>,
    #[serde(default)]
    pub(crate) timezone: Option<String>,
    #[serde(default)]
    pub(crate) color: Option<ConfigColorMode>,
    #[serde(default)]
    pub(crate) no_color: bool,
    #[serde(default)]
    pub(crate) json: bool,
    #[serde(default)]
    pub(crate) debug: bool,
}

impl Config {
    /// Search the default locations; parse failures are reported and skipped.
    pub(crate) fn load(verbose: bool) -> Self {
        for path in Self::get_config_paths() {
            if path.exists()
                && let Ok(content) = fs::read_to_string(&path)
            {
                match toml::from_str::<Config>(&content) {
                    Ok(config) => {
                        if verbose {
                            eprintln!("Loaded config from {}", path.display());
                        }
                        return config;
                    }
                    Err(e) => {
                        eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                    }
                }
            }
        }

        Self::default()
    }

    /// Load an explicitly requested config file; any failure is an error.
    pub(crate) fn load_from(path: &Path) -> Result<Self, AppError> {
        let fail = |reason: String| AppError::Config {
            path: path.to_path_buf(),
            reason,
        };
        let content = fs::read_to_string(path).map_err(|e| fail(e.to_string()))?;
        toml::from_str(&content).map_err(|e| fail(e.to_string()))
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/rollcall/config.toml (Linux/cross-platform)
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("rollcall").join("config.toml"));
        }

        // 2. Platform config dir (e.g. ~/Library/Application Support on macOS)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("rollcall").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.rollcall.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".rollcall.toml"));
        }

        paths
    }
}

/// Base directory for everything rollcall stores by default
pub(crate) fn default_home() -> PathBuf {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return PathBuf::from(home);
    }
    dirs::data_local_dir()
        .map(|d| d.join("rollcall"))
        .unwrap_or_else(|| PathBuf::from("rollcall"))
}

/// Resolved locations for one invocation
#[derive(Debug, Clone)]
pub(crate) struct Paths {
    pub(crate) data_dir: PathBuf,
    pub(crate) archive_dir: PathBuf,
    pub(crate) roster: PathBuf,
}

impl Paths {
    pub(crate) fn resolve(
        data_dir: Option<&Path>,
        archive_dir: Option<&Path>,
        roster: Option<&Path>,
    ) -> Self {
        let home = default_home();
        Self {
            data_dir: data_dir.map_or_else(|| home.join("data"), Path::to_path_buf),
            archive_dir: archive_dir.map_or_else(|| home.join("archive"), Path::to_path_buf),
            roster: roster.map_or_else(|| home.join("roster.txt"), Path::to_path_buf),
        }
    }
}
