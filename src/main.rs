mod app;
mod cli;
mod config;
mod output;

use std::process::ExitCode;

use clap::Parser;

use cli::Cli;
use config::Config;
use rollcall::utils::set_debug;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match cli.config.as_deref() {
        Some(path) => match Config::load_from(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => Config::load(cli.debug),
    };

    // Merge config file values (CLI args take precedence)
    let cli = cli.with_config(&config);
    set_debug(cli.debug);

    match app::run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
