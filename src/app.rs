use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use chrono::{NaiveDate, Utc};

use rollcall::core::{
    DayStatus, Roster, Submission, day_status, list_archives, locate_day_file, monthly_summary,
    present_names,
};
use rollcall::ledger::{daily_file_name, validate_name};
use rollcall::utils::{Month, Timezone, debug_enabled, parse_date};
use rollcall::{
    AppError, Clock, FixedClock, LedgerError, MarkOutcome, RotateOutcome, SystemClock,
    mark_attendance, rotate_daily_file,
};

use crate::cli::{Cli, Commands};
use crate::config::Paths;
use crate::output::{
    output_archives_json, output_day_status_json, output_mark_json, output_monthly_json,
    output_rotation_json, print_archives, print_day_status, print_mark_results,
    print_monthly_summary, print_rotation,
};

/// Exit status when every name was valid but some were already marked
const EXIT_ALREADY_MARKED: u8 = 2;

pub(crate) struct MarkResult {
    pub(crate) name: String,
    pub(crate) outcome: MarkOutcome,
}

pub(crate) struct RotationReport {
    pub(crate) date: NaiveDate,
    pub(crate) archive: PathBuf,
    pub(crate) outcome: RotateOutcome,
}

pub(crate) struct DayReport {
    pub(crate) date: NaiveDate,
    pub(crate) source: Option<PathBuf>,
    pub(crate) rows: Vec<DayStatus>,
}

pub(crate) struct CommandContext<'a> {
    pub(crate) cli: &'a Cli,
    pub(crate) paths: Paths,
    pub(crate) clock: Box<dyn Clock>,
}

impl CommandContext<'_> {
    fn today(&self) -> NaiveDate {
        self.clock.now().date_naive()
    }

    fn roster(&self) -> Result<Roster, AppError> {
        Roster::load(&self.paths.roster)
    }
}

/// Build the clock for this invocation: the pinned `--now` instant if given,
/// shown in the configured zone, otherwise the system clock.
pub(crate) fn build_clock(cli: &Cli) -> Result<Box<dyn Clock>, AppError> {
    let timezone = Timezone::parse(cli.timezone.as_deref())?;
    match cli.now.as_deref() {
        Some(raw) => {
            let pinned = FixedClock::parse(raw).ok_or_else(|| AppError::InvalidInstant {
                input: raw.to_string(),
            })?;
            let instant = timezone.to_fixed_offset(pinned.now().with_timezone(&Utc));
            Ok(Box::new(FixedClock::new(instant)))
        }
        None => Ok(Box::new(SystemClock::new(timezone))),
    }
}

pub(crate) fn run(cli: &Cli) -> Result<ExitCode, AppError> {
    let ctx = CommandContext {
        cli,
        paths: Paths::resolve(
            cli.data_dir.as_deref(),
            cli.archive_dir.as_deref(),
            cli.roster.as_deref(),
        ),
        clock: build_clock(cli)?,
    };

    if debug_enabled() {
        eprintln!(
            "[DEBUG] data: {} | archive: {} | roster: {}{}",
            ctx.paths.data_dir.display(),
            ctx.paths.archive_dir.display(),
            ctx.paths.roster.display(),
            if cli.command.needs_roster() { "" } else { " (unused)" }
        );
    }

    match &cli.command {
        Commands::Mark { names } => handle_mark(&ctx, names),
        Commands::Rotate { archive } => handle_rotate(&ctx, archive.as_deref()),
        Commands::Status { date } => handle_status(&ctx, date.as_deref()),
        Commands::Report { month } => handle_report(&ctx, month),
        Commands::Submit { file } => handle_submit(&ctx, file.as_deref()),
        Commands::Archives => handle_archives(&ctx),
    }
}

/// Mark every name, or none if any of them is invalid.
fn mark_all(ctx: &CommandContext<'_>, names: &[&str]) -> Result<Vec<MarkResult>, AppError> {
    for name in names {
        validate_name(name)?;
    }

    let mut results = Vec::with_capacity(names.len());
    for &name in names {
        let outcome = mark_attendance(&ctx.paths.data_dir, name, ctx.clock.as_ref())?;
        results.push(MarkResult {
            name: name.to_string(),
            outcome,
        });
    }
    Ok(results)
}

fn report_marks(ctx: &CommandContext<'_>, results: &[MarkResult]) -> ExitCode {
    if ctx.cli.json {
        println!("{}", output_mark_json(results));
    } else {
        print_mark_results(results);
    }

    let any_duplicate = results
        .iter()
        .any(|r| r.outcome == MarkOutcome::AlreadyMarked);
    if any_duplicate {
        ExitCode::from(EXIT_ALREADY_MARKED)
    } else {
        ExitCode::SUCCESS
    }
}

fn handle_mark(ctx: &CommandContext<'_>, names: &[String]) -> Result<ExitCode, AppError> {
    let names: Vec<&str> = names.iter().map(String::as_str).collect();
    let results = mark_all(ctx, &names)?;
    Ok(report_marks(ctx, &results))
}

fn handle_rotate(ctx: &CommandContext<'_>, archive: Option<&Path>) -> Result<ExitCode, AppError> {
    let date = ctx.today();
    let archive = match archive {
        Some(path) => path.to_path_buf(),
        None => {
            let dir = &ctx.paths.archive_dir;
            fs::create_dir_all(dir).map_err(|e| LedgerError::io("create directory", dir, e))?;
            dir.join(daily_file_name(date))
        }
    };

    let outcome = rotate_daily_file(&ctx.paths.data_dir, &archive, ctx.clock.as_ref())?;
    let report = RotationReport {
        date,
        archive,
        outcome,
    };
    if ctx.cli.json {
        println!("{}", output_rotation_json(&report));
    } else {
        print_rotation(&report);
    }
    Ok(ExitCode::SUCCESS)
}

fn handle_status(ctx: &CommandContext<'_>, date: Option<&str>) -> Result<ExitCode, AppError> {
    let roster = ctx.roster()?;
    let date = match date {
        Some(raw) => parse_date(raw)?,
        None => ctx.today(),
    };

    let source = locate_day_file(date, &ctx.paths.archive_dir, &ctx.paths.data_dir);
    let present = match &source {
        Some(path) => present_names(path)?,
        None => {
            if !ctx.cli.json {
                eprintln!("Warning: no attendance file found for {date}");
            }
            Default::default()
        }
    };

    let report = DayReport {
        date,
        rows: day_status(&roster, &present),
        source,
    };
    if ctx.cli.json {
        println!("{}", output_day_status_json(&report));
    } else {
        print_day_status(&report, ctx.cli.use_color());
    }
    Ok(ExitCode::SUCCESS)
}

fn handle_report(ctx: &CommandContext<'_>, month: &str) -> Result<ExitCode, AppError> {
    let month = Month::parse(month)?;
    let roster = ctx.roster()?;
    let summary = monthly_summary(month, &roster, &ctx.paths.archive_dir, &ctx.paths.data_dir)?;

    if ctx.cli.json {
        println!("{}", output_monthly_json(&summary));
    } else {
        print_monthly_summary(&summary, ctx.cli.use_color());
    }
    Ok(ExitCode::SUCCESS)
}

fn handle_submit(ctx: &CommandContext<'_>, file: Option<&Path>) -> Result<ExitCode, AppError> {
    let json = match file {
        Some(path) => fs::read_to_string(path).map_err(|e| LedgerError::io("read", path, e))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| LedgerError::io("read", Path::new("<stdin>"), e))?;
            buf
        }
    };

    let roster = ctx.roster()?;
    let submission = Submission::parse(&json)?;
    // Validation covers the whole batch before anything is written
    let present = submission.present_names(&roster)?;

    let results = mark_all(ctx, &present)?;
    Ok(report_marks(ctx, &results))
}

fn handle_archives(ctx: &CommandContext<'_>) -> Result<ExitCode, AppError> {
    let archives = list_archives(&ctx.paths.archive_dir)?;

    if ctx.cli.json {
        println!("{}", output_archives_json(&archives));
    } else if archives.is_empty() {
        println!("No archives found in {}.", ctx.paths.archive_dir.display());
    } else {
        print_archives(&archives, ctx.cli.use_color());
    }
    Ok(ExitCode::SUCCESS)
}
