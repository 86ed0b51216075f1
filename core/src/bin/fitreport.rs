use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

use fitreport_core::cli::{print_reports, CliArgs};

fn main() -> Result<ExitCode> {
    let args = CliArgs::parse();

    // RUST_LOG overstyrer; -v gir debug
    let level = if args.verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let stdout = io::stdout();
    // avviste pakker er allerede logget (warn) i process_batch
    let report = print_reports(&args, &mut stdout.lock())?;

    Ok(if report.is_clean() { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
