use std::io::Write;

use anyhow::Context;
use clap::{Parser, ValueEnum};

use crate::packages::{parse_packages, process_batch, sample_packages, BatchPolicy, BatchReport};
use crate::report::format_report;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// "Training type: ...; Duration: ..." per økt
    #[default]
    Text,
    /// Ett JSON-objekt per linje
    Json,
}

#[derive(Debug, Parser)]
#[command(
    name = "fitreport",
    about = "Workout summary (distance, speed, calories) for running, walking and swimming"
)]
pub struct CliArgs {
    /// JSON list of packages, e.g. '[["RUN", [15000, 1, 75]]]'. Default: built-in sample set
    #[arg(long)]
    pub packages: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Stop at the first rejected package
    #[arg(long)]
    pub fail_fast: bool,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

/// Kjører hele batchen og skriver én linje per vellykket økt til `out`.
pub fn print_reports(args: &CliArgs, out: &mut impl Write) -> anyhow::Result<BatchReport> {
    let packages = match &args.packages {
        Some(json) => parse_packages(json).context("could not read --packages")?,
        None => sample_packages(),
    };

    let policy = if args.fail_fast { BatchPolicy::FailFast } else { BatchPolicy::SkipInvalid };
    let report = process_batch(&packages, policy);

    for m in &report.metrics {
        match args.format {
            OutputFormat::Text => writeln!(out, "{}", format_report(m))?,
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(m)?)?,
        }
    }
    out.flush()?;

    Ok(report)
}
