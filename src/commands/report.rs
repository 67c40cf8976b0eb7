//! Report command implementation.
//!
//! For each file, in the order given:
//! 1. Reads the whole trace into memory
//! 2. Parses domain / vCPU blocks and the tracing-time header
//! 3. Prints the statistics report
//!
//! The first file that cannot be read stops the run.

use crate::parser::parse_file;
use crate::report::write_report;
use anyhow::{Context, Result};
use log::{debug, info};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Arguments for the report command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone, Default)]
pub struct ReportArgs {
    /// Trace files to summarize, processed in order
    pub files: Vec<PathBuf>,
}

/// Execute the report command, writing to stdout
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * A trace file is missing or unreadable
/// * stdout is closed
pub fn execute_report(args: &ReportArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute_report_to(args, &mut out)
}

/// Execute the report command against any writer
///
/// **Public** - lets tests capture the output
pub fn execute_report_to<W: Write>(args: &ReportArgs, out: &mut W) -> Result<()> {
    validate_args(args)?;

    info!("Summarizing {} trace file(s)", args.files.len());

    for path in &args.files {
        report_file(path, out)?;
    }

    out.flush().context("Failed to flush report output")?;
    Ok(())
}

/// Parse one trace file and write its report
///
/// **Public** - one parse-then-report cycle
pub fn report_file<W: Write>(path: &Path, out: &mut W) -> Result<()> {
    let trace = parse_file(path)
        .with_context(|| format!("Failed to process trace file {}", path.display()))?;

    debug!(
        "{}: {} domains, tracing time {:?}",
        path.display(),
        trace.domains.len(),
        trace.tracing_time
    );

    write_report(out, &path.display().to_string(), &trace)
        .context("Failed to write report")?;

    Ok(())
}

/// Validate report arguments
///
/// **Public** - can be called before execute_report for early validation
pub fn validate_args(args: &ReportArgs) -> Result<()> {
    if args.files.is_empty() {
        anyhow::bail!("At least one trace file is required");
    }

    Ok(())
}
