//! Xen Trace Stats CLI
//!
//! Summarizes scheduler timings and hypercall counts per domain
//! from one or more Xen trace summary files.

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use std::path::PathBuf;

use xen_trace_stats::commands::{execute_report, ReportArgs};

/// Parse Xen trace files and show stats.
#[derive(Parser, Debug)]
#[command(name = "xen-trace")]
#[command(version, about, long_about = None)]
struct Cli {
    /// One or more trace files to parse
    #[arg(required = true, num_args = 1..)]
    files: Vec<PathBuf>,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging; stdout is reserved for the report
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args = ReportArgs { files: cli.files };
    execute_report(&args)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_requires_a_file() {
        assert!(Cli::try_parse_from(["xen-trace"]).is_err());
    }

    #[test]
    fn test_cli_keeps_file_order() {
        let cli = Cli::try_parse_from(["xen-trace", "b.txt", "a.txt"]).unwrap();
        assert_eq!(cli.files, vec![PathBuf::from("b.txt"), PathBuf::from("a.txt")]);
    }
}
