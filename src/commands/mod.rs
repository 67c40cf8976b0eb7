//! CLI command implementations.
//!
//! Commands orchestrate the parser and reporter to perform user tasks.

pub mod report;

// Re-export main command functions
pub use report::{execute_report, execute_report_to, report_file, validate_args, ReportArgs};
