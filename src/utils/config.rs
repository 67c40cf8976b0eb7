//! Configuration and constants for the CLI.

/// Column width used for field labels in the text report
pub const LABEL_WIDTH: usize = 18;

/// Dashes framing the per-file report header
pub const HEADER_RULE: &str = "-------------------";

/// Placeholder printed instead of statistics for an empty sequence
pub const NO_DATA: &str = "(no data)";
