//! Statistics reporting for parsed traces.
//!
//! - Descriptive statistics (mean / median / min / max)
//! - Plain-text per-domain report

pub mod stats;
pub mod text;

// Re-export main functions
pub use stats::{summarize_f64, summarize_u64, CountSummary, Summary};
pub use text::{render_report, write_report};
