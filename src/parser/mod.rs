//! Trace parsing and data model.
//!
//! This module handles:
//! - Reading Xen trace summaries
//! - Extracting the total tracing time
//! - Scanning domain / vCPU blocks into per-domain records

pub mod scanner;
pub mod schema;
pub mod tracing_time;
pub mod xen_trace;

// Re-export main types
pub use scanner::scan_lines;
pub use schema::{CounterField, DomainRecord, HypercallCounter, ParsedTrace, TimingField};
pub use tracing_time::extract_tracing_time;
pub use xen_trace::{parse_file, parse_trace};
