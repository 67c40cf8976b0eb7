//! Xen Trace Stats
//!
//! Per-vCPU scheduling and hypercall statistics from Xen trace
//! summaries.
//!
//! This crate provides the core implementation for the
//! `xen-trace` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! xen-trace trace-dom0.txt trace-domU.txt
//! ```
//!
//! Library use:
//!
//! ```
//! use xen_trace_stats::parser::parse_trace;
//! use xen_trace_stats::report::render_report;
//!
//! let trace = parse_trace("Total time: 1.00 seconds\n|-- Domain 0 --|\n-- v0 --\nrunning: 3 0.50s\n");
//! let text = render_report("inline", &trace);
//! assert!(text.contains("Domain 0: 1 vCPUs"));
//! ```

pub mod commands;
pub mod parser;
pub mod report;
pub mod utils;
