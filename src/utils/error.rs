//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a trace file
///
/// Parsing itself never fails: unrecognized lines are skipped and missing
/// fields show up as empty sequences. Only the file boundary can error.
#[derive(Error, Debug)]
pub enum TraceError {
    #[error("Failed to read trace file {}: {source}", .path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
