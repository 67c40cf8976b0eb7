//! Entry points for parsing a Xen trace summary.
//!
//! The whole file is read into memory, then the first line is checked for a
//! tracing-time header and all lines go through the scanner.

use super::scanner::scan_lines;
use super::schema::ParsedTrace;
use super::tracing_time::extract_tracing_time;
use crate::utils::error::TraceError;
use log::debug;
use std::path::Path;

/// Parse trace text already in memory
///
/// **Public** - main entry point for parsing
pub fn parse_trace(text: &str) -> ParsedTrace {
    let lines: Vec<&str> = text.lines().collect();

    let tracing_time = lines.first().and_then(|line| extract_tracing_time(line));
    if tracing_time.is_none() {
        debug!("No total time header on the first line");
    }

    let domains = scan_lines(&lines);

    let parsed = ParsedTrace {
        domains,
        tracing_time,
    };

    debug!(
        "Parsed {} lines: {} domains, {} vCPUs",
        lines.len(),
        parsed.domains.len(),
        parsed.total_vcpus()
    );

    parsed
}

/// Read and parse a trace file
///
/// **Public** - used by the report command
///
/// # Errors
/// * `TraceError::ReadFailed` - file missing, unreadable or not UTF-8
pub fn parse_file(path: impl AsRef<Path>) -> Result<ParsedTrace, TraceError> {
    let path = path.as_ref();
    debug!("Reading trace file: {}", path.display());

    let text = std::fs::read_to_string(path).map_err(|source| TraceError::ReadFailed {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(parse_trace(&text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trace_reads_header_and_domains() {
        let parsed = parse_trace(
            "Total time: 12.50 seconds\n\
             |-- Domain 0 --|\n\
             -- v0 --\n\
             running: 1 2.00s\n",
        );

        assert_eq!(parsed.tracing_time, Some(12.5));
        assert_eq!(parsed.domains[&0].running, vec![2.0]);
    }

    #[test]
    fn test_header_only_counts_on_first_line() {
        let parsed = parse_trace("\nTotal time: 12.50 seconds\n");
        assert_eq!(parsed.tracing_time, None);
        assert!(parsed.domains.is_empty());
    }

    #[test]
    fn test_parse_trace_crlf() {
        let parsed = parse_trace("Total time: 1.00 seconds\r\n|-- Domain 4 --|\r\n-- v0 --\r\nptwr 2\r\n");
        assert_eq!(parsed.tracing_time, Some(1.0));
        assert_eq!(parsed.domains[&4].ptwr, vec![2]);
    }

    #[test]
    fn test_parse_file_missing() {
        let err = parse_file("/nonexistent/trace.txt").unwrap_err();
        let TraceError::ReadFailed { path, source } = err;
        assert_eq!(path, Path::new("/nonexistent/trace.txt"));
        assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
    }
}
