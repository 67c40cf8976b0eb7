//! Extraction of the `Total time:` header.

use regex::Regex;
use std::sync::LazyLock;

static TOTAL_TIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Total time:\s*([\d.]+)\s*seconds").expect("Invalid total time regex pattern")
});

/// Extract the total tracing time from the first line of a trace
///
/// **Public** - used by parse_trace
///
/// Returns `None` when the line isn't a `Total time: <secs> seconds` header.
pub fn extract_tracing_time(first_line: &str) -> Option<f64> {
    TOTAL_TIME_RE
        .captures(first_line.trim())?
        .get(1)?
        .as_str()
        .parse()
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_tracing_time() {
        assert_eq!(extract_tracing_time("Total time: 12.50 seconds"), Some(12.5));
        assert_eq!(extract_tracing_time("  Total time:3 seconds\n"), Some(3.0));
    }

    #[test]
    fn test_extract_tracing_time_absent() {
        assert_eq!(extract_tracing_time("|-- Domain 0 --|"), None);
        assert_eq!(extract_tracing_time("Total time: 12.50 minutes"), None);
        assert_eq!(extract_tracing_time("Elapsed. Total time: 1.0 seconds"), None);
        assert_eq!(extract_tracing_time(""), None);
    }

    #[test]
    fn test_extract_tracing_time_unparsable() {
        assert_eq!(extract_tracing_time("Total time: 1.2.3 seconds"), None);
    }
}
