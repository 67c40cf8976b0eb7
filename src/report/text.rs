//! Plain-text statistics report.
//!
//! One section per file, then one block per domain in ascending id order:
//!
//! ```text
//! ------------------- Statistics from trace.txt -------------------
//! Total tracing time : 12.50 seconds
//! Domain 0: 1 vCPUs
//!   Running            mean=2.00s, median=2.00s, min=2.00s, max=2.00s
//!   Runnable           (no data)
//!   ...
//!   Hypercalls         mean=4, median=4, min=4, max=4
//!   Hypercall types:
//!     - HVMOP             : 2
//! ```

use super::stats::{summarize_f64, summarize_u64};
use crate::parser::schema::{CounterField, DomainRecord, ParsedTrace, TimingField};
use crate::utils::config::{HEADER_RULE, LABEL_WIDTH, NO_DATA};
use std::io::{self, Write};

/// Write the report for one parsed trace
///
/// **Public** - main entry point for text output
///
/// # Arguments
/// * `out` - Destination (stdout in the CLI)
/// * `source` - Label for the header line, normally the file path
/// * `trace` - Parsed trace data
pub fn write_report<W: Write>(out: &mut W, source: &str, trace: &ParsedTrace) -> io::Result<()> {
    writeln!(out, "{HEADER_RULE} Statistics from {source} {HEADER_RULE}")?;

    // A header of `Total time: 0.00 seconds` is a present value and is
    // printed, only a missing header is reported as not found.
    match trace.tracing_time {
        Some(seconds) => writeln!(out, "Total tracing time : {seconds:.2} seconds")?,
        None => writeln!(out, "Could not find total tracing time")?,
    }

    for (id, record) in &trace.domains {
        write_domain(out, *id, record)?;
    }

    Ok(())
}

/// Render the report into a string
///
/// **Public** - convenience for tests and library callers
pub fn render_report(source: &str, trace: &ParsedTrace) -> String {
    let mut buf = Vec::new();
    write_report(&mut buf, source, trace).expect("writing to a Vec cannot fail");
    String::from_utf8(buf).expect("report text is built from str and is valid UTF-8")
}

/// Write one domain block followed by a blank separator line
///
/// **Private** - internal helper for write_report
fn write_domain<W: Write>(out: &mut W, id: u64, record: &DomainRecord) -> io::Result<()> {
    writeln!(out, "Domain {}: {} vCPUs", id, record.vcpu_count())?;

    for field in TimingField::ALL {
        write_timing_line(out, field.display_name(), record.timing(field))?;
    }

    for field in CounterField::ALL {
        write_counter_line(out, field.display_name(), record.counter(field))?;
    }

    if !record.hypercall_types.is_empty() {
        writeln!(out, "  Hypercall types:")?;
        for (name, count) in record.hypercall_types.most_common() {
            writeln!(out, "    - {name:<LABEL_WIDTH$}: {count}")?;
        }
    }

    writeln!(out)
}

fn write_timing_line<W: Write>(out: &mut W, label: &str, values: &[f64]) -> io::Result<()> {
    match summarize_f64(values) {
        Some(s) => writeln!(
            out,
            "  {label:<LABEL_WIDTH$} mean={:.2}s, median={:.2}s, min={:.2}s, max={:.2}s",
            s.mean, s.median, s.min, s.max
        ),
        None => writeln!(out, "  {label:<LABEL_WIDTH$} {NO_DATA}"),
    }
}

fn write_counter_line<W: Write>(out: &mut W, label: &str, values: &[u64]) -> io::Result<()> {
    match summarize_u64(values) {
        Some(s) => writeln!(
            out,
            "  {label:<LABEL_WIDTH$} mean={:.0}, median={:.0}, min={}, max={}",
            s.mean, s.median, s.min, s.max
        ),
        None => writeln!(out, "  {label:<LABEL_WIDTH$} {NO_DATA}"),
    }
}
