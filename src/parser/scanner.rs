//! Line scanner for Xen trace summaries.
//!
//! Walks the lines once with an index cursor. A `|-- Domain N --|` header
//! selects the current domain, a `-- vN --` header opens a vCPU block, and
//! inside a block the first occurrence of each labeled field is recorded.
//! A header inside a block closes it and is then re-read as a header.

use super::schema::{BlockSeen, DomainRecord, HypercallCounter, TimingField};
use log::debug;
use regex::Regex;
use std::collections::BTreeMap;
use std::str::FromStr;
use std::sync::LazyLock;

static DOMAIN_HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\|-- Domain (\d+) --\|").expect("Invalid domain header regex pattern")
});

static VCPU_HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-- v(\d+) --").expect("Invalid vCPU header regex pattern"));

/// One pattern per timing field, indexed like `TimingField::ALL`.
/// Pattern: `<label>: <count> <seconds>s`
static TIMING_RES: LazyLock<[Regex; 5]> = LazyLock::new(|| {
    TimingField::ALL.map(|field| {
        Regex::new(&format!(r"{}:\s+\d+\s+([\d.]+)s", field.trace_label()))
            .expect("Invalid timing regex pattern")
    })
});

static HYPERCALL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"hypercall\s+(\d+)").expect("Invalid hypercall regex pattern"));

/// Indented breakdown line following `hypercall N`, e.g. `  HVMOP [ 34]: 12`
static HYPERCALL_TYPE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+(\w+)\s+\[\s*\d+\]:\s+(\d+)").expect("Invalid hypercall type regex pattern")
});

static PTWR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"ptwr\s+(\d+)").expect("Invalid ptwr regex pattern"));

static PRIVOP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"emulate privop\s+(\d+)").expect("Invalid privop regex pattern")
});

/// Scan trace lines into per-domain records
///
/// **Public** - main entry point of the scanner
///
/// Never fails: lines that match nothing are skipped. A vCPU header seen
/// before any domain header is ignored along with the lines under it, since
/// there is no domain to attribute them to.
pub fn scan_lines(lines: &[&str]) -> BTreeMap<u64, DomainRecord> {
    let mut domains = BTreeMap::new();
    let mut current_domain: Option<u64> = None;
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];

        if let Some(caps) = DOMAIN_HEADER_RE.captures(line) {
            // An id too large for u64 still ends the previous domain, the
            // blocks under it are dropped rather than misattributed.
            current_domain = caps[1].parse::<u64>().ok();
            match current_domain {
                Some(id) => debug!("Line {}: domain {}", i + 1, id),
                None => debug!("Line {}: domain id {} out of range, ignored", i + 1, &caps[1]),
            }
            i += 1;
            continue;
        }

        if VCPU_HEADER_RE.is_match(line) {
            match current_domain {
                Some(domain) => {
                    debug!("Line {}: vCPU block in domain {}", i + 1, domain);
                    i = scan_vcpu_block(lines, i + 1, domain, &mut domains);
                    continue;
                }
                None => debug!("Line {}: vCPU header before any domain, ignored", i + 1),
            }
        }

        i += 1;
    }

    domains
}

/// Scan one vCPU block starting at `start`
///
/// **Private** - internal helper for scan_lines
///
/// Returns the index of the first line not consumed: either the header that
/// ended the block or `lines.len()`. The domain record is only created once
/// something is actually recorded for it.
fn scan_vcpu_block(
    lines: &[&str],
    start: usize,
    domain: u64,
    domains: &mut BTreeMap<u64, DomainRecord>,
) -> usize {
    let mut seen = BlockSeen::default();
    let mut j = start;

    while j < lines.len() {
        let line = lines[j];

        if is_block_boundary(line) {
            break;
        }

        if let Some((field, seconds)) = match_timing(line, &seen) {
            domains.entry(domain).or_default().timing_mut(field).push(seconds);
            seen.mark_timing(field);
        }

        if !seen.hypercall {
            if let Some(count) = capture_number::<u64>(&HYPERCALL_RE, line) {
                let record = domains.entry(domain).or_default();
                record.hypercalls.push(count);
                seen.hypercall = true;
                // The line that stops the breakdown goes through the full
                // dispatch on the next iteration.
                j = scan_hypercall_types(lines, j + 1, &mut record.hypercall_types);
                continue;
            }
        }

        if !seen.ptwr {
            if let Some(count) = capture_number::<u64>(&PTWR_RE, line) {
                domains.entry(domain).or_default().ptwr.push(count);
                seen.ptwr = true;
            }
        }

        if !seen.privop {
            if let Some(count) = capture_number::<u64>(&PRIVOP_RE, line) {
                domains.entry(domain).or_default().privop.push(count);
                seen.privop = true;
            }
        }

        j += 1;
    }

    j
}

/// Consume hypercall breakdown lines starting at `start`
///
/// **Private** - internal helper for scan_vcpu_block
///
/// Returns the index of the first line that is not a breakdown line.
fn scan_hypercall_types(lines: &[&str], start: usize, counter: &mut HypercallCounter) -> usize {
    let mut j = start;

    while let Some(line) = lines.get(j) {
        let Some(caps) = HYPERCALL_TYPE_RE.captures(line) else {
            break;
        };
        let Ok(count) = caps[2].parse::<u64>() else {
            break;
        };
        counter.add(&caps[1], count);
        j += 1;
    }

    j
}

/// First timing field not yet seen in this block that matches `line`
fn match_timing(line: &str, seen: &BlockSeen) -> Option<(TimingField, f64)> {
    TimingField::ALL
        .iter()
        .zip(TIMING_RES.iter())
        .filter(|(field, _)| !seen.timing(**field))
        .find_map(|(field, re)| capture_number::<f64>(re, line).map(|secs| (*field, secs)))
}

/// True for lines that end the current vCPU block
fn is_block_boundary(line: &str) -> bool {
    VCPU_HEADER_RE.is_match(line) || DOMAIN_HEADER_RE.is_match(line)
}

/// Parse the first capture group of `re` in `line`
///
/// A capture that doesn't parse as `T` (e.g. `1.2.3`, or an overflowing
/// integer) counts as no match.
fn capture_number<T: FromStr>(re: &Regex, line: &str) -> Option<T> {
    re.captures(line)?.get(1)?.as_str().parse().ok()
}
