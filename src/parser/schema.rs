//! Data model produced by the trace scanner.
//!
//! Observations are kept per domain as flat sequences; vCPUs are not stored
//! individually, they only contribute one entry per field they report.

use std::collections::{BTreeMap, HashMap};

/// Scheduler timing fields reported per vCPU, in scan order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimingField {
    Running,
    Runnable,
    Preempt,
    Blocked,
    Wake,
}

impl TimingField {
    /// All timing fields. A line matching several labels is credited to the
    /// first one in this order.
    pub const ALL: [TimingField; 5] = [
        TimingField::Running,
        TimingField::Runnable,
        TimingField::Preempt,
        TimingField::Blocked,
        TimingField::Wake,
    ];

    /// Label as it appears in the trace text (`running: 12 3.45s`)
    pub fn trace_label(self) -> &'static str {
        match self {
            TimingField::Running => "running",
            TimingField::Runnable => "runnable",
            TimingField::Preempt => "preempt",
            TimingField::Blocked => "blocked",
            TimingField::Wake => "wake",
        }
    }

    /// Label used in the report
    pub fn display_name(self) -> &'static str {
        match self {
            TimingField::Running => "Running",
            TimingField::Runnable => "Runnable",
            TimingField::Preempt => "Preempt",
            TimingField::Blocked => "Blocked",
            TimingField::Wake => "Wake",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Integer event counters reported per vCPU
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CounterField {
    Hypercalls,
    Ptwr,
    Privop,
}

impl CounterField {
    pub const ALL: [CounterField; 3] = [
        CounterField::Hypercalls,
        CounterField::Ptwr,
        CounterField::Privop,
    ];

    /// Label used in the report
    pub fn display_name(self) -> &'static str {
        match self {
            CounterField::Hypercalls => "Hypercalls",
            CounterField::Ptwr => "PTWR",
            CounterField::Privop => "Privop Emu",
        }
    }
}

/// Cumulative hypercall counts keyed by hypercall name
///
/// Remembers the order in which names were first seen so that
/// `most_common` can break count ties deterministically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HypercallCounter {
    entries: Vec<(String, u64)>,
    index: HashMap<String, usize>,
}

impl HypercallCounter {
    /// Add `count` to the running total for `name`
    pub fn add(&mut self, name: &str, count: u64) {
        match self.index.get(name) {
            Some(&slot) => {
                let total = &mut self.entries[slot].1;
                *total = total.saturating_add(count);
            }
            None => {
                self.index.insert(name.to_string(), self.entries.len());
                self.entries.push((name.to_string(), count));
            }
        }
    }

    /// Get the total for a name, if it was ever seen
    pub fn get(&self, name: &str) -> Option<u64> {
        self.index.get(name).map(|&slot| self.entries[slot].1)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names with their totals, highest count first
    ///
    /// Equal counts keep first-seen order.
    pub fn most_common(&self) -> Vec<(&str, u64)> {
        let mut sorted: Vec<(&str, u64)> = self
            .entries
            .iter()
            .map(|(name, count)| (name.as_str(), *count))
            .collect();
        // sort_by is stable
        sorted.sort_by(|a, b| b.1.cmp(&a.1));
        sorted
    }
}

/// Everything observed for one domain across all of its vCPU blocks
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DomainRecord {
    pub running: Vec<f64>,
    pub runnable: Vec<f64>,
    pub preempt: Vec<f64>,
    pub blocked: Vec<f64>,
    pub wake: Vec<f64>,
    pub hypercalls: Vec<u64>,
    pub ptwr: Vec<u64>,
    pub privop: Vec<u64>,
    pub hypercall_types: HypercallCounter,
}

impl DomainRecord {
    /// Number of vCPUs reported for this domain
    ///
    /// Counted from `running` observations, so a vCPU block without a
    /// `running:` line does not contribute.
    pub fn vcpu_count(&self) -> usize {
        self.running.len()
    }

    pub fn timing(&self, field: TimingField) -> &[f64] {
        match field {
            TimingField::Running => &self.running,
            TimingField::Runnable => &self.runnable,
            TimingField::Preempt => &self.preempt,
            TimingField::Blocked => &self.blocked,
            TimingField::Wake => &self.wake,
        }
    }

    pub fn timing_mut(&mut self, field: TimingField) -> &mut Vec<f64> {
        match field {
            TimingField::Running => &mut self.running,
            TimingField::Runnable => &mut self.runnable,
            TimingField::Preempt => &mut self.preempt,
            TimingField::Blocked => &mut self.blocked,
            TimingField::Wake => &mut self.wake,
        }
    }

    pub fn counter(&self, field: CounterField) -> &[u64] {
        match field {
            CounterField::Hypercalls => &self.hypercalls,
            CounterField::Ptwr => &self.ptwr,
            CounterField::Privop => &self.privop,
        }
    }
}

/// Labels already recorded in the current vCPU block
///
/// Reset at every block start; only the first match of each label counts.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct BlockSeen {
    timing: [bool; 5],
    pub hypercall: bool,
    pub ptwr: bool,
    pub privop: bool,
}

impl BlockSeen {
    pub fn timing(&self, field: TimingField) -> bool {
        self.timing[field.index()]
    }

    pub fn mark_timing(&mut self, field: TimingField) {
        self.timing[field.index()] = true;
    }
}

/// Parsed trace data handed from the parser to the reporter
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedTrace {
    /// Records keyed by domain id; iteration order is ascending id
    pub domains: BTreeMap<u64, DomainRecord>,

    /// `Total time:` value from the first line, if present
    pub tracing_time: Option<f64>,
}

impl ParsedTrace {
    /// Total vCPU blocks counted across all domains
    pub fn total_vcpus(&self) -> usize {
        self.domains.values().map(DomainRecord::vcpu_count).sum()
    }
}
