//! Execution history.
//!
//! An append-only log of dispatch slices. One record is produced per
//! dispatch, covering the half-open tick interval `[start, end)`.

use serde::{Deserialize, Serialize};

/// One dispatch slice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionRecord {
    /// Label of the process that ran.
    pub label: String,
    /// First tick of the slice.
    pub start: i64,
    /// Tick at which the slice ended (exclusive).
    pub end: i64,
    /// Level the slice ran at.
    pub level: usize,
    /// Algorithm name of that level, e.g. `RR(2)`.
    pub algorithm: String,
}

impl ExecutionRecord {
    /// Creates a new record.
    pub fn new(
        label: impl Into<String>,
        start: i64,
        end: i64,
        level: usize,
        algorithm: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            start,
            end,
            level,
            algorithm: algorithm.into(),
        }
    }

    /// Slice length in ticks.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

/// Ordered execution log of one simulation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionHistory {
    records: Vec<ExecutionRecord>,
}

impl ExecutionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record.
    pub fn push(&mut self, record: ExecutionRecord) {
        self.records.push(record);
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// All records in dispatch order.
    pub fn records(&self) -> &[ExecutionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records belonging to one process.
    pub fn records_for<'a>(&'a self, label: &'a str) -> impl Iterator<Item = &'a ExecutionRecord> {
        self.records.iter().filter(move |r| r.label == label)
    }

    /// Total ticks attributed to one process.
    pub fn time_for(&self, label: &str) -> i64 {
        self.records_for(label).map(ExecutionRecord::duration).sum()
    }

    /// Total ticks the CPU was busy.
    pub fn busy_time(&self) -> i64 {
        self.records.iter().map(ExecutionRecord::duration).sum()
    }

    /// End of the last slice (0 if empty).
    pub fn last_end(&self) -> i64 {
        self.records.iter().map(|r| r.end).max().unwrap_or(0)
    }
}
