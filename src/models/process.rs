//! Process model.
//!
//! A process is the unit of work handed to the MLFQ dispatcher. It pairs
//! an immutable descriptor ([`ProcessSpec`]) with the runtime state the
//! dispatcher mutates while the simulation advances.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Completion (CT) | Tick at which the last slice ended |
//! | Turnaround (TAT) | CT - arrival |
//! | Waiting (WT) | TAT - burst |
//! | Response (RT) | First dispatch tick - arrival |
//!
//! # Reference
//! Arpaci-Dusseau (2018), "Operating Systems: Three Easy Pieces", Ch. 7-8

use serde::{Deserialize, Serialize};

/// Response time of a process that has never been dispatched.
pub const RESPONSE_UNSET: i64 = -1;

/// Stable handle into the dispatcher's process arena.
///
/// Queues and the arrival backlog hold handles, never copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProcessId(pub usize);

impl ProcessId {
    /// Arena index.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Validated process descriptor.
///
/// Field invariants: `burst_time > 0`, `arrival_time >= 0`,
/// `queue_level >= 1`, `priority >= 1`. See [`crate::validation`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSpec {
    /// Process label (expected unique within a run, not enforced).
    pub label: String,
    /// Total CPU time required (ticks).
    pub burst_time: i64,
    /// Tick at which the process becomes ready.
    pub arrival_time: i64,
    /// Initial ladder level (1 = highest priority).
    pub queue_level: usize,
    /// Informational priority. Not consulted by any queue.
    pub priority: i32,
}

impl ProcessSpec {
    /// Creates a descriptor on level 1 with priority 1.
    pub fn new(label: impl Into<String>, burst_time: i64, arrival_time: i64) -> Self {
        Self {
            label: label.into(),
            burst_time,
            arrival_time,
            queue_level: 1,
            priority: 1,
        }
    }

    /// Sets the initial queue level.
    pub fn with_queue_level(mut self, level: usize) -> Self {
        self.queue_level = level;
        self
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

/// A process under simulation: descriptor plus runtime state.
///
/// Invariants:
/// - `completed ⇔ remaining == 0`
/// - `remaining` only decreases and never drops below zero
/// - the response time leaves [`RESPONSE_UNSET`] exactly once
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "ProcessSpec")]
pub struct Process {
    spec: ProcessSpec,
    remaining_time: i64,
    current_level: usize,
    started: bool,
    completed: bool,
    completion_time: i64,
    turnaround_time: i64,
    waiting_time: i64,
    response_time: i64,
}

impl From<ProcessSpec> for Process {
    fn from(spec: ProcessSpec) -> Self {
        Self {
            remaining_time: spec.burst_time,
            current_level: spec.queue_level,
            started: false,
            completed: false,
            completion_time: 0,
            turnaround_time: 0,
            waiting_time: 0,
            response_time: RESPONSE_UNSET,
            spec,
        }
    }
}

impl Process {
    /// Creates a fresh process from a descriptor.
    pub fn new(spec: ProcessSpec) -> Self {
        Self::from(spec)
    }

    /// Runs the process for `duration` ticks.
    ///
    /// Marks the process started, decreases the remaining burst and, once
    /// nothing is left, clamps it to zero and marks the process completed.
    pub fn run(&mut self, duration: i64) {
        self.started = true;
        self.remaining_time -= duration;
        if self.remaining_time <= 0 {
            self.remaining_time = 0;
            self.completed = true;
        }
    }

    /// Derives turnaround and waiting time from the completion time.
    ///
    /// No-op until a completion time has been assigned.
    pub fn compute_derived_times(&mut self) {
        if self.completion_time > 0 {
            self.turnaround_time = self.completion_time - self.spec.arrival_time;
            self.waiting_time = self.turnaround_time - self.spec.burst_time;
        }
    }

    /// Restores runtime and derived state so the process can be replayed.
    pub fn reset(&mut self) {
        self.remaining_time = self.spec.burst_time;
        self.current_level = self.spec.queue_level;
        self.started = false;
        self.completed = false;
        self.completion_time = 0;
        self.turnaround_time = 0;
        self.waiting_time = 0;
        self.response_time = RESPONSE_UNSET;
    }

    /// Stamps the response time at the first dispatch; later calls are ignored.
    pub(crate) fn record_first_dispatch(&mut self, now: i64) {
        if !self.started && self.response_time == RESPONSE_UNSET {
            self.response_time = now - self.spec.arrival_time;
        }
    }

    pub(crate) fn set_current_level(&mut self, level: usize) {
        self.current_level = level;
    }

    pub(crate) fn set_completion_time(&mut self, tick: i64) {
        self.completion_time = tick;
    }

    /// Descriptor this process was built from.
    pub fn spec(&self) -> &ProcessSpec {
        &self.spec
    }

    /// Process label.
    pub fn label(&self) -> &str {
        &self.spec.label
    }

    pub fn burst_time(&self) -> i64 {
        self.spec.burst_time
    }

    pub fn arrival_time(&self) -> i64 {
        self.spec.arrival_time
    }

    /// Initial queue level.
    pub fn queue_level(&self) -> usize {
        self.spec.queue_level
    }

    pub fn priority(&self) -> i32 {
        self.spec.priority
    }

    /// Burst time still to run (ticks).
    pub fn remaining_time(&self) -> i64 {
        self.remaining_time
    }

    /// Level the process currently belongs to.
    pub fn current_level(&self) -> usize {
        self.current_level
    }

    pub fn has_started(&self) -> bool {
        self.started
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Completion tick (0 until completed).
    pub fn completion_time(&self) -> i64 {
        self.completion_time
    }

    pub fn turnaround_time(&self) -> i64 {
        self.turnaround_time
    }

    pub fn waiting_time(&self) -> i64 {
        self.waiting_time
    }

    /// Response time, or [`RESPONSE_UNSET`] before the first dispatch.
    pub fn response_time(&self) -> i64 {
        self.response_time
    }

    /// Response time if the process has been dispatched.
    pub fn first_response(&self) -> Option<i64> {
        (self.response_time != RESPONSE_UNSET).then_some(self.response_time)
    }
}
