//! Simulation observers.
//!
//! The dispatcher never prints. Tick-level detail is reported through a
//! [`SimulationObserver`] invoked at fixed points of the loop: tick start,
//! admission, drop, dispatch, demotion, completion and idle ticks.
//!
//! - [`NoopObserver`]: ignores everything.
//! - [`EventRecorder`]: collects [`SimulationEvent`]s for inspection.
//! - [`TracingObserver`]: forwards events to `tracing`.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::dispatching::LevelQueue;
use crate::models::{ExecutionRecord, Process, ProcessId};

/// Callbacks invoked by the dispatcher. All methods default to no-ops.
pub trait SimulationObserver {
    /// Start of a loop iteration, before admission.
    fn on_tick(&mut self, _clock: i64, _queues: &[LevelQueue], _processes: &[Process]) {}

    /// A process was admitted into a level queue.
    fn on_admit(&mut self, _clock: i64, _id: ProcessId, _process: &Process, _level: usize) {}

    /// A process was excluded because its initial level is outside the ladder.
    fn on_drop(&mut self, _clock: i64, _id: ProcessId, _process: &Process) {}

    /// A process was selected to run at `level`.
    fn on_dispatch(&mut self, _clock: i64, _id: ProcessId, _process: &Process, _level: usize) {}

    /// An unfinished round-robin process moved from `from` to `to`.
    ///
    /// `from == to` when the process was already on the bottom level.
    fn on_demote(&mut self, _id: ProcessId, _process: &Process, _from: usize, _to: usize) {}

    /// A process finished during the slice described by `record`.
    fn on_complete(&mut self, _id: ProcessId, _process: &Process, _record: &ExecutionRecord) {}

    /// No level had work; the clock advanced by one tick.
    fn on_idle(&mut self, _clock: i64) {}
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SimulationObserver for NoopObserver {}

/// Event captured by [`EventRecorder`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimulationEvent {
    Admitted {
        clock: i64,
        id: ProcessId,
        level: usize,
    },
    Dropped {
        clock: i64,
        id: ProcessId,
    },
    Dispatched {
        clock: i64,
        id: ProcessId,
        level: usize,
    },
    Demoted {
        id: ProcessId,
        from: usize,
        to: usize,
    },
    Completed {
        clock: i64,
        id: ProcessId,
    },
    Idle {
        clock: i64,
    },
}

/// Observer that records events in order.
#[derive(Debug, Clone, Default)]
pub struct EventRecorder {
    events: Vec<SimulationEvent>,
    ticks: usize,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[SimulationEvent] {
        &self.events
    }

    /// Number of loop iterations observed.
    pub fn ticks(&self) -> usize {
        self.ticks
    }

    pub fn into_events(self) -> Vec<SimulationEvent> {
        self.events
    }
}

impl SimulationObserver for EventRecorder {
    fn on_tick(&mut self, _clock: i64, _queues: &[LevelQueue], _processes: &[Process]) {
        self.ticks += 1;
    }

    fn on_admit(&mut self, clock: i64, id: ProcessId, _process: &Process, level: usize) {
        self.events
            .push(SimulationEvent::Admitted { clock, id, level });
    }

    fn on_drop(&mut self, clock: i64, id: ProcessId, _process: &Process) {
        self.events.push(SimulationEvent::Dropped { clock, id });
    }

    fn on_dispatch(&mut self, clock: i64, id: ProcessId, _process: &Process, level: usize) {
        self.events
            .push(SimulationEvent::Dispatched { clock, id, level });
    }

    fn on_demote(&mut self, id: ProcessId, _process: &Process, from: usize, to: usize) {
        self.events.push(SimulationEvent::Demoted { id, from, to });
    }

    fn on_complete(&mut self, id: ProcessId, _process: &Process, record: &ExecutionRecord) {
        self.events.push(SimulationEvent::Completed {
            clock: record.end,
            id,
        });
    }

    fn on_idle(&mut self, clock: i64) {
        self.events.push(SimulationEvent::Idle { clock });
    }
}

/// Observer that logs every event through `tracing`.
///
/// Queue contents are logged at `trace` level on every tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl SimulationObserver for TracingObserver {
    fn on_tick(&mut self, clock: i64, queues: &[LevelQueue], processes: &[Process]) {
        for queue in queues {
            let contents = queue
                .snapshot()
                .iter()
                .filter_map(|id| processes.get(id.index()))
                .map(|p| format!("{}({})", p.label(), p.remaining_time()))
                .collect::<Vec<_>>()
                .join(" ");
            trace!(
                clock,
                level = queue.level(),
                algorithm = %queue.algorithm(),
                contents = %contents,
                "queue state"
            );
        }
    }

    fn on_admit(&mut self, clock: i64, _id: ProcessId, process: &Process, level: usize) {
        debug!(clock, process = process.label(), level, "process admitted");
    }

    fn on_drop(&mut self, clock: i64, _id: ProcessId, process: &Process) {
        debug!(
            clock,
            process = process.label(),
            level = process.queue_level(),
            "process dropped: initial level outside ladder"
        );
    }

    fn on_dispatch(&mut self, clock: i64, _id: ProcessId, process: &Process, level: usize) {
        debug!(
            clock,
            process = process.label(),
            level,
            remaining = process.remaining_time(),
            "process dispatched"
        );
    }

    fn on_demote(&mut self, _id: ProcessId, process: &Process, from: usize, to: usize) {
        debug!(process = process.label(), from, to, "quantum expired");
    }

    fn on_complete(&mut self, _id: ProcessId, process: &Process, record: &ExecutionRecord) {
        debug!(
            clock = record.end,
            process = process.label(),
            algorithm = %record.algorithm,
            "process completed"
        );
    }

    fn on_idle(&mut self, clock: i64) {
        trace!(clock, "idle tick");
    }
}
