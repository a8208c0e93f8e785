//! Multi-level feedback queue dispatcher.
//!
//! # Algorithm
//!
//! Repeats until the arrival backlog and every level queue are empty:
//!
//! 1. Admit every backlog process whose arrival time has been reached into
//!    the queue of its initial level. Processes whose level is not on the
//!    ladder are dropped.
//! 2. Scan levels from 1 downward; the first non-empty level yields the next
//!    process. If all levels are empty, advance the clock one idle tick.
//! 3. Stamp the response time on first dispatch, then run one slice:
//!    - RR(q): `min(q, remaining)` ticks. An unfinished process is demoted
//!      one level, or resubmitted to the bottom level if already there.
//!    - SJF/STCF: the whole remaining burst. No preemption, no demotion.
//! 4. Append one execution record for the slice.
//!
//! Arrivals during a slice are admitted only at the next dispatch boundary.
//! There is no aging: a process only ever moves to an equal or lower level.
//!
//! # Reference
//! Corbató et al. (1962), "An Experimental Time-Sharing System"

use std::collections::VecDeque;

use tracing::{debug, info, warn};

use super::kpi::SimulationKpi;
use super::observer::{NoopObserver, SimulationObserver};
use crate::dispatching::{LevelQueue, TieBreaker};
use crate::error::SimulationError;
use crate::models::{Algorithm, ExecutionHistory, ExecutionRecord, Ladder, Process, ProcessId, ProcessSpec};
use crate::validation::validate_ladder;

/// MLFQ dispatcher.
///
/// Owns the process arena, the level queues, the arrival backlog, the
/// execution history and the simulation clock. Queues and the backlog hold
/// [`ProcessId`] handles into the arena.
///
/// # Example
///
/// ```
/// use u_mlfq::models::{Ladder, ProcessSpec};
/// use u_mlfq::scheduler::MlfqScheduler;
///
/// let mut scheduler = MlfqScheduler::new()
///     .with_ladder(&Ladder::new().with_round_robin(2))
///     .with_processes(vec![ProcessSpec::new("A", 5, 0), ProcessSpec::new("B", 3, 1)]);
///
/// let kpi = scheduler.run().unwrap();
/// assert_eq!(scheduler.clock(), 8);
/// assert!((kpi.avg_turnaround_time - 7.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MlfqScheduler {
    ladder: Ladder,
    queues: Vec<LevelQueue>,
    processes: Vec<Process>,
    arrivals: VecDeque<ProcessId>,
    dropped: Vec<ProcessId>,
    history: ExecutionHistory,
    clock: i64,
    tie_breaker: TieBreaker,
    kpi: Option<SimulationKpi>,
}

impl MlfqScheduler {
    /// Creates a scheduler with no levels and no processes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the SJF/STCF tie-breaking policy for all levels.
    pub fn with_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        let ladder = std::mem::take(&mut self.ladder);
        self.configure_levels(&ladder);
        self
    }

    /// Configures the ladder.
    pub fn with_ladder(mut self, ladder: &Ladder) -> Self {
        self.configure_levels(ladder);
        self
    }

    /// Loads processes.
    pub fn with_processes(mut self, processes: impl IntoIterator<Item = ProcessSpec>) -> Self {
        self.load_processes(processes);
        self
    }

    /// Replaces the level queues with fresh ones built from `ladder`.
    ///
    /// Drops any in-flight queue placement; process runtime state is
    /// left as is.
    pub fn configure_levels(&mut self, ladder: &Ladder) {
        self.queues = ladder
            .levels
            .iter()
            .map(|config| LevelQueue::from_config(config).with_tie_breaker(self.tie_breaker))
            .collect();
        self.ladder = ladder.clone();
        debug!(levels = self.queues.len(), ladder = %ladder.describe(), "levels configured");
    }

    /// Appends processes to the simulation set without queueing them.
    ///
    /// Returns the handles of the new processes in input order.
    pub fn load_processes(
        &mut self,
        processes: impl IntoIterator<Item = ProcessSpec>,
    ) -> Vec<ProcessId> {
        let ids: Vec<ProcessId> = processes
            .into_iter()
            .map(|spec| {
                let id = ProcessId(self.processes.len());
                self.processes.push(Process::new(spec));
                id
            })
            .collect();
        debug!(added = ids.len(), total = self.processes.len(), "processes loaded");
        ids
    }

    /// Restores the clock, history, queues, backlog and every process to
    /// their initial state. Levels and loaded processes are kept.
    pub fn reset(&mut self) {
        self.clock = 0;
        self.history.clear();
        for process in &mut self.processes {
            process.reset();
        }
        for queue in &mut self.queues {
            queue.clear();
        }
        self.arrivals.clear();
        self.dropped.clear();
        self.kpi = None;
    }

    /// Runs the full simulation.
    ///
    /// Runtime state is reset first, so repeated runs are idempotent.
    ///
    /// # Errors
    /// [`SimulationError`] if no levels are configured, no processes are
    /// loaded, or the ladder is invalid. Nothing is simulated in that case.
    pub fn run(&mut self) -> Result<SimulationKpi, SimulationError> {
        self.run_with_observer(&mut NoopObserver)
    }

    /// Runs the full simulation, reporting each step to `observer`.
    pub fn run_with_observer(
        &mut self,
        observer: &mut dyn SimulationObserver,
    ) -> Result<SimulationKpi, SimulationError> {
        self.check_ready()?;
        self.reset();

        let mut order: Vec<ProcessId> = (0..self.processes.len()).map(ProcessId).collect();
        // Stable: equal arrivals keep load order
        order.sort_by_key(|id| self.processes[id.index()].arrival_time());
        self.arrivals = order.into();

        info!(
            processes = self.processes.len(),
            levels = self.queues.len(),
            ladder = %self.ladder.describe(),
            "simulation started"
        );

        while !self.arrivals.is_empty() || !self.all_queues_empty() {
            observer.on_tick(self.clock, &self.queues, &self.processes);
            self.admit_arrivals(observer);

            match self.select_next() {
                Some((queue_idx, id)) => self.execute(queue_idx, id, observer),
                None => {
                    observer.on_idle(self.clock);
                    self.clock += 1;
                }
            }
        }

        let kpi = SimulationKpi::calculate(&self.processes, &self.history)
            .ok_or(SimulationError::NoProcesses)?;
        info!(
            clock = self.clock,
            slices = self.history.len(),
            dropped = self.dropped.len(),
            avg_waiting = kpi.avg_waiting_time,
            avg_turnaround = kpi.avg_turnaround_time,
            "simulation finished"
        );
        self.kpi = Some(kpi.clone());
        Ok(kpi)
    }

    /// Runs the loaded processes under each ladder in turn.
    ///
    /// Returns one KPI set per ladder; the last ladder stays configured.
    pub fn evaluate_ladders(
        &mut self,
        ladders: &[Ladder],
    ) -> Result<Vec<SimulationKpi>, SimulationError> {
        ladders
            .iter()
            .map(|ladder| {
                self.configure_levels(ladder);
                self.run()
            })
            .collect()
    }

    fn check_ready(&self) -> Result<(), SimulationError> {
        if self.queues.is_empty() {
            return Err(SimulationError::NoLevels);
        }
        if self.processes.is_empty() {
            return Err(SimulationError::NoProcesses);
        }
        validate_ladder(&self.ladder).map_err(|errors| {
            SimulationError::InvalidLadder(
                errors
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("; "),
            )
        })
    }

    fn admit_arrivals(&mut self, observer: &mut dyn SimulationObserver) {
        while let Some(&id) = self.arrivals.front() {
            if self.processes[id.index()].arrival_time() > self.clock {
                break;
            }
            self.arrivals.pop_front();

            let level = self.processes[id.index()].queue_level();
            match self.queues.iter().position(|q| q.level() == level) {
                Some(queue_idx) => {
                    self.queues[queue_idx].enqueue(id, &mut self.processes[id.index()]);
                    observer.on_admit(self.clock, id, &self.processes[id.index()], level);
                }
                None => {
                    let process = &self.processes[id.index()];
                    warn!(
                        process = process.label(),
                        level,
                        levels = self.queues.len(),
                        "initial level outside ladder, process excluded"
                    );
                    self.dropped.push(id);
                    observer.on_drop(self.clock, id, process);
                }
            }
        }
    }

    fn select_next(&mut self) -> Option<(usize, ProcessId)> {
        self.queues
            .iter_mut()
            .enumerate()
            .find_map(|(queue_idx, queue)| queue.dequeue_next().map(|id| (queue_idx, id)))
    }

    fn execute(
        &mut self,
        queue_idx: usize,
        id: ProcessId,
        observer: &mut dyn SimulationObserver,
    ) {
        let level = self.queues[queue_idx].level();
        let algorithm = self.queues[queue_idx].algorithm();
        let start = self.clock;

        let process = &mut self.processes[id.index()];
        process.record_first_dispatch(start);
        observer.on_dispatch(start, id, process, level);

        // Unvalidated zero or negative bursts complete in an empty slice
        let slice = match algorithm {
            Algorithm::RoundRobin(quantum) => quantum.min(process.remaining_time()),
            Algorithm::Sjf | Algorithm::Stcf => process.remaining_time(),
        }
        .max(0);

        process.run(slice);
        self.clock += slice;

        let record = ExecutionRecord::new(
            process.label(),
            start,
            self.clock,
            level,
            algorithm.to_string(),
        );

        if process.is_completed() {
            process.set_completion_time(self.clock);
            process.compute_derived_times();
            observer.on_complete(id, process, &record);
        } else {
            // Only round-robin slices can leave work behind
            let target = if queue_idx + 1 < self.queues.len() {
                self.queues[queue_idx + 1].enqueue(id, process);
                queue_idx + 1
            } else {
                self.queues[queue_idx].requeue(id, process);
                queue_idx
            };
            observer.on_demote(id, process, level, self.queues[target].level());
        }

        self.history.push(record);
    }

    /// Whether every level queue is empty.
    pub fn all_queues_empty(&self) -> bool {
        self.queues.iter().all(LevelQueue::is_empty)
    }

    /// Current simulation tick.
    pub fn clock(&self) -> i64 {
        self.clock
    }

    /// All loaded processes, in load order.
    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    pub fn process(&self, id: ProcessId) -> Option<&Process> {
        self.processes.get(id.index())
    }

    /// Looks up a process by label.
    pub fn find(&self, label: &str) -> Option<&Process> {
        self.processes.iter().find(|p| p.label() == label)
    }

    /// Execution history of the last run.
    pub fn history(&self) -> &ExecutionHistory {
        &self.history
    }

    /// Level queues in priority order.
    pub fn levels(&self) -> &[LevelQueue] {
        &self.queues
    }

    /// Configured ladder.
    pub fn ladder(&self) -> &Ladder {
        &self.ladder
    }

    /// Ordered contents of one level's queue.
    pub fn queue_snapshot(&self, level: usize) -> Option<Vec<ProcessId>> {
        self.queues
            .iter()
            .find(|q| q.level() == level)
            .map(LevelQueue::snapshot)
    }

    /// Processes excluded at admission in the last run.
    pub fn dropped(&self) -> &[ProcessId] {
        &self.dropped
    }

    /// KPIs of the last successful run.
    pub fn kpi(&self) -> Option<&SimulationKpi> {
        self.kpi.as_ref()
    }

    pub fn tie_breaker(&self) -> TieBreaker {
        self.tie_breaker
    }
}
