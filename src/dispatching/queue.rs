//! Per-level ready queue.
//!
//! One [`LevelQueue`] exists per ladder level. Ordering is encapsulated here
//! so the dispatcher can treat every level uniformly: dequeue the next
//! process, run it, then finalize it or hand it back.
//!
//! # Ordering
//!
//! | Algorithm | Order |
//! |-----------|-------|
//! | RR(q) | Strict FIFO |
//! | SJF | Ascending remaining burst, re-sorted on every insertion |
//! | STCF | Same as SJF (non-preemptive synonym) |
//!
//! Ties between equal remaining bursts are resolved by the queue's
//! [`TieBreaker`].

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::VecDeque;

use crate::models::{Algorithm, LevelConfig, Process, ProcessId};

/// How equal remaining bursts are ordered in SJF/STCF queues.
///
/// Round-robin queues ignore this setting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TieBreaker {
    /// Earlier arrival first, then insertion order.
    #[default]
    Arrival,
    /// Insertion order only.
    Insertion,
}

impl TieBreaker {
    fn compare(&self, a: &QueueEntry, b: &QueueEntry) -> Ordering {
        let primary = a.remaining.cmp(&b.remaining);
        match self {
            TieBreaker::Arrival => primary
                .then_with(|| a.arrival.cmp(&b.arrival))
                .then_with(|| a.seq.cmp(&b.seq)),
            TieBreaker::Insertion => primary.then_with(|| a.seq.cmp(&b.seq)),
        }
    }
}

/// Sort key captured at insertion.
///
/// A queued process is never run, so its remaining burst cannot change
/// while it sits in the queue.
#[derive(Debug, Clone, Copy)]
struct QueueEntry {
    id: ProcessId,
    remaining: i64,
    arrival: i64,
    seq: u64,
}

/// Ready queue for one ladder level.
///
/// Holds process handles only; it never owns process lifetime.
#[derive(Debug, Clone)]
pub struct LevelQueue {
    level: usize,
    algorithm: Algorithm,
    tie_breaker: TieBreaker,
    entries: VecDeque<QueueEntry>,
    next_seq: u64,
}

impl LevelQueue {
    /// Creates an empty queue.
    pub fn new(level: usize, algorithm: Algorithm) -> Self {
        Self {
            level,
            algorithm,
            tie_breaker: TieBreaker::default(),
            entries: VecDeque::new(),
            next_seq: 0,
        }
    }

    /// Creates an empty queue from a level configuration.
    pub fn from_config(config: &LevelConfig) -> Self {
        Self::new(config.level, config.algorithm)
    }

    /// Sets the tie-breaking policy.
    pub fn with_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    /// Adds a process to this level.
    ///
    /// Sets the process's current level, then inserts it at the FIFO tail
    /// (round-robin) or re-sorts by remaining burst (SJF/STCF).
    pub fn enqueue(&mut self, id: ProcessId, process: &mut Process) {
        process.set_current_level(self.level);

        let entry = QueueEntry {
            id,
            remaining: process.remaining_time(),
            arrival: process.arrival_time(),
            seq: self.next_seq,
        };
        self.next_seq += 1;
        self.entries.push_back(entry);

        if !self.algorithm.is_round_robin() {
            let tie_breaker = self.tie_breaker;
            self.entries
                .make_contiguous()
                .sort_by(|a, b| tie_breaker.compare(a, b));
        }
    }

    /// Hands a process back after an unfinished round-robin slice.
    ///
    /// Applies the same insertion rule as [`LevelQueue::enqueue`].
    pub fn requeue(&mut self, id: ProcessId, process: &mut Process) {
        self.enqueue(id, process);
    }

    /// Removes and returns the head of the queue.
    pub fn dequeue_next(&mut self) -> Option<ProcessId> {
        self.entries.pop_front().map(|e| e.id)
    }

    /// Handle at the head, without removing it.
    pub fn peek(&self) -> Option<ProcessId> {
        self.entries.front().map(|e| e.id)
    }

    /// Ordered copy of the current contents.
    pub fn snapshot(&self) -> Vec<ProcessId> {
        self.entries.iter().map(|e| e.id).collect()
    }

    /// Empties the queue. Processes are untouched.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.next_seq = 0;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Level number (1 = highest priority).
    pub fn level(&self) -> usize {
        self.level
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn tie_breaker(&self) -> TieBreaker {
        self.tie_breaker
    }

    /// Algorithm name as recorded in the execution history.
    pub fn name(&self) -> String {
        self.algorithm.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProcessSpec;

    fn arena(specs: &[(&str, i64, i64)]) -> Vec<Process> {
        specs
            .iter()
            .map(|&(label, burst, arrival)| Process::new(ProcessSpec::new(label, burst, arrival)))
            .collect()
    }

    fn fill(queue: &mut LevelQueue, processes: &mut [Process]) {
        for (i, p) in processes.iter_mut().enumerate() {
            queue.enqueue(ProcessId(i), p);
        }
    }

    #[test]
    fn test_round_robin_fifo() {
        let mut procs = arena(&[("A", 9, 0), ("B", 1, 0), ("C", 5, 0)]);
        let mut q = LevelQueue::new(1, Algorithm::RoundRobin(2));
        fill(&mut q, &mut procs);

        assert_eq!(q.snapshot(), vec![ProcessId(0), ProcessId(1), ProcessId(2)]);
        assert_eq!(q.dequeue_next(), Some(ProcessId(0)));
        assert_eq!(q.dequeue_next(), Some(ProcessId(1)));
        assert_eq!(q.len(), 1);
    }

    #[test]
    fn test_sjf_orders_by_remaining() {
        let mut procs = arena(&[("A", 9, 0), ("B", 1, 0), ("C", 5, 0)]);
        let mut q = LevelQueue::new(2, Algorithm::Sjf);
        fill(&mut q, &mut procs);

        assert_eq!(q.dequeue_next(), Some(ProcessId(1)));
        assert_eq!(q.dequeue_next(), Some(ProcessId(2)));
        assert_eq!(q.dequeue_next(), Some(ProcessId(0)));
        assert_eq!(q.dequeue_next(), None);
    }

    #[test]
    fn test_stcf_matches_sjf() {
        let mut procs = arena(&[("A", 4, 0), ("B", 2, 0), ("C", 3, 0)]);
        let mut sjf = LevelQueue::new(1, Algorithm::Sjf);
        let mut stcf = LevelQueue::new(1, Algorithm::Stcf);
        fill(&mut sjf, &mut procs);
        fill(&mut stcf, &mut procs);
        assert_eq!(sjf.snapshot(), stcf.snapshot());
    }

    #[test]
    fn test_enqueue_sets_current_level() {
        let mut procs = arena(&[("A", 3, 0)]);
        let mut q = LevelQueue::new(3, Algorithm::Stcf);
        q.enqueue(ProcessId(0), &mut procs[0]);
        assert_eq!(procs[0].current_level(), 3);
    }

    #[test]
    fn test_arrival_tie_breaker() {
        // Equal bursts: later-inserted but earlier-arriving B goes first
        let mut procs = arena(&[("A", 4, 5), ("B", 4, 1)]);
        let mut q = LevelQueue::new(1, Algorithm::Sjf);
        fill(&mut q, &mut procs);
        assert_eq!(q.peek(), Some(ProcessId(1)));
    }

    #[test]
    fn test_insertion_tie_breaker() {
        let mut procs = arena(&[("A", 4, 5), ("B", 4, 1)]);
        let mut q = LevelQueue::new(1, Algorithm::Sjf).with_tie_breaker(TieBreaker::Insertion);
        fill(&mut q, &mut procs);
        assert_eq!(q.peek(), Some(ProcessId(0)));
    }

    #[test]
    fn test_requeue_resorts_non_rr() {
        let mut procs = arena(&[("A", 6, 0), ("B", 3, 0)]);
        let mut q = LevelQueue::new(1, Algorithm::Sjf);
        q.enqueue(ProcessId(0), &mut procs[0]);
        q.requeue(ProcessId(1), &mut procs[1]);
        assert_eq!(q.snapshot(), vec![ProcessId(1), ProcessId(0)]);
    }

    #[test]
    fn test_requeue_rr_goes_to_tail() {
        let mut procs = arena(&[("A", 6, 0), ("B", 3, 0)]);
        let mut q = LevelQueue::new(1, Algorithm::RoundRobin(1));
        fill(&mut q, &mut procs);
        let head = q.dequeue_next().unwrap();
        q.requeue(head, &mut procs[head.index()]);
        assert_eq!(q.snapshot(), vec![ProcessId(1), ProcessId(0)]);
    }

    #[test]
    fn test_snapshot_is_non_destructive() {
        let mut procs = arena(&[("A", 2, 0), ("B", 1, 0)]);
        let mut q = LevelQueue::new(1, Algorithm::Sjf);
        fill(&mut q, &mut procs);
        let _ = q.snapshot();
        assert_eq!(q.len(), 2);
    }

    #[test]
    fn test_clear_leaves_processes() {
        let mut procs = arena(&[("A", 2, 0)]);
        let mut q = LevelQueue::new(1, Algorithm::RoundRobin(3));
        fill(&mut q, &mut procs);
        q.clear();
        assert!(q.is_empty());
        assert_eq!(q.dequeue_next(), None);
        assert_eq!(procs[0].remaining_time(), 2);
    }

    #[test]
    fn test_from_config_and_name() {
        let q = LevelQueue::from_config(&LevelConfig::round_robin(2, 4));
        assert_eq!(q.level(), 2);
        assert_eq!(q.name(), "RR(4)");
        assert_eq!(q.tie_breaker(), TieBreaker::Arrival);
    }
}
