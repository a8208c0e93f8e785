//! Level queues for MLFQ dispatching.
//!
//! Each ladder level owns one [`LevelQueue`]. The queue decides the order in
//! which its ready processes are handed to the dispatcher; the dispatcher
//! decides which level is served.
//!
//! # Usage
//!
//! ```
//! use u_mlfq::dispatching::{LevelQueue, TieBreaker};
//! use u_mlfq::models::{Algorithm, Process, ProcessId, ProcessSpec};
//!
//! let mut procs = vec![
//!     Process::new(ProcessSpec::new("long", 8, 0)),
//!     Process::new(ProcessSpec::new("short", 2, 0)),
//! ];
//! let mut queue = LevelQueue::new(1, Algorithm::Sjf).with_tie_breaker(TieBreaker::Arrival);
//! for (i, p) in procs.iter_mut().enumerate() {
//!     queue.enqueue(ProcessId(i), p);
//! }
//! assert_eq!(queue.dequeue_next(), Some(ProcessId(1)));
//! ```

mod queue;

pub use queue::{LevelQueue, TieBreaker};
