//! Multi-level feedback queue (MLFQ) CPU scheduling simulator.
//!
//! Simulates a fixed, pre-known set of processes over a ladder of queue
//! levels, each bound to one algorithm (round-robin, SJF or STCF), and
//! derives per-process waiting, completion, response and turnaround times.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `ProcessSpec`, `Process`, `Ladder`,
//!   `Algorithm`, `ExecutionRecord`, `ExecutionHistory`
//! - **`dispatching`**: Per-level ready queues and their ordering policy
//! - **`scheduler`**: The MLFQ dispatcher, KPIs and observers
//! - **`validation`**: Input integrity checks (ranges, labels, ladder shape)
//! - **`workload`**: Text workload parsing and synthetic workloads
//! - **`report`**: Plain-text result rendering
//!
//! # Example
//!
//! ```
//! use u_mlfq::models::{LadderPreset, ProcessSpec};
//! use u_mlfq::scheduler::MlfqScheduler;
//!
//! let mut scheduler = MlfqScheduler::new()
//!     .with_ladder(&LadderPreset::A.ladder())
//!     .with_processes(vec![
//!         ProcessSpec::new("A", 6, 0),
//!         ProcessSpec::new("B", 2, 1).with_queue_level(2),
//!     ]);
//!
//! let kpi = scheduler.run().unwrap();
//! assert!(kpi.all_completed());
//! assert_eq!(scheduler.history().busy_time(), 8);
//! ```
//!
//! # References
//!
//! - Arpaci-Dusseau (2018), "Operating Systems: Three Easy Pieces", Ch. 7-8
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

pub mod dispatching;
pub mod error;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::SimulationError;
