//! MLFQ dispatcher, KPI evaluation and observers.
//!
//! # Algorithm
//!
//! `MlfqScheduler` admits arrivals at dispatch boundaries, serves the
//! highest non-empty level, runs one slice and then retires or demotes the
//! process. See [`MlfqScheduler`] for the full loop.
//!
//! # KPI
//!
//! `SimulationKpi` computes average waiting, completion, response and
//! turnaround times, plus makespan and CPU utilization.
//!
//! # References
//!
//! - Corbató et al. (1962), "An Experimental Time-Sharing System"
//! - Arpaci-Dusseau (2018), "Operating Systems: Three Easy Pieces", Ch. 8

mod kpi;
mod mlfq;
mod observer;

pub use kpi::SimulationKpi;
pub use mlfq::MlfqScheduler;
pub use observer::{
    EventRecorder, NoopObserver, SimulationEvent, SimulationObserver, TracingObserver,
};
