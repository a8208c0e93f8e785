//! Simulation performance indicators.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Waiting | mean(turnaround - burst) |
//! | Avg Completion | mean(completion tick) |
//! | Avg Response | mean(first dispatch - arrival) |
//! | Avg Turnaround | mean(completion - arrival) |
//! | Makespan | Latest completion tick |
//! | CPU Utilization | busy ticks / makespan |
//!
//! Averages are taken over every loaded process.

use serde::{Deserialize, Serialize};

use crate::models::{ExecutionHistory, Process};

/// Aggregate metrics of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationKpi {
    pub avg_waiting_time: f64,
    pub avg_completion_time: f64,
    pub avg_response_time: f64,
    pub avg_turnaround_time: f64,
    /// Latest completion tick.
    pub makespan: i64,
    /// Ticks spent running processes.
    pub busy_time: i64,
    /// busy_time / makespan (0.0..1.0), 0 when nothing ran.
    pub cpu_utilization: f64,
    pub completed_count: usize,
    pub process_count: usize,
}

impl SimulationKpi {
    /// Computes KPIs from processes and the execution history.
    ///
    /// Returns `None` for an empty process set.
    pub fn calculate(processes: &[Process], history: &ExecutionHistory) -> Option<Self> {
        if processes.is_empty() {
            return None;
        }

        let mut total_waiting: f64 = 0.0;
        let mut total_completion: f64 = 0.0;
        let mut total_response: f64 = 0.0;
        let mut total_turnaround: f64 = 0.0;
        let mut makespan: i64 = 0;
        let mut completed_count: usize = 0;

        for p in processes {
            total_waiting += p.waiting_time() as f64;
            total_completion += p.completion_time() as f64;
            total_response += p.response_time() as f64;
            total_turnaround += p.turnaround_time() as f64;
            makespan = makespan.max(p.completion_time());
            if p.is_completed() {
                completed_count += 1;
            }
        }

        let n = processes.len() as f64;
        let busy_time = history.busy_time();
        let cpu_utilization = if makespan == 0 {
            0.0
        } else {
            busy_time as f64 / makespan as f64
        };

        Some(Self {
            avg_waiting_time: total_waiting / n,
            avg_completion_time: total_completion / n,
            avg_response_time: total_response / n,
            avg_turnaround_time: total_turnaround / n,
            makespan,
            busy_time,
            cpu_utilization,
            completed_count,
            process_count: processes.len(),
        })
    }

    /// Whether every loaded process ran to completion.
    pub fn all_completed(&self) -> bool {
        self.completed_count == self.process_count
    }
}
