//! Seeded synthetic workloads.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::ProcessSpec;

/// Generates random, valid process descriptors.
///
/// The same configuration and seed always yield the same workload.
///
/// # Example
///
/// ```
/// use u_mlfq::workload::WorkloadGenerator;
///
/// let procs = WorkloadGenerator::new(5).with_levels(4).generate(42);
/// assert_eq!(procs.len(), 5);
/// assert!(procs.iter().all(|p| p.burst_time >= 1 && p.queue_level <= 4));
/// ```
#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    /// Number of processes.
    pub count: usize,
    /// Bursts are drawn from `1..=max_burst`.
    pub max_burst: i64,
    /// Arrivals are drawn from `0..=max_arrival`.
    pub max_arrival: i64,
    /// Initial levels are drawn from `1..=levels`.
    pub levels: usize,
    /// Priorities are drawn from `1..=max_priority`.
    pub max_priority: i32,
}

impl WorkloadGenerator {
    /// Creates a generator for `count` processes on a single level.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            max_burst: 10,
            max_arrival: 20,
            levels: 1,
            max_priority: 5,
        }
    }

    pub fn with_max_burst(mut self, max_burst: i64) -> Self {
        self.max_burst = max_burst.max(1);
        self
    }

    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival.max(0);
        self
    }

    pub fn with_levels(mut self, levels: usize) -> Self {
        self.levels = levels.max(1);
        self
    }

    pub fn with_max_priority(mut self, max_priority: i32) -> Self {
        self.max_priority = max_priority.max(1);
        self
    }

    /// Generates a workload from a seed. Labels are `P1..Pn`.
    pub fn generate(&self, seed: u64) -> Vec<ProcessSpec> {
        let mut rng = StdRng::seed_from_u64(seed);
        self.generate_with(&mut rng)
    }

    /// Generates a workload from a caller-supplied RNG.
    pub fn generate_with<R: Rng>(&self, rng: &mut R) -> Vec<ProcessSpec> {
        (1..=self.count)
            .map(|n| {
                ProcessSpec::new(
                    format!("P{n}"),
                    rng.random_range(1..=self.max_burst),
                    rng.random_range(0..=self.max_arrival),
                )
                .with_queue_level(rng.random_range(1..=self.levels))
                .with_priority(rng.random_range(1..=self.max_priority))
            })
            .collect()
    }
}
