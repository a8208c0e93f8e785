//! Invariant checks over seeded random workloads.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_mlfq::models::{Ladder, LadderPreset, ProcessSpec};
use u_mlfq::scheduler::{EventRecorder, MlfqScheduler, SimulationEvent};
use u_mlfq::workload::WorkloadGenerator;

fn ladders() -> Vec<Ladder> {
    let mut ladders: Vec<Ladder> = LadderPreset::ALL.iter().map(|p| p.ladder()).collect();
    ladders.push(Ladder::new().with_round_robin(2));
    ladders.push(Ladder::new().with_stcf());
    ladders.push(Ladder::new().with_round_robin(1).with_sjf().with_round_robin(3));
    ladders
}

fn workloads() -> Vec<Vec<ProcessSpec>> {
    (0..20u64)
        .map(|seed| {
            WorkloadGenerator::new(3 + (seed as usize % 10))
                .with_levels(4)
                .with_max_burst(12)
                .with_max_arrival(25)
                .generate(seed)
        })
        .collect()
}

/// Clamps generated levels onto the ladder so every process is scheduled.
fn fit_to(ladder: &Ladder, specs: &[ProcessSpec]) -> Vec<ProcessSpec> {
    specs
        .iter()
        .cloned()
        .map(|s| {
            let level = s.queue_level.min(ladder.len());
            s.with_queue_level(level)
        })
        .collect()
}

#[test]
fn test_derived_time_identities() {
    for ladder in ladders() {
        for specs in workloads() {
            let mut s = MlfqScheduler::new()
                .with_ladder(&ladder)
                .with_processes(fit_to(&ladder, &specs));
            s.run().unwrap();

            for p in s.processes() {
                assert!(p.is_completed(), "{} did not complete", p.label());
                assert_eq!(p.remaining_time(), 0);
                assert_eq!(p.turnaround_time(), p.completion_time() - p.arrival_time());
                assert_eq!(p.waiting_time(), p.turnaround_time() - p.burst_time());
                assert!(p.response_time() >= 0);
                assert!(p.response_time() <= p.waiting_time());
            }
        }
    }
}

#[test]
fn test_slices_sum_to_burst() {
    for ladder in ladders() {
        for specs in workloads() {
            let mut s = MlfqScheduler::new()
                .with_ladder(&ladder)
                .with_processes(fit_to(&ladder, &specs));
            s.run().unwrap();

            for p in s.processes() {
                assert_eq!(s.history().time_for(p.label()), p.burst_time());
            }
            // Slices never overlap and follow the clock
            for pair in s.history().records().windows(2) {
                assert!(pair[0].end <= pair[1].start);
            }
        }
    }
}

#[test]
fn test_response_matches_first_slice() {
    for specs in workloads() {
        let ladder = LadderPreset::B.ladder();
        let mut s = MlfqScheduler::new()
            .with_ladder(&ladder)
            .with_processes(fit_to(&ladder, &specs));
        s.run().unwrap();

        for p in s.processes() {
            let first = s
                .history()
                .records_for(p.label())
                .next()
                .map(|r| r.start)
                .unwrap();
            assert_eq!(p.response_time(), first - p.arrival_time());
        }
    }
}

#[test]
fn test_demotion_moves_one_level_down() {
    for ladder in ladders() {
        let bottom = ladder.len();
        for specs in workloads() {
            let mut s = MlfqScheduler::new()
                .with_ladder(&ladder)
                .with_processes(fit_to(&ladder, &specs));
            let mut recorder = EventRecorder::new();
            s.run_with_observer(&mut recorder).unwrap();

            for event in recorder.events() {
                if let SimulationEvent::Demoted { from, to, .. } = *event {
                    if from == bottom {
                        assert_eq!(to, bottom);
                    } else {
                        assert_eq!(to, from + 1);
                    }
                }
            }
        }
    }
}

#[test]
fn test_non_rr_levels_never_demote() {
    for specs in workloads() {
        let ladder = Ladder::new().with_sjf().with_stcf();
        let mut s = MlfqScheduler::new()
            .with_ladder(&ladder)
            .with_processes(fit_to(&ladder, &specs));
        let mut recorder = EventRecorder::new();
        s.run_with_observer(&mut recorder).unwrap();

        assert!(!recorder
            .events()
            .iter()
            .any(|e| matches!(e, SimulationEvent::Demoted { .. })));
        assert_eq!(s.history().len(), s.processes().len());
    }
}

#[test]
fn test_rerun_is_identical() {
    let mut rng = StdRng::seed_from_u64(2024);
    for ladder in ladders() {
        let seed = rng.random::<u64>();
        let specs = WorkloadGenerator::new(12).with_levels(ladder.len()).generate(seed);
        let mut s = MlfqScheduler::new().with_ladder(&ladder).with_processes(specs);

        let first = s.run().unwrap();
        let first_history = s.history().clone();
        s.reset();
        let second = s.run().unwrap();

        assert_eq!(first, second);
        assert_eq!(&first_history, s.history());
    }
}

#[test]
fn test_no_preemption_by_higher_level_arrival() {
    // A slice, once started, always runs its full length
    for specs in workloads() {
        let ladder = LadderPreset::C.ladder();
        let mut s = MlfqScheduler::new()
            .with_ladder(&ladder)
            .with_processes(fit_to(&ladder, &specs));
        s.run().unwrap();

        for r in s.history().records() {
            let quantum = ladder.levels[r.level - 1].algorithm.quantum().unwrap();
            assert!(r.duration() <= quantum);
            assert!(r.duration() > 0);
        }
    }
}
