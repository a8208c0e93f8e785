//! End-to-end workflow: text workload in, reports and KPIs out.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use u_mlfq::models::{Algorithm, Ladder, LadderPreset, LevelConfig, ProcessSpec};
use u_mlfq::report::{history_report, results_table};
use u_mlfq::scheduler::{MlfqScheduler, SimulationKpi, TracingObserver};
use u_mlfq::validation::{validate_ladder, validate_placement, validate_processes};
use u_mlfq::workload::parse_workload;
use u_mlfq::SimulationError;

const WORKLOAD: &str = "\
# label;burst;arrival;queue_level;priority
A;8;0;1;1
B;4;1;1;2
C;9;2;2;1
D;5;3;3;3
bad;x;0;1;1
E;3;0;9;1
";

fn init_test_tracing() {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new("trace"))
        .with(tracing_subscriber::fmt::layer().compact().with_test_writer())
        .try_init();
}

#[test]
fn test_parse_validate_and_run() {
    let parsed = parse_workload(WORKLOAD);
    assert_eq!(parsed.processes.len(), 5);
    assert_eq!(parsed.warnings.len(), 1);
    assert!(validate_processes(&parsed.processes).is_ok());

    let ladder = LadderPreset::A.ladder();
    let placement = validate_placement(&parsed.processes, &ladder).unwrap_err();
    assert_eq!(placement.len(), 1);
    assert!(placement[0].message.contains("'E'"));

    let mut scheduler = MlfqScheduler::new()
        .with_ladder(&ladder)
        .with_processes(parsed.processes);
    let kpi = scheduler.run().unwrap();

    assert_eq!(kpi.process_count, 5);
    assert_eq!(kpi.completed_count, 4);
    assert_eq!(scheduler.dropped().len(), 1);
    assert_eq!(kpi.busy_time, 8 + 4 + 9 + 5);
    assert_eq!(kpi.makespan, 26);

    let table = results_table(scheduler.processes(), &kpi);
    assert!(table.lines().any(|l| l.starts_with("E;3;0;9;1;0;0;-1;0")));
    let history = history_report(scheduler.history(), &kpi);
    assert!(history.lines().nth(2).unwrap().starts_with("A;0;1;1;RR(1)"));
}

#[test]
fn test_tracing_observer_run() {
    init_test_tracing();

    let mut scheduler = MlfqScheduler::new()
        .with_ladder(&LadderPreset::B.ladder())
        .with_processes(vec![
            ProcessSpec::new("A", 7, 0),
            ProcessSpec::new("B", 3, 4).with_queue_level(2),
            ProcessSpec::new("late", 2, 30),
            ProcessSpec::new("lost", 1, 0).with_queue_level(7),
        ]);
    let traced = scheduler.run_with_observer(&mut TracingObserver).unwrap();
    let history = scheduler.history().clone();

    // Observing must not change the outcome
    let plain = scheduler.run().unwrap();
    assert_eq!(traced, plain);
    assert_eq!(&history, scheduler.history());
}

#[test]
fn test_compare_presets() {
    let parsed = parse_workload(WORKLOAD);
    let specs: Vec<ProcessSpec> = parsed
        .processes
        .into_iter()
        .filter(|p| p.queue_level <= 4)
        .collect();

    let mut scheduler = MlfqScheduler::new().with_processes(specs);
    let ladders: Vec<Ladder> = LadderPreset::ALL.iter().map(|p| p.ladder()).collect();
    let kpis = scheduler.evaluate_ladders(&ladders).unwrap();

    assert_eq!(kpis.len(), 3);
    for kpi in &kpis {
        assert!(kpi.all_completed());
        assert_eq!(kpi.busy_time, 26);
        assert!((kpi.cpu_utilization - 1.0).abs() < 1e-10);
    }
}

#[test]
fn test_ladder_json_config() {
    let json = r#"{
        "levels": [
            { "level": 1, "algorithm": { "RoundRobin": 2 } },
            { "level": 2, "algorithm": "Stcf" }
        ]
    }"#;
    let ladder: Ladder = serde_json::from_str(json).unwrap();
    assert_eq!(
        ladder,
        Ladder::from_levels(vec![
            LevelConfig::round_robin(1, 2),
            LevelConfig::new(2, Algorithm::Stcf),
        ])
    );
    assert!(validate_ladder(&ladder).is_ok());

    let encoded = serde_json::to_string(&LadderPreset::C.ladder()).unwrap();
    let decoded: Ladder = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, LadderPreset::C.ladder());
}

#[test]
fn test_process_json_config() {
    let json = r#"[
        { "label": "A", "burst_time": 5, "arrival_time": 0, "queue_level": 1, "priority": 1 },
        { "label": "B", "burst_time": 3, "arrival_time": 1, "queue_level": 1, "priority": 2 }
    ]"#;
    let specs: Vec<ProcessSpec> = serde_json::from_str(json).unwrap();
    let mut scheduler = MlfqScheduler::new()
        .with_ladder(&Ladder::new().with_round_robin(2))
        .with_processes(specs);
    let kpi = scheduler.run().unwrap();

    let encoded = serde_json::to_string(&kpi).unwrap();
    let decoded: SimulationKpi = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, kpi);
    assert!((kpi.avg_waiting_time - 3.0).abs() < 1e-10);
}

#[test]
fn test_configuration_errors() {
    let mut empty = MlfqScheduler::new();
    assert_eq!(empty.run(), Err(SimulationError::NoLevels));

    let mut no_procs = MlfqScheduler::new().with_ladder(&LadderPreset::A.ladder());
    let err = no_procs.run().unwrap_err();
    assert_eq!(err.to_string(), "no processes loaded");
}
