//! Plain-text result reports.
//!
//! Renders simulation output in the same semicolon-delimited style as the
//! workload format. Rendering only; writing files is left to the caller.
//!
//! # Formats
//!
//! | Report | Columns |
//! |--------|---------|
//! | Results table | label;BT;AT;Q;Pr;WT;CT;RT;TAT |
//! | History report | process;start;end;level;algorithm |

use std::fmt::Write;

use crate::models::{ExecutionHistory, Process};
use crate::scheduler::SimulationKpi;

/// Per-process results followed by the four averages.
pub fn results_table(processes: &[Process], kpi: &SimulationKpi) -> String {
    let mut out = String::new();
    out.push_str("# MLFQ simulation results\n");
    out.push_str("label;BT;AT;Q;Pr;WT;CT;RT;TAT\n");

    for p in processes {
        let _ = writeln!(
            out,
            "{};{};{};{};{};{};{};{};{}",
            p.label(),
            p.burst_time(),
            p.arrival_time(),
            p.queue_level(),
            p.priority(),
            p.waiting_time(),
            p.completion_time(),
            p.response_time(),
            p.turnaround_time()
        );
    }

    out.push_str("\n# AVERAGES\n");
    let _ = writeln!(out, "# Waiting Time (WT): {:.2}", kpi.avg_waiting_time);
    let _ = writeln!(out, "# Completion Time (CT): {:.2}", kpi.avg_completion_time);
    let _ = writeln!(out, "# Response Time (RT): {:.2}", kpi.avg_response_time);
    let _ = writeln!(out, "# Turnaround Time (TAT): {:.2}", kpi.avg_turnaround_time);
    out
}

/// Execution history followed by the four averages.
pub fn history_report(history: &ExecutionHistory, kpi: &SimulationKpi) -> String {
    let mut out = String::new();
    out.push_str("# MLFQ execution history\n");
    out.push_str("process;start;end;level;algorithm\n");

    for r in history.records() {
        let _ = writeln!(
            out,
            "{};{};{};{};{}",
            r.label, r.start, r.end, r.level, r.algorithm
        );
    }

    out.push_str("\n# Average metrics\n");
    let _ = writeln!(out, "avg_wt;{:.2}", kpi.avg_waiting_time);
    let _ = writeln!(out, "avg_ct;{:.2}", kpi.avg_completion_time);
    let _ = writeln!(out, "avg_rt;{:.2}", kpi.avg_response_time);
    let _ = writeln!(out, "avg_tat;{:.2}", kpi.avg_turnaround_time);
    out
}

/// Derives an output file name by inserting `suffix` before the extension.
///
/// `procs.txt` + `_A` gives `procs_A.txt`; `procs` + `_A` gives `procs_A.txt`.
pub fn output_file_name(input: &str, suffix: &str) -> String {
    let name_start = input.rfind(&['/', '\\'][..]).map_or(0, |i| i + 1);
    match input[name_start..].rfind('.') {
        Some(dot) if dot > 0 => {
            let dot = name_start + dot;
            format!("{}{}{}", &input[..dot], suffix, &input[dot..])
        }
        _ => format!("{input}{suffix}.txt"),
    }
}
