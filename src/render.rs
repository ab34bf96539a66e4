/*!
 * Report Rendering
 * Text Gantt chart and statistics table for a finished run
 */

use crate::scheduler::{GanttEvent, SimOutcome, Summary};

/// Two-row Gantt chart: labels between `|` separators, each event's tick
/// aligned under the start of its label cell.
pub fn gantt_chart(events: &[GanttEvent]) -> String {
    let mut row_labels = String::new();
    let mut row_ticks = String::new();
    for event in events {
        let col = row_labels.len();
        while row_ticks.len() < col {
            row_ticks.push(' ');
        }
        row_ticks.push_str(&event.time.to_string());
        row_labels.push_str(&format!("| {} ", event.label));
    }
    row_labels.push('|');
    format!("{row_labels}\n{row_ticks}\n")
}

/// Per-process statistics table followed by averages and utilization
pub fn statistics_table(outcome: &SimOutcome) -> String {
    let summary = Summary::from_outcome(outcome);
    let mut out = String::new();

    out.push_str("--- Process Statistics ---\n");
    out.push_str(&format!(
        "{:<5}{:<15}{:<18}{:<15}\n",
        "PID", "Waiting Time", "Turnaround Time", "Response Time"
    ));
    for p in &outcome.processes {
        let response = p
            .response_time
            .map_or_else(|| "-".to_string(), |r| r.to_string());
        out.push_str(&format!(
            "{:<5}{:<15}{:<18}{:<15}\n",
            p.id, p.waiting_time, p.turnaround_time, response
        ));
    }

    out.push_str("\n--- Averages & Utilization ---\n");
    out.push_str(&format!(
        "Average Waiting Time: {:.2}\n",
        summary.avg_waiting_time
    ));
    out.push_str(&format!(
        "Average Turnaround Time: {:.2}\n",
        summary.avg_turnaround_time
    ));
    out.push_str(&format!(
        "Average Response Time: {:.2}\n",
        summary.avg_response_time
    ));
    out.push_str(&format!("CPU Utilization: {:.2}%\n", summary.cpu_utilization));
    out
}

/// Full text report: chart plus statistics
pub fn report(outcome: &SimOutcome) -> String {
    format!(
        "--- Gantt Chart ---\n{}\n{}",
        gantt_chart(outcome.timeline.events()),
        statistics_table(outcome)
    )
}
