/*!
 * Multi-Level Scheduler Tests
 * Absolute RR priority, quantum requeueing, and switch-identity charging
 */

use pretty_assertions::assert_eq;
use sched_sim::workload::multi_level_processes;
use sched_sim::{
    GanttLabel, MultiLevelParams, MultiLevelScheduler, MultiLevelSpec, Process, QueueClass,
    SimOutcome, Tick,
};

fn fg(arrival_time: Tick, b1: Tick, io: Tick, b2: Tick) -> MultiLevelSpec {
    MultiLevelSpec {
        arrival_time,
        class: QueueClass::Foreground,
        cpu_burst_1: b1,
        io_burst: io,
        cpu_burst_2: b2,
    }
}

fn bg(arrival_time: Tick, b1: Tick, io: Tick, b2: Tick) -> MultiLevelSpec {
    MultiLevelSpec {
        arrival_time,
        class: QueueClass::Background,
        cpu_burst_1: b1,
        io_burst: io,
        cpu_burst_2: b2,
    }
}

fn run(rr_quantum: Tick, context_switch_ticks: Tick, specs: &[MultiLevelSpec]) -> SimOutcome {
    let table = multi_level_processes(specs).expect("valid workload");
    MultiLevelScheduler::new(
        MultiLevelParams {
            rr_quantum,
            context_switch_ticks,
        },
        table,
    )
    .run()
}

fn by_id(outcome: &SimOutcome, id: u32) -> &Process {
    outcome
        .processes
        .iter()
        .find(|p| p.id == id)
        .expect("process id")
}

fn labels(outcome: &SimOutcome) -> Vec<String> {
    outcome
        .timeline
        .events()
        .iter()
        .map(|e| e.label.to_string())
        .collect()
}

fn times(outcome: &SimOutcome) -> Vec<Tick> {
    outcome.timeline.events().iter().map(|e| e.time).collect()
}

/// Tick index of the first/last run label for a pid, from the event trace
fn run_span(outcome: &SimOutcome, id: u32) -> (usize, usize) {
    let positions: Vec<usize> = outcome
        .timeline
        .events()
        .iter()
        .enumerate()
        .filter(|(_, e)| e.label == GanttLabel::Run(id))
        .map(|(i, _)| i)
        .collect();
    (
        *positions.first().expect("ran at least once"),
        *positions.last().expect("ran at least once"),
    )
}

#[test]
fn foreground_runs_in_quantum_slices_and_background_waits_for_it() {
    let outcome = run(2, 0, &[fg(0, 5, 0, 0), bg(0, 3, 0, 0)]);

    // Consecutive requeue-to-self slices coalesce into one unbroken
    // foreground segment; background starts only after it completes.
    let foreground = by_id(&outcome, 1);
    assert_eq!(foreground.completion_time, 5);
    assert_eq!(foreground.response_time, Some(0));
    assert_eq!(foreground.waiting_time, 0);

    let background = by_id(&outcome, 2);
    assert_eq!(background.completion_time, 8);
    assert_eq!(background.response_time, Some(5));

    let (_, fg_last) = run_span(&outcome, 1);
    let (bg_first, _) = run_span(&outcome, 2);
    assert!(fg_last < bg_first);

    assert_eq!(labels(&outcome), ["Start", "CS", "P1", "CS", "P2", "End"]);
    assert_eq!(times(&outcome), [0, 0, 0, 5, 5, 8]);
    assert_eq!(outcome.total_cpu_busy_ticks, 8);
    assert_eq!(outcome.total_elapsed_ticks, 8);
}

#[test]
fn foreground_arrival_displaces_the_running_background_process() {
    let outcome = run(3, 0, &[bg(0, 6, 0, 0), fg(2, 2, 0, 0)]);

    // The background process is displaced at tick 2 with its remaining
    // work untouched, and finishes it after the foreground completes.
    let background = by_id(&outcome, 1);
    assert_eq!(background.completion_time, 8);
    assert_eq!(background.waiting_time, 2);

    let foreground = by_id(&outcome, 2);
    assert_eq!(foreground.completion_time, 4);
    assert_eq!(foreground.waiting_time, 0);
    assert_eq!(foreground.response_time, Some(0));

    assert_eq!(
        labels(&outcome),
        ["Start", "CS", "P1", "CS", "P2", "CS", "P1", "End"]
    );
    assert_eq!(times(&outcome), [0, 0, 0, 2, 2, 4, 4, 8]);
}

#[test]
fn switch_is_charged_when_returning_foreground_follows_background() {
    // P1 blocks on I/O after its first burst; P2 (background) fills the
    // gap and is displaced when the I/O completes. Every handoff here
    // changes CPU identity, so every dispatch pays the switch tick.
    let outcome = run(4, 1, &[fg(0, 2, 3, 1), bg(0, 5, 0, 0)]);

    let foreground = by_id(&outcome, 1);
    assert_eq!(foreground.response_time, Some(1));
    assert_eq!(foreground.completion_time, 8);
    assert_eq!(foreground.waiting_time, 5);

    let background = by_id(&outcome, 2);
    assert_eq!(background.response_time, Some(4));
    assert_eq!(background.completion_time, 12);
    assert_eq!(background.waiting_time, 7);

    assert_eq!(
        labels(&outcome),
        ["Start", "CS", "P1", "CS", "P2", "CS", "P1", "CS", "P2", "End"]
    );
    assert_eq!(times(&outcome), [0, 1, 1, 4, 4, 7, 7, 9, 9, 12]);
    assert_eq!(outcome.total_cpu_busy_ticks, 8);
    assert_eq!(outcome.total_elapsed_ticks, 12);
}

#[test]
fn quantum_expiry_rotates_equal_foreground_processes() {
    let outcome = run(2, 0, &[fg(0, 4, 0, 0), fg(0, 4, 0, 0)]);

    assert_eq!(by_id(&outcome, 1).completion_time, 6);
    assert_eq!(by_id(&outcome, 2).completion_time, 8);
    assert_eq!(by_id(&outcome, 2).response_time, Some(2));

    assert_eq!(
        labels(&outcome),
        ["Start", "CS", "P1", "CS", "P2", "CS", "P1", "CS", "P2", "End"]
    );
    assert_eq!(times(&outcome), [0, 0, 0, 2, 2, 4, 4, 6, 6, 8]);
}

#[test]
fn requeue_to_self_charges_no_switch() {
    // A lone foreground process pays one switch at first dispatch and
    // none for its quantum requeues.
    let outcome = run(2, 5, &[fg(0, 5, 0, 0)]);

    let p = by_id(&outcome, 1);
    assert_eq!(p.response_time, Some(5));
    assert_eq!(p.completion_time, 10);
    assert_eq!(p.waiting_time, 5);

    assert_eq!(labels(&outcome), ["Start", "CS", "P1", "End"]);
    assert_eq!(times(&outcome), [0, 5, 5, 10]);
    assert_eq!(outcome.total_cpu_busy_ticks, 5);
}

#[test]
fn io_only_tail_completes_on_release() {
    // Second burst of zero: the process completes the moment its I/O
    // release is observed, with no further dispatch and no idle tail.
    let outcome = run(2, 0, &[bg(0, 2, 3, 0)]);

    let p = by_id(&outcome, 1);
    assert_eq!(p.completion_time, 5);
    assert_eq!(p.turnaround_time, 5);
    assert_eq!(p.waiting_time, 3);
    assert_eq!(p.response_time, Some(0));

    assert_eq!(labels(&outcome), ["Start", "CS", "P1", "Idle", "End"]);
    assert_eq!(times(&outcome), [0, 0, 0, 2, 5]);
    assert_eq!(outcome.total_elapsed_ticks, 5);
    assert_eq!(outcome.total_cpu_busy_ticks, 2);
}

#[test]
fn background_queue_is_fcfs_and_ignores_the_quantum() {
    let outcome = run(1, 0, &[bg(0, 3, 0, 0), bg(1, 1, 0, 0)]);

    // Quantum 1 applies to foreground only; P1 runs its burst unbroken.
    assert_eq!(by_id(&outcome, 1).completion_time, 3);
    assert_eq!(by_id(&outcome, 2).completion_time, 4);
    assert_eq!(by_id(&outcome, 2).response_time, Some(2));

    assert_eq!(labels(&outcome), ["Start", "CS", "P1", "CS", "P2", "End"]);
    assert_eq!(times(&outcome), [0, 0, 0, 3, 3, 4]);
}
