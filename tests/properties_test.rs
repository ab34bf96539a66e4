/*!
 * Property Tests
 * Conservation and algebra invariants over generated workloads
 */

use proptest::prelude::*;
use sched_sim::workload::{multi_level_processes, priority_processes};
use sched_sim::{
    GanttLabel, MultiLevelParams, MultiLevelScheduler, MultiLevelSpec, PriorityParams,
    PriorityScheduler, PrioritySpec, ProcessState, QueueClass, SimOutcome, Tick,
};

fn check_invariants(outcome: &SimOutcome) {
    // Conservation: every executed tick drains exactly one burst unit.
    let total_burst: Tick = outcome
        .processes
        .iter()
        .map(|p| p.cpu_burst_1 + p.cpu_burst_2)
        .sum();
    assert_eq!(outcome.total_cpu_busy_ticks, total_burst);

    for p in &outcome.processes {
        assert_eq!(p.state, ProcessState::Completed);
        assert_eq!(p.remaining_burst_1, 0);
        assert_eq!(p.remaining_burst_2, 0);
        assert_eq!(p.turnaround_time, p.completion_time - p.arrival_time);
        assert_eq!(
            p.waiting_time,
            p.turnaround_time - p.cpu_burst_1 - p.cpu_burst_2
        );
        // Dispatched exactly when there was CPU work to hand out.
        assert_eq!(
            p.response_time.is_some(),
            p.cpu_burst_1 + p.cpu_burst_2 > 0
        );
    }

    let events = outcome.timeline.events();
    assert!(events.windows(2).all(|w| w[0].time <= w[1].time));
    assert_eq!(events.first().map(|e| e.label), Some(GanttLabel::Start));
    assert_eq!(events.last().map(|e| e.label), Some(GanttLabel::End));
    assert_eq!(
        events.last().map(|e| e.time),
        Some(outcome.total_elapsed_ticks)
    );

    // The run ends on the tick the last process completed.
    let last_completion = outcome
        .processes
        .iter()
        .map(|p| p.completion_time)
        .max()
        .unwrap_or(0);
    assert_eq!(outcome.total_elapsed_ticks, last_completion);
}

fn priority_spec() -> impl Strategy<Value = PrioritySpec> {
    (0u64..20, 0u32..6, 0u64..6, 0u64..6, 0u64..6).prop_map(
        |(arrival_time, priority, cpu_burst_1, io_burst, cpu_burst_2)| PrioritySpec {
            arrival_time,
            priority,
            cpu_burst_1,
            io_burst,
            cpu_burst_2,
        },
    )
}

fn multi_level_spec() -> impl Strategy<Value = MultiLevelSpec> {
    (0u64..20, any::<bool>(), 0u64..6, 0u64..6, 0u64..6).prop_map(
        |(arrival_time, foreground, cpu_burst_1, io_burst, cpu_burst_2)| MultiLevelSpec {
            arrival_time,
            class: if foreground {
                QueueClass::Foreground
            } else {
                QueueClass::Background
            },
            cpu_burst_1,
            io_burst,
            cpu_burst_2,
        },
    )
}

proptest! {
    #[test]
    fn priority_engine_preserves_invariants(
        specs in prop::collection::vec(priority_spec(), 1..8),
        aging_interval in 0u64..4,
        context_switch_ticks in 0u64..3,
    ) {
        let table = priority_processes(&specs).expect("non-empty workload");
        let outcome = PriorityScheduler::new(
            PriorityParams { aging_interval, context_switch_ticks },
            table,
        )
        .run();
        check_invariants(&outcome);
    }

    #[test]
    fn multi_level_engine_preserves_invariants(
        specs in prop::collection::vec(multi_level_spec(), 1..8),
        rr_quantum in 1u64..4,
        context_switch_ticks in 0u64..3,
    ) {
        let table = multi_level_processes(&specs).expect("non-empty workload");
        let outcome = MultiLevelScheduler::new(
            MultiLevelParams { rr_quantum, context_switch_ticks },
            table,
        )
        .run();
        check_invariants(&outcome);
    }

    #[test]
    fn priority_order_is_work_conserving_without_io(
        bursts in prop::collection::vec(1u64..5, 1..6),
        context_switch_ticks in 0u64..2,
    ) {
        // All processes arrive at 0 with distinct priorities and no I/O:
        // the CPU never idles until the last completion.
        let specs: Vec<PrioritySpec> = bursts
            .iter()
            .enumerate()
            .map(|(i, &b)| PrioritySpec {
                arrival_time: 0,
                priority: i as u32,
                cpu_burst_1: b,
                io_burst: 0,
                cpu_burst_2: 0,
            })
            .collect();
        let table = priority_processes(&specs).expect("non-empty workload");
        let outcome = PriorityScheduler::new(
            PriorityParams { aging_interval: 0, context_switch_ticks },
            table,
        )
        .run();
        check_invariants(&outcome);
        prop_assert!(outcome
            .timeline
            .events()
            .iter()
            .all(|e| e.label != GanttLabel::Idle));
    }
}
