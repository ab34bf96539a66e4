/*!
 * Priority Scheduler
 * Preemptive priority engine with aging
 */

use super::blocked::BlockedSet;
use super::engine::{SimOutcome, SimState};
use super::ready::ReadyQueue;
use super::timeline::{GanttLabel, Timeline};
use crate::core::types::Tick;
use crate::process::record::{BurstProgress, Placement};
use crate::process::{Process, ProcessState};
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Tuning knobs for the priority engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PriorityParams {
    /// Ready ticks before a one-step priority boost; 0 disables aging
    pub aging_interval: Tick,
    /// Ticks charged when CPU occupancy changes identity
    pub context_switch_ticks: Tick,
}

/// Preemptive priority scheduler with aging.
///
/// A waiting process preempts the running one only on *strictly* lower
/// `current_priority`; equal priority, aged or not, never preempts.
/// Processes must arrive sorted by arrival time (stable, ties in id
/// order), which `workload` assembly guarantees.
#[derive(Debug)]
pub struct PriorityScheduler {
    params: PriorityParams,
    table: Vec<Process>,
    ready: ReadyQueue,
    blocked: BlockedSet,
    timeline: Timeline,
    state: SimState,
    running: Option<usize>,
    last_running: Option<usize>,
    next_arrival: usize,
}

impl PriorityScheduler {
    pub fn new(params: PriorityParams, processes: Vec<Process>) -> Self {
        debug_assert!(
            processes.windows(2).all(|w| w[0].arrival_time <= w[1].arrival_time),
            "processes must be sorted by arrival time"
        );
        Self {
            params,
            table: processes,
            ready: ReadyQueue::new(),
            blocked: BlockedSet::new(),
            timeline: Timeline::new(),
            state: SimState::default(),
            running: None,
            last_running: None,
            next_arrival: 0,
        }
    }

    /// Run the tick loop until every process completes
    pub fn run(mut self) -> SimOutcome {
        let n = self.table.len();
        info!(
            "priority run: {} processes, aging_interval={}, context_switch_ticks={}",
            n, self.params.aging_interval, self.params.context_switch_ticks
        );

        while self.state.completed < n {
            self.tick();
        }
        self.timeline.close(self.state.clock);

        info!(
            "priority run finished at tick {} ({} busy ticks)",
            self.state.clock, self.state.cpu_busy_ticks
        );
        SimOutcome {
            processes: self.table,
            timeline: self.timeline,
            total_cpu_busy_ticks: self.state.cpu_busy_ticks,
            total_elapsed_ticks: self.state.clock,
        }
    }

    fn tick(&mut self) {
        self.admit_arrivals();
        self.release_io();
        if self.state.completed == self.table.len() {
            // The zero-work cascade can finish the last process here; no
            // dispatch or idle tick follows.
            return;
        }
        if self.params.aging_interval > 0 {
            self.ready.age(&mut self.table, self.params.aging_interval);
        }
        self.dispatch();
        self.execute();
        self.state.clock += 1;
    }

    fn admit_arrivals(&mut self) {
        while self.next_arrival < self.table.len()
            && self.table[self.next_arrival].arrival_time <= self.state.clock
        {
            let slot = self.next_arrival;
            self.next_arrival += 1;
            self.settle_at(slot, self.state.clock);
        }
    }

    fn release_io(&mut self) {
        for slot in self.blocked.release_due(&self.table, self.state.clock) {
            self.settle_at(slot, self.state.clock);
        }
    }

    /// Route a process entering the scheduler to ready, blocked, or done
    fn settle_at(&mut self, slot: usize, now: Tick) {
        match self.table[slot].place(now) {
            Placement::Ready => self.ready.push(&self.table, slot),
            Placement::Blocked => self.blocked.insert(slot),
            Placement::Completed => {
                self.state.completed += 1;
                debug!(
                    "process {} completed at tick {}",
                    self.table[slot].id, self.table[slot].completion_time
                );
            }
        }
    }

    fn dispatch(&mut self) {
        match self.running {
            None => {
                if let Some(entry) = self.ready.pop() {
                    // The first dispatch on a cold CPU is free.
                    if self.last_running.is_some() {
                        self.charge_switch();
                    }
                    self.start(entry.slot);
                }
            }
            Some(current) => {
                let Some(candidate) = self.ready.peek() else {
                    return;
                };
                if candidate.priority < self.table[current].current_priority {
                    self.ready.pop();
                    self.charge_switch();
                    self.table[current].state = ProcessState::Ready;
                    self.ready.push(&self.table, current);
                    self.last_running = Some(current);
                    debug!(
                        "process {} preempted by process {} at tick {}",
                        self.table[current].id, self.table[candidate.slot].id, self.state.clock
                    );
                    self.start(candidate.slot);
                }
            }
        }
    }

    /// Advance the clock through the switch window and mark it on the trace
    fn charge_switch(&mut self) {
        self.state.clock += self.params.context_switch_ticks;
        self.timeline
            .record(self.state.clock, GanttLabel::ContextSwitch);
    }

    fn start(&mut self, slot: usize) {
        self.table[slot].mark_dispatched(self.state.clock);
        self.running = Some(slot);
        debug!("process {} dispatched at tick {}", self.table[slot].id, self.state.clock);
    }

    fn execute(&mut self) {
        let Some(slot) = self.running else {
            self.timeline.record(self.state.clock, GanttLabel::Idle);
            return;
        };
        let now = self.state.clock;
        self.timeline.record(now, GanttLabel::Run(self.table[slot].id));
        self.state.cpu_busy_ticks += 1;
        if self.table[slot].run_one_tick() == BurstProgress::Exhausted {
            self.last_running = Some(slot);
            self.running = None;
            self.settle_at(slot, now + 1);
        }
    }
}
