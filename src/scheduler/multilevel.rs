/*!
 * Multi-Level Queue Scheduler
 * Round-robin foreground queue over an FCFS background queue
 */

use super::blocked::BlockedSet;
use super::engine::{SimOutcome, SimState};
use super::timeline::{GanttLabel, Timeline};
use crate::core::types::Tick;
use crate::process::record::{BurstProgress, Placement};
use crate::process::{Process, ProcessState, QueueClass};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Tuning knobs for the multi-level engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct MultiLevelParams {
    /// Ticks a foreground process may run before mandatory requeueing
    pub rr_quantum: Tick,
    /// Ticks charged when CPU occupancy changes identity
    pub context_switch_ticks: Tick,
}

/// Multi-level queue scheduler.
///
/// The round-robin foreground queue holds absolute priority: the moment it
/// is non-empty, a running background process is displaced to the FCFS
/// tail with its remaining work untouched. A switch is charged whenever
/// the process about to run differs from the immediately preceding running
/// process; consecutive re-dispatches of the same process are free.
#[derive(Debug)]
pub struct MultiLevelScheduler {
    params: MultiLevelParams,
    table: Vec<Process>,
    rr: VecDeque<usize>,
    fcfs: VecDeque<usize>,
    blocked: BlockedSet,
    timeline: Timeline,
    state: SimState,
    running: Option<usize>,
    last_running: Option<usize>,
    next_arrival: usize,
}

impl MultiLevelScheduler {
    pub fn new(params: MultiLevelParams, processes: Vec<Process>) -> Self {
        debug_assert!(params.rr_quantum > 0, "quantum must be at least 1 tick");
        debug_assert!(
            processes.windows(2).all(|w| w[0].arrival_time <= w[1].arrival_time),
            "processes must be sorted by arrival time"
        );
        debug_assert!(
            processes.iter().all(|p| p.class.queue().is_some()),
            "multi-level processes must carry a queue class"
        );
        Self {
            params,
            table: processes,
            rr: VecDeque::new(),
            fcfs: VecDeque::new(),
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
            "multi-level run: {} processes, rr_quantum={}, context_switch_ticks={}",
            n, self.params.rr_quantum, self.params.context_switch_ticks
        );

        while self.state.completed < n {
            self.tick();
        }
        self.timeline.close(self.state.clock);

        info!(
            "multi-level run finished at tick {} ({} busy ticks)",
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
            return;
        }
        self.schedule();
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

    fn settle_at(&mut self, slot: usize, now: Tick) {
        match self.table[slot].place(now) {
            Placement::Ready => self.enqueue(slot),
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

    fn enqueue(&mut self, slot: usize) {
        if self.is_foreground(slot) {
            self.rr.push_back(slot);
        } else {
            self.fcfs.push_back(slot);
        }
    }

    fn is_foreground(&self, slot: usize) -> bool {
        self.table[slot].class.queue() == Some(QueueClass::Foreground)
    }

    fn schedule(&mut self) {
        if !self.rr.is_empty() {
            // Ready foreground work displaces a running background process
            // at once; its remaining work is untouched and no partial tick
            // is charged.
            if let Some(current) = self.running {
                if !self.is_foreground(current) {
                    self.table[current].state = ProcessState::Ready;
                    self.fcfs.push_back(current);
                    self.last_running = Some(current);
                    self.running = None;
                    debug!(
                        "background process {} displaced at tick {}",
                        self.table[current].id, self.state.clock
                    );
                }
            }
            if self.running.is_none() {
                if let Some(slot) = self.rr.pop_front() {
                    self.table[slot].remaining_quantum = self.params.rr_quantum;
                    self.start(slot);
                }
            }
        } else if self.running.is_none() {
            if let Some(slot) = self.fcfs.pop_front() {
                self.start(slot);
            }
        }
    }

    /// Dispatch, charging a switch only when CPU occupancy changes identity
    fn start(&mut self, slot: usize) {
        if self.last_running != Some(slot) {
            self.state.clock += self.params.context_switch_ticks;
            self.timeline
                .record(self.state.clock, GanttLabel::ContextSwitch);
        }
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

        let progress = self.table[slot].run_one_tick();
        let foreground = self.is_foreground(slot);
        if foreground {
            self.table[slot].remaining_quantum -= 1;
        }

        if progress == BurstProgress::Exhausted {
            self.last_running = Some(slot);
            self.running = None;
            self.settle_at(slot, now + 1);
        } else if foreground && self.table[slot].remaining_quantum == 0 {
            // Quantum spent with burst work left: back to the RR tail, a
            // transition distinct from burst completion.
            self.table[slot].state = ProcessState::Ready;
            self.rr.push_back(slot);
            self.last_running = Some(slot);
            self.running = None;
            debug!(
                "process {} requeued on quantum expiry at tick {}",
                self.table[slot].id, now
            );
        }
    }
}
