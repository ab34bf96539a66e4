/*!
 * Process Record
 * Immutable descriptor plus the mutable state the tick loop drives
 */

use super::types::{ProcessState, SchedClass};
use crate::core::types::{Pid, Priority, Tick};
use serde::{Deserialize, Serialize};

/// Where a process belongs when it (re)enters the scheduler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Placement {
    /// Active burst has work left
    Ready,
    /// First burst finished, I/O pending
    Blocked,
    /// No CPU work remains
    Completed,
}

/// Outcome of one executed tick of CPU work
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BurstProgress {
    /// Active burst still has work left
    Continuing,
    /// Active burst reached zero on this tick
    Exhausted,
}

/// A simulated process.
///
/// Every process runs two CPU bursts separated by one optional I/O burst;
/// `io_burst = 0` means it never blocks.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Process {
    pub id: Pid,
    pub arrival_time: Tick,
    pub class: SchedClass,
    pub cpu_burst_1: Tick,
    pub io_burst: Tick,
    pub cpu_burst_2: Tick,

    pub state: ProcessState,
    pub current_priority: Priority,
    pub remaining_burst_1: Tick,
    pub remaining_burst_2: Tick,
    /// Consecutive ready ticks since the last aging boost
    pub time_in_ready_queue: Tick,
    /// Absolute tick at which pending I/O finishes; meaningful only in Blocked
    pub io_completion_time: Tick,
    pub current_burst_is_1: bool,
    /// Ticks left in the current round-robin slice; foreground class only
    pub remaining_quantum: Tick,

    /// Ticks between arrival and first dispatch; never written for a
    /// process with zero total CPU work
    pub response_time: Option<Tick>,
    pub completion_time: Tick,
    pub turnaround_time: Tick,
    pub waiting_time: Tick,
}

impl Process {
    /// Build a fresh record in `NotArrived` state
    pub fn new(
        id: Pid,
        arrival_time: Tick,
        class: SchedClass,
        cpu_burst_1: Tick,
        io_burst: Tick,
        cpu_burst_2: Tick,
    ) -> Self {
        Self {
            id,
            arrival_time,
            class,
            cpu_burst_1,
            io_burst,
            cpu_burst_2,
            state: ProcessState::NotArrived,
            current_priority: class.priority_level().unwrap_or(0),
            remaining_burst_1: cpu_burst_1,
            remaining_burst_2: cpu_burst_2,
            time_in_ready_queue: 0,
            io_completion_time: 0,
            current_burst_is_1: true,
            remaining_quantum: 0,
            response_time: None,
            completion_time: 0,
            turnaround_time: 0,
            waiting_time: 0,
        }
    }

    /// Ticks left on whichever burst is active
    pub fn active_burst_remaining(&self) -> Tick {
        if self.current_burst_is_1 {
            self.remaining_burst_1
        } else {
            self.remaining_burst_2
        }
    }

    /// Move onto the CPU; the first dispatch ever fixes `response_time`
    pub(crate) fn mark_dispatched(&mut self, now: Tick) {
        self.state = ProcessState::Running;
        if self.response_time.is_none() {
            self.response_time = Some(now - self.arrival_time);
        }
    }

    /// Execute one tick of CPU work on the active burst
    pub(crate) fn run_one_tick(&mut self) -> BurstProgress {
        let remaining = if self.current_burst_is_1 {
            &mut self.remaining_burst_1
        } else {
            &mut self.remaining_burst_2
        };
        debug_assert!(*remaining > 0, "executed a tick on an empty burst");
        *remaining -= 1;
        if *remaining == 0 {
            BurstProgress::Exhausted
        } else {
            BurstProgress::Continuing
        }
    }

    /// Decide where the process belongs when it (re)enters the scheduler:
    /// at admission, when an I/O wait ends, and after an executed tick
    /// exhausts a burst. Empty bursts are skipped here, so a dispatch never
    /// lands on a burst with zero ticks left.
    pub(crate) fn place(&mut self, now: Tick) -> Placement {
        if self.current_burst_is_1 && self.remaining_burst_1 == 0 {
            self.current_burst_is_1 = false;
            if self.io_burst > 0 {
                self.io_completion_time = now + self.io_burst;
                self.state = ProcessState::Blocked;
                return Placement::Blocked;
            }
        }
        if !self.current_burst_is_1 && self.remaining_burst_2 == 0 {
            self.complete(now);
            return Placement::Completed;
        }
        self.state = ProcessState::Ready;
        Placement::Ready
    }

    /// Final bookkeeping once all CPU work is done.
    ///
    /// Context-switch and I/O ticks land in `waiting_time` by this algebra;
    /// they are never attributed to any process's busy time.
    fn complete(&mut self, now: Tick) {
        self.state = ProcessState::Completed;
        self.completion_time = now;
        self.turnaround_time = now - self.arrival_time;
        debug_assert!(self.turnaround_time >= self.cpu_burst_1 + self.cpu_burst_2);
        self.waiting_time = self.turnaround_time - self.cpu_burst_1 - self.cpu_burst_2;
    }
}
