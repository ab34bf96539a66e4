/*!
 * Ready Queue
 * Priority-ordered ready structure for the aging scheduler
 */

use crate::core::types::{Priority, Tick};
use crate::process::Process;
use log::debug;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Heap key for a ready process; `slot` indexes the engine's process table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ReadyEntry {
    pub priority: Priority,
    pub arrival_time: Tick,
    pub slot: usize,
}

impl Ord for ReadyEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap; reversed so the lowest priority value
        // (most urgent) surfaces first, FCFS on ties, slot as the last word.
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.arrival_time.cmp(&self.arrival_time))
            .then_with(|| other.slot.cmp(&self.slot))
    }
}

impl PartialOrd for ReadyEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Ready structure ordered by current priority, ties broken by earlier
/// arrival time.
#[derive(Debug)]
pub(crate) struct ReadyQueue {
    heap: BinaryHeap<ReadyEntry>,
}

impl ReadyQueue {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
        }
    }

    /// Enqueue a process under its current sort key
    pub fn push(&mut self, table: &[Process], slot: usize) {
        let p = &table[slot];
        self.heap.push(ReadyEntry {
            priority: p.current_priority,
            arrival_time: p.arrival_time,
            slot,
        });
    }

    /// Most urgent entry, without removing it
    pub fn peek(&self) -> Option<ReadyEntry> {
        self.heap.peek().copied()
    }

    /// Remove and return the most urgent entry
    pub fn pop(&mut self) -> Option<ReadyEntry> {
        self.heap.pop()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// One aging pass: every ready process has waited one more tick, and
    /// those reaching the interval get a one-step boost (floor 0) plus a
    /// counter reset. The sort key mutates, so the heap is drained and
    /// rebuilt rather than patched in place.
    pub fn age(&mut self, table: &mut [Process], interval: Tick) {
        let drained: Vec<ReadyEntry> = self.heap.drain().collect();
        for entry in drained {
            let p = &mut table[entry.slot];
            p.time_in_ready_queue += 1;
            if p.time_in_ready_queue >= interval {
                if p.current_priority > 0 {
                    p.current_priority -= 1;
                    debug!("process {} aged to priority {}", p.id, p.current_priority);
                }
                p.time_in_ready_queue = 0;
            }
            self.heap.push(ReadyEntry {
                priority: p.current_priority,
                ..entry
            });
        }
    }
}
