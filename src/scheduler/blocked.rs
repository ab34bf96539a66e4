/*!
 * Blocked Set
 * Processes performing simulated I/O, released by completion tick
 */

use crate::core::types::Tick;
use crate::process::Process;

/// Insertion-ordered set of blocked process slots.
///
/// Release order follows blocking order, which decides how same-tick
/// releases line up at the tails of FIFO queues.
#[derive(Debug, Default)]
pub(crate) struct BlockedSet {
    slots: Vec<usize>,
}

impl BlockedSet {
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    pub fn insert(&mut self, slot: usize) {
        self.slots.push(slot);
    }

    /// Drain every slot whose I/O finishes at or before `now`
    pub fn release_due(&mut self, table: &[Process], now: Tick) -> Vec<usize> {
        let mut due = Vec::new();
        self.slots.retain(|&slot| {
            if table[slot].io_completion_time <= now {
                due.push(slot);
                false
            } else {
                true
            }
        });
        due
    }
}
