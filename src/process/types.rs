/*!
 * Process Types
 * State machine and scheduling-class types for simulated processes
 */

use crate::core::types::Priority;
use serde::{Deserialize, Serialize};

/// Process state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessState {
    /// Arrival tick not reached yet
    NotArrived,
    /// Waiting in a ready structure for the CPU
    Ready,
    /// Occupying the CPU
    Running,
    /// Performing simulated I/O
    Blocked,
    /// All CPU work finished; terminal
    Completed,
}

/// Multi-level queue membership
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueueClass {
    /// Round-robin queue, absolute priority over background
    Foreground,
    /// FCFS queue, runs only while no foreground work is ready
    Background,
}

/// Scheduling class discriminant on the single process record shape.
///
/// Fields belonging to the other mode stay inert: a priority-class process
/// never touches `remaining_quantum`, a queue-class process never touches
/// `current_priority`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchedClass {
    /// Preemptive priority scheduling with aging
    Priority(Priority),
    /// Multi-level queue scheduling
    Queue(QueueClass),
}

impl SchedClass {
    /// Queue membership for the multi-level scheduler
    pub fn queue(&self) -> Option<QueueClass> {
        match self {
            SchedClass::Queue(q) => Some(*q),
            SchedClass::Priority(_) => None,
        }
    }

    /// Initial priority level for the priority scheduler
    pub fn priority_level(&self) -> Option<Priority> {
        match self {
            SchedClass::Priority(level) => Some(*level),
            SchedClass::Queue(_) => None,
        }
    }
}
