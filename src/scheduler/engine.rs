/*!
 * Simulation State
 * Loop-carried counters and the final outcome record
 */

use super::timeline::Timeline;
use crate::core::types::Tick;
use crate::process::Process;
use serde::{Deserialize, Serialize};

/// Loop-carried counters, kept in one value owned by the engine so a run
/// is restartable and independently testable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SimState {
    /// Monotonically increasing tick clock
    pub clock: Tick,
    /// Processes that reached `Completed`
    pub completed: usize,
    /// Ticks during which some process executed a burst
    pub cpu_busy_ticks: Tick,
}

/// Everything a renderer needs after a run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SimOutcome {
    /// Final process records, in arrival order, with metrics populated
    pub processes: Vec<Process>,
    /// The ordered Gantt trace, sealed with `End`
    pub timeline: Timeline,
    pub total_cpu_busy_ticks: Tick,
    pub total_elapsed_ticks: Tick,
}
