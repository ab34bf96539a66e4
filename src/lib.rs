/*!
 * Scheduling Simulator Library
 * Discrete-time CPU scheduling engines with timeline and metrics
 */

pub mod core;
pub mod process;
pub mod render;
pub mod scheduler;
pub mod workload;

// Re-exports
pub use crate::core::errors::{WorkloadError, WorkloadResult};
pub use crate::core::types::{Pid, Priority, Tick};
pub use crate::process::{Process, ProcessState, QueueClass, SchedClass};
pub use crate::scheduler::{
    GanttEvent, GanttLabel, MultiLevelParams, MultiLevelScheduler, PriorityParams,
    PriorityScheduler, SimOutcome, SimState, Summary, Timeline,
};
pub use crate::workload::{Engine, MultiLevelSpec, PrioritySpec, WorkloadFile};
