/*!
 * Scheduler Module
 * Tick engines, ready structures, timeline, and run metrics
 */

mod blocked;
pub mod engine;
pub mod metrics;
pub mod multilevel;
pub mod priority;
mod ready;
pub mod timeline;

// Re-export public API
pub use engine::{SimOutcome, SimState};
pub use metrics::Summary;
pub use multilevel::{MultiLevelParams, MultiLevelScheduler};
pub use priority::{PriorityParams, PriorityScheduler};
pub use timeline::{GanttEvent, GanttLabel, Timeline};
