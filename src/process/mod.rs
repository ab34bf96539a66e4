/*!
 * Process Module
 * Process records, states, and scheduling classes
 */

pub mod record;
pub mod types;

// Re-export for convenience
pub use record::Process;
pub use types::{ProcessState, QueueClass, SchedClass};
