/*!
 * Core Module
 * Shared types and errors
 */

pub mod errors;
pub mod types;

pub use errors::{WorkloadError, WorkloadResult};
pub use types::{Pid, Priority, Tick};
