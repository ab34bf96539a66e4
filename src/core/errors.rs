/*!
 * Error Types
 * Workload problems rejected before a simulation starts
 */

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Workload assembly result
pub type WorkloadResult<T> = Result<T, WorkloadError>;

/// Workload errors
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "error_type", rename_all = "snake_case")]
pub enum WorkloadError {
    #[error("workload contains no processes")]
    Empty,

    #[error("round-robin time quantum must be at least 1 tick")]
    ZeroQuantum,
}
