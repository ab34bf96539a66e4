/*!
 * Core Types
 * Common types used across the simulator
 */

/// Process ID type
pub type Pid = u32;

/// Discrete simulation time, counted in ticks
pub type Tick = u64;

/// Priority level (lower value = more urgent)
pub type Priority = u32;
