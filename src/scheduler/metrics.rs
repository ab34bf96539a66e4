/*!
 * Run Summary
 * Averages and CPU utilization derived from a finished run
 */

use super::engine::SimOutcome;
use crate::core::types::Tick;
use serde::{Deserialize, Serialize};

/// Aggregate figures reported alongside the per-process table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Summary {
    pub avg_waiting_time: f64,
    pub avg_turnaround_time: f64,
    /// Mean over processes that were dispatched at least once
    pub avg_response_time: f64,
    /// Busy ticks over elapsed ticks, as a percentage
    pub cpu_utilization: f64,
}

impl Summary {
    pub fn from_outcome(outcome: &SimOutcome) -> Self {
        let n = outcome.processes.len();
        if n == 0 {
            return Self {
                avg_waiting_time: 0.0,
                avg_turnaround_time: 0.0,
                avg_response_time: 0.0,
                cpu_utilization: 0.0,
            };
        }

        let total_waiting: Tick = outcome.processes.iter().map(|p| p.waiting_time).sum();
        let total_turnaround: Tick = outcome.processes.iter().map(|p| p.turnaround_time).sum();
        let responses: Vec<Tick> = outcome
            .processes
            .iter()
            .filter_map(|p| p.response_time)
            .collect();
        let avg_response_time = if responses.is_empty() {
            0.0
        } else {
            responses.iter().sum::<Tick>() as f64 / responses.len() as f64
        };
        let cpu_utilization = if outcome.total_elapsed_ticks > 0 {
            outcome.total_cpu_busy_ticks as f64 / outcome.total_elapsed_ticks as f64 * 100.0
        } else {
            0.0
        };

        Self {
            avg_waiting_time: total_waiting as f64 / n as f64,
            avg_turnaround_time: total_turnaround as f64 / n as f64,
            avg_response_time,
            cpu_utilization,
        }
    }
}
