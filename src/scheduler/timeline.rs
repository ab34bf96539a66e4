/*!
 * Event Timeline
 * Append-only log of CPU occupancy transitions (the Gantt trace)
 */

use crate::core::types::{Pid, Tick};
use serde::{Deserialize, Serialize};
use std::fmt;

/// What held the CPU, or which transition happened, starting at an event's tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GanttLabel {
    /// Simulation start marker, always at tick 0
    Start,
    /// Context-switch overhead window
    #[serde(rename = "cs")]
    ContextSwitch,
    /// Nothing ready and nothing running
    Idle,
    /// Process with this id executing
    Run(Pid),
    /// Simulation end marker
    End,
}

impl fmt::Display for GanttLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GanttLabel::Start => f.write_str("Start"),
            GanttLabel::ContextSwitch => f.write_str("CS"),
            GanttLabel::Idle => f.write_str("Idle"),
            GanttLabel::Run(pid) => write!(f, "P{pid}"),
            GanttLabel::End => f.write_str("End"),
        }
    }
}

/// One timeline transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct GanttEvent {
    pub time: Tick,
    pub label: GanttLabel,
}

/// Append-only Gantt trace with label coalescing.
///
/// Consecutive identical labels collapse into their first occurrence, with
/// two exceptions: every `CS` stands as its own event, and a run label
/// directly after a `CS` is always recorded, so the chart shows which
/// process the switch led to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Timeline {
    events: Vec<GanttEvent>,
}

impl Timeline {
    /// Open a trace with the `Start` marker at tick 0
    pub fn new() -> Self {
        Self {
            events: vec![GanttEvent {
                time: 0,
                label: GanttLabel::Start,
            }],
        }
    }

    /// Record a transition, applying the coalescing rule
    pub fn record(&mut self, time: Tick, label: GanttLabel) {
        if label != GanttLabel::ContextSwitch {
            if let Some(last) = self.events.last() {
                if last.label == label {
                    return;
                }
            }
        }
        debug_assert!(self.events.last().map_or(true, |last| last.time <= time));
        self.events.push(GanttEvent { time, label });
    }

    /// Seal the trace with the `End` marker
    pub fn close(&mut self, time: Tick) {
        self.events.push(GanttEvent {
            time,
            label: GanttLabel::End,
        });
    }

    /// The ordered event sequence
    pub fn events(&self) -> &[GanttEvent] {
        &self.events
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}
