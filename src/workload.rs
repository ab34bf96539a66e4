/*!
 * Workload Assembly
 * JSON-facing process tuples, validation, and arrival ordering
 */

use crate::core::errors::{WorkloadError, WorkloadResult};
use crate::core::types::{Pid, Priority, Tick};
use crate::process::{Process, QueueClass, SchedClass};
use crate::scheduler::{
    MultiLevelParams, MultiLevelScheduler, PriorityParams, PriorityScheduler, SimOutcome,
};
use serde::{Deserialize, Serialize};

/// One process tuple for the priority scheduler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PrioritySpec {
    pub arrival_time: Tick,
    /// Lower value = more urgent
    pub priority: Priority,
    pub cpu_burst_1: Tick,
    pub io_burst: Tick,
    pub cpu_burst_2: Tick,
}

/// One process tuple for the multi-level scheduler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct MultiLevelSpec {
    pub arrival_time: Tick,
    pub class: QueueClass,
    pub cpu_burst_1: Tick,
    pub io_burst: Tick,
    pub cpu_burst_2: Tick,
}

/// A full simulation request, tagged by scheduler kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "scheduler", rename_all = "snake_case")]
pub enum WorkloadFile {
    Priority {
        aging_interval: Tick,
        context_switch_ticks: Tick,
        processes: Vec<PrioritySpec>,
    },
    MultiLevel {
        rr_quantum: Tick,
        context_switch_ticks: Tick,
        processes: Vec<MultiLevelSpec>,
    },
}

impl WorkloadFile {
    /// Validate the request and build the matching engine, ready to run
    pub fn into_engine(self) -> WorkloadResult<Engine> {
        match self {
            WorkloadFile::Priority {
                aging_interval,
                context_switch_ticks,
                processes,
            } => {
                let table = priority_processes(&processes)?;
                Ok(Engine::Priority(PriorityScheduler::new(
                    PriorityParams {
                        aging_interval,
                        context_switch_ticks,
                    },
                    table,
                )))
            }
            WorkloadFile::MultiLevel {
                rr_quantum,
                context_switch_ticks,
                processes,
            } => {
                if rr_quantum == 0 {
                    return Err(WorkloadError::ZeroQuantum);
                }
                let table = multi_level_processes(&processes)?;
                Ok(Engine::MultiLevel(MultiLevelScheduler::new(
                    MultiLevelParams {
                        rr_quantum,
                        context_switch_ticks,
                    },
                    table,
                )))
            }
        }
    }
}

/// A validated engine of either kind
#[derive(Debug)]
pub enum Engine {
    Priority(PriorityScheduler),
    MultiLevel(MultiLevelScheduler),
}

impl Engine {
    pub fn run(self) -> SimOutcome {
        match self {
            Engine::Priority(engine) => engine.run(),
            Engine::MultiLevel(engine) => engine.run(),
        }
    }
}

/// Build the priority-scheduler process table: ids assigned 1..n in input
/// order, then a stable sort by arrival so ties keep id order.
pub fn priority_processes(specs: &[PrioritySpec]) -> WorkloadResult<Vec<Process>> {
    let table = specs
        .iter()
        .enumerate()
        .map(|(i, s)| {
            Process::new(
                i as Pid + 1,
                s.arrival_time,
                SchedClass::Priority(s.priority),
                s.cpu_burst_1,
                s.io_burst,
                s.cpu_burst_2,
            )
        })
        .collect();
    sorted_by_arrival(table)
}

/// Build the multi-level process table; same id and ordering rules
pub fn multi_level_processes(specs: &[MultiLevelSpec]) -> WorkloadResult<Vec<Process>> {
    let table = specs
        .iter()
        .enumerate()
        .map(|(i, s)| {
            Process::new(
                i as Pid + 1,
                s.arrival_time,
                SchedClass::Queue(s.class),
                s.cpu_burst_1,
                s.io_burst,
                s.cpu_burst_2,
            )
        })
        .collect();
    sorted_by_arrival(table)
}

fn sorted_by_arrival(mut table: Vec<Process>) -> WorkloadResult<Vec<Process>> {
    if table.is_empty() {
        return Err(WorkloadError::Empty);
    }
    table.sort_by_key(|p| p.arrival_time);
    Ok(table)
}
