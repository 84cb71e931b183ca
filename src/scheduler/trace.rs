/*!
 * Cycle Trace Types
 * Per-cycle observations and end-of-run summaries
 */

use super::types::Algorithm;
use crate::core::types::{Burst, Cycle, Pid};
use crate::process::QueueSnapshot;
use serde::{Deserialize, Serialize};

/// What happened to the executing process at the end of a cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CycleEvent {
    /// Burst reached zero; the process moves to the finished set
    Completed,
    /// Quantum exhausted with work left; the process goes to the ready tail
    Preempted,
}

/// One simulated CPU cycle
///
/// `queues` is captured while the process is on the CPU, so the executing
/// PID appears in none of the three collections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CycleObservation {
    /// 1-based cycle number within the run
    pub cycle: Cycle,
    /// Executing PID, `None` when the CPU is idle
    pub executing: Option<Pid>,
    /// Burst left on the executing process after this cycle
    pub remaining: Burst,
    /// Cycles left in the current quantum (Round-Robin only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantum_remaining: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<CycleEvent>,
    pub queues: QueueSnapshot,
    /// Context switches so far in this run
    pub context_switches: u64,
}

impl CycleObservation {
    #[inline]
    pub const fn is_idle(&self) -> bool {
        self.executing.is_none()
    }
}

/// Aggregate statistics for a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RunSummary {
    pub algorithm: Algorithm,
    pub total_cycles: Cycle,
    pub context_switches: u64,
    pub dispatches: u64,
    pub preemptions: u64,
    /// PIDs finished by this run, in completion order
    pub completed: Vec<Pid>,
}

/// A fully drained run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    pub observations: Vec<CycleObservation>,
    pub summary: RunSummary,
}

impl RunReport {
    /// Executing PID per cycle (idle cycles omitted)
    pub fn timeline(&self) -> Vec<Pid> {
        self.observations.iter().filter_map(|o| o.executing).collect()
    }

    /// Distinct dispatch order: the timeline with consecutive repeats collapsed
    pub fn dispatch_order(&self) -> Vec<Pid> {
        let mut order = self.timeline();
        order.dedup();
        order
    }
}
