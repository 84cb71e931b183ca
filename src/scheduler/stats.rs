/*!
 * Run Statistics
 * Cycle, dispatch, and context-switch tallies for a single run
 */

use super::trace::RunSummary;
use super::types::Algorithm;
use crate::core::types::{Cycle, Pid};

#[derive(Debug, Clone, Default)]
pub(super) struct RunStats {
    pub cycles: Cycle,
    pub context_switches: u64,
    pub dispatches: u64,
    pub preemptions: u64,
    pub completed: Vec<Pid>,
    last_dispatched: Option<Pid>,
}

impl RunStats {
    /// Record a dispatch; returns true if it counted as a context switch
    pub fn record_dispatch(&mut self, pid: Pid, every_dispatch: bool) -> bool {
        self.dispatches += 1;
        let switched = every_dispatch || self.last_dispatched != Some(pid);
        if switched {
            self.context_switches += 1;
        }
        self.last_dispatched = Some(pid);
        switched
    }

    #[inline]
    pub fn record_cycle(&mut self) -> Cycle {
        self.cycles += 1;
        self.cycles
    }

    #[inline]
    pub fn record_preemption(&mut self) {
        self.preemptions += 1;
    }

    #[inline]
    pub fn record_completion(&mut self, pid: Pid) {
        self.completed.push(pid);
    }

    pub fn summary(&self, algorithm: Algorithm) -> RunSummary {
        RunSummary {
            algorithm,
            total_cycles: self.cycles,
            context_switches: self.context_switches,
            dispatches: self.dispatches,
            preemptions: self.preemptions,
            completed: self.completed.clone(),
        }
    }
}
