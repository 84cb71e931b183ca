/*!
 * Execution Transitions
 * State changes driven by the scheduling engine during a run
 */

use super::lifecycle::Operation;
use super::manager::ProcessManager;
use super::types::Process;
use crate::core::types::{Burst, Pid};
use tracing::{debug, warn};

impl ProcessManager {
    /// Pop the head of the ready sequence, skipping anything no longer eligible
    pub(crate) fn pop_eligible(&mut self) -> Option<Pid> {
        while let Some(pid) = self.queues.pop_ready() {
            if self.registry.get(pid).is_some_and(Process::is_eligible) {
                return Some(pid);
            }
            debug!(pid, "Skipping stale ready entry");
        }
        None
    }

    /// Eligible processes in ready-sequence order
    pub(crate) fn eligible(&self) -> impl Iterator<Item = &Process> + '_ {
        self.queues
            .ready()
            .filter_map(|pid| self.registry.get(pid))
            .filter(|p| p.is_eligible())
    }

    /// Take a selected process out of the ready sequence
    pub(crate) fn take_ready(&mut self, pid: Pid) -> bool {
        self.queues.remove_ready(pid)
    }

    /// Ready → Running
    pub(crate) fn dispatch(&mut self, pid: Pid) {
        self.transition(pid, Operation::Dispatch);
    }

    /// Burn one cycle of CPU; returns the burst left afterwards
    pub(crate) fn consume_cycle(&mut self, pid: Pid) -> Burst {
        match self.registry.get_mut(pid) {
            Some(process) => {
                process.remaining_cpu = process.remaining_cpu.saturating_sub(1);
                process.remaining_cpu
            }
            None => 0,
        }
    }

    /// Remaining burst of a process (0 if unknown)
    pub(crate) fn remaining(&self, pid: Pid) -> Burst {
        self.registry.get(pid).map_or(0, |p| p.remaining_cpu)
    }

    /// Running → Ready, appended to the tail of the ready sequence
    pub(crate) fn preempt(&mut self, pid: Pid) {
        if self.transition(pid, Operation::Preempt) {
            self.queues.push_ready(pid);
        }
    }

    /// Running → Ready, put back at the head of the ready sequence
    pub(crate) fn suspend(&mut self, pid: Pid) {
        if self.transition(pid, Operation::Preempt) {
            self.queues.push_ready_front(pid);
        }
    }

    /// Running → Finished
    pub(crate) fn complete(&mut self, pid: Pid) {
        if self.transition(pid, Operation::Complete) {
            self.queues.insert_finished(pid);
        }
    }

    fn transition(&mut self, pid: Pid, operation: Operation) -> bool {
        let Some(process) = self.registry.get_mut(pid) else {
            warn!(pid, %operation, "Transition on unknown process");
            return false;
        };

        match operation.apply(pid, process.state) {
            Ok(next) => {
                process.state = next;
                true
            }
            Err(err) => {
                warn!(error = %err, "Rejected engine transition");
                false
            }
        }
    }
}
