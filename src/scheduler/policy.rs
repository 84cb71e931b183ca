/*!
 * Selection Policies
 * Which ready process each algorithm dispatches next
 */

use super::types::Algorithm;
use crate::core::types::Pid;
use crate::process::{Process, ProcessManager};

impl Algorithm {
    /// Pick the next process and remove it from the ready sequence
    ///
    /// Returns `None` once no eligible process is left, which ends the run.
    pub(crate) fn select(&self, processes: &mut ProcessManager) -> Option<Pid> {
        match self {
            Self::Fifo | Self::RoundRobin => processes.pop_eligible(),
            Self::Sjf => select_min(processes, |p| i64::from(p.remaining_cpu)),
            Self::Priority => select_min(processes, |p| i64::from(p.priority)),
        }
    }
}

/// Scan eligible processes for the smallest key, oldest arrival on ties
fn select_min<F>(processes: &mut ProcessManager, key: F) -> Option<Pid>
where
    F: Fn(&Process) -> i64,
{
    let pid = processes
        .eligible()
        .min_by_key(|p| (key(p), p.arrival_order))
        .map(|p| p.pid)?;

    processes.take_ready(pid);
    Some(pid)
}
