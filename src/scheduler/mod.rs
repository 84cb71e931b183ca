/*!
 * Scheduler Module
 * CPU scheduling algorithms over the process manager's ready queue
 */

mod policy;
mod run;
mod stats;
pub mod trace;
pub mod types;

pub use run::Run;
pub use trace::{CycleEvent, CycleObservation, RunReport, RunSummary};
pub use types::{Algorithm, TimeQuantum};

use crate::process::ProcessManager;

/// CPU scheduler
///
/// Holds the run configuration; the processes themselves are lent to each
/// run, which keeps exclusive access to them until it is dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct Scheduler {
    quantum: TimeQuantum,
}

impl Scheduler {
    pub fn new(quantum: TimeQuantum) -> Self {
        Self { quantum }
    }

    /// Start a run of `algorithm` over the ready processes
    pub fn run<'a>(&self, processes: &'a mut ProcessManager, algorithm: Algorithm) -> Run<'a> {
        Run::new(processes, algorithm, self.quantum)
    }
}
