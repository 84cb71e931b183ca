/*!
 * Scheduler Run
 * Lazy cycle-by-cycle execution of one algorithm over the ready queue
 */

use super::stats::RunStats;
use super::trace::{CycleEvent, CycleObservation, RunReport, RunSummary};
use super::types::{Algorithm, TimeQuantum};
use crate::core::types::Pid;
use crate::monitoring::span_run;
use crate::process::ProcessManager;
use tracing::{debug, info, trace, Span};

/// Process currently holding the CPU
#[derive(Debug, Clone, Copy)]
struct Slot {
    pid: Pid,
    quantum_left: Option<u32>,
}

/// An in-progress run
///
/// Yields one [`CycleObservation`] per simulated cycle and ends once no
/// eligible process is left in the ready sequence. The run holds the
/// process manager exclusively, so nothing else can mutate the queues until
/// it is dropped. Dropping it early hands the process on the CPU back to
/// the head of the ready sequence.
pub struct Run<'a> {
    processes: &'a mut ProcessManager,
    algorithm: Algorithm,
    quantum: TimeQuantum,
    active: Option<Slot>,
    stats: RunStats,
    done: bool,
    span: Span,
}

impl<'a> Run<'a> {
    pub(crate) fn new(
        processes: &'a mut ProcessManager,
        algorithm: Algorithm,
        quantum: TimeQuantum,
    ) -> Self {
        info!(
            algorithm = algorithm.as_str(),
            quantum = quantum.get(),
            processes = processes.len(),
            ready = processes.queues().ready_len(),
            blocked = processes.queues().blocked_len(),
            "Starting run: {}",
            algorithm.label()
        );
        Self {
            processes,
            algorithm,
            quantum,
            active: None,
            stats: RunStats::default(),
            done: false,
            span: span_run(algorithm.as_str(), quantum.get()),
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Read-only view of the processes, e.g. to resolve names while rendering
    pub fn processes(&self) -> &ProcessManager {
        &*self.processes
    }

    /// Statistics so far
    pub fn summary(&self) -> RunSummary {
        self.stats.summary(self.algorithm)
    }

    /// Drain the remaining cycles and return the final statistics
    pub fn finish(mut self) -> RunSummary {
        for _ in self.by_ref() {}
        self.summary()
    }

    /// Drain the remaining cycles, keeping every observation
    pub fn collect_report(mut self) -> RunReport {
        let observations: Vec<_> = self.by_ref().collect();
        RunReport {
            observations,
            summary: self.summary(),
        }
    }

    fn dispatch_next(&mut self) -> Option<Slot> {
        let pid = self.algorithm.select(&mut *self.processes)?;
        self.processes.dispatch(pid);

        let switched = self
            .stats
            .record_dispatch(pid, self.algorithm.counts_every_dispatch());
        debug!(
            pid,
            remaining = self.processes.remaining(pid),
            context_switch = switched,
            "Dispatched process"
        );

        Some(Slot {
            pid,
            quantum_left: self
                .algorithm
                .is_preemptive()
                .then(|| self.quantum.get()),
        })
    }

    /// Execute one cycle on the slot; `None` if the burst was already empty
    fn execute(&mut self, mut slot: Slot) -> Option<CycleObservation> {
        let pid = slot.pid;

        if self.processes.remaining(pid) == 0 {
            // Zero-length burst: finalize without consuming a cycle
            self.finalize(pid);
            return None;
        }

        let remaining = self.processes.consume_cycle(pid);
        let cycle = self.stats.record_cycle();
        slot.quantum_left = slot.quantum_left.map(|q| q.saturating_sub(1));

        let event = if remaining == 0 {
            Some(CycleEvent::Completed)
        } else if slot.quantum_left == Some(0) {
            Some(CycleEvent::Preempted)
        } else {
            None
        };

        let observation = CycleObservation {
            cycle,
            executing: Some(pid),
            remaining,
            quantum_remaining: slot.quantum_left,
            event,
            queues: self.processes.snapshot(),
            context_switches: self.stats.context_switches,
        };
        trace!(cycle, pid, remaining, "Cycle executed");

        match event {
            Some(CycleEvent::Completed) => self.finalize(pid),
            Some(CycleEvent::Preempted) => {
                self.processes.preempt(pid);
                self.stats.record_preemption();
                debug!(pid, remaining, "Process preempted, back to ready tail");
            }
            None => self.active = Some(slot),
        }

        Some(observation)
    }

    fn finalize(&mut self, pid: Pid) {
        self.processes.complete(pid);
        self.stats.record_completion(pid);
        info!(pid, cycle = self.stats.cycles, "Process finished");
    }
}

impl Iterator for Run<'_> {
    type Item = CycleObservation;

    fn next(&mut self) -> Option<CycleObservation> {
        let span = self.span.clone();
        let _entered = span.enter();

        while !self.done {
            let slot = match self.active.take() {
                Some(slot) => slot,
                None => match self.dispatch_next() {
                    Some(slot) => slot,
                    None => {
                        self.done = true;
                        let summary = self.summary();
                        info!(
                            algorithm = summary.algorithm.as_str(),
                            cycles = summary.total_cycles,
                            context_switches = summary.context_switches,
                            "Run complete"
                        );
                        break;
                    }
                },
            };

            if let Some(observation) = self.execute(slot) {
                return Some(observation);
            }
        }
        None
    }
}

impl std::iter::FusedIterator for Run<'_> {}

impl Drop for Run<'_> {
    fn drop(&mut self) {
        if let Some(slot) = self.active.take() {
            debug!(pid = slot.pid, "Run dropped mid-dispatch, returning process to ready head");
            self.processes.suspend(slot.pid);
        }
    }
}
