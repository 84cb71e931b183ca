/*!
 * Simulator
 * Engine object owning the process manager and the scheduler
 */

mod builder;
pub mod config;

pub use builder::SimulatorBuilder;
pub use config::SimConfig;

use crate::core::types::{Pid, SimResult};
use crate::process::{Process, ProcessLifecycle, ProcessManager, ProcessSpec, QueueSnapshot};
use crate::scheduler::{Algorithm, Run, RunReport, Scheduler};

/// Process-scheduling simulator
///
/// Administrative operations mutate processes between runs; `run` lends the
/// processes to a scheduler run for as long as the returned iterator lives.
#[derive(Debug)]
pub struct Simulator {
    processes: ProcessManager,
    scheduler: Scheduler,
    config: SimConfig,
}

impl Simulator {
    /// Simulator with default configuration
    pub fn new() -> Self {
        let config = SimConfig::default();
        Self {
            processes: ProcessManager::with_sampler(config.sampler()),
            scheduler: Scheduler::new(config.quantum),
            config,
        }
    }

    pub fn builder() -> SimulatorBuilder {
        SimulatorBuilder::new()
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn processes(&self) -> &ProcessManager {
        &self.processes
    }

    pub fn snapshot(&self) -> QueueSnapshot {
        self.processes.snapshot()
    }

    /// Start a run by algorithm token (`fifo`, `sjf`, `rr`, `prio`)
    ///
    /// An unknown token is rejected before anything is touched.
    pub fn run(&mut self, algorithm: &str) -> SimResult<Run<'_>> {
        let algorithm: Algorithm = algorithm.parse()?;
        Ok(self.run_algorithm(algorithm))
    }

    pub fn run_algorithm(&mut self, algorithm: Algorithm) -> Run<'_> {
        self.scheduler.run(&mut self.processes, algorithm)
    }

    /// Run to completion, keeping every observation
    pub fn run_to_completion(&mut self, algorithm: Algorithm) -> RunReport {
        self.run_algorithm(algorithm).collect_report()
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessLifecycle for Simulator {
    fn create(&mut self, spec: ProcessSpec) -> Pid {
        self.processes.create(spec)
    }

    fn kill(&mut self, pid: Pid) -> SimResult<()> {
        self.processes.kill(pid)
    }

    fn block(&mut self, pid: Pid) -> SimResult<()> {
        self.processes.block(pid)
    }

    fn unblock(&mut self, pid: Pid) -> SimResult<()> {
        self.processes.unblock(pid)
    }

    fn get(&self, pid: Pid) -> Option<&Process> {
        self.processes.get(pid)
    }

    fn list(&self) -> Vec<Process> {
        self.processes.list()
    }
}
