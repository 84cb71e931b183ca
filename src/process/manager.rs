/*!
 * Process Management
 * Handles process creation, administrative transitions, and queue bookkeeping
 */

use super::defaults::AttributeSampler;
use super::lifecycle::Operation;
use super::queues::{QueueManager, QueueSnapshot};
use super::registry::ProcessRegistry;
use super::traits::ProcessLifecycle;
use super::types::{Process, ProcessSpec, ProcessState};
use crate::core::types::{Pid, SimResult};
use tracing::{debug, info};

/// Owns the process registry and the scheduler queues
///
/// All state changes go through here so the registry and the queue
/// membership never disagree.
#[derive(Debug)]
pub struct ProcessManager {
    pub(crate) registry: ProcessRegistry,
    pub(crate) queues: QueueManager,
    sampler: AttributeSampler,
}

impl ProcessManager {
    pub fn new() -> Self {
        Self::with_sampler(AttributeSampler::default())
    }

    pub fn with_sampler(sampler: AttributeSampler) -> Self {
        info!("Process manager initialized");
        Self {
            registry: ProcessRegistry::new(),
            queues: QueueManager::new(),
            sampler,
        }
    }

    /// Current queue membership
    pub fn queues(&self) -> &QueueManager {
        &self.queues
    }

    pub fn snapshot(&self) -> QueueSnapshot {
        self.queues.snapshot()
    }

    /// Number of processes ever created
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Whether any ready process could still be dispatched
    pub fn has_ready(&self) -> bool {
        self.queues
            .ready()
            .any(|pid| self.registry.get(pid).is_some_and(Process::is_eligible))
    }
}

impl Default for ProcessManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessLifecycle for ProcessManager {
    fn create(&mut self, spec: ProcessSpec) -> Pid {
        let attrs = self.sampler.resolve(&spec);
        let pid = self.registry.insert(spec.name, attrs);
        self.queues.push_ready(pid);

        info!(
            pid,
            cpu = attrs.cpu,
            memory = attrs.memory,
            priority = attrs.priority,
            "Process created"
        );
        pid
    }

    fn kill(&mut self, pid: Pid) -> SimResult<()> {
        let process = self.registry.require_mut(pid)?;
        process.state = Operation::Kill.apply(pid, process.state)?;
        process.remaining_cpu = 0;

        self.queues.remove_ready(pid);
        self.queues.remove_blocked(pid);
        self.queues.insert_finished(pid);

        info!(pid, "Process killed");
        Ok(())
    }

    fn block(&mut self, pid: Pid) -> SimResult<()> {
        let process = self.registry.require_mut(pid)?;
        process.state = Operation::Block.apply(pid, process.state)?;

        self.queues.remove_ready(pid);
        self.queues.insert_blocked(pid);

        info!(pid, "Process blocked");
        Ok(())
    }

    fn unblock(&mut self, pid: Pid) -> SimResult<()> {
        let process = self.registry.require_mut(pid)?;
        process.state = Operation::Unblock.apply(pid, process.state)?;

        self.queues.remove_blocked(pid);
        self.queues.push_ready(pid);

        info!(pid, "Process unblocked, appended to ready queue");
        Ok(())
    }

    fn get(&self, pid: Pid) -> Option<&Process> {
        self.registry.get(pid)
    }

    fn list(&self) -> Vec<Process> {
        debug!(count = self.registry.len(), "Listing processes");
        self.registry.iter().cloned().collect()
    }

    fn exists(&self, pid: Pid) -> bool {
        self.registry.contains(pid)
    }
}

impl ProcessManager {
    /// State of a process, if it exists
    pub fn state(&self, pid: Pid) -> Option<ProcessState> {
        self.registry.get(pid).map(|p| p.state)
    }
}
