/*!
 * Process Traits
 * Administrative process control used by the command shell
 */

use super::types::{Process, ProcessSpec};
use crate::core::types::{Burst, Memory, Pid, Priority, ProcessName, SimResult};

/// Process lifecycle management
pub trait ProcessLifecycle {
    /// Create a new process; unspecified attributes are drawn at random
    fn create(&mut self, spec: ProcessSpec) -> Pid;

    /// Terminate a process immediately
    fn kill(&mut self, pid: Pid) -> SimResult<()>;

    /// Move a ready process out of the ready sequence
    fn block(&mut self, pid: Pid) -> SimResult<()>;

    /// Return a blocked process to the tail of the ready sequence
    fn unblock(&mut self, pid: Pid) -> SimResult<()>;

    /// Get process information
    fn get(&self, pid: Pid) -> Option<&Process>;

    /// All processes sorted by PID
    fn list(&self) -> Vec<Process>;

    /// Convenience form of `create` taking each attribute separately
    fn create_with(
        &mut self,
        name: impl Into<ProcessName>,
        cpu: Option<Burst>,
        memory: Option<Memory>,
        priority: Option<Priority>,
    ) -> Pid
    where
        Self: Sized,
    {
        self.create(ProcessSpec {
            name: name.into(),
            cpu,
            memory,
            priority,
        })
    }

    /// Check if a process exists
    fn exists(&self, pid: Pid) -> bool {
        self.get(pid).is_some()
    }
}
