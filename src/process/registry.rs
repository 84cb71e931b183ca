/*!
 * Process Registry
 * Arena of every process ever created, indexed by PID
 */

use super::types::{Attributes, Process, ProcessState};
use crate::core::errors::SimError;
use crate::core::types::{ArrivalOrder, Pid, ProcessName, SimResult};

/// Canonical process table
///
/// PIDs are dense and start at 1, so a PID maps to `pid - 1` in the arena.
/// Nothing is ever removed, which keeps every PID stable for the
/// lifetime of the registry.
#[derive(Debug, Default)]
pub struct ProcessRegistry {
    processes: Vec<Process>,
    next_arrival: ArrivalOrder,
}

impl ProcessRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new Ready process and return its PID
    pub fn insert(&mut self, name: ProcessName, attrs: Attributes) -> Pid {
        // Vec length is bounded by isize::MAX, so this neither truncates nor wraps
        let pid = self.processes.len() as Pid + 1;
        self.next_arrival += 1;

        self.processes.push(Process {
            pid,
            name,
            remaining_cpu: attrs.cpu,
            memory: attrs.memory,
            priority: attrs.priority,
            state: ProcessState::Ready,
            arrival_order: self.next_arrival,
        });

        pid
    }

    #[inline]
    fn index(pid: Pid) -> Option<usize> {
        usize::try_from(pid).ok()?.checked_sub(1)
    }

    #[inline]
    pub fn get(&self, pid: Pid) -> Option<&Process> {
        Self::index(pid).and_then(|i| self.processes.get(i))
    }

    #[inline]
    pub fn get_mut(&mut self, pid: Pid) -> Option<&mut Process> {
        Self::index(pid).and_then(move |i| self.processes.get_mut(i))
    }

    /// Like `get_mut`, but reports unknown PIDs as `NotFound`
    pub fn require_mut(&mut self, pid: Pid) -> SimResult<&mut Process> {
        self.get_mut(pid).ok_or(SimError::NotFound(pid))
    }

    #[inline]
    pub fn contains(&self, pid: Pid) -> bool {
        self.get(pid).is_some()
    }

    /// Iterate over all processes in PID order
    pub fn iter(&self) -> impl Iterator<Item = &Process> {
        self.processes.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(cpu: u32) -> Attributes {
        Attributes {
            cpu,
            memory: 64,
            priority: 3,
        }
    }

    #[test]
    fn test_pids_are_monotonic() {
        let mut registry = ProcessRegistry::new();
        assert_eq!(registry.insert("a".into(), attrs(1)), 1);
        assert_eq!(registry.insert("b".into(), attrs(2)), 2);
        assert_eq!(registry.insert("a".into(), attrs(3)), 3);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_pids_never_collide() {
        let mut registry = ProcessRegistry::new();
        let pids: Vec<Pid> = (0..1_000)
            .map(|_| registry.insert("p".into(), attrs(1)))
            .collect();

        let unique: std::collections::HashSet<_> = pids.iter().collect();
        assert_eq!(unique.len(), pids.len());
        assert_eq!(pids.last().copied(), Some(1_000));
        assert!(registry.get(Pid::MAX).is_none());
    }

    #[test]
    fn test_arrival_order_strictly_increasing() {
        let mut registry = ProcessRegistry::new();
        for _ in 0..5 {
            registry.insert("p".into(), attrs(1));
        }
        let orders: Vec<_> = registry.iter().map(|p| p.arrival_order).collect();
        assert!(orders.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_lookup() {
        let mut registry = ProcessRegistry::new();
        let pid = registry.insert("worker".into(), attrs(4));

        let process = registry.get(pid).unwrap();
        assert_eq!(process.name.as_str(), "worker");
        assert_eq!(process.remaining_cpu, 4);
        assert_eq!(process.state, ProcessState::Ready);

        assert!(registry.get(0).is_none());
        assert!(registry.get(99).is_none());
        assert!(registry.contains(pid));
        assert!(!registry.contains(0));
        assert_eq!(registry.require_mut(99).unwrap_err(), SimError::NotFound(99));
    }
}
