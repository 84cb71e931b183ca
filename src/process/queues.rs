/*!
 * Queue Manager
 * Ready sequence plus blocked and finished sets
 */

use crate::core::types::Pid;
use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Membership of the three scheduler collections
///
/// Every live PID is in exactly one of {ready, blocked, on the CPU}; a
/// finished PID is only ever in `finished`.
#[derive(Debug, Default)]
pub struct QueueManager {
    // Ready sequence in eligibility order, mirrored by a set for O(1) membership
    ready: VecDeque<Pid>,
    ready_members: AHashSet<Pid>,

    blocked: AHashSet<Pid>,

    // Completion order is kept for snapshots and summaries
    finished: Vec<Pid>,
    finished_members: AHashSet<Pid>,
}

/// Point-in-time copy of queue membership
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct QueueSnapshot {
    /// Ready sequence, head first
    pub ready: Vec<Pid>,
    /// Blocked set, sorted by PID
    pub blocked: Vec<Pid>,
    /// Finished set, in completion order
    pub finished: Vec<Pid>,
}

impl QueueSnapshot {
    /// Check whether a PID appears in any collection
    pub fn contains(&self, pid: Pid) -> bool {
        self.ready.contains(&pid) || self.blocked.contains(&pid) || self.finished.contains(&pid)
    }
}

impl QueueManager {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Ready sequence
    // =========================================================================

    /// Append to the tail of the ready sequence (no-op if already queued)
    pub fn push_ready(&mut self, pid: Pid) -> bool {
        if !self.ready_members.insert(pid) {
            return false;
        }
        self.ready.push_back(pid);
        true
    }

    /// Put a PID back at the head of the ready sequence
    pub fn push_ready_front(&mut self, pid: Pid) -> bool {
        if !self.ready_members.insert(pid) {
            return false;
        }
        self.ready.push_front(pid);
        true
    }

    /// Pop the head of the ready sequence
    pub fn pop_ready(&mut self) -> Option<Pid> {
        let pid = self.ready.pop_front()?;
        self.ready_members.remove(&pid);
        Some(pid)
    }

    /// Remove a PID from anywhere in the ready sequence - O(1) check + O(n) scan
    pub fn remove_ready(&mut self, pid: Pid) -> bool {
        if !self.ready_members.remove(&pid) {
            return false;
        }
        if let Some(pos) = self.ready.iter().position(|&p| p == pid) {
            self.ready.remove(pos);
        }
        true
    }

    #[inline]
    pub fn is_ready(&self, pid: Pid) -> bool {
        self.ready_members.contains(&pid)
    }

    /// Ready PIDs, head first
    pub fn ready(&self) -> impl Iterator<Item = Pid> + '_ {
        self.ready.iter().copied()
    }

    #[inline]
    pub fn ready_len(&self) -> usize {
        self.ready.len()
    }

    // =========================================================================
    // Blocked set
    // =========================================================================

    pub fn insert_blocked(&mut self, pid: Pid) -> bool {
        self.blocked.insert(pid)
    }

    pub fn remove_blocked(&mut self, pid: Pid) -> bool {
        self.blocked.remove(&pid)
    }

    #[inline]
    pub fn is_blocked(&self, pid: Pid) -> bool {
        self.blocked.contains(&pid)
    }

    #[inline]
    pub fn blocked_len(&self) -> usize {
        self.blocked.len()
    }

    // =========================================================================
    // Finished set
    // =========================================================================

    /// Record a finished PID (idempotent)
    pub fn insert_finished(&mut self, pid: Pid) -> bool {
        if !self.finished_members.insert(pid) {
            return false;
        }
        self.finished.push(pid);
        true
    }

    #[inline]
    pub fn is_finished(&self, pid: Pid) -> bool {
        self.finished_members.contains(&pid)
    }

    /// Finished PIDs in completion order
    pub fn finished(&self) -> &[Pid] {
        &self.finished
    }

    // =========================================================================
    // Snapshots
    // =========================================================================

    pub fn snapshot(&self) -> QueueSnapshot {
        let mut blocked: Vec<Pid> = self.blocked.iter().copied().collect();
        blocked.sort_unstable();

        QueueSnapshot {
            ready: self.ready.iter().copied().collect(),
            blocked,
            finished: self.finished.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_ready_fifo_order() {
        let mut queues = QueueManager::new();
        queues.push_ready(1);
        queues.push_ready(2);
        queues.push_ready(3);

        assert_eq!(queues.pop_ready(), Some(1));
        assert_eq!(queues.pop_ready(), Some(2));
        assert!(!queues.is_ready(1));
        assert!(queues.is_ready(3));
    }

    #[test]
    fn test_push_ready_is_idempotent() {
        let mut queues = QueueManager::new();
        assert!(queues.push_ready(1));
        assert!(!queues.push_ready(1));
        assert_eq!(queues.ready_len(), 1);
    }

    #[test]
    fn test_remove_from_middle() {
        let mut queues = QueueManager::new();
        for pid in 1..=4 {
            queues.push_ready(pid);
        }

        assert!(queues.remove_ready(3));
        assert!(!queues.remove_ready(3));
        assert_eq!(queues.ready().collect::<Vec<_>>(), vec![1, 2, 4]);
    }

    #[test]
    fn test_push_front() {
        let mut queues = QueueManager::new();
        queues.push_ready(2);
        queues.push_ready_front(1);
        assert_eq!(queues.ready().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_finished_keeps_completion_order() {
        let mut queues = QueueManager::new();
        queues.insert_finished(5);
        queues.insert_finished(2);
        assert!(!queues.insert_finished(5));
        assert_eq!(queues.finished(), &[5, 2]);
    }

    #[test]
    fn test_snapshot() {
        let mut queues = QueueManager::new();
        queues.push_ready(4);
        queues.push_ready(1);
        queues.insert_blocked(7);
        queues.insert_blocked(3);
        queues.insert_finished(9);

        assert_eq!(
            queues.snapshot(),
            QueueSnapshot {
                ready: vec![4, 1],
                blocked: vec![3, 7],
                finished: vec![9],
            }
        );
    }
}
