/*!
 * Process Types
 * Common types for process management
 */

use crate::core::types::{ArrivalOrder, Burst, Memory, Pid, Priority, ProcessName};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Process state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessState {
    /// Eligible for dispatch, queued in the ready sequence
    Ready,
    /// Currently occupying the simulated CPU
    Running,
    /// Parked by an explicit block request
    Blocked,
    /// Terminal: burst exhausted or killed
    Finished,
}

impl ProcessState {
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ready => "ready",
            Self::Running => "running",
            Self::Blocked => "blocked",
            Self::Finished => "finished",
        }
    }
}

impl fmt::Display for ProcessState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Simulated process record
///
/// Records are never removed from the registry; a finished process stays
/// queryable with `remaining_cpu == 0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Process {
    pub pid: Pid,
    pub name: ProcessName,
    pub remaining_cpu: Burst,
    pub memory: Memory,
    pub priority: Priority,
    pub state: ProcessState,
    pub arrival_order: ArrivalOrder,
}

impl Process {
    /// Check if process is finished
    #[inline(always)]
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        matches!(self.state, ProcessState::Finished)
    }

    /// Check if process is blocked
    #[inline(always)]
    #[must_use]
    pub const fn is_blocked(&self) -> bool {
        matches!(self.state, ProcessState::Blocked)
    }

    /// Check if process can be picked by a scheduling policy
    #[inline(always)]
    #[must_use]
    pub const fn is_eligible(&self) -> bool {
        matches!(self.state, ProcessState::Ready)
    }
}

/// Attributes requested at creation; `None` fields are drawn at random
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessSpec {
    pub name: ProcessName,
    #[serde(default)]
    pub cpu: Option<Burst>,
    #[serde(default)]
    pub memory: Option<Memory>,
    #[serde(default)]
    pub priority: Option<Priority>,
}

impl ProcessSpec {
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<ProcessName>) -> Self {
        Self {
            name: name.into(),
            cpu: None,
            memory: None,
            priority: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn with_cpu(mut self, cpu: Burst) -> Self {
        self.cpu = Some(cpu);
        self
    }

    #[inline]
    #[must_use]
    pub fn with_memory(mut self, memory: Memory) -> Self {
        self.memory = Some(memory);
        self
    }

    #[inline]
    #[must_use]
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }
}

/// Fully resolved attributes for a new process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attributes {
    pub cpu: Burst,
    pub memory: Memory,
    pub priority: Priority,
}
