/*!
 * Process State Machine
 *
 * Ready → Running       dispatch
 * Running → Ready       preempt (Round-Robin quantum exhausted)
 * Running → Finished    complete (burst reached zero)
 * Ready|Running → Blocked   block
 * Blocked → Ready       unblock
 * any non-Finished → Finished   kill
 *
 * Finished is terminal.
 */

use super::types::ProcessState;
use crate::core::errors::SimError;
use crate::core::types::{Pid, SimResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An operation that moves a process between states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Dispatch,
    Preempt,
    Complete,
    Block,
    Unblock,
    Kill,
}

impl Operation {
    /// State the process lands in when the operation succeeds
    #[inline]
    pub const fn target(self) -> ProcessState {
        match self {
            Self::Dispatch => ProcessState::Running,
            Self::Preempt | Self::Unblock => ProcessState::Ready,
            Self::Complete | Self::Kill => ProcessState::Finished,
            Self::Block => ProcessState::Blocked,
        }
    }

    /// Whether the operation may be applied to a process in `from`
    #[inline]
    pub const fn permits(self, from: ProcessState) -> bool {
        use ProcessState::*;
        match self {
            Self::Dispatch => matches!(from, Ready),
            Self::Preempt | Self::Complete => matches!(from, Running),
            Self::Block => matches!(from, Ready | Running),
            Self::Unblock => matches!(from, Blocked),
            Self::Kill => !matches!(from, Finished),
        }
    }

    /// Validate the transition and return the target state
    pub fn apply(self, pid: Pid, from: ProcessState) -> SimResult<ProcessState> {
        if self.permits(from) {
            Ok(self.target())
        } else {
            Err(SimError::InvalidTransition {
                pid,
                operation: self,
                state: from,
            })
        }
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Dispatch => "dispatch",
            Self::Preempt => "preempt",
            Self::Complete => "complete",
            Self::Block => "block",
            Self::Unblock => "unblock",
            Self::Kill => "kill",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ProcessState::*;

    const ALL_STATES: [ProcessState; 4] = [Ready, Running, Blocked, Finished];
    const ALL_OPS: [Operation; 6] = [
        Operation::Dispatch,
        Operation::Preempt,
        Operation::Complete,
        Operation::Block,
        Operation::Unblock,
        Operation::Kill,
    ];

    #[test]
    fn test_finished_is_terminal() {
        for op in ALL_OPS {
            assert!(!op.permits(Finished), "{op} must not leave Finished");
        }
    }

    #[test]
    fn test_block_and_unblock() {
        assert_eq!(Operation::Block.apply(1, Ready).unwrap(), Blocked);
        assert_eq!(Operation::Block.apply(1, Running).unwrap(), Blocked);
        assert!(Operation::Block.apply(1, Blocked).is_err());
        assert_eq!(Operation::Unblock.apply(1, Blocked).unwrap(), Ready);
        assert!(Operation::Unblock.apply(1, Ready).is_err());
        assert!(Operation::Unblock.apply(1, Running).is_err());
    }

    #[test]
    fn test_kill_from_any_live_state() {
        for state in [Ready, Running, Blocked] {
            assert_eq!(Operation::Kill.apply(9, state).unwrap(), Finished);
        }
        let err = Operation::Kill.apply(9, Finished).unwrap_err();
        assert_eq!(
            err,
            SimError::InvalidTransition {
                pid: 9,
                operation: Operation::Kill,
                state: Finished,
            }
        );
    }

    #[test]
    fn test_engine_transitions() {
        for state in ALL_STATES {
            assert_eq!(Operation::Dispatch.permits(state), state == Ready);
            assert_eq!(Operation::Preempt.permits(state), state == Running);
            assert_eq!(Operation::Complete.permits(state), state == Running);
        }
    }
}
