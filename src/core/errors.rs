/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use crate::core::types::Pid;
use crate::process::{Operation, ProcessState};
use miette::Diagnostic;
use serde::Serialize;
use thiserror::Error;

/// Simulator errors
///
/// Every variant is recoverable: the operation that produced it left all
/// registry and queue state untouched.
#[derive(Error, Debug, Clone, Serialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SimError {
    #[error("Process {0} not found")]
    #[diagnostic(
        code(process::not_found),
        help("Use `list` to see the PIDs of every process ever created.")
    )]
    NotFound(Pid),

    #[error("Cannot {operation} process {pid}: {}", rejection(.operation, .state))]
    #[diagnostic(
        code(process::invalid_transition),
        help("Blocked processes can only be unblocked; finished processes accept no transitions.")
    )]
    InvalidTransition {
        pid: Pid,
        operation: Operation,
        state: ProcessState,
    },

    #[error("Unknown algorithm '{0}'. Valid: fifo, sjf, rr, prio")]
    #[diagnostic(
        code(scheduler::unknown_algorithm),
        help("Run one of: fifo, sjf, rr, prio.")
    )]
    UnknownAlgorithm(String),

    #[error("Invalid configuration: {0}")]
    #[diagnostic(
        code(config::invalid),
        help("Check the SCHED_SIM_* environment variables.")
    )]
    InvalidConfig(String),
}

fn rejection(operation: &Operation, state: &ProcessState) -> String {
    match (operation, state) {
        (_, ProcessState::Finished) => "already finished".to_string(),
        (Operation::Block, ProcessState::Blocked) => "already blocked".to_string(),
        (Operation::Unblock, state) => format!("not blocked (state: {})", state),
        (_, state) => format!("not permitted from state {}", state),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_messages() {
        let kill = SimError::InvalidTransition {
            pid: 3,
            operation: Operation::Kill,
            state: ProcessState::Finished,
        };
        assert_eq!(kill.to_string(), "Cannot kill process 3: already finished");

        let block = SimError::InvalidTransition {
            pid: 1,
            operation: Operation::Block,
            state: ProcessState::Blocked,
        };
        assert_eq!(block.to_string(), "Cannot block process 1: already blocked");

        let unblock = SimError::InvalidTransition {
            pid: 2,
            operation: Operation::Unblock,
            state: ProcessState::Ready,
        };
        assert_eq!(
            unblock.to_string(),
            "Cannot unblock process 2: not blocked (state: ready)"
        );
    }

    #[test]
    fn test_unknown_algorithm_lists_valid_set() {
        let err = SimError::UnknownAlgorithm("lottery".into());
        let msg = err.to_string();
        for name in ["fifo", "sjf", "rr", "prio"] {
            assert!(msg.contains(name));
        }
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_string(&SimError::NotFound(7)).unwrap();
        assert_eq!(json, r#"{"error_type":"not_found","details":7}"#);
    }

    #[test]
    fn test_diagnostic_codes() {
        let err = SimError::NotFound(1);
        assert_eq!(err.code().unwrap().to_string(), "process::not_found");
        assert!(err.help().is_some());
    }
}
