/*!
 * Scheduler Simulator Library
 * Process registry, ready/blocked/finished queues, and four scheduling algorithms
 */

pub mod core;
pub mod monitoring;
pub mod process;
pub mod scheduler;
pub mod shell;
pub mod simulator;

// Re-exports
pub use crate::core::{Pid, SimError, SimResult};
pub use monitoring::init_tracing;
pub use process::{
    Process, ProcessLifecycle, ProcessManager, ProcessSpec, ProcessState, QueueSnapshot,
};
pub use scheduler::{
    Algorithm, CycleEvent, CycleObservation, Run, RunReport, RunSummary, Scheduler, TimeQuantum,
};
pub use shell::{OutputMode, Shell, ShellError};
pub use simulator::{SimConfig, Simulator, SimulatorBuilder};
