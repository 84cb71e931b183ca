/*!
 * Simulator Limits and Constants
 *
 * Centralized location for defaults, bounds, and environment variable names.
 * Grouped by domain: scheduling, process attributes, configuration.
 */

use super::types::{Burst, Memory, Priority};

// =============================================================================
// SCHEDULING
// =============================================================================

/// Round-Robin quantum when none is configured (cycles per dispatch)
pub const DEFAULT_QUANTUM: u32 = 2;

/// Largest accepted Round-Robin quantum
pub const MAX_QUANTUM: u32 = 1_000;

// =============================================================================
// DEFAULT PROCESS ATTRIBUTES
// =============================================================================

/// Inclusive range for a randomly drawn CPU burst
pub const DEFAULT_CPU_MIN: Burst = 1;
pub const DEFAULT_CPU_MAX: Burst = 10;

/// Inclusive range for a randomly drawn memory footprint
pub const DEFAULT_MEMORY_MIN: Memory = 10;
pub const DEFAULT_MEMORY_MAX: Memory = 300;

/// Inclusive range for a randomly drawn priority (1 is the highest)
pub const DEFAULT_PRIORITY_MIN: Priority = 1;
pub const DEFAULT_PRIORITY_MAX: Priority = 5;

// =============================================================================
// ENVIRONMENT
// =============================================================================

pub const ENV_QUANTUM: &str = "SCHED_SIM_QUANTUM";
pub const ENV_SEED: &str = "SCHED_SIM_SEED";
pub const ENV_CPU_RANGE: &str = "SCHED_SIM_CPU_RANGE";
pub const ENV_MEMORY_RANGE: &str = "SCHED_SIM_MEMORY_RANGE";
pub const ENV_PRIORITY_RANGE: &str = "SCHED_SIM_PRIORITY_RANGE";

/// Emit JSON log lines instead of the compact human format
pub const ENV_TRACE_JSON: &str = "SCHED_SIM_TRACE_JSON";

/// Shell output mode (`text` or `json`)
pub const ENV_OUTPUT: &str = "SCHED_SIM_OUTPUT";
