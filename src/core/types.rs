/*!
 * Core Types
 * Common types used across the simulator
 */

/// Process ID type (monotonic, starts at 1, never reused)
///
/// 64 bits wide so the arena length always fits; PIDs cannot wrap.
pub type Pid = u64;

/// CPU burst length, measured in simulation cycles
pub type Burst = u32;

/// Informational memory footprint
pub type Memory = u32;

/// Priority level (lower value is scheduled first, negatives allowed)
pub type Priority = i32;

/// Creation sequence number used as the oldest-first tie-breaker
pub type ArrivalOrder = u64;

/// Simulated CPU cycle counter
pub type Cycle = u64;

/// Display label for a process (short names stay inline)
pub type ProcessName = smartstring::alias::String;

/// Common result type for simulator operations
pub type SimResult<T> = Result<T, super::errors::SimError>;
