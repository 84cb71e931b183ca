/*!
 * Simulator Configuration
 * Defaults, validation, and environment overrides
 */

use crate::core::errors::SimError;
use crate::core::limits::*;
use crate::core::types::{Burst, Memory, Priority, SimResult};
use crate::process::{AttributeRange, AttributeSampler};
use crate::scheduler::TimeQuantum;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::debug;

/// Simulator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct SimConfig {
    /// Round-Robin quantum in cycles
    pub quantum: TimeQuantum,
    /// Range for CPU bursts drawn at creation
    pub cpu_range: AttributeRange<Burst>,
    /// Range for memory footprints drawn at creation
    pub memory_range: AttributeRange<Memory>,
    /// Range for priorities drawn at creation
    pub priority_range: AttributeRange<Priority>,
    /// Seed for attribute defaults; `None` draws from OS entropy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            quantum: TimeQuantum::default(),
            cpu_range: AttributeRange {
                lo: DEFAULT_CPU_MIN,
                hi: DEFAULT_CPU_MAX,
            },
            memory_range: AttributeRange {
                lo: DEFAULT_MEMORY_MIN,
                hi: DEFAULT_MEMORY_MAX,
            },
            priority_range: AttributeRange {
                lo: DEFAULT_PRIORITY_MIN,
                hi: DEFAULT_PRIORITY_MAX,
            },
            seed: None,
        }
    }
}

impl SimConfig {
    /// Defaults overlaid with `SCHED_SIM_*` environment variables
    pub fn from_env() -> SimResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with values from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> SimResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_QUANTUM) {
            config.quantum = TimeQuantum::new(parse_env(ENV_QUANTUM, &raw)?)?;
        }
        if let Some(raw) = lookup(ENV_SEED) {
            config.seed = Some(parse_env(ENV_SEED, &raw)?);
        }
        if let Some(raw) = lookup(ENV_CPU_RANGE) {
            config.cpu_range = raw.parse()?;
        }
        if let Some(raw) = lookup(ENV_MEMORY_RANGE) {
            config.memory_range = raw.parse()?;
        }
        if let Some(raw) = lookup(ENV_PRIORITY_RANGE) {
            config.priority_range = raw.parse()?;
        }

        config.validate()?;
        debug!(?config, "Loaded simulator configuration");
        Ok(config)
    }

    /// Check cross-field constraints
    pub fn validate(&self) -> SimResult<()> {
        for (name, lo, hi) in [
            ("cpu", i64::from(self.cpu_range.lo), i64::from(self.cpu_range.hi)),
            (
                "memory",
                i64::from(self.memory_range.lo),
                i64::from(self.memory_range.hi),
            ),
            (
                "priority",
                i64::from(self.priority_range.lo),
                i64::from(self.priority_range.hi),
            ),
        ] {
            if lo > hi {
                return Err(SimError::InvalidConfig(format!(
                    "{} range {}-{} is empty",
                    name, lo, hi
                )));
            }
        }

        if self.cpu_range.lo == 0 {
            return Err(SimError::InvalidConfig(
                "cpu range must start at 1 or above".to_string(),
            ));
        }
        Ok(())
    }

    /// Attribute sampler for these ranges and seed
    pub fn sampler(&self) -> AttributeSampler {
        AttributeSampler::new(
            self.cpu_range,
            self.memory_range,
            self.priority_range,
            self.seed,
        )
    }
}

fn parse_env<T: FromStr>(key: &str, raw: &str) -> SimResult<T> {
    raw.trim()
        .parse()
        .map_err(|_| SimError::InvalidConfig(format!("{}='{}' is not a valid number", key, raw)))
}
