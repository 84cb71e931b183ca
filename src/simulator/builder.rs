/*!
 * Simulator Builder
 * Fluent construction with validated configuration
 */

use super::config::SimConfig;
use super::Simulator;
use crate::core::types::SimResult;
use crate::process::ProcessManager;
use crate::scheduler::{Scheduler, TimeQuantum};
use tracing::info;

/// Builder for Simulator
#[derive(Debug, Clone, Default)]
pub struct SimulatorBuilder {
    config: SimConfig,
    quantum: Option<u32>,
    seed: Option<u64>,
}

impl SimulatorBuilder {
    /// Create a new Simulator builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration
    pub fn with_config(mut self, config: SimConfig) -> Self {
        self.config = config;
        self
    }

    /// Override the Round-Robin quantum (validated in `build`)
    pub fn with_quantum(mut self, cycles: u32) -> Self {
        self.quantum = Some(cycles);
        self
    }

    /// Make random attribute defaults reproducible
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the Simulator
    pub fn build(self) -> SimResult<Simulator> {
        let mut config = self.config;
        if let Some(cycles) = self.quantum {
            config.quantum = TimeQuantum::new(cycles)?;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        config.validate()?;

        info!(
            quantum = config.quantum.get(),
            cpu_range = %config.cpu_range,
            memory_range = %config.memory_range,
            priority_range = %config.priority_range,
            seeded = config.seed.is_some(),
            "Simulator initialized"
        );

        Ok(Simulator {
            processes: ProcessManager::with_sampler(config.sampler()),
            scheduler: Scheduler::new(config.quantum),
            config,
        })
    }
}
