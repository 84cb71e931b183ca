/*!
 * Scheduler Types
 * Algorithm selection and quantum configuration
 */

use crate::core::errors::SimError;
use crate::core::limits::{DEFAULT_QUANTUM, MAX_QUANTUM};
use crate::core::types::SimResult;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Scheduling discipline for a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// First-in-first-out, run to completion
    Fifo,
    /// Shortest remaining burst first, non-preemptive
    Sjf,
    /// Fixed-quantum preemptive rotation
    RoundRobin,
    /// Lowest priority value first, non-preemptive
    Priority,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [Self::Fifo, Self::Sjf, Self::RoundRobin, Self::Priority];

    /// Command token for the algorithm
    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fifo => "fifo",
            Self::Sjf => "sjf",
            Self::RoundRobin => "rr",
            Self::Priority => "prio",
        }
    }

    /// Human-readable name
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Fifo => "FIFO",
            Self::Sjf => "SJF (Shortest Job First, non-preemptive)",
            Self::RoundRobin => "Round Robin",
            Self::Priority => "Priority (1 = highest)",
        }
    }

    /// Whether a dispatch can end before the burst does
    #[inline]
    pub const fn is_preemptive(&self) -> bool {
        matches!(self, Self::RoundRobin)
    }

    /// Round-Robin counts every dispatch as a context switch; the others
    /// count only a change of executing process
    #[inline]
    pub const fn counts_every_dispatch(&self) -> bool {
        matches!(self, Self::RoundRobin)
    }
}

impl FromStr for Algorithm {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fifo" | "fcfs" => Ok(Self::Fifo),
            "sjf" => Ok(Self::Sjf),
            "rr" | "round_robin" | "roundrobin" => Ok(Self::RoundRobin),
            "prio" | "priority" => Ok(Self::Priority),
            _ => Err(SimError::UnknownAlgorithm(s.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Algorithm {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Algorithm {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Round-Robin time quantum, in cycles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TimeQuantum(u32);

impl TimeQuantum {
    /// Create new time quantum
    pub fn new(cycles: u32) -> SimResult<Self> {
        if cycles == 0 || cycles > MAX_QUANTUM {
            return Err(SimError::InvalidConfig(format!(
                "quantum {} must be between 1 and {} cycles",
                cycles, MAX_QUANTUM
            )));
        }
        Ok(Self(cycles))
    }

    #[inline(always)]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl Default for TimeQuantum {
    fn default() -> Self {
        Self(DEFAULT_QUANTUM)
    }
}

impl fmt::Display for TimeQuantum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for TimeQuantum {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let cycles = u32::deserialize(deserializer)?;
        Self::new(cycles).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algorithm_parsing() {
        assert_eq!("fifo".parse::<Algorithm>().unwrap(), Algorithm::Fifo);
        assert_eq!("sjf".parse::<Algorithm>().unwrap(), Algorithm::Sjf);
        assert_eq!("rr".parse::<Algorithm>().unwrap(), Algorithm::RoundRobin);
        assert_eq!("PRIO".parse::<Algorithm>().unwrap(), Algorithm::Priority);
        assert_eq!(
            "lottery".parse::<Algorithm>().unwrap_err(),
            SimError::UnknownAlgorithm("lottery".into())
        );
    }

    #[test]
    fn test_tokens_round_trip() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.as_str().parse::<Algorithm>().unwrap(), algorithm);
        }
    }

    #[test]
    fn test_time_quantum_validation() {
        assert!(TimeQuantum::new(0).is_err());
        assert!(TimeQuantum::new(1).is_ok());
        assert!(TimeQuantum::new(MAX_QUANTUM).is_ok());
        assert!(TimeQuantum::new(MAX_QUANTUM + 1).is_err());
        assert_eq!(TimeQuantum::default().get(), DEFAULT_QUANTUM);
    }

    #[test]
    fn test_quantum_deserialize_validates() {
        assert!(serde_json::from_str::<TimeQuantum>("0").is_err());
        assert_eq!(serde_json::from_str::<TimeQuantum>("3").unwrap().get(), 3);
    }
}
