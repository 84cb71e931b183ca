/*!
 * Default Attribute Generation
 * Draws missing CPU/memory/priority values from configured ranges
 */

use super::types::{Attributes, ProcessSpec};
use crate::core::errors::SimError;
use crate::core::limits::*;
use crate::core::types::{Burst, Memory, Priority, SimResult};
use rand::distributions::uniform::SampleUniform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Inclusive `lo..=hi` range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeRange<T> {
    pub lo: T,
    pub hi: T,
}

impl<T: PartialOrd + Copy + fmt::Display> AttributeRange<T> {
    pub fn new(lo: T, hi: T) -> SimResult<Self> {
        if lo > hi {
            return Err(SimError::InvalidConfig(format!(
                "range {}-{} is empty (lower bound above upper bound)",
                lo, hi
            )));
        }
        Ok(Self { lo, hi })
    }

    #[inline]
    pub fn contains(&self, value: T) -> bool {
        self.lo <= value && value <= self.hi
    }
}

impl<T: fmt::Display> fmt::Display for AttributeRange<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.lo, self.hi)
    }
}

impl<T> FromStr for AttributeRange<T>
where
    T: FromStr + PartialOrd + Copy + fmt::Display,
{
    type Err = SimError;

    /// Parse `lo-hi` (or a single value meaning `n-n`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let parse = |part: &str| {
            part.trim()
                .parse::<T>()
                .map_err(|_| SimError::InvalidConfig(format!("invalid range bound '{}'", part)))
        };

        // A leading '-' is a sign, not the separator
        let separator = s
            .char_indices()
            .skip(1)
            .find(|&(_, c)| c == '-')
            .map(|(i, _)| i);

        match separator {
            Some(i) => Self::new(parse(&s[..i])?, parse(&s[i + 1..])?),
            None => {
                let value = parse(s)?;
                Self::new(value, value)
            }
        }
    }
}

/// Random source for attributes left unspecified at creation
#[derive(Debug, Clone)]
pub struct AttributeSampler {
    rng: StdRng,
    cpu: AttributeRange<Burst>,
    memory: AttributeRange<Memory>,
    priority: AttributeRange<Priority>,
}

impl AttributeSampler {
    /// Sampler with explicit ranges; `seed` makes the draws reproducible
    pub fn new(
        cpu: AttributeRange<Burst>,
        memory: AttributeRange<Memory>,
        priority: AttributeRange<Priority>,
        seed: Option<u64>,
    ) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            rng,
            cpu,
            memory,
            priority,
        }
    }

    /// Resolve a spec into concrete attributes
    pub fn resolve(&mut self, spec: &ProcessSpec) -> Attributes {
        Attributes {
            cpu: spec.cpu.unwrap_or_else(|| draw(&mut self.rng, self.cpu)),
            memory: spec.memory.unwrap_or_else(|| draw(&mut self.rng, self.memory)),
            priority: spec
                .priority
                .unwrap_or_else(|| draw(&mut self.rng, self.priority)),
        }
    }
}

impl Default for AttributeSampler {
    fn default() -> Self {
        Self::new(
            AttributeRange {
                lo: DEFAULT_CPU_MIN,
                hi: DEFAULT_CPU_MAX,
            },
            AttributeRange {
                lo: DEFAULT_MEMORY_MIN,
                hi: DEFAULT_MEMORY_MAX,
            },
            AttributeRange {
                lo: DEFAULT_PRIORITY_MIN,
                hi: DEFAULT_PRIORITY_MAX,
            },
            None,
        )
    }
}

#[inline]
fn draw<T: SampleUniform + PartialOrd + Copy>(rng: &mut StdRng, range: AttributeRange<T>) -> T {
    rng.gen_range(range.lo..=range.hi)
}
