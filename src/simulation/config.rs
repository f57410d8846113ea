// src/simulation/config.rs

use std::collections::HashSet;
use std::fmt;

use crate::core::constants::{
    FIGURE7_REPETITIONS, FIGURE7_TIMES, GROVER_BIT_OUTCOMES, GROVER_REPETITIONS,
};
use crate::core::{DIM, WalkError};

/// Parameters of one frequency-aggregation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregationConfig {
    times: Vec<u32>,
    repetitions: usize,
    outcomes: usize,
}

impl AggregationConfig {
    /// Starts a builder with the figure 7 defaults.
    pub fn builder() -> AggregationConfigBuilder {
        AggregationConfigBuilder::new()
    }

    /// Figure 7 run: times `[1, 2, 3, 4, 8, 10, 25, 100]`, 10 000
    /// repetitions, one outcome per vertex.
    pub fn figure7() -> Self {
        Self {
            times: FIGURE7_TIMES.to_vec(),
            repetitions: FIGURE7_REPETITIONS,
            outcomes: DIM,
        }
    }

    /// Grover bit-position histogram: a single run of 1 000 repetitions
    /// over 16 bit positions.
    pub fn grover_bits() -> Self {
        Self {
            times: vec![1],
            repetitions: GROVER_REPETITIONS,
            outcomes: GROVER_BIT_OUTCOMES,
        }
    }

    /// Step counts, in the order they are simulated.
    pub fn times(&self) -> &[u32] {
        &self.times
    }

    /// Host calls per step count.
    pub fn repetitions(&self) -> usize {
        self.repetitions
    }

    /// Size of the outcome range `0..outcomes`.
    pub fn outcomes(&self) -> usize {
        self.outcomes
    }

    /// Total number of host calls the run performs.
    pub fn total_calls(&self) -> usize {
        self.repetitions * self.times.len()
    }

    fn validate(&self) -> Result<(), WalkError> {
        if self.times.is_empty() {
            return Err(WalkError::InvalidConfig { message: "At least one time value is required".to_string() });
        }
        let mut seen = HashSet::with_capacity(self.times.len());
        for t in &self.times {
            if !seen.insert(*t) {
                return Err(WalkError::InvalidConfig { message: format!("Time value {} is listed twice", t) });
            }
        }
        if self.repetitions == 0 {
            return Err(WalkError::InvalidConfig { message: "Repetitions must be positive".to_string() });
        }
        if self.outcomes == 0 {
            return Err(WalkError::InvalidConfig { message: "Outcome range must be non-empty".to_string() });
        }
        Ok(())
    }
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self::figure7()
    }
}

impl fmt::Display for AggregationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "times={:?} repetitions={} outcomes=0..{}",
            self.times, self.repetitions, self.outcomes
        )
    }
}

/// Method-chaining builder for [`AggregationConfig`].
#[derive(Debug, Clone)]
pub struct AggregationConfigBuilder {
    config: AggregationConfig,
}

impl AggregationConfigBuilder {
    /// Creates a builder pre-filled with [`AggregationConfig::figure7`].
    pub fn new() -> Self {
        Self { config: AggregationConfig::figure7() }
    }

    /// Replaces the step counts.
    pub fn times<I>(mut self, times: I) -> Self
    where
        I: IntoIterator<Item = u32>,
    {
        self.config.times = times.into_iter().collect();
        self
    }

    /// Sets the host calls per step count.
    pub fn repetitions(mut self, repetitions: usize) -> Self {
        self.config.repetitions = repetitions;
        self
    }

    /// Sets the outcome range size.
    pub fn outcomes(mut self, outcomes: usize) -> Self {
        self.config.outcomes = outcomes;
        self
    }

    /// Validates and returns the configuration.
    ///
    /// # Errors
    /// `WalkError::InvalidConfig` for empty or duplicated times, or zero
    /// repetitions or outcomes.
    pub fn build(self) -> Result<AggregationConfig, WalkError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for AggregationConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_figure7_preset() {
        let config = AggregationConfig::figure7();
        assert_eq!(config.times(), &[1, 2, 3, 4, 8, 10, 25, 100]);
        assert_eq!(config.repetitions(), 10_000);
        assert_eq!(config.outcomes(), 8);
        assert_eq!(config.total_calls(), 80_000);
    }

    #[test]
    fn test_builder_rejects_bad_values() {
        assert!(AggregationConfig::builder().times(Vec::new()).build().is_err());
        assert!(AggregationConfig::builder().times([1, 2, 1]).build().is_err());
        assert!(AggregationConfig::builder().repetitions(0).build().is_err());
        assert!(AggregationConfig::builder().outcomes(0).build().is_err());
    }

    #[test]
    fn test_builder_overrides() -> Result<(), WalkError> {
        let config = AggregationConfig::builder().times([3, 5]).repetitions(100).outcomes(16).build()?;
        assert_eq!(config.times(), &[3, 5]);
        assert_eq!(config.repetitions(), 100);
        assert_eq!(config.outcomes(), 16);
        Ok(())
    }
}
