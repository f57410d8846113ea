// src/simulation/sampler.rs

use rand::SeedableRng;
use rand::distr::{Distribution, StandardUniform};
use rand::rngs::StdRng;
use std::collections::HashMap;
use tracing::debug;

use super::WalkHost;
use crate::core::{DIM, StateVector, WalkError};
use crate::operators::Operator;

/// Local stand-in for the external simulation host.
///
/// Each call to [`WalkHost::simulate`] draws a vertex from the Born
/// distribution `|U^t·ψ0|²`. Draws come from a seeded `StdRng`, so a given
/// seed always produces the same outcome sequence.
pub struct BornSampler {
    operator: Operator,
    initial: StateVector,
    rng: StdRng,
    /// Cumulative distribution per step count.
    cache: HashMap<u32, [f64; DIM]>,
}

impl BornSampler {
    /// Samples the walk `operator` started from `initial`.
    pub fn new(operator: Operator, initial: StateVector, seed: u64) -> Self {
        Self {
            operator,
            initial,
            rng: StdRng::seed_from_u64(seed),
            cache: HashMap::new(),
        }
    }

    /// Exact position distribution after `time` steps.
    pub fn distribution(&self, time: u32) -> [f64; DIM] {
        self.initial.evolved(&self.operator, time).probabilities()
    }

    fn cumulative(&mut self, time: u32) -> Result<[f64; DIM], WalkError> {
        if let Some(cdf) = self.cache.get(&time) {
            return Ok(*cdf);
        }
        let probs = self.distribution(time);
        let total: f64 = probs.iter().sum();
        if !total.is_finite() || total < 1e-12 {
            return Err(WalkError::HostFailure {
                message: format!("Evolved state at t={} has no probability mass ({})", time, total),
            });
        }
        let mut cdf = [0.0; DIM];
        let mut acc = 0.0;
        for (c, p) in cdf.iter_mut().zip(probs.iter()) {
            acc += p / total;
            *c = acc;
        }
        debug!(time, "cached position distribution");
        self.cache.insert(time, cdf);
        Ok(cdf)
    }
}

impl WalkHost for BornSampler {
    fn simulate(&mut self, time: u32) -> Result<usize, WalkError> {
        let cdf = self.cumulative(time)?;
        let sample: f64 = StandardUniform.sample(&mut self.rng);
        // Rounding can leave cdf[DIM-1] slightly below 1; fall back to the
        // last vertex carrying probability.
        let outcome = cdf
            .iter()
            .position(|&c| sample < c)
            .unwrap_or_else(|| cdf.iter().rposition(|&c| c > 0.0).unwrap_or(DIM - 1));
        Ok(outcome)
    }
}
