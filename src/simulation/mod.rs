// src/simulation/mod.rs

//! Empirical position statistics gathered from a simulation host.
//!
//! The host that actually runs the quantum walk is an external collaborator,
//! reached through the one-method [`WalkHost`] trait. [`aggregate`] calls it
//! `repetitions` times per configured step count and turns the outcome
//! counts into a [`FrequencyTable`]. [`BornSampler`] is a local host that
//! samples from the exact walk distribution.

mod config;
mod results;
mod sampler;

pub use config::{AggregationConfig, AggregationConfigBuilder};
pub use results::FrequencyTable;
pub use sampler::BornSampler;

use tracing::{debug, info};

use crate::core::WalkError;

/// A source of walk outcomes.
///
/// Each call is an independent, possibly random draw that returns a single
/// outcome index (a vertex or bit position).
pub trait WalkHost {
    /// Runs the walk for `time` steps and returns the observed outcome.
    fn simulate(&mut self, time: u32) -> Result<usize, WalkError>;
}

impl<F> WalkHost for F
where
    F: FnMut(u32) -> Result<usize, WalkError>,
{
    fn simulate(&mut self, time: u32) -> Result<usize, WalkError> {
        self(time)
    }
}

/// Builds the frequency table for `config` from `host` outcomes.
///
/// Times are processed in configuration order and the host is called
/// exactly `repetitions` times for each. The first host error, or the first
/// outcome outside `0..outcomes`, aborts the run; no repetition is skipped.
pub fn aggregate<H>(host: &mut H, config: &AggregationConfig) -> Result<FrequencyTable, WalkError>
where
    H: WalkHost + ?Sized,
{
    info!(%config, calls = config.total_calls(), "starting frequency aggregation");
    let mut table = FrequencyTable::new(config.repetitions(), config.outcomes());

    for &time in config.times() {
        let mut counts = vec![0usize; config.outcomes()];
        for _ in 0..config.repetitions() {
            let outcome = host.simulate(time)?;
            let slot = counts.get_mut(outcome).ok_or(WalkError::OutcomeOutOfRange {
                time,
                outcome,
                outcomes: config.outcomes(),
            })?;
            *slot += 1;
        }
        debug!(time, ?counts, "aggregated outcomes");
        table.record_counts(time, &counts);
    }

    Ok(table)
}
