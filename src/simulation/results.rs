// src/simulation/results.rs

use std::fmt;

/// Relative outcome frequencies per step count.
///
/// Rows keep the order of the configured times. Every row has one entry per
/// outcome in `0..outcomes` and sums to 1 up to floating-point rounding,
/// since each repetition produced exactly one outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyTable {
    rows: Vec<(u32, Vec<f64>)>,
    repetitions: usize,
    outcomes: usize,
}

impl FrequencyTable {
    /// Creates an empty table. (Internal visibility)
    pub(crate) fn new(repetitions: usize, outcomes: usize) -> Self {
        Self { rows: Vec::new(), repetitions, outcomes }
    }

    /// Normalizes raw counts by the repetition count and appends the row.
    /// (Internal visibility)
    pub(crate) fn record_counts(&mut self, time: u32, counts: &[usize]) {
        let frequencies = counts.iter().map(|&c| c as f64 / self.repetitions as f64).collect();
        self.rows.push((time, frequencies));
    }

    /// Frequencies for step count `time`, if it was simulated.
    pub fn get(&self, time: u32) -> Option<&[f64]> {
        self.rows.iter().find(|(t, _)| *t == time).map(|(_, f)| f.as_slice())
    }

    /// Step counts in run order.
    pub fn times(&self) -> Vec<u32> {
        self.rows.iter().map(|(t, _)| *t).collect()
    }

    /// Iterates rows in run order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &[f64])> {
        self.rows.iter().map(|(t, f)| (*t, f.as_slice()))
    }

    /// Sum of one row; `None` if `time` was not simulated.
    pub fn row_sum(&self, time: u32) -> Option<f64> {
        self.get(time).map(|f| f.iter().sum())
    }

    /// Largest frequency in the table (0 for an empty table).
    pub fn max_frequency(&self) -> f64 {
        self.rows.iter().flat_map(|(_, f)| f.iter().copied()).fold(0.0, f64::max)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if no time was simulated.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Host calls made per row.
    pub fn repetitions(&self) -> usize {
        self.repetitions
    }

    /// Size of the outcome range.
    pub fn outcomes(&self) -> usize {
        self.outcomes
    }
}

impl fmt::Display for FrequencyTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Frequencies (repetitions = {}):", self.repetitions)?;
        if self.rows.is_empty() {
            writeln!(f, "  No times were simulated.")?;
        }
        for (t, freqs) in &self.rows {
            write!(f, "  t={:>4}:", t)?;
            for p in freqs {
                write!(f, " {:.4}", p)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
