// src/detection/mod.rs

//! Probability of finding the walker on the marked vertex after `t` steps,
//! `prob(t) = |⟨marked|U^t·initial⟩|²`.
//!
//! `t` is the number of applications of the evolution operator. `prob(2)`
//! is the value the two-step evaluation of the figure 10 analysis produces.

use num_complex::Complex;
use tracing::debug;

use crate::core::{Amplitudes, MARKED_VERTEX, StateVector, WalkError};
use crate::operators::{marking_operator, Operator, WalkOperators};
use crate::optimize::{Minimum, NelderMead};
use crate::spectral::EigenDecomposition;

/// Detection probability as a function of the number of walk steps.
#[derive(Debug, Clone)]
pub struct DetectionProbability {
    operator: Operator,
    marked: StateVector,
    initial: StateVector,
    /// `λ_i` of the operator.
    eigenvalues: Vec<Complex<f64>>,
    /// `⟨marked|v_i⟩ · c_i` where `V·c = initial`.
    spectral_weights: Vec<Complex<f64>>,
}

/// Best continuous step count found by [`DetectionProbability::optimize_from`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectionPeak {
    /// Step count (possibly fractional).
    pub time: f64,
    /// Detection probability at `time`.
    pub probability: f64,
    /// Minimizer details.
    pub minimum: Minimum,
}

impl DetectionProbability {
    /// Evolution by `operator`, detection on `marked`, starting from `initial`.
    pub fn new(operator: Operator, marked: StateVector, initial: StateVector) -> Result<Self, WalkError> {
        let decomposition = EigenDecomposition::new(&operator)?;
        let coefficients = decomposition.expansion(initial.amplitudes())?;
        let spectral_weights = (0..coefficients.len())
            .map(|i| marked.amplitudes().dotc(&decomposition.eigenvector(i)) * coefficients[i])
            .collect();
        Ok(Self {
            operator,
            marked,
            initial,
            eigenvalues: decomposition.eigenvalues().iter().copied().collect(),
            spectral_weights,
        })
    }

    /// Walk evolution `U = H3·H1·H2`, vertex 4 marked, uniform start.
    ///
    /// The uniform state is a fixed point of every tessellation reflection,
    /// so this probability is `1/8` for every `t`.
    pub fn figure10() -> Result<Self, WalkError> {
        let evolution = WalkOperators::figure10().evolution();
        Self::new(evolution, StateVector::basis(MARKED_VERTEX)?, StateVector::uniform())
    }

    /// Search evolution `U·R`, vertex 4 marked, uniform start.
    pub fn search() -> Result<Self, WalkError> {
        let evolution = WalkOperators::figure10().evolution() * marking_operator(MARKED_VERTEX)?;
        Self::new(evolution, StateVector::basis(MARKED_VERTEX)?, StateVector::uniform())
    }

    /// Operator applied at each step.
    pub fn operator(&self) -> &Operator {
        &self.operator
    }

    /// `|⟨marked|U^t·initial⟩|²` by repeated application.
    pub fn at(&self, t: u32) -> f64 {
        let evolved = self.initial.evolved(&self.operator, t);
        self.marked.inner(&evolved).norm_sqr()
    }

    /// Probabilities for `t = 0..=max_t`.
    pub fn series(&self, max_t: u32) -> Vec<f64> {
        let mut out = Vec::with_capacity(max_t as usize + 1);
        let mut amplitudes: Amplitudes = *self.initial.amplitudes();
        for _ in 0..=max_t {
            out.push(self.marked.amplitudes().dotc(&amplitudes).norm_sqr());
            amplitudes = self.operator * amplitudes;
        }
        out
    }

    /// Integer step count in `0..=max_t` with the highest probability
    /// (earliest on ties).
    pub fn peak(&self, max_t: u32) -> (u32, f64) {
        let mut best = (0, f64::NEG_INFINITY);
        for (t, p) in self.series(max_t).into_iter().enumerate() {
            if p > best.1 + 1e-12 {
                best = (t as u32, p);
            }
        }
        best
    }

    /// Fractional-step probability through `U^t = V·Λ^t·V⁻¹` (principal
    /// branch of `λ^t`). Agrees with [`Self::at`] on integers.
    pub fn at_continuous(&self, t: f64) -> f64 {
        let amplitude: Complex<f64> = self
            .eigenvalues
            .iter()
            .zip(&self.spectral_weights)
            .map(|(lambda, w)| lambda.powf(t) * w)
            .sum();
        amplitude.norm_sqr()
    }

    /// Maximizes [`Self::at_continuous`] with Nelder–Mead started at `t0`.
    pub fn optimize_from(&self, t0: f64) -> DetectionPeak {
        let minimum = NelderMead::default().minimize(|t| -self.at_continuous(t), t0);
        debug!(t0, time = minimum.x, probability = -minimum.value, "detection peak search finished");
        DetectionPeak { time: minimum.x, probability: -minimum.value, minimum }
    }
}
