// src/core/state.rs

use nalgebra::SVector;
use num_complex::Complex;
use num_traits::Zero;
use std::fmt;

use super::constants::DIM;
use super::error::WalkError;

/// Column vector of complex amplitudes over the graph vertices.
pub type Amplitudes = SVector<Complex<f64>, DIM>;

/// Amplitudes over the 8 vertices of the walk graph.
///
/// States built through [`StateVector::uniform`], [`StateVector::basis`] or
/// [`StateVector::from_amplitudes`] have unit Euclidean norm. Raw amplitudes
/// produced by evolving a state (see [`StateVector::evolved`]) keep the norm
/// of the input as long as the operator is unitary.
#[derive(Debug, Clone, PartialEq)] // Avoid Eq for floating-point complex numbers
pub struct StateVector {
    amplitudes: Amplitudes,
}

impl StateVector {
    /// Normalized uniform superposition, every amplitude equal to `1/√8`.
    pub fn uniform() -> Self {
        let amp = Complex::new(1.0 / (DIM as f64).sqrt(), 0.0);
        Self { amplitudes: Amplitudes::from_element(amp) }
    }

    /// Indicator state on a single vertex.
    pub fn basis(vertex: usize) -> Result<Self, WalkError> {
        if vertex >= DIM {
            return Err(WalkError::InvalidOperator {
                message: format!("Vertex {} is outside the graph (0..{})", vertex, DIM),
            });
        }
        let mut amplitudes = Amplitudes::zeros();
        amplitudes[vertex] = Complex::new(1.0, 0.0);
        Ok(Self { amplitudes })
    }

    /// Builds a normalized state from arbitrary amplitudes.
    ///
    /// # Errors
    /// `WalkError::DegenerateState` when the input has zero or non-finite norm.
    pub fn from_amplitudes(amplitudes: Amplitudes) -> Result<Self, WalkError> {
        let norm = amplitudes.norm();
        if !norm.is_finite() || norm < f64::EPSILON {
            return Err(WalkError::DegenerateState {
                message: format!("Cannot normalize a state with norm {}", norm),
            });
        }
        Ok(Self { amplitudes: amplitudes.unscale(norm) })
    }

    /// Wraps amplitudes without normalizing them.
    pub(crate) fn from_raw(amplitudes: Amplitudes) -> Self {
        Self { amplitudes }
    }

    /// Read-only access to the amplitudes.
    pub fn amplitudes(&self) -> &Amplitudes {
        &self.amplitudes
    }

    /// `⟨self|other⟩`, conjugate-linear in `self`.
    pub fn inner(&self, other: &StateVector) -> Complex<f64> {
        self.amplitudes.dotc(&other.amplitudes)
    }

    /// Euclidean norm of the amplitudes.
    pub fn norm(&self) -> f64 {
        self.amplitudes.norm()
    }

    /// Squared modulus of every amplitude.
    pub fn probabilities(&self) -> [f64; DIM] {
        let mut probs = [0.0; DIM];
        for (p, c) in probs.iter_mut().zip(self.amplitudes.iter()) {
            *p = c.norm_sqr();
        }
        probs
    }

    /// Applies `operator` `steps` times.
    pub fn evolved(&self, operator: &crate::operators::Operator, steps: u32) -> Self {
        let mut amplitudes = self.amplitudes;
        for _ in 0..steps {
            amplitudes = operator * amplitudes;
        }
        Self { amplitudes }
    }

    /// Returns `true` when every amplitude is zero.
    pub fn is_zero(&self) -> bool {
        self.amplitudes.iter().all(|c| c.is_zero())
    }
}

impl fmt::Display for StateVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "State[")?;
        for (i, c) in self.amplitudes.iter().enumerate() {
            write!(f, "{}{:.4}", if i > 0 { ", " } else { "" }, c)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_TOLERANCE: f64 = 1e-12;

    #[test]
    fn test_uniform_is_normalized() {
        let psi = StateVector::uniform();
        assert!((psi.norm() - 1.0).abs() < TEST_TOLERANCE);
        for p in psi.probabilities() {
            assert!((p - 0.125).abs() < TEST_TOLERANCE);
        }
    }

    #[test]
    fn test_from_amplitudes_rejects_zero_vector() {
        let result = StateVector::from_amplitudes(Amplitudes::zeros());
        assert!(matches!(result, Err(WalkError::DegenerateState { .. })));
    }

    #[test]
    fn test_basis_inner_product() -> Result<(), WalkError> {
        let marked = StateVector::basis(4)?;
        let overlap = StateVector::uniform().inner(&marked);
        assert!((overlap.re - 1.0 / 8f64.sqrt()).abs() < TEST_TOLERANCE);
        assert!(overlap.im.abs() < TEST_TOLERANCE);
        assert!(StateVector::basis(8).is_err());
        Ok(())
    }

    #[test]
    fn test_inner_is_conjugate_linear_in_left_argument() -> Result<(), WalkError> {
        let mut amps = Amplitudes::zeros();
        amps[0] = Complex::new(0.0, 1.0);
        let phased = StateVector::from_amplitudes(amps)?;
        let e0 = StateVector::basis(0)?;
        assert!((phased.inner(&e0) - Complex::new(0.0, -1.0)).norm() < TEST_TOLERANCE);
        assert!((e0.inner(&phased) - Complex::new(0.0, 1.0)).norm() < TEST_TOLERANCE);
        Ok(())
    }
}
