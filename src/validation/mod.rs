// src/validation/mod.rs

//! Checks for the physical requirements the walk operators and states must meet.
//!
//! Construction never enforces these; callers validate explicitly.

use num_complex::Complex;

use crate::core::{DEFAULT_TOLERANCE, DIM, StateVector, WalkError};
use crate::operators::Operator;

/// Checks if the state vector is normalized (sum of squared amplitudes ≈ 1.0).
///
/// # Arguments
/// * `state` - The `StateVector` to check.
/// * `tolerance` - Allowed deviation from 1.0. Defaults to 1e-9.
pub fn check_normalization(state: &StateVector, tolerance: Option<f64>) -> Result<(), WalkError> {
    let effective_tolerance = tolerance.unwrap_or(DEFAULT_TOLERANCE);
    let norm_sq: f64 = state.probabilities().iter().sum();
    if (norm_sq - 1.0).abs() > effective_tolerance {
        Err(WalkError::DegenerateState {
            message: format!("State vector normalization failed. Sum(|c_i|^2) = {} (Deviation > {})", norm_sq, effective_tolerance)
        })
    } else {
        Ok(())
    }
}

/// Frobenius distance between `H·Hᴴ` and the identity.
pub fn unitarity_defect(operator: &Operator) -> f64 {
    (operator * operator.adjoint() - Operator::identity()).norm()
}

/// Checks `H·Hᴴ ≈ I`.
pub fn check_unitary(operator: &Operator, tolerance: Option<f64>) -> Result<(), WalkError> {
    let effective_tolerance = tolerance.unwrap_or(DEFAULT_TOLERANCE);
    let defect = unitarity_defect(operator);
    if defect > effective_tolerance {
        return Err(WalkError::InvalidOperator {
            message: format!("Operator is not unitary: ||H·H^† - I|| = {:.3e} (> {:.1e})", defect, effective_tolerance),
        });
    }
    Ok(())
}

/// Checks `H ≈ Hᴴ`.
pub fn check_hermitian(operator: &Operator, tolerance: Option<f64>) -> Result<(), WalkError> {
    let effective_tolerance = tolerance.unwrap_or(DEFAULT_TOLERANCE);
    let defect = (operator - operator.adjoint()).norm();
    if defect > effective_tolerance {
        return Err(WalkError::InvalidOperator {
            message: format!("Operator is not Hermitian: ||H - H^†|| = {:.3e} (> {:.1e})", defect, effective_tolerance),
        });
    }
    Ok(())
}

/// Checks that `R` is diagonal with exactly one `-1` entry and `+1` elsewhere.
///
/// Returns the index of the marked vertex.
pub fn check_marking_operator(r: &Operator, tolerance: Option<f64>) -> Result<usize, WalkError> {
    let effective_tolerance = tolerance.unwrap_or(DEFAULT_TOLERANCE);
    let plus = Complex::new(1.0, 0.0);
    let minus = Complex::new(-1.0, 0.0);
    let mut marked = None;
    for row in 0..DIM {
        for col in 0..DIM {
            let entry = r[(row, col)];
            if row != col {
                if entry.norm() > effective_tolerance {
                    return Err(WalkError::InvalidOperator {
                        message: format!("Marking operator has off-diagonal entry {} at ({}, {})", entry, row, col),
                    });
                }
            } else if (entry - minus).norm() <= effective_tolerance {
                if let Some(previous) = marked {
                    return Err(WalkError::InvalidOperator {
                        message: format!("Marking operator flips both vertex {} and vertex {}", previous, row),
                    });
                }
                marked = Some(row);
            } else if (entry - plus).norm() > effective_tolerance {
                return Err(WalkError::InvalidOperator {
                    message: format!("Marking operator has diagonal entry {} at vertex {}", entry, row),
                });
            }
        }
    }
    marked.ok_or_else(|| WalkError::InvalidOperator { message: "Marking operator marks no vertex".to_string() })
}

/// Distance between `H·ψ` and `ψ`; zero when `ψ` is a fixed point of `H`.
pub fn invariance_residual(operator: &Operator, state: &StateVector) -> f64 {
    (operator * state.amplitudes() - state.amplitudes()).norm()
}

/// Checks every tessellation reflection is a Hermitian unitary and that their
/// product is unitary.
pub fn validate_walk(walk: &crate::operators::WalkOperators, tolerance: Option<f64>) -> Result<(), WalkError> {
    for h in [&walk.h1, &walk.h2, &walk.h3] {
        check_unitary(h, tolerance)?;
        check_hermitian(h, tolerance)?;
    }
    check_unitary(&walk.evolution(), tolerance)
}
