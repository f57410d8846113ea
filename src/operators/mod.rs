// src/operators/mod.rs

//! Construction of the fixed walk operators.
//!
//! The evolution operator of the staggered walk is `U = H3 · H1 · H2`, where
//! each `Hi` is the reflection associated with one tessellation of the graph
//! (see [`Tessellation`]). The three matrices are also available with their
//! hand-written numeric entries, which is how the analysis was first stated.
//!
//! None of the constructors check unitarity; that is a physical requirement
//! verified by [`crate::validation`] and by the test-suite.

mod tessellation;

pub use tessellation::Tessellation;

use nalgebra::SMatrix;
use num_complex::Complex;
use tracing::debug;

use crate::core::{DIM, StateVector, WalkError};

/// Dense complex operator on the 8-vertex state space.
pub type Operator = SMatrix<Complex<f64>, DIM, DIM>;

/// Builds an operator from real row-major entries multiplied by `scale`.
fn scaled_real(scale: f64, rows: [[f64; DIM]; DIM]) -> Operator {
    Operator::from_fn(|r, c| Complex::new(scale * rows[r][c], 0.0))
}

/// First tessellation reflection, polygons {0,1,2} and {4,5,6}.
pub fn h1() -> Operator {
    scaled_real(1.0 / 3.0, [
        [-1.0, 2.0, 2.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        [2.0, -1.0, 2.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        [2.0, 2.0, -1.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        [0.0, 0.0, 0.0, 3.0, 0.0, 0.0, 0.0, 0.0],
        [0.0, 0.0, 0.0, 0.0, -1.0, 2.0, 2.0, 0.0],
        [0.0, 0.0, 0.0, 0.0, 2.0, -1.0, 2.0, 0.0],
        [0.0, 0.0, 0.0, 0.0, 2.0, 2.0, -1.0, 0.0],
        [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 3.0],
    ])
}

/// Second tessellation reflection, polygons {0,6,7} and {2,3,4}.
pub fn h2() -> Operator {
    scaled_real(1.0 / 3.0, [
        [-1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 2.0, 2.0],
        [0.0, 3.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        [0.0, 0.0, -1.0, 2.0, 2.0, 0.0, 0.0, 0.0],
        [0.0, 0.0, 2.0, -1.0, 2.0, 0.0, 0.0, 0.0],
        [0.0, 0.0, 2.0, 2.0, -1.0, 0.0, 0.0, 0.0],
        [0.0, 0.0, 0.0, 0.0, 0.0, 3.0, 0.0, 0.0],
        [2.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0, 2.0],
        [2.0, 0.0, 0.0, 0.0, 0.0, 0.0, 2.0, -1.0],
    ])
}

/// Third tessellation reflection, polygon {0,2,4,6}.
pub fn h3() -> Operator {
    scaled_real(1.0 / 2.0, [
        [-1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0],
        [0.0, 2.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        [1.0, 0.0, -1.0, 0.0, 1.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0, 0.0],
        [1.0, 0.0, 1.0, 0.0, -1.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 0.0, 0.0, 2.0, 0.0, 0.0],
        [1.0, 0.0, 1.0, 0.0, 1.0, 0.0, -1.0, 0.0],
        [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 2.0],
    ])
}

/// The three local reflections whose product is the walk's evolution operator.
#[derive(Debug, Clone, PartialEq)]
pub struct WalkOperators {
    /// Reflection applied second.
    pub h1: Operator,
    /// Reflection applied first.
    pub h2: Operator,
    /// Reflection applied last.
    pub h3: Operator,
}

impl WalkOperators {
    /// The figure 10 walk, using the hand-written matrices.
    pub fn figure10() -> Self {
        Self { h1: h1(), h2: h2(), h3: h3() }
    }

    /// Builds the reflections from three tessellations.
    pub fn from_tessellations(
        first: &Tessellation,
        second: &Tessellation,
        third: &Tessellation,
    ) -> Self {
        Self {
            h1: first.reflection(),
            h2: second.reflection(),
            h3: third.reflection(),
        }
    }

    /// `U = H3 · H1 · H2`.
    pub fn evolution(&self) -> Operator {
        let u = self.h3 * self.h1 * self.h2;
        debug!(trace = %u.trace(), "built evolution operator");
        u
    }
}

impl Default for WalkOperators {
    fn default() -> Self {
        Self::figure10()
    }
}

/// Diagonal marking operator: `+1` everywhere except `-1` at `marked`.
pub fn marking_operator(marked: usize) -> Result<Operator, WalkError> {
    if marked >= DIM {
        return Err(WalkError::InvalidOperator {
            message: format!("Marked vertex {} is outside the graph (0..{})", marked, DIM),
        });
    }
    let mut r = Operator::identity();
    r[(marked, marked)] = Complex::new(-1.0, 0.0);
    Ok(r)
}

/// Reflection about a state, `2|ψ⟩⟨ψ| − I`.
pub fn reflection_about(state: &StateVector) -> Operator {
    let psi = state.amplitudes();
    psi * psi.adjoint() * Complex::new(2.0, 0.0) - Operator::identity()
}
