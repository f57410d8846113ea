// src/spectral/mod.rs

//! Spectral analysis of the search operator `U·R`.
//!
//! The eigenvectors of `U·R` are only defined up to a unit-modulus phase
//! and, inside a degenerate eigenspace, up to a choice of basis. The raw
//! overlaps in [`SpectralTuple`] inherit that ambiguity. Quantities that do
//! not depend on it are exposed separately: squared overlaps, per-eigenspace
//! weights and the reconstruction of a state from its eigen-expansion.

mod eigen;

pub use eigen::{EigenDecomposition, Eigenspace};

use num_complex::Complex;
use std::fmt;
use tracing::info;

use crate::core::{DIM, MARKED_VERTEX, StateVector, WalkError};
use crate::operators::{marking_operator, Operator, WalkOperators};

/// One eigenpair of `U·R` together with its overlaps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpectralTuple {
    /// Eigenvalue `λ_i`.
    pub eigenvalue: Complex<f64>,
    /// `⟨v_i|marked⟩`.
    pub overlap_with_marked: Complex<f64>,
    /// `⟨initial|v_i⟩`.
    pub overlap_with_initial: Complex<f64>,
}

impl fmt::Display for SpectralTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "λ={:.4} (|λ|={:.6}, arg={:+.4})  <v|m>={:.4}  <ψ0|v>={:.4}",
            self.eigenvalue,
            self.eigenvalue.norm(),
            self.eigenvalue.arg(),
            self.overlap_with_marked,
            self.overlap_with_initial
        )
    }
}

/// Basis-independent weights of one eigenspace.
#[derive(Debug, Clone, PartialEq)]
pub struct EigenspaceWeight {
    /// Eigenvalue of the space.
    pub eigenvalue: Complex<f64>,
    /// Dimension of the space.
    pub multiplicity: usize,
    /// `Σ_i |⟨v_i|marked⟩|²` over the space.
    pub marked_weight: f64,
    /// `Σ_i |⟨initial|v_i⟩|²` over the space.
    pub initial_weight: f64,
}

/// Eigendecomposition of `U·R` with overlaps against the marked and initial states.
#[derive(Debug, Clone)]
pub struct SpectralAnalysis {
    search_operator: Operator,
    decomposition: EigenDecomposition,
    marked: StateVector,
    initial: StateVector,
    tuples: Vec<SpectralTuple>,
}

impl SpectralAnalysis {
    /// Decomposes `evolution · marking` and computes the overlaps.
    pub fn new(
        evolution: &Operator,
        marking: &Operator,
        marked: StateVector,
        initial: StateVector,
    ) -> Result<Self, WalkError> {
        let search_operator = evolution * marking;
        let decomposition = EigenDecomposition::new(&search_operator)?;

        let tuples = (0..DIM)
            .map(|i| {
                let v = StateVector::from_raw(decomposition.eigenvector(i));
                SpectralTuple {
                    eigenvalue: decomposition.eigenvalues()[i],
                    overlap_with_marked: v.inner(&marked),
                    overlap_with_initial: initial.inner(&v),
                }
            })
            .collect();

        info!(
            eigenspaces = decomposition.eigenspaces().len(),
            "spectral analysis of U·R complete"
        );
        Ok(Self { search_operator, decomposition, marked, initial, tuples })
    }

    /// Figure 10 setup: `U = H3·H1·H2`, vertex 4 marked, uniform initial state.
    pub fn figure10() -> Result<Self, WalkError> {
        let evolution = WalkOperators::figure10().evolution();
        let marking = marking_operator(MARKED_VERTEX)?;
        Self::new(&evolution, &marking, StateVector::basis(MARKED_VERTEX)?, StateVector::uniform())
    }

    /// `U·R`.
    pub fn search_operator(&self) -> &Operator {
        &self.search_operator
    }

    /// The underlying decomposition.
    pub fn decomposition(&self) -> &EigenDecomposition {
        &self.decomposition
    }

    /// One tuple per eigenvector, in decomposition order.
    pub fn tuples(&self) -> &[SpectralTuple] {
        &self.tuples
    }

    /// Tuples ordered by eigenvalue phase in `(-π, π]`.
    pub fn tuples_by_phase(&self) -> Vec<SpectralTuple> {
        let mut sorted = self.tuples.clone();
        sorted.sort_by(|a, b| a.eigenvalue.arg().total_cmp(&b.eigenvalue.arg()));
        sorted
    }

    /// `|⟨v_i|marked⟩|²` per eigenvector.
    pub fn marked_weights(&self) -> [f64; DIM] {
        let mut weights = [0.0; DIM];
        for (w, t) in weights.iter_mut().zip(&self.tuples) {
            *w = t.overlap_with_marked.norm_sqr();
        }
        weights
    }

    /// `|⟨initial|v_i⟩|²` per eigenvector.
    pub fn initial_weights(&self) -> [f64; DIM] {
        let mut weights = [0.0; DIM];
        for (w, t) in weights.iter_mut().zip(&self.tuples) {
            *w = t.overlap_with_initial.norm_sqr();
        }
        weights
    }

    /// Weights summed over each degenerate eigenspace.
    pub fn eigenspace_weights(&self) -> Vec<EigenspaceWeight> {
        let marked = self.marked_weights();
        let initial = self.initial_weights();
        self.decomposition
            .eigenspaces()
            .iter()
            .map(|space| EigenspaceWeight {
                eigenvalue: space.eigenvalue,
                multiplicity: space.multiplicity(),
                marked_weight: space.members.iter().map(|&i| marked[i]).sum(),
                initial_weight: space.members.iter().map(|&i| initial[i]).sum(),
            })
            .collect()
    }

    /// Expands `state` in the eigenbasis and sums the expansion back up.
    ///
    /// For a diagonalizable `U·R` the result equals `state`.
    pub fn reconstruct(&self, state: &StateVector) -> Result<StateVector, WalkError> {
        let coefficients = self.decomposition.expansion(state.amplitudes())?;
        Ok(StateVector::from_raw(self.decomposition.eigenvectors() * coefficients))
    }

    /// Rebuilds the initial state as `Σ_i ⟨v_i|initial⟩ v_i`.
    ///
    /// Uses the conjugated overlaps directly, so it only holds when the
    /// eigenvectors are orthonormal (normal `U·R`, which is the case for a
    /// unitary walk).
    pub fn reconstruct_initial_from_overlaps(&self) -> StateVector {
        let mut amplitudes = crate::core::Amplitudes::zeros();
        for (i, t) in self.tuples.iter().enumerate() {
            amplitudes += self.decomposition.eigenvector(i) * t.overlap_with_initial.conj();
        }
        StateVector::from_raw(amplitudes)
    }

    /// Marked state used for the overlaps.
    pub fn marked(&self) -> &StateVector {
        &self.marked
    }

    /// Initial state used for the overlaps.
    pub fn initial(&self) -> &StateVector {
        &self.initial
    }
}
