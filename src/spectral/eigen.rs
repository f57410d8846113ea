// src/spectral/eigen.rs

use nalgebra::{Schur, SVD, SVector};
use num_complex::Complex;
use tracing::debug;

use crate::core::constants::EIGEN_CLUSTER_TOLERANCE;
use crate::core::{Amplitudes, DIM, WalkError};
use crate::operators::Operator;

/// Residual `||A·v − λ·v||` above which an eigenvector is rejected.
const RESIDUAL_TOLERANCE: f64 = 1e-7;

/// A group of numerically equal eigenvalues.
#[derive(Debug, Clone, PartialEq)]
pub struct Eigenspace {
    /// Mean of the clustered eigenvalues.
    pub eigenvalue: Complex<f64>,
    /// Positions of the member eigenpairs in decomposition order.
    pub members: Vec<usize>,
}

impl Eigenspace {
    /// Dimension of the eigenspace.
    pub fn multiplicity(&self) -> usize {
        self.members.len()
    }
}

/// General (non-Hermitian) eigendecomposition `A·V = V·Λ`.
///
/// Eigenvalues are read off the Schur form. For each cluster of equal
/// eigenvalues the eigenvectors are the right singular vectors of `A − λI`
/// belonging to its smallest singular values, one per unit of multiplicity.
/// Each vector is unit-norm, and vectors of one cluster are orthonormal;
/// the phase of each vector and the basis inside a degenerate cluster are
/// arbitrary.
#[derive(Debug, Clone)]
pub struct EigenDecomposition {
    eigenvalues: SVector<Complex<f64>, DIM>,
    /// Column `i` is the eigenvector of `eigenvalues[i]`.
    eigenvectors: Operator,
    eigenspaces: Vec<Eigenspace>,
}

impl EigenDecomposition {
    /// Decomposes `matrix`.
    ///
    /// # Errors
    /// `WalkError::Decomposition` if the Schur or SVD iteration does not
    /// converge, or an eigenvector fails the residual check (the matrix is
    /// then not diagonalizable to working precision).
    pub fn new(matrix: &Operator) -> Result<Self, WalkError> {
        let eigenvalues = eigenvalues_of(matrix)?;
        let eigenspaces = cluster(&eigenvalues, EIGEN_CLUSTER_TOLERANCE);
        let mut eigenvectors = Operator::zeros();

        for space in &eigenspaces {
            let shifted = matrix - Operator::identity() * space.eigenvalue;
            let svd = SVD::try_new(shifted, false, true, f64::EPSILON, 0).ok_or_else(|| WalkError::Decomposition {
                message: format!("SVD of A - λI did not converge for λ = {:.6}", space.eigenvalue),
            })?;
            let v_t = svd.v_t.ok_or_else(|| WalkError::Decomposition {
                message: "SVD did not produce right singular vectors".to_string(),
            })?;

            // Smallest singular values first.
            let mut order: Vec<usize> = (0..DIM).collect();
            order.sort_by(|&a, &b| svd.singular_values[a].total_cmp(&svd.singular_values[b]));

            for (&slot, &k) in space.members.iter().zip(order.iter()) {
                let v: Amplitudes = v_t.row(k).adjoint();
                let residual = (matrix * v - v * eigenvalues[slot]).norm();
                if residual > RESIDUAL_TOLERANCE {
                    return Err(WalkError::Decomposition {
                        message: format!(
                            "Eigenvector for λ = {:.6} has residual {:.3e}; matrix is not diagonalizable to working precision",
                            eigenvalues[slot], residual
                        ),
                    });
                }
                eigenvectors.set_column(slot, &v);
            }
        }

        debug!(eigenspaces = eigenspaces.len(), "eigendecomposition complete");
        Ok(Self { eigenvalues, eigenvectors, eigenspaces })
    }

    /// Eigenvalues in decomposition order.
    pub fn eigenvalues(&self) -> &SVector<Complex<f64>, DIM> {
        &self.eigenvalues
    }

    /// Eigenvector matrix; column `i` belongs to eigenvalue `i`.
    pub fn eigenvectors(&self) -> &Operator {
        &self.eigenvectors
    }

    /// Eigenvector `i` as a column.
    pub fn eigenvector(&self, i: usize) -> Amplitudes {
        self.eigenvectors.column(i).into_owned()
    }

    /// Clusters of equal eigenvalues.
    pub fn eigenspaces(&self) -> &[Eigenspace] {
        &self.eigenspaces
    }

    /// Coefficients `c` with `V·c = ψ`, i.e. the expansion of `ψ` in the
    /// eigenbasis. Valid for any diagonalizable matrix, not only normal ones.
    pub fn expansion(&self, psi: &Amplitudes) -> Result<Amplitudes, WalkError> {
        self.eigenvectors.lu().solve(psi).ok_or_else(|| WalkError::Decomposition {
            message: "Eigenvector matrix is singular; eigenbasis is incomplete".to_string(),
        })
    }
}

/// Eigenvalues of `matrix` in Schur order.
fn eigenvalues_of(matrix: &Operator) -> Result<SVector<Complex<f64>, DIM>, WalkError> {
    let is_real = matrix.iter().all(|c| c.im.abs() <= f64::EPSILON);
    if is_real {
        // Real Schur form, complex pairs recovered from the 2x2 blocks.
        let real = matrix.map(|c| c.re);
        let schur = Schur::try_new(real, f64::EPSILON, 0).ok_or_else(|| WalkError::Decomposition {
            message: "Real Schur iteration did not converge".to_string(),
        })?;
        Ok(schur.complex_eigenvalues())
    } else {
        let schur = Schur::try_new(*matrix, f64::EPSILON, 0).ok_or_else(|| WalkError::Decomposition {
            message: "Complex Schur iteration did not converge".to_string(),
        })?;
        schur.eigenvalues().ok_or_else(|| WalkError::Decomposition {
            message: "Complex Schur form is not triangular".to_string(),
        })
    }
}

/// Groups eigenvalues within `tolerance` of a cluster's first member.
fn cluster(eigenvalues: &SVector<Complex<f64>, DIM>, tolerance: f64) -> Vec<Eigenspace> {
    let mut spaces: Vec<(Complex<f64>, Vec<usize>)> = Vec::new();
    for (i, lambda) in eigenvalues.iter().enumerate() {
        match spaces.iter_mut().find(|(anchor, _)| (anchor - lambda).norm() < tolerance) {
            Some((_, members)) => members.push(i),
            None => spaces.push((*lambda, vec![i])),
        }
    }
    spaces
        .into_iter()
        .map(|(_, members)| {
            let sum: Complex<f64> = members.iter().map(|&i| eigenvalues[i]).sum();
            Eigenspace { eigenvalue: sum / members.len() as f64, members }
        })
        .collect()
}
