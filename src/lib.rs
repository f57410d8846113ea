// src/lib.rs

//! `qwalk` - Spectral and empirical analysis of a staggered quantum walk search
//!
//! The walk lives on an 8-vertex graph. Its evolution operator is the product
//! of three tessellation reflections, `U = H3 · H1 · H2`; composing it with
//! a marking operator `R` gives the search operator `U·R`, whose spectrum and
//! overlaps explain how amplitude concentrates on the marked vertex.
//! Separately, outcomes drawn from a simulation host are tabulated into
//! per-time frequency tables and plotted.

pub mod core;
pub mod operators;
pub mod validation;
pub mod spectral;
pub mod detection;
pub mod optimize;
pub mod simulation;
pub mod plot;

// Re-export the most common types for easier top-level use
pub use core::{StateVector, WalkError, DIM, MARKED_VERTEX};
pub use operators::{marking_operator, Operator, Tessellation, WalkOperators};
pub use spectral::{SpectralAnalysis, SpectralTuple};
pub use detection::DetectionProbability;
pub use simulation::{aggregate, AggregationConfig, BornSampler, FrequencyTable, WalkHost};
pub use validation::{check_hermitian, check_marking_operator, check_normalization, check_unitary, validate_walk};

// Example 1: Spectrum of the search operator
// Every eigenvalue of the unitary U·R lies on the unit circle, and the
// squared overlaps with the marked vertex sum to one over the eigenbasis.
/// ```
/// use qwalk::{SpectralAnalysis, WalkError};
///
/// let analysis = SpectralAnalysis::figure10()?;
/// for tuple in analysis.tuples() {
///     println!("{}", tuple);
///     assert!((tuple.eigenvalue.norm() - 1.0).abs() < 1e-9);
/// }
/// let total: f64 = analysis.marked_weights().iter().sum();
/// assert!((total - 1.0).abs() < 1e-9);
/// # Ok::<(), WalkError>(())
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item

// Example 2: Frequency aggregation against a deterministic host
// A host cycling through all vertices yields a flat distribution.
/// ```
/// use qwalk::{aggregate, AggregationConfig, WalkError};
///
/// let config = AggregationConfig::builder().times([1, 2]).repetitions(80).build()?;
/// let mut next = 0usize;
/// let mut host = |_t: u32| -> Result<usize, WalkError> {
///     next = (next + 1) % 8;
///     Ok(next)
/// };
/// let table = aggregate(&mut host, &config)?;
/// assert_eq!(table.get(2), Some(&[0.125; 8][..]));
/// # Ok::<(), WalkError>(())
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item
