// tests/spectral_tests.rs

use qwalk::core::{Amplitudes, StateVector, DIM, MARKED_VERTEX};
use qwalk::operators::{h1, h2, h3, marking_operator, Operator, Tessellation, WalkOperators};
use qwalk::validation::{check_hermitian, check_marking_operator, check_unitary, unitarity_defect};
use qwalk::{DetectionProbability, SpectralAnalysis, WalkError};

use num_complex::Complex;

const TEST_TOLERANCE: f64 = 1e-9;

/// Asserts that two states agree component-wise within `tolerance`.
fn assert_state_approx_equal(actual: &Amplitudes, expected: &Amplitudes, tolerance: f64, context: &str) {
    for i in 0..DIM {
        let dist = (actual[i] - expected[i]).norm();
        assert!(
            dist < tolerance,
            "State mismatch at index {} - Actual: {}, Expected: {}, Dist: {:.3e}, Context: {}",
            i, actual[i], expected[i], dist, context
        );
    }
}

#[test]
fn test_block_matrices_are_hermitian_unitaries() -> Result<(), WalkError> {
    for (name, h) in [("H1", h1()), ("H2", h2()), ("H3", h3())] {
        check_unitary(&h, Some(TEST_TOLERANCE))?;
        check_hermitian(&h, Some(TEST_TOLERANCE))?;
        assert!(unitarity_defect(&h) < TEST_TOLERANCE, "{} unitarity defect", name);
    }
    Ok(())
}

#[test]
fn test_evolution_operator_is_unitary() -> Result<(), WalkError> {
    let u = WalkOperators::figure10().evolution();
    check_unitary(&u, Some(TEST_TOLERANCE))
}

#[test]
fn test_tessellation_walk_equals_hand_written_walk() -> Result<(), WalkError> {
    let [t1, t2, t3] = Tessellation::figure10()?;
    let built = WalkOperators::from_tessellations(&t1, &t2, &t3);
    let diff = (built.evolution() - WalkOperators::figure10().evolution()).norm();
    assert!(diff < 1e-12, "evolution operators differ by {}", diff);
    Ok(())
}

#[test]
fn test_marking_operator_marks_exactly_vertex_four() -> Result<(), WalkError> {
    let r = marking_operator(MARKED_VERTEX)?;
    assert_eq!(check_marking_operator(&r, Some(TEST_TOLERANCE))?, 4);
    let minus_ones = (0..DIM).filter(|&i| r[(i, i)] == Complex::new(-1.0, 0.0)).count();
    assert_eq!(minus_ones, 1);
    Ok(())
}

#[test]
fn test_search_operator_eigenvalues_on_unit_circle() -> Result<(), WalkError> {
    let analysis = SpectralAnalysis::figure10()?;
    assert_eq!(analysis.tuples().len(), 8);
    for tuple in analysis.tuples() {
        let modulus = tuple.eigenvalue.norm();
        assert!((modulus - 1.0).abs() < TEST_TOLERANCE, "|λ| = {} for {}", modulus, tuple);
    }
    Ok(())
}

#[test]
fn test_eigenpairs_satisfy_eigen_equation() -> Result<(), WalkError> {
    let analysis = SpectralAnalysis::figure10()?;
    let ur: &Operator = analysis.search_operator();
    let decomposition = analysis.decomposition();
    for i in 0..DIM {
        let v = decomposition.eigenvector(i);
        let lambda = decomposition.eigenvalues()[i];
        let residual = (ur * v - v * lambda).norm();
        assert!(residual < 1e-8, "eigenpair {} residual {:.3e}", i, residual);
    }
    Ok(())
}

#[test]
fn test_eigenvalue_sum_equals_trace() -> Result<(), WalkError> {
    let analysis = SpectralAnalysis::figure10()?;
    let sum: Complex<f64> = analysis.tuples().iter().map(|t| t.eigenvalue).sum();
    let trace = analysis.search_operator().trace();
    assert!((sum - trace).norm() < TEST_TOLERANCE, "Σλ = {} vs tr = {}", sum, trace);
    Ok(())
}

#[test]
fn test_eigenbasis_reconstructs_initial_state() -> Result<(), WalkError> {
    let analysis = SpectralAnalysis::figure10()?;
    let initial = StateVector::uniform();

    let rebuilt = analysis.reconstruct(&initial)?;
    assert_state_approx_equal(rebuilt.amplitudes(), initial.amplitudes(), TEST_TOLERANCE, "linear-solve expansion");

    let from_overlaps = analysis.reconstruct_initial_from_overlaps();
    assert_state_approx_equal(from_overlaps.amplitudes(), initial.amplitudes(), 1e-8, "overlap expansion");
    Ok(())
}

#[test]
fn test_squared_overlaps_sum_to_one() -> Result<(), WalkError> {
    let analysis = SpectralAnalysis::figure10()?;
    let marked_total: f64 = analysis.marked_weights().iter().sum();
    let initial_total: f64 = analysis.initial_weights().iter().sum();
    assert!((marked_total - 1.0).abs() < 1e-8, "Σ|<v|m>|² = {}", marked_total);
    assert!((initial_total - 1.0).abs() < 1e-8, "Σ|<ψ0|v>|² = {}", initial_total);

    let spaces = analysis.eigenspace_weights();
    let multiplicity: usize = spaces.iter().map(|s| s.multiplicity).sum();
    let space_marked: f64 = spaces.iter().map(|s| s.marked_weight).sum();
    assert_eq!(multiplicity, DIM);
    assert!((space_marked - 1.0).abs() < 1e-8);
    for space in &spaces {
        assert!(space.marked_weight >= -TEST_TOLERANCE && space.marked_weight <= 1.0 + 1e-8);
    }
    Ok(())
}

#[test]
fn test_overlaps_follow_inner_product_convention() -> Result<(), WalkError> {
    // The marked overlap is <v|m>, i.e. the conjugate of the marked component of v.
    let analysis = SpectralAnalysis::figure10()?;
    for (i, tuple) in analysis.tuples().iter().enumerate() {
        let v = analysis.decomposition().eigenvector(i);
        let expected = v[MARKED_VERTEX].conj();
        assert!((tuple.overlap_with_marked - expected).norm() < TEST_TOLERANCE);
    }
    Ok(())
}

#[test]
fn test_detection_probability_within_unit_interval() -> Result<(), WalkError> {
    for prob in [DetectionProbability::figure10()?, DetectionProbability::search()?] {
        for t in 0..=200 {
            let p = prob.at(t);
            assert!((-TEST_TOLERANCE..=1.0 + TEST_TOLERANCE).contains(&p), "prob({}) = {}", t, p);
        }
    }
    Ok(())
}

#[test]
fn test_two_step_probability_of_walk_operator() -> Result<(), WalkError> {
    // The figure 10 evaluation applies U twice to the uniform state.
    let prob = DetectionProbability::figure10()?;
    let u = WalkOperators::figure10().evolution();
    let marked = StateVector::basis(MARKED_VERTEX)?;
    let direct = marked.inner(&StateVector::uniform().evolved(&u, 2)).norm_sqr();
    assert!((prob.at(2) - direct).abs() < TEST_TOLERANCE);
    assert!((direct - 0.125).abs() < TEST_TOLERANCE);
    Ok(())
}

#[test]
fn test_continuous_optimum_improves_on_start() -> Result<(), WalkError> {
    let prob = DetectionProbability::search()?;
    let start = prob.at_continuous(6.0);
    let peak = prob.optimize_from(6.0);
    assert!(peak.probability >= start - 1e-12, "{} < {}", peak.probability, start);
    assert!(peak.probability <= 1.0 + 1e-9);
    assert!((prob.at_continuous(peak.time) - peak.probability).abs() < 1e-12);
    Ok(())
}
