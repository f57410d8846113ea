// tests/aggregation_tests.rs

use qwalk::core::{StateVector, DIM, MARKED_VERTEX};
use qwalk::operators::{marking_operator, WalkOperators};
use qwalk::plot::{render_bar_chart, render_time_grid};
use qwalk::simulation::{aggregate, AggregationConfig, BornSampler, FrequencyTable, WalkHost};
use qwalk::WalkError;

const TEST_TOLERANCE: f64 = 1e-9;

/// Deterministic host cycling through `0..period` regardless of the time.
struct CyclingHost {
    next: usize,
    period: usize,
}

impl CyclingHost {
    fn new(period: usize) -> Self {
        Self { next: 0, period }
    }
}

impl WalkHost for CyclingHost {
    fn simulate(&mut self, _time: u32) -> Result<usize, WalkError> {
        let outcome = self.next;
        self.next = (self.next + 1) % self.period;
        Ok(outcome)
    }
}

fn search_sampler(seed: u64) -> Result<BornSampler, WalkError> {
    let evolution = WalkOperators::figure10().evolution() * marking_operator(MARKED_VERTEX)?;
    Ok(BornSampler::new(evolution, StateVector::uniform(), seed))
}

fn assert_rows_normalized(table: &FrequencyTable) {
    for (t, freqs) in table.iter() {
        let sum: f64 = freqs.iter().sum();
        assert!((sum - 1.0).abs() < TEST_TOLERANCE, "row t={} sums to {}", t, sum);
    }
}

#[test]
fn test_cycling_host_with_hundred_repetitions() -> Result<(), WalkError> {
    // 100 draws over 8 outcomes cannot split evenly: every outcome lands
    // 12 or 13 times, i.e. within 0.005 of 0.125.
    let config = AggregationConfig::builder().repetitions(100).build()?;
    let table = aggregate(&mut CyclingHost::new(DIM), &config)?;

    assert_eq!(table.times(), vec![1, 2, 3, 4, 8, 10, 25, 100]);
    for (t, freqs) in table.iter() {
        assert_eq!(freqs.len(), DIM);
        for (outcome, f) in freqs.iter().enumerate() {
            assert!((f - 0.125).abs() <= 0.005 + TEST_TOLERANCE, "t={} outcome={} f={}", t, outcome, f);
        }
    }
    assert_rows_normalized(&table);
    Ok(())
}

#[test]
fn test_cycling_host_even_split_is_uniform() -> Result<(), WalkError> {
    let config = AggregationConfig::builder().repetitions(96).build()?;
    let table = aggregate(&mut CyclingHost::new(DIM), &config)?;
    for t in config.times() {
        assert_eq!(table.get(*t), Some(&[0.125; DIM][..]), "t={}", t);
    }
    Ok(())
}

#[test]
fn test_grover_bit_positions() -> Result<(), WalkError> {
    let config = AggregationConfig::grover_bits();
    let table = aggregate(&mut CyclingHost::new(16), &config)?;
    assert_eq!(table.len(), 1);
    let row = table.get(1).ok_or(WalkError::InvalidConfig { message: "missing row".to_string() })?;
    assert_eq!(row.len(), 16);
    // 1000 = 62 * 16 + 8: the first eight positions get one extra hit.
    assert!((row[0] - 0.063).abs() < TEST_TOLERANCE);
    assert!((row[15] - 0.062).abs() < TEST_TOLERANCE);
    assert_rows_normalized(&table);
    Ok(())
}

#[test]
fn test_out_of_range_outcome_aborts() -> Result<(), WalkError> {
    let config = AggregationConfig::builder().times([5]).repetitions(10).build()?;
    let mut host = |_t: u32| -> Result<usize, WalkError> { Ok(DIM) };
    match aggregate(&mut host, &config) {
        Err(WalkError::OutcomeOutOfRange { time, outcome, outcomes }) => {
            assert_eq!((time, outcome, outcomes), (5, 8, 8));
        }
        other => panic!("Expected OutcomeOutOfRange, got {:?}", other),
    }
    Ok(())
}

#[test]
fn test_host_failure_propagates_unchanged() -> Result<(), WalkError> {
    let config = AggregationConfig::builder().times([1, 2]).repetitions(5).build()?;
    let mut host = |t: u32| -> Result<usize, WalkError> {
        if t == 2 {
            Err(WalkError::HostFailure { message: "qubit allocation failed".to_string() })
        } else {
            Ok(0)
        }
    };
    let err = aggregate(&mut host, &config).err();
    assert_eq!(err, Some(WalkError::HostFailure { message: "qubit allocation failed".to_string() }));
    Ok(())
}

#[test]
fn test_born_sampler_rows_normalized() -> Result<(), WalkError> {
    let config = AggregationConfig::builder().repetitions(500).build()?;
    let table = aggregate(&mut search_sampler(42)?, &config)?;
    assert_eq!(table.len(), 8);
    assert_rows_normalized(&table);
    Ok(())
}

#[test]
fn test_born_sampler_tracks_exact_distribution() -> Result<(), WalkError> {
    let mut sampler = search_sampler(2024)?;
    let exact = sampler.distribution(3);
    let config = AggregationConfig::builder().times([3]).repetitions(20_000).build()?;
    let table = aggregate(&mut sampler, &config)?;
    let row = table.get(3).ok_or(WalkError::InvalidConfig { message: "missing row".to_string() })?;
    for (v, (empirical, p)) in row.iter().zip(exact.iter()).enumerate() {
        assert!((empirical - p).abs() < 0.02, "vertex {}: empirical {} vs exact {}", v, empirical, p);
    }
    Ok(())
}

#[test]
fn test_render_outputs_svg_files() -> Result<(), WalkError> {
    let config = AggregationConfig::builder().repetitions(64).build()?;
    let table = aggregate(&mut CyclingHost::new(DIM), &config)?;

    let dir = std::env::temp_dir();
    let grid_path = dir.join(format!("qwalk_grid_{}.svg", std::process::id()));
    let bar_path = dir.join(format!("qwalk_bar_{}.svg", std::process::id()));

    render_time_grid(&table, &grid_path, "Quantum walk, Rep = 64")?;
    let row = table.get(1).ok_or(WalkError::InvalidConfig { message: "missing row".to_string() })?;
    render_bar_chart(row, &bar_path, "Bit positions")?;

    for path in [&grid_path, &bar_path] {
        let svg = std::fs::read_to_string(path).map_err(|e| WalkError::Render { message: e.to_string() })?;
        assert!(svg.contains("<svg"), "{} is not an SVG document", path.display());
        let _ = std::fs::remove_file(path);
    }
    Ok(())
}
