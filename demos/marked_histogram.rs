//! Bar chart of bit-position frequencies from a single-time host

use std::path::PathBuf;

use qwalk::plot::render_bar_chart;
use qwalk::{aggregate, AggregationConfig, WalkError};
use rand::distr::{Distribution, StandardUniform};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

/// Bit position the stand-in host favours.
const TARGET_BIT: usize = 11;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AggregationConfig::grover_bits();
    println!("Configuration: {}", config);

    // Finds the target bit 90% of the time, otherwise reports a random position.
    let mut rng = StdRng::seed_from_u64(16);
    let outcomes = config.outcomes();
    let mut host = |_t: u32| -> Result<usize, WalkError> {
        let u: f64 = StandardUniform.sample(&mut rng);
        if u < 0.9 {
            Ok(TARGET_BIT)
        } else {
            let v: f64 = StandardUniform.sample(&mut rng);
            Ok(((v * outcomes as f64) as usize).min(outcomes - 1))
        }
    };
    let table = aggregate(&mut host, &config)?;
    println!("{}", table);

    let row = table.get(1).ok_or("missing frequency row")?;
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("marked_histogram.svg"));
    render_bar_chart(row, &path, "Bit position frequencies")?;
    println!("Wrote {}", path.display());

    Ok(())
}
