//! Position frequencies of the walk at the figure 7 step counts

use std::path::PathBuf;

use qwalk::operators::marking_operator;
use qwalk::plot::render_time_grid;
use qwalk::{aggregate, AggregationConfig, BornSampler, StateVector, WalkOperators, MARKED_VERTEX};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AggregationConfig::figure7();
    println!("Configuration: {}", config);

    let search = WalkOperators::figure10().evolution() * marking_operator(MARKED_VERTEX)?;
    let mut host = BornSampler::new(search, StateVector::uniform(), 7);
    let table = aggregate(&mut host, &config)?;
    println!("{}", table);

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("fig7_frequencies.svg"));
    render_time_grid(&table, &path, &format!("Quantum walk, Rep = {}", config.repetitions()))?;
    println!("Wrote {}", path.display());

    Ok(())
}
