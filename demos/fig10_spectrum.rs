//! Spectrum of the figure 10 search operator and its detection probability

use qwalk::detection::DetectionProbability;
use qwalk::operators::{h1, reflection_about};
use qwalk::{validate_walk, SpectralAnalysis, StateVector, WalkOperators};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let walk = WalkOperators::figure10();
    validate_walk(&walk, None)?;

    // The uniform state is left alone by every tessellation.
    let uniform = StateVector::uniform();
    let drift = (h1() * uniform.amplitudes() - uniform.amplitudes()).norm();
    println!("|H1·ψ0 - ψ0| = {:.3e}", drift);

    let analysis = SpectralAnalysis::figure10()?;
    println!("\nEigen-tuples of U·R (λ, <v|m>, <ψ0|v>):");
    for tuple in analysis.tuples_by_phase() {
        println!("  {}", tuple);
    }

    println!("\nEigenspaces:");
    for space in analysis.eigenspace_weights() {
        println!(
            "  λ = {:.4} (x{}): marked weight {:.4}, initial weight {:.4}",
            space.eigenvalue, space.multiplicity, space.marked_weight, space.initial_weight
        );
    }

    let rebuilt = analysis.reconstruct_initial_from_overlaps();
    println!("\nψ0 rebuilt from overlaps:\n{}", rebuilt);

    let walk_only = DetectionProbability::figure10()?;
    println!("\nprob(2) under U alone: {:.6}", walk_only.at(2));

    let search = DetectionProbability::search()?;
    let (best_t, best_p) = search.peak(50);
    println!("Best integer step under U·R within 50 steps: t={} p={:.6}", best_t, best_p);
    let peak = search.optimize_from(6.0);
    println!(
        "Nelder-Mead from t=6: t={:.4} p={:.6} ({} iterations, converged: {})",
        peak.time, peak.probability, peak.minimum.iterations, peak.minimum.converged
    );

    // Reflecting about ψ0 instead of marking a vertex.
    let reflected = DetectionProbability::new(
        walk.evolution() * reflection_about(&uniform),
        StateVector::basis(qwalk::MARKED_VERTEX)?,
        uniform,
    )?;
    println!("prob(t) with reflection about ψ0, t=0..8: {:?}", reflected.series(8));

    Ok(())
}
