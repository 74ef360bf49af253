//! Fit a Normal model to measurements and compare it with a reference
//!
//! Run with: RUST_LOG=debug cargo run -p statslab-normal --example fit_and_sample

use statslab_normal::NormalDist;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Fitting a Normal model ===\n");

    let measurements = [2.5, 3.1, 2.1, 2.4, 2.7, 3.5];
    let fitted = NormalDist::from_samples(&measurements)?;
    println!("Fitted: {fitted}");

    let quartiles = fitted.quantiles(4)?;
    println!(
        "Quartiles: {:.3} / {:.3} / {:.3}",
        quartiles[0], quartiles[1], quartiles[2]
    );

    let reference = NormalDist::new(3.0, 0.5)?;
    println!("Overlap with {reference}: {:.4}", fitted.overlap(&reference)?);

    println!("\n=== Simulating ===\n");
    let draws = fitted.samples(10_000, 42);
    let refit = NormalDist::from_samples(&draws)?;
    println!("Refit from {} draws: {refit}", draws.len());
    println!("P(X <= 3.0) = {:.4}", fitted.cdf(3.0));

    // Difference of two independent measurements
    let diff = fitted - reference;
    println!("Difference: {diff}, P(diff > 0) = {:.4}", 1.0 - diff.cdf(0.0));

    Ok(())
}
