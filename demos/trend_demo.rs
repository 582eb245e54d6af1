//! Analyze a small cubic-looking series, print the table and write a plot
//!
//! Run with `RUST_LOG=debug cargo run --example trend_demo` to see each fit.

use anyhow::Result;
use tracing_subscriber::EnvFilter;
use trend_stats::{analyze_and_plot, tablify_results, PlotOptions, TrendParameters};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let x = [0, 1, 2, 3, 4, 5];
    let y = [0, 27, 8, -27, -64, 125];

    let params = TrendParameters::with_max_degree(3);
    let options = PlotOptions::default().with_title("Trend Analysis Demo");
    let output = std::env::temp_dir().join("trend_demo.svg");

    let results = analyze_and_plot(&x, &y, &params, &options, &output)?;

    println!("{results}");
    println!("{}", tablify_results(&results)?);

    for stats in results.iter() {
        println!("{:<10} {}", stats.model_name(), stats.polynomial);
    }
    if let Some(best) = results.best_by_aic() {
        println!("Lowest AIC: {} (AIC = {:.3})", best.model_name(), best.aic());
    }
    println!("Plot written to {}", output.display());

    Ok(())
}
