//! Polynomial trend analysis
//!
//! Fits models of increasing polynomial degree to paired samples and reports,
//! for each degree, how much it improves on the degree below it.
//!
//! # Crates
//!
//! - **trend-core**: errors, model names, sample validation, small numerics
//! - **trend-fit**: the nested fits, F-tests, R², AIC/BIC and confidence band
//! - **trend-viz**: SVG plots of an analysis via `plotters`
//! - **trend-polars**: results tables and `DataFrame` integration
//!
//! ## Usage
//!
//! ```rust
//! use trend_stats::{analyze_trend, tablify_results};
//!
//! let x = [0, 1, 2, 3, 4, 5];
//! let y = [0, 27, 8, -27, -64, 125];
//!
//! let results = analyze_trend(&x, &y, 3).unwrap();
//! let cubic = results.get(3).unwrap();
//! assert_eq!(cubic.model_name(), "Cubic");
//! assert!(cubic.r2() > 0.9);
//!
//! let table = tablify_results(&results).unwrap();
//! println!("{table}");
//! ```

use num_traits::ToPrimitive;
use std::path::Path;
use tracing::info;

pub use trend_core::{math, Error, ModelOrder, Result, Samples, MODEL_NAMES};
pub use trend_fit::{
    BaselineStatistics, ConfidenceBand, DegreeStatistics, FTest, InformationCriteria, LinearFit,
    LinearRegression, NestedComparison, NullTrendVisualizer, Polynomial, PolynomialFit,
    PolynomialKernel, TrendAnalysis, TrendAnalyzer, TrendAnalyzerBuilder, TrendParameters,
    TrendVisualizer,
};
pub use trend_polars::{tablify_results, TrendAnalysisExt, TABLE_COLUMNS};
pub use trend_viz::{render_svg, render_to_file, PlotOptions, SvgTrendVisualizer};

/// Errors from the DataFrame layer
pub use trend_polars::Error as TableError;

/// Analyze with default band settings, fitting degrees `1..=max_degree`
pub fn analyze_trend<X, Y>(x: &[X], y: &[Y], max_degree: usize) -> Result<TrendAnalysis>
where
    X: ToPrimitive,
    Y: ToPrimitive,
{
    trend_fit::analyze_trend(x, y, max_degree)
}

/// Analyze with explicit parameters
pub fn analyze_trend_with<X, Y>(x: &[X], y: &[Y], params: &TrendParameters) -> Result<TrendAnalysis>
where
    X: ToPrimitive,
    Y: ToPrimitive,
{
    TrendAnalyzer::new(params.clone())?.analyze(x, y)
}

/// Analyze and write the SVG plot to `path`
pub fn analyze_and_plot<X, Y>(
    x: &[X],
    y: &[Y],
    params: &TrendParameters,
    plot_options: &PlotOptions,
    path: impl AsRef<Path>,
) -> Result<TrendAnalysis>
where
    X: ToPrimitive,
    Y: ToPrimitive,
{
    let path = path.as_ref();
    let visualizer = SvgTrendVisualizer::new(path, plot_options.clone())?;
    let analysis = TrendAnalyzer::with_visualizer(params.clone(), visualizer)?.analyze(x, y)?;
    info!(path = %path.display(), models = analysis.len(), "trend plot written");
    Ok(analysis)
}
