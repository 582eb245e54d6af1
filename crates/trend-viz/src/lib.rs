//! Plotting for polynomial trend analyses
//!
//! Renders the samples, the constant model, every fitted curve and the
//! optional confidence band to SVG with `plotters`. Use [`render_svg`] for an
//! in-memory document, [`render_to_file`] for a file, or attach an
//! [`SvgTrendVisualizer`] to an analyzer to plot as a side effect.
//!
//! ```rust,no_run
//! use trend_fit::TrendAnalyzerBuilder;
//! use trend_viz::{PlotOptions, SvgTrendVisualizer};
//!
//! let visualizer = SvgTrendVisualizer::new("trend.svg", PlotOptions::default()).unwrap();
//! let mut analyzer = TrendAnalyzerBuilder::new()
//!     .max_degree(3)
//!     .visualizer(visualizer)
//!     .build()
//!     .unwrap();
//! analyzer.analyze(&[0, 1, 2, 3, 4, 5], &[0, 27, 8, -27, -64, 125]).unwrap();
//! ```

pub mod options;
pub mod render;
pub mod visualizer;

pub use options::PlotOptions;
pub use render::{render_svg, render_to_file, CurveData, PlotData};
pub use visualizer::SvgTrendVisualizer;
