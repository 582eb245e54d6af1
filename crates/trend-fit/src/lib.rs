//! Nested polynomial trend analysis
//!
//! This crate fits polynomial models of increasing degree to paired samples
//! and decides, degree by degree, whether the extra term earns its keep.
//!
//! # Procedure
//!
//! 1. **Baseline**: the constant model `y = ȳ` gives the total sum of squares
//! 2. **Linear**: closed-form simple regression (slope, intercept, Pearson r)
//! 3. **Higher degrees**: SVD least-squares fits of degree `2..=max_degree`
//! 4. **Comparison**: a partial F-test of each degree against the one below it
//! 5. **Scoring**: R², adjusted R², Gaussian log-likelihood, AIC and BIC
//!
//! ## Usage
//!
//! ```rust
//! use trend_fit::TrendAnalyzerBuilder;
//!
//! let x: Vec<f64> = (0..20).map(|i| i as f64).collect();
//! let y: Vec<f64> = x.iter().map(|v| 0.5 * v * v - v + 3.0).collect();
//!
//! let mut analyzer = TrendAnalyzerBuilder::new()
//!     .max_degree(3)
//!     .confidence(95.0)
//!     .build()
//!     .unwrap();
//! let results = analyzer.analyze(&x, &y).unwrap();
//!
//! for stats in results.iter() {
//!     println!("{}: R² = {:.3}, p = {:.4}", stats.model_name(), stats.r2(), stats.p_value());
//! }
//! assert!(results.get(2).unwrap().r2() > 0.999);
//! ```

pub mod analyzer;
pub mod bands;
pub mod comparison;
pub mod criteria;
pub mod kernel;
pub mod linear;
pub mod types;
pub mod visualization;

pub use analyzer::{analyze_trend, TrendAnalyzer, TrendAnalyzerBuilder, TrendParameters};
pub use bands::{validate_confidence_percent, ConfidenceBand};
pub use comparison::{FTest, NestedComparison};
pub use criteria::{adjusted_r_squared, r_squared, InformationCriteria};
pub use kernel::{Polynomial, PolynomialFit, PolynomialKernel};
pub use linear::{LinearFit, LinearRegression};
pub use types::{BaselineStatistics, DegreeStatistics, TrendAnalysis};
pub use visualization::{NullTrendVisualizer, TrendVisualizer};

pub use trend_core::{Error, ModelOrder, Result, Samples};
