//! Core types for polynomial trend analysis
//!
//! This crate holds the pieces every other trend-stats crate agrees on:
//!
//! - [`Error`] and [`Result`], the shared error vocabulary
//! - [`ModelOrder`], naming nested polynomial models ("Constant", "Linear", ...)
//! - [`Samples`], validated paired `(x, y)` input
//! - [`math`], small slice helpers (mean, sums of squares, linspace)
//!
//! # Example
//!
//! ```rust
//! use trend_core::{ModelOrder, Samples};
//!
//! let samples = Samples::from_pairs(&[0, 1, 2, 3], &[1.0, 3.0, 5.0, 7.0]).unwrap();
//! assert_eq!(samples.len(), 4);
//! assert_eq!(ModelOrder::new(2).name(), "Quadratic");
//! ```

pub mod error;
pub mod math;
pub mod model;
pub mod samples;

pub use error::{Error, Result};
pub use model::{ModelOrder, MODEL_NAMES};
pub use samples::{minimum_sample_size, validate_max_degree, validate_sample_size, Samples};
