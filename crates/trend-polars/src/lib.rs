//! Polars integration for polynomial trend analysis
//!
//! Turns an analysis into a results table and lets a `DataFrame` be analyzed
//! directly through an extension trait.
//!
//! # Example
//!
//! ```rust
//! use polars::prelude::*;
//! use trend_fit::TrendParameters;
//! use trend_polars::TrendAnalysisExt;
//!
//! let df = df![
//!     "x" => [0i32, 1, 2, 3, 4, 5],
//!     "y" => [0.0, 27.0, 8.0, -27.0, -64.0, 125.0],
//! ]
//! .unwrap();
//!
//! let table = df
//!     .trend_table("x", "y", &TrendParameters::with_max_degree(3))
//!     .unwrap();
//! assert_eq!(table.height(), 3);
//! ```

mod error;
mod table;
mod traits;

pub use error::{Error, Result};
pub use table::{tablify_results, TABLE_COLUMNS};
pub use traits::TrendAnalysisExt;
