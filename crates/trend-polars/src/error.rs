//! Error types for trend-polars

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("Trend analysis error: {0}")]
    Core(#[from] trend_core::Error),

    #[error("Invalid column: {0}")]
    InvalidColumn(String),

    #[error("Type mismatch: expected {expected}, got {got}")]
    TypeMismatch { expected: String, got: String },

    #[error("Column {0} contains null values")]
    NullValues(String),
}

pub type Result<T> = std::result::Result<T, Error>;
