//! Common test utilities for trend-polars tests

use polars::prelude::*;

/// Reference scenario with an integer x column
pub fn reference_df() -> DataFrame {
    df![
        "x" => [0i64, 1, 2, 3, 4, 5],
        "y" => [0.0, 27.0, 8.0, -27.0, -64.0, 125.0],
    ]
    .unwrap()
}

/// Extract a single float from a result table
pub fn extract_value(df: &DataFrame, col_name: &str, row: usize) -> f64 {
    df.column(col_name)
        .unwrap()
        .f64()
        .unwrap()
        .get(row)
        .unwrap()
}
