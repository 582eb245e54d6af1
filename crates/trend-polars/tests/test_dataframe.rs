mod common;

use approx::assert_relative_eq;
use common::{extract_value, reference_df};
use polars::prelude::*;
use trend_fit::{analyze_trend, TrendParameters};
use trend_polars::{tablify_results, Error, TrendAnalysisExt, TABLE_COLUMNS};

#[test]
fn test_analysis_matches_slices() -> anyhow::Result<()> {
    let df = reference_df();
    let params = TrendParameters::with_max_degree(3);

    let from_df = df.trend_analysis("x", "y", &params)?;
    let from_slices = analyze_trend(&[0, 1, 2, 3, 4, 5], &[0, 27, 8, -27, -64, 125], 3)?;
    assert_eq!(from_df, from_slices);
    Ok(())
}

#[test]
fn test_trend_table_values() -> anyhow::Result<()> {
    let table = reference_df().trend_table("x", "y", &TrendParameters::with_max_degree(3))?;

    assert_eq!(table.shape(), (3, TABLE_COLUMNS.len()));
    assert_relative_eq!(extract_value(&table, "R2", 0), 0.0702001097, epsilon = 1e-8);
    assert_relative_eq!(extract_value(&table, "F", 2), 13.5647100578, epsilon = 1e-6);
    assert_relative_eq!(extract_value(&table, "p-value", 1), 0.30122, epsilon = 1e-4);
    assert_relative_eq!(extract_value(&table, "SSE", 0), 19013.9428571, epsilon = 1e-6);
    assert_relative_eq!(extract_value(&table, "SSE", 1), 12530.0857143, epsilon = 1e-6);
    assert_relative_eq!(extract_value(&table, "AIC", 2), 56.5808789427, epsilon = 1e-7);
    assert_relative_eq!(extract_value(&table, "BIC", 0), 67.1860319940, epsilon = 1e-7);

    let models = table.column("Model")?.str()?;
    assert_eq!(models.get(0), Some("Linear"));
    assert_eq!(models.get(2), Some("Cubic"));
    Ok(())
}

#[test]
fn test_tablify_matches_analysis() -> anyhow::Result<()> {
    let x: Vec<f64> = (0..20).map(|i| i as f64).collect();
    let y: Vec<f64> = x.iter().map(|v| (v * 0.4).cos() * 3.0 + v).collect();
    let analysis = analyze_trend(&x, &y, 5)?;
    let table = tablify_results(&analysis)?;

    assert_eq!(table.height(), 5);
    for (row, stats) in analysis.iter().enumerate() {
        assert_relative_eq!(extract_value(&table, "SSE", row), stats.sse);
        assert_relative_eq!(extract_value(&table, "Adj. R2", row), stats.adjusted_r_squared);
        assert_relative_eq!(extract_value(&table, "LogLik", row), stats.log_likelihood());
    }
    Ok(())
}

#[test]
fn test_float32_and_unsigned_columns() -> anyhow::Result<()> {
    let df = df![
        "x" => [0u32, 1, 2, 3, 4, 5, 6],
        "y" => [1.0f32, 2.5, 2.0, 4.5, 5.0, 7.5, 7.0],
    ]?;
    let analysis = df.trend_analysis("x", "y", &TrendParameters::default())?;
    assert_eq!(analysis.len(), 2);
    Ok(())
}

#[test]
fn test_missing_column() {
    let err = reference_df()
        .trend_analysis("x", "missing", &TrendParameters::default())
        .unwrap_err();
    assert!(matches!(err, Error::InvalidColumn(name) if name == "missing"));
}

#[test]
fn test_string_column_rejected() {
    let df = df![
        "x" => ["a", "b", "c", "d"],
        "y" => [1.0, 2.0, 3.0, 5.0],
    ]
    .unwrap();
    let err = df
        .trend_analysis("x", "y", &TrendParameters::default())
        .unwrap_err();
    assert!(matches!(err, Error::TypeMismatch { .. }));
}

#[test]
fn test_null_values_rejected() {
    let y = Series::new("y".into(), &[Some(1.0), None, Some(3.0), Some(2.0), Some(5.0)]);
    let x = Series::new("x".into(), &[0.0, 1.0, 2.0, 3.0, 4.0]);
    let df = DataFrame::new(vec![x.into(), y.into()]).unwrap();

    let err = df
        .trend_analysis("x", "y", &TrendParameters::default())
        .unwrap_err();
    assert!(matches!(err, Error::NullValues(name) if name == "y"));
}

#[test]
fn test_analysis_errors_propagate() {
    let df = df![
        "x" => [1.0, 2.0, 3.0],
        "y" => [1.0, 2.0, 4.0],
    ]
    .unwrap();
    let err = df
        .trend_analysis("x", "y", &TrendParameters::with_max_degree(3))
        .unwrap_err();
    assert!(matches!(err, Error::Core(_)));
}
