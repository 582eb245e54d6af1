//! Tabulation of trend analysis results

use crate::Result;
use polars::prelude::*;
use trend_fit::TrendAnalysis;

/// Column names of the results table, in order
pub const TABLE_COLUMNS: [&str; 10] = [
    "Order", "Model", "R2", "SSE", "Adj. R2", "F", "p-value", "LogLik", "AIC", "BIC",
];

/// One row per fitted degree, ascending
pub fn tablify_results(analysis: &TrendAnalysis) -> Result<DataFrame> {
    let rows: Vec<_> = analysis.iter().collect();

    let order: Vec<u32> = rows.iter().map(|s| s.degree() as u32).collect();
    let model: Vec<String> = rows.iter().map(|s| s.model_name()).collect();
    let float_column = |name: &str, f: fn(&trend_fit::DegreeStatistics) -> f64| -> Column {
        Series::new(name.into(), rows.iter().map(|s| f(s)).collect::<Vec<f64>>()).into()
    };

    let columns = vec![
        Series::new(TABLE_COLUMNS[0].into(), order).into(),
        Series::new(TABLE_COLUMNS[1].into(), model).into(),
        float_column(TABLE_COLUMNS[2], |s| s.r_squared),
        float_column(TABLE_COLUMNS[3], |s| s.sse),
        float_column(TABLE_COLUMNS[4], |s| s.adjusted_r_squared),
        float_column(TABLE_COLUMNS[5], |s| s.f_statistic()),
        float_column(TABLE_COLUMNS[6], |s| s.p_value()),
        float_column(TABLE_COLUMNS[7], |s| s.log_likelihood()),
        float_column(TABLE_COLUMNS[8], |s| s.aic()),
        float_column(TABLE_COLUMNS[9], |s| s.bic()),
    ];

    Ok(DataFrame::new(columns)?)
}
