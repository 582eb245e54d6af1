//! Trend analysis on Polars DataFrames

use crate::table::tablify_results;
use crate::{Error, Result};
use polars::prelude::*;
use tracing::debug;
use trend_fit::{TrendAnalysis, TrendAnalyzer, TrendParameters};

/// Extension trait running trend analysis over two DataFrame columns
pub trait TrendAnalysisExt {
    /// Analyze `y_col` against `x_col`
    ///
    /// # Arguments
    /// * `x_col` - Independent variable column (any float or integer type)
    /// * `y_col` - Dependent variable column
    /// * `params` - Analysis parameters
    fn trend_analysis(
        &self,
        x_col: &str,
        y_col: &str,
        params: &TrendParameters,
    ) -> Result<TrendAnalysis>;

    /// Analyze and return the results table (see [`tablify_results`])
    fn trend_table(&self, x_col: &str, y_col: &str, params: &TrendParameters) -> Result<DataFrame> {
        let analysis = self.trend_analysis(x_col, y_col, params)?;
        tablify_results(&analysis)
    }
}

impl TrendAnalysisExt for DataFrame {
    fn trend_analysis(
        &self,
        x_col: &str,
        y_col: &str,
        params: &TrendParameters,
    ) -> Result<TrendAnalysis> {
        let x = column_values(self, x_col)?;
        let y = column_values(self, y_col)?;
        debug!(x_col, y_col, rows = x.len(), "running trend analysis on DataFrame");

        let mut analyzer = TrendAnalyzer::new(params.clone())?;
        Ok(analyzer.analyze(&x, &y)?)
    }
}

/// Extract a numeric column as `f64`, rejecting nulls
fn column_values(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let column = df
        .column(name)
        .map_err(|_| Error::InvalidColumn(name.to_string()))?;

    let column = match column.dtype() {
        DataType::Float64 => column.clone(),
        DataType::Float32
        | DataType::Int64
        | DataType::Int32
        | DataType::UInt64
        | DataType::UInt32 => column.cast(&DataType::Float64)?,
        dt => {
            return Err(Error::TypeMismatch {
                expected: "numeric".to_string(),
                got: format!("{:?}", dt),
            });
        }
    };

    if column.null_count() > 0 {
        return Err(Error::NullValues(name.to_string()));
    }

    Ok(column.f64()?.into_no_null_iter().collect())
}
