//! Types used for trend analysis results

use crate::bands::ConfidenceBand;
use crate::comparison::FTest;
use crate::criteria::InformationCriteria;
use crate::kernel::Polynomial;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use trend_core::ModelOrder;

/// Statistics of the constant model `y = mean(y)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaselineStatistics {
    /// Sample mean of `y`
    pub mean: f64,
    /// Total sum of squares Σ(yᵢ − ȳ)²
    pub sse: f64,
    pub criteria: InformationCriteria,
}

/// Statistics of one polynomial model in the nested sequence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DegreeStatistics {
    pub model: ModelOrder,
    /// Least-squares polynomial for this degree
    pub polynomial: Polynomial,
    /// Residual sum of squares
    pub sse: f64,
    pub r_squared: f64,
    pub adjusted_r_squared: f64,
    /// F-test against the model one degree lower
    pub f_test: FTest,
    pub criteria: InformationCriteria,
}

impl DegreeStatistics {
    /// Polynomial degree of this model
    pub fn degree(&self) -> usize {
        self.model.degree()
    }

    /// Model name such as "Quadratic"
    pub fn model_name(&self) -> String {
        self.model.name()
    }

    pub fn r2(&self) -> f64 {
        self.r_squared
    }

    pub fn p_value(&self) -> f64 {
        self.f_test.p_value
    }

    pub fn f_statistic(&self) -> f64 {
        self.f_test.statistic
    }

    pub fn log_likelihood(&self) -> f64 {
        self.criteria.log_likelihood
    }

    pub fn aic(&self) -> f64 {
        self.criteria.aic
    }

    pub fn bic(&self) -> f64 {
        self.criteria.bic
    }
}

/// Result of a nested polynomial trend analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendAnalysis {
    /// Number of sample pairs analyzed
    pub sample_size: usize,
    /// Highest polynomial degree fitted
    pub max_degree: usize,
    /// The constant model every R² is measured against
    pub baseline: BaselineStatistics,
    /// Per-degree statistics keyed by degree, `1..=max_degree`
    pub degrees: BTreeMap<usize, DegreeStatistics>,
    /// Confidence band, when requested
    pub band: Option<ConfidenceBand>,
}

impl TrendAnalysis {
    /// Statistics for a given degree
    pub fn get(&self, degree: usize) -> Option<&DegreeStatistics> {
        self.degrees.get(&degree)
    }

    /// Iterate over fitted models in ascending degree
    pub fn iter(&self) -> impl Iterator<Item = &DegreeStatistics> {
        self.degrees.values()
    }

    /// Number of fitted (non-constant) models
    pub fn len(&self) -> usize {
        self.degrees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.degrees.is_empty()
    }

    /// Model with the lowest AIC; ties favour the lower degree
    pub fn best_by_aic(&self) -> Option<&DegreeStatistics> {
        self.lowest_by(|s| s.aic())
    }

    /// Model with the lowest BIC; ties favour the lower degree
    pub fn best_by_bic(&self) -> Option<&DegreeStatistics> {
        self.lowest_by(|s| s.bic())
    }

    fn lowest_by<F>(&self, key: F) -> Option<&DegreeStatistics>
    where
        F: Fn(&DegreeStatistics) -> f64,
    {
        self.iter().fold(None, |best, candidate| match best {
            Some(current) if key(current) <= key(candidate) => Some(current),
            _ => Some(candidate),
        })
    }

    /// Degrees whose F-test against the next-simpler model has `p < alpha`
    pub fn significant_degrees(&self, alpha: f64) -> Vec<usize> {
        self.iter()
            .filter(|s| s.f_test.is_significant(alpha))
            .map(|s| s.degree())
            .collect()
    }

    /// Evaluate the fitted model of `degree` at `x`; degree 0 gives the mean
    pub fn predict(&self, degree: usize, x: f64) -> Option<f64> {
        if degree == 0 {
            return Some(self.baseline.mean);
        }
        self.get(degree).map(|s| s.polynomial.evaluate(x))
    }
}

impl fmt::Display for TrendAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Trend analysis (n = {}, max degree = {})",
            self.sample_size, self.max_degree
        )?;
        writeln!(
            f,
            "{:>5}  {:<14} {:>9} {:>11} {:>10} {:>11} {:>11}",
            "Order", "Model", "R2", "F", "p-value", "AIC", "BIC"
        )?;
        for stats in self.iter() {
            writeln!(
                f,
                "{:>5}  {:<14} {:>9.4} {:>11.4} {:>10.4} {:>11.3} {:>11.3}",
                stats.degree(),
                stats.model_name(),
                stats.r_squared,
                stats.f_statistic(),
                stats.p_value(),
                stats.aic(),
                stats.bic()
            )?;
        }
        Ok(())
    }
}
