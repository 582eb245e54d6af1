//! Nested polynomial trend analysis
//!
//! The analyzer fits the constant model, then models of degree
//! `1..=max_degree`, testing each against the one immediately below it.

use crate::bands::{validate_confidence_percent, ConfidenceBand};
use crate::comparison::NestedComparison;
use crate::criteria::{adjusted_r_squared, r_squared, InformationCriteria};
use crate::kernel::PolynomialKernel;
use crate::linear::LinearRegression;
use crate::types::{BaselineStatistics, DegreeStatistics, TrendAnalysis};
use crate::visualization::{NullTrendVisualizer, TrendVisualizer};
use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, instrument};
use trend_core::math::{mean, sum_of_squares_about};
use trend_core::{validate_max_degree, validate_sample_size, Error, ModelOrder, Result, Samples};

/// Parameters for trend analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendParameters {
    /// Highest polynomial degree to fit (1 = linear only)
    pub max_degree: usize,
    /// Confidence level of the band, in percent
    pub confidence_percent: f64,
    /// Whether to compute the confidence band
    pub compute_band: bool,
}

impl Default for TrendParameters {
    fn default() -> Self {
        Self {
            max_degree: 2,
            confidence_percent: 95.0,
            compute_band: true,
        }
    }
}

impl TrendParameters {
    /// Parameters fitting up to `max_degree` with default band settings
    pub fn with_max_degree(max_degree: usize) -> Self {
        Self {
            max_degree,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate_max_degree(self.max_degree)?;
        if self.compute_band {
            validate_confidence_percent(self.confidence_percent)?;
        }
        Ok(())
    }
}

/// Builder for configuring and creating trend analyzers
#[derive(Debug, Clone)]
pub struct TrendAnalyzerBuilder<V> {
    params: TrendParameters,
    visualizer: V,
}

impl TrendAnalyzerBuilder<NullTrendVisualizer> {
    pub fn new() -> Self {
        Self {
            params: TrendParameters::default(),
            visualizer: NullTrendVisualizer,
        }
    }
}

impl Default for TrendAnalyzerBuilder<NullTrendVisualizer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: TrendVisualizer> TrendAnalyzerBuilder<V> {
    /// Sets the highest polynomial degree to fit
    pub fn max_degree(mut self, max_degree: usize) -> Self {
        self.params.max_degree = max_degree;
        self
    }

    /// Sets the band confidence level in percent (e.g. 95.0)
    pub fn confidence(mut self, confidence_percent: f64) -> Self {
        self.params.confidence_percent = confidence_percent;
        self
    }

    /// Enables or disables the confidence band
    pub fn compute_band(mut self, compute_band: bool) -> Self {
        self.params.compute_band = compute_band;
        self
    }

    /// Replaces all parameters at once
    pub fn parameters(mut self, params: TrendParameters) -> Self {
        self.params = params;
        self
    }

    /// Attaches a visualizer receiving the analysis hooks
    pub fn visualizer<W: TrendVisualizer>(self, visualizer: W) -> TrendAnalyzerBuilder<W> {
        TrendAnalyzerBuilder {
            params: self.params,
            visualizer,
        }
    }

    /// Validates the parameters and builds the analyzer
    pub fn build(self) -> Result<TrendAnalyzer<V>> {
        TrendAnalyzer::with_visualizer(self.params, self.visualizer)
    }
}

/// Fits nested polynomial models and compares consecutive degrees
#[derive(Debug, Clone)]
pub struct TrendAnalyzer<V = NullTrendVisualizer> {
    params: TrendParameters,
    visualizer: V,
    regression: LinearRegression,
    comparison: NestedComparison,
}

impl TrendAnalyzer<NullTrendVisualizer> {
    /// Create an analyzer without visualization
    pub fn new(params: TrendParameters) -> Result<Self> {
        Self::with_visualizer(params, NullTrendVisualizer)
    }
}

impl<V: TrendVisualizer> TrendAnalyzer<V> {
    /// Create an analyzer reporting to `visualizer`
    pub fn with_visualizer(params: TrendParameters, visualizer: V) -> Result<Self> {
        params.validate()?;
        Ok(Self {
            params,
            visualizer,
            regression: LinearRegression::new(),
            comparison: NestedComparison::new(),
        })
    }

    pub fn parameters(&self) -> &TrendParameters {
        &self.params
    }

    pub fn visualizer(&self) -> &V {
        &self.visualizer
    }

    pub fn into_visualizer(self) -> V {
        self.visualizer
    }

    /// Validate raw numeric input and run the analysis
    pub fn analyze<X, Y>(&mut self, x: &[X], y: &[Y]) -> Result<TrendAnalysis>
    where
        X: ToPrimitive,
        Y: ToPrimitive,
    {
        let samples = Samples::from_pairs(x, y)?;
        self.analyze_samples(&samples)
    }

    /// Run the analysis on already validated samples
    #[instrument(skip(self, samples), fields(n = samples.len(), max_degree = self.params.max_degree))]
    pub fn analyze_samples(&mut self, samples: &Samples) -> Result<TrendAnalysis> {
        let n = samples.len();
        let max_degree = self.params.max_degree;
        validate_sample_size(n, max_degree)?;
        let (x, y) = (samples.x(), samples.y());

        // Reduced model: y = mean
        let y_mean = mean(y);
        let sse_total = sum_of_squares_about(y, y_mean);
        if sse_total == 0.0 {
            return Err(Error::InvalidInput(
                "y has zero variance; goodness of fit is undefined".to_string(),
            ));
        }
        let baseline = BaselineStatistics {
            mean: y_mean,
            sse: sse_total,
            criteria: InformationCriteria::from_sse(
                sse_total,
                n,
                ModelOrder::CONSTANT.criteria_parameter_count(),
            ),
        };
        self.visualizer.record_samples(x, y)?;
        self.visualizer.record_baseline(y_mean)?;

        let band = if self.params.compute_band {
            let band = ConfidenceBand::for_samples(y, self.params.confidence_percent)?;
            self.visualizer.record_band(&band)?;
            Some(band)
        } else {
            None
        };

        let linear = self.regression.fit(x, y)?;
        debug!(
            slope = linear.slope,
            intercept = linear.intercept,
            r_value = linear.r_value,
            "linear regression fitted"
        );

        let mut degrees = BTreeMap::new();
        let mut reduced_sse = sse_total;

        for degree in 1..=max_degree {
            let model = ModelOrder::new(degree);
            let k = model.parameter_count();

            let (polynomial, sse, r2) = if degree == 1 {
                (linear.as_polynomial(), linear.sse, linear.r_squared())
            } else {
                let fit = PolynomialKernel::new(degree).fit(x, y)?;
                let r2 = r_squared(fit.sse, sse_total);
                (fit.polynomial, fit.sse, r2)
            };

            let f_test = self.comparison.compare(reduced_sse, sse, k - 1, k, n)?;
            let stats = DegreeStatistics {
                model,
                polynomial,
                sse,
                r_squared: r2,
                adjusted_r_squared: adjusted_r_squared(r2, n, k),
                f_test,
                criteria: InformationCriteria::from_sse(sse, n, model.criteria_parameter_count()),
            };

            debug!(
                degree,
                model = %model,
                r2,
                f = f_test.statistic,
                p_value = f_test.p_value,
                aic = stats.aic(),
                "model fitted"
            );

            self.visualizer.record_model(&stats)?;
            reduced_sse = sse;
            degrees.insert(degree, stats);
        }

        let analysis = TrendAnalysis {
            sample_size: n,
            max_degree,
            baseline,
            degrees,
            band,
        };
        self.visualizer.finish(&analysis)?;
        Ok(analysis)
    }
}

/// Single-call trend analysis with default band settings
///
/// # Examples
///
/// ```rust
/// use trend_fit::analyze_trend;
///
/// let x = [0, 1, 2, 3, 4, 5];
/// let y = [0, 27, 8, -27, -64, 125];
/// let results = analyze_trend(&x, &y, 3).unwrap();
///
/// assert_eq!(results.len(), 3);
/// assert_eq!(results.get(3).unwrap().model_name(), "Cubic");
/// ```
pub fn analyze_trend<X, Y>(x: &[X], y: &[Y], max_degree: usize) -> Result<TrendAnalysis>
where
    X: ToPrimitive,
    Y: ToPrimitive,
{
    TrendAnalyzer::new(TrendParameters::with_max_degree(max_degree))?.analyze(x, y)
}
