//! Simple linear regression
//!
//! The degree-1 model is fitted in closed form rather than through the
//! polynomial kernel so that the Pearson correlation, slope standard error and
//! slope t-test come out alongside the coefficients.

use crate::kernel::Polynomial;
use statrs::distribution::{ContinuousCDF, StudentsT};
use trend_core::math::{mean, sum_of_squares_about};
use trend_core::{Error, Result};

/// Result of an ordinary least-squares line fit `y = intercept + slope · x`
#[derive(Debug, Clone, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
    /// Pearson correlation coefficient, clipped to [-1, 1]
    pub r_value: f64,
    /// Two-sided p-value for H₀: slope = 0 (Student-t, n − 2 d.o.f.)
    pub p_value: f64,
    /// Standard error of the slope
    pub std_err: f64,
    /// t-statistic of the slope
    pub t_statistic: f64,
    /// Residual sum of squares
    pub sse: f64,
}

impl LinearFit {
    /// The fitted line as a degree-1 polynomial
    pub fn as_polynomial(&self) -> Polynomial {
        Polynomial::new(vec![self.intercept, self.slope])
    }

    /// Coefficient of determination
    pub fn r_squared(&self) -> f64 {
        self.r_value * self.r_value
    }
}

/// Closed-form simple linear regression
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearRegression;

impl LinearRegression {
    pub fn new() -> Self {
        Self
    }

    /// Fit a straight line through paired samples
    pub fn fit(&self, x: &[f64], y: &[f64]) -> Result<LinearFit> {
        if x.len() != y.len() {
            return Err(Error::size_mismatch(x.len(), y.len(), "linear regression"));
        }
        let n = x.len();
        if n < 3 {
            return Err(Error::InsufficientData {
                expected: 3,
                actual: n,
            });
        }

        let x_mean = mean(x);
        let y_mean = mean(y);
        let ssxx = sum_of_squares_about(x, x_mean);
        let ssyy = sum_of_squares_about(y, y_mean);
        let ssxy: f64 = x
            .iter()
            .zip(y.iter())
            .map(|(&xi, &yi)| (xi - x_mean) * (yi - y_mean))
            .sum();

        if ssxx == 0.0 {
            return Err(Error::InvalidInput(
                "Cannot fit a line when all x values are identical".to_string(),
            ));
        }

        let r_value = if ssyy == 0.0 {
            0.0
        } else {
            (ssxy / (ssxx * ssyy).sqrt()).clamp(-1.0, 1.0)
        };

        let slope = ssxy / ssxx;
        let intercept = y_mean - slope * x_mean;
        let df = (n - 2) as f64;

        let (t_statistic, p_value) = if r_value.abs() == 1.0 {
            (f64::INFINITY.copysign(r_value), 0.0)
        } else {
            let t = r_value * (df / ((1.0 - r_value) * (1.0 + r_value))).sqrt();
            let dist = StudentsT::new(0.0, 1.0, df).map_err(|e| {
                Error::Computation(format!("Failed to create t-distribution: {}", e))
            })?;
            let p = (2.0 * dist.sf(t.abs())).clamp(0.0, 1.0);
            (t, p)
        };

        let std_err = ((1.0 - r_value * r_value) * ssyy / ssxx / df).max(0.0).sqrt();

        let sse = x
            .iter()
            .zip(y.iter())
            .map(|(&xi, &yi)| {
                let residual = yi - (intercept + slope * xi);
                residual * residual
            })
            .sum();

        Ok(LinearFit {
            slope,
            intercept,
            r_value,
            p_value,
            std_err,
            t_statistic,
            sse,
        })
    }
}
