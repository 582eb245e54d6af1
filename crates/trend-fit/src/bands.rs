//! Constant-width confidence band drawn around fitted curves
//!
//! The half width is the critical value of Student's t at `1 − α` with
//! `n − 1` degrees of freedom times the standard error of the mean of `y`
//! (population standard deviation over `√n`). The same envelope is applied to
//! every model curve.

use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, StudentsT};
use trend_core::math::population_std;
use trend_core::{Error, Result};

/// Check that a confidence level, in percent, lies strictly inside (0, 100)
pub fn validate_confidence_percent(confidence_percent: f64) -> Result<()> {
    if !(confidence_percent > 0.0 && confidence_percent < 100.0) {
        return Err(Error::InvalidParameter(format!(
            "Confidence level {confidence_percent} must be in (0, 100) percent"
        )));
    }
    Ok(())
}

/// Symmetric band `curve(x) ± half_width`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceBand {
    /// Confidence level in percent (e.g. 95.0)
    pub confidence_percent: f64,
    /// Critical t value used for the band
    pub critical_value: f64,
    /// Distance from the curve to either edge of the band
    pub half_width: f64,
}

impl ConfidenceBand {
    /// Band for samples `y` at the given confidence level (percent)
    pub fn for_samples(y: &[f64], confidence_percent: f64) -> Result<Self> {
        validate_confidence_percent(confidence_percent)?;
        let n = y.len();
        if n < 2 {
            return Err(Error::InsufficientData {
                expected: 2,
                actual: n,
            });
        }

        let alpha = 1.0 - confidence_percent / 100.0;
        let t_dist = StudentsT::new(0.0, 1.0, (n - 1) as f64).map_err(|e| {
            Error::Computation(format!("Failed to create t-distribution: {}", e))
        })?;
        let critical_value = t_dist.inverse_cdf(1.0 - alpha);
        let half_width = critical_value * population_std(y) / (n as f64).sqrt();

        Ok(Self {
            confidence_percent,
            critical_value,
            half_width,
        })
    }

    /// Lower edge for a curve value
    pub fn lower(&self, value: f64) -> f64 {
        value - self.half_width
    }

    /// Upper edge for a curve value
    pub fn upper(&self, value: f64) -> f64 {
        value + self.half_width
    }
}
