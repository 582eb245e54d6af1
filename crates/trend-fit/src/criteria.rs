//! Goodness-of-fit and information criteria
//!
//! Log-likelihoods assume i.i.d. Gaussian residuals with the maximum
//! likelihood variance estimate `SSE / n`. For AIC and BIC the analyzer counts
//! `k` as the polynomial degree, leaving the intercept out.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Gaussian log-likelihood with AIC and BIC for a least-squares fit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InformationCriteria {
    pub log_likelihood: f64,
    /// Akaike information criterion, `2k − 2ℓ`
    pub aic: f64,
    /// Bayesian information criterion, `k·ln(n) − 2ℓ`
    pub bic: f64,
}

impl InformationCriteria {
    /// Criteria for a fit with residual sum of squares `sse` over `n` samples
    /// and `k` counted parameters
    ///
    /// An exact fit (`sse == 0`) has unbounded likelihood: `ℓ = +∞` and both
    /// criteria are `−∞`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use trend_fit::InformationCriteria;
    ///
    /// let ic = InformationCriteria::from_sse(12.0, 10, 2);
    /// assert!(ic.bic > ic.aic); // ln(10) > 2
    /// ```
    pub fn from_sse(sse: f64, n: usize, k: usize) -> Self {
        let n_f = n as f64;
        let k_f = k as f64;
        let log_likelihood = if sse > 0.0 {
            -0.5 * n_f * ((2.0 * PI).ln() + (sse / n_f).ln() + 1.0)
        } else {
            f64::INFINITY
        };
        Self {
            log_likelihood,
            aic: 2.0 * k_f - 2.0 * log_likelihood,
            bic: k_f * n_f.ln() - 2.0 * log_likelihood,
        }
    }
}

/// `1 − SSE / SSE_total`
pub fn r_squared(sse: f64, sse_total: f64) -> f64 {
    1.0 - sse / sse_total
}

/// `1 − (1 − R²)(n − 1)/(n − k)` with `k` coefficients including the intercept
///
/// Returns NaN when `n ≤ k`.
pub fn adjusted_r_squared(r2: f64, n: usize, k: usize) -> f64 {
    if n <= k {
        return f64::NAN;
    }
    1.0 - (1.0 - r2) * (n - 1) as f64 / (n - k) as f64
}
