//! Nested model comparison with the partial F-test
//!
//! For a reduced model with `p₀` coefficients and a full model with `p₁ > p₀`
//! coefficients fitted to the same `n` samples:
//!
//! ```text
//! F = ((SSE_reduced − SSE_full) / (p₁ − p₀)) / (SSE_full / (n − p₁))
//! ```
//!
//! which follows an F(p₁ − p₀, n − p₁) distribution when the extra terms
//! contribute nothing.

use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, FisherSnedecor};
use trend_core::{Error, Result};

/// Outcome of a partial F-test between two nested fits
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FTest {
    /// F-statistic (≥ 0, possibly +∞ for an exact full fit)
    pub statistic: f64,
    /// Numerator degrees of freedom (extra coefficients)
    pub df_numerator: usize,
    /// Denominator degrees of freedom (residual d.o.f. of the full model)
    pub df_denominator: usize,
    /// Upper-tail probability `1 − F_cdf(statistic)`
    pub p_value: f64,
}

impl FTest {
    /// Whether the richer model is a significant improvement at level `alpha`
    pub fn is_significant(&self, alpha: f64) -> bool {
        self.p_value < alpha
    }
}

/// Partial F-test for nested least-squares models
#[derive(Debug, Clone, Copy, Default)]
pub struct NestedComparison;

impl NestedComparison {
    pub fn new() -> Self {
        Self
    }

    /// Compare a reduced fit against a full fit
    ///
    /// `params_reduced` and `params_full` count the coefficients of each model;
    /// `n` is the number of samples both were fitted to.
    pub fn compare(
        &self,
        sse_reduced: f64,
        sse_full: f64,
        params_reduced: usize,
        params_full: usize,
        n: usize,
    ) -> Result<FTest> {
        if params_full <= params_reduced {
            return Err(Error::InvalidParameter(format!(
                "Full model must have more coefficients than the reduced model ({params_full} <= {params_reduced})"
            )));
        }
        if n <= params_full {
            return Err(Error::InsufficientData {
                expected: params_full + 1,
                actual: n,
            });
        }
        if sse_reduced < 0.0 || sse_full < 0.0 {
            return Err(Error::InvalidInput(
                "Residual sums of squares must be non-negative".to_string(),
            ));
        }

        let df_numerator = params_full - params_reduced;
        let df_denominator = n - params_full;
        // Rounding can leave the richer fit a hair worse than the simpler one.
        let improvement = (sse_reduced - sse_full).max(0.0);

        let (statistic, p_value) = if sse_full == 0.0 {
            if improvement > 0.0 {
                (f64::INFINITY, 0.0)
            } else {
                (0.0, 1.0)
            }
        } else {
            let statistic =
                (improvement / df_numerator as f64) / (sse_full / df_denominator as f64);
            let dist = FisherSnedecor::new(df_numerator as f64, df_denominator as f64)
                .map_err(|e| {
                    Error::Computation(format!("Failed to create F-distribution: {}", e))
                })?;
            let p_value = if statistic.is_infinite() {
                0.0
            } else {
                dist.sf(statistic).clamp(0.0, 1.0)
            };
            (statistic, p_value)
        };

        Ok(FTest {
            statistic,
            df_numerator,
            df_denominator,
            p_value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_statistic_formula() {
        // 10 samples, quadratic vs linear
        let test = NestedComparison::new()
            .compare(50.0, 20.0, 2, 3, 10)
            .unwrap();
        assert_eq!(test.df_numerator, 1);
        assert_eq!(test.df_denominator, 7);
        assert_relative_eq!(test.statistic, 30.0 / (20.0 / 7.0), epsilon = 1e-12);
        assert!(test.p_value > 0.0 && test.p_value < 0.05);
        assert!(test.is_significant(0.05));
    }

    #[test]
    fn test_no_improvement_gives_unit_p() {
        let test = NestedComparison::new().compare(5.0, 5.0, 1, 2, 8).unwrap();
        assert_eq!(test.statistic, 0.0);
        assert_relative_eq!(test.p_value, 1.0, epsilon = 1e-12);
        assert!(!test.is_significant(0.05));
    }

    #[test]
    fn test_worse_full_model_clamped() {
        let test = NestedComparison::new()
            .compare(5.0, 5.0 + 1e-12, 1, 2, 8)
            .unwrap();
        assert_eq!(test.statistic, 0.0);
    }

    #[test]
    fn test_tiny_p_value_keeps_precision() {
        // F(2, 2) has survival function 1 / (1 + F)
        let test = NestedComparison::new().compare(1e20, 1.0, 1, 3, 5).unwrap();
        assert_eq!(test.df_numerator, 2);
        assert_eq!(test.df_denominator, 2);
        assert!(test.p_value > 0.0);
        assert_relative_eq!(test.p_value, 1.0 / (1.0 + test.statistic), max_relative = 1e-6);
    }

    #[test]
    fn test_exact_full_fit() {
        let test = NestedComparison::new().compare(3.0, 0.0, 2, 3, 6).unwrap();
        assert!(test.statistic.is_infinite());
        assert_eq!(test.p_value, 0.0);

        let both_exact = NestedComparison::new().compare(0.0, 0.0, 2, 3, 6).unwrap();
        assert_eq!(both_exact.statistic, 0.0);
        assert_eq!(both_exact.p_value, 1.0);
    }

    #[test]
    fn test_invalid_configurations() {
        let cmp = NestedComparison::new();
        assert!(cmp.compare(1.0, 0.5, 3, 3, 10).is_err());
        assert!(cmp.compare(1.0, 0.5, 2, 3, 3).is_err());
        assert!(cmp.compare(-1.0, 0.5, 2, 3, 10).is_err());
    }
}
