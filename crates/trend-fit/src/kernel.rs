//! Polynomial least-squares kernel
//!
//! Fits `y ≈ c₀ + c₁x + … + c_d x^d` by solving the least-squares problem on
//! the Vandermonde design matrix with an SVD. Columns are scaled to unit norm
//! before the decomposition so higher powers of wide-ranged `x` do not swamp
//! the intercept column.

use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;
use trend_core::{Error, Result};

/// A polynomial with coefficients stored in ascending powers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polynomial {
    coefficients: Vec<f64>,
}

impl Polynomial {
    /// Create from ascending-power coefficients `[c₀, c₁, …]`
    pub fn new(coefficients: Vec<f64>) -> Self {
        Self { coefficients }
    }

    /// Constant polynomial `y = value`
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }

    /// Ascending-power coefficients
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Degree of the polynomial (number of coefficients minus one)
    pub fn degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }

    /// Evaluate at `x` using Horner's scheme
    pub fn evaluate(&self, x: f64) -> f64 {
        self.coefficients
            .iter()
            .rev()
            .fold(0.0, |acc, &c| acc * x + c)
    }

    /// Evaluate at each point of `xs`
    pub fn evaluate_many(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.evaluate(x)).collect()
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.coefficients.is_empty() {
            return write!(f, "0");
        }
        for (i, (power, &c)) in self.coefficients.iter().enumerate().rev().enumerate() {
            let magnitude = if i == 0 { c } else { c.abs() };
            if i > 0 {
                f.write_str(if c < 0.0 { " - " } else { " + " })?;
            }
            match power {
                0 => write!(f, "{magnitude:.4}")?,
                1 => write!(f, "{magnitude:.4}x")?,
                _ => write!(f, "{magnitude:.4}x^{power}")?,
            }
        }
        Ok(())
    }
}

/// Result of a least-squares polynomial fit
#[derive(Debug, Clone, PartialEq)]
pub struct PolynomialFit {
    /// Fitted polynomial
    pub polynomial: Polynomial,
    /// Residual sum of squares Σ(yᵢ − p(xᵢ))²
    pub sse: f64,
    /// Numerical rank of the design matrix
    pub rank: usize,
}

/// Kernel fitting polynomials of a fixed degree
#[derive(Clone, Debug)]
pub struct PolynomialKernel {
    degree: usize,
}

impl PolynomialKernel {
    pub fn new(degree: usize) -> Self {
        Self { degree }
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Build design matrix for polynomial regression
    /// X[i,j] = x[i]^j for j in 0..=degree
    pub fn build_design_matrix(&self, x: &[f64]) -> DMatrix<f64> {
        let n = x.len();
        let mut matrix = DMatrix::zeros(n, self.degree + 1);

        // Column 0: all ones (x^0)
        for i in 0..n {
            matrix[(i, 0)] = 1.0;
        }

        let mut current_power = x.to_vec();
        for col in 1..=self.degree {
            for i in 0..n {
                matrix[(i, col)] = current_power[i];
            }
            if col < self.degree {
                for i in 0..n {
                    current_power[i] *= x[i];
                }
            }
        }

        matrix
    }

    /// Least-squares fit of `y` on powers of `x`
    pub fn fit(&self, x: &[f64], y: &[f64]) -> Result<PolynomialFit> {
        if x.len() != y.len() || x.is_empty() {
            return Err(Error::InvalidInput(
                "Input vectors must have same non-zero length".to_string(),
            ));
        }

        let n = x.len();
        let cols = self.degree + 1;
        let design = self.build_design_matrix(x);

        let scale: Vec<f64> = (0..cols)
            .map(|j| {
                let norm = design.column(j).norm();
                if norm > 0.0 {
                    norm
                } else {
                    1.0
                }
            })
            .collect();
        let scaled = DMatrix::from_fn(n, cols, |i, j| design[(i, j)] / scale[j]);

        let svd = scaled.svd(true, true);
        let largest = svd
            .singular_values
            .iter()
            .fold(0.0_f64, |acc, &s| acc.max(s));
        let cutoff = n as f64 * f64::EPSILON * largest;
        let rank = svd.singular_values.iter().filter(|&&s| s > cutoff).count();
        if rank < cols {
            warn!(
                degree = self.degree,
                rank, "polynomial fit is rank deficient; using minimum-norm solution"
            );
        }

        let rhs = DVector::from_column_slice(y);
        let solution = svd.solve(&rhs, cutoff).map_err(|e| {
            Error::Computation(format!(
                "Failed to solve degree {} polynomial system: {}",
                self.degree, e
            ))
        })?;

        let coefficients: Vec<f64> = solution
            .iter()
            .zip(scale.iter())
            .map(|(&c, &s)| c / s)
            .collect();
        if coefficients.iter().any(|c| !c.is_finite()) {
            return Err(Error::Computation(format!(
                "Degree {} polynomial fit produced non-finite coefficients",
                self.degree
            )));
        }

        let polynomial = Polynomial::new(coefficients);
        let sse = sum_squared_residuals(&polynomial, x, y);

        Ok(PolynomialFit {
            polynomial,
            sse,
            rank,
        })
    }
}

/// Residuals yᵢ − p(xᵢ)
pub fn compute_residuals(polynomial: &Polynomial, x: &[f64], y: &[f64]) -> Vec<f64> {
    x.iter()
        .zip(y.iter())
        .map(|(&xi, &yi)| yi - polynomial.evaluate(xi))
        .collect()
}

/// Σ(yᵢ − p(xᵢ))²
pub fn sum_squared_residuals(polynomial: &Polynomial, x: &[f64], y: &[f64]) -> f64 {
    compute_residuals(polynomial, x, y)
        .iter()
        .map(|r| r * r)
        .sum()
}
