//! Paired sample validation
//!
//! Trend analysis accepts any numeric element type for `x` and `y`. The
//! checks here run once, up front, and produce owned `f64` vectors that the
//! fitting code can trust.

use crate::math::min_max;
use crate::{Error, Result};
use num_traits::ToPrimitive;

/// Validated paired samples
#[derive(Debug, Clone, PartialEq)]
pub struct Samples {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl Samples {
    /// Validate and convert paired samples to `f64`
    ///
    /// Fails when the slices differ in length, are empty, or contain a value
    /// that is not representable as a finite `f64`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use trend_core::Samples;
    ///
    /// let samples = Samples::from_pairs(&[0, 1, 2], &[1.5, 2.5, 4.0]).unwrap();
    /// assert_eq!(samples.len(), 3);
    /// assert_eq!(samples.x(), &[0.0, 1.0, 2.0]);
    /// ```
    pub fn from_pairs<X, Y>(x: &[X], y: &[Y]) -> Result<Self>
    where
        X: ToPrimitive,
        Y: ToPrimitive,
    {
        if x.len() != y.len() {
            return Err(Error::size_mismatch(x.len(), y.len(), "y samples"));
        }
        if x.is_empty() {
            return Err(Error::empty_input("trend analysis"));
        }

        Ok(Self {
            x: to_finite(x, "x samples")?,
            y: to_finite(y, "y samples")?,
        })
    }

    /// The independent variable
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// The dependent variable
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Number of pairs
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Always false for a constructed value; kept for API symmetry with slices
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// `(min x, max x)`
    pub fn x_range(&self) -> (f64, f64) {
        min_max(&self.x).unwrap_or((0.0, 0.0))
    }

    /// `(min y, max y)`
    pub fn y_range(&self) -> (f64, f64) {
        min_max(&self.y).unwrap_or((0.0, 0.0))
    }
}

fn to_finite<T: ToPrimitive>(values: &[T], context: &str) -> Result<Vec<f64>> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| match v.to_f64() {
            Some(f) if f.is_finite() => Ok(f),
            Some(_) => Err(Error::non_finite(context)),
            None => Err(Error::InvalidInput(format!(
                "{context}: element {i} is not representable as f64"
            ))),
        })
        .collect()
}

/// Check the highest polynomial degree requested
pub fn validate_max_degree(max_degree: usize) -> Result<()> {
    if max_degree < 1 {
        return Err(Error::InvalidParameter(
            "max_degree must be 1 (Linear model) or higher".to_string(),
        ));
    }
    Ok(())
}

/// The richest model needs at least one residual degree of freedom
pub fn minimum_sample_size(max_degree: usize) -> usize {
    max_degree + 2
}

/// Check that `n` samples support fitting up to `max_degree`
pub fn validate_sample_size(n: usize, max_degree: usize) -> Result<()> {
    let expected = minimum_sample_size(max_degree);
    if n < expected {
        return Err(Error::InsufficientData {
            expected,
            actual: n,
        });
    }
    Ok(())
}
