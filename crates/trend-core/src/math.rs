//! Utility functions for working with sample slices

/// Calculate the mean of a slice
///
/// Returns 0.0 for empty slices.
///
/// # Examples
///
/// ```rust
/// use trend_core::math::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0]), 2.5);
/// ```
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    data.iter().sum::<f64>() / data.len() as f64
}

/// Sum of squared deviations of `data` about `center`
pub fn sum_of_squares_about(data: &[f64], center: f64) -> f64 {
    data.iter()
        .map(|&v| {
            let diff = v - center;
            diff * diff
        })
        .sum()
}

/// Calculate the population standard deviation (divides by `n`)
///
/// Returns 0.0 for empty slices.
///
/// # Examples
///
/// ```rust
/// use trend_core::math::population_std;
///
/// let sd = population_std(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
/// assert!((sd - 2.0).abs() < 1e-12);
/// ```
pub fn population_std(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    (sum_of_squares_about(data, mean(data)) / data.len() as f64).sqrt()
}

/// `count` evenly spaced values over `[start, end]`, endpoints included
///
/// # Examples
///
/// ```rust
/// use trend_core::math::linspace;
///
/// assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            let mut values: Vec<f64> = (0..count).map(|i| start + step * i as f64).collect();
            // Pin the last point so rounding never overshoots the range.
            values[count - 1] = end;
            values
        }
    }
}

/// Minimum and maximum of a slice, `None` when empty
pub fn min_max(data: &[f64]) -> Option<(f64, f64)> {
    let first = *data.first()?;
    Some(
        data.iter()
            .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))),
    )
}
