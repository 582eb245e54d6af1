//! Model naming for nested polynomial fits

use serde::{Deserialize, Serialize};
use std::fmt;

/// Names of the models with a conventional name, indexed by degree
pub const MODEL_NAMES: [&str; 6] = [
    "Constant",
    "Linear",
    "Quadratic",
    "Cubic",
    "Quartic",
    "Quintic",
];

/// Degree of a polynomial model (0 = constant, 1 = linear, ...)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelOrder(pub usize);

impl ModelOrder {
    /// Baseline model `y = mean(y)`
    pub const CONSTANT: Self = Self(0);
    /// Straight line
    pub const LINEAR: Self = Self(1);

    /// Create a model order from a polynomial degree
    pub fn new(degree: usize) -> Self {
        Self(degree)
    }

    /// Polynomial degree
    pub fn degree(self) -> usize {
        self.0
    }

    /// Number of free coefficients of the model
    pub fn parameter_count(self) -> usize {
        self.0 + 1
    }

    /// Number of coefficients counted by AIC and BIC
    ///
    /// The intercept is not counted, so this equals the degree.
    pub fn criteria_parameter_count(self) -> usize {
        self.0
    }

    /// Human readable model name, e.g. "Quadratic" or "7 order model"
    pub fn name(self) -> String {
        match MODEL_NAMES.get(self.0) {
            Some(name) => (*name).to_string(),
            None => format!("{} order model", self.0),
        }
    }
}

impl From<usize> for ModelOrder {
    fn from(degree: usize) -> Self {
        Self(degree)
    }
}

impl fmt::Display for ModelOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}
