//! Plot configuration

use serde::{Deserialize, Serialize};
use trend_core::{Error, Result};

/// Appearance of a rendered trend plot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotOptions {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Draw the confidence band around each curve when the analysis has one
    pub plot_ci: bool,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Points each fitted curve is evaluated on
    pub curve_samples: usize,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            title: "Trend Analysis".to_string(),
            x_label: "x".to_string(),
            y_label: "y".to_string(),
            plot_ci: true,
            width: 1024,
            height: 768,
            curve_samples: 200,
        }
    }
}

impl PlotOptions {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_labels(mut self, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        self.x_label = x_label.into();
        self.y_label = y_label.into();
        self
    }

    pub fn with_ci(mut self, plot_ci: bool) -> Self {
        self.plot_ci = plot_ci;
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidParameter(format!(
                "Plot size {}x{} must be positive",
                self.width, self.height
            )));
        }
        if self.curve_samples < 2 {
            return Err(Error::InvalidParameter(format!(
                "curve_samples must be at least 2, got {}",
                self.curve_samples
            )));
        }
        Ok(())
    }
}
