//! Visualization interface for trend analysis
//!
//! The analyzer calls these hooks as it works through the nested models so a
//! renderer can build a picture without the fitting code depending on any
//! plotting library. The default [`NullTrendVisualizer`] compiles to no-ops.

use crate::bands::ConfidenceBand;
use crate::types::{DegreeStatistics, TrendAnalysis};
use trend_core::Result;

/// Trait for visualizing the stages of a trend analysis
pub trait TrendVisualizer {
    /// Record the validated input samples before any fit
    fn record_samples(&mut self, x: &[f64], y: &[f64]) -> Result<()>;

    /// Record the constant (mean) model
    fn record_baseline(&mut self, mean: f64) -> Result<()>;

    /// Record one fitted model, in ascending degree
    fn record_model(&mut self, stats: &DegreeStatistics) -> Result<()>;

    /// Record the confidence band applied to every curve
    fn record_band(&mut self, band: &ConfidenceBand) -> Result<()>;

    /// Called once with the complete analysis; renderers emit output here
    fn finish(&mut self, analysis: &TrendAnalysis) -> Result<()>;

    /// Check if this visualizer is active
    fn is_enabled(&self) -> bool {
        true
    }
}

/// Null visualizer that performs no operations
#[derive(Default, Clone, Copy, Debug)]
pub struct NullTrendVisualizer;

impl TrendVisualizer for NullTrendVisualizer {
    #[inline(always)]
    fn record_samples(&mut self, _: &[f64], _: &[f64]) -> Result<()> {
        Ok(())
    }

    #[inline(always)]
    fn record_baseline(&mut self, _: f64) -> Result<()> {
        Ok(())
    }

    #[inline(always)]
    fn record_model(&mut self, _: &DegreeStatistics) -> Result<()> {
        Ok(())
    }

    #[inline(always)]
    fn record_band(&mut self, _: &ConfidenceBand) -> Result<()> {
        Ok(())
    }

    #[inline(always)]
    fn finish(&mut self, _: &TrendAnalysis) -> Result<()> {
        Ok(())
    }

    #[inline(always)]
    fn is_enabled(&self) -> bool {
        false
    }
}

impl<V: TrendVisualizer + ?Sized> TrendVisualizer for &mut V {
    fn record_samples(&mut self, x: &[f64], y: &[f64]) -> Result<()> {
        (**self).record_samples(x, y)
    }

    fn record_baseline(&mut self, mean: f64) -> Result<()> {
        (**self).record_baseline(mean)
    }

    fn record_model(&mut self, stats: &DegreeStatistics) -> Result<()> {
        (**self).record_model(stats)
    }

    fn record_band(&mut self, band: &ConfidenceBand) -> Result<()> {
        (**self).record_band(band)
    }

    fn finish(&mut self, analysis: &TrendAnalysis) -> Result<()> {
        (**self).finish(analysis)
    }

    fn is_enabled(&self) -> bool {
        (**self).is_enabled()
    }
}
