//! Visualizer that writes an SVG once the analysis finishes

use crate::options::PlotOptions;
use crate::render::render_to_file;
use std::path::{Path, PathBuf};
use tracing::warn;
use trend_core::{Error, Result, Samples};
use trend_fit::{ConfidenceBand, DegreeStatistics, TrendAnalysis, TrendVisualizer};

/// Collects samples during analysis and renders the plot on `finish`
#[derive(Debug, Clone)]
pub struct SvgTrendVisualizer {
    path: PathBuf,
    options: PlotOptions,
    samples: Option<Samples>,
    written: bool,
}

impl SvgTrendVisualizer {
    pub fn new(path: impl Into<PathBuf>, options: PlotOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self {
            path: path.into(),
            options,
            samples: None,
            written: false,
        })
    }

    /// Output file
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn options(&self) -> &PlotOptions {
        &self.options
    }

    /// True once a plot has been written
    pub fn is_written(&self) -> bool {
        self.written
    }
}

impl TrendVisualizer for SvgTrendVisualizer {
    fn record_samples(&mut self, x: &[f64], y: &[f64]) -> Result<()> {
        self.samples = Some(Samples::from_pairs(x, y)?);
        self.written = false;
        Ok(())
    }

    fn record_baseline(&mut self, _: f64) -> Result<()> {
        Ok(())
    }

    fn record_model(&mut self, _: &DegreeStatistics) -> Result<()> {
        Ok(())
    }

    fn record_band(&mut self, _: &ConfidenceBand) -> Result<()> {
        Ok(())
    }

    fn finish(&mut self, analysis: &TrendAnalysis) -> Result<()> {
        let samples = self.samples.as_ref().ok_or_else(|| {
            warn!("finish called before any samples were recorded");
            Error::InvalidInput("no samples recorded for plotting".to_string())
        })?;
        render_to_file(analysis, samples, &self.options, &self.path)?;
        self.written = true;
        Ok(())
    }
}
