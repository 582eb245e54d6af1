//! SVG rendering of a trend analysis
//!
//! The picture has the sample scatter, the constant model as a dashed
//! horizontal line, one curve per fitted degree and, optionally, the
//! confidence band around every curve.

use crate::options::PlotOptions;
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use std::ops::Range;
use std::path::Path;
use tracing::{debug, instrument};
use trend_core::math::linspace;
use trend_core::{Error, Result, Samples};
use trend_fit::TrendAnalysis;

const DASH_COUNT: usize = 40;

/// A fitted curve ready for drawing
#[derive(Debug, Clone, PartialEq)]
pub struct CurveData {
    pub label: String,
    pub points: Vec<(f64, f64)>,
    /// Lower and upper band edges at the same abscissae as `points`
    pub band: Option<(Vec<f64>, Vec<f64>)>,
}

/// Everything the renderer draws, in data coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct PlotData {
    pub scatter: Vec<(f64, f64)>,
    /// `(min x, max x, mean)` of the constant model
    pub baseline: (f64, f64, f64),
    pub curves: Vec<CurveData>,
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
}

impl PlotData {
    /// Evaluate every fitted model over the sample range
    pub fn new(analysis: &TrendAnalysis, samples: &Samples, options: &PlotOptions) -> Result<Self> {
        options.validate()?;
        if samples.is_empty() {
            return Err(Error::empty_input("plot"));
        }

        let (x_min, x_max) = samples.x_range();
        let grid = linspace(x_min, x_max, options.curve_samples);
        let band = analysis.band.filter(|_| options.plot_ci);

        let curves: Vec<CurveData> = analysis
            .iter()
            .map(|stats| {
                let values = stats.polynomial.evaluate_many(&grid);
                let band = band.map(|b| {
                    (
                        values.iter().map(|&v| b.lower(v)).collect(),
                        values.iter().map(|&v| b.upper(v)).collect(),
                    )
                });
                CurveData {
                    label: stats.model_name(),
                    points: grid.iter().copied().zip(values).collect(),
                    band,
                }
            })
            .collect();

        let mut y_lo = analysis.baseline.mean;
        let mut y_hi = analysis.baseline.mean;
        let curve_values = curves.iter().flat_map(|c| {
            let edges = c.band.iter().flat_map(|(lo, hi)| lo.iter().chain(hi.iter()));
            c.points.iter().map(|p| &p.1).chain(edges)
        });
        for &v in samples.y().iter().chain(curve_values) {
            y_lo = y_lo.min(v);
            y_hi = y_hi.max(v);
        }

        Ok(Self {
            scatter: samples.x().iter().copied().zip(samples.y().iter().copied()).collect(),
            baseline: (x_min, x_max, analysis.baseline.mean),
            curves,
            x_range: padded(x_min, x_max),
            y_range: padded(y_lo, y_hi),
        })
    }
}

fn padded(lo: f64, hi: f64) -> Range<f64> {
    let span = hi - lo;
    let pad = if span > 0.0 { span * 0.05 } else { lo.abs().max(1.0) * 0.05 };
    (lo - pad)..(hi + pad)
}

fn render_error<E: std::error::Error + Send + Sync>(err: DrawingAreaErrorKind<E>) -> Error {
    Error::Render(err.to_string())
}

/// Render the analysis to an SVG document held in memory
#[instrument(skip_all, fields(models = analysis.len(), n = samples.len()))]
pub fn render_svg(
    analysis: &TrendAnalysis,
    samples: &Samples,
    options: &PlotOptions,
) -> Result<String> {
    let data = PlotData::new(analysis, samples, options)?;
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (options.width, options.height))
            .into_drawing_area();
        draw(&root, &data, options)?;
        root.present().map_err(render_error)?;
    }
    debug!(bytes = svg.len(), "rendered trend plot");
    Ok(svg)
}

/// Render the analysis to an SVG file
#[instrument(skip(analysis, samples, options), fields(models = analysis.len()))]
pub fn render_to_file(
    analysis: &TrendAnalysis,
    samples: &Samples,
    options: &PlotOptions,
    path: &Path,
) -> Result<()> {
    let data = PlotData::new(analysis, samples, options)?;
    let root = SVGBackend::new(path, (options.width, options.height)).into_drawing_area();
    draw(&root, &data, options)?;
    root.present().map_err(render_error)?;
    debug!(path = %path.display(), "wrote trend plot");
    Ok(())
}

fn draw<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    data: &PlotData,
    options: &PlotOptions,
) -> Result<()> {
    root.fill(&WHITE).map_err(render_error)?;

    let mut chart = ChartBuilder::on(root)
        .caption(
            &options.title,
            ("sans-serif", 28).into_font().style(FontStyle::Bold),
        )
        .margin(20)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(data.x_range.clone(), data.y_range.clone())
        .map_err(render_error)?;

    chart
        .configure_mesh()
        .x_desc(options.x_label.as_str())
        .y_desc(options.y_label.as_str())
        .draw()
        .map_err(render_error)?;

    chart
        .draw_series(
            data.scatter
                .iter()
                .map(|&p| Circle::new(p, 4, BLACK.filled())),
        )
        .map_err(render_error)?
        .label("Data")
        .legend(|(x, y)| Circle::new((x + 10, y), 4, BLACK.filled()));

    let (x_min, x_max, mean) = data.baseline;
    let baseline_style = BLACK.mix(0.7).stroke_width(2);
    let dashes = linspace(x_min, x_max, DASH_COUNT * 2);
    chart
        .draw_series(
            dashes
                .chunks_exact(2)
                .map(move |d| PathElement::new(vec![(d[0], mean), (d[1], mean)], baseline_style)),
        )
        .map_err(render_error)?
        .label("Constant")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 8, y)], baseline_style));

    for (idx, curve) in data.curves.iter().enumerate() {
        let color = Palette99::pick(idx).to_rgba();

        if let Some((lower, upper)) = &curve.band {
            let outline: Vec<(f64, f64)> = curve
                .points
                .iter()
                .zip(upper)
                .map(|(p, &u)| (p.0, u))
                .chain(curve.points.iter().zip(lower).rev().map(|(p, &l)| (p.0, l)))
                .collect();
            chart
                .draw_series(std::iter::once(Polygon::new(outline, color.mix(0.4).filled())))
                .map_err(render_error)?;
        }

        chart
            .draw_series(LineSeries::new(
                curve.points.iter().copied(),
                color.stroke_width(2),
            ))
            .map_err(render_error)?
            .label(curve.label.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(render_error)?;

    Ok(())
}
