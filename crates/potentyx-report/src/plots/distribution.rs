//! Histogram of pIC50 over the combined table.

use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use potentyx_common::{Measurement, Result};

use super::{render_png, DrawResult, PlotSize, FONT, FONT_SIZE_AXIS, FONT_SIZE_TITLE, PLOT_MARGIN};

const TITLE: &str = "Distribution of pIC50 Values";
const BAR_COLOR: RGBColor = RGBColor(0, 128, 128);

/// Fixed-width bins over `[start, start + width * counts.len()]`.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBins {
    pub start: f64,
    pub width: f64,
    pub counts: Vec<u32>,
}

impl HistogramBins {
    pub fn end(&self) -> f64 {
        self.start + self.width * self.counts.len() as f64
    }

    /// Left and right edge of bin `i`.
    pub fn edges(&self, i: usize) -> (f64, f64) {
        let left = self.start + self.width * i as f64;
        (left, left + self.width)
    }

    pub fn max_count(&self) -> u32 {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}

/// Count `values` into `bins` equal-width bins spanning their range.
///
/// The last bin is closed so the maximum lands in it. A single distinct
/// value is centred in a range of width 1; no values give `[0, 1]`.
pub fn histogram_bins(values: &[f64], bins: usize) -> HistogramBins {
    let bins = bins.max(1);
    let (mut lo, mut hi) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));

    if values.is_empty() {
        lo = 0.0;
        hi = 1.0;
    } else if hi - lo <= 0.0 {
        lo -= 0.5;
        hi += 0.5;
    }

    let width = (hi - lo) / bins as f64;
    let mut counts = vec![0u32; bins];
    for &v in values {
        let idx = (((v - lo) / width).floor() as isize).clamp(0, bins as isize - 1) as usize;
        counts[idx] += 1;
    }

    HistogramBins { start: lo, width, counts }
}

/// Write the pIC50 histogram of `measurements` to `path`.
pub fn render_distribution(path: &Path, measurements: &[Measurement], bins: usize, size: PlotSize) -> Result<()> {
    let values: Vec<f64> = measurements.iter().map(|m| m.pic50).collect();
    let histogram = histogram_bins(&values, bins);
    render_png(path, size, |root| draw_distribution(root, &histogram))
}

fn draw_distribution<DB: DrawingBackend>(root: &DrawingArea<DB, Shift>, histogram: &HistogramBins) -> DrawResult
where
    DB::ErrorType: 'static,
{
    let mut chart = ChartBuilder::on(root)
        .caption(TITLE, (FONT, FONT_SIZE_TITLE))
        .margin(PLOT_MARGIN)
        .x_label_area_size(45)
        .y_label_area_size(55)
        .build_cartesian_2d(histogram.start..histogram.end(), 0u32..histogram.max_count() + 1)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .bold_line_style(BLACK.mix(0.2))
        .light_line_style(TRANSPARENT)
        .x_desc("pIC50")
        .y_desc("Number of Compounds")
        .axis_desc_style((FONT, FONT_SIZE_AXIS))
        .draw()?;

    let bars = (0..histogram.counts.len()).filter(|&i| histogram.counts[i] > 0);
    chart.draw_series(bars.clone().map(|i| {
        let (x0, x1) = histogram.edges(i);
        Rectangle::new([(x0, 0), (x1, histogram.counts[i])], BAR_COLOR.filled())
    }))?;
    chart.draw_series(bars.map(|i| {
        let (x0, x1) = histogram.edges(i);
        Rectangle::new([(x0, 0), (x1, histogram.counts[i])], BLACK.stroke_width(1))
    }))?;

    Ok(())
}
