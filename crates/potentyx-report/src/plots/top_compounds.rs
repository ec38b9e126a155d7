//! Horizontal bar chart of the ranked candidates.

use std::ops::Range;
use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use potentyx_common::{RankedCandidate, Result};

use super::{draw_no_data, render_png, DrawResult, PlotSize, FONT, FONT_SIZE_AXIS, FONT_SIZE_TITLE, PLOT_MARGIN};

const BAR_COLOR: RGBColor = RGBColor(255, 140, 0);

/// Axis label for a compound id: surrounding whitespace trimmed, quotes removed.
pub fn plot_label(compound_id: &str) -> String {
    compound_id.trim().replace('"', "")
}

/// Write the bar chart of `candidates` (already in rank order) to `path`.
/// The first candidate is drawn at the top.
pub fn render_top_compounds(path: &Path, candidates: &[RankedCandidate], size: PlotSize) -> Result<()> {
    let title = format!("Top {} Compounds by pIC50", candidates.len());
    render_png(path, size, |root| {
        if candidates.is_empty() {
            return draw_no_data(root, &title);
        }
        draw_top_compounds(root, &title, candidates)
    })
}

/// Vertical placement of ranked bars on a continuous y-axis.
///
/// Row `i` is centred on `y = i`, so rank 0 sits on the highest row and the
/// axis spans `[-0.5, rows - 0.5]` whatever the number of rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarLayout {
    rows: usize,
}

impl BarLayout {
    /// Share of a row's height covered by its bar.
    pub const BAR_FILL: f64 = 0.8;

    pub fn new(rows: usize) -> Self {
        Self { rows }
    }

    pub fn y_range(&self) -> Range<f64> {
        -0.5..self.rows as f64 - 0.5
    }

    /// Centre of the row holding `rank`.
    pub fn row_center(&self, rank: usize) -> f64 {
        (self.rows - 1 - rank) as f64
    }

    /// Bottom and top edge of the bar for `rank`.
    pub fn bar_span(&self, rank: usize) -> (f64, f64) {
        let center = self.row_center(rank);
        let half = Self::BAR_FILL / 2.0;
        (center - half, center + half)
    }

    /// Rank whose row is centred on `y`; `None` between rows or off the axis.
    pub fn rank_at(&self, y: f64) -> Option<usize> {
        let row = y.round();
        if (y - row).abs() > 1e-6 || row < 0.0 || row >= self.rows as f64 {
            return None;
        }
        Some(self.rows - 1 - row as usize)
    }
}

fn draw_top_compounds<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    title: &str,
    candidates: &[RankedCandidate],
) -> DrawResult
where
    DB::ErrorType: 'static,
{
    let layout = BarLayout::new(candidates.len());
    let labels: Vec<String> = candidates.iter().map(|c| plot_label(&c.compound_id)).collect();

    // Bars start at zero; pIC50 is negative above 1 mM.
    let lo = candidates.iter().map(|c| c.pic50).fold(0.0f64, f64::min);
    let hi = candidates.iter().map(|c| c.pic50).fold(0.0f64, f64::max);
    let pad = ((hi - lo) * 0.05).max(0.1);
    let x_start = if lo < 0.0 { lo - pad } else { 0.0 };

    let mut chart = ChartBuilder::on(root)
        .caption(title, (FONT, FONT_SIZE_TITLE))
        .margin(PLOT_MARGIN)
        .x_label_area_size(45)
        .y_label_area_size(140)
        .build_cartesian_2d(x_start..hi + pad, layout.y_range())?;

    let label_of = |y: &f64| {
        layout
            .rank_at(*y)
            .and_then(|rank| labels.get(rank))
            .cloned()
            .unwrap_or_default()
    };

    chart
        .configure_mesh()
        .disable_y_mesh()
        .bold_line_style(BLACK.mix(0.2))
        .light_line_style(TRANSPARENT)
        .y_labels(candidates.len() + 1)
        .y_label_formatter(&label_of)
        .x_desc("pIC50")
        .y_desc("Compound ID")
        .axis_desc_style((FONT, FONT_SIZE_AXIS))
        .draw()?;

    chart.draw_series(candidates.iter().enumerate().map(|(rank, c)| {
        let (bottom, top) = layout.bar_span(rank);
        Rectangle::new([(0.0, bottom), (c.pic50, top)], BAR_COLOR.filled())
    }))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use plotters::coord::ranged1d::Ranged;
    use plotters::coord::types::RangedCoordf64;

    #[test]
    fn test_plot_label_strips_whitespace_and_quotes() {
        assert_eq!(plot_label("  CHEMBL25 "), "CHEMBL25");
        assert_eq!(plot_label("\"2244\""), "2244");
        assert_eq!(plot_label(" \"CHEMBL\"\"7\" "), "CHEMBL7");
    }

    /// Pixel position of `y` on a 1000 px axis over the layout's range.
    fn pixel(layout: BarLayout, y: f64) -> i32 {
        RangedCoordf64::from(layout.y_range()).map(&y, (0, 1000))
    }

    fn assert_near(actual: i32, expected: i32) {
        assert!((actual - expected).abs() <= 1, "pixel {actual}, expected {expected}");
    }

    #[test]
    fn test_single_bar_fills_its_row() {
        let layout = BarLayout::new(1);
        let (bottom, top) = layout.bar_span(0);
        assert_near(pixel(layout, bottom), 100);
        assert_near(pixel(layout, top), 900);
        assert_near(pixel(layout, layout.row_center(0)), 500);
        assert_eq!(layout.rank_at(0.0), Some(0));
    }

    #[test]
    fn test_two_bars_rank_zero_on_top() {
        let layout = BarLayout::new(2);
        assert!(layout.row_center(0) > layout.row_center(1));

        let first = layout.bar_span(0);
        let second = layout.bar_span(1);
        assert!(second.1 < first.0, "bars overlap");
        assert_near(pixel(layout, second.0), 50);
        assert_near(pixel(layout, first.1), 950);
        assert_near(pixel(layout, layout.row_center(0)), 750);

        assert_eq!(layout.rank_at(layout.row_center(0)), Some(0));
        assert_eq!(layout.rank_at(layout.row_center(1)), Some(1));
    }

    #[test]
    fn test_twenty_rows_map_labels_to_ranks() {
        let layout = BarLayout::new(20);
        let range = layout.y_range();
        for rank in 0..20 {
            let (bottom, top) = layout.bar_span(rank);
            assert!(bottom > range.start && top < range.end);
            assert_eq!(layout.rank_at(layout.row_center(rank)), Some(rank));
        }
        assert_eq!(layout.row_center(0), 19.0);
        assert_eq!(layout.rank_at(19.5), None);
        assert_eq!(layout.rank_at(-1.0), None);
        assert_eq!(layout.rank_at(20.0), None);
    }
}
