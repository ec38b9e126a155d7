//! Box plot of pIC50 per source database.

use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use potentyx_common::{Measurement, Result, Source};

use super::{draw_no_data, render_png, DrawResult, PlotSize, FONT, FONT_SIZE_AXIS, FONT_SIZE_TITLE, PLOT_MARGIN};

const TITLE: &str = "pIC50 Distribution by Source";
const BOX_COLOR: RGBColor = RGBColor(70, 110, 180);

/// pIC50 values per source, sources in order of first appearance.
pub fn group_by_source(measurements: &[Measurement]) -> Vec<(Source, Vec<f64>)> {
    let mut groups: Vec<(Source, Vec<f64>)> = Vec::new();
    for m in measurements {
        match groups.iter_mut().find(|(s, _)| *s == m.source) {
            Some((_, values)) => values.push(m.pic50),
            None => groups.push((m.source, vec![m.pic50])),
        }
    }
    groups
}

/// Write one box per source present in `measurements` to `path`.
pub fn render_source_comparison(path: &Path, measurements: &[Measurement], size: PlotSize) -> Result<()> {
    let groups = group_by_source(measurements);
    render_png(path, size, |root| {
        if groups.is_empty() {
            return draw_no_data(root, TITLE);
        }
        draw_source_comparison(root, &groups)
    })
}

fn draw_source_comparison<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    groups: &[(Source, Vec<f64>)],
) -> DrawResult
where
    DB::ErrorType: 'static,
{
    let labels: Vec<String> = groups.iter().map(|(s, _)| s.to_string()).collect();
    let all = groups.iter().flat_map(|(_, v)| v.iter().copied());
    let (lo, hi) = all.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));

    let mut chart = ChartBuilder::on(root)
        .caption(TITLE, (FONT, FONT_SIZE_TITLE))
        .margin(PLOT_MARGIN)
        .x_label_area_size(45)
        .y_label_area_size(55)
        .build_cartesian_2d(labels[..].into_segmented(), (lo - 0.5) as f32..(hi + 0.5) as f32)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .bold_line_style(BLACK.mix(0.2))
        .light_line_style(TRANSPARENT)
        .x_label_formatter(&|v: &SegmentValue<&String>| match v {
            SegmentValue::CenterOf(s) | SegmentValue::Exact(s) => s.to_string(),
            SegmentValue::Last => String::new(),
        })
        .y_desc("pIC50")
        .axis_desc_style((FONT, FONT_SIZE_AXIS))
        .draw()?;

    chart.draw_series(groups.iter().zip(labels.iter()).map(|((_, values), label)| {
        Boxplot::new_vertical(SegmentValue::CenterOf(label), &Quartiles::new(values.as_slice()))
            .width(60)
            .whisker_width(0.5)
            .style(BOX_COLOR)
    }))?;

    Ok(())
}
