//! PNG renderers for the combined and ranked tables.
//!
//! Each renderer draws into a generic `DrawingArea` so the chart code does
//! not depend on the output format; the public entry points bind it to a
//! bitmap file.

mod distribution;
mod source_comparison;
mod top_compounds;

use std::error::Error;
use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use potentyx_common::{PotentyxError, Result};
use tracing::info;

pub use distribution::{histogram_bins, render_distribution, HistogramBins};
pub use source_comparison::{group_by_source, render_source_comparison};
pub use top_compounds::{plot_label, render_top_compounds, BarLayout};

const FONT: &str = "sans-serif";
const FONT_SIZE_TITLE: u32 = 24;
const FONT_SIZE_AXIS: u32 = 16;
const PLOT_MARGIN: i32 = 20;

/// Output image size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlotSize {
    pub width: u32,
    pub height: u32,
}

impl Default for PlotSize {
    fn default() -> Self {
        Self { width: 1000, height: 600 }
    }
}

type DrawResult = std::result::Result<(), Box<dyn Error>>;

/// Draw one chart into a PNG at `path`.
fn render_png<F>(path: &Path, size: PlotSize, draw: F) -> Result<()>
where
    F: FnOnce(&DrawingArea<BitMapBackend, Shift>) -> DrawResult,
{
    let root = BitMapBackend::new(path, (size.width, size.height)).into_drawing_area();
    let drawn = (|| -> DrawResult {
        root.fill(&WHITE)?;
        draw(&root)?;
        root.present()?;
        Ok(())
    })();

    drawn.map_err(|e| PotentyxError::Plot(format!("{}: {e}", path.display())))?;
    info!(path = %path.display(), "Plot saved");
    Ok(())
}

/// Caption-only chart for tables with nothing to draw.
fn draw_no_data<DB: DrawingBackend>(root: &DrawingArea<DB, Shift>, title: &str) -> DrawResult
where
    DB::ErrorType: 'static,
{
    root.titled(&format!("{title} (no data)"), (FONT, FONT_SIZE_TITLE))?;
    Ok(())
}
