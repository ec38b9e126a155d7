//! potentyx-report: Console previews and summary plots.
//!
//! Everything here is a read-only view over the combined and ranked tables;
//! no numbers computed for presentation flow back into the pipeline.

pub mod plots;
pub mod preview;

pub use plots::{
    render_distribution, render_source_comparison, render_top_compounds, PlotSize,
};
pub use preview::{format_candidates, format_preview, log_table};
