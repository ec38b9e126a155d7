//! Stage orchestration.
//!
//! Stages run once each, in order, and the first fatal error stops the run.
//! Every table is written before the next stage starts, so a failed run
//! leaves the outputs of the stages that completed.

use std::path::Path;

use potentyx_common::{Measurement, PotentyxError, Result};
use potentyx_config::PipelineConfig;
use potentyx_ingestion::output::write_table;
use potentyx_ingestion::{ChemblExport, MeasurementSource, PubchemExport};
use potentyx_ranker::{merge_sources, rank_candidates};
use potentyx_report::{
    format_candidates, format_preview, log_table, render_distribution, render_source_comparison,
    render_top_compounds, PlotSize,
};
use tracing::{info, instrument};

/// Row counts of one completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub chembl_rows: usize,
    pub pubchem_rows: usize,
    pub combined_rows: usize,
    pub top_rows: usize,
}

/// Run the whole pipeline with `config`.
#[instrument(skip_all)]
pub fn run(config: &PipelineConfig) -> Result<RunSummary> {
    create_output_dirs(config)?;

    let chembl = clean_stage(
        &ChemblExport::new(),
        &config.chembl_input(),
        &config.chembl_clean_path(),
        config.ranking.preview_rows,
    )?;
    let pubchem = clean_stage(
        &PubchemExport::new(),
        &config.pubchem_input(),
        &config.pubchem_clean_path(),
        config.ranking.preview_rows,
    )?;

    let combined = merge_sources(&chembl, &pubchem);
    write_table(&config.combined_path(), &combined)?;
    info!("✅ Combined ChEMBL + PubChem dataset saved.");

    let top = rank_candidates(&combined, config.ranking.top_n);
    write_table(&config.top_candidates_path(), &top)?;
    log_table(
        &format!("✅ Top candidates saved to {}", config.top_candidates_path().display()),
        &format_candidates(&top),
    );

    if config.plots.render_plots {
        let size = PlotSize { width: config.plots.width, height: config.plots.height };
        render_distribution(&config.distribution_plot_path(), &combined, config.plots.histogram_bins, size)?;
        render_top_compounds(&config.top_compounds_plot_path(), &top, size)?;
        render_source_comparison(&config.source_comparison_plot_path(), &combined, size)?;
    } else {
        info!("Plot stage disabled");
    }

    Ok(RunSummary {
        chembl_rows: chembl.len(),
        pubchem_rows: pubchem.len(),
        combined_rows: combined.len(),
        top_rows: top.len(),
    })
}

/// Load one export, persist its cleaned table and log a preview.
fn clean_stage(
    source: &dyn MeasurementSource,
    input: &Path,
    output: &Path,
    preview_rows: usize,
) -> Result<Vec<Measurement>> {
    info!(source = %source.source(), input = %input.display(), "Cleaning export");
    let measurements = source.load(input)?;
    write_table(output, &measurements)?;
    log_table(
        &format!("✅ {} cleaned. Top {preview_rows} compounds:", source.source()),
        &format_preview(&measurements, preview_rows),
    );
    Ok(measurements)
}

/// Create the result and plot directories; existing directories are fine.
fn create_output_dirs(config: &PipelineConfig) -> Result<()> {
    let mut dirs = vec![&config.results.results_dir];
    if config.plots.render_plots {
        dirs.push(&config.plots.plots_dir);
    }
    for dir in dirs {
        std::fs::create_dir_all(dir).map_err(|e| PotentyxError::io(dir.as_path(), e))?;
    }
    Ok(())
}
