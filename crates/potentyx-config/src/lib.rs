//! Pipeline configuration.
//!
//! Every field has a default, so an absent `potentyx.toml` reproduces the
//! fixed layout: inputs under `data/`, tables under `results/`, images under
//! `plots/`.

use std::path::{Path, PathBuf};

use potentyx_common::{PotentyxError, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

/// File looked up in the working directory by [`PipelineConfig::load`].
pub const DEFAULT_CONFIG_FILE: &str = "potentyx.toml";

/// Complete pipeline configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Input file locations
    #[serde(default)]
    pub inputs: InputConfig,

    /// Result table locations
    #[serde(default)]
    pub results: ResultsConfig,

    /// Ranking options
    #[serde(default)]
    pub ranking: RankingConfig,

    /// Plot output options
    #[serde(default)]
    pub plots: PlotConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            inputs: InputConfig::default(),
            results: ResultsConfig::default(),
            ranking: RankingConfig::default(),
            plots: PlotConfig::default(),
        }
    }
}

// ── Inputs ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Semicolon-delimited ChEMBL activity export
    #[serde(default = "default_chembl_file")]
    pub chembl_file: String,

    /// PubChem bioassay export, delimiter sniffed at load time
    #[serde(default = "default_pubchem_file")]
    pub pubchem_file: String,
}

fn default_data_dir() -> PathBuf { PathBuf::from("data") }
fn default_chembl_file() -> String { "chembl_raw.csv".to_string() }
fn default_pubchem_file() -> String { "pubchem_raw.csv".to_string() }

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            chembl_file: default_chembl_file(),
            pubchem_file: default_pubchem_file(),
        }
    }
}

// ── Results ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultsConfig {
    #[serde(default = "default_results_dir")]
    pub results_dir: PathBuf,

    #[serde(default = "default_chembl_clean")]
    pub chembl_clean: String,

    #[serde(default = "default_pubchem_clean")]
    pub pubchem_clean: String,

    #[serde(default = "default_combined")]
    pub combined: String,

    #[serde(default = "default_top_candidates")]
    pub top_candidates: String,
}

fn default_results_dir() -> PathBuf { PathBuf::from("results") }
fn default_chembl_clean() -> String { "chembl_clean.csv".to_string() }
fn default_pubchem_clean() -> String { "pubchem_clean.csv".to_string() }
fn default_combined() -> String { "combined_hits.csv".to_string() }
fn default_top_candidates() -> String { "top_candidates.csv".to_string() }

impl Default for ResultsConfig {
    fn default() -> Self {
        Self {
            results_dir: default_results_dir(),
            chembl_clean: default_chembl_clean(),
            pubchem_clean: default_pubchem_clean(),
            combined: default_combined(),
            top_candidates: default_top_candidates(),
        }
    }
}

// ── Ranking ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingConfig {
    /// Number of candidates kept in the top table
    #[serde(default = "default_top_n")]
    pub top_n: usize,

    /// Rows shown in the console preview after each cleaning stage
    #[serde(default = "default_preview_rows")]
    pub preview_rows: usize,
}

fn default_top_n() -> usize { 20 }
fn default_preview_rows() -> usize { 5 }

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
            preview_rows: default_preview_rows(),
        }
    }
}

// ── Plots ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotConfig {
    /// Render the PNGs; with `false` only the tables are written
    #[serde(default = "default_true")]
    pub render_plots: bool,

    #[serde(default = "default_plots_dir")]
    pub plots_dir: PathBuf,

    #[serde(default = "default_distribution_file")]
    pub distribution_file: String,

    #[serde(default = "default_top_compounds_file")]
    pub top_compounds_file: String,

    #[serde(default = "default_source_comparison_file")]
    pub source_comparison_file: String,

    #[serde(default = "default_histogram_bins")]
    pub histogram_bins: usize,

    #[serde(default = "default_width")]
    pub width: u32,

    #[serde(default = "default_height")]
    pub height: u32,
}

fn default_true() -> bool { true }
fn default_plots_dir() -> PathBuf { PathBuf::from("plots") }
fn default_distribution_file() -> String { "pIC50_distribution.png".to_string() }
fn default_top_compounds_file() -> String { "top20_compounds.png".to_string() }
fn default_source_comparison_file() -> String { "source_comparison.png".to_string() }
fn default_histogram_bins() -> usize { 30 }
fn default_width() -> u32 { 1000 }
fn default_height() -> u32 { 600 }

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            render_plots: default_true(),
            plots_dir: default_plots_dir(),
            distribution_file: default_distribution_file(),
            top_compounds_file: default_top_compounds_file(),
            source_comparison_file: default_source_comparison_file(),
            histogram_bins: default_histogram_bins(),
            width: default_width(),
            height: default_height(),
        }
    }
}

// ── Helper Methods ─────────────────────────────────────────────────────────────

impl PipelineConfig {
    /// Load `potentyx.toml` from the working directory, or defaults if it is absent.
    pub fn load() -> Result<Self> {
        let path = Path::new(DEFAULT_CONFIG_FILE);
        if !path.exists() {
            info!("No {} found, using default layout", DEFAULT_CONFIG_FILE);
            return Ok(Self::default());
        }
        Self::from_toml(path)
    }

    /// Load from a TOML file. Missing keys fall back to their defaults.
    pub fn from_toml(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| PotentyxError::io(path, e))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| PotentyxError::Config(format!("{}: {e}", path.display())))?;
        config.validate()?;
        info!(path = %path.display(), "Configuration loaded");
        Ok(config)
    }

    /// Reject settings no run could honour.
    pub fn validate(&self) -> Result<()> {
        if self.plots.histogram_bins == 0 {
            return Err(PotentyxError::Config("plots.histogram_bins must be at least 1".into()));
        }
        if self.plots.width == 0 || self.plots.height == 0 {
            return Err(PotentyxError::Config("plot dimensions must be non-zero".into()));
        }
        Ok(())
    }

    /// Rebase every directory onto `root`. Used by tests and by callers that
    /// run the pipeline outside the working directory.
    pub fn rooted_at(mut self, root: &Path) -> Self {
        self.inputs.data_dir = root.join(&self.inputs.data_dir);
        self.results.results_dir = root.join(&self.results.results_dir);
        self.plots.plots_dir = root.join(&self.plots.plots_dir);
        self
    }

    pub fn chembl_input(&self) -> PathBuf { self.inputs.data_dir.join(&self.inputs.chembl_file) }
    pub fn pubchem_input(&self) -> PathBuf { self.inputs.data_dir.join(&self.inputs.pubchem_file) }

    pub fn chembl_clean_path(&self) -> PathBuf { self.results.results_dir.join(&self.results.chembl_clean) }
    pub fn pubchem_clean_path(&self) -> PathBuf { self.results.results_dir.join(&self.results.pubchem_clean) }
    pub fn combined_path(&self) -> PathBuf { self.results.results_dir.join(&self.results.combined) }
    pub fn top_candidates_path(&self) -> PathBuf { self.results.results_dir.join(&self.results.top_candidates) }

    pub fn distribution_plot_path(&self) -> PathBuf { self.plots.plots_dir.join(&self.plots.distribution_file) }
    pub fn top_compounds_plot_path(&self) -> PathBuf { self.plots.plots_dir.join(&self.plots.top_compounds_file) }
    pub fn source_comparison_plot_path(&self) -> PathBuf { self.plots.plots_dir.join(&self.plots.source_comparison_file) }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
