use anyhow::Context;
use potentyx_config::PipelineConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset: Potentyx crates at info, everything else at warn.
const DEFAULT_LOG_FILTER: &str = "potentyx=info,warn";

fn main() -> anyhow::Result<()> {
    // Initialise structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    info!("🔬 Potentyx starting up...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let config = PipelineConfig::load().context("Could not load potentyx.toml")?;

    let summary = potentyx_pipeline::run(&config).context("Pipeline aborted")?;
    info!(
        chembl = summary.chembl_rows,
        pubchem = summary.pubchem_rows,
        combined = summary.combined_rows,
        top = summary.top_rows,
        "Run complete"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_filter_parses() {
        let filter = EnvFilter::try_new(DEFAULT_LOG_FILTER).unwrap();
        let rendered = filter.to_string();
        assert!(rendered.contains("potentyx=info"));
        assert!(rendered.contains("warn"));
    }
}
