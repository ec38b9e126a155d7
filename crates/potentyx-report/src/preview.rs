//! Fixed-width text tables for console diagnostics.

use potentyx_common::{Measurement, RankedCandidate};
use potentyx_ranker::sort_by_potency;
use tracing::info;

const ID_HEADER: &str = "compound_id";

/// The `rows` most potent measurements as a text table.
pub fn format_preview(measurements: &[Measurement], rows: usize) -> String {
    let mut top = sort_by_potency(measurements);
    top.truncate(rows);

    let id_width = id_column_width(top.iter().map(|m| m.compound_id.as_str()));
    let mut out = format!(
        "{:<id_width$}  {:>12}  {:>12}  {:>8}  {}\n",
        ID_HEADER, "IC50_nM", "IC50_uM", "pIC50", "source"
    );
    for m in &top {
        out.push_str(&format!(
            "{:<id_width$}  {:>12.4}  {:>12.6}  {:>8.3}  {}\n",
            m.compound_id, m.ic50_nm, m.ic50_um, m.pic50, m.source
        ));
    }
    out
}

/// The ranked candidate table, in rank order.
pub fn format_candidates(candidates: &[RankedCandidate]) -> String {
    let id_width = id_column_width(candidates.iter().map(|c| c.compound_id.as_str()));
    let mut out = format!(
        "{:<id_width$}  {:<7}  {:>12}  {:>8}  {}\n",
        ID_HEADER, "source", "IC50_nM", "pIC50", "Interpretation"
    );
    for c in candidates {
        out.push_str(&format!(
            "{:<id_width$}  {:<7}  {:>12.4}  {:>8.3}  {}\n",
            c.compound_id, c.source, c.ic50_nm, c.pic50, c.interpretation
        ));
    }
    out
}

/// Emit a rendered table line by line at info level.
pub fn log_table(title: &str, table: &str) {
    info!("{title}");
    for line in table.lines() {
        info!("  {line}");
    }
}

fn id_column_width<'a>(ids: impl Iterator<Item = &'a str>) -> usize {
    ids.map(|id| id.chars().count()).max().unwrap_or(0).max(ID_HEADER.len())
}
