//! Bioactivity export sources.

pub mod chembl;
pub mod pubchem;

use std::path::Path;

use potentyx_common::{Measurement, Result, Source};
use tracing::info;

use crate::normalise::parse_ic50;
use crate::table::RawTable;

/// Common interface for all export sources.
pub trait MeasurementSource {
    /// Database the measurements are tagged with.
    fn source(&self) -> Source;

    /// Read an export file and return its normalised measurements in file order.
    fn load(&self, path: &Path) -> Result<Vec<Measurement>>;
}

/// Row accounting for one cleaning pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleaningStats {
    pub rows: usize,
    pub dropped_units: usize,
    pub dropped_values: usize,
    pub kept: usize,
}

/// Build measurements from the id/value columns of `table`.
///
/// `keep_row` is the unit filter; rows it rejects are counted separately
/// from rows whose value fails coercion.
pub(crate) fn extract_measurements<F>(
    table: &RawTable,
    id_idx: usize,
    value_idx: usize,
    source: Source,
    keep_row: F,
) -> (Vec<Measurement>, CleaningStats)
where
    F: Fn(&csv::StringRecord) -> bool,
{
    let mut stats = CleaningStats::default();
    let mut out = Vec::with_capacity(table.row_count());

    for row in table.rows() {
        stats.rows += 1;
        if !keep_row(row) {
            stats.dropped_units += 1;
            continue;
        }
        let measurement = parse_ic50(RawTable::cell(row, value_idx))
            .and_then(|nm| Measurement::from_nanomolar(RawTable::cell(row, id_idx), nm, source));
        match measurement {
            Some(m) => out.push(m),
            None => stats.dropped_values += 1,
        }
    }

    stats.kept = out.len();
    info!(
        source = %source,
        rows = stats.rows,
        dropped_units = stats.dropped_units,
        dropped_values = stats.dropped_values,
        kept = stats.kept,
        "Cleaned export"
    );
    (out, stats)
}
