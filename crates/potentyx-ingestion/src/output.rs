//! Result table writing.
//!
//! Tables are comma-separated with a header row, even when empty. Floats are
//! written in shortest round-trip form, so identical inputs give identical
//! files.

use std::fs::File;
use std::path::Path;

use potentyx_common::{Measurement, PotentyxError, RankedCandidate, Result};
use serde::Serialize;
use tracing::info;

/// A row type with a fixed CSV header.
pub trait TableRow: Serialize {
    const HEADERS: &'static [&'static str];
}

impl TableRow for Measurement {
    const HEADERS: &'static [&'static str] = &["compound_id", "IC50_nM", "IC50_uM", "pIC50", "source"];
}

impl TableRow for RankedCandidate {
    const HEADERS: &'static [&'static str] =
        &["compound_id", "IC50_nM", "IC50_uM", "pIC50", "source", "Interpretation"];
}

/// Write `rows` to `path`, replacing any existing file.
pub fn write_table<T: TableRow>(path: &Path, rows: &[T]) -> Result<()> {
    let file = File::create(path).map_err(|e| PotentyxError::io(path, e))?;
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(file);

    writer.write_record(T::HEADERS)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush().map_err(|e| PotentyxError::io(path, e))?;

    info!(path = %path.display(), rows = rows.len(), "Wrote table");
    Ok(())
}
