//! PubChem bioassay export.
//!
//! PubChem data-table downloads vary in delimiter and column naming between
//! assays, so both are inferred:
//!   - delimiter: sniffed from the first lines of the file
//!   - compound column: first name containing "cid" or "compound"
//!   - IC50 column: first name containing "ic50" or "value"
//!
//! No unit column is consulted. Values are taken as nanomolar, which holds
//! for the usual IC50 summary tables but is not verified per assay.

use std::path::Path;

use potentyx_common::{Measurement, PotentyxError, Result, Source};
use tracing::{info, instrument, warn};

use super::{extract_measurements, CleaningStats, MeasurementSource};
use crate::normalise::detect_column;
use crate::sniff::sniff_delimiter;
use crate::table::{parse_table, RawTable};

pub const COMPOUND_NEEDLES: [&str; 2] = ["cid", "compound"];
pub const VALUE_NEEDLES: [&str; 2] = ["ic50", "value"];

/// Positions of the detected columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PubchemColumns {
    pub compound: usize,
    pub value: usize,
}

/// Detect the compound and IC50 columns, failing with the full column list
/// when either is absent.
pub fn detect_pubchem_columns<S: AsRef<str>>(columns: &[S]) -> Result<PubchemColumns> {
    let available = || columns.iter().map(|c| c.as_ref().to_string()).collect::<Vec<_>>();

    let compound = detect_column(columns, &COMPOUND_NEEDLES).ok_or_else(|| PotentyxError::ColumnDetection {
        role: "compound".to_string(),
        available: available(),
    })?;
    let value = detect_column(columns, &VALUE_NEEDLES).ok_or_else(|| PotentyxError::ColumnDetection {
        role: "IC50".to_string(),
        available: available(),
    })?;

    Ok(PubchemColumns { compound, value })
}

/// Reader for PubChem exports of undeclared format.
#[derive(Debug, Clone, Default)]
pub struct PubchemExport {
    /// Fixed delimiter; `None` sniffs it per file.
    delimiter: Option<u8>,
}

impl PubchemExport {
    pub fn new() -> Self {
        Self { delimiter: None }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    /// Parse raw file contents, sniffing the delimiter unless one was set.
    pub fn parse(&self, bytes: &[u8], origin: &Path) -> Result<RawTable> {
        let delimiter = match self.delimiter {
            Some(d) => d,
            None => {
                let sample = String::from_utf8_lossy(bytes);
                let d = sniff_delimiter(&sample);
                info!(delimiter = %(d as char).escape_default(), "Sniffed PubChem delimiter");
                d
            }
        };
        parse_table(bytes, delimiter, origin)
    }

    /// Normalise an already-read table.
    pub fn clean(&self, table: &RawTable) -> Result<(Vec<Measurement>, CleaningStats)> {
        let columns = table.normalized_headers();
        let detected = detect_pubchem_columns(&columns)?;
        info!(
            compound_column = %columns[detected.compound],
            value_column = %columns[detected.value],
            "Detected PubChem columns"
        );
        warn!("PubChem values carry no unit column; treating them as nM");

        Ok(extract_measurements(table, detected.compound, detected.value, Source::PubChem, |_| true))
    }
}

impl MeasurementSource for PubchemExport {
    fn source(&self) -> Source {
        Source::PubChem
    }

    #[instrument(skip_all, fields(path = %path.display()))]
    fn load(&self, path: &Path) -> Result<Vec<Measurement>> {
        let bytes = std::fs::read(path).map_err(|e| PotentyxError::io(path, e))?;
        let table = self.parse(&bytes, path)?;
        let (measurements, _) = self.clean(&table)?;
        Ok(measurements)
    }
}
