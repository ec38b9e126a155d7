//! ChEMBL activity export.
//!
//! ChEMBL's download format is fixed: a semicolon-separated file with one
//! activity per row. The columns used are:
//!   - `Molecule ChEMBL ID` → compound_id
//!   - `Standard Value`     → IC50 (nM)
//!   - `Standard Units`     → unit filter, only `nM` rows are kept
//!
//! Download: https://www.ebi.ac.uk/chembl/ (Activities → Export → CSV)

use std::path::Path;

use potentyx_common::{Measurement, PotentyxError, Result, Source};
use tracing::{instrument, warn};

use super::{extract_measurements, CleaningStats, MeasurementSource};
use crate::normalise::find_column;
use crate::table::{read_table, RawTable};

pub const CHEMBL_DELIMITER: u8 = b';';

pub const COMPOUND_COLUMN: &str = "molecule_chembl_id";
pub const VALUE_COLUMN: &str = "standard_value";
pub const UNITS_COLUMN: &str = "standard_units";

/// Unit accepted by the filter, compared after upper-casing the cell.
pub const NANOMOLAR: &str = "NM";

/// How rows are screened for units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitPolicy {
    /// A units column exists; keep rows whose unit is nanomolar.
    RequireNanomolar { column: usize },
    /// No units column; every row is assumed to be nanomolar.
    AssumeNanomolar,
}

impl UnitPolicy {
    /// Pick the policy from the normalised header.
    pub fn for_columns<S: AsRef<str>>(columns: &[S]) -> Self {
        match find_column(columns, UNITS_COLUMN) {
            Some(column) => UnitPolicy::RequireNanomolar { column },
            None => UnitPolicy::AssumeNanomolar,
        }
    }

    pub fn accepts(&self, row: &csv::StringRecord) -> bool {
        match *self {
            UnitPolicy::RequireNanomolar { column } => {
                RawTable::cell(row, column).to_uppercase() == NANOMOLAR
            }
            UnitPolicy::AssumeNanomolar => true,
        }
    }
}

/// Reader for ChEMBL activity exports.
#[derive(Debug, Clone)]
pub struct ChemblExport {
    delimiter: u8,
}

impl ChemblExport {
    pub fn new() -> Self {
        Self { delimiter: CHEMBL_DELIMITER }
    }

    /// Override the delimiter (ChEMBL's own exports always use `;`).
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Normalise an already-read table.
    pub fn clean(&self, table: &RawTable) -> Result<(Vec<Measurement>, CleaningStats)> {
        let columns = table.normalized_headers();
        let required = |name: &str| {
            find_column(&columns, name).ok_or_else(|| PotentyxError::MissingColumn {
                source_name: Source::Chembl.to_string(),
                column: name.to_string(),
                available: columns.clone(),
            })
        };
        let id_idx = required(COMPOUND_COLUMN)?;
        let value_idx = required(VALUE_COLUMN)?;

        let policy = UnitPolicy::for_columns(&columns);
        if policy == UnitPolicy::AssumeNanomolar {
            warn!("ChEMBL export has no {} column; assuming every value is nM", UNITS_COLUMN);
        }

        Ok(extract_measurements(table, id_idx, value_idx, Source::Chembl, |row| policy.accepts(row)))
    }
}

impl Default for ChemblExport {
    fn default() -> Self {
        Self::new()
    }
}

impl MeasurementSource for ChemblExport {
    fn source(&self) -> Source {
        Source::Chembl
    }

    #[instrument(skip_all, fields(path = %path.display()))]
    fn load(&self, path: &Path) -> Result<Vec<Measurement>> {
        let table = read_table(path, self.delimiter)?;
        let (measurements, _) = self.clean(&table)?;
        Ok(measurements)
    }
}
