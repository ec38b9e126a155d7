//! potentyx-ingestion: Bioactivity export ingestion.
//! Covers the cleaning stages of the pipeline:
//! - Delimited table reading with malformed-row skipping
//! - Delimiter sniffing for exports of unknown format
//! - Column-name normalisation and heuristic column detection
//! - ChEMBL and PubChem sources producing normalised measurements
//! - Result table writing

pub mod sources;
pub mod normalise;
pub mod sniff;
pub mod table;
pub mod output;

pub use sources::{MeasurementSource, chembl::ChemblExport, pubchem::PubchemExport};
pub use table::RawTable;
