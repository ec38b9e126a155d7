//! Concatenation of cleaned source tables.

use potentyx_common::Measurement;
use tracing::info;

/// Combine the cleaned ChEMBL and PubChem tables.
///
/// ChEMBL rows come first, then PubChem rows; each keeps its own order.
/// The result always has `chembl.len() + pubchem.len()` rows.
pub fn merge_sources(chembl: &[Measurement], pubchem: &[Measurement]) -> Vec<Measurement> {
    let mut combined = Vec::with_capacity(chembl.len() + pubchem.len());
    combined.extend_from_slice(chembl);
    combined.extend_from_slice(pubchem);

    info!(
        chembl = chembl.len(),
        pubchem = pubchem.len(),
        combined = combined.len(),
        "Merged sources"
    );
    combined
}
