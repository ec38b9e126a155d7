//! Fixtures shared by Potentyx tests.

use std::path::Path;

use potentyx_common::{Measurement, Source};
use tempfile::TempDir;

/// ChEMBL activity export in the portal's download format.
///
/// Of 8 activity rows, 4 survive cleaning: CHEMBL200 is in µM, CHEMBL300 has
/// no value, CHEMBL500 has an extra field, CHEMBL700 has an empty unit.
pub const CHEMBL_FIXTURE: &str = "\
\"Molecule ChEMBL ID\";\"Molecule Name\";\"Standard Type\";\"Standard Relation\";\"Standard Value\";\"Standard Units\"
\"CHEMBL100\";\"ALPHA\";\"IC50\";\"'='\";\"1.0\";\"nM\"
\"CHEMBL200\";\"BETA\";\"IC50\";\"'='\";\"3.0\";\"uM\"
\"CHEMBL300\";\"GAMMA\";\"IC50\";\"'='\";\"\";\"nM\"
\"CHEMBL400\";\"DELTA\";\"IC50\";\"'='\";\"250\";\"nM\"
\"CHEMBL500\";\"EPSILON\";\"IC50\";\"'='\";\"5\";\"nM\";\"extra\"
\"CHEMBL600\";\"ZETA\";\"IC50\";\"'>'\";\"10000\";\"NM\"
\"CHEMBL700\";\"ETA\";\"IC50\";\"'='\";\"40\";\"\"
\"CHEMBL800\";\"THETA\";\"IC50\";\"'='\";\"1.0\";\"nM\"
";

/// Cleaned ChEMBL compound ids of [`CHEMBL_FIXTURE`], in file order.
pub const CHEMBL_FIXTURE_KEPT: [&str; 4] = ["CHEMBL100", "CHEMBL400", "CHEMBL600", "CHEMBL800"];

/// PubChem export, comma-separated. 3 of 5 rows survive cleaning.
pub const PUBCHEM_FIXTURE: &str = "\
CID,Compound Name,IC50 (nM),Activity Outcome
2244,aspirin,0.5,Active
3672,ibuprofen,N/A,Inactive
5090,\"rofecoxib, form A\",12,Active
2519,caffeine,,Inactive
60823,atorvastatin,1.0,Active
";

/// Cleaned PubChem compound ids of [`PUBCHEM_FIXTURE`], in file order.
pub const PUBCHEM_FIXTURE_KEPT: [&str; 3] = ["2244", "5090", "60823"];

/// PubChem export whose columns match neither detection rule.
pub const PUBCHEM_UNDETECTABLE: &str = "SID;Outcome;Score\n1;Active;40\n";

/// Measurement from a nanomolar IC50. Panics on values the pipeline would drop.
pub fn measurement(id: &str, ic50_nm: f64, source: Source) -> Measurement {
    Measurement::from_nanomolar(id, ic50_nm, source)
        .unwrap_or_else(|| panic!("invalid fixture IC50 {ic50_nm} for {id}"))
}

/// Measurement with an exact pIC50, for threshold tests where recomputing
/// from nM would introduce rounding.
pub fn measurement_with_pic50(id: &str, pic50: f64, source: Source) -> Measurement {
    let ic50_um = 10f64.powf(-pic50);
    Measurement {
        compound_id: id.to_string(),
        ic50_nm: ic50_um * 1000.0,
        ic50_um,
        pic50,
        source,
    }
}

/// Write `data/chembl_raw.csv` and `data/pubchem_raw.csv` under `root`.
pub fn write_inputs(root: &Path, chembl: &str, pubchem: &str) {
    let data = root.join("data");
    std::fs::create_dir_all(&data).expect("create data dir");
    std::fs::write(data.join("chembl_raw.csv"), chembl).expect("write chembl fixture");
    std::fs::write(data.join("pubchem_raw.csv"), pubchem).expect("write pubchem fixture");
}

/// Temporary working directory pre-populated with the standard fixtures.
pub fn fixture_workspace() -> TempDir {
    let dir = tempfile::tempdir().expect("create temp dir");
    write_inputs(dir.path(), CHEMBL_FIXTURE, PUBCHEM_FIXTURE);
    dir
}
