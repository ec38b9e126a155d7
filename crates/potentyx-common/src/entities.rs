/// Core table rows shared by ingestion, ranking and reporting.
/// Field names are serialised with the column headers of the result CSVs.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::potency;

// ---------------------------------------------------------------------------
// Source database
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Source {
    #[serde(rename = "ChEMBL")]
    Chembl,
    #[serde(rename = "PubChem")]
    PubChem,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Chembl => "ChEMBL",
            Source::PubChem => "PubChem",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Normalised measurement
// ---------------------------------------------------------------------------

/// One IC50 measurement after unit normalisation.
///
/// Invariants: `ic50_nm > 0`, `ic50_um == ic50_nm / 1000`,
/// `pic50 == -log10(ic50_um)`. Only [`Measurement::from_nanomolar`]
/// constructs values, so no NaN or infinite pIC50 ever exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub compound_id: String,
    #[serde(rename = "IC50_nM")]
    pub ic50_nm: f64,
    #[serde(rename = "IC50_uM")]
    pub ic50_um: f64,
    #[serde(rename = "pIC50")]
    pub pic50: f64,
    pub source: Source,
}

impl Measurement {
    /// Derive µM and pIC50 from a nanomolar IC50.
    /// Returns `None` for values that are not finite or not strictly positive.
    pub fn from_nanomolar(compound_id: impl Into<String>, ic50_nm: f64, source: Source) -> Option<Self> {
        if !ic50_nm.is_finite() || ic50_nm <= 0.0 {
            return None;
        }
        let ic50_um = potency::nanomolar_to_micromolar(ic50_nm);
        Some(Self {
            compound_id: compound_id.into(),
            ic50_nm,
            ic50_um,
            pic50: potency::pic50_from_micromolar(ic50_um),
            source,
        })
    }
}

// ---------------------------------------------------------------------------
// Potency interpretation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Interpretation {
    #[serde(rename = "Very potent")]
    VeryPotent,
    Potent,
    Moderate,
    Weak,
}

impl Interpretation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Interpretation::VeryPotent => "Very potent",
            Interpretation::Potent => "Potent",
            Interpretation::Moderate => "Moderate",
            Interpretation::Weak => "Weak",
        }
    }
}

impl fmt::Display for Interpretation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Ranked candidate
// ---------------------------------------------------------------------------

/// A measurement selected into the top-N table, with its potency tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCandidate {
    pub compound_id: String,
    #[serde(rename = "IC50_nM")]
    pub ic50_nm: f64,
    #[serde(rename = "IC50_uM")]
    pub ic50_um: f64,
    #[serde(rename = "pIC50")]
    pub pic50: f64,
    pub source: Source,
    #[serde(rename = "Interpretation")]
    pub interpretation: Interpretation,
}

impl From<Measurement> for RankedCandidate {
    fn from(m: Measurement) -> Self {
        let interpretation = potency::interpret_pic50(m.pic50);
        Self {
            compound_id: m.compound_id,
            ic50_nm: m.ic50_nm,
            ic50_um: m.ic50_um,
            pic50: m.pic50,
            source: m.source,
            interpretation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measurement_derivation() {
        let m = Measurement::from_nanomolar("CHEMBL25", 10.0, Source::Chembl).unwrap();
        assert!((m.ic50_um - 0.01).abs() < 1e-12);
        assert!((m.pic50 - 2.0).abs() < 1e-9);
        assert_eq!(m.source, Source::Chembl);
    }

    #[test]
    fn test_measurement_rejects_non_positive_and_non_finite() {
        assert!(Measurement::from_nanomolar("x", 0.0, Source::PubChem).is_none());
        assert!(Measurement::from_nanomolar("x", -5.0, Source::PubChem).is_none());
        assert!(Measurement::from_nanomolar("x", f64::NAN, Source::PubChem).is_none());
        assert!(Measurement::from_nanomolar("x", f64::INFINITY, Source::PubChem).is_none());
    }

    #[test]
    fn test_ranked_candidate_carries_tier() {
        let m = Measurement::from_nanomolar("2244", 50.0, Source::PubChem).unwrap();
        let c = RankedCandidate::from(m);
        // 50 nM → 0.05 µM → pIC50 ≈ 1.30
        assert_eq!(c.interpretation, Interpretation::Weak);
        assert_eq!(c.source.to_string(), "PubChem");
    }
}
