/// Potency maths for IC50 measurements.
/// pIC50 is taken on the micromolar scale: pIC50 = -log10(IC50 in µM).

use crate::entities::Interpretation;

/// Lower pIC50 bound of each interpretation tier, strongest first.
pub const VERY_POTENT_MIN: f64 = 7.0;
pub const POTENT_MIN: f64 = 6.0;
pub const MODERATE_MIN: f64 = 5.0;

pub fn nanomolar_to_micromolar(ic50_nm: f64) -> f64 {
    ic50_nm / 1000.0
}

pub fn pic50_from_micromolar(ic50_um: f64) -> f64 {
    let p = -ic50_um.log10();
    // 1 µM gives -0.0, which would be written as "-0.0"
    if p == 0.0 { 0.0 } else { p }
}

/// Convenience: pIC50 straight from a nanomolar value.
pub fn pic50_from_nanomolar(ic50_nm: f64) -> f64 {
    pic50_from_micromolar(nanomolar_to_micromolar(ic50_nm))
}

/// Map a pIC50 onto its tier. Boundaries are inclusive on the lower side.
pub fn interpret_pic50(pic50: f64) -> Interpretation {
    if pic50 >= VERY_POTENT_MIN {
        Interpretation::VeryPotent
    } else if pic50 >= POTENT_MIN {
        Interpretation::Potent
    } else if pic50 >= MODERATE_MIN {
        Interpretation::Moderate
    } else {
        Interpretation::Weak
    }
}
