/// Coerce a raw IC50 cell to a number.
///
/// Surrounding whitespace is ignored. Empty or non-numeric cells (`N/A`,
/// `>100`) yield `None`. Range checks belong to
/// [`potentyx_common::Measurement::from_nanomolar`].
pub fn parse_ic50(cell: &str) -> Option<f64> {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}
