//! Column-name normalisation and detection.

/// Canonical form of an export column name: surrounding whitespace trimmed,
/// double quotes removed, inner spaces turned into underscores, lower-cased.
///
/// `" \"Standard Value\" "` becomes `standard_value`.
pub fn normalize_column_name(name: &str) -> String {
    name.trim().replace('"', "").replace(' ', "_").to_lowercase()
}

/// Index of the first column whose lower-cased name contains any of `needles`.
///
/// Returns `None` when nothing matches; the caller decides whether that is
/// fatal.
pub fn detect_column<S: AsRef<str>>(columns: &[S], needles: &[&str]) -> Option<usize> {
    columns.iter().position(|c| {
        let name = c.as_ref().to_lowercase();
        needles.iter().any(|n| name.contains(n))
    })
}

/// Index of the column named exactly `name`.
pub fn find_column<S: AsRef<str>>(columns: &[S], name: &str) -> Option<usize> {
    columns.iter().position(|c| c.as_ref() == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_column_name() {
        assert_eq!(normalize_column_name("Molecule ChEMBL ID"), "molecule_chembl_id");
        assert_eq!(normalize_column_name("  \"Standard Value\"  "), "standard_value");
        assert_eq!(normalize_column_name("IC50 (nM)"), "ic50_(nm)");
        assert_eq!(normalize_column_name("cid"), "cid");
    }

    #[test]
    fn test_detect_column_on_raw_names() {
        let columns = ["CID", "IC50 (nM)"];
        assert_eq!(detect_column(&columns, &["cid", "compound"]), Some(0));
        assert_eq!(detect_column(&columns, &["ic50", "value"]), Some(1));
    }

    #[test]
    fn test_detect_column_takes_first_match() {
        let columns = ["activity_outcome", "compound_name", "pubchem_cid", "activity_value", "ic50"];
        assert_eq!(detect_column(&columns, &["cid", "compound"]), Some(1));
        assert_eq!(detect_column(&columns, &["ic50", "value"]), Some(3));
    }

    #[test]
    fn test_detect_column_none() {
        let columns = ["sid", "outcome"];
        assert_eq!(detect_column(&columns, &["cid", "compound"]), None);
        let empty: [&str; 0] = [];
        assert_eq!(detect_column(&empty, &["ic50"]), None);
    }

    #[test]
    fn test_find_column_is_exact() {
        let columns = vec!["standard_value".to_string(), "standard_units".to_string()];
        assert_eq!(find_column(&columns, "standard_units"), Some(1));
        assert_eq!(find_column(&columns, "standard"), None);
    }
}
