//! Option list building and selection resolution

use crate::rig_select::types::{SelectOption, NONE_VALUE};

/// Build the option list for a rig selector
///
/// Always starts with the "None" sentinel, followed by one option per name
/// in the given order.
pub fn build_rig_options(names: &[&str]) -> Vec<SelectOption> {
    std::iter::once(SelectOption::none())
        .chain(names.iter().map(|name| SelectOption::rig(name)))
        .collect()
}

/// Selection a selector should hold once its options are rebuilt
///
/// `prev` survives only if it is a non-empty exact match of one of `names`.
pub fn resolve_selection<'a>(prev: &'a str, names: &[&str]) -> &'a str {
    if !prev.is_empty() && names.contains(&prev) {
        prev
    } else {
        NONE_VALUE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_options_single_rig() {
        assert_eq!(
            build_rig_options(&["digirig"]),
            vec![SelectOption::new("", "None"), SelectOption::new("digirig", "digirig")]
        );
    }

    #[test]
    fn test_build_options_empty() {
        assert_eq!(build_rig_options(&[]), vec![SelectOption::none()]);
    }

    #[test]
    fn test_build_options_keeps_duplicates() {
        let options = build_rig_options(&["ft991", "ft991"]);
        assert_eq!(options.len(), 3);
        assert_eq!(options[1], options[2]);
    }

    #[test]
    fn test_resolve_keeps_present_rig() {
        assert_eq!(resolve_selection("ft991", &["digirig", "ft991"]), "ft991");
    }

    #[test]
    fn test_resolve_clears_missing_rig() {
        assert_eq!(resolve_selection("digirig", &["digirig-v2"]), "");
        assert_eq!(resolve_selection("digirig", &[]), "");
    }

    #[test]
    fn test_resolve_is_exact_match() {
        assert_eq!(resolve_selection("DigiRig", &["digirig"]), "");
        assert_eq!(resolve_selection("digirig ", &["digirig"]), "");
    }

    #[test]
    fn test_resolve_none_stays_none() {
        assert_eq!(resolve_selection("", &["digirig"]), "");
    }
}
