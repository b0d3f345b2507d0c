use std::collections::BTreeMap;

use crate::filter_values::FilterValue;
use crate::search_const::is_structural_param;

/// The page's search state as decoded from the URL query string: parameter
/// name to raw string value.
pub type SearchParams = BTreeMap<String, String>;

/// Whether a parameter renders as a removable chip in the filter bar.
/// Structural parameters (pagination, map viewport, category levels) never
/// do; category selection shows up as breadcrumbs instead.
pub fn is_displayable_param(key: &str) -> bool {
    !is_structural_param(key)
}

/// Parameter set with one filter dropped, for a chip's remove button.
/// The input map is left untouched; removing an absent key is a plain copy.
pub fn remove_filter_param(params: &SearchParams, key: &str) -> SearchParams {
    let mut next = params.clone();
    next.remove(key);
    next
}

/// Parameter set after "Clear all": every displayable filter is dropped and
/// the structural parameters survive, so clearing the chips does not reset
/// pagination or the map viewport or drop the category selection.
pub fn clear_filter_params(params: &SearchParams) -> SearchParams {
    params
        .iter()
        .filter(|(key, _)| !is_displayable_param(key))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Parameter set with one filter set to `value`, replacing any previous
/// selection under the same key.
pub fn set_filter_param(params: &SearchParams, key: &str, value: &FilterValue) -> SearchParams {
    let mut next = params.clone();
    next.insert(key.to_string(), value.wire_value());
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn params(entries: &[(&str, &str)]) -> SearchParams {
        entries
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn structural_params_are_not_displayable() {
        for key in crate::search_const::STRUCTURAL_PARAMS {
            assert!(!is_displayable_param(key), "{key} should be structural");
        }
        assert!(is_displayable_param("price"));
        assert!(is_displayable_param("pub_material"));
        assert!(is_displayable_param("pub_categoryLevel1x"));
        assert!(is_displayable_param("keywords"));
    }

    #[test]
    fn remove_filter_param_copies_without_the_key() {
        let original = params(&[("page", "2"), ("pub_material", "bamboo")]);
        let removed = remove_filter_param(&original, "pub_material");
        assert_eq!(removed, params(&[("page", "2")]));
        // the original is untouched
        assert_eq!(original.len(), 2);
    }

    #[test]
    fn removing_an_absent_key_is_a_plain_copy() {
        let original = params(&[("page", "2")]);
        assert_eq!(remove_filter_param(&original, "pub_material"), original);
    }

    #[test]
    fn clear_keeps_structural_params_only() {
        let original = params(&[
            ("page", "2"),
            ("pub_material", "bamboo"),
            ("mapSearch", "true"),
        ]);
        assert_eq!(
            clear_filter_params(&original),
            params(&[("page", "2"), ("mapSearch", "true")])
        );
    }

    #[test]
    fn clear_leaves_the_category_selection_in_place() {
        let original = params(&[
            ("pub_categoryLevel1", "baby-girls"),
            ("pub_material", "bamboo"),
            ("price", "10,50"),
        ]);
        assert_eq!(
            clear_filter_params(&original),
            params(&[("pub_categoryLevel1", "baby-girls")])
        );
    }

    #[test]
    fn set_filter_param_inserts_the_wire_form() {
        let original = params(&[("page", "2")]);
        let updated = set_filter_param(
            &original,
            "pub_material",
            &FilterValue::AnyOf(vec!["bamboo".to_string(), "mulmul".to_string()]),
        );
        assert_eq!(updated["pub_material"], "has_any:bamboo,mulmul");
        let replaced = set_filter_param(
            &updated,
            "pub_material",
            &FilterValue::Plain("linen".to_string()),
        );
        assert_eq!(replaced["pub_material"], "linen");
        assert_eq!(original.len(), 1);
    }
}
