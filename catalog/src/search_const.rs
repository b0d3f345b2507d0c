//! Reserved search parameter names shared across the storefront.

/// Query parameters that carry navigation and view state rather than a
/// user-facing filter selection. These never render as removable chips and
/// they survive a "clear all filters" action.
pub const STRUCTURAL_PARAMS: &[&str] = &[
    "page",
    "mapSearch",
    "bounds",
    "origin",
    "address",
    "pub_categoryLevel1",
    "pub_categoryLevel2",
    "pub_categoryLevel3",
];

/// Wire prefix for filters stored in a listing's public data.
pub const PUBLIC_PARAM_PREFIX: &str = "pub_";

/// Filter keys containing this marker select a category level.
pub const CATEGORY_LEVEL_MARKER: &str = "categoryLevel";

/// The built-in price range filter key.
pub const PRICE_PARAM: &str = "price";

/// Wire prefix for "match at least one selected option" values.
pub const HAS_ANY_PREFIX: &str = "has_any:";

/// Wire prefix for "match every selected option" values.
pub const HAS_ALL_PREFIX: &str = "has_all:";

/// Exact membership in [`STRUCTURAL_PARAMS`]. Keys that merely start with a
/// structural name (`pub_categoryLevel1x`) are ordinary filter parameters.
pub fn is_structural_param(key: &str) -> bool {
    STRUCTURAL_PARAMS.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structural_membership_is_exact_match_only() {
        for key in STRUCTURAL_PARAMS {
            assert!(is_structural_param(key));
        }
        assert!(!is_structural_param("pub_categoryLevel1x"));
        assert!(!is_structural_param("pages"));
        assert!(!is_structural_param("price"));
        assert!(!is_structural_param("pub_material"));
    }
}
