//! Wire codec for a single filter parameter value.
//!
//! URL values come in three shapes: plain scalars, `min,max` price ranges
//! and `has_any:`/`has_all:` multi-select lists. Decoding happens once per
//! value; display code then matches on the decoded shape.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::filter_config::FilterKind;
use crate::search_const::{HAS_ALL_PREFIX, HAS_ANY_PREFIX};


/// A decoded filter parameter value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterValue {
    /// Match listings carrying at least one of the selected options.
    AnyOf(Vec<String>),
    /// Match listings carrying every selected option.
    AllOf(Vec<String>),
    /// Inclusive price range in whole currency units.
    PriceRange { min: u64, max: u64 },
    /// Anything the wire carried that fits no richer shape.
    Plain(String),
}

impl FilterValue {
    /// Decode one raw URL value for a filter of the given kind.
    ///
    /// Total and fail-soft: values that do not fit the expected shape come
    /// back as [`FilterValue::Plain`] so the caller still has something to
    /// render. A price value that is not exactly two whole numbers is such
    /// a case.
    pub fn parse(kind: &FilterKind, raw: &str) -> FilterValue {
        if let FilterKind::Price = kind {
            if let Some(range) = parse_price_range(raw) {
                return range;
            }
            return FilterValue::Plain(raw.to_string());
        }
        if let Some(rest) = raw.strip_prefix(HAS_ANY_PREFIX) {
            return FilterValue::AnyOf(split_options(rest));
        }
        if let Some(rest) = raw.strip_prefix(HAS_ALL_PREFIX) {
            return FilterValue::AllOf(split_options(rest));
        }
        FilterValue::Plain(raw.to_string())
    }

    /// The value as it travels in the page URL.
    pub fn wire_value(&self) -> String {
        match self {
            FilterValue::AnyOf(options) => format!("{HAS_ANY_PREFIX}{}", options.join(",")),
            FilterValue::AllOf(options) => format!("{HAS_ALL_PREFIX}{}", options.join(",")),
            FilterValue::PriceRange { min, max } => format!("{min},{max}"),
            FilterValue::Plain(value) => value.clone(),
        }
    }
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.wire_value())
    }
}

fn parse_price_range(raw: &str) -> Option<FilterValue> {
    let mut parts = raw.split(',');
    let min = parts.next()?.trim().parse::<u64>().ok()?;
    let max = parts.next()?.trim().parse::<u64>().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(FilterValue::PriceRange { min, max })
}

fn split_options(rest: &str) -> Vec<String> {
    if rest.is_empty() {
        return Vec::new();
    }
    rest.split(',').map(|option| option.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn price_values_decode_to_ranges() {
        assert_eq!(
            FilterValue::parse(&FilterKind::Price, "10,50"),
            FilterValue::PriceRange { min: 10, max: 50 }
        );
        assert_eq!(
            FilterValue::parse(&FilterKind::Price, "0,2500"),
            FilterValue::PriceRange { min: 0, max: 2500 }
        );
    }

    #[test]
    fn malformed_price_values_stay_plain() {
        for raw in ["10", "10,20,30", "ten,50", "10,", "", "has_any:10,50"] {
            assert_eq!(
                FilterValue::parse(&FilterKind::Price, raw),
                FilterValue::Plain(raw.to_string()),
                "raw value: {raw:?}"
            );
        }
    }

    #[test]
    fn multi_select_prefixes_decode_to_selections() {
        assert_eq!(
            FilterValue::parse(&FilterKind::Plain, "has_any:organic-cotton,bamboo"),
            FilterValue::AnyOf(vec!["organic-cotton".to_string(), "bamboo".to_string()])
        );
        assert_eq!(
            FilterValue::parse(&FilterKind::Plain, "has_all:gots,azo-free"),
            FilterValue::AllOf(vec!["gots".to_string(), "azo-free".to_string()])
        );
    }

    #[test]
    fn empty_multi_select_remainder_decodes_to_no_selection() {
        assert_eq!(
            FilterValue::parse(&FilterKind::Plain, "has_any:"),
            FilterValue::AnyOf(vec![])
        );
        assert_eq!(
            FilterValue::parse(&FilterKind::Plain, "has_all:"),
            FilterValue::AllOf(vec![])
        );
    }

    #[test]
    fn everything_else_stays_verbatim() {
        assert_eq!(
            FilterValue::parse(&FilterKind::Plain, "bamboo"),
            FilterValue::Plain("bamboo".to_string())
        );
        // price shaped strings on non-price filters are not ranges
        assert_eq!(
            FilterValue::parse(&FilterKind::Plain, "10,50"),
            FilterValue::Plain("10,50".to_string())
        );
    }

    #[test]
    fn wire_values_match_what_was_decoded() {
        assert_eq!(
            FilterValue::PriceRange { min: 10, max: 50 }.wire_value(),
            "10,50"
        );
        assert_eq!(
            FilterValue::AnyOf(vec!["a".to_string(), "b".to_string()]).to_string(),
            "has_any:a,b"
        );
        assert_eq!(
            FilterValue::AllOf(vec![]).wire_value(),
            "has_all:"
        );
        assert_eq!(FilterValue::Plain("mul mul".to_string()).wire_value(), "mul mul");
    }
}
