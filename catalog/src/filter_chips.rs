//! Removable filter chips for the search page filter bar.

use serde::{Deserialize, Serialize};

use crate::filter_config::{FilterField, FilterKind, find_for_param};
use crate::filter_state::{SearchParams, is_displayable_param};
use crate::filter_values::FilterValue;


/// View model for one removable chip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterChip {
    pub param_key: String,
    pub label: String,
    pub display_value: String,
}

/// Human-readable label and value for one search parameter.
///
/// `None` when no configured filter matches the parameter, for example a
/// bookmarked URL carrying a filter that was removed from the console since.
/// The caller skips the chip instead of rendering a broken one.
pub fn describe_filter_param(
    key: &str,
    raw_value: &str,
    fields: &[FilterField],
) -> Option<FilterChip> {
    let field = find_for_param(fields, key)?;

    // Category params normally stay out of the chip bar, but resolve them
    // anyway for callers that ask directly.
    if let FilterKind::Category = field.kind {
        return Some(FilterChip {
            param_key: key.to_string(),
            label: field.label.clone().unwrap_or_else(|| "Category".to_string()),
            display_value: raw_value.replace('-', " "),
        });
    }

    let display_value = match FilterValue::parse(&field.kind, raw_value) {
        FilterValue::PriceRange { min, max } => format!("${min} - ${max}"),
        FilterValue::AnyOf(options) | FilterValue::AllOf(options) => options
            .iter()
            .map(|option| field.option_label(option))
            .collect::<Vec<_>>()
            .join(", "),
        FilterValue::Plain(value) => match &field.kind {
            FilterKind::Enum(_) => field.option_label(&value),
            _ => value,
        },
    };
    Some(FilterChip {
        param_key: key.to_string(),
        label: field.label.clone().unwrap_or_else(|| field.key.clone()),
        display_value,
    })
}

/// Every chip the filter bar should render for the current parameters, in
/// parameter key order. Structural parameters and parameters without a
/// matching filter configuration are skipped, never errors.
pub fn active_filter_chips(params: &SearchParams, fields: &[FilterField]) -> Vec<FilterChip> {
    let mut chips = Vec::new();
    for (key, raw_value) in params {
        if !is_displayable_param(key) {
            continue;
        }
        if let Some(chip) = describe_filter_param(key, raw_value, fields) {
            chips.push(chip);
        }
    }
    chips
}
