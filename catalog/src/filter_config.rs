//! Typed search filter configuration.
//!
//! The marketplace console supplies filters as loosely shaped JSON records.
//! This module pins each record to a kind once at load, so the per-render
//! classification code dispatches on an enum instead of re-inspecting key
//! and value strings on every call.

use serde::{Deserialize, Serialize};

use crate::search_const::{CATEGORY_LEVEL_MARKER, PRICE_PARAM, PUBLIC_PARAM_PREFIX};


/// One selectable option of an enum filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumOption {
    pub option: String,
    pub label: String,
}

/// The filter record shape served by the marketplace configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct RawFilterConfig {
    pub key: String,
    pub scope: String,
    pub enum_options: Option<Vec<EnumOption>>,
    pub filter_config: RawFilterUiConfig,
}

/// Presentation block nested inside a raw filter record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RawFilterUiConfig {
    pub label: Option<String>,
}

/// Where a filter's values live on the listing entity. Only public data
/// fields get the `pub_` wire prefix; unrecognized scopes are tolerated and
/// travel bare like built-in ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum FilterScope {
    Public,
    #[default]
    BuiltIn,
    Other,
}

impl FilterScope {
    fn from_wire(raw: &str) -> Self {
        match raw {
            "public" => FilterScope::Public,
            "built-in" => FilterScope::BuiltIn,
            _ => FilterScope::Other,
        }
    }
}

/// How a filter's values are interpreted and displayed, settled once at
/// configuration load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FilterKind {
    /// A category level selection. Shown as breadcrumbs rather than chips.
    Category,
    /// The built-in price range filter.
    Price,
    /// Single or multi select over a fixed option list.
    Enum(Vec<EnumOption>),
    /// Free-form value rendered verbatim.
    Plain,
}

/// A search filter with its kind pinned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterField {
    pub key: String,
    pub scope: FilterScope,
    pub label: Option<String>,
    pub kind: FilterKind,
}

impl FilterField {
    pub fn from_raw(raw: RawFilterConfig) -> Self {
        let enum_options = raw.enum_options.unwrap_or_default();
        let kind = if raw.key.contains(CATEGORY_LEVEL_MARKER) {
            FilterKind::Category
        } else if raw.key == PRICE_PARAM {
            FilterKind::Price
        } else if !enum_options.is_empty() {
            FilterKind::Enum(enum_options)
        } else {
            FilterKind::Plain
        };
        FilterField {
            key: raw.key,
            scope: FilterScope::from_wire(&raw.scope),
            label: raw.filter_config.label,
            kind,
        }
    }

    /// The key as it appears in the page URL: public data fields are
    /// namespaced with `pub_`, everything else travels bare.
    pub fn wire_key(&self) -> String {
        match self.scope {
            FilterScope::Public => format!("{PUBLIC_PARAM_PREFIX}{}", self.key),
            _ => self.key.clone(),
        }
    }

    /// Option list for enum filters, empty for every other kind.
    pub fn enum_options(&self) -> &[EnumOption] {
        match &self.kind {
            FilterKind::Enum(options) => options,
            _ => &[],
        }
    }

    /// Label text for an option id, falling back to the raw id when the
    /// configuration no longer lists it.
    pub fn option_label(&self, option: &str) -> String {
        self.enum_options()
            .iter()
            .find(|candidate| candidate.option == option)
            .map(|candidate| candidate.label.clone())
            .unwrap_or_else(|| option.to_string())
    }
}

/// First configured filter whose wire key matches `param_key` exactly or as
/// a prefix (namespaced sub-keys). `None` means the parameter has no filter
/// configuration and the caller should skip it entirely.
pub fn find_for_param<'a>(fields: &'a [FilterField], param_key: &str) -> Option<&'a FilterField> {
    fields.iter().find(|field| param_key.starts_with(&field.wire_key()))
}
