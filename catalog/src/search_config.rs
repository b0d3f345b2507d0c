//! Loading the storefront search configuration.

use std::collections::BTreeSet;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::category_tree::CategoryNode;
use crate::filter_config::{FilterField, RawFilterConfig};


/// Wire shape of the search configuration document. Both sections are
/// optional; a missing one just means no categories or no filters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
struct RawSearchPageConfig {
    categories: Option<Vec<CategoryNode>>,
    filters: Option<Vec<RawFilterConfig>>,
}

/// Parsed search page configuration: the category taxonomy plus the typed
/// filter list. Loaded once at startup and treated as read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SearchPageConfig {
    pub category_tree: Vec<CategoryNode>,
    pub filter_fields: Vec<FilterField>,
}

impl SearchPageConfig {
    /// Parse the configuration document served by the marketplace console.
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        let raw: RawSearchPageConfig =
            serde_json::from_str(json).context("invalid search page configuration")?;
        Ok(Self::from_parts(
            raw.categories.unwrap_or_default(),
            raw.filters.unwrap_or_default(),
        ))
    }

    /// Build the typed configuration from already-deserialized sections.
    pub fn from_parts(categories: Vec<CategoryNode>, filters: Vec<RawFilterConfig>) -> Self {
        let filter_fields = filters
            .into_iter()
            .map(FilterField::from_raw)
            .collect::<Vec<_>>();
        let config = SearchPageConfig {
            category_tree: categories,
            filter_fields: filter_fields,
        };
        config.warn_on_collisions();
        config
    }

    // Collisions are tolerated (first match wins everywhere), but they are
    // almost always a console mistake worth surfacing in the logs.
    fn warn_on_collisions(&self) {
        let mut seen_ids = BTreeSet::new();
        let mut stack: Vec<&CategoryNode> = self.category_tree.iter().rev().collect();
        while let Some(node) = stack.pop() {
            if !seen_ids.insert(node.id.as_str()) {
                tracing::warn!(
                    category_id = %node.id,
                    "duplicate category id in the taxonomy, first match wins"
                );
            }
            for child in node.subcategories.iter().rev() {
                stack.push(child);
            }
        }

        let mut seen_keys = BTreeSet::new();
        for field in &self.filter_fields {
            let wire_key = field.wire_key();
            if !seen_keys.insert(wire_key.clone()) {
                tracing::warn!(%wire_key, "duplicate filter wire key, first config wins");
            }
        }
    }
}
