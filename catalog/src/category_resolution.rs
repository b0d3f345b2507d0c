//! Resolving category selections to display names.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::category_tree::{CategoryNode, find_by_id};
use crate::filter_state::SearchParams;
use crate::search_const::{CATEGORY_LEVEL_MARKER, PUBLIC_PARAM_PREFIX, is_structural_param};


/// Level key (`"level1"`, `"level2"`, ...) to selected category id, as
/// decoded from the page URL. `None` and `""` both mean the level carries
/// no selection at all.
pub type CategoryPath = BTreeMap<String, Option<String>>;

/// One entry of the category breadcrumb strip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Breadcrumb {
    pub level: String,
    pub id: String,
    pub name: String,
}

/// Map each selected level to its display name.
///
/// Levels without a selection produce no output entry at all. Ids missing
/// from the taxonomy fall back to the raw id, so a stale bookmarked URL
/// still renders something readable instead of crashing the page.
pub fn resolve_category_names(
    path: &CategoryPath,
    nodes: &[CategoryNode],
) -> BTreeMap<String, String> {
    let mut resolved = BTreeMap::new();
    for (level, id) in path {
        let id = match id {
            Some(id) if !id.is_empty() => id,
            _ => continue,
        };
        let name = match find_by_id(nodes, id) {
            Some(node) => node.name.clone(),
            None => id.clone(),
        };
        resolved.insert(level.clone(), name);
    }
    resolved
}

/// Pull the category selection out of the page parameters: each structural
/// `pub_categoryLevelN` parameter becomes a `levelN` path entry. Everything
/// else in the parameter set is ignored.
pub fn category_path_from_params(params: &SearchParams) -> CategoryPath {
    let mut path = CategoryPath::new();
    for (key, value) in params {
        if !is_structural_param(key) {
            continue;
        }
        let level = key
            .strip_prefix(PUBLIC_PARAM_PREFIX)
            .and_then(|key| key.strip_prefix(CATEGORY_LEVEL_MARKER));
        if let Some(level) = level {
            path.insert(format!("level{level}"), Some(value.clone()));
        }
    }
    path
}

/// Search parameters selecting the given category chain, one
/// `pub_categoryLevelN` parameter per node from the root down. This is what
/// a category menu entry links to.
pub fn search_params_for_trail(trail: &[&CategoryNode]) -> SearchParams {
    let mut params = SearchParams::new();
    for (depth, node) in trail.iter().enumerate() {
        params.insert(
            format!("{PUBLIC_PARAM_PREFIX}{CATEGORY_LEVEL_MARKER}{}", depth + 1),
            node.id.clone(),
        );
    }
    params
}

/// Breadcrumb entries for the selected category path, ordered by level key.
/// Same omission and fallback rules as [`resolve_category_names`].
pub fn category_breadcrumbs(path: &CategoryPath, nodes: &[CategoryNode]) -> Vec<Breadcrumb> {
    let mut crumbs = Vec::new();
    for (level, id) in path {
        let id = match id {
            Some(id) if !id.is_empty() => id,
            _ => continue,
        };
        let name = find_by_id(nodes, id)
            .map(|node| node.name.clone())
            .unwrap_or_else(|| id.clone());
        crumbs.push(Breadcrumb {
            level: level.clone(),
            id: id.clone(),
            name,
        });
    }
    crumbs
}
