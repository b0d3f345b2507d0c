//! Category taxonomy model and lookup.

use serde::{Deserialize, Serialize};


/// One node of the storefront category taxonomy, in the shape the
/// marketplace console serves it. Built once at startup and read-only from
/// then on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryNode {
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "subcategories_or_empty")]
    pub subcategories: Vec<CategoryNode>,
}

// leaves sometimes arrive as `"subcategories": null` rather than `[]`
fn subcategories_or_empty<'de, D>(deserializer: D) -> Result<Vec<CategoryNode>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let subcategories = Option::<Vec<CategoryNode>>::deserialize(deserializer)?;
    Ok(subcategories.unwrap_or_default())
}

/// Find a category by id anywhere in the forest.
///
/// Depth-first pre-order: root list order first, then each node's
/// subcategories in order. The first match wins, which also settles the
/// tie when the same id appears in more than one subtree.
pub fn find_by_id<'a>(nodes: &'a [CategoryNode], id: &str) -> Option<&'a CategoryNode> {
    for node in nodes {
        if node.id == id {
            return Some(node);
        }
        if let Some(found) = find_by_id(&node.subcategories, id) {
            return Some(found);
        }
    }
    None
}

/// Root-to-node chain for the first pre-order match of `id`, for breadcrumb
/// style navigation. The last element is the node [`find_by_id`] returns;
/// `None` when the id is nowhere in the forest.
pub fn trail_to<'a>(nodes: &'a [CategoryNode], id: &str) -> Option<Vec<&'a CategoryNode>> {
    for node in nodes {
        if node.id == id {
            return Some(vec![node]);
        }
        if let Some(mut trail) = trail_to(&node.subcategories, id) {
            trail.insert(0, node);
            return Some(trail);
        }
    }
    None
}
