//! Catalog navigation and search filter state shared across the storefront.

extern crate serde;


pub mod category_tree;
pub mod category_resolution;
pub mod filter_config;
pub mod filter_values;
pub mod filter_state;
pub mod filter_chips;
pub mod search_config;
pub mod search_const;
