//! Component logic that does not touch the DOM.
//!
//! This module provides:
//! - [`node_state`], [`toggle_item`] - Side nav expansion rules
//! - [`seed_open_items`] - Initial open set for uncontrolled trees

pub mod nav_tree;

pub use nav_tree::{
    NodeState, find_item, node_state, seed_open_items, toggle_item, visible_paths, with_selection,
};
