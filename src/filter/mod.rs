//! Recursive free-text filtering of configuration trees.
//!
//! A node survives the filter when its key or help text contains the query,
//! or when at least one of its descendants does. A node that matches by
//! itself is kept **whole**, with every original child; a node kept only
//! because of its descendants is pruned down to the surviving children.
//!
//! ```ignore
//! use hue_config_browser::filter::{filter_config, FilterQuery};
//!
//! let query = FilterQuery::new("Port");
//! let visible = filter_config(&snapshot.config, query.as_str());
//! ```
//!
//! Filtering borrows its input immutably and returns new trees, so the same
//! snapshot can be filtered again with a different query.

mod query;

pub use query::FilterQuery;

use crate::model::{ConfigNode, ConfigRoot};

/// Filter one node against an already lowercased query.
///
/// Returns `None` when neither the node nor any descendant matches.
#[must_use]
pub fn filter_node(node: &ConfigNode, lowercased_query: &str) -> Option<ConfigNode> {
    if self_matches(node, lowercased_query) {
        return Some(node.clone());
    }

    let children = node.children()?;
    let survivors: Vec<ConfigNode> = children
        .iter()
        .filter_map(|child| filter_node(child, lowercased_query))
        .collect();

    if survivors.is_empty() {
        None
    } else {
        Some(node.with_children(survivors))
    }
}

/// Filter every root, dropping the ones with no match and keeping order.
#[must_use]
pub fn filter_config(roots: &[ConfigRoot], lowercased_query: &str) -> Vec<ConfigRoot> {
    let filtered: Vec<ConfigRoot> = roots
        .iter()
        .filter_map(|root| filter_node(root, lowercased_query))
        .collect();
    tracing::debug!(
        "Filter {:?} kept {} of {} roots",
        lowercased_query,
        filtered.len(),
        roots.len()
    );
    filtered
}

/// [`filter_config`] for a [`FilterQuery`].
#[must_use]
pub fn filter_config_query(roots: &[ConfigRoot], query: &FilterQuery) -> Vec<ConfigRoot> {
    filter_config(roots, query.as_str())
}

/// Key or help contains the query. An empty query always matches.
fn self_matches(node: &ConfigNode, lowercased_query: &str) -> bool {
    lowercased_query.is_empty()
        || node.key.to_lowercase().contains(lowercased_query)
        || node.help_text().to_lowercase().contains(lowercased_query)
}
