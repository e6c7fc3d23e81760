//! Property-based tests for the recursive filter.
//!
//! Generates arbitrary configuration trees and checks that the filter's
//! invariants hold for random queries.

use hue_config_browser::filter::{filter_config, filter_node, FilterQuery};
use hue_config_browser::model::ConfigNode;
use proptest::prelude::*;

fn arb_leaf() -> impl Strategy<Value = ConfigNode> {
    (
        "[a-z_]{1,8}",
        proptest::option::of("[a-zA-Z ]{0,12}"),
        proptest::option::of("[a-z0-9]{0,6}"),
    )
        .prop_map(|(key, help, value)| {
            let mut node = ConfigNode::leaf(key, value, None);
            node.help = help;
            node
        })
}

fn arb_tree() -> impl Strategy<Value = ConfigNode> {
    arb_leaf().prop_recursive(4, 64, 6, |inner| {
        (
            "[a-z_]{1,8}",
            proptest::option::of("[a-zA-Z ]{0,12}"),
            any::<bool>(),
            prop::collection::vec(inner, 0..6),
        )
            .prop_map(|(key, help, anonymous, children)| {
                let mut node = ConfigNode::group(key, children);
                node.help = help;
                node.is_anonymous = anonymous;
                node
            })
    })
}

fn self_matches(node: &ConfigNode, query: &str) -> bool {
    node.key.to_lowercase().contains(query) || node.help_text().to_lowercase().contains(query)
}

fn any_matches(node: &ConfigNode, query: &str) -> bool {
    self_matches(node, query)
        || node
            .children()
            .is_some_and(|children| children.iter().any(|c| any_matches(c, query)))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn empty_query_is_identity(tree in arb_tree()) {
        prop_assert_eq!(filter_node(&tree, ""), Some(tree.clone()));
    }

    #[test]
    fn kept_iff_something_matches(tree in arb_tree(), query in "[a-z]{1,2}") {
        let result = filter_node(&tree, &query);
        prop_assert_eq!(result.is_some(), any_matches(&tree, &query));
    }

    #[test]
    fn self_match_keeps_all_children(tree in arb_tree(), query in "[a-z]{1,2}") {
        if self_matches(&tree, &query) {
            prop_assert_eq!(filter_node(&tree, &query), Some(tree.clone()));
        }
    }

    #[test]
    fn filtering_is_idempotent(tree in arb_tree(), query in "[a-z]{1,2}") {
        if let Some(once) = filter_node(&tree, &query) {
            prop_assert_eq!(filter_node(&once, &query), Some(once.clone()));
        }
    }

    #[test]
    fn filtering_never_grows_or_mutates(
        roots in prop::collection::vec(arb_tree(), 0..5),
        query in "[a-z]{0,2}",
    ) {
        let before = roots.clone();
        let filtered = filter_config(&roots, &query);

        prop_assert_eq!(&roots, &before);
        prop_assert!(filtered.len() <= roots.len());
        let total_before: usize = roots.iter().map(ConfigNode::node_count).sum();
        let total_after: usize = filtered.iter().map(ConfigNode::node_count).sum();
        prop_assert!(total_after <= total_before);
    }

    #[test]
    fn surviving_roots_keep_order(
        roots in prop::collection::vec(arb_tree(), 0..6),
        query in "[a-z]{1,2}",
    ) {
        let filtered = filter_config(&roots, &query);
        let expected: Vec<&str> = roots
            .iter()
            .filter(|r| any_matches(r, &query))
            .map(|r| r.key.as_str())
            .collect();
        let actual: Vec<&str> = filtered.iter().map(|r| r.key.as_str()).collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn query_case_is_folded(tree in arb_tree(), query in "[a-zA-Z]{1,3}") {
        let folded = FilterQuery::new(&query);
        prop_assert_eq!(
            filter_node(&tree, folded.as_str()),
            filter_node(&tree, &query.to_lowercase())
        );
    }
}
