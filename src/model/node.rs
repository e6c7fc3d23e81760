//! Configuration tree nodes.

use serde::{Deserialize, Serialize};

/// Label shown for groups flagged as anonymous.
pub const DEFAULT_SECTION_LABEL: &str = "Default section";

/// One entry or group in the configuration hierarchy.
///
/// The tree is an owned algebraic structure: every node exclusively owns its
/// children, so recursion over it never needs cycle detection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "WireNode", into = "WireNode")]
pub struct ConfigNode {
    /// Identifier, unique among siblings
    pub key: String,
    /// Optional descriptive text
    pub help: Option<String>,
    /// Unlabeled "default section" group
    pub is_anonymous: bool,
    /// Leaf payload or group children
    pub kind: NodeKind,
}

/// Discriminates value-carrying leaves from groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// A configuration value
    Leaf {
        value: Option<String>,
        default_value: Option<String>,
    },
    /// A named (or anonymous) section containing further nodes
    Group { children: Vec<ConfigNode> },
}

impl ConfigNode {
    /// Create a leaf node.
    pub fn leaf(
        key: impl Into<String>,
        value: Option<String>,
        default_value: Option<String>,
    ) -> Self {
        Self {
            key: key.into(),
            help: None,
            is_anonymous: false,
            kind: NodeKind::Leaf {
                value,
                default_value,
            },
        }
    }

    /// Create a group node.
    pub fn group(key: impl Into<String>, children: Vec<Self>) -> Self {
        Self {
            key: key.into(),
            help: None,
            is_anonymous: false,
            kind: NodeKind::Group { children },
        }
    }

    /// Attach help text.
    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Mark the node as an anonymous section.
    #[must_use]
    pub const fn anonymous(mut self) -> Self {
        self.is_anonymous = true;
        self
    }

    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf { .. })
    }

    /// Children of a group; `None` for leaves.
    #[must_use]
    pub fn children(&self) -> Option<&[Self]> {
        match &self.kind {
            NodeKind::Group { children } => Some(children),
            NodeKind::Leaf { .. } => None,
        }
    }

    #[must_use]
    pub fn value(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Leaf { value, .. } => value.as_deref(),
            NodeKind::Group { .. } => None,
        }
    }

    #[must_use]
    pub fn default_value(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Leaf { default_value, .. } => default_value.as_deref(),
            NodeKind::Group { .. } => None,
        }
    }

    /// Help text, or the empty string when absent.
    #[must_use]
    pub fn help_text(&self) -> &str {
        self.help.as_deref().unwrap_or("")
    }

    /// Label to present for this node.
    #[must_use]
    pub fn display_label(&self) -> &str {
        if self.is_anonymous {
            DEFAULT_SECTION_LABEL
        } else {
            &self.key
        }
    }

    /// Total number of nodes in this subtree, including `self`.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self
            .children()
            .map_or(0, |children| children.iter().map(Self::node_count).sum())
    }

    /// Copy of this node with its children replaced.
    ///
    /// Leaves are returned as-is.
    #[must_use]
    pub fn with_children(&self, children: Vec<Self>) -> Self {
        match self.kind {
            NodeKind::Group { .. } => Self {
                key: self.key.clone(),
                help: self.help.clone(),
                is_anonymous: self.is_anonymous,
                kind: NodeKind::Group { children },
            },
            NodeKind::Leaf { .. } => self.clone(),
        }
    }
}

// ============================================================================
// Wire representation
// ============================================================================

/// JSON shape served by the configuration endpoint.
///
/// A node carrying a `values` array is a group, anything else is a leaf.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct WireNode {
    key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    help: Option<String>,
    #[serde(default)]
    is_anonymous: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    values: Option<Vec<ConfigNode>>,
    #[serde(
        default,
        deserialize_with = "scalar_as_string",
        skip_serializing_if = "Option::is_none"
    )]
    value: Option<String>,
    #[serde(
        default,
        alias = "default_value",
        deserialize_with = "scalar_as_string",
        skip_serializing_if = "Option::is_none"
    )]
    default: Option<String>,
}

/// Accept any JSON scalar for leaf values; the server is not strict about
/// quoting numbers and booleans.
fn scalar_as_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match raw {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

impl From<WireNode> for ConfigNode {
    fn from(wire: WireNode) -> Self {
        let kind = match wire.values {
            Some(children) => NodeKind::Group { children },
            None => NodeKind::Leaf {
                value: wire.value,
                default_value: wire.default,
            },
        };
        Self {
            key: wire.key,
            help: wire.help,
            is_anonymous: wire.is_anonymous,
            kind,
        }
    }
}

impl From<ConfigNode> for WireNode {
    fn from(node: ConfigNode) -> Self {
        let (values, value, default) = match node.kind {
            NodeKind::Group { children } => (Some(children), None, None),
            NodeKind::Leaf {
                value,
                default_value,
            } => (None, value, default_value),
        };
        Self {
            key: node.key,
            help: node.help,
            is_anonymous: node.is_anonymous,
            values,
            value,
            default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_without_values_is_leaf() {
        let node: ConfigNode =
            serde_json::from_str(r#"{"key": "http_port", "help": "Port", "value": "8888", "default": "8000"}"#)
                .unwrap();
        assert!(node.is_leaf());
        assert_eq!(node.value(), Some("8888"));
        assert_eq!(node.default_value(), Some("8000"));
        assert!(node.children().is_none());
    }

    #[test]
    fn test_node_with_empty_values_is_group() {
        let node: ConfigNode =
            serde_json::from_str(r#"{"key": "auth", "is_anonymous": false, "values": []}"#).unwrap();
        assert!(!node.is_leaf());
        assert_eq!(node.children().map(<[ConfigNode]>::len), Some(0));
    }

    #[test]
    fn test_non_string_scalars_are_stringified() {
        let node: ConfigNode =
            serde_json::from_str(r#"{"key": "k", "value": 8888, "default": true}"#).unwrap();
        assert_eq!(node.value(), Some("8888"));
        assert_eq!(node.default_value(), Some("true"));
    }

    #[test]
    fn test_default_value_alias() {
        let node: ConfigNode =
            serde_json::from_str(r#"{"key": "k", "default_value": "d"}"#).unwrap();
        assert_eq!(node.default_value(), Some("d"));
    }

    #[test]
    fn test_group_encodes_values_field() {
        let node = ConfigNode::group("desktop", vec![ConfigNode::leaf("secret_key", None, None)]);
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["key"], "desktop");
        assert_eq!(json["values"][0]["key"], "secret_key");
        assert!(json["values"][0].get("values").is_none());
    }

    #[test]
    fn test_display_label_for_anonymous_section() {
        let node = ConfigNode::group("default", vec![]).anonymous();
        assert_eq!(node.display_label(), DEFAULT_SECTION_LABEL);
        assert_eq!(ConfigNode::group("auth", vec![]).display_label(), "auth");
    }

    #[test]
    fn test_node_count() {
        let tree = ConfigNode::group(
            "root",
            vec![
                ConfigNode::leaf("a", None, None),
                ConfigNode::group("b", vec![ConfigNode::leaf("c", None, None)]),
            ],
        );
        assert_eq!(tree.node_count(), 4);
    }

    #[test]
    fn test_with_children_keeps_metadata() {
        let group = ConfigNode::group("g", vec![ConfigNode::leaf("x", None, None)])
            .with_help("about g")
            .anonymous();
        let pruned = group.with_children(vec![]);
        assert_eq!(pruned.key, "g");
        assert_eq!(pruned.help.as_deref(), Some("about g"));
        assert!(pruned.is_anonymous);
        assert_eq!(pruned.children().map(<[ConfigNode]>::len), Some(0));
    }
}
