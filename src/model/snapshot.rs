//! Snapshot of a server's configuration, as returned by one fetch.

use super::ConfigNode;
use crate::error::{DecodeErrorKind, HueConfigError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io::Read;

/// Top-level configuration tree of one application.
///
/// Its `key` equals the owning application's [`AppDescriptor::name`].
pub type ConfigRoot = ConfigNode;

/// An application the server knows about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppDescriptor {
    /// Identifier, joined against [`ConfigRoot`] keys
    pub name: String,
    /// Human-readable name
    pub display_name: String,
    /// Whether the application has a user interface
    #[serde(default)]
    pub has_ui: bool,
}

/// Immutable result of one successful configuration fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HueConfigSnapshot {
    /// Known applications, in server order
    pub apps: Vec<AppDescriptor>,
    /// One configuration root per application that has configuration
    pub config: Vec<ConfigRoot>,
    /// Directory the server reads its configuration from
    #[serde(default)]
    pub conf_dir: String,
}

impl HueConfigSnapshot {
    /// Decode a snapshot from the endpoint's JSON body.
    pub fn from_json(body: &str) -> Result<Self> {
        serde_json::from_str(body).map_err(|e| {
            HueConfigError::decode(
                "configuration snapshot",
                DecodeErrorKind::InvalidJson(e.to_string()),
            )
        })
    }

    /// Decode a snapshot from a reader.
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        serde_json::from_reader(reader).map_err(|e| {
            HueConfigError::decode(
                "configuration snapshot",
                DecodeErrorKind::InvalidJson(e.to_string()),
            )
        })
    }

    /// Look up an application by name.
    #[must_use]
    pub fn app(&self, name: &str) -> Option<&AppDescriptor> {
        self.apps.iter().find(|app| app.name == name)
    }

    #[must_use]
    pub fn has_app(&self, name: &str) -> bool {
        self.app(name).is_some()
    }

    /// Configuration root of an application, if it has one.
    #[must_use]
    pub fn root_for(&self, app: &str) -> Option<&ConfigRoot> {
        self.config.iter().find(|root| root.key == app)
    }

    /// Applications that have no configuration root.
    pub fn apps_without_config(&self) -> impl Iterator<Item = &AppDescriptor> {
        self.apps
            .iter()
            .filter(|app| self.root_for(&app.name).is_none())
    }

    /// Total number of nodes across all roots.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.config.iter().map(ConfigNode::node_count).sum()
    }

    /// Check that no two configuration roots share a key.
    ///
    /// Selection scans roots linearly and would silently pick the first of a
    /// duplicated pair.
    pub fn check_unique_roots(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.config.len());
        for root in &self.config {
            if !seen.insert(root.key.as_str()) {
                return Err(HueConfigError::decode(
                    "configuration snapshot",
                    DecodeErrorKind::DuplicateRoot(root.key.clone()),
                ));
            }
        }
        Ok(())
    }
}
