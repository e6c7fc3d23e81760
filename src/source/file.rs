//! Snapshot source backed by a saved JSON response.

use super::ConfigSource;
use crate::error::{ErrorContext, HueConfigError, Result};
use crate::model::HueConfigSnapshot;
use std::path::{Path, PathBuf};

/// Reads a snapshot from a file holding the endpoint's JSON body.
#[derive(Debug, Clone)]
pub struct FileConfigSource {
    path: PathBuf,
}

impl FileConfigSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigSource for FileConfigSource {
    async fn fetch(&self) -> Result<HueConfigSnapshot> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| HueConfigError::io(&self.path, e))?;
        HueConfigSnapshot::from_json(&content)
            .with_context(|| format!("reading {}", self.path.display()))
    }

    fn name(&self) -> &'static str {
        "file"
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
