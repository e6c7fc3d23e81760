//! Sources of configuration snapshots.
//!
//! A [`ConfigSource`] performs the single asynchronous call of a load and
//! yields either a snapshot or a failure. The store drives it; sources never
//! touch view state themselves.
//!
//! - [`HttpConfigSource`] - GET against a running server
//! - [`FileConfigSource`] - a saved JSON response on disk

mod file;
mod http;

pub use file::FileConfigSource;
pub use http::{HttpConfigSource, HttpSourceConfig, DEFAULT_ENDPOINT_PATH};

use crate::config::SourceConfig;
use crate::error::Result;
use crate::model::HueConfigSnapshot;
use std::future::Future;

/// Trait for snapshot providers.
///
/// Implement this trait to load configuration from a new place.
pub trait ConfigSource: Send + Sync {
    /// Fetch one complete snapshot.
    fn fetch(&self) -> impl Future<Output = Result<HueConfigSnapshot>> + Send;

    /// Short name of the source kind (e.g. "http", "file").
    fn name(&self) -> &'static str;

    /// Where the snapshot comes from, for logs and messages.
    fn location(&self) -> String;
}

/// Either built-in source, chosen at runtime.
#[derive(Debug)]
pub enum AnySource {
    Http(HttpConfigSource),
    File(FileConfigSource),
}

impl AnySource {
    /// Build the source described by `config`; a file wins over a URL.
    pub fn from_config(config: &SourceConfig) -> Result<Self> {
        match &config.file {
            Some(path) => Ok(FileConfigSource::new(path).into()),
            None => Ok(HttpConfigSource::new(config.http_config())?.into()),
        }
    }
}

impl ConfigSource for AnySource {
    async fn fetch(&self) -> Result<HueConfigSnapshot> {
        match self {
            Self::Http(source) => source.fetch().await,
            Self::File(source) => source.fetch().await,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Http(source) => source.name(),
            Self::File(source) => source.name(),
        }
    }

    fn location(&self) -> String {
        match self {
            Self::Http(source) => source.location(),
            Self::File(source) => source.location(),
        }
    }
}

impl From<HttpConfigSource> for AnySource {
    fn from(source: HttpConfigSource) -> Self {
        Self::Http(source)
    }
}

impl From<FileConfigSource> for AnySource {
    fn from(source: FileConfigSource) -> Self {
        Self::File(source)
    }
}
