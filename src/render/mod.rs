//! Plain-text and JSON rendering of the derived view.
//!
//! - Text: indented tree for terminal usage
//! - JSON: structured data for scripts

mod json;
mod output;
mod text;
mod types;

pub use json::JsonRenderer;
pub use output::{should_use_color, write_output, OutputTarget};
pub use text::TextRenderer;
pub use types::{OutputFormat, RenderOptions};

use crate::model::{AppDescriptor, HueConfigSnapshot};
use crate::state::DisplayDirective;
use crate::store::ConfigStore;
use thiserror::Error;

/// Errors that can occur while rendering
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Everything a renderer needs from the store for one view.
#[derive(Debug, Clone, Copy)]
pub struct ConfigView<'a> {
    pub app: &'a str,
    pub filter: &'a str,
    pub conf_dir: Option<&'a str>,
    pub directive: DisplayDirective<'a>,
}

impl<'a> ConfigView<'a> {
    #[must_use]
    pub fn from_store(store: &'a ConfigStore) -> Self {
        Self {
            app: store.selected_app(),
            filter: store.filter_text(),
            conf_dir: store.conf_dir(),
            directive: store.display(),
        }
    }
}

/// One row of the application listing.
#[derive(Debug, Clone, Copy)]
pub struct AppRow<'a> {
    pub app: &'a AppDescriptor,
    pub has_config: bool,
}

/// Pair every application with whether the snapshot has a root for it.
#[must_use]
pub fn app_rows(snapshot: &HueConfigSnapshot) -> Vec<AppRow<'_>> {
    snapshot
        .apps
        .iter()
        .map(|app| AppRow {
            app,
            has_config: snapshot.root_for(&app.name).is_some(),
        })
        .collect()
}

/// Trait for view renderers
pub trait ViewRenderer {
    /// Render the selected subtree.
    fn render_view(
        &self,
        view: &ConfigView<'_>,
        options: &RenderOptions,
    ) -> Result<String, RenderError>;

    /// Render the application listing.
    fn render_apps(
        &self,
        rows: &[AppRow<'_>],
        conf_dir: &str,
        options: &RenderOptions,
    ) -> Result<String, RenderError>;

    /// Get the output format
    fn format(&self) -> OutputFormat;
}

/// Create a renderer for the given format
#[must_use]
pub fn create_renderer(format: OutputFormat) -> Box<dyn ViewRenderer> {
    match format {
        OutputFormat::Text => Box::new(TextRenderer::new()),
        OutputFormat::Json => Box::new(JsonRenderer::new()),
    }
}
