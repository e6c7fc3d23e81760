//! JSON output for scripts.

use super::{AppRow, ConfigView, OutputFormat, RenderError, RenderOptions, ViewRenderer};
use crate::model::ConfigNode;
use crate::state::DisplayDirective;
use serde::Serialize;

#[derive(Serialize)]
struct JsonView<'a> {
    app: &'a str,
    filter: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    conf_dir: Option<&'a str>,
    status: &'static str,
    config: Option<&'a ConfigNode>,
}

#[derive(Serialize)]
struct JsonApp<'a> {
    name: &'a str,
    display_name: &'a str,
    has_ui: bool,
    has_config: bool,
}

#[derive(Serialize)]
struct JsonApps<'a> {
    apps: Vec<JsonApp<'a>>,
    conf_dir: &'a str,
}

/// JSON renderer
#[derive(Debug, Default)]
pub struct JsonRenderer;

impl JsonRenderer {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn to_string<T: Serialize>(&self, value: &T) -> Result<String, RenderError> {
        serde_json::to_string_pretty(value)
            .map_err(|e| RenderError::SerializationError(e.to_string()))
    }
}

impl ViewRenderer for JsonRenderer {
    fn render_view(
        &self,
        view: &ConfigView<'_>,
        _options: &RenderOptions,
    ) -> Result<String, RenderError> {
        let (status, config) = match view.directive {
            DisplayDirective::Nothing => ("nothing", None),
            DisplayDirective::EmptySection(root) => ("empty", Some(root)),
            DisplayDirective::Tree(root) => ("tree", Some(root)),
        };
        self.to_string(&JsonView {
            app: view.app,
            filter: view.filter,
            conf_dir: view.conf_dir,
            status,
            config,
        })
    }

    fn render_apps(
        &self,
        rows: &[AppRow<'_>],
        conf_dir: &str,
        _options: &RenderOptions,
    ) -> Result<String, RenderError> {
        let apps = rows
            .iter()
            .map(|row| JsonApp {
                name: &row.app.name,
                display_name: &row.app.display_name,
                has_ui: row.app.has_ui,
                has_config: row.has_config,
            })
            .collect();
        self.to_string(&JsonApps { apps, conf_dir })
    }

    fn format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}
