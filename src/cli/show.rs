//! Show command handler.
//!
//! Loads one snapshot, applies the requested selection and filter, and
//! prints the selected subtree.

use super::{exit_codes, load_store};
use crate::config::AppConfig;
use crate::render::{create_renderer, should_use_color, write_output, ConfigView, OutputTarget};
use crate::state::DisplayDirective;
use anyhow::Result;

/// Per-invocation view inputs.
#[derive(Debug, Clone, Default)]
pub struct ShowOptions {
    /// Application to show instead of the initial selection
    pub app: Option<String>,
    /// Filter text
    pub filter: Option<String>,
}

/// Run the show command
pub async fn run_show(config: &AppConfig, options: &ShowOptions) -> Result<i32> {
    let mut store = load_store(config).await?;

    if let Some(app) = &options.app {
        store.set_selected_app(app.as_str());
    }
    if let Some(filter) = &options.filter {
        store.set_filter_text(filter.as_str());
    }
    tracing::debug!(
        "Showing '{}' with filter {:?}: {} of {} roots survive",
        store.selected_app(),
        store.filter_text(),
        store.filtered_config().len(),
        store.snapshot().map_or(0, |s| s.config.len())
    );

    let target = OutputTarget::from_option(config.output.file.clone());
    let render_options = config
        .output
        .render_options(should_use_color(config.output.no_color, &target));
    let view = ConfigView::from_store(&store);
    let content = create_renderer(config.output.format).render_view(&view, &render_options)?;
    write_output(&content, &target)?;

    Ok(match view.directive {
        DisplayDirective::Tree(_) => exit_codes::SUCCESS,
        DisplayDirective::EmptySection(_) | DisplayDirective::Nothing => exit_codes::EMPTY_VIEW,
    })
}
