//! Apps command handler.

use super::{exit_codes, load_store};
use crate::config::AppConfig;
use crate::error::OptionContext;
use crate::render::{app_rows, create_renderer, should_use_color, write_output, OutputTarget};
use anyhow::Result;

/// Run the apps command
pub async fn run_apps(config: &AppConfig) -> Result<i32> {
    let store = load_store(config).await?;
    let snapshot = store
        .snapshot()
        .context_none("configuration load produced no snapshot")?;

    let missing: Vec<&str> = snapshot
        .apps_without_config()
        .map(|app| app.name.as_str())
        .collect();
    if !missing.is_empty() {
        tracing::debug!("Applications without configuration: {}", missing.join(", "));
    }

    let target = OutputTarget::from_option(config.output.file.clone());
    let render_options = config
        .output
        .render_options(should_use_color(config.output.no_color, &target));
    let content = create_renderer(config.output.format).render_apps(
        &app_rows(snapshot),
        &snapshot.conf_dir,
        &render_options,
    )?;
    write_output(&content, &target)?;

    Ok(exit_codes::SUCCESS)
}
