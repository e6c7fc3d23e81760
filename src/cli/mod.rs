//! CLI command handlers.
//!
//! Testable handlers invoked by main.rs. Each returns the process exit code.

mod apps;
mod show;

pub use apps::run_apps;
pub use show::{run_show, ShowOptions};

use crate::config::{AppConfig, Validatable};
use crate::error::HueConfigError;
use crate::source::{AnySource, ConfigSource};
use crate::store::{ConfigStore, FetchOutcome};
use anyhow::{bail, Result};

/// Process exit codes.
pub mod exit_codes {
    /// Something was shown
    pub const SUCCESS: i32 = 0;
    /// The selected view is empty
    pub const EMPTY_VIEW: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 3;
}

/// Reject configurations that fail validation, listing every problem.
pub fn ensure_valid(config: &AppConfig) -> crate::error::Result<()> {
    let errors = config.validate();
    if errors.is_empty() {
        return Ok(());
    }
    let lines: Vec<String> = errors.iter().map(|e| format!("  {e}")).collect();
    Err(HueConfigError::validation(format!("\n{}", lines.join("\n"))))
}

/// Build the configured source and run one fetch into a fresh store.
pub async fn load_store(config: &AppConfig) -> Result<ConfigStore> {
    ensure_valid(config)?;
    let source = AnySource::from_config(&config.source)?;
    let mut store = ConfigStore::new(config.selection.default_app.clone());

    match store.fetch(&source).await {
        FetchOutcome::Loaded { .. } => Ok(store),
        FetchOutcome::Failed(message) => bail!(
            "Failed to load configuration from {}: {}",
            source.location(),
            message
        ),
        FetchOutcome::AlreadyInFlight | FetchOutcome::Stale => {
            bail!("Configuration load did not complete")
        }
    }
}
