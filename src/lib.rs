//! **Browse and filter a Hue server's hierarchical configuration.**
//!
//! `hue-config-browser` loads the configuration a Hue server reports for each
//! of its applications, narrows it with a free-text filter that matches at
//! any depth, and derives the subtree to display for the selected
//! application.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: The configuration tree ([`ConfigNode`]) and the immutable
//!   [`HueConfigSnapshot`] produced by one fetch.
//! - **[`filter`]**: Pure recursive matching. A node that matches keeps all
//!   of its children; a group that does not match keeps only the children
//!   that do.
//! - **[`state`]**: The explicit [`ViewState`] and its pure `reduce`
//!   function, combining snapshot, selected application and filter text.
//! - **[`store`]**: The [`ConfigStore`], which owns the fetch lifecycle and
//!   the loading/error status.
//! - **[`source`]**: Where snapshots come from: an HTTP endpoint or a saved
//!   JSON response.
//! - **[`render`]**: Text and JSON output of the derived view.
//!
//! ## Getting Started
//!
//! ```no_run
//! use hue_config_browser::{ConfigStore, FileConfigSource, DisplayDirective};
//!
//! # async fn example() {
//! let mut store = ConfigStore::default();
//! store.fetch(&FileConfigSource::new("hue-config.json")).await;
//! store.set_filter_text("ldap");
//!
//! match store.display() {
//!     DisplayDirective::Tree(root) => println!("{} entries", root.node_count() - 1),
//!     DisplayDirective::EmptySection(_) => println!("(no configuration entries)"),
//!     DisplayDirective::Nothing => println!("nothing for {}", store.selected_app()),
//! }
//! # }
//! ```
//!
//! ## Command-Line Interface (CLI)
//!
//! The `hue-config` binary wraps this library; run `hue-config --help`.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Doc completeness: # Errors / # Panics sections are aspirational
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    // Output option structs legitimately use several bools for toggle flags
    clippy::struct_excessive_bools,
    // Renderers keep `self` for API consistency across the trait impls
    clippy::unused_self
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod model;
pub mod render;
pub mod source;
pub mod state;
pub mod store;

// Re-export main types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigError, ConfigPreset, Validatable};
pub use error::{ErrorContext, HueConfigError, OptionContext, Result};
pub use filter::{filter_config, filter_config_query, filter_node, FilterQuery};
pub use model::{AppDescriptor, ConfigNode, ConfigRoot, HueConfigSnapshot, NodeKind};
pub use render::{OutputFormat, RenderOptions, ViewRenderer};
pub use source::{AnySource, ConfigSource, FileConfigSource, HttpConfigSource, HttpSourceConfig};
pub use state::{reduce, DisplayDirective, Event, LoadStatus, SelectionController, ViewState};
pub use store::{ConfigStore, FetchOutcome, FetchTicket};
