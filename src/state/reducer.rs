//! Explicit view state and its pure update function.

use super::selection::{initial_app, DisplayDirective, SelectionController, DEFAULT_SELECTED_APP};
use crate::model::{AppDescriptor, ConfigRoot, HueConfigSnapshot};
use std::sync::Arc;

/// Inputs that move the view state forward.
#[derive(Debug, Clone)]
pub enum Event {
    /// A fetch was issued.
    FetchStarted,
    /// The outstanding fetch produced a snapshot.
    FetchSucceeded(Arc<HueConfigSnapshot>),
    /// The outstanding fetch failed with a user-visible message.
    FetchFailed(String),
    /// The outstanding fetch was dropped before producing an outcome.
    FetchCancelled,
    /// The user chose an application.
    AppSelected(String),
    /// The user edited the filter text.
    FilterChanged(String),
}

/// Coarse lifecycle phase derived from the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    /// Nothing fetched yet.
    Idle,
    /// A fetch is outstanding.
    Loading,
    /// A snapshot is held.
    Loaded,
    /// The last fetch failed; terminal until the next fetch.
    Errored,
}

impl LoadStatus {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Loaded => "loaded",
            Self::Errored => "errored",
        }
    }
}

impl std::fmt::Display for LoadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything the presentation layer reads, as one value.
///
/// The snapshot sits behind an [`Arc`] and is never mutated; a new fetch
/// replaces it wholesale.
#[derive(Debug, Clone)]
pub struct ViewState {
    default_app: String,
    loading: bool,
    error: Option<String>,
    snapshot: Option<Arc<HueConfigSnapshot>>,
    selection: SelectionController,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(DEFAULT_SELECTED_APP)
    }
}

impl ViewState {
    /// Create an idle state that will fall back to `default_app` after a load.
    pub fn new(default_app: impl Into<String>) -> Self {
        let default_app = default_app.into();
        Self {
            selection: SelectionController::new(default_app.clone()),
            default_app,
            loading: false,
            error: None,
            snapshot: None,
        }
    }

    /// Apply one event, returning the next state.
    #[must_use]
    pub fn apply(mut self, event: Event) -> Self {
        match event {
            Event::FetchStarted => {
                self.loading = true;
                self.error = None;
            }
            Event::FetchSucceeded(snapshot) => {
                let app = initial_app(&self.default_app, &snapshot);
                self.selection = SelectionController::new(app);
                self.selection.rebuild(Some(snapshot.as_ref()));
                self.snapshot = Some(snapshot);
                self.loading = false;
                self.error = None;
            }
            Event::FetchFailed(message) => {
                self.snapshot = None;
                self.selection.clear();
                self.loading = false;
                self.error = Some(message);
            }
            Event::FetchCancelled => {
                self.loading = false;
            }
            Event::AppSelected(app) => {
                self.selection.select_app(app);
            }
            Event::FilterChanged(text) => {
                self.selection.set_filter_text(text, self.snapshot.as_deref());
            }
        }
        self
    }

    #[must_use]
    pub const fn status(&self) -> LoadStatus {
        if self.loading {
            LoadStatus::Loading
        } else if self.error.is_some() {
            LoadStatus::Errored
        } else if self.snapshot.is_some() {
            LoadStatus::Loaded
        } else {
            LoadStatus::Idle
        }
    }

    #[must_use]
    pub const fn loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn snapshot(&self) -> Option<&Arc<HueConfigSnapshot>> {
        self.snapshot.as_ref()
    }

    /// Applications of the current snapshot; empty before a load.
    #[must_use]
    pub fn apps(&self) -> &[AppDescriptor] {
        self.snapshot
            .as_ref()
            .map(|s| s.apps.as_slice())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn conf_dir(&self) -> Option<&str> {
        self.snapshot.as_ref().map(|s| s.conf_dir.as_str())
    }

    #[must_use]
    pub fn default_app(&self) -> &str {
        &self.default_app
    }

    #[must_use]
    pub fn selected_app(&self) -> &str {
        self.selection.selected_app()
    }

    #[must_use]
    pub fn filter_text(&self) -> &str {
        self.selection.filter_text()
    }

    #[must_use]
    pub fn filtered_config(&self) -> &[ConfigRoot] {
        self.selection.filtered_config()
    }

    #[must_use]
    pub fn selected_config(&self) -> Option<&ConfigRoot> {
        self.selection.selected_config()
    }

    #[must_use]
    pub fn display(&self) -> DisplayDirective<'_> {
        self.selection.display()
    }
}

/// Pure transition function: `reduce(state, event)` is the next state.
#[must_use]
pub fn reduce(state: ViewState, event: Event) -> ViewState {
    state.apply(event)
}
