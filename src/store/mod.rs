//! Fetch lifecycle for configuration snapshots.
//!
//! [`ConfigStore`] owns the [`ViewState`] and runs loads through a two-phase
//! protocol:
//!
//! 1. [`ConfigStore::begin_fetch`] marks the store as loading and hands out a
//!    [`FetchTicket`]. While that ticket is outstanding further calls are
//!    ignored.
//! 2. [`ConfigStore::complete_fetch`] applies the single outcome for that
//!    ticket. Outcomes carrying any other ticket are dropped as stale.
//!
//! [`ConfigStore::fetch`] composes both around the source's await point. If
//! the returned future is dropped before the source answers, the outstanding
//! ticket is cancelled and `loading` goes back to false.

use crate::error::Result;
use crate::model::{AppDescriptor, ConfigRoot, HueConfigSnapshot};
use crate::source::ConfigSource;
use crate::state::{reduce, DisplayDirective, Event, LoadStatus, ViewState};
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Proof that a fetch was started; needed to complete or cancel it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
}

impl FetchTicket {
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }
}

/// What a fetch attempt did to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// A snapshot was installed.
    Loaded { apps: usize, roots: usize },
    /// The source failed; the message is now the store's error.
    Failed(String),
    /// Another fetch was outstanding, nothing happened.
    AlreadyInFlight,
    /// The ticket was not the outstanding one, the result was discarded.
    Stale,
}

impl FetchOutcome {
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded { .. })
    }
}

/// Holds the current snapshot, load status and selection.
#[derive(Debug, Default)]
pub struct ConfigStore {
    state: ViewState,
    generation: u64,
    in_flight: Option<u64>,
    last_loaded_at: Option<DateTime<Utc>>,
}

impl ConfigStore {
    /// Create a store that falls back to `default_app` after a load.
    pub fn new(default_app: impl Into<String>) -> Self {
        Self {
            state: ViewState::new(default_app),
            ..Self::default()
        }
    }

    /// Start a fetch, or return `None` if one is already outstanding.
    pub fn begin_fetch(&mut self) -> Option<FetchTicket> {
        if self.in_flight.is_some() {
            tracing::debug!("Fetch already in flight, ignoring request");
            return None;
        }
        self.generation += 1;
        self.in_flight = Some(self.generation);
        self.dispatch(Event::FetchStarted);
        Some(FetchTicket {
            generation: self.generation,
        })
    }

    /// Apply the outcome of the fetch identified by `ticket`.
    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<HueConfigSnapshot>,
    ) -> FetchOutcome {
        if self.in_flight != Some(ticket.generation) {
            tracing::debug!(
                "Discarding result of stale fetch #{}",
                ticket.generation
            );
            return FetchOutcome::Stale;
        }
        self.in_flight = None;

        match result {
            Ok(snapshot) => {
                if let Err(e) = snapshot.check_unique_roots() {
                    tracing::warn!("{}", e);
                }
                let outcome = FetchOutcome::Loaded {
                    apps: snapshot.apps.len(),
                    roots: snapshot.config.len(),
                };
                tracing::info!(
                    "Loaded configuration: {} apps, {} roots, {} nodes",
                    snapshot.apps.len(),
                    snapshot.config.len(),
                    snapshot.node_count()
                );
                self.last_loaded_at = Some(Utc::now());
                self.dispatch(Event::FetchSucceeded(Arc::new(snapshot)));
                outcome
            }
            Err(e) => {
                let message = e.user_message();
                tracing::warn!("Failed to load configuration: {}", message);
                self.dispatch(Event::FetchFailed(message.clone()));
                FetchOutcome::Failed(message)
            }
        }
    }

    /// Abandon the fetch identified by `ticket`. Returns false if it was not
    /// the outstanding one.
    pub fn cancel_fetch(&mut self, ticket: FetchTicket) -> bool {
        if self.in_flight != Some(ticket.generation) {
            return false;
        }
        tracing::debug!("Fetch #{} cancelled", ticket.generation);
        self.in_flight = None;
        self.dispatch(Event::FetchCancelled);
        true
    }

    /// Load a snapshot from `source`.
    pub async fn fetch<S: ConfigSource>(&mut self, source: &S) -> FetchOutcome {
        let Some(ticket) = self.begin_fetch() else {
            return FetchOutcome::AlreadyInFlight;
        };
        tracing::debug!(
            "Fetching configuration from {} source at {}",
            source.name(),
            source.location()
        );

        let guard = InFlight {
            store: self,
            ticket,
            armed: true,
        };
        let result = source.fetch().await;
        guard.complete(result)
    }

    /// Whether a fetch is outstanding.
    #[must_use]
    pub const fn is_fetching(&self) -> bool {
        self.in_flight.is_some()
    }

    #[must_use]
    pub const fn state(&self) -> &ViewState {
        &self.state
    }

    #[must_use]
    pub const fn status(&self) -> LoadStatus {
        self.state.status()
    }

    #[must_use]
    pub const fn loading(&self) -> bool {
        self.state.loading()
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.state.error()
    }

    #[must_use]
    pub fn snapshot(&self) -> Option<&Arc<HueConfigSnapshot>> {
        self.state.snapshot()
    }

    #[must_use]
    pub fn apps(&self) -> &[AppDescriptor] {
        self.state.apps()
    }

    #[must_use]
    pub fn conf_dir(&self) -> Option<&str> {
        self.state.conf_dir()
    }

    #[must_use]
    pub fn selected_app(&self) -> &str {
        self.state.selected_app()
    }

    #[must_use]
    pub fn filter_text(&self) -> &str {
        self.state.filter_text()
    }

    #[must_use]
    pub fn filtered_config(&self) -> &[ConfigRoot] {
        self.state.filtered_config()
    }

    #[must_use]
    pub fn selected_config(&self) -> Option<&ConfigRoot> {
        self.state.selected_config()
    }

    #[must_use]
    pub fn display(&self) -> DisplayDirective<'_> {
        self.state.display()
    }

    /// When the current snapshot was installed.
    #[must_use]
    pub const fn last_loaded_at(&self) -> Option<DateTime<Utc>> {
        self.last_loaded_at
    }

    pub fn set_selected_app(&mut self, app: impl Into<String>) {
        self.dispatch(Event::AppSelected(app.into()));
    }

    pub fn set_filter_text(&mut self, text: impl Into<String>) {
        self.dispatch(Event::FilterChanged(text.into()));
    }

    fn dispatch(&mut self, event: Event) {
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, event);
    }
}

/// Cancels the outstanding ticket unless the fetch completed.
struct InFlight<'a> {
    store: &'a mut ConfigStore,
    ticket: FetchTicket,
    armed: bool,
}

impl InFlight<'_> {
    fn complete(mut self, result: Result<HueConfigSnapshot>) -> FetchOutcome {
        self.armed = false;
        self.store.complete_fetch(self.ticket, result)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.armed {
            self.store.cancel_fetch(self.ticket);
        }
    }
}
