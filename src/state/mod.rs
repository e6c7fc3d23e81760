//! View state for the configuration browser.
//!
//! The state is one explicit [`ViewState`] value moved forward by the pure
//! [`reduce`] function:
//!
//! ```ignore
//! let state = reduce(ViewState::default(), Event::FetchStarted);
//! let state = reduce(state, Event::FetchSucceeded(Arc::new(snapshot)));
//! let state = reduce(state, Event::FilterChanged("ldap".into()));
//!
//! match state.display() {
//!     DisplayDirective::Tree(root) => render(root),
//!     DisplayDirective::EmptySection(_) => show_empty_notice(),
//!     DisplayDirective::Nothing => {}
//! }
//! ```
//!
//! - [`selection`] derives the filtered roots and selected root
//! - [`reducer`] holds the lifecycle flags and the transition function

pub mod reducer;
pub mod selection;

pub use reducer::{reduce, Event, LoadStatus, ViewState};
pub use selection::{
    initial_app, DisplayDirective, SelectionController, DEFAULT_SELECTED_APP, DESKTOP_APP,
};
