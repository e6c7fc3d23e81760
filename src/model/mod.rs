//! Configuration tree data model.
//!
//! A [`HueConfigSnapshot`] holds the applications a server knows about and
//! one [`ConfigRoot`] tree per application. Trees are made of [`ConfigNode`]s,
//! each either a value-carrying leaf or a group of further nodes:
//!
//! ```ignore
//! let snapshot = HueConfigSnapshot::from_json(&body)?;
//! if let Some(root) = snapshot.root_for("desktop") {
//!     println!("{} nodes under desktop", root.node_count());
//! }
//! ```

mod node;
mod snapshot;

pub use node::*;
pub use snapshot::*;
