//! Display formatting for the fleet and todo views.
//!
//! Domain models implement [`std::fmt::Display`] directly (in
//! [`models`]) and the view wrappers in [`collections`] format whole
//! snapshots, including the empty-state placeholders. All output is
//! markdown for the terminal renderer; the same data renders as cards or
//! as a compact list depending on the fleet view toggle.

pub mod collections;
pub mod datetime;
pub mod models;

pub use collections::{FleetView, TodoView};
pub use datetime::LocalMillis;
