//! List view controllers.
//!
//! A controller holds a live subscription to one collection plus any view
//! state, derives the presented order from the latest confirmed snapshot,
//! and forwards user intents to the store gateway. Intents are
//! fire-and-forget: a failed write is logged and the visible list only ever
//! changes when the next snapshot arrives.

pub mod fleet;
pub mod todo;

pub use fleet::{sorted_planes, FleetController};
pub use todo::{sorted_todos, TodoController};
