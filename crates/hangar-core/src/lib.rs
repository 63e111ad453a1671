//! Core library for the Hangar fleet and todo tracking application.
//!
//! This crate provides the domain models, the store gateway over the
//! document collections, the list view controllers, and the display
//! formatting the CLI renders.
//!
//! # Data Flow
//!
//! All state lives in the document store; the application never mutates a
//! list it holds. An intent goes controller → store gateway → write; the
//! store then broadcasts the refreshed collection snapshot and every live
//! subscription observes it:
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────┐
//! │ Presentation │───▶│ Controllers  │───▶│ Store        │
//! │ (display/,   │    │ (fleet/todo) │    │ (db/ + push  │
//! │  hangar-cli) │◀───│   snapshots  │◀───│  snapshots)  │
//! └──────────────┘    └──────────────┘    └──────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use hangar_core::{FleetController, StoreBuilder, params::PlaneDraft};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = std::sync::Arc::new(
//!     StoreBuilder::new()
//!         .with_database_path(Some("fleet.db"))
//!         .build()
//!         .await?,
//! );
//!
//! let controller = FleetController::new(store);
//! if let Err(errors) = controller.add(&PlaneDraft::new("N12345")).await {
//!     for error in errors {
//!         eprintln!("{error}");
//!     }
//! }
//!
//! for plane in controller.planes() {
//!     println!("{}", plane.tail_number);
//! }
//! # Ok(())
//! # }
//! ```

pub mod controllers;
pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod store;

// Re-export commonly used types
pub use controllers::{sorted_planes, sorted_todos, FleetController, TodoController};
pub use display::{FleetView, LocalMillis, TodoView};
pub use error::{HangarError, Result};
pub use models::{CleaningStatus, FuelLevel, Plane, PlaneUpdate, Todo, TodoStatus, TodoUpdate};
pub use params::{FieldError, NewPlane, NewTodo, PlaneDraft};
pub use store::{Snapshot, Store, StoreBuilder, Subscription};
