//! Store gateway: the async facade over the document collections.
//!
//! [`Store`] bridges entity-shaped data and the SQLite-backed collections.
//! Every mutation runs the blocking query on a `spawn_blocking` task, then
//! re-reads the full collection inside the same task and broadcasts the
//! refreshed snapshot through a `tokio::sync::watch` channel. Each push
//! supersedes the prior snapshot, so subscribers only ever observe the
//! latest confirmed state; a failed mutation broadcasts nothing and leaves
//! the held snapshot untouched.
//!
//! # Usage
//!
//! ```rust,no_run
//! use hangar_core::{StoreBuilder, params::PlaneDraft};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = StoreBuilder::new().build().await?;
//!
//! let mut planes = store.planes();
//! println!("{} planes on file", planes.snapshot().len());
//!
//! let plane = PlaneDraft::new("N12345").validate().expect("valid draft");
//! store.create_plane(&plane).await?;
//!
//! // The new plane arrives through the subscription, id assigned.
//! let snapshot = planes.next().await.expect("store is alive");
//! assert_eq!(snapshot.len(), 1);
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

use tokio::{sync::watch, task};

use crate::{
    db::Database,
    error::{HangarError, Result},
    models::{Plane, Todo},
};

pub mod builder;
pub mod plane_ops;
pub mod subscription;
pub mod todo_ops;

pub use builder::StoreBuilder;
pub use subscription::{Snapshot, Subscription};

/// Gateway to the document collections.
///
/// Cheap to share via `Arc`; controllers keep a handle for issuing intents
/// and a [`Subscription`] for observing snapshots.
pub struct Store {
    pub(crate) db_path: PathBuf,
    pub(crate) planes_tx: watch::Sender<Snapshot<Plane>>,
    pub(crate) todos_tx: watch::Sender<Snapshot<Todo>>,
}

impl Store {
    /// Opens a live subscription to the plane collection.
    ///
    /// The latest confirmed snapshot is available immediately via
    /// [`Subscription::snapshot`]; every later mutation delivers a fresh one.
    pub fn planes(&self) -> Subscription<Plane> {
        Subscription::new(self.planes_tx.subscribe())
    }

    /// Opens a live subscription to the todo collection.
    pub fn todos(&self) -> Subscription<Todo> {
        Subscription::new(self.todos_tx.subscribe())
    }

    /// Re-reads both collections and pushes a snapshot for any that changed.
    ///
    /// Mutations made through this handle broadcast on their own; a live
    /// watcher sharing the database file with other processes polls this to
    /// pick up their writes. Unchanged collections push nothing.
    pub async fn sync(&self) -> Result<()> {
        let db_path = self.db_path.clone();

        let (planes, todos) = task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            Ok::<_, HangarError>((db.list_planes()?, db.list_todos()?))
        })
        .await
        .map_err(|e| HangarError::Runtime {
            message: format!("Task join error: {e}"),
        })??;

        self.planes_tx.send_if_modified(|current| {
            if **current == planes {
                false
            } else {
                *current = Arc::new(planes);
                true
            }
        });
        self.todos_tx.send_if_modified(|current| {
            if **current == todos {
                false
            } else {
                *current = Arc::new(todos);
                true
            }
        });

        Ok(())
    }
}

static SHARED: OnceLock<Arc<Store>> = OnceLock::new();

/// Installs the process-wide store handle.
///
/// The first call wins and later calls return the already-installed handle;
/// the store lives for the rest of the process with no teardown.
pub fn install(store: Store) -> Arc<Store> {
    SHARED.get_or_init(|| Arc::new(store)).clone()
}

/// Returns the process-wide store handle, if one has been installed.
pub fn shared() -> Option<Arc<Store>> {
    SHARED.get().cloned()
}
