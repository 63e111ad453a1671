//! Plane operations for the Store.

use std::sync::Arc;

use tokio::task;

use super::Store;
use crate::{
    db::Database,
    error::{HangarError, Result},
    models::PlaneUpdate,
    params::NewPlane,
};

impl Store {
    /// Appends a new plane to the collection.
    ///
    /// Resolves once the write is acknowledged. The fresh identifier is not
    /// returned; it becomes visible through the next subscription snapshot.
    pub async fn create_plane(&self, plane: &NewPlane) -> Result<()> {
        let db_path = self.db_path.clone();
        let plane = plane.clone();

        let snapshot = task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.create_plane(&plane)?;
            db.list_planes()
        })
        .await
        .map_err(|e| HangarError::Runtime {
            message: format!("Task join error: {e}"),
        })??;

        self.planes_tx.send_replace(Arc::new(snapshot));
        Ok(())
    }

    /// Merges the supplied fields into the identified plane.
    pub async fn update_plane(&self, id: &str, update: PlaneUpdate) -> Result<()> {
        let db_path = self.db_path.clone();
        let id = id.to_string();

        let snapshot = task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.update_plane(&id, &update)?;
            db.list_planes()
        })
        .await
        .map_err(|e| HangarError::Runtime {
            message: format!("Task join error: {e}"),
        })??;

        self.planes_tx.send_replace(Arc::new(snapshot));
        Ok(())
    }

    /// Removes the identified plane. Subsequent snapshots omit it.
    pub async fn delete_plane(&self, id: &str) -> Result<()> {
        let db_path = self.db_path.clone();
        let id = id.to_string();

        let snapshot = task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.delete_plane(&id)?;
            db.list_planes()
        })
        .await
        .map_err(|e| HangarError::Runtime {
            message: format!("Task join error: {e}"),
        })??;

        self.planes_tx.send_replace(Arc::new(snapshot));
        Ok(())
    }
}
