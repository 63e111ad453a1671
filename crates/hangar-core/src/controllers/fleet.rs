//! Fleet list controller.

use std::cmp::Ordering;
use std::sync::Arc;

use log::error;

use crate::{
    models::{CleaningStatus, FuelLevel, Plane, PlaneUpdate},
    params::{FieldError, PlaneDraft},
    store::{Store, Subscription},
};

/// Derives the presented fleet order from a snapshot.
///
/// With `prioritize_dirty` the primary key is [`CleaningStatus::urgency`]
/// (dirtiest first) and the tie-break is the case-insensitive tail number;
/// without it the tail number is the sole key. Pure: the snapshot is never
/// mutated.
pub fn sorted_planes(planes: &[Plane], prioritize_dirty: bool) -> Vec<Plane> {
    let mut sorted = planes.to_vec();
    sorted.sort_by(|a, b| {
        if prioritize_dirty {
            let by_urgency = a.cleaning_status.urgency().cmp(&b.cleaning_status.urgency());
            if by_urgency != Ordering::Equal {
                return by_urgency;
            }
        }
        a.tail_number
            .to_lowercase()
            .cmp(&b.tail_number.to_lowercase())
    });
    sorted
}

/// Holds the live plane list and the two view toggles, and dispatches fleet
/// intents to the store gateway.
///
/// Both toggles start `false` and are never persisted.
pub struct FleetController {
    store: Arc<Store>,
    subscription: Subscription<Plane>,
    prioritize_dirty: bool,
    list_view: bool,
}

impl FleetController {
    /// Creates a controller subscribed to the plane collection.
    pub fn new(store: Arc<Store>) -> Self {
        let subscription = store.planes();
        Self {
            store,
            subscription,
            prioritize_dirty: false,
            list_view: false,
        }
    }

    /// The planes in presentation order, derived from the latest snapshot.
    pub fn planes(&self) -> Vec<Plane> {
        sorted_planes(&self.subscription.snapshot(), self.prioritize_dirty)
    }

    /// Whether dirty-first ordering is on.
    pub fn prioritize_dirty(&self) -> bool {
        self.prioritize_dirty
    }

    /// Toggles dirty-first ordering.
    pub fn set_prioritize_dirty(&mut self, on: bool) {
        self.prioritize_dirty = on;
    }

    /// Whether the compact list rendering is on.
    pub fn list_view(&self) -> bool {
        self.list_view
    }

    /// Toggles the compact list rendering.
    pub fn set_list_view(&mut self, on: bool) {
        self.list_view = on;
    }

    /// Waits for the next snapshot. Returns `false` once the store is gone.
    pub async fn refresh(&mut self) -> bool {
        self.subscription.next().await.is_some()
    }

    /// Validates the draft and submits the new plane.
    ///
    /// Validation failures block the submission and are returned per field;
    /// nothing reaches the gateway. A store failure is logged and otherwise
    /// invisible here: the list changes only via the next snapshot.
    pub async fn add(&self, draft: &PlaneDraft) -> Result<(), Vec<FieldError>> {
        let plane = draft.validate()?;
        if let Err(err) = self.store.create_plane(&plane).await {
            error!("Failed to add plane: {err}");
        }
        Ok(())
    }

    /// Updates one plane's fuel level. The update carries only that field.
    pub async fn set_fuel_level(&self, id: &str, level: FuelLevel) {
        if let Err(err) = self
            .store
            .update_plane(id, PlaneUpdate::fuel_level(level))
            .await
        {
            error!("Failed to update fuel level for plane {id}: {err}");
        }
    }

    /// Updates one plane's cleaning status. The update carries only that field.
    pub async fn set_cleaning_status(&self, id: &str, status: CleaningStatus) {
        if let Err(err) = self
            .store
            .update_plane(id, PlaneUpdate::cleaning_status(status))
            .await
        {
            error!("Failed to update cleaning status for plane {id}: {err}");
        }
    }

    /// Deletes one plane.
    pub async fn remove(&self, id: &str) {
        if let Err(err) = self.store.delete_plane(id).await {
            error!("Failed to delete plane {id}: {err}");
        }
    }
}
