//! Partial-update request types.
//!
//! An update carries only the fields the caller wants to change; the store
//! merges exactly those fields and leaves everything else untouched.

use serde::{Deserialize, Serialize};

use super::{CleaningStatus, FuelLevel, TodoStatus};

/// Partial update for a plane's mutable fields.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlaneUpdate {
    /// New fuel level, if it should change
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuel_level: Option<FuelLevel>,

    /// New cleaning status, if it should change
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cleaning_status: Option<CleaningStatus>,
}

impl PlaneUpdate {
    /// Update carrying only a fuel level change.
    pub fn fuel_level(level: FuelLevel) -> Self {
        Self {
            fuel_level: Some(level),
            cleaning_status: None,
        }
    }

    /// Update carrying only a cleaning status change.
    pub fn cleaning_status(status: CleaningStatus) -> Self {
        Self {
            fuel_level: None,
            cleaning_status: Some(status),
        }
    }

    /// Whether the update carries no fields at all.
    pub fn is_empty(&self) -> bool {
        self.fuel_level.is_none() && self.cleaning_status.is_none()
    }
}

/// Partial update for a todo. Status is the only mutable field.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoUpdate {
    /// New status, if it should change
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TodoStatus>,
}

impl TodoUpdate {
    /// Update carrying only a status change.
    pub fn status(status: TodoStatus) -> Self {
        Self {
            status: Some(status),
        }
    }

    /// Whether the update carries no fields at all.
    pub fn is_empty(&self) -> bool {
        self.status.is_none()
    }
}
