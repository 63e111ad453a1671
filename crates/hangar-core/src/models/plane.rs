//! Plane model definition.

use serde::{Deserialize, Serialize};

use super::{CleaningStatus, FuelLevel};

/// Represents a registered aircraft.
///
/// The identifier is assigned by the store at creation and never changes;
/// `tail_number` is set once; the two enumerated fields are the only mutable
/// state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Plane {
    /// Store-assigned opaque identifier
    pub id: String,

    /// Registration mark shown to the user; secondary sort key
    pub tail_number: String,

    /// Current fuel level
    pub fuel_level: FuelLevel,

    /// Current cleaning status
    pub cleaning_status: CleaningStatus,
}
