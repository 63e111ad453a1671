//! Todo model definition.

use serde::{Deserialize, Serialize};

use super::TodoStatus;

/// Represents a single todo entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    /// Store-assigned opaque identifier
    pub id: String,

    /// Task text, stored exactly as submitted and never edited
    pub text: String,

    /// Current status (`pending` until started, then `in-progress`)
    pub status: TodoStatus,

    /// Creation time in milliseconds since the Unix epoch; sole sort key
    pub created_at: i64,
}
