//! Parameter structures for hangar operations.
//!
//! These structures carry data between the interface layer (CLI, tests) and
//! the core, without framework-specific derives. The add-plane form arrives
//! as a string-typed [`PlaneDraft`] and is validated into a typed
//! [`NewPlane`] before anything reaches the store gateway; a draft that
//! fails validation never produces a write.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::{CleaningStatus, FuelLevel, TodoStatus};

/// Shortest accepted tail number, in characters.
pub const TAIL_NUMBER_MIN: usize = 3;
/// Longest accepted tail number, in characters.
pub const TAIL_NUMBER_MAX: usize = 10;

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Name of the offending field
    pub field: &'static str,
    /// Human-readable message suitable for display next to the field
    pub message: String,
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// String-typed add-plane form data, as entered by the user.
///
/// The defaults (`Tabs`, `C`) are the canonical add-dialog defaults; the
/// controller submits exactly what the validated draft carries and applies
/// no second default set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlaneDraft {
    /// Registration mark, 3-10 characters
    pub tail_number: String,
    /// Fuel level; must name a [`FuelLevel`] variant
    pub fuel_level: String,
    /// Cleaning status; must name a [`CleaningStatus`] variant
    pub cleaning_status: String,
}

impl Default for PlaneDraft {
    fn default() -> Self {
        Self {
            tail_number: String::new(),
            fuel_level: FuelLevel::default().as_str().to_string(),
            cleaning_status: CleaningStatus::default().as_str().to_string(),
        }
    }
}

impl PlaneDraft {
    /// Draft for the given tail number with the dialog defaults.
    pub fn new(tail_number: impl Into<String>) -> Self {
        Self {
            tail_number: tail_number.into(),
            ..Self::default()
        }
    }

    /// Validate the draft into a typed [`NewPlane`].
    ///
    /// Every violation is reported, each scoped to its field; a draft with
    /// any violation produces no submission.
    pub fn validate(&self) -> Result<NewPlane, Vec<FieldError>> {
        let mut errors = Vec::new();

        let tail_len = self.tail_number.chars().count();
        if tail_len < TAIL_NUMBER_MIN {
            errors.push(FieldError {
                field: "tail_number",
                message: format!("Tail number must be at least {TAIL_NUMBER_MIN} characters."),
            });
        } else if tail_len > TAIL_NUMBER_MAX {
            errors.push(FieldError {
                field: "tail_number",
                message: format!("Tail number must be at most {TAIL_NUMBER_MAX} characters."),
            });
        }

        let fuel_level = match FuelLevel::from_str(&self.fuel_level) {
            Ok(level) => Some(level),
            Err(_) => {
                errors.push(FieldError {
                    field: "fuel_level",
                    message: format!(
                        "Invalid fuel level: {}. Must be one of 'Empty', 'Tabs', 'Tabs+', or 'Full'",
                        self.fuel_level
                    ),
                });
                None
            }
        };

        let cleaning_status = match CleaningStatus::from_str(&self.cleaning_status) {
            Ok(status) => Some(status),
            Err(_) => {
                errors.push(FieldError {
                    field: "cleaning_status",
                    message: format!(
                        "Invalid cleaning status: {}. Must be one of 'Dirty', 'C-', 'C', or 'C+'",
                        self.cleaning_status
                    ),
                });
                None
            }
        };

        match (errors.is_empty(), fuel_level, cleaning_status) {
            (true, Some(fuel_level), Some(cleaning_status)) => Ok(NewPlane {
                tail_number: self.tail_number.clone(),
                fuel_level,
                cleaning_status,
            }),
            _ => Err(errors),
        }
    }
}

/// A validated plane ready for creation. The store assigns the identifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewPlane {
    /// Registration mark
    pub tail_number: String,
    /// Initial fuel level
    pub fuel_level: FuelLevel,
    /// Initial cleaning status
    pub cleaning_status: CleaningStatus,
}

/// A todo ready for creation. The store assigns the identifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewTodo {
    /// Task text, stored as submitted
    pub text: String,
    /// Initial status; new submissions start pending
    pub status: TodoStatus,
    /// Submission time in milliseconds since the Unix epoch
    pub created_at: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_draft_produces_typed_plane() {
        let draft = PlaneDraft {
            tail_number: "N12345".to_string(),
            fuel_level: "Tabs".to_string(),
            cleaning_status: "C".to_string(),
        };

        let plane = draft.validate().expect("draft should validate");
        assert_eq!(plane.tail_number, "N12345");
        assert_eq!(plane.fuel_level, FuelLevel::Tabs);
        assert_eq!(plane.cleaning_status, CleaningStatus::C);
    }

    #[test]
    fn default_draft_carries_dialog_defaults() {
        let draft = PlaneDraft::new("N12345");
        let plane = draft.validate().expect("draft should validate");
        assert_eq!(plane.fuel_level, FuelLevel::Tabs);
        assert_eq!(plane.cleaning_status, CleaningStatus::C);
    }

    #[test]
    fn short_tail_number_is_rejected() {
        let errors = PlaneDraft::new("N1").validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "tail_number");
        assert!(errors[0].message.contains("at least 3"));
    }

    #[test]
    fn long_tail_number_is_rejected() {
        let errors = PlaneDraft::new("N0123456789").validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "tail_number");
        assert!(errors[0].message.contains("at most 10"));
    }

    #[test]
    fn boundary_lengths_are_accepted() {
        assert!(PlaneDraft::new("N12").validate().is_ok());
        assert!(PlaneDraft::new("N123456789").validate().is_ok());
    }

    #[test]
    fn unknown_fuel_level_is_rejected() {
        let draft = PlaneDraft {
            fuel_level: "Half".to_string(),
            ..PlaneDraft::new("N12345")
        };

        let errors = draft.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "fuel_level");
        assert!(errors[0].message.contains("Half"));
    }

    #[test]
    fn unknown_cleaning_status_is_rejected() {
        let draft = PlaneDraft {
            cleaning_status: "Sparkling".to_string(),
            ..PlaneDraft::new("N12345")
        };

        let errors = draft.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "cleaning_status");
    }

    #[test]
    fn all_violations_are_reported_together() {
        let draft = PlaneDraft {
            tail_number: "N1".to_string(),
            fuel_level: "Half".to_string(),
            cleaning_status: "Sparkling".to_string(),
        };

        let errors = draft.validate().unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["tail_number", "fuel_level", "cleaning_status"]);
    }
}
