//! Enumerated fields for planes and todos.
//!
//! All three enumerations are closed: parsing rejects anything outside the
//! listed values, and `as_str` returns the exact wire string stored in the
//! database and used by the original collections.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of plane fuel levels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum FuelLevel {
    /// Tanks are empty
    Empty,

    /// Fuel up to the tab markers
    #[default]
    Tabs,

    /// Slightly above the tabs
    #[serde(rename = "Tabs+")]
    TabsPlus,

    /// Tanks are full
    Full,
}

impl FromStr for FuelLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "empty" => Ok(FuelLevel::Empty),
            "tabs" => Ok(FuelLevel::Tabs),
            "tabs+" => Ok(FuelLevel::TabsPlus),
            "full" => Ok(FuelLevel::Full),
            _ => Err(format!("Invalid fuel level: {s}")),
        }
    }
}

impl FuelLevel {
    /// All fuel levels, in gauge order.
    pub const ALL: [FuelLevel; 4] = [
        FuelLevel::Empty,
        FuelLevel::Tabs,
        FuelLevel::TabsPlus,
        FuelLevel::Full,
    ];

    /// Convert to the wire/database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            FuelLevel::Empty => "Empty",
            FuelLevel::Tabs => "Tabs",
            FuelLevel::TabsPlus => "Tabs+",
            FuelLevel::Full => "Full",
        }
    }
}

/// Type-safe enumeration of plane cleaning statuses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum CleaningStatus {
    /// Needs cleaning before the next flight
    Dirty,

    /// Below standard
    #[serde(rename = "C-")]
    CMinus,

    /// Standard clean
    #[serde(rename = "C")]
    #[default]
    C,

    /// Spotless
    #[serde(rename = "C+")]
    CPlus,
}

impl FromStr for CleaningStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dirty" => Ok(CleaningStatus::Dirty),
            "c-" => Ok(CleaningStatus::CMinus),
            "c" => Ok(CleaningStatus::C),
            "c+" => Ok(CleaningStatus::CPlus),
            _ => Err(format!("Invalid cleaning status: {s}")),
        }
    }
}

impl CleaningStatus {
    /// All cleaning statuses, most urgent first.
    pub const ALL: [CleaningStatus; 4] = [
        CleaningStatus::Dirty,
        CleaningStatus::CMinus,
        CleaningStatus::C,
        CleaningStatus::CPlus,
    ];

    /// Convert to the wire/database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            CleaningStatus::Dirty => "Dirty",
            CleaningStatus::CMinus => "C-",
            CleaningStatus::C => "C",
            CleaningStatus::CPlus => "C+",
        }
    }

    /// Cleaning urgency rank used by dirty-first sorting.
    ///
    /// Lower is more urgent: `Dirty` = 0, `C-` = 1, `C` = 2, `C+` = 3.
    /// This mapping is the named, tested ranking behind the "prioritize
    /// dirty" presentation order.
    pub fn urgency(&self) -> u8 {
        match self {
            CleaningStatus::Dirty => 0,
            CleaningStatus::CMinus => 1,
            CleaningStatus::C => 2,
            CleaningStatus::CPlus => 3,
        }
    }
}

/// Type-safe enumeration of todo statuses.
///
/// The lifecycle is one-directional: a todo starts `Pending` and may advance
/// exactly once to `InProgress`. There is no completed state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TodoStatus {
    /// Waiting to be started
    #[default]
    Pending,

    /// Being worked on
    InProgress,
}

impl FromStr for TodoStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(TodoStatus::Pending),
            "in-progress" | "inprogress" | "in_progress" => Ok(TodoStatus::InProgress),
            _ => Err(format!("Invalid todo status: {s}")),
        }
    }
}

impl TodoStatus {
    /// Convert to the wire/database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            TodoStatus::Pending => "pending",
            TodoStatus::InProgress => "in-progress",
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hangar_core::models::TodoStatus;
    ///
    /// assert_eq!(TodoStatus::Pending.with_badge(), "○ Pending");
    /// assert_eq!(TodoStatus::InProgress.with_badge(), "➤ In Progress");
    /// ```
    pub fn with_badge(&self) -> &'static str {
        match self {
            TodoStatus::Pending => "○ Pending",
            TodoStatus::InProgress => "➤ In Progress",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cleaning_urgency_ranks_dirty_first() {
        assert_eq!(CleaningStatus::Dirty.urgency(), 0);
        assert_eq!(CleaningStatus::CMinus.urgency(), 1);
        assert_eq!(CleaningStatus::C.urgency(), 2);
        assert_eq!(CleaningStatus::CPlus.urgency(), 3);
    }

    #[test]
    fn cleaning_urgency_matches_all_order() {
        let ranks: Vec<u8> = CleaningStatus::ALL.iter().map(CleaningStatus::urgency).collect();
        assert_eq!(ranks, vec![0, 1, 2, 3]);
    }

    #[test]
    fn fuel_level_round_trips_through_str() {
        for level in FuelLevel::ALL {
            assert_eq!(level.as_str().parse::<FuelLevel>(), Ok(level));
        }
    }

    #[test]
    fn cleaning_status_round_trips_through_str() {
        for status in CleaningStatus::ALL {
            assert_eq!(status.as_str().parse::<CleaningStatus>(), Ok(status));
        }
    }

    #[test]
    fn parsing_is_case_insensitive() {
        assert_eq!("TABS+".parse::<FuelLevel>(), Ok(FuelLevel::TabsPlus));
        assert_eq!("dirty".parse::<CleaningStatus>(), Ok(CleaningStatus::Dirty));
        assert_eq!("In-Progress".parse::<TodoStatus>(), Ok(TodoStatus::InProgress));
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!("Sparkling".parse::<CleaningStatus>().is_err());
        assert!("Half".parse::<FuelLevel>().is_err());
        assert!("done".parse::<TodoStatus>().is_err());
    }

    #[test]
    fn serde_uses_wire_strings() {
        assert_eq!(
            serde_json::to_string(&FuelLevel::TabsPlus).expect("serialize"),
            "\"Tabs+\""
        );
        assert_eq!(
            serde_json::to_string(&CleaningStatus::CMinus).expect("serialize"),
            "\"C-\""
        );
        assert_eq!(
            serde_json::to_string(&TodoStatus::InProgress).expect("serialize"),
            "\"in-progress\""
        );
        let status: TodoStatus = serde_json::from_str("\"pending\"").expect("deserialize");
        assert_eq!(status, TodoStatus::Pending);
    }

    #[test]
    fn defaults_match_the_add_dialog() {
        assert_eq!(FuelLevel::default(), FuelLevel::Tabs);
        assert_eq!(CleaningStatus::default(), CleaningStatus::C);
        assert_eq!(TodoStatus::default(), TodoStatus::Pending);
    }
}
