//! Display implementations for domain models.
//!
//! Separated from the model definitions to keep data and presentation
//! apart. Planes format as markdown cards; todos format as list rows with
//! a status badge.

use std::fmt;

use super::datetime::LocalMillis;
use crate::models::{CleaningStatus, FuelLevel, Plane, Todo, TodoStatus};

impl fmt::Display for FuelLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for CleaningStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for TodoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {}", self.tail_number)?;
        writeln!(f)?;
        writeln!(f, "- Fuel Level: {}", self.fuel_level)?;
        writeln!(f, "- Cleaning Status: {}", self.cleaning_status)?;
        writeln!(f, "- Id: `{}`", self.id)?;
        writeln!(f)?;

        Ok(())
    }
}

impl fmt::Display for Todo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- {} {}", self.status.with_badge(), self.text)?;
        writeln!(
            f,
            "  added {} (id: `{}`)",
            LocalMillis(self.created_at),
            self.id
        )?;

        Ok(())
    }
}
