//! View wrappers for displaying whole snapshots.
//!
//! These newtype wrappers format a collection in presentation order and
//! handle the empty case with the view's placeholder. The fleet view has
//! two renderings behind its `list_view` toggle: cards (the default) and a
//! compact table.

use std::fmt;

use crate::models::{Plane, Todo};

/// Formats the fleet view: plane cards, or a compact table when
/// `list_view` is set.
///
/// The planes are expected in presentation order already (the controller
/// sorts them); an empty fleet renders the add-a-plane placeholder.
pub struct FleetView {
    pub planes: Vec<Plane>,
    pub list_view: bool,
}

impl FleetView {
    /// Wraps an ordered plane list for display.
    pub fn new(planes: Vec<Plane>, list_view: bool) -> Self {
        Self { planes, list_view }
    }

    /// Check if the view is empty.
    pub fn is_empty(&self) -> bool {
        self.planes.is_empty()
    }

    /// Number of planes in the view.
    pub fn len(&self) -> usize {
        self.planes.len()
    }
}

impl fmt::Display for FleetView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.planes.is_empty() {
            writeln!(f, "No planes added.")?;
            writeln!(f)?;
            writeln!(f, "Add a plane to get started and manage your fleet.")?;
            return Ok(());
        }

        if self.list_view {
            writeln!(f, "| Tail Number | Fuel | Cleaning | Id |")?;
            writeln!(f, "|---|---|---|---|")?;
            for plane in &self.planes {
                writeln!(
                    f,
                    "| {} | {} | {} | `{}` |",
                    plane.tail_number, plane.fuel_level, plane.cleaning_status, plane.id
                )?;
            }
        } else {
            for plane in &self.planes {
                write!(f, "{plane}")?;
            }
        }

        Ok(())
    }
}

/// Formats the todo view: one row per todo, oldest first.
pub struct TodoView(pub Vec<Todo>);

impl TodoView {
    /// Check if the view is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of todos in the view.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for TodoView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "Your todo list is empty.")?;
            writeln!(f)?;
            writeln!(f, "Add a task to get started!")?;
            return Ok(());
        }

        for todo in &self.0 {
            write!(f, "{todo}")?;
        }

        Ok(())
    }
}
