//! Plane collection queries.

use rusqlite::{params, types::Type};
use uuid::Uuid;

use crate::{
    error::{DatabaseResultExt, HangarError, Result},
    models::{CleaningStatus, FuelLevel, Plane, PlaneUpdate},
    params::NewPlane,
};

const INSERT_PLANE_SQL: &str =
    "INSERT INTO planes (id, tail_number, fuel_level, cleaning_status) VALUES (?1, ?2, ?3, ?4)";
const SELECT_PLANES_SQL: &str = "SELECT id, tail_number, fuel_level, cleaning_status FROM planes";
const DELETE_PLANE_SQL: &str = "DELETE FROM planes WHERE id = ?1";
const CHECK_PLANE_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM planes WHERE id = ?1)";

impl super::Database {
    /// Helper function to construct a Plane from a database row.
    fn build_plane_from_row(row: &rusqlite::Row) -> rusqlite::Result<Plane> {
        let fuel_str: String = row.get(2)?;
        let fuel_level = fuel_str.parse::<FuelLevel>().map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                2,
                Type::Text,
                format!("Invalid fuel level: {fuel_str}").into(),
            )
        })?;

        let cleaning_str: String = row.get(3)?;
        let cleaning_status = cleaning_str.parse::<CleaningStatus>().map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                3,
                Type::Text,
                format!("Invalid cleaning status: {cleaning_str}").into(),
            )
        })?;

        Ok(Plane {
            id: row.get(0)?,
            tail_number: row.get(1)?,
            fuel_level,
            cleaning_status,
        })
    }

    /// Appends a new plane, assigning a fresh identifier.
    pub fn create_plane(&self, plane: &NewPlane) -> Result<Plane> {
        let id = Uuid::new_v4().to_string();

        self.connection
            .execute(
                INSERT_PLANE_SQL,
                params![
                    &id,
                    &plane.tail_number,
                    plane.fuel_level.as_str(),
                    plane.cleaning_status.as_str()
                ],
            )
            .db_context("Failed to insert plane")?;

        Ok(Plane {
            id,
            tail_number: plane.tail_number.clone(),
            fuel_level: plane.fuel_level,
            cleaning_status: plane.cleaning_status,
        })
    }

    /// Reads the full plane collection.
    ///
    /// Row order is whatever the store returns; presentation re-sorts.
    pub fn list_planes(&self) -> Result<Vec<Plane>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_PLANES_SQL)
            .db_context("Failed to prepare plane query")?;

        let planes = stmt
            .query_map([], Self::build_plane_from_row)
            .db_context("Failed to query planes")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch planes")?;

        Ok(planes)
    }

    /// Merges the supplied fields into the identified plane.
    ///
    /// Only the fields present in the update are written. Fails with
    /// [`HangarError::PlaneNotFound`] when the identifier does not exist
    /// (including after a delete).
    pub fn update_plane(&self, id: &str, update: &PlaneUpdate) -> Result<()> {
        if update.is_empty() {
            let exists: bool = self
                .connection
                .query_row(CHECK_PLANE_EXISTS_SQL, params![id], |row| row.get(0))
                .db_context("Failed to check plane existence")?;
            if !exists {
                return Err(HangarError::PlaneNotFound { id: id.to_string() });
            }
            return Ok(());
        }

        let mut assignments = Vec::new();
        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(level) = update.fuel_level {
            assignments.push("fuel_level = ?");
            params_vec.push(Box::new(level.as_str().to_string()));
        }
        if let Some(status) = update.cleaning_status {
            assignments.push("cleaning_status = ?");
            params_vec.push(Box::new(status.as_str().to_string()));
        }
        params_vec.push(Box::new(id.to_string()));

        let query = format!(
            "UPDATE planes SET {} WHERE id = ?",
            assignments.join(", ")
        );

        let params_refs: Vec<&dyn rusqlite::ToSql> = params_vec.iter().map(|b| &**b).collect();
        let rows_affected = self
            .connection
            .execute(&query, &params_refs[..])
            .db_context("Failed to update plane")?;

        if rows_affected == 0 {
            return Err(HangarError::PlaneNotFound { id: id.to_string() });
        }

        Ok(())
    }

    /// Removes the identified plane. Deleting an absent id is not an error.
    pub fn delete_plane(&self, id: &str) -> Result<()> {
        self.connection
            .execute(DELETE_PLANE_SQL, params![id])
            .db_context("Failed to delete plane")?;

        Ok(())
    }
}
