//! Unit factory for creating test salon locations.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test units with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let unit = UnitFactory::new(&db).name("Centro").build().await?;
/// ```
pub struct UnitFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
}

impl<'a> UnitFactory<'a> {
    /// Creates a new UnitFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Unit {id}"` where id is auto-incremented
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Unit {}", next_id()),
        }
    }

    /// Sets the unit name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the unit entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::unit::Model)` - Created unit entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::unit::Model, DbErr> {
        entity::unit::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a unit with default values.
///
/// Shorthand for `UnitFactory::new(db).build().await`.
pub async fn create_unit(db: &DatabaseConnection) -> Result<entity::unit::Model, DbErr> {
    UnitFactory::new(db).build().await
}
