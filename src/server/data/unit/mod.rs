//! Unit data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::unit::{CreateUnitParam, Unit};

#[cfg(test)]
mod test;

/// Repository providing database operations for unit management.
pub struct UnitRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UnitRepository<'a> {
    /// Creates a new UnitRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new unit.
    ///
    /// # Arguments
    /// - `param` - Create parameters containing the unit name
    ///
    /// # Returns
    /// - `Ok(Unit)` - The created unit with generated ID
    /// - `Err(DbErr)` - Database error during insert operation
    pub async fn create(&self, param: CreateUnitParam) -> Result<Unit, DbErr> {
        let entity = entity::unit::ActiveModel {
            name: ActiveValue::Set(param.name),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Unit::from_entity(entity))
    }

    /// Gets every unit ordered by ID, oldest first.
    ///
    /// # Returns
    /// - `Ok(Vec<Unit>)` - All units
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Unit>, DbErr> {
        let entities = entity::prelude::Unit::find()
            .order_by_asc(entity::unit::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Unit::from_entity).collect())
    }

    /// Checks whether a unit with the given ID exists.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Unit::find()
            .filter(entity::unit::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Counts all units.
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Unit::find().count(self.db).await
    }
}
