//! Service data repository for database operations.
//!
//! This module provides the `ServiceRepository` for managing the service catalog of each
//! unit. It handles creation, updates, queries, and deletion with conversion between
//! entity models and server models at the infrastructure boundary.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::service::{CreateServiceParam, Service, UpdateServiceParam};

#[cfg(test)]
mod test;

/// Repository providing database operations for the service catalog.
pub struct ServiceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServiceRepository<'a> {
    /// Creates a new ServiceRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new service inside a unit.
    ///
    /// # Arguments
    /// - `param` - Create parameters containing the unit ID and field values
    ///
    /// # Returns
    /// - `Ok(Service)` - The created service with generated ID
    /// - `Err(DbErr)` - Database error during insert, including a foreign key
    ///   violation when the unit does not exist
    pub async fn create(&self, param: CreateServiceParam) -> Result<Service, DbErr> {
        let now = Utc::now();

        let entity = entity::service::ActiveModel {
            unit_id: ActiveValue::Set(param.unit_id),
            name: ActiveValue::Set(param.fields.name),
            price_cents: ActiveValue::Set(param.fields.price_cents),
            duration_minutes: ActiveValue::Set(param.fields.duration_minutes),
            is_active: ActiveValue::Set(param.fields.is_active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Service::from_entity(entity))
    }

    /// Gets every service of a unit.
    ///
    /// Services are ordered by ID so the catalog keeps the order in which entries
    /// were added.
    ///
    /// # Arguments
    /// - `unit_id` - Unit whose catalog is listed
    ///
    /// # Returns
    /// - `Ok(Vec<Service>)` - Services of the unit, possibly empty
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_unit(&self, unit_id: i32) -> Result<Vec<Service>, DbErr> {
        let entities = entity::prelude::Service::find()
            .filter(entity::service::Column::UnitId.eq(unit_id))
            .order_by_asc(entity::service::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Service::from_entity).collect())
    }

    /// Updates every editable field of a service and bumps `updated_at`.
    ///
    /// # Arguments
    /// - `param` - Update parameters containing the service ID and new field values
    ///
    /// # Returns
    /// - `Ok(Service)` - The updated service
    /// - `Err(DbErr::RecordNotFound)` - No service exists with the specified ID
    /// - `Err(DbErr)` - Other database error during update operation
    pub async fn update(&self, param: UpdateServiceParam) -> Result<Service, DbErr> {
        let service = entity::prelude::Service::find_by_id(param.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Service with id {} not found",
                param.id
            )))?;

        let mut active_model: entity::service::ActiveModel = service.into();
        active_model.name = ActiveValue::Set(param.fields.name);
        active_model.price_cents = ActiveValue::Set(param.fields.price_cents);
        active_model.duration_minutes = ActiveValue::Set(param.fields.duration_minutes);
        active_model.is_active = ActiveValue::Set(param.fields.is_active);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Service::from_entity(entity))
    }

    /// Deletes a service.
    ///
    /// # Returns
    /// - `Ok(())` - Service deleted successfully (or didn't exist)
    /// - `Err(DbErr)` - Database error during delete operation
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Service::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Checks if a service exists and belongs to the specified unit.
    ///
    /// Used to reject updates and deletions addressed through the wrong unit.
    ///
    /// # Returns
    /// - `Ok(true)` - Service exists and belongs to the unit
    /// - `Ok(false)` - Service doesn't exist or belongs to a different unit
    /// - `Err(DbErr)` - Database error during query
    pub async fn exists_in_unit(&self, id: i32, unit_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Service::find()
            .filter(entity::service::Column::Id.eq(id))
            .filter(entity::service::Column::UnitId.eq(unit_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
