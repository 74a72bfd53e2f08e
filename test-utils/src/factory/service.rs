//! Service factory for creating test catalog entries.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test services with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let service = ServiceFactory::new(&db, unit.id)
///     .name("Corte Masculino")
///     .price_cents(4500)
///     .active(false)
///     .build()
///     .await?;
/// ```
pub struct ServiceFactory<'a> {
    db: &'a DatabaseConnection,
    unit_id: i32,
    name: String,
    price_cents: i64,
    duration_minutes: i32,
    is_active: bool,
}

impl<'a> ServiceFactory<'a> {
    /// Creates a new ServiceFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Service {id}"` where id is auto-incremented
    /// - price_cents: `5000`
    /// - duration_minutes: `30`
    /// - is_active: `true`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `unit_id` - Unit the service belongs to
    pub fn new(db: &'a DatabaseConnection, unit_id: i32) -> Self {
        Self {
            db,
            unit_id,
            name: format!("Service {}", next_id()),
            price_cents: 5000,
            duration_minutes: 30,
            is_active: true,
        }
    }

    /// Sets the service name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the price in cents.
    pub fn price_cents(mut self, price_cents: i64) -> Self {
        self.price_cents = price_cents;
        self
    }

    /// Sets the duration in minutes.
    pub fn duration_minutes(mut self, duration_minutes: i32) -> Self {
        self.duration_minutes = duration_minutes;
        self
    }

    /// Sets whether the service is active.
    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Builds and inserts the service entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::service::Model)` - Created service entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::service::Model, DbErr> {
        let now = Utc::now();

        entity::service::ActiveModel {
            id: ActiveValue::NotSet,
            unit_id: ActiveValue::Set(self.unit_id),
            name: ActiveValue::Set(self.name),
            price_cents: ActiveValue::Set(self.price_cents),
            duration_minutes: ActiveValue::Set(self.duration_minutes),
            is_active: ActiveValue::Set(self.is_active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a service with default values for the specified unit.
///
/// Shorthand for `ServiceFactory::new(db, unit_id).build().await`.
pub async fn create_service(
    db: &DatabaseConnection,
    unit_id: i32,
) -> Result<entity::service::Model, DbErr> {
    ServiceFactory::new(db, unit_id).build().await
}
