//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a unit and a single default service inside it.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((unit, service))` - Tuple of the created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_service_with_unit(
    db: &DatabaseConnection,
) -> Result<(entity::unit::Model, entity::service::Model), DbErr> {
    let unit = crate::factory::unit::create_unit(db).await?;
    let service = crate::factory::service::create_service(db, unit.id).await?;

    Ok((unit, service))
}
