//! Database repository layer for all domain entities.
//!
//! Repositories handle database operations (CRUD) for each domain in the application.
//! They use SeaORM entity models internally and return server models to maintain
//! separation between the data layer and business logic layer.

pub mod service;
pub mod unit;
