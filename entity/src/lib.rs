//! SeaORM entity models for the salonboard database.
//!
//! Each module mirrors one table created by the `migration` crate. The `prelude`
//! re-exports the entity types under their table names for terser queries.

pub mod prelude;

pub mod service;
pub mod unit;
