//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults so tests only spell out the
//! fields they actually assert on. Each entity has a `Factory` struct for
//! customization and a `create_*` convenience function for the default case.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let unit = factory::create_unit(&db).await?;
//! let service = factory::create_service(&db, unit.id).await?;
//!
//! let service = factory::service::ServiceFactory::new(&db, unit.id)
//!     .name("Barba")
//!     .price_cents(3000)
//!     .duration_minutes(20)
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod service;
pub mod unit;

pub use helpers::create_service_with_unit;
pub use service::create_service;
pub use unit::create_unit;
