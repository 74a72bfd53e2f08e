//! Server-side domain models and operation parameters.
//!
//! These models sit between the data layer and the controllers: repositories convert
//! entity models into them at the infrastructure boundary, and controllers convert
//! them into DTOs before responding.

pub mod service;
pub mod unit;
