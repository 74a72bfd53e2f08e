//! Service layer for business logic and orchestration.
//!
//! This module sits between the controller (API) layer and the data (repository) layer.
//! It enforces the catalog rules: payload validation and the rule that a service can only
//! be read or changed through the unit that owns it.

pub mod catalog;
pub mod unit;
