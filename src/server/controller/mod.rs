//! HTTP request handlers.
//!
//! Controllers extract request data, call into the service layer, and convert the
//! resulting domain models into DTOs. Every handler is annotated with `utoipa::path`
//! so the router can publish an OpenAPI document for it.

pub mod service;
pub mod unit;
