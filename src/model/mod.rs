//! Data transfer objects shared by the client and the server.
//!
//! Everything in here is serialized over the HTTP API, so it compiles for both the
//! `web` and `server` feature sets. Server-only derives (OpenAPI schemas) are gated
//! behind the `server` feature.

pub mod api;
pub mod service;
pub mod unit;
