use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        service::{create_service, delete_service, get_services, update_service},
        unit::{create_unit, get_units},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(info(
    title = "Salonboard API",
    description = "Service catalog management for salon units"
))]
struct ApiDoc;

/// Builds the API router and mounts Swagger UI at `/api/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(get_units, create_unit))
        .routes(routes!(get_services, create_service))
        .routes(routes!(update_service, delete_service))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
