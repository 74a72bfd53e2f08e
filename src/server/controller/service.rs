use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        service::{ServiceDto, ServicePayloadDto},
    },
    server::{error::AppError, service::catalog::CatalogService, state::AppState},
};

/// Tag for grouping service catalog endpoints in OpenAPI documentation
pub static SERVICE_TAG: &str = "service";

/// Get the service catalog of a unit.
///
/// Returns every service of the unit in the order it was added.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `unit_id` - Unit whose catalog is requested
///
/// # Returns
/// - `200 OK` - Services of the unit, possibly empty
/// - `404 Not Found` - Unit doesn't exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/units/{unit_id}/services",
    tag = SERVICE_TAG,
    params(
        ("unit_id" = i32, Path, description = "Unit ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved services", body = Vec<ServiceDto>),
        (status = 404, description = "Unit not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_services(
    State(state): State<AppState>,
    Path(unit_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let services = CatalogService::new(&state.db).list(unit_id).await?;

    let services: Vec<ServiceDto> = services.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(services)))
}

/// Create a new service in a unit.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `unit_id` - Unit receiving the service
/// - `payload` - Name, price, duration and active flag
///
/// # Returns
/// - `201 Created` - Successfully created service
/// - `400 Bad Request` - Payload breaks a catalog rule
/// - `404 Not Found` - Unit doesn't exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/units/{unit_id}/services",
    tag = SERVICE_TAG,
    params(
        ("unit_id" = i32, Path, description = "Unit ID")
    ),
    request_body = ServicePayloadDto,
    responses(
        (status = 201, description = "Successfully created service", body = ServiceDto),
        (status = 400, description = "Invalid service data", body = ErrorDto),
        (status = 404, description = "Unit not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_service(
    State(state): State<AppState>,
    Path(unit_id): Path<i32>,
    Json(payload): Json<ServicePayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = CatalogService::new(&state.db)
        .create(unit_id, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(service.into_dto())))
}

/// Update a service of a unit.
///
/// Replaces name, price, duration and active flag. The service must belong to the
/// unit in the path.
///
/// # Returns
/// - `200 OK` - Successfully updated service
/// - `400 Bad Request` - Payload breaks a catalog rule
/// - `404 Not Found` - Service not found in the unit
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/units/{unit_id}/services/{service_id}",
    tag = SERVICE_TAG,
    params(
        ("unit_id" = i32, Path, description = "Unit ID"),
        ("service_id" = i32, Path, description = "Service ID")
    ),
    request_body = ServicePayloadDto,
    responses(
        (status = 200, description = "Successfully updated service", body = ServiceDto),
        (status = 400, description = "Invalid service data", body = ErrorDto),
        (status = 404, description = "Service not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_service(
    State(state): State<AppState>,
    Path((unit_id, service_id)): Path<(i32, i32)>,
    Json(payload): Json<ServicePayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = CatalogService::new(&state.db)
        .update(unit_id, service_id, payload)
        .await?;

    Ok((StatusCode::OK, Json(service.into_dto())))
}

/// Delete a service of a unit.
///
/// # Returns
/// - `204 No Content` - Successfully deleted service
/// - `404 Not Found` - Service not found in the unit
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/units/{unit_id}/services/{service_id}",
    tag = SERVICE_TAG,
    params(
        ("unit_id" = i32, Path, description = "Unit ID"),
        ("service_id" = i32, Path, description = "Service ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted service"),
        (status = 404, description = "Service not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_service(
    State(state): State<AppState>,
    Path((unit_id, service_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    CatalogService::new(&state.db)
        .delete(unit_id, service_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
