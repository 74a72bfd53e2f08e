use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        unit::{CreateUnitDto, UnitDto},
    },
    server::{
        error::AppError, model::unit::CreateUnitParam, service::unit::UnitService,
        state::AppState,
    },
};

/// Tag for grouping unit endpoints in OpenAPI documentation
pub static UNIT_TAG: &str = "unit";

/// List all units.
///
/// Returns every salon location, oldest first. The client picks the active unit
/// from this list.
///
/// # Returns
/// - `200 OK` - List of units
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/units",
    tag = UNIT_TAG,
    responses(
        (status = 200, description = "Successfully retrieved units", body = Vec<UnitDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_units(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let units = UnitService::new(&state.db).list().await?;

    let units: Vec<UnitDto> = units.into_iter().map(|u| u.into_dto()).collect();

    Ok((StatusCode::OK, Json(units)))
}

/// Create a new unit.
///
/// # Returns
/// - `201 Created` - Successfully created unit
/// - `400 Bad Request` - Blank unit name
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/units",
    tag = UNIT_TAG,
    request_body = CreateUnitDto,
    responses(
        (status = 201, description = "Successfully created unit", body = UnitDto),
        (status = 400, description = "Invalid unit data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_unit(
    State(state): State<AppState>,
    Json(payload): Json<CreateUnitDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = CreateUnitParam::from_dto(payload);
    let unit = UnitService::new(&state.db).create(param).await?;

    Ok((StatusCode::CREATED, Json(unit.into_dto())))
}
