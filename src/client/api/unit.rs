use crate::{client::model::error::ApiError, model::unit::UnitDto};

use super::helper::{get, parse_response, send_request};

/// Get every unit, oldest first
pub async fn get_units() -> Result<Vec<UnitDto>, ApiError> {
    let response = send_request(get("/api/units")).await?;
    parse_response(response).await
}
