use crate::{
    client::model::error::ApiError,
    model::service::{ServiceDto, ServicePayloadDto},
};

use super::helper::{
    delete, get, parse_empty_response, parse_response, post, put, send_request, serialize_json,
};

/// Get the services of a unit in creation order
pub async fn get_services(unit_id: i32) -> Result<Vec<ServiceDto>, ApiError> {
    let url = format!("/api/units/{}/services", unit_id);

    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

/// Create a service in a unit
pub async fn create_service(
    unit_id: i32,
    payload: &ServicePayloadDto,
) -> Result<ServiceDto, ApiError> {
    let url = format!("/api/units/{}/services", unit_id);
    let body = serialize_json(payload)?;

    let response = send_request(post(&url).body(body)).await?;
    parse_response(response).await
}

/// Replace the fields of a service
pub async fn update_service(
    unit_id: i32,
    service_id: i32,
    payload: &ServicePayloadDto,
) -> Result<ServiceDto, ApiError> {
    let url = format!("/api/units/{}/services/{}", unit_id, service_id);
    let body = serialize_json(payload)?;

    let response = send_request(put(&url).body(body)).await?;
    parse_response(response).await
}

/// Delete a service
pub async fn delete_service(unit_id: i32, service_id: i32) -> Result<(), ApiError> {
    let url = format!("/api/units/{}/services/{}", unit_id, service_id);

    let response = send_request(delete(&url)).await?;
    parse_empty_response(response).await
}
