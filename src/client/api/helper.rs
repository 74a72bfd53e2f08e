use crate::{client::model::error::ApiError, model::api::ErrorDto};
use reqwasm::http::{Request, Response};
use serde::de::DeserializeOwned;

fn is_success(status: u64) -> bool {
    (200..300).contains(&status)
}

/// Builds an `ApiError` from a failed response, preferring the server's `ErrorDto` message
async fn error_from_response(status: u64, response: Response) -> ApiError {
    let message = match response.json::<ErrorDto>().await {
        Ok(error_dto) => error_dto.error,
        Err(_) => response
            .text()
            .await
            .unwrap_or_else(|_| "Erro desconhecido".to_string()),
    };

    ApiError { status, message }
}

/// Parse a JSON body from a successful response
pub async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status() as u64;

    if !is_success(status) {
        return Err(error_from_response(status, response).await);
    }

    response.json::<T>().await.map_err(|e| ApiError {
        status: 500,
        message: format!("Failed to parse response: {}", e),
    })
}

/// Parse a response that carries no body on success (204 No Content)
pub async fn parse_empty_response(response: Response) -> Result<(), ApiError> {
    let status = response.status() as u64;

    if is_success(status) {
        Ok(())
    } else {
        Err(error_from_response(status, response).await)
    }
}

pub fn get(url: &str) -> Request {
    Request::get(url)
}

/// Create a POST request with a JSON content type
pub fn post(url: &str) -> Request {
    Request::post(url).header("Content-Type", "application/json")
}

/// Create a PUT request with a JSON content type
pub fn put(url: &str) -> Request {
    Request::put(url).header("Content-Type", "application/json")
}

pub fn delete(url: &str) -> Request {
    Request::delete(url)
}

/// Send a request, mapping transport failures to `ApiError`
pub async fn send_request(request: Request) -> Result<Response, ApiError> {
    request.send().await.map_err(|e| ApiError {
        status: 500,
        message: format!("Failed to send request: {}", e),
    })
}

pub fn serialize_json<T: serde::Serialize>(payload: &T) -> Result<String, ApiError> {
    serde_json::to_string(payload).map_err(|e| ApiError {
        status: 500,
        message: format!("Failed to serialize request: {}", e),
    })
}
