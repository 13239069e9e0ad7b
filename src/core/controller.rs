use std::sync::Arc;
use axum::http::StatusCode;
use axum::response::Json;
use serde::Serialize;
use crate::books::repository::BookRepository;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;

pub(crate) const STATUS_SUCCESS: &str = "success";
pub(crate) const STATUS_FAIL: &str = "fail";

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) config: Configuration,
    pub(crate) book_repository: Arc<dyn BookRepository>,
}

impl AppState {
    pub fn new(env_name: &str, book_repository: Arc<dyn BookRepository>) -> AppState {
        AppState {
            config: Configuration::new(env_name),
            book_repository,
        }
    }
}

// Response envelope shared by every operation: a status discriminator plus
// an optional human-readable message and an optional data payload.
#[derive(Debug, Serialize)]
pub(crate) struct ApiResponse<T> {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn data(data: T) -> Self {
        ApiResponse {
            status: STATUS_SUCCESS,
            message: None,
            data: Some(data),
        }
    }

    pub fn message_with_data(message: &str, data: T) -> Self {
        ApiResponse {
            status: STATUS_SUCCESS,
            message: Some(message.to_string()),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    pub fn message(message: &str) -> Self {
        ApiResponse {
            status: STATUS_SUCCESS,
            message: Some(message.to_string()),
            data: None,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ApiFailure {
    pub status: &'static str,
    pub message: String,
}

impl ApiFailure {
    pub fn new(message: String) -> Self {
        ApiFailure {
            status: STATUS_FAIL,
            message,
        }
    }
}

pub(crate) type ServerError = (StatusCode, Json<ApiFailure>);

pub fn json_to_server_error(err: serde_json::Error) -> ServerError {
    (StatusCode::BAD_REQUEST, Json(ApiFailure::new(format!("{}", err))))
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        let status = match err {
            CommandError::Validation { .. } => StatusCode::BAD_REQUEST,
            CommandError::Serialization { .. } => StatusCode::BAD_REQUEST,
            CommandError::NotFound { .. } => StatusCode::NOT_FOUND,
            CommandError::DuplicateKey { .. } => StatusCode::CONFLICT,
            CommandError::Runtime { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            CommandError::Other { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(ApiFailure::new(err.public_message())))
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use crate::core::command::CommandError;
    use crate::core::controller::{ApiFailure, ApiResponse, ServerError};

    #[tokio::test]
    async fn test_should_map_validation_error_to_bad_request() {
        let err = CommandError::Validation { message: "name is required".to_string(), reason_code: None };
        let (status, body) = ServerError::from(err);
        assert_eq!(StatusCode::BAD_REQUEST, status);
        assert_eq!("fail", body.status);
        assert_eq!("name is required", body.message.as_str());
    }

    #[tokio::test]
    async fn test_should_map_not_found_error() {
        let err = CommandError::NotFound { message: "book not found".to_string() };
        let (status, _) = ServerError::from(err);
        assert_eq!(StatusCode::NOT_FOUND, status);
    }

    #[tokio::test]
    async fn test_should_map_runtime_error_to_internal() {
        let err = CommandError::Runtime { message: "test".to_string(), reason_code: None };
        let (status, _) = ServerError::from(err);
        assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, status);
    }

    #[tokio::test]
    async fn test_should_serialize_success_envelope() {
        let res = ApiResponse::message_with_data("book added", "payload");
        let json = serde_json::to_value(&res).expect("should serialize");
        assert_eq!("success", json["status"]);
        assert_eq!("book added", json["message"]);
        assert_eq!("payload", json["data"]);
    }

    #[tokio::test]
    async fn test_should_skip_empty_envelope_fields() {
        let res = ApiResponse::message("book removed");
        let json = serde_json::to_value(&res).expect("should serialize");
        assert!(json.get("data").is_none());

        let json = serde_json::to_value(ApiFailure::new("oops".to_string())).expect("should serialize");
        assert_eq!("fail", json["status"]);
        assert_eq!("oops", json["message"]);
    }
}
