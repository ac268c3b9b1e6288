//! Response handling and error mapping.
//!
//! # Responsibilities
//! - Define the API error taxonomy
//! - Map errors to HTTP status codes and JSON bodies
//! - Build the plain-text fallback for unmatched routes
//!
//! # Design Decisions
//! - Every handled failure is `{"error": "..."}` with a lower-case key
//! - Not-found is 404; bad input (missing fields, undecodable body) is 400
//! - The unmatched-route fallback stays plain text

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::http::body::DecodeError;

pub const ENDPOINT_NOT_FOUND: &str = "Endpoint not found";

#[derive(Debug, Error)]
pub enum ApiError {
    /// Entity absent by ID, or a filtered collection came back empty.
    #[error("{0}")]
    NotFound(&'static str),
    /// A required body field is missing or unusable.
    #[error("{0}")]
    Validation(&'static str),
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error("failed to read request body: {0}")]
    BodyRead(String),
    #[error("request body exceeds the size limit")]
    PayloadTooLarge,
    #[error("{}", ENDPOINT_NOT_FOUND)]
    EndpointNotFound,
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) | ApiError::EndpointNotFound => StatusCode::NOT_FOUND,
            ApiError::Validation(_) | ApiError::Decode(_) | ApiError::BodyRead(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Serialize)]
struct MessageBody {
    message: &'static str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            ApiError::EndpointNotFound => (
                status,
                [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                ENDPOINT_NOT_FOUND,
            )
                .into_response(),
            other => {
                if status.is_server_error() {
                    tracing::error!(error = %other, "Request failed");
                }
                (status, Json(ErrorBody { error: other.to_string() })).into_response()
            }
        }
    }
}

pub type ApiResult = Result<Response, ApiError>;

/// 200 with the record as JSON.
pub fn ok<T: Serialize>(body: T) -> ApiResult {
    Ok((StatusCode::OK, Json(body)).into_response())
}

/// 201 with the new record as JSON.
pub fn created<T: Serialize>(body: T) -> ApiResult {
    Ok((StatusCode::CREATED, Json(body)).into_response())
}

/// 200 with `{"message": "Successfully deleted"}`.
pub fn deleted() -> ApiResult {
    ok(MessageBody {
        message: "Successfully deleted",
    })
}

/// 200 with the collection, or the given not-found error when it is empty.
pub fn non_empty<T: Serialize>(items: Vec<T>, not_found: &'static str) -> ApiResult {
    if items.is_empty() {
        return Err(ApiError::NotFound(not_found));
    }
    ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_not_found_is_json() {
        let response = ApiError::NotFound("Artist not found").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_text(response).await, r#"{"error":"Artist not found"}"#);
    }

    #[tokio::test]
    async fn test_endpoint_not_found_is_plain_text() {
        let response = ApiError::EndpointNotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/plain; charset=utf-8"
        );
        assert_eq!(body_text(response).await, "Endpoint not found");
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::Validation("x").status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::BodyRead("x".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::PayloadTooLarge.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(ApiError::Internal("x".into()).status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_non_empty_rejects_empty_collections() {
        let err = non_empty(Vec::<u32>::new(), "No songs by this album found").unwrap_err();
        assert!(matches!(err, ApiError::NotFound("No songs by this album found")));

        let response = non_empty(vec![1, 2], "unused").unwrap();
        assert_eq!(body_text(response).await, "[1,2]");
    }
}
