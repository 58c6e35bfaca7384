//! API error types and helpers.
//!
//! # Purpose and responsibility
//! Centralizes fault response construction so every operation reports the
//! emulated service's fault codes with a uniform shape.
//!
//! # Key invariants and assumptions
//! - Validation and quota faults are 400, existence faults are 404.
//! - Only unexpected store failures become 500; their details are logged, not
//!   returned.
use crate::api::types::ErrorResponse;
use crate::store::StoreError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;

pub const INVALID_TOPIC_NAME_MESSAGE: &str = "Invalid parameter: Topic Name";

/// Structured API error returned by handlers.
///
/// `status` must match the semantics of `body.code`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorResponse,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status, Json(self.body)).into_response()
    }
}

fn api_error(status: StatusCode, code: &str, message: &str) -> ApiError {
    ApiError {
        status,
        body: ErrorResponse {
            code: code.to_string(),
            message: message.to_string(),
            request_id: None,
        },
    }
}

/// 400 for malformed input: bad names, bad tokens, bad tag or permission fields.
pub fn api_invalid_parameter(message: &str) -> ApiError {
    api_error(StatusCode::BAD_REQUEST, "InvalidParameter", message)
}

/// 404 for topic operations against an unknown identifier.
pub fn api_not_found(message: &str) -> ApiError {
    api_error(StatusCode::NOT_FOUND, "NotFound", message)
}

/// 404 for tagging operations against an unknown identifier.
pub fn api_resource_not_found() -> ApiError {
    api_error(
        StatusCode::NOT_FOUND,
        "ResourceNotFound",
        "Resource does not exist",
    )
}

pub fn api_tag_limit_exceeded() -> ApiError {
    api_error(
        StatusCode::BAD_REQUEST,
        "TagLimitExceeded",
        "Could not complete request: tag quota of per resource exceeded",
    )
}

/// Build a 500 from a store error, logging the details server-side.
pub fn api_internal(message: &str, err: &StoreError) -> ApiError {
    tracing::error!(error = ?err, "topic store error");
    api_error(StatusCode::INTERNAL_SERVER_ERROR, "InternalError", message)
}

/// Translate a store fault into its client-facing response.
///
/// `context` only surfaces for unexpected failures.
pub fn store_fault(context: &str, err: StoreError) -> ApiError {
    match err {
        StoreError::InvalidName(reason) => {
            tracing::debug!(%reason, "rejected topic name");
            api_invalid_parameter(INVALID_TOPIC_NAME_MESSAGE)
        }
        StoreError::InvalidParameter(message) => {
            api_invalid_parameter(&format!("Invalid parameter: {message}"))
        }
        StoreError::InvalidNextToken(_) => api_invalid_parameter("Invalid parameter: NextToken"),
        StoreError::NotFound(_) => api_not_found("Topic does not exist"),
        StoreError::ResourceNotFound => api_resource_not_found(),
        StoreError::TagQuotaExceeded => api_tag_limit_exceeded(),
        err @ StoreError::Unexpected(_) => api_internal(context, &err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::InvalidTopicName;

    #[test]
    fn api_error_helpers_build_expected_codes() {
        let invalid = api_invalid_parameter("bad");
        assert_eq!(invalid.status, StatusCode::BAD_REQUEST);
        assert_eq!(invalid.body.code, "InvalidParameter");

        let not_found = api_not_found("missing");
        assert_eq!(not_found.status, StatusCode::NOT_FOUND);
        assert_eq!(not_found.body.code, "NotFound");

        let resource = api_resource_not_found();
        assert_eq!(resource.status, StatusCode::NOT_FOUND);
        assert_eq!(resource.body.code, "ResourceNotFound");
        assert_eq!(resource.body.message, "Resource does not exist");

        let quota = api_tag_limit_exceeded();
        assert_eq!(quota.status, StatusCode::BAD_REQUEST);
        assert_eq!(quota.body.code, "TagLimitExceeded");
    }

    #[test]
    fn store_faults_map_to_distinct_codes() {
        let cases = [
            (
                StoreError::InvalidName(InvalidTopicName::Empty),
                StatusCode::BAD_REQUEST,
                "InvalidParameter",
            ),
            (
                StoreError::InvalidNextToken("x".into()),
                StatusCode::BAD_REQUEST,
                "InvalidParameter",
            ),
            (
                StoreError::NotFound("arn".into()),
                StatusCode::NOT_FOUND,
                "NotFound",
            ),
            (
                StoreError::ResourceNotFound,
                StatusCode::NOT_FOUND,
                "ResourceNotFound",
            ),
            (
                StoreError::TagQuotaExceeded,
                StatusCode::BAD_REQUEST,
                "TagLimitExceeded",
            ),
        ];
        for (err, status, code) in cases {
            let api = store_fault("unused", err);
            assert_eq!(api.status, status);
            assert_eq!(api.body.code, code);
        }
    }

    #[test]
    fn unexpected_store_error_is_internal() {
        let api = store_fault(
            "storage failed",
            StoreError::Unexpected(anyhow::anyhow!("boom")),
        );
        assert_eq!(api.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api.body.code, "InternalError");
        assert_eq!(api.body.message, "storage failed");
    }
}
