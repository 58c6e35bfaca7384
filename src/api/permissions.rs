//! Permission statement handlers.
//!
//! Statements are recorded against the topic as given; no policy is evaluated.
use crate::api::error::{ApiError, store_fault};
use crate::api::types::{AddPermissionRequest, RemovePermissionRequest};
use crate::app::AppState;
use crate::model::PermissionStatement;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

/// # Errors
/// - `NotFound` (404) when the identifier names no topic.
/// - `InvalidParameter` (400) for an empty label, principal list, or action
///   list, or a label already on the topic.
pub async fn add_permission(
    State(state): State<AppState>,
    Json(body): Json<AddPermissionRequest>,
) -> Result<StatusCode, ApiError> {
    let statement = PermissionStatement {
        label: body.label,
        principals: body.aws_account_id,
        actions: body.action_name,
    };
    state
        .store
        .add_permission(&body.topic_arn, statement)
        .await
        .map_err(|err| store_fault("failed to add permission", err))?;
    Ok(StatusCode::OK)
}

/// Removing an absent label succeeds.
///
/// # Errors
/// - `NotFound` (404) when the identifier names no topic.
pub async fn remove_permission(
    State(state): State<AppState>,
    Json(body): Json<RemovePermissionRequest>,
) -> Result<StatusCode, ApiError> {
    state
        .store
        .remove_permission(&body.topic_arn, &body.label)
        .await
        .map_err(|err| store_fault("failed to remove permission", err))?;
    Ok(StatusCode::OK)
}
