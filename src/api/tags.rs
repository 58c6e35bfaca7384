//! Resource tagging handlers.
use crate::api::error::{ApiError, store_fault};
use crate::api::types::{
    ListTagsForResourceRequest, ListTagsForResourceResponse, TagResourceRequest,
    UntagResourceRequest,
};
use crate::app::AppState;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

/// Applies all tags or none.
///
/// # Errors
/// - `ResourceNotFound` (404) when the identifier names no topic.
/// - `TagLimitExceeded` (400) when the merged set would pass the quota.
/// - `InvalidParameter` (400) for an empty or oversized key or value.
pub async fn tag_resource(
    State(state): State<AppState>,
    Json(body): Json<TagResourceRequest>,
) -> Result<StatusCode, ApiError> {
    state
        .store
        .tag_resource(&body.resource_arn, body.tags)
        .await
        .map_err(|err| store_fault("failed to tag resource", err))?;
    Ok(StatusCode::OK)
}

/// Removes the given keys; absent keys are ignored.
///
/// # Errors
/// - `ResourceNotFound` (404) when the identifier names no topic.
pub async fn untag_resource(
    State(state): State<AppState>,
    Json(body): Json<UntagResourceRequest>,
) -> Result<StatusCode, ApiError> {
    state
        .store
        .untag_resource(&body.resource_arn, &body.tag_keys)
        .await
        .map_err(|err| store_fault("failed to untag resource", err))?;
    Ok(StatusCode::OK)
}

/// # Errors
/// - `ResourceNotFound` (404) when the identifier names no topic.
pub async fn list_tags_for_resource(
    State(state): State<AppState>,
    Json(body): Json<ListTagsForResourceRequest>,
) -> Result<Json<ListTagsForResourceResponse>, ApiError> {
    let tags = state
        .store
        .list_tags_for_resource(&body.resource_arn)
        .await
        .map_err(|err| store_fault("failed to list tags", err))?;
    Ok(Json(ListTagsForResourceResponse { tags }))
}
