//! Topic lifecycle and attribute handlers.
//!
//! # Purpose
//! Implements CreateTopic, DeleteTopic, ListTopics, GetTopicAttributes, and
//! SetTopicAttributes for the caller's resolved account and region.
use crate::api::error::{ApiError, store_fault};
use crate::api::types::{
    CreateTopicRequest, CreateTopicResponse, DeleteTopicRequest, GetTopicAttributesRequest,
    GetTopicAttributesResponse, ListTopicsRequest, ListTopicsResponse, SetTopicAttributesRequest,
    TopicEntry,
};
use crate::app::{AppState, RequestContext};
use crate::model::NewTopic;
use axum::Json;
use axum::extract::{Extension, State};
use axum::http::StatusCode;

/// Creates a topic in the caller's region, or returns the existing one.
///
/// # Errors
/// - `InvalidParameter` (400) for a bad name or invalid initial tags.
/// - `TagLimitExceeded` (400) when the initial tags exceed the quota.
pub async fn create_topic(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    Json(body): Json<CreateTopicRequest>,
) -> Result<Json<CreateTopicResponse>, ApiError> {
    let topic = NewTopic {
        region: ctx.region,
        account_id: ctx.account_id,
        name: body.name,
        attributes: body.attributes,
        tags: body.tags,
    };
    let arn = state
        .store
        .create_topic(topic)
        .await
        .map_err(|err| store_fault("failed to create topic", err))?;
    Ok(Json(CreateTopicResponse {
        topic_arn: arn.to_string(),
    }))
}

/// Deletes a topic. Unknown or unparsable identifiers succeed.
///
/// # Errors
/// - Only `InternalError` on an unexpected store failure.
pub async fn delete_topic(
    State(state): State<AppState>,
    Json(body): Json<DeleteTopicRequest>,
) -> Result<StatusCode, ApiError> {
    state
        .store
        .delete_topic(&body.topic_arn)
        .await
        .map_err(|err| store_fault("failed to delete topic", err))?;
    Ok(StatusCode::OK)
}

/// Lists one page of the caller's region, in creation order.
///
/// # Errors
/// - `InvalidParameter` (400) for a garbled or out-of-range `NextToken`.
pub async fn list_topics(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    Json(body): Json<ListTopicsRequest>,
) -> Result<Json<ListTopicsResponse>, ApiError> {
    let page = state
        .store
        .list_topics(&ctx.region, body.next_token.as_deref())
        .await
        .map_err(|err| store_fault("failed to list topics", err))?;
    Ok(Json(ListTopicsResponse {
        topics: page
            .items
            .into_iter()
            .map(|arn| TopicEntry {
                topic_arn: arn.to_string(),
            })
            .collect(),
        next_token: page.next_token,
    }))
}

/// # Errors
/// - `NotFound` (404) when the identifier names no topic.
pub async fn get_topic_attributes(
    State(state): State<AppState>,
    Json(body): Json<GetTopicAttributesRequest>,
) -> Result<Json<GetTopicAttributesResponse>, ApiError> {
    let attributes = state
        .store
        .get_topic_attributes(&body.topic_arn)
        .await
        .map_err(|err| store_fault("failed to fetch topic attributes", err))?;
    Ok(Json(GetTopicAttributesResponse {
        attributes: attributes.get_all().clone(),
    }))
}

/// Overwrites one attribute with the given text, stored verbatim.
///
/// # Errors
/// - `InvalidParameter` (400) for an empty attribute name.
/// - `NotFound` (404) when the identifier names no topic.
pub async fn set_topic_attributes(
    State(state): State<AppState>,
    Json(body): Json<SetTopicAttributesRequest>,
) -> Result<StatusCode, ApiError> {
    state
        .store
        .set_topic_attribute(&body.topic_arn, &body.attribute_name, &body.attribute_value)
        .await
        .map_err(|err| store_fault("failed to set topic attribute", err))?;
    Ok(StatusCode::OK)
}
