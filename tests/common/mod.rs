#![allow(dead_code)]

use axum::Json;
use axum::extract::{Extension, State};
use axum::response::IntoResponse;
use topicplane::api::error::ApiError;
use topicplane::api::topics;
use topicplane::api::types::{CreateTopicRequest, ListTopicsRequest, ListTopicsResponse};
use topicplane::app::{AppState, RequestContext};
use topicplane::config::EmulatorConfig;
use topicplane::model::Tag;

pub const ACCOUNT_ID: &str = "123456789012";

pub fn app_state() -> AppState {
    AppState::in_memory(EmulatorConfig::default())
}

pub fn context(region: &str) -> RequestContext {
    RequestContext::new(ACCOUNT_ID, region)
}

pub fn tag(key: &str, value: &str) -> Tag {
    Tag::new(key, value)
}

pub async fn create_topic(
    state: &AppState,
    ctx: &RequestContext,
    name: &str,
    tags: Vec<Tag>,
) -> String {
    topics::create_topic(
        State(state.clone()),
        Extension(ctx.clone()),
        Json(CreateTopicRequest {
            name: name.to_string(),
            attributes: Default::default(),
            tags,
        }),
    )
    .await
    .expect("create topic")
    .0
    .topic_arn
}

pub async fn list_topics(
    state: &AppState,
    ctx: &RequestContext,
    next_token: Option<String>,
) -> ListTopicsResponse {
    topics::list_topics(
        State(state.clone()),
        Extension(ctx.clone()),
        Json(ListTopicsRequest { next_token }),
    )
    .await
    .expect("list topics")
    .0
}

pub async fn read_json(err: ApiError) -> serde_json::Value {
    let response = err.into_response();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    serde_json::from_slice(&bytes).expect("json")
}
