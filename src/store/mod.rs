use crate::model::{
    InvalidTopicName, NewTopic, PermissionStatement, Tag, TagError, Topic, TopicArn,
    TopicAttributes,
};
use async_trait::async_trait;
use thiserror::Error;

pub mod memory;
pub mod pagination;

#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Maximum number of topics returned by one `list_topics` call.
    pub page_size: usize,
}

#[derive(Debug, Clone)]
pub struct TopicPage {
    pub items: Vec<TopicArn>,
    /// Present only while more topics remain past this page.
    pub next_token: Option<String>,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid topic name: {0}")]
    InvalidName(#[from] InvalidTopicName),
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("Topic does not exist: {0}")]
    NotFound(String),
    #[error("Resource does not exist")]
    ResourceNotFound,
    #[error("Could not complete request: tag quota of per resource exceeded")]
    TagQuotaExceeded,
    #[error("invalid next token: {0}")]
    InvalidNextToken(String),
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl From<TagError> for StoreError {
    fn from(err: TagError) -> Self {
        match err {
            TagError::QuotaExceeded => StoreError::TagQuotaExceeded,
            other => StoreError::InvalidParameter(other.to_string()),
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Topic registry contract.
///
/// Identifier arguments are the caller's raw text; an identifier that does not
/// parse is treated exactly like one that names no topic.
#[async_trait]
pub trait TopicStore: Send + Sync {
    /// Idempotent: an existing topic's identifier is returned and the request's
    /// attributes and tags are ignored.
    async fn create_topic(&self, topic: NewTopic) -> StoreResult<TopicArn>;
    /// Deleting an absent topic succeeds.
    async fn delete_topic(&self, arn: &str) -> StoreResult<()>;
    async fn get_topic(&self, arn: &str) -> StoreResult<Topic>;
    async fn list_topics(&self, region: &str, next_token: Option<&str>) -> StoreResult<TopicPage>;
    async fn topic_count(&self, region: &str) -> StoreResult<usize>;

    async fn get_topic_attributes(&self, arn: &str) -> StoreResult<TopicAttributes>;
    async fn set_topic_attribute(&self, arn: &str, name: &str, value: &str) -> StoreResult<()>;

    async fn tag_resource(&self, arn: &str, tags: Vec<Tag>) -> StoreResult<()>;
    async fn untag_resource(&self, arn: &str, keys: &[String]) -> StoreResult<()>;
    async fn list_tags_for_resource(&self, arn: &str) -> StoreResult<Vec<Tag>>;

    async fn add_permission(&self, arn: &str, statement: PermissionStatement) -> StoreResult<()>;
    /// Removing an absent label succeeds.
    async fn remove_permission(&self, arn: &str, label: &str) -> StoreResult<()>;
    async fn list_permissions(&self, arn: &str) -> StoreResult<Vec<PermissionStatement>>;

    /// Drops every topic in every region, ending the emulation session.
    async fn reset(&self) -> StoreResult<()>;
    fn backend_name(&self) -> &'static str;
}
