//! Topic data model.
//!
//! # Purpose
//! Re-exports the topic identifier, name validation, attribute and tag stores,
//! and permission statements used by the registry and the API boundary.
mod arn;
mod attributes;
mod name;
mod permission;
mod tags;
mod topic;

pub use arn::{ARN_PREFIX, InvalidTopicArn, TopicArn};
pub use attributes::{
    DELIVERY_POLICY, DISPLAY_NAME, EFFECTIVE_DELIVERY_POLICY, OWNER, POLICY,
    SUBSCRIPTIONS_CONFIRMED, SUBSCRIPTIONS_DELETED, SUBSCRIPTIONS_PENDING, TOPIC_ARN,
    TopicAttributes, default_effective_delivery_policy, default_topic_policy,
};
pub use name::{InvalidTopicName, MAX_TOPIC_NAME_LEN, validate_topic_name};
pub use permission::PermissionStatement;
pub use tags::{
    MAX_TAG_KEY_LEN, MAX_TAG_VALUE_LEN, MAX_TAGS_PER_RESOURCE, Tag, TagError, TagSet,
};
pub use topic::{NewTopic, Topic};
