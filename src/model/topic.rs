//! Topic aggregate.
//!
//! # Purpose
//! Couples a topic's identity with its attribute store, tag store, and
//! permission statements so they are created and dropped together.
use crate::model::{PermissionStatement, Tag, TagError, TagSet, TopicArn, TopicAttributes};
use serde::Serialize;
use std::collections::BTreeMap;

/// Creation request as seen by the registry: the caller's resolved account and
/// region plus the optional attributes and tags of a `CreateTopic` call.
#[derive(Debug, Clone, Default)]
pub struct NewTopic {
    pub region: String,
    pub account_id: String,
    pub name: String,
    pub attributes: BTreeMap<String, String>,
    pub tags: Vec<Tag>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Topic {
    pub arn: TopicArn,
    pub attributes: TopicAttributes,
    pub tags: TagSet,
    pub permissions: Vec<PermissionStatement>,
}

impl Topic {
    /// Builds a topic with seeded attributes and the initial tags.
    ///
    /// Fails without side effects when the initial tags are invalid or exceed
    /// the per-resource quota.
    pub fn new(
        arn: TopicArn,
        attributes: BTreeMap<String, String>,
        tags: Vec<Tag>,
    ) -> Result<Self, TagError> {
        let mut tag_set = TagSet::new();
        tag_set.apply(tags)?;
        let attributes = TopicAttributes::initialize(&arn, attributes);
        Ok(Self {
            arn,
            attributes,
            tags: tag_set,
            permissions: Vec::new(),
        })
    }

    pub fn permission(&self, label: &str) -> Option<&PermissionStatement> {
        self.permissions.iter().find(|statement| statement.label == label)
    }
}
