//! Per-resource tag store.
//!
//! # Purpose
//! Keeps a resource's tags in insertion order and enforces the per-resource
//! quota.
//!
//! # Key invariants
//! - Keys are unique; re-tagging a key overwrites its value in place.
//! - New keys are appended in the order given.
//! - A tagging call that would push the distinct key count past
//!   `MAX_TAGS_PER_RESOURCE` changes nothing. The merged size is computed
//!   before the first mutation.
//! - Removing an absent key is a no-op.
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

pub const MAX_TAGS_PER_RESOURCE: usize = 50;
pub const MAX_TAG_KEY_LEN: usize = 128;
pub const MAX_TAG_VALUE_LEN: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tag {
    pub key: String,
    pub value: String,
}

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TagError {
    #[error("Could not complete request: tag quota of per resource exceeded")]
    QuotaExceeded,
    #[error("tag key must be 1 to {MAX_TAG_KEY_LEN} characters: {0:?}")]
    InvalidKey(String),
    #[error("tag value for key {0:?} exceeds {MAX_TAG_VALUE_LEN} characters")]
    InvalidValue(String),
}

/// Deserializing goes through `apply`, so decoded sets obey the same key
/// uniqueness and quota rules as tagged ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<Tag>", try_from = "Vec<Tag>")]
pub struct TagSet(Vec<Tag>);

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks key and value lengths for a batch of incoming tags.
    pub fn validate(tags: &[Tag]) -> Result<(), TagError> {
        for tag in tags {
            let key_len = tag.key.chars().count();
            if key_len == 0 || key_len > MAX_TAG_KEY_LEN {
                return Err(TagError::InvalidKey(tag.key.clone()));
            }
            if tag.value.chars().count() > MAX_TAG_VALUE_LEN {
                return Err(TagError::InvalidValue(tag.key.clone()));
            }
        }
        Ok(())
    }

    /// Whether applying `incoming` would leave more than `MAX_TAGS_PER_RESOURCE`
    /// distinct keys. Stops at the first key past the limit.
    pub fn exceeds_quota(&self, incoming: &[Tag]) -> bool {
        let existing: HashSet<&str> = self.0.iter().map(|tag| tag.key.as_str()).collect();
        let mut added: HashSet<&str> = HashSet::new();
        for tag in incoming {
            if !existing.contains(tag.key.as_str())
                && added.insert(tag.key.as_str())
                && existing.len() + added.len() > MAX_TAGS_PER_RESOURCE
            {
                return true;
            }
        }
        false
    }

    pub fn apply(&mut self, incoming: Vec<Tag>) -> Result<(), TagError> {
        Self::validate(&incoming)?;
        if self.exceeds_quota(&incoming) {
            return Err(TagError::QuotaExceeded);
        }
        for tag in incoming {
            match self.position(&tag.key) {
                Some(index) => self.0[index].value = tag.value,
                None => self.0.push(tag),
            }
        }
        Ok(())
    }

    pub fn remove<S: AsRef<str>>(&mut self, keys: &[S]) {
        self.0
            .retain(|tag| !keys.iter().any(|key| key.as_ref() == tag.key));
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.position(key).map(|index| self.0[index].value.as_str())
    }

    pub fn list(&self) -> &[Tag] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.0.iter().position(|tag| tag.key == key)
    }
}

impl TryFrom<Vec<Tag>> for TagSet {
    type Error = TagError;

    fn try_from(tags: Vec<Tag>) -> Result<Self, Self::Error> {
        let mut set = Self::new();
        set.apply(tags)?;
        Ok(set)
    }
}

impl From<TagSet> for Vec<Tag> {
    fn from(set: TagSet) -> Self {
        set.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(range: std::ops::Range<usize>) -> Vec<Tag> {
        range
            .map(|i| Tag::new(format!("tag_key_{i}"), format!("tag_value_{i}")))
            .collect()
    }

    #[test]
    fn retag_updates_in_place_and_appends_new_keys() {
        let mut tags = TagSet::new();
        tags.apply(vec![Tag::new("tag_key_1", "tag_value_1")])
            .expect("tag");
        tags.apply(vec![Tag::new("tag_key_2", "tag_value_2")])
            .expect("tag");
        tags.apply(vec![Tag::new("tag_key_1", "tag_value_X")])
            .expect("retag");
        assert_eq!(
            tags.list(),
            &[
                Tag::new("tag_key_1", "tag_value_X"),
                Tag::new("tag_key_2", "tag_value_2"),
            ]
        );
    }

    #[test]
    fn quota_breach_leaves_set_untouched() {
        let mut tags = TagSet::new();
        tags.apply(vec![Tag::new("tag_key_1", "tag_value_X")])
            .expect("tag");
        let before = tags.clone();

        let err = tags.apply(numbered(0..51)).expect_err("quota");
        assert_eq!(err, TagError::QuotaExceeded);
        assert_eq!(tags, before);
        assert_eq!(tags.get("tag_key_1"), Some("tag_value_X"));
    }

    #[test]
    fn quota_counts_distinct_keys_only() {
        let mut tags = TagSet::new();
        tags.apply(numbered(0..49)).expect("49 tags");
        // 0..49 overlap fully; only tag_key_49 is new, bringing the total to 50.
        tags.apply(numbered(0..50)).expect("50 tags");
        assert_eq!(tags.len(), MAX_TAGS_PER_RESOURCE);
        assert_eq!(
            tags.apply(vec![Tag::new("one_more", "v")]),
            Err(TagError::QuotaExceeded)
        );
        assert_eq!(tags.len(), MAX_TAGS_PER_RESOURCE);
    }

    #[test]
    fn duplicate_keys_within_one_batch_count_once() {
        let mut tags = TagSet::new();
        tags.apply(numbered(0..49)).expect("49 tags");
        let batch = vec![Tag::new("a", "1"), Tag::new("a", "2")];
        assert!(!tags.exceeds_quota(&batch));
        tags.apply(batch).expect("one new key");
        assert_eq!(tags.len(), MAX_TAGS_PER_RESOURCE);
        assert_eq!(tags.get("a"), Some("2"));

        let mut tags = TagSet::new();
        let batch = vec![Tag::new("a", "1"), Tag::new("a", "2"), Tag::new("b", "3")];
        tags.apply(batch).expect("tag");
        assert_eq!(tags.list(), &[Tag::new("a", "2"), Tag::new("b", "3")]);
    }

    #[test]
    fn remove_ignores_absent_keys_and_keeps_order() {
        let mut tags = TagSet::new();
        tags.apply(numbered(0..4)).expect("tag");
        tags.remove(&["tag_key_1", "not-existing-tag"]);
        let keys: Vec<_> = tags.list().iter().map(|tag| tag.key.as_str()).collect();
        assert_eq!(keys, vec!["tag_key_0", "tag_key_2", "tag_key_3"]);
    }

    #[test]
    fn invalid_keys_and_values_are_rejected_before_mutation() {
        let mut tags = TagSet::new();
        assert_eq!(
            tags.apply(vec![Tag::new("ok", "v"), Tag::new("", "v")]),
            Err(TagError::InvalidKey(String::new()))
        );
        assert_eq!(
            tags.apply(vec![Tag::new("k", "v".repeat(MAX_TAG_VALUE_LEN + 1))]),
            Err(TagError::InvalidValue("k".to_string()))
        );
        assert!(tags.is_empty());
    }

    #[test]
    fn huge_batch_is_rejected_without_touching_the_set() {
        let mut tags = TagSet::new();
        tags.apply(vec![Tag::new("tag_key_1", "tag_value_X")])
            .expect("tag");
        let before = tags.clone();

        let batch = numbered(0..10_000);
        assert!(tags.exceeds_quota(&batch));
        let started = std::time::Instant::now();
        assert_eq!(tags.apply(batch), Err(TagError::QuotaExceeded));
        assert!(
            started.elapsed() < std::time::Duration::from_secs(1),
            "quota check should stop at the first key past the limit"
        );
        assert_eq!(tags, before);
    }

    #[test]
    fn decoding_enforces_quota_and_merges_duplicates() {
        let decoded: TagSet = serde_json::from_value(serde_json::json!([
            {"Key": "a", "Value": "1"},
            {"Key": "b", "Value": "2"},
            {"Key": "a", "Value": "3"}
        ]))
        .expect("decode");
        assert_eq!(decoded.list(), &[Tag::new("a", "3"), Tag::new("b", "2")]);

        let too_many = serde_json::to_value(numbered(0..51)).expect("json");
        assert!(serde_json::from_value::<TagSet>(too_many).is_err());
    }

    #[test]
    fn serializes_as_key_value_list() {
        let mut tags = TagSet::new();
        tags.apply(vec![Tag::new("tag_key_1", "tag_value_1")])
            .expect("tag");
        let json = serde_json::to_value(&tags).expect("json");
        assert_eq!(
            json,
            serde_json::json!([{"Key": "tag_key_1", "Value": "tag_value_1"}])
        );
    }
}
