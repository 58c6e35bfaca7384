//! Canonical topic identifiers.
//!
//! # Purpose
//! Builds the `arn:aws:sns:<region>:<account-id>:<name>` identifier for a topic
//! and parses caller-supplied identifiers back into their segments.
//!
//! # Key invariants
//! - `build` is total; it never validates the name (that happens before).
//! - `parse` accepts exactly six `:`-separated segments with non-empty region,
//!   account id, and name. Anything else is not a topic identifier.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Namespace, partition, and service segments shared by every topic identifier.
pub const ARN_PREFIX: &str = "arn:aws:sns";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid topic arn: {0}")]
pub struct InvalidTopicArn(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TopicArn {
    region: String,
    account_id: String,
    name: String,
}

impl TopicArn {
    pub fn build(region: &str, account_id: &str, name: &str) -> Self {
        Self {
            region: region.to_string(),
            account_id: account_id.to_string(),
            name: name.to_string(),
        }
    }

    pub fn parse(input: &str) -> Option<Self> {
        let rest = input.strip_prefix(ARN_PREFIX)?.strip_prefix(':')?;
        let mut segments = rest.splitn(3, ':');
        let region = segments.next()?;
        let account_id = segments.next()?;
        let name = segments.next()?;
        if region.is_empty() || account_id.is_empty() || name.is_empty() || name.contains(':') {
            return None;
        }
        Some(Self::build(region, account_id, name))
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for TopicArn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{ARN_PREFIX}:{}:{}:{}",
            self.region, self.account_id, self.name
        )
    }
}

impl FromStr for TopicArn {
    type Err = InvalidTopicArn;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::parse(input).ok_or_else(|| InvalidTopicArn(input.to_string()))
    }
}

impl TryFrom<String> for TopicArn {
    type Error = InvalidTopicArn;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TopicArn> for String {
    fn from(arn: TopicArn) -> Self {
        arn.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_embeds_region_account_and_name() {
        let arn = TopicArn::build("us-east-1", "123456789012", "some-topic");
        assert_eq!(arn.to_string(), "arn:aws:sns:us-east-1:123456789012:some-topic");
    }

    #[test]
    fn same_name_in_two_regions_differs_only_by_region() {
        let east = TopicArn::build("us-east-1", "123456789012", "some-topic").to_string();
        let west = TopicArn::build("us-west-2", "123456789012", "some-topic").to_string();
        assert_ne!(east, west);
        assert_eq!(
            east.replace("us-east-1", "us-west-2"),
            west,
            "only the region segment should differ"
        );
    }

    #[test]
    fn parse_recovers_segments() {
        let arn = TopicArn::parse("arn:aws:sns:eu-west-1:999999999999:orders_v2").expect("arn");
        assert_eq!(arn.region(), "eu-west-1");
        assert_eq!(arn.account_id(), "999999999999");
        assert_eq!(arn.name(), "orders_v2");
    }

    #[test]
    fn parse_rejects_garbage() {
        for input in [
            "a-fake-arn",
            "not-existing-topic",
            "",
            "arn:aws:sqs:us-east-1:123456789012:queue",
            "arn:aws:sns:us-east-1:123456789012",
            "arn:aws:sns::123456789012:topic",
            "arn:aws:sns:us-east-1::topic",
            "arn:aws:sns:us-east-1:123456789012:",
            "arn:aws:sns:us-east-1:123456789012:a:b",
        ] {
            assert!(TopicArn::parse(input).is_none(), "{input} should not parse");
        }
        let err = "a-fake-arn".parse::<TopicArn>().expect_err("invalid");
        assert_eq!(err, InvalidTopicArn("a-fake-arn".to_string()));
    }

    #[test]
    fn serde_uses_canonical_string() {
        let arn = TopicArn::build("us-east-1", "123456789012", "t");
        let json = serde_json::to_string(&arn).expect("serialize");
        assert_eq!(json, "\"arn:aws:sns:us-east-1:123456789012:t\"");
        let back: TopicArn = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, arn);
        assert!(serde_json::from_str::<TopicArn>("\"nope\"").is_err());
    }
}
