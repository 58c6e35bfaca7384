//! Per-topic attribute store.
//!
//! # Purpose
//! Holds every topic attribute as an opaque string keyed by attribute name.
//! A fresh store is seeded with the recognized defaults and then overlaid with
//! caller-supplied values.
//!
//! # Key invariants
//! - Values are stored and returned byte-for-byte; policy documents are the
//!   caller's serialized text and are never re-parsed.
//! - Unknown attribute names are accepted and stored as-is.
//! - Iteration order is by attribute name.
use crate::model::TopicArn;
use serde::Serialize;
use serde_json::{Value, json};
use std::collections::BTreeMap;

pub const TOPIC_ARN: &str = "TopicArn";
pub const OWNER: &str = "Owner";
pub const POLICY: &str = "Policy";
pub const DISPLAY_NAME: &str = "DisplayName";
pub const DELIVERY_POLICY: &str = "DeliveryPolicy";
pub const EFFECTIVE_DELIVERY_POLICY: &str = "EffectiveDeliveryPolicy";
pub const SUBSCRIPTIONS_PENDING: &str = "SubscriptionsPending";
pub const SUBSCRIPTIONS_CONFIRMED: &str = "SubscriptionsConfirmed";
pub const SUBSCRIPTIONS_DELETED: &str = "SubscriptionsDeleted";

/// Access policy attached to a topic that was created without a `Policy`.
///
/// Allows every principal the standard topic actions, scoped to callers owned
/// by the topic's account.
pub fn default_topic_policy(arn: &TopicArn) -> Value {
    json!({
        "Version": "2008-10-17",
        "Id": "__default_policy_ID",
        "Statement": [{
            "Effect": "Allow",
            "Sid": "__default_statement_ID",
            "Principal": {"AWS": "*"},
            "Action": [
                "SNS:GetTopicAttributes",
                "SNS:SetTopicAttributes",
                "SNS:AddPermission",
                "SNS:RemovePermission",
                "SNS:DeleteTopic",
                "SNS:Subscribe",
                "SNS:ListSubscriptionsByTopic",
                "SNS:Publish",
                "SNS:Receive",
            ],
            "Resource": arn.to_string(),
            "Condition": {"StringEquals": {"AWS:SourceOwner": arn.account_id()}},
        }],
    })
}

pub fn default_effective_delivery_policy() -> Value {
    json!({
        "http": {
            "disableSubscriptionOverrides": false,
            "defaultHealthyRetryPolicy": {
                "numNoDelayRetries": 0,
                "numMinDelayRetries": 0,
                "minDelayTarget": 20,
                "maxDelayTarget": 20,
                "numMaxDelayRetries": 0,
                "numRetries": 3,
                "backoffFunction": "linear",
            },
        },
    })
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TopicAttributes(BTreeMap<String, String>);

impl TopicAttributes {
    pub fn initialize<I, K, V>(arn: &TopicArn, supplied: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut attributes = Self::default();
        attributes.set(TOPIC_ARN, arn.to_string());
        attributes.set(OWNER, arn.account_id());
        attributes.set(POLICY, default_topic_policy(arn).to_string());
        attributes.set(DISPLAY_NAME, "");
        attributes.set(DELIVERY_POLICY, "");
        attributes.set(
            EFFECTIVE_DELIVERY_POLICY,
            default_effective_delivery_policy().to_string(),
        );
        attributes.set(SUBSCRIPTIONS_PENDING, "0");
        attributes.set(SUBSCRIPTIONS_CONFIRMED, "0");
        attributes.set(SUBSCRIPTIONS_DELETED, "0");
        for (name, value) in supplied {
            attributes.set(name, value);
        }
        attributes
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get_all(&self) -> &BTreeMap<String, String> {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
