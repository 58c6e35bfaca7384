//! In-memory implementation of the topic registry.
//!
//! # Purpose
//! This store implements `TopicStore` entirely in memory: one `HashMap` of
//! region partitions guarded by a single `tokio::sync::RwLock`. It is the
//! emulator's only backend.
//!
//! # Durability and consistency
//! - **Not durable**: all state is lost when the store is dropped or `reset`.
//! - **Atomic mutations**: every mutating call holds the write lock for its
//!   whole duration, so readers never observe a partially applied tag or
//!   attribute update.
//! - **Isolated sessions**: each `InMemoryTopicStore` owns its state; tests
//!   build a fresh instance instead of sharing a process-wide registry.
//!
//! # Ordering
//! Each region partition records topic identifiers in creation order next to
//! the identifier-keyed map. Listing pages over that order; deletion removes
//! the identifier from both.
use super::pagination::paginate;
use super::{StoreConfig, StoreError, StoreResult, TopicPage, TopicStore};
use crate::model::{
    NewTopic, PermissionStatement, Tag, Topic, TopicArn, TopicAttributes, validate_topic_name,
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Topics of one region, in creation order.
#[derive(Debug, Default)]
struct RegionTopics {
    order: Vec<TopicArn>,
    topics: HashMap<TopicArn, Topic>,
}

impl RegionTopics {
    fn insert(&mut self, topic: Topic) {
        self.order.push(topic.arn.clone());
        self.topics.insert(topic.arn.clone(), topic);
    }

    fn remove(&mut self, arn: &TopicArn) -> Option<Topic> {
        let removed = self.topics.remove(arn)?;
        self.order.retain(|item| item != arn);
        Some(removed)
    }
}

type Regions = HashMap<String, RegionTopics>;

fn lookup<'a>(regions: &'a Regions, arn: &str) -> Option<&'a Topic> {
    let arn = TopicArn::parse(arn)?;
    regions.get(arn.region())?.topics.get(&arn)
}

fn lookup_mut<'a>(regions: &'a mut Regions, arn: &str) -> Option<&'a mut Topic> {
    let arn = TopicArn::parse(arn)?;
    regions.get_mut(arn.region())?.topics.get_mut(&arn)
}

fn record_region_size(region: &str, partition: &RegionTopics) {
    metrics::gauge!("topicplane_topics_total", "region" => region.to_string())
        .set(partition.order.len() as f64);
}

/// In-memory topic registry.
///
/// The partition map is wrapped in `Arc<RwLock<...>>` so reads proceed
/// concurrently while writes are serialized.
pub struct InMemoryTopicStore {
    config: StoreConfig,
    regions: Arc<RwLock<Regions>>,
}

impl InMemoryTopicStore {
    pub fn new(config: StoreConfig) -> Self {
        Self {
            config,
            regions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    fn page_size(&self) -> usize {
        self.config.page_size.max(1)
    }
}

#[async_trait]
impl TopicStore for InMemoryTopicStore {
    async fn create_topic(&self, topic: NewTopic) -> StoreResult<TopicArn> {
        // Validation happens before the lock is taken; a bad name never touches state.
        validate_topic_name(&topic.name)?;
        let arn = TopicArn::build(&topic.region, &topic.account_id, &topic.name);

        let mut regions = self.regions.write().await;
        if regions
            .get(&topic.region)
            .is_some_and(|partition| partition.topics.contains_key(&arn))
        {
            tracing::debug!(topic_arn = %arn, "topic exists; create is a no-op");
            return Ok(arn);
        }
        // Built in full before insertion so a tag quota failure leaves no trace.
        let created = Topic::new(arn.clone(), topic.attributes, topic.tags)?;
        let partition = regions.entry(topic.region.clone()).or_default();
        partition.insert(created);
        record_region_size(&topic.region, partition);
        metrics::counter!("topicplane_topic_changes_total", "op" => "created").increment(1);
        tracing::info!(topic_arn = %arn, "topic created");
        Ok(arn)
    }

    async fn delete_topic(&self, arn: &str) -> StoreResult<()> {
        let Some(parsed) = TopicArn::parse(arn) else {
            tracing::debug!(topic_arn = arn, "delete of unparsable arn treated as absent");
            return Ok(());
        };
        let mut regions = self.regions.write().await;
        let Some(partition) = regions.get_mut(parsed.region()) else {
            return Ok(());
        };
        if partition.remove(&parsed).is_some() {
            record_region_size(parsed.region(), partition);
            metrics::counter!("topicplane_topic_changes_total", "op" => "deleted").increment(1);
            tracing::info!(topic_arn = %parsed, "topic deleted");
        }
        Ok(())
    }

    async fn get_topic(&self, arn: &str) -> StoreResult<Topic> {
        lookup(&*self.regions.read().await, arn)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(arn.to_string()))
    }

    async fn list_topics(&self, region: &str, next_token: Option<&str>) -> StoreResult<TopicPage> {
        let regions = self.regions.read().await;
        let order: &[TopicArn] = regions
            .get(region)
            .map(|partition| partition.order.as_slice())
            .unwrap_or_default();
        let (items, next_token) = paginate(order, next_token, self.page_size())?;
        Ok(TopicPage { items, next_token })
    }

    async fn topic_count(&self, region: &str) -> StoreResult<usize> {
        Ok(self
            .regions
            .read()
            .await
            .get(region)
            .map(|partition| partition.order.len())
            .unwrap_or(0))
    }

    async fn get_topic_attributes(&self, arn: &str) -> StoreResult<TopicAttributes> {
        lookup(&*self.regions.read().await, arn)
            .map(|topic| topic.attributes.clone())
            .ok_or_else(|| StoreError::NotFound(arn.to_string()))
    }

    async fn set_topic_attribute(&self, arn: &str, name: &str, value: &str) -> StoreResult<()> {
        if name.is_empty() {
            return Err(StoreError::InvalidParameter(
                "attribute name must not be empty".into(),
            ));
        }
        let mut regions = self.regions.write().await;
        let topic =
            lookup_mut(&mut regions, arn).ok_or_else(|| StoreError::NotFound(arn.to_string()))?;
        topic.attributes.set(name, value);
        metrics::counter!("topicplane_topic_changes_total", "op" => "attribute_set").increment(1);
        tracing::debug!(topic_arn = arn, attribute = name, "topic attribute set");
        Ok(())
    }

    async fn tag_resource(&self, arn: &str, tags: Vec<Tag>) -> StoreResult<()> {
        let mut regions = self.regions.write().await;
        let topic = lookup_mut(&mut regions, arn).ok_or(StoreError::ResourceNotFound)?;
        let count = tags.len();
        topic.tags.apply(tags)?;
        metrics::counter!("topicplane_topic_changes_total", "op" => "tagged").increment(1);
        tracing::debug!(topic_arn = arn, count, "resource tagged");
        Ok(())
    }

    async fn untag_resource(&self, arn: &str, keys: &[String]) -> StoreResult<()> {
        let mut regions = self.regions.write().await;
        let topic = lookup_mut(&mut regions, arn).ok_or(StoreError::ResourceNotFound)?;
        topic.tags.remove(keys);
        metrics::counter!("topicplane_topic_changes_total", "op" => "untagged").increment(1);
        tracing::debug!(topic_arn = arn, count = keys.len(), "resource untagged");
        Ok(())
    }

    async fn list_tags_for_resource(&self, arn: &str) -> StoreResult<Vec<Tag>> {
        lookup(&*self.regions.read().await, arn)
            .map(|topic| topic.tags.list().to_vec())
            .ok_or(StoreError::ResourceNotFound)
    }

    async fn add_permission(&self, arn: &str, statement: PermissionStatement) -> StoreResult<()> {
        if statement.label.is_empty() {
            return Err(StoreError::InvalidParameter("label must not be empty".into()));
        }
        if statement.principals.is_empty() || statement.actions.is_empty() {
            return Err(StoreError::InvalidParameter(
                "principals and actions must not be empty".into(),
            ));
        }
        let mut regions = self.regions.write().await;
        let topic =
            lookup_mut(&mut regions, arn).ok_or_else(|| StoreError::NotFound(arn.to_string()))?;
        if topic.permission(&statement.label).is_some() {
            return Err(StoreError::InvalidParameter("Statement already exists".into()));
        }
        tracing::debug!(topic_arn = arn, label = %statement.label, "permission added");
        topic.permissions.push(statement);
        Ok(())
    }

    async fn remove_permission(&self, arn: &str, label: &str) -> StoreResult<()> {
        let mut regions = self.regions.write().await;
        let topic =
            lookup_mut(&mut regions, arn).ok_or_else(|| StoreError::NotFound(arn.to_string()))?;
        topic.permissions.retain(|statement| statement.label != label);
        Ok(())
    }

    async fn list_permissions(&self, arn: &str) -> StoreResult<Vec<PermissionStatement>> {
        lookup(&*self.regions.read().await, arn)
            .map(|topic| topic.permissions.clone())
            .ok_or_else(|| StoreError::NotFound(arn.to_string()))
    }

    async fn reset(&self) -> StoreResult<()> {
        let mut regions = self.regions.write().await;
        for (region, partition) in regions.iter_mut() {
            *partition = RegionTopics::default();
            record_region_size(region, partition);
        }
        regions.clear();
        tracing::info!("topic registry reset");
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
