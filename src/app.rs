//! Shared handler state.
//!
//! # Purpose
//! Defines the state injected into the API handlers and the per-request
//! context carrying the caller's already-resolved account id and region.
use crate::config::EmulatorConfig;
use crate::store::TopicStore;
use crate::store::memory::InMemoryTopicStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: EmulatorConfig,
    pub store: Arc<dyn TopicStore + Send + Sync>,
}

impl AppState {
    /// State backed by a fresh, empty in-memory registry.
    pub fn in_memory(config: EmulatorConfig) -> Self {
        let store = InMemoryTopicStore::new(config.store_config());
        Self {
            config,
            store: Arc::new(store),
        }
    }

    /// Context for a caller in the session's default account and region.
    pub fn default_context(&self) -> RequestContext {
        RequestContext::new(&self.config.account_id, &self.config.default_region)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    pub account_id: String,
    pub region: String,
}

impl RequestContext {
    pub fn new(account_id: &str, region: &str) -> Self {
        Self {
            account_id: account_id.to_string(),
            region: region.to_string(),
        }
    }

    pub fn with_region(&self, region: &str) -> Self {
        Self::new(&self.account_id, region)
    }
}
