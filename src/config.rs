use crate::store::StoreConfig;
use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::fs;

pub const DEFAULT_ACCOUNT_ID: &str = "123456789012";
pub const DEFAULT_REGION: &str = "us-east-1";
pub const DEFAULT_PAGE_SIZE: usize = 100;

// Emulation session configuration sourced from environment variables.
#[derive(Debug, Clone)]
pub struct EmulatorConfig {
    pub account_id: String,
    pub default_region: String,
    pub page_size: usize,
}

#[derive(Debug, Deserialize)]
struct EmulatorConfigOverride {
    account_id: Option<String>,
    default_region: Option<String>,
    page_size: Option<usize>,
}

impl Default for EmulatorConfig {
    fn default() -> Self {
        Self {
            account_id: DEFAULT_ACCOUNT_ID.to_string(),
            default_region: DEFAULT_REGION.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl EmulatorConfig {
    pub fn from_env() -> Result<Self> {
        let account_id = std::env::var("TOPICPLANE_ACCOUNT_ID")
            .unwrap_or_else(|_| DEFAULT_ACCOUNT_ID.to_string());
        let default_region =
            std::env::var("TOPICPLANE_REGION").unwrap_or_else(|_| DEFAULT_REGION.to_string());
        let page_size = match std::env::var("TOPICPLANE_PAGE_SIZE") {
            Ok(value) => value
                .parse::<usize>()
                .with_context(|| "parse TOPICPLANE_PAGE_SIZE")?,
            Err(_) => DEFAULT_PAGE_SIZE,
        };
        let config = Self {
            account_id,
            default_region,
            page_size,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_env_or_yaml() -> Result<Self> {
        let mut config = Self::from_env()?;
        if let Ok(path) = std::env::var("TOPICPLANE_CONFIG") {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("read TOPICPLANE_CONFIG: {path}"))?;
            let override_cfg: EmulatorConfigOverride = serde_yaml::from_str(&contents)
                .with_context(|| "parse emulator config yaml")?;
            if let Some(value) = override_cfg.account_id {
                config.account_id = value;
            }
            if let Some(value) = override_cfg.default_region {
                config.default_region = value;
            }
            if let Some(value) = override_cfg.page_size {
                config.page_size = value;
            }
            config.validate()?;
        }
        Ok(config)
    }

    pub fn store_config(&self) -> StoreConfig {
        StoreConfig {
            page_size: self.page_size,
        }
    }

    fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            bail!("page size must be positive");
        }
        if self.account_id.is_empty() {
            bail!("account id must not be empty");
        }
        if self.default_region.is_empty() {
            bail!("region must not be empty");
        }
        Ok(())
    }
}
