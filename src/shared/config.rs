use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::warn;

use crate::shared::errors::AppError;
use crate::shared::types::Address;

pub const DEFAULT_CONTRACT_ADDRESS: &str =
    "erd1qqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqq6gq4hu";
pub const DEFAULT_GATEWAY_URL: &str = "https://devnet-gateway.multiversx.com";
pub const DEFAULT_CHAIN_ID: &str = "D";

/// Client configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub contract_address: String,
    pub gateway_url: String,
    pub chain_id: String,
    pub wallet_address: Option<String>,
    pub pause_check_interval_secs: u64,
    pub notice_duration_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            contract_address: DEFAULT_CONTRACT_ADDRESS.to_string(),
            gateway_url: DEFAULT_GATEWAY_URL.to_string(),
            chain_id: DEFAULT_CHAIN_ID.to_string(),
            wallet_address: None,
            pause_check_interval_secs: 30,
            notice_duration_ms: 3000,
        }
    }
}

impl ClientConfig {
    /// Defaults, then the optional TOML file, then environment variables.
    /// Call [`ClientConfig::validate`] once every override is applied.
    pub fn load(path: Option<&Path>) -> Result<Self, AppError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(path)
            .map_err(|e| AppError::ConfigError(format!("Failed to read config file: {}", e)))?;

        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, AppError> {
        toml::from_str(content)
            .map_err(|e| AppError::ConfigError(format!("Failed to parse config file: {}", e)))
    }

    /// Override fields from `CONTRACT_ADDRESS`, `PROXY_URL`, `CHAIN_ID` and `WALLET_ADDRESS`
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(address) = lookup("CONTRACT_ADDRESS") {
            self.contract_address = address;
        }
        if let Some(url) = lookup("PROXY_URL") {
            self.gateway_url = url;
        }
        if let Some(chain_id) = lookup("CHAIN_ID") {
            self.chain_id = chain_id;
        }
        if let Some(wallet) = lookup("WALLET_ADDRESS") {
            self.wallet_address = Some(wallet);
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.contract_address.trim().is_empty() {
            return Err(AppError::ConfigError("contract_address is empty".to_string()));
        }
        if !self.gateway_url.starts_with("http://") && !self.gateway_url.starts_with("https://") {
            return Err(AppError::ConfigError(format!(
                "gateway_url must be an http(s) URL: {}",
                self.gateway_url
            )));
        }
        if self.pause_check_interval_secs == 0 {
            return Err(AppError::ConfigError(
                "pause_check_interval_secs must be positive".to_string(),
            ));
        }
        if self.contract_address == DEFAULT_CONTRACT_ADDRESS {
            warn!("⚠️ No contract address configured, falling back to the zero address");
        }
        Ok(())
    }

    pub fn contract(&self) -> Address {
        Address::new(self.contract_address.trim())
    }

    pub fn pause_check_interval(&self) -> Duration {
        Duration::from_secs(self.pause_check_interval_secs)
    }

    pub fn notice_duration(&self) -> Duration {
        Duration::from_millis(self.notice_duration_ms)
    }
}
