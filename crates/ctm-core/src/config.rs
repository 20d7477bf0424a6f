//! Configuration management for the CoinMarketCap client

use crate::error::{Error, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use url::Url;

/// Main configuration struct for the CoinMarketCap client
#[derive(Clone, Deserialize, Serialize)]
pub struct Config {
  /// CoinMarketCap API key
  pub api_key: String,

  /// Base URL for the CoinMarketCap API
  pub base_url: String,

  /// Request timeout in seconds
  pub timeout_secs: u64,

  /// Number of ranked listings requested per query
  pub listing_limit: usize,
}

impl Config {
  /// Load configuration from environment variables
  pub fn from_env() -> Result<Self> {
    dotenv().ok();
    Self::from_lookup(|name| env::var(name).ok())
  }

  /// Build a configuration from any variable source
  pub fn from_lookup<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let api_key =
      lookup("CMC_API_KEY").ok_or_else(|| Error::ApiKey("CMC_API_KEY not set".to_string()))?;

    let base_url = lookup("CMC_BASE_URL").unwrap_or_else(|| crate::COINMARKETCAP_BASE_URL.to_string());

    let timeout_secs = lookup("CMC_TIMEOUT_SECS")
      .unwrap_or_else(|| crate::DEFAULT_TIMEOUT_SECS.to_string())
      .parse()
      .map_err(|_| Error::Config("Invalid CMC_TIMEOUT_SECS".to_string()))?;

    let listing_limit = lookup("CMC_LISTING_LIMIT")
      .unwrap_or_else(|| crate::DEFAULT_LISTING_LIMIT.to_string())
      .parse()
      .map_err(|_| Error::Config("Invalid CMC_LISTING_LIMIT".to_string()))?;

    let config = Config { api_key, base_url, timeout_secs, listing_limit };
    config.validate()?;
    Ok(config)
  }

  /// Create a config with default values (for testing)
  pub fn default_with_key(api_key: String) -> Self {
    Config {
      api_key,
      base_url: crate::COINMARKETCAP_BASE_URL.to_string(),
      timeout_secs: crate::DEFAULT_TIMEOUT_SECS,
      listing_limit: crate::DEFAULT_LISTING_LIMIT,
    }
  }

  /// Replace the API key, e.g. with one given on the command line
  pub fn with_api_key(mut self, api_key: String) -> Self {
    self.api_key = api_key;
    self
  }

  /// Check the values that cannot be enforced by the type system
  pub fn validate(&self) -> Result<()> {
    if self.api_key.trim().is_empty() {
      return Err(Error::Validation("API key must not be empty".to_string()));
    }

    Url::parse(&self.base_url)
      .map_err(|e| Error::Config(format!("Invalid base URL {}: {}", self.base_url, e)))?;

    if self.timeout_secs == 0 {
      return Err(Error::Config("Timeout must be at least one second".to_string()));
    }

    if self.listing_limit == 0 || self.listing_limit > crate::MAX_LISTING_LIMIT {
      return Err(Error::Config(format!(
        "Listing limit must be between 1 and {}",
        crate::MAX_LISTING_LIMIT
      )));
    }

    Ok(())
  }
}

// The key is a credential, keep it out of logs.
impl std::fmt::Debug for Config {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Config")
      .field("api_key", &"<redacted>")
      .field("base_url", &self.base_url)
      .field("timeout_secs", &self.timeout_secs)
      .field("listing_limit", &self.listing_limit)
      .finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashMap;

  fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> =
      vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    move |name| map.get(name).cloned()
  }

  #[test]
  fn test_config_defaults() {
    let config = Config::from_lookup(lookup_from(&[("CMC_API_KEY", "test_key")])).unwrap();
    assert_eq!(config.api_key, "test_key");
    assert_eq!(config.base_url, crate::COINMARKETCAP_BASE_URL);
    assert_eq!(config.timeout_secs, 10);
    assert_eq!(config.listing_limit, 100);
  }

  #[test]
  fn test_config_overrides() {
    let config = Config::from_lookup(lookup_from(&[
      ("CMC_API_KEY", "test_key"),
      ("CMC_BASE_URL", "http://127.0.0.1:9000"),
      ("CMC_TIMEOUT_SECS", "3"),
      ("CMC_LISTING_LIMIT", "25"),
    ]))
    .unwrap();
    assert_eq!(config.base_url, "http://127.0.0.1:9000");
    assert_eq!(config.timeout_secs, 3);
    assert_eq!(config.listing_limit, 25);
  }

  #[test]
  fn test_config_missing_key() {
    let result = Config::from_lookup(lookup_from(&[]));
    assert!(matches!(result, Err(Error::ApiKey(_))));
    assert_eq!(result.unwrap_err().class(), "ValidationError");
  }

  #[test]
  fn test_config_empty_key_rejected() {
    let result = Config::from_lookup(lookup_from(&[("CMC_API_KEY", "   ")]));
    assert!(matches!(result, Err(Error::Validation(_))));
  }

  #[test]
  fn test_config_limit_out_of_range() {
    let result =
      Config::from_lookup(lookup_from(&[("CMC_API_KEY", "k"), ("CMC_LISTING_LIMIT", "500")]));
    assert!(matches!(result, Err(Error::Config(_))));
  }

  #[test]
  fn test_config_debug_redacts_key() {
    let config = Config::default_with_key("super_secret".to_string());
    let debug_str = format!("{:?}", config);
    assert!(!debug_str.contains("super_secret"));
    assert!(debug_str.contains("redacted"));
  }
}
