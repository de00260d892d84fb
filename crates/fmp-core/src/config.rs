//! Configuration management for the fmpcloud client

use crate::error::{Error, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use url::Url;

/// Main configuration struct for the fmpcloud client
///
/// Built once and handed to the client by value; the client never mutates it.
#[derive(Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
  /// fmpcloud API key, sent as the `apikey` query parameter
  pub api_key: String,

  /// Base URL every endpoint template is appended to
  pub base_url: String,

  /// Request timeout in seconds
  pub timeout_secs: u64,
}

impl Config {
  /// Load configuration from environment variables
  ///
  /// Reads `FMP_API_KEY` (required), `FMP_BASE_URL` and `FMP_TIMEOUT_SECS`,
  /// after loading a `.env` file if one is present.
  pub fn from_env() -> Result<Self> {
    dotenv().ok();

    let api_key =
      env::var("FMP_API_KEY").map_err(|_| Error::ApiKey("FMP_API_KEY not set".to_string()))?;

    let timeout_secs = env::var("FMP_TIMEOUT_SECS")
      .unwrap_or_else(|_| crate::DEFAULT_TIMEOUT_SECS.to_string())
      .parse()
      .map_err(|_| Error::Config("Invalid FMP_TIMEOUT_SECS".to_string()))?;

    let base_url = env::var("FMP_BASE_URL").unwrap_or_else(|_| crate::FMPCLOUD_BASE_URL.to_string());

    let config = Config { api_key, base_url, timeout_secs };
    config.validate()?;
    Ok(config)
  }

  /// Create a config with default values
  pub fn default_with_key(api_key: String) -> Self {
    Config {
      api_key,
      base_url: crate::FMPCLOUD_BASE_URL.to_string(),
      timeout_secs: crate::DEFAULT_TIMEOUT_SECS,
    }
  }

  /// Replace the base URL
  pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
    self.base_url = base_url.into();
    self
  }

  /// Replace the request timeout
  pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
    self.timeout_secs = timeout_secs;
    self
  }

  /// Check that the key is present and the base URL is an absolute http(s) URL
  pub fn validate(&self) -> Result<()> {
    if self.api_key.trim().is_empty() {
      return Err(Error::ApiKey("API key is empty".to_string()));
    }

    let url = Url::parse(&self.base_url)
      .map_err(|e| Error::Config(format!("Invalid base URL '{}': {}", self.base_url, e)))?;
    if !matches!(url.scheme(), "http" | "https") {
      return Err(Error::Config(format!("Unsupported URL scheme: {}", url.scheme())));
    }

    if self.timeout_secs == 0 {
      return Err(Error::Config("Timeout must be greater than zero".to_string()));
    }

    Ok(())
  }
}

impl std::fmt::Debug for Config {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Config")
      .field("api_key", &"<redacted>")
      .field("base_url", &self.base_url)
      .field("timeout_secs", &self.timeout_secs)
      .finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_config_from_env() {
    env::set_var("FMP_API_KEY", "test_key");
    env::remove_var("FMP_BASE_URL");
    env::remove_var("FMP_TIMEOUT_SECS");
    let config = Config::from_env().unwrap();
    assert_eq!(config.api_key, "test_key");
    assert_eq!(config.base_url, crate::FMPCLOUD_BASE_URL);
    assert_eq!(config.timeout_secs, 30);
  }

  #[test]
  fn test_default_with_key() {
    let config = Config::default_with_key("abc".to_string());
    assert_eq!(config.api_key, "abc");
    assert_eq!(config.base_url, "https://fmpcloud.io/api/v3");
    assert!(config.validate().is_ok());
  }

  #[test]
  fn test_builders() {
    let config = Config::default_with_key("abc".to_string())
      .with_base_url(crate::FMP_BASE_URL)
      .with_timeout_secs(5);
    assert_eq!(config.base_url, "https://financialmodelingprep.com/api/v3");
    assert_eq!(config.timeout_secs, 5);
  }

  #[test]
  fn test_validate_rejects_bad_values() {
    let base = Config::default_with_key("abc".to_string());

    let empty_key = Config { api_key: " ".to_string(), ..base.clone() };
    assert!(matches!(empty_key.validate(), Err(Error::ApiKey(_))));

    let bad_url = base.clone().with_base_url("not a url");
    assert!(matches!(bad_url.validate(), Err(Error::Config(_))));

    let ftp = base.clone().with_base_url("ftp://fmpcloud.io/api/v3");
    assert!(matches!(ftp.validate(), Err(Error::Config(_))));

    let zero_timeout = base.with_timeout_secs(0);
    assert!(matches!(zero_timeout.validate(), Err(Error::Config(_))));
  }

  #[test]
  fn test_debug_redacts_key() {
    let config = Config::default_with_key("super-secret".to_string());
    let printed = format!("{:?}", config);
    assert!(!printed.contains("super-secret"));
    assert!(printed.contains("fmpcloud.io"));
  }
}
