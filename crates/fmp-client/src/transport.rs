//! HTTP transport layer for fmpcloud API requests

use fmp_core::{Config, Endpoint, Error, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, error, instrument};
use url::Url;

/// Query parameters of a single request, excluding the API key
pub type QueryParams = HashMap<String, String>;

/// HTTP transport layer for making requests to the fmpcloud API
///
/// Holds only immutable state and is shared behind an `Arc` by every
/// endpoint group of a client.
pub struct Transport {
  client: Client,
  base_url: String,
  api_key: String,
  timeout: Duration,
}

impl Transport {
  /// Create a new transport instance
  ///
  /// # Errors
  ///
  /// Returns an error if the configuration is invalid or the HTTP client
  /// cannot be built.
  pub fn new(config: &Config) -> Result<Self> {
    config.validate()?;

    let timeout = Duration::from_secs(config.timeout_secs);
    let client = Client::builder()
      .timeout(timeout)
      .user_agent(concat!("fmp-client/", env!("CARGO_PKG_VERSION")))
      .build()
      .map_err(|e| Error::Http(format!("Failed to create HTTP client: {}", e)))?;

    let base_url = config.base_url.trim_end_matches('/').to_string();
    debug!("Transport for {} with {:?} timeout", base_url, timeout);

    Ok(Self { client, base_url, api_key: config.api_key.clone(), timeout })
  }

  /// Create a mock transport for testing
  #[cfg(test)]
  pub fn new_mock() -> Self {
    Self {
      client: Client::new(),
      base_url: "https://mock.fmpcloud.io/api/v3".to_string(),
      api_key: "test_key".to_string(),
      timeout: Duration::from_secs(30),
    }
  }

  /// Make a GET request to an fmpcloud endpoint
  ///
  /// # Arguments
  ///
  /// * `endpoint` - The endpoint descriptor
  /// * `segments` - Path segments substituted into the endpoint template
  /// * `params` - Additional query parameters; the API key is added here
  ///
  /// # Errors
  ///
  /// * [`Error::InvalidParameter`] if the segments do not fit the template
  /// * [`Error::Http`] on connection, timeout or body read failures
  /// * [`Error::Api`] on a non-success status, carrying the raw body
  /// * [`Error::Decode`] if the body is not the expected JSON shape
  #[instrument(skip(self, params), fields(endpoint = %endpoint))]
  pub async fn get<T>(&self, endpoint: Endpoint, segments: &[&str], params: QueryParams) -> Result<T>
  where
    T: DeserializeOwned,
  {
    let path = endpoint.path(segments)?;
    let url = self.build_url(&path, params)?;
    debug!("GET {}", path);

    let response = self
      .client
      .get(url)
      .send()
      .await
      .map_err(|e| Error::Http(format!("Request to {} failed: {}", path, e)))?;

    let status = response.status();
    let text = response
      .text()
      .await
      .map_err(|e| Error::Http(format!("Failed to read response body: {}", e)))?;

    debug!("Response status {} with {} bytes", status, text.len());

    if !status.is_success() {
      error!("Request to {} failed with status: {}", path, status);
      return Err(Error::Api { status: status.as_u16(), body: text });
    }

    decode(&text)
  }

  /// Build the full URL for an API request
  fn build_url(&self, path: &str, params: QueryParams) -> Result<Url> {
    let mut url = Url::parse(&format!("{}{}", self.base_url, path))
      .map_err(|e| Error::Config(format!("Invalid request URL: {}", e)))?;

    let mut params: Vec<(String, String)> = params.into_iter().collect();
    params.sort();

    {
      let mut query_pairs = url.query_pairs_mut();
      for (key, value) in &params {
        query_pairs.append_pair(key, value);
      }
      query_pairs.append_pair("apikey", &self.api_key);
    }

    Ok(url)
  }

  /// Get the base URL being used
  pub fn base_url(&self) -> &str {
    &self.base_url
  }
}

fn decode<T: DeserializeOwned>(text: &str) -> Result<T> {
  serde_json::from_str(text).map_err(|e| {
    error!("Failed to parse JSON response: {}", e);
    error!("Response text (first 500 chars): {}", text.chars().take(500).collect::<String>());
    Error::Decode(e)
  })
}

impl std::fmt::Debug for Transport {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Transport")
      .field("base_url", &self.base_url)
      .field("api_key", &"<redacted>")
      .field("timeout", &self.timeout)
      .finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_build_url_appends_key() {
    let transport = Transport::new_mock();
    let url = transport.build_url("/quote/AAPL", QueryParams::new()).unwrap();

    assert_eq!(url.as_str(), "https://mock.fmpcloud.io/api/v3/quote/AAPL?apikey=test_key");
  }

  #[test]
  fn test_build_url_encodes_params() {
    let transport = Transport::new_mock();
    let mut params = QueryParams::new();
    params.insert("query".to_string(), "procter & gamble".to_string());
    params.insert("limit".to_string(), "10".to_string());

    let url = transport.build_url("/search", params).unwrap();
    let pairs: HashMap<String, String> = url.query_pairs().into_owned().collect();

    assert_eq!(pairs.get("query").map(String::as_str), Some("procter & gamble"));
    assert_eq!(pairs.get("limit").map(String::as_str), Some("10"));
    assert_eq!(pairs.get("apikey").map(String::as_str), Some("test_key"));
    assert!(url.as_str().starts_with("https://mock.fmpcloud.io/api/v3/search?"));
  }

  #[test]
  fn test_build_url_keeps_commas_in_path() {
    let transport = Transport::new_mock();
    let url = transport.build_url("/quote/AAPL,MSFT", QueryParams::new()).unwrap();
    assert_eq!(url.path(), "/api/v3/quote/AAPL,MSFT");
  }

  #[test]
  fn test_new_trims_trailing_slash() {
    let config = Config::default_with_key("k".to_string()).with_base_url("http://localhost:8080/api/v3/");
    let transport = Transport::new(&config).unwrap();
    assert_eq!(transport.base_url(), "http://localhost:8080/api/v3");
    assert!(format!("{:?}", transport).contains("30s"));
  }

  #[test]
  fn test_new_rejects_invalid_config() {
    let config = Config::default_with_key(String::new());
    assert!(matches!(Transport::new(&config), Err(Error::ApiKey(_))));
  }

  #[test]
  fn test_debug_redacts_key() {
    let transport = Transport::new_mock();
    let debug = format!("{:?}", transport);
    assert!(!debug.contains("test_key"));
  }

  #[test]
  fn test_decode_invalid_json() {
    let result: Result<Vec<fmp_models::Quote>> = decode("<html>oops</html>");
    assert!(matches!(result, Err(Error::Decode(_))));
  }
}
