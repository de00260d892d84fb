use anyhow::{Context, Result};
use fmp_core::Config;

/// Assemble the client configuration from command-line values
///
/// Each value may also come from the environment through clap's `env`
/// fallback, so `.env` files loaded at startup apply here too.
pub fn build(api_key: Option<String>, base_url: Option<String>, timeout: Option<u64>) -> Result<Config> {
  let api_key = api_key.context("FMP_API_KEY not set; pass --api-key or set the environment variable")?;

  let mut config = Config::default_with_key(api_key);
  if let Some(base_url) = base_url {
    config = config.with_base_url(base_url);
  }
  if let Some(timeout) = timeout {
    config = config.with_timeout_secs(timeout);
  }

  config.validate().context("Invalid client configuration")?;
  Ok(config)
}
