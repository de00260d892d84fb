use thiserror::Error;

/// The main error type for fmp-* crates
#[derive(Error, Debug)]
pub enum Error {
  /// Environment variable error
  #[error("Environment variable error: {0}")]
  EnvVar(#[from] std::env::VarError),

  /// Configuration error
  #[error("Configuration error: {0}")]
  Config(String),

  /// API key error
  #[error("Failed to retrieve API key: {0}")]
  ApiKey(String),

  /// Request parameter rejected before any request was made
  #[error("Invalid parameter: {0}")]
  InvalidParameter(String),

  /// HTTP transport error (connection, DNS, timeout, body read)
  #[error("HTTP error: {0}")]
  Http(String),

  /// Non-success HTTP status; carries the raw response body
  #[error("API error (HTTP {status}): {body}")]
  Api { status: u16, body: String },

  /// Response body could not be decoded into the expected shape
  #[error("Decode error: {0}")]
  Decode(#[from] serde_json::Error),

  /// Date/Time parsing error
  #[error("Date parsing error: {0}")]
  ParseDate(#[from] chrono::ParseError),
}

/// Result type alias for fmp-* crates
pub type Result<T> = std::result::Result<T, Error>;
