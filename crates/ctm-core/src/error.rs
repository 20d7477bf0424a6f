use thiserror::Error;

/// The main error type for ctm-* crates
#[derive(Error, Debug)]
pub enum Error {
  /// Environment variable error
  #[error("Environment variable error: {0}")]
  EnvVar(#[from] std::env::VarError),

  /// Configuration error
  #[error("Configuration error: {0}")]
  Config(String),

  /// API key missing from the environment
  #[error("Failed to retrieve API key: {0}")]
  ApiKey(String),

  /// Query string or column selection rejected before any request was made
  #[error("Invalid input: {0}")]
  Validation(String),

  /// Connection, timeout or redirect failure on an outbound call
  #[error("Transport error: {0}")]
  Transport(String),

  /// Credential rejected by the provider
  #[error("Authentication failed: {0}")]
  Auth(String),

  /// Provider rate limit hit. Surfaced as-is, never retried.
  #[error("Rate limit exceeded: {0}")]
  RateLimit(String),

  /// Provider reported one or more unknown ticker symbols
  #[error("Unknown symbols: {}", .0.join(","))]
  InvalidSymbols(Vec<String>),

  /// Error payload returned by the provider
  #[error("API error {code}: {message}")]
  Api { code: i64, message: String },

  /// Non-success HTTP status without a usable error payload
  #[error("HTTP error: {0}")]
  Http(String),

  /// Response body that does not match the expected shape
  #[error("Parse error: {0}")]
  Parse(String),

  /// Serialization/Deserialization error
  #[error("Serialization error: {0}")]
  Serde(#[from] serde_json::Error),

  /// File system error
  #[error("IO error: {0}")]
  Io(#[from] std::io::Error),
}

impl Error {
  /// Name of the failure class shown to the user
  pub fn class(&self) -> &'static str {
    match self {
      Error::Transport(_) => "TransportError",
      Error::Auth(_) => "AuthError",
      Error::Validation(_) | Error::ApiKey(_) => "ValidationError",
      Error::RateLimit(_) => "RateLimitError",
      Error::InvalidSymbols(_) | Error::Api { .. } | Error::Http(_) => "ApiError",
      Error::Parse(_) | Error::Serde(_) => "ResponseFormatError",
      Error::Config(_) | Error::EnvVar(_) | Error::Io(_) => "ConfigError",
    }
  }
}

/// Result type alias for ctm-* crates
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_error_display_api() {
    let err = Error::Api { code: 1001, message: "This API Key is invalid.".to_string() };
    assert_eq!(err.to_string(), "API error 1001: This API Key is invalid.");
  }

  #[test]
  fn test_error_display_invalid_symbols() {
    let err = Error::InvalidSymbols(vec!["XYZ".to_string(), "QQQ".to_string()]);
    assert_eq!(err.to_string(), "Unknown symbols: XYZ,QQQ");
  }

  #[test]
  fn test_error_class() {
    assert_eq!(Error::Transport("timed out".to_string()).class(), "TransportError");
    assert_eq!(Error::Auth("bad key".to_string()).class(), "AuthError");
    assert_eq!(Error::Validation("empty".to_string()).class(), "ValidationError");
    assert_eq!(Error::Parse("eof".to_string()).class(), "ResponseFormatError");
  }

  #[test]
  fn test_missing_and_empty_key_share_class() {
    let missing = Error::ApiKey("CMC_API_KEY not set".to_string());
    let empty = Error::Validation("API key must not be empty".to_string());
    assert_eq!(missing.class(), "ValidationError");
    assert_eq!(missing.class(), empty.class());
  }

  #[test]
  fn test_error_from_serde_json_error() {
    let json_err = serde_json::from_str::<String>("invalid").unwrap_err();
    let err = Error::from(json_err);
    assert!(matches!(err, Error::Serde(_)));
  }
}
