//! HTTP transport layer for CoinMarketCap API requests

use ctm_core::{Config, Endpoint, Error, Result, API_KEY_HEADER};
use ctm_models::{ApiResponse, ApiStatus};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};
use url::Url;

/// Provider status codes for exhausted request quotas
const RATE_LIMIT_CODES: std::ops::RangeInclusive<i64> = 1008..=1011;

/// HTTP transport layer for making requests to the CoinMarketCap API.
///
/// Holds only the request settings. Every call builds its own HTTP client and
/// drops it once the response body is read, so nothing is shared between
/// calls or sessions.
pub struct Transport {
  base_url: String,
  api_key: String,
  timeout: Duration,
}

impl Transport {
  /// Create a new transport instance
  pub fn new(config: &Config) -> Result<Self> {
    config.validate()?;

    Ok(Self {
      base_url: config.base_url.trim_end_matches('/').to_string(),
      api_key: config.api_key.clone(),
      timeout: Duration::from_secs(config.timeout_secs),
    })
  }

  /// Create a mock transport for testing
  #[cfg(test)]
  pub fn new_mock() -> Self {
    Self {
      base_url: "https://mock.coinmarketcap.com".to_string(),
      api_key: "test_key".to_string(),
      timeout: Duration::from_secs(10),
    }
  }

  /// Make a single GET request to the CoinMarketCap API
  ///
  /// # Arguments
  ///
  /// * `endpoint` - The endpoint to call
  /// * `params` - Query parameters for the request
  ///
  /// # Returns
  ///
  /// Returns the `data` member of the response envelope, or an error naming
  /// why the request failed. There is no retry.
  #[instrument(skip(self, params), fields(endpoint = %endpoint))]
  pub async fn get<T>(&self, endpoint: Endpoint, params: &[(&str, String)]) -> Result<T>
  where
    T: DeserializeOwned,
  {
    let url = self.build_url(endpoint, params)?;
    debug!("Making request to: {}", url);

    let client = self.build_client()?;
    let response = client
      .get(url)
      .header(API_KEY_HEADER, &self.api_key)
      .header("Accepts", "application/json")
      .header(reqwest::header::ACCEPT, "application/json")
      .send()
      .await
      .map_err(transport_error)?;

    let status = response.status();
    let text = response.text().await.map_err(transport_error)?;
    debug!("Response status {} with {} bytes", status, text.len());

    let data = decode_response(status, &text)?;
    info!("Successfully parsed response for endpoint: {}", endpoint);
    Ok(data)
  }

  fn build_client(&self) -> Result<Client> {
    Client::builder()
      .timeout(self.timeout)
      .user_agent(concat!("ctm-client/", env!("CARGO_PKG_VERSION")))
      .build()
      .map_err(|e| Error::Transport(format!("Failed to create HTTP client: {}", e)))
  }

  /// Build the full URL for an API request
  fn build_url(&self, endpoint: Endpoint, params: &[(&str, String)]) -> Result<Url> {
    let mut url = Url::parse(&format!("{}{}", self.base_url, endpoint.path()))
      .map_err(|e| Error::Config(format!("Invalid base URL: {}", e)))?;

    {
      let mut query_pairs = url.query_pairs_mut();
      for (key, value) in params {
        query_pairs.append_pair(key, value);
      }
    }

    Ok(url)
  }

  /// Get the base URL being used
  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  /// Get request timeout duration
  pub fn timeout(&self) -> Duration {
    self.timeout
  }
}

impl std::fmt::Debug for Transport {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Transport")
      .field("base_url", &self.base_url)
      .field("timeout", &self.timeout)
      .finish()
  }
}

/// Map a reqwest failure onto the transport error class
fn transport_error(e: reqwest::Error) -> Error {
  let message = if e.is_timeout() {
    format!("Request timed out: {}", e)
  } else if e.is_connect() {
    format!("Connection failed: {}", e)
  } else if e.is_redirect() {
    format!("Too many redirects: {}", e)
  } else {
    format!("Request failed: {}", e)
  };
  warn!("{}", message);
  Error::Transport(message)
}

/// Turn a raw response into the envelope's data, or the matching error
fn decode_response<T>(http_status: StatusCode, text: &str) -> Result<T>
where
  T: DeserializeOwned,
{
  if !http_status.is_success() {
    error!("Request failed with status: {}", http_status);
    return Err(match serde_json::from_str::<ApiResponse<serde_json::Value>>(text) {
      Ok(envelope) => status_error(http_status, &envelope.status),
      Err(_) => http_error(http_status),
    });
  }

  let envelope: ApiResponse<T> = serde_json::from_str(text).map_err(|e| {
    error!("Failed to parse JSON response: {}", e);
    error!("Response text (first 500 chars): {}", truncate(text, 500));
    Error::Parse(format!("Failed to parse response: {}. Response: {}", e, truncate(text, 200)))
  })?;

  if !envelope.status.is_success() {
    return Err(status_error(http_status, &envelope.status));
  }

  envelope.data.ok_or_else(|| Error::Parse("Response has no data member".to_string()))
}

/// Error for a provider status block reporting failure
fn status_error(http_status: StatusCode, status: &ApiStatus) -> Error {
  let message = status.message().to_string();

  if status.is_auth_failure()
    || http_status == StatusCode::UNAUTHORIZED
    || http_status == StatusCode::FORBIDDEN
  {
    return Error::Auth(message);
  }

  if http_status == StatusCode::TOO_MANY_REQUESTS || RATE_LIMIT_CODES.contains(&status.error_code)
  {
    return Error::RateLimit(message);
  }

  if let Some(symbols) = parse_invalid_symbols(&message) {
    return Error::InvalidSymbols(symbols);
  }

  Error::Api { code: status.error_code, message }
}

/// Error for a non-success status whose body is not a provider envelope
fn http_error(http_status: StatusCode) -> Error {
  match http_status {
    StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
      Error::Auth(format!("Credential rejected with HTTP {}", http_status))
    }
    StatusCode::TOO_MANY_REQUESTS => Error::RateLimit(format!("HTTP {}", http_status)),
    _ => Error::Http(format!("HTTP error: {}", http_status)),
  }
}

/// Extract the rejected symbols from messages such as
/// `Invalid value for "symbol": "XYZ"` or `Invalid values for "symbol": "XYZ,QQQ"`.
fn parse_invalid_symbols(message: &str) -> Option<Vec<String>> {
  if !message.starts_with("Invalid value") {
    return None;
  }

  let marker = "\"symbol\": \"";
  let start = message.find(marker)? + marker.len();
  let rest = &message[start..];
  let end = rest.find('"')?;

  let symbols: Vec<String> = rest[..end]
    .split(',')
    .map(|s| s.trim().to_uppercase())
    .filter(|s| !s.is_empty())
    .collect();

  if symbols.is_empty() { None } else { Some(symbols) }
}

fn truncate(text: &str, max: usize) -> &str {
  match text.char_indices().nth(max) {
    Some((idx, _)) => &text[..idx],
    None => text,
  }
}
