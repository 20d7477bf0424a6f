/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-dot-]browne[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! Envelope and status block shared by every CoinMarketCap response

use serde::{Deserialize, Serialize};

/// Provider status codes for a rejected credential
pub const STATUS_API_KEY_INVALID: i64 = 1001;
pub const STATUS_API_KEY_MISSING: i64 = 1002;
pub const STATUS_API_KEY_PLAN_REQUIRES_PAYMENT: i64 = 1003;
pub const STATUS_API_KEY_PLAN_PAYMENT_EXPIRED: i64 = 1004;
pub const STATUS_API_KEY_REQUIRED: i64 = 1005;
pub const STATUS_API_KEY_PLAN_UNAUTHORIZED: i64 = 1006;
pub const STATUS_API_KEY_DISABLED: i64 = 1007;

/// Status block present on success and error responses alike
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiStatus {
  pub timestamp: String,
  pub error_code: i64,
  pub error_message: Option<String>,
  #[serde(default)]
  pub elapsed: i64,
  #[serde(default)]
  pub credit_count: i64,
  #[serde(default)]
  pub notice: Option<String>,
}

impl ApiStatus {
  pub fn is_success(&self) -> bool {
    self.error_code == 0
  }

  /// Whether the provider rejected the credential itself
  pub fn is_auth_failure(&self) -> bool {
    (STATUS_API_KEY_INVALID..=STATUS_API_KEY_DISABLED).contains(&self.error_code)
  }

  pub fn message(&self) -> &str {
    self.error_message.as_deref().unwrap_or("Unknown CoinMarketCap error")
  }
}

/// Response envelope. `data` is absent on error payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
  pub status: ApiStatus,
  pub data: Option<T>,
}

/// Smart contract platform a token is issued on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Platform {
  pub id: u64,
  pub name: String,
  pub symbol: String,
  pub slug: String,
  #[serde(default)]
  pub token_address: Option<String>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_error_envelope_without_data() {
    let json = r#"{
      "status": {
        "timestamp": "2025-08-14T10:00:00.000Z",
        "error_code": 1001,
        "error_message": "This API Key is invalid.",
        "elapsed": 0,
        "credit_count": 0
      }
    }"#;

    let response: ApiResponse<Vec<serde_json::Value>> = serde_json::from_str(json).unwrap();
    assert!(response.data.is_none());
    assert!(!response.status.is_success());
    assert!(response.status.is_auth_failure());
    assert_eq!(response.status.message(), "This API Key is invalid.");
  }

  #[test]
  fn test_bad_request_is_not_auth_failure() {
    let status = ApiStatus {
      timestamp: "2025-08-14T10:00:00.000Z".to_string(),
      error_code: 400,
      error_message: Some("Invalid value for \"symbol\": \"XYZ\"".to_string()),
      elapsed: 0,
      credit_count: 0,
      notice: None,
    };
    assert!(!status.is_auth_failure());
  }

  #[test]
  fn test_missing_status_fails() {
    let json = r#"{"data": []}"#;
    let result = serde_json::from_str::<ApiResponse<Vec<serde_json::Value>>>(json);
    assert!(result.is_err());
  }
}
