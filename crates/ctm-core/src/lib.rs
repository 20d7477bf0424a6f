/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
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

pub mod columns;
pub mod config;
pub mod error;

pub use columns::{ColumnCatalog, ColumnKey, ColumnSelection};
pub use config::Config;
pub use error::{Error, Result};

/// The CoinMarketCap endpoints used by the table maker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
  /// Latest ranked listings snapshot
  ListingsLatest,
  /// Ticker symbol to CoinMarketCap id map
  CryptoMap,
}

impl Endpoint {
  /// Path of the endpoint relative to the API base URL
  pub fn path(&self) -> &'static str {
    match self {
      Endpoint::ListingsLatest => "/v1/cryptocurrency/listings/latest",
      Endpoint::CryptoMap => "/v1/cryptocurrency/map",
    }
  }
}

impl std::fmt::Display for Endpoint {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Endpoint::ListingsLatest => write!(f, "listings/latest"),
      Endpoint::CryptoMap => write!(f, "cryptocurrency/map"),
    }
  }
}

/// Base URL for the CoinMarketCap pro API
pub const COINMARKETCAP_BASE_URL: &str = "https://pro-api.coinmarketcap.com";

/// Header carrying the user supplied API key
pub const API_KEY_HEADER: &str = "X-CMC_PRO_API_KEY";

/// Fiat currency every listing is converted to
pub const QUOTE_CURRENCY: &str = "USD";

/// Listing limits. Paginated or larger result sets are not supported.
pub const DEFAULT_LISTING_LIMIT: usize = 100;
pub const MAX_LISTING_LIMIT: usize = 100;

/// Request timeout applied to every outbound call
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
