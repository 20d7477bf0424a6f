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

//! Top level client handing out endpoint groups

use crate::endpoints::{listings::ListingsEndpoints, map::MapEndpoints};
use crate::transport::Transport;
use ctm_core::{Config, Result};
use std::sync::Arc;

/// Main CoinMarketCap API client
///
/// Provides access to the listings and map endpoints. A client is meant to be
/// built for one query and dropped afterwards; it holds no session state
/// beyond the credential it was given.
///
/// # Examples
///
/// ```ignore
/// use ctm_client::CoinMarketCapClient;
/// use ctm_core::Config;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = Config::from_env()?;
///     let client = CoinMarketCapClient::new(config)?;
///
///     let listings = client.listings().latest().await?;
///     let ids = client.map().resolve_ids(&["BTC".to_string()]).await?;
///     println!("{} listings, {} ids for BTC", listings.len(), ids.len());
///
///     Ok(())
/// }
/// ```
pub struct CoinMarketCapClient {
  transport: Arc<Transport>,
  listing_limit: usize,
}

impl CoinMarketCapClient {
  /// Create a new CoinMarketCap API client
  ///
  /// # Arguments
  ///
  /// * `config` - Configuration containing API key and other settings
  ///
  /// # Errors
  ///
  /// Returns an error if the configuration is invalid, e.g. an empty key.
  pub fn new(config: Config) -> Result<Self> {
    let transport = Arc::new(Transport::new(&config)?);
    Ok(Self { transport, listing_limit: config.listing_limit })
  }

  /// Get access to the latest listings endpoint
  pub fn listings(&self) -> ListingsEndpoints {
    ListingsEndpoints::new(self.transport.clone(), self.listing_limit)
  }

  /// Get access to the symbol map endpoint
  pub fn map(&self) -> MapEndpoints {
    MapEndpoints::new(self.transport.clone())
  }
}

impl std::fmt::Debug for CoinMarketCapClient {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("CoinMarketCapClient")
      .field("transport", &self.transport)
      .field("listing_limit", &self.listing_limit)
      .finish()
  }
}
