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

//! Data source traits the pipeline pulls listings and ids through

use async_trait::async_trait;
use ctm_client::CoinMarketCapClient;
use ctm_core::Result;
use ctm_models::ListingSet;
use std::collections::HashSet;

/// Anything that can produce a fresh listings snapshot
#[async_trait]
pub trait ListingsSource: Send + Sync {
  /// Fetch the current listings, ordered by rank
  async fn fetch_listings(&self) -> Result<ListingSet>;
}

/// Anything that can turn ticker symbols into asset ids
#[async_trait]
pub trait IdResolver: Send + Sync {
  /// Every id using any of the given symbols. Unknown symbols contribute nothing.
  async fn resolve_ids(&self, symbols: &[String]) -> Result<HashSet<u64>>;
}

#[async_trait]
impl ListingsSource for CoinMarketCapClient {
  async fn fetch_listings(&self) -> Result<ListingSet> {
    self.listings().latest().await
  }
}

#[async_trait]
impl IdResolver for CoinMarketCapClient {
  async fn resolve_ids(&self, symbols: &[String]) -> Result<HashSet<u64>> {
    self.map().resolve_ids(symbols).await
  }
}
