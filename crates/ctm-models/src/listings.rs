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

use crate::common::Platform;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One asset from `/v1/cryptocurrency/listings/latest`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingRecord {
  /// Unique CoinMarketCap identifier
  pub id: u64,

  pub name: String,

  /// Ticker symbol. Not unique across assets.
  pub symbol: String,

  pub slug: String,

  pub num_market_pairs: Option<u32>,

  pub date_added: Option<DateTime<Utc>>,

  #[serde(default)]
  pub tags: Vec<String>,

  pub max_supply: Option<f64>,

  pub circulating_supply: Option<f64>,

  pub total_supply: Option<f64>,

  #[serde(default)]
  pub infinite_supply: Option<bool>,

  pub platform: Option<Platform>,

  /// Provider rank by market capitalisation, 1 = largest
  pub cmc_rank: Option<u32>,

  #[serde(default)]
  pub self_reported_circulating_supply: Option<f64>,

  #[serde(default)]
  pub self_reported_market_cap: Option<f64>,

  pub last_updated: DateTime<Utc>,

  pub quote: ListingQuotes,
}

/// Quote block keyed by conversion currency. Only USD is requested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingQuotes {
  #[serde(rename = "USD")]
  pub usd: Quote,
}

/// Market metrics converted to a single quote currency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
  pub price: Option<f64>,
  pub volume_24h: Option<f64>,
  pub volume_change_24h: Option<f64>,
  pub percent_change_1h: Option<f64>,
  pub percent_change_24h: Option<f64>,
  pub percent_change_7d: Option<f64>,
  pub percent_change_30d: Option<f64>,
  pub percent_change_60d: Option<f64>,
  pub percent_change_90d: Option<f64>,
  pub market_cap: Option<f64>,
  pub market_cap_dominance: Option<f64>,
  pub fully_diluted_market_cap: Option<f64>,
  #[serde(default)]
  pub tvl: Option<f64>,
  pub last_updated: Option<DateTime<Utc>>,
}

/// Listings snapshot in provider rank order
pub type ListingSet = Vec<ListingRecord>;
