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

//! Output column vocabulary.
//!
//! Every listing field the table maker knows about is a [`ColumnKey`]. Each key
//! carries the provider's raw field name (flattened with dots, e.g.
//! `quote.USD.price`) and the display name used in tables and CSV headers
//! (e.g. `price_USD`). The list of keys is the relabel map: it is fixed at
//! compile time and has exactly one entry per known raw field.

use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ColumnKey {
  Id,
  Name,
  Symbol,
  Slug,
  NumMarketPairs,
  DateAdded,
  MaxSupply,
  CirculatingSupply,
  TotalSupply,
  CmcRank,
  Price,
  Volume24h,
  VolumeChange24h,
  PercentChange1h,
  PercentChange24h,
  PercentChange7d,
  PercentChange30d,
  PercentChange60d,
  PercentChange90d,
  MarketCap,
  MarketCapDominance,
  FullyDilutedMarketCap,
  LastUpdated,
}

impl ColumnKey {
  /// Every known column, in provider order.
  pub const ALL: [ColumnKey; 23] = [
    ColumnKey::Id,
    ColumnKey::Name,
    ColumnKey::Symbol,
    ColumnKey::Slug,
    ColumnKey::NumMarketPairs,
    ColumnKey::DateAdded,
    ColumnKey::MaxSupply,
    ColumnKey::CirculatingSupply,
    ColumnKey::TotalSupply,
    ColumnKey::CmcRank,
    ColumnKey::Price,
    ColumnKey::Volume24h,
    ColumnKey::VolumeChange24h,
    ColumnKey::PercentChange1h,
    ColumnKey::PercentChange24h,
    ColumnKey::PercentChange7d,
    ColumnKey::PercentChange30d,
    ColumnKey::PercentChange60d,
    ColumnKey::PercentChange90d,
    ColumnKey::MarketCap,
    ColumnKey::MarketCapDominance,
    ColumnKey::FullyDilutedMarketCap,
    ColumnKey::LastUpdated,
  ];

  /// Field name as returned by the provider, nested quote fields flattened with dots
  pub fn raw_name(&self) -> &'static str {
    match self {
      ColumnKey::Id => "id",
      ColumnKey::Name => "name",
      ColumnKey::Symbol => "symbol",
      ColumnKey::Slug => "slug",
      ColumnKey::NumMarketPairs => "num_market_pairs",
      ColumnKey::DateAdded => "date_added",
      ColumnKey::MaxSupply => "max_supply",
      ColumnKey::CirculatingSupply => "circulating_supply",
      ColumnKey::TotalSupply => "total_supply",
      ColumnKey::CmcRank => "cmc_rank",
      ColumnKey::Price => "quote.USD.price",
      ColumnKey::Volume24h => "quote.USD.volume_24h",
      ColumnKey::VolumeChange24h => "quote.USD.volume_change_24h",
      ColumnKey::PercentChange1h => "quote.USD.percent_change_1h",
      ColumnKey::PercentChange24h => "quote.USD.percent_change_24h",
      ColumnKey::PercentChange7d => "quote.USD.percent_change_7d",
      ColumnKey::PercentChange30d => "quote.USD.percent_change_30d",
      ColumnKey::PercentChange60d => "quote.USD.percent_change_60d",
      ColumnKey::PercentChange90d => "quote.USD.percent_change_90d",
      ColumnKey::MarketCap => "quote.USD.market_cap",
      ColumnKey::MarketCapDominance => "quote.USD.market_cap_dominance",
      ColumnKey::FullyDilutedMarketCap => "quote.USD.fully_diluted_market_cap",
      ColumnKey::LastUpdated => "quote.USD.last_updated",
    }
  }

  /// Human readable name used for table and CSV headers
  pub fn display_name(&self) -> &'static str {
    match self {
      ColumnKey::Id => "id",
      ColumnKey::Name => "name",
      ColumnKey::Symbol => "ticker",
      ColumnKey::Slug => "slug",
      ColumnKey::NumMarketPairs => "market_pairs",
      ColumnKey::DateAdded => "date_added",
      ColumnKey::MaxSupply => "max_supply",
      ColumnKey::CirculatingSupply => "circ_supply",
      ColumnKey::TotalSupply => "total_supply",
      ColumnKey::CmcRank => "CMC_rank",
      ColumnKey::Price => "price_USD",
      ColumnKey::Volume24h => "24h_volume",
      ColumnKey::VolumeChange24h => "24h_volume_change",
      ColumnKey::PercentChange1h => "1h%",
      ColumnKey::PercentChange24h => "24h%",
      ColumnKey::PercentChange7d => "7d%",
      ColumnKey::PercentChange30d => "30d%",
      ColumnKey::PercentChange60d => "60d%",
      ColumnKey::PercentChange90d => "90d%",
      ColumnKey::MarketCap => "market_cap",
      ColumnKey::MarketCapDominance => "market_cap_dominance",
      ColumnKey::FullyDilutedMarketCap => "fully_diluted_market_cap",
      ColumnKey::LastUpdated => "last_updated",
    }
  }
}

impl fmt::Display for ColumnKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.display_name())
  }
}

/// Accepts either the raw provider name or the display name.
impl FromStr for ColumnKey {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    let name = s.trim();
    ColumnKey::ALL
      .iter()
      .copied()
      .find(|key| key.raw_name() == name || key.display_name() == name)
      .ok_or_else(|| Error::Validation(format!("Unknown column '{}'", name)))
  }
}

impl Serialize for ColumnKey {
  fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(self.raw_name())
  }
}

impl<'de> Deserialize<'de> for ColumnKey {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
    let name = String::deserialize(deserializer)?;
    name.parse().map_err(serde::de::Error::custom)
  }
}

/// The selectable columns offered to the user.
///
/// Loaded once at start up from a JSON array of column names. Every entry must
/// be a known [`ColumnKey`], so the catalog can never drift from the relabel map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnCatalog {
  keys: Vec<ColumnKey>,
}

impl Default for ColumnCatalog {
  fn default() -> Self {
    Self { keys: ColumnKey::ALL.to_vec() }
  }
}

impl ColumnCatalog {
  pub fn new(keys: Vec<ColumnKey>) -> Self {
    Self { keys }
  }

  /// Parse a catalog from a JSON array of column names
  pub fn from_json_str(json: &str) -> Result<Self> {
    serde_json::from_str(json)
      .map_err(|e| Error::Config(format!("Invalid column configuration: {}", e)))
  }

  /// Read the catalog file
  pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
    let contents = std::fs::read_to_string(path.as_ref())?;
    Self::from_json_str(&contents)
  }

  pub fn keys(&self) -> &[ColumnKey] {
    &self.keys
  }

  pub fn contains(&self, key: ColumnKey) -> bool {
    // The identifier is always available, selectable or not.
    key == ColumnKey::Id || self.keys.contains(&key)
  }
}

/// An ordered set of output columns, identifier first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSelection {
  keys: Vec<ColumnKey>,
}

impl ColumnSelection {
  /// Build a selection, prepending the identifier and dropping duplicates
  pub fn new<I>(keys: I) -> Self
  where
    I: IntoIterator<Item = ColumnKey>,
  {
    let mut selected = vec![ColumnKey::Id];
    for key in keys {
      if !selected.contains(&key) {
        selected.push(key);
      }
    }
    Self { keys: selected }
  }

  /// Every known column
  pub fn all() -> Self {
    Self::new(ColumnKey::ALL)
  }

  /// Validate user supplied column names against the relabel map and catalog
  pub fn from_names<I, S>(names: I, catalog: &ColumnCatalog) -> Result<Self>
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    let mut keys = Vec::new();
    for name in names {
      let name = name.as_ref();
      if name.trim().is_empty() {
        continue;
      }
      let key: ColumnKey = name.parse()?;
      if !catalog.contains(key) {
        return Err(Error::Validation(format!("Column '{}' is not selectable", name.trim())));
      }
      keys.push(key);
    }
    Ok(Self::new(keys))
  }

  pub fn keys(&self) -> &[ColumnKey] {
    &self.keys
  }

  pub fn len(&self) -> usize {
    self.keys.len()
  }

  pub fn is_empty(&self) -> bool {
    self.keys.is_empty()
  }
}
