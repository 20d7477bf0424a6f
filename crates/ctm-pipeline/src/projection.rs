//! Column projection and relabeling of a listings snapshot

use chrono::{DateTime, SecondsFormat, Utc};
use ctm_core::{ColumnKey, ColumnSelection};
use ctm_models::{ListingRecord, ListingSet};
use std::collections::HashSet;
use std::fmt;

/// A single typed table cell
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
  Integer(u64),
  Float(f64),
  Text(String),
  Timestamp(DateTime<Utc>),
  /// Provider sent null or omitted the field
  Missing,
}

impl CellValue {
  fn integer(value: Option<u32>) -> Self {
    value.map_or(CellValue::Missing, |v| CellValue::Integer(u64::from(v)))
  }

  fn float(value: Option<f64>) -> Self {
    value.map_or(CellValue::Missing, CellValue::Float)
  }

  fn timestamp(value: Option<DateTime<Utc>>) -> Self {
    value.map_or(CellValue::Missing, CellValue::Timestamp)
  }

  pub fn is_missing(&self) -> bool {
    matches!(self, CellValue::Missing)
  }
}

impl fmt::Display for CellValue {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      CellValue::Integer(v) => write!(f, "{}", v),
      CellValue::Float(v) => write!(f, "{}", v),
      CellValue::Text(v) => f.write_str(v),
      CellValue::Timestamp(v) => f.write_str(&v.to_rfc3339_opts(SecondsFormat::Millis, true)),
      CellValue::Missing => Ok(()),
    }
  }
}

/// Read one column out of a listing record
pub fn cell_for(key: ColumnKey, record: &ListingRecord) -> CellValue {
  let quote = &record.quote.usd;
  match key {
    ColumnKey::Id => CellValue::Integer(record.id),
    ColumnKey::Name => CellValue::Text(record.name.clone()),
    ColumnKey::Symbol => CellValue::Text(record.symbol.clone()),
    ColumnKey::Slug => CellValue::Text(record.slug.clone()),
    ColumnKey::NumMarketPairs => CellValue::integer(record.num_market_pairs),
    ColumnKey::DateAdded => CellValue::timestamp(record.date_added),
    ColumnKey::MaxSupply => CellValue::float(record.max_supply),
    ColumnKey::CirculatingSupply => CellValue::float(record.circulating_supply),
    ColumnKey::TotalSupply => CellValue::float(record.total_supply),
    ColumnKey::CmcRank => CellValue::integer(record.cmc_rank),
    ColumnKey::Price => CellValue::float(quote.price),
    ColumnKey::Volume24h => CellValue::float(quote.volume_24h),
    ColumnKey::VolumeChange24h => CellValue::float(quote.volume_change_24h),
    ColumnKey::PercentChange1h => CellValue::float(quote.percent_change_1h),
    ColumnKey::PercentChange24h => CellValue::float(quote.percent_change_24h),
    ColumnKey::PercentChange7d => CellValue::float(quote.percent_change_7d),
    ColumnKey::PercentChange30d => CellValue::float(quote.percent_change_30d),
    ColumnKey::PercentChange60d => CellValue::float(quote.percent_change_60d),
    ColumnKey::PercentChange90d => CellValue::float(quote.percent_change_90d),
    ColumnKey::MarketCap => CellValue::float(quote.market_cap),
    ColumnKey::MarketCapDominance => CellValue::float(quote.market_cap_dominance),
    ColumnKey::FullyDilutedMarketCap => CellValue::float(quote.fully_diluted_market_cap),
    ColumnKey::LastUpdated => CellValue::timestamp(quote.last_updated),
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
  /// CoinMarketCap id of the asset the row came from
  pub id: u64,
  pub cells: Vec<CellValue>,
}

/// Relabeled listings: display headers plus typed rows in rank order.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingTable {
  keys: Vec<ColumnKey>,
  rows: Vec<TableRow>,
}

impl ListingTable {
  pub fn keys(&self) -> &[ColumnKey] {
    &self.keys
  }

  /// Column headers in display form
  pub fn headers(&self) -> Vec<&'static str> {
    self.keys.iter().map(|key| key.display_name()).collect()
  }

  pub fn rows(&self) -> &[TableRow] {
    &self.rows
  }

  pub fn len(&self) -> usize {
    self.rows.len()
  }

  pub fn is_empty(&self) -> bool {
    self.rows.is_empty()
  }

  pub fn ids(&self) -> Vec<u64> {
    self.rows.iter().map(|row| row.id).collect()
  }

  /// All cells of one column, top to bottom
  pub fn column(&self, key: ColumnKey) -> Option<Vec<&CellValue>> {
    let index = self.keys.iter().position(|k| *k == key)?;
    Some(self.rows.iter().map(|row| &row.cells[index]).collect())
  }

  /// Rows whose id is in `ids`, order preserved
  pub fn retain_ids(&self, ids: &HashSet<u64>) -> ListingTable {
    ListingTable {
      keys: self.keys.clone(),
      rows: self.rows.iter().filter(|row| ids.contains(&row.id)).cloned().collect(),
    }
  }

  /// The first `n` rows, or all of them when there are fewer
  pub fn head(&self, n: usize) -> ListingTable {
    ListingTable { keys: self.keys.clone(), rows: self.rows.iter().take(n).cloned().collect() }
  }
}

/// Keep the identifier plus the selected columns, named by their display names.
pub fn project(listings: &ListingSet, selection: &ColumnSelection) -> ListingTable {
  let keys = selection.keys().to_vec();
  let rows = listings
    .iter()
    .map(|record| TableRow {
      id: record.id,
      cells: keys.iter().map(|key| cell_for(*key, record)).collect(),
    })
    .collect();

  ListingTable { keys, rows }
}

/// Project every known column
pub fn project_all(listings: &ListingSet) -> ListingTable {
  project(listings, &ColumnSelection::all())
}

#[cfg(test)]
pub(crate) mod tests {
  use super::*;
  use chrono::TimeZone;
  use ctm_models::{ListingQuotes, Quote};

  pub(crate) fn record(id: u64, symbol: &str, rank: u32) -> ListingRecord {
    ListingRecord {
      id,
      name: format!("{} coin", symbol),
      symbol: symbol.to_string(),
      slug: symbol.to_lowercase(),
      num_market_pairs: Some(12),
      date_added: Some(Utc.with_ymd_and_hms(2013, 4, 28, 0, 0, 0).unwrap()),
      tags: vec![],
      max_supply: None,
      circulating_supply: Some(19_000_000.0),
      total_supply: Some(19_000_000.0),
      infinite_supply: Some(false),
      platform: None,
      cmc_rank: Some(rank),
      self_reported_circulating_supply: None,
      self_reported_market_cap: None,
      last_updated: Utc.with_ymd_and_hms(2025, 8, 14, 10, 0, 0).unwrap(),
      quote: ListingQuotes {
        usd: Quote {
          price: Some(100.0 / f64::from(rank)),
          volume_24h: Some(5.0e9),
          volume_change_24h: Some(-3.25),
          percent_change_1h: Some(0.1),
          percent_change_24h: Some(-1.5),
          percent_change_7d: Some(4.0),
          percent_change_30d: None,
          percent_change_60d: None,
          percent_change_90d: None,
          market_cap: Some(1.0e12 / f64::from(rank)),
          market_cap_dominance: Some(50.0),
          fully_diluted_market_cap: None,
          tvl: None,
          last_updated: Some(Utc.with_ymd_and_hms(2025, 8, 14, 10, 0, 0).unwrap()),
        },
      },
    }
  }

  #[test]
  fn test_project_prepends_identifier() {
    let listings = vec![record(1, "BTC", 1), record(1027, "ETH", 2)];
    let selection = ColumnSelection::new([ColumnKey::Price, ColumnKey::Symbol]);
    let table = project(&listings, &selection);

    assert_eq!(table.headers(), vec!["id", "price_USD", "ticker"]);
    assert_eq!(table.rows()[1].cells[0], CellValue::Integer(1027));
    assert_eq!(table.rows()[1].cells[2], CellValue::Text("ETH".to_string()));
  }

  #[test]
  fn test_project_identifier_not_duplicated() {
    let listings = vec![record(1, "BTC", 1)];
    let selection = ColumnSelection::new([ColumnKey::Id, ColumnKey::MarketCap, ColumnKey::Id]);
    let table = project(&listings, &selection);

    assert_eq!(table.headers(), vec!["id", "market_cap"]);
  }

  #[test]
  fn test_project_all_uses_display_names() {
    let table = project_all(&vec![record(1, "BTC", 1)]);
    let headers = table.headers();

    assert_eq!(headers.len(), ColumnKey::ALL.len());
    assert_eq!(headers[0], "id");
    assert!(headers.contains(&"CMC_rank"));
    assert!(headers.contains(&"circ_supply"));
    assert!(headers.contains(&"90d%"));
    assert!(!headers.iter().any(|h| h.starts_with("quote.")));
  }

  #[test]
  fn test_missing_values_are_typed_missing() {
    let table = project(&vec![record(1, "BTC", 1)], &ColumnSelection::new([ColumnKey::MaxSupply]));
    assert!(table.rows()[0].cells[1].is_missing());
    assert_eq!(table.rows()[0].cells[1].to_string(), "");
  }

  #[test]
  fn test_cell_display() {
    let ts = Utc.with_ymd_and_hms(2025, 8, 14, 10, 0, 0).unwrap();
    assert_eq!(CellValue::Integer(42).to_string(), "42");
    assert_eq!(CellValue::Float(0.1).to_string(), "0.1");
    assert_eq!(CellValue::Float(5.0e9).to_string(), "5000000000");
    assert_eq!(CellValue::Timestamp(ts).to_string(), "2025-08-14T10:00:00.000Z");
    assert_eq!(CellValue::Text("Bitcoin".into()).to_string(), "Bitcoin");
  }

  #[test]
  fn test_retain_ids_keeps_order() {
    let listings = vec![record(1, "BTC", 1), record(1027, "ETH", 2), record(825, "USDT", 3)];
    let table = project_all(&listings);
    let kept = table.retain_ids(&HashSet::from([825, 1]));

    assert_eq!(kept.ids(), vec![1, 825]);
    assert_eq!(kept.keys(), table.keys());
  }

  #[test]
  fn test_head_clamps_to_row_count() {
    let listings = vec![record(1, "BTC", 1), record(1027, "ETH", 2)];
    let table = project_all(&listings);

    assert_eq!(table.head(1).ids(), vec![1]);
    assert_eq!(table.head(10).len(), 2);
  }

  #[test]
  fn test_column_lookup() {
    let listings = vec![record(1, "BTC", 1), record(1027, "ETH", 2)];
    let table = project(&listings, &ColumnSelection::new([ColumnKey::CmcRank]));

    let ranks = table.column(ColumnKey::CmcRank).unwrap();
    assert_eq!(ranks, vec![&CellValue::Integer(1), &CellValue::Integer(2)]);
    assert!(table.column(ColumnKey::Price).is_none());
  }
}
