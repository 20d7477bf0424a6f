use crate::common::Platform;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry from `/v1/cryptocurrency/map`.
///
/// A symbol query returns one entry per asset using that symbol, so several
/// entries may share a ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapEntry {
  pub id: u64,
  pub rank: Option<u32>,
  pub name: String,
  pub symbol: String,
  pub slug: String,
  #[serde(default)]
  pub is_active: Option<u8>,
  #[serde(default)]
  pub first_historical_data: Option<DateTime<Utc>>,
  #[serde(default)]
  pub last_historical_data: Option<DateTime<Utc>>,
  pub platform: Option<Platform>,
}
