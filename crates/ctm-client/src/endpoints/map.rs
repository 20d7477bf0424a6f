//! `/v1/cryptocurrency/map` and ticker symbol normalisation

use crate::endpoints::{impl_endpoint_base, EndpointBase};
use crate::transport::Transport;
use ctm_core::{Endpoint, Error, Result};
use ctm_models::MapEntry;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Split a user supplied ticker string into wire symbols.
///
/// Commas and whitespace both separate symbols, in any run. Empty tokens are
/// dropped, symbols are upper-cased and duplicates removed keeping first
/// occurrence.
pub fn normalize_symbols(raw: &str) -> Vec<String> {
  let mut symbols: Vec<String> = Vec::new();
  for token in raw.split(|c: char| c == ',' || c.is_whitespace()) {
    if token.is_empty() {
      continue;
    }
    let symbol = token.to_uppercase();
    if !symbols.contains(&symbol) {
      symbols.push(symbol);
    }
  }
  symbols
}

/// Symbol to CoinMarketCap id map endpoint
pub struct MapEndpoints {
  transport: Arc<Transport>,
}

impl_endpoint_base!(MapEndpoints);

impl MapEndpoints {
  /// Create a new map endpoints instance
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  /// Look up every asset using any of the given symbols
  #[instrument(skip(self), fields(count = symbols.len()))]
  pub async fn entries_for_symbols(&self, symbols: &[String]) -> Result<Vec<MapEntry>> {
    let params = [("symbol", symbols.join(","))];
    self.transport().get(Endpoint::CryptoMap, &params).await
  }

  /// Resolve ticker symbols to the set of all matching CoinMarketCap ids.
  ///
  /// A symbol reused by several assets contributes every id. Symbols the
  /// provider does not know contribute nothing: when the provider rejects the
  /// request for unknown symbols, it is sent again without the ones it named.
  /// Each rejection must name at least one symbol still being sent, so there
  /// are at most as many requests as submitted symbols.
  pub async fn resolve_ids(&self, symbols: &[String]) -> Result<HashSet<u64>> {
    let mut remaining: Vec<String> = symbols.to_vec();

    let entries = loop {
      if remaining.is_empty() {
        return Ok(HashSet::new());
      }

      match self.entries_for_symbols(&remaining).await {
        Ok(entries) => break entries,
        Err(Error::InvalidSymbols(rejected)) => {
          warn!("CoinMarketCap does not know symbols: {}", rejected.join(","));
          let before = remaining.len();
          remaining.retain(|s| !rejected.contains(s));

          if remaining.len() == before {
            // The rejection names nothing we sent.
            return Err(Error::InvalidSymbols(rejected));
          }
        }
        Err(e) => return Err(e),
      }
    };

    for entry in &entries {
      debug!("{} -> {} ({})", entry.symbol, entry.id, entry.name);
    }

    let ids: HashSet<u64> = entries.iter().map(|entry| entry.id).collect();
    info!("Resolved {} symbols to {} ids", symbols.len(), ids.len());
    Ok(ids)
  }
}
