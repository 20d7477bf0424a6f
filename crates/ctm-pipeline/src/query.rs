//! User query parsing and filtering

use crate::error::PipelineResult;
use crate::export::to_html;
use crate::projection::ListingTable;
use crate::sources::IdResolver;
use ctm_client::normalize_symbols;
use ctm_core::{Error, MAX_LISTING_LIMIT};
use tracing::{debug, info};

/// What the user asked for: some tickers, or the top N by rank
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuerySpec {
  Tickers(Vec<String>),
  Top(usize),
}

impl QuerySpec {
  /// Parse free text. Digits only is a row count, anything else a ticker list.
  pub fn parse(input: &str) -> Result<Self, Error> {
    let trimmed = input.trim();

    if !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit()) {
      let count: usize = trimmed.parse().map_err(|_| out_of_range(trimmed))?;
      if !(1..=MAX_LISTING_LIMIT).contains(&count) {
        return Err(out_of_range(trimmed));
      }
      return Ok(QuerySpec::Top(count));
    }

    let symbols = normalize_symbols(trimmed);
    if symbols.is_empty() {
      return Err(Error::Validation(
        "Enter ticker symbols separated by commas, or a number of rows".to_string(),
      ));
    }
    Ok(QuerySpec::Tickers(symbols))
  }
}

fn out_of_range(count: &str) -> Error {
  Error::Validation(format!("Row count must be between 1 and {}, got {}", MAX_LISTING_LIMIT, count))
}

/// Filtered table plus its markup rendering
#[derive(Debug, Clone)]
pub struct QueryResult {
  pub table: ListingTable,
  pub html: String,
}

/// Applies a [`QuerySpec`] to a projected table
pub struct QueryEngine<'a, R: IdResolver + ?Sized> {
  resolver: &'a R,
}

impl<'a, R: IdResolver + ?Sized> QueryEngine<'a, R> {
  pub fn new(resolver: &'a R) -> Self {
    Self { resolver }
  }

  pub async fn run(&self, table: &ListingTable, spec: &QuerySpec) -> PipelineResult<QueryResult> {
    let filtered = match spec {
      QuerySpec::Tickers(symbols) => {
        let ids = self.resolver.resolve_ids(symbols).await?;
        debug!("Filtering {} rows against {} ids", table.len(), ids.len());
        table.retain_ids(&ids)
      }
      QuerySpec::Top(count) => table.head(*count),
    };

    info!("Query matched {} of {} rows", filtered.len(), table.len());
    let html = to_html(&filtered);
    Ok(QueryResult { table: filtered, html })
  }
}
