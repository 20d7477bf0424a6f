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

use crate::config;
use anyhow::{Context, Result};
use clap::Args;
use ctm_core::{ColumnCatalog, ColumnSelection, Config as CoreConfig};
use ctm_pipeline::{ArtifactPaths, ListingTable};
use prettytable::{Cell, Row, Table};
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug)]
pub struct QueryArgs {
  /// Ticker symbols separated by commas (e.g. "BTC, ETH"), or a row count from 1 to 100
  query: String,

  /// Columns to show besides the id, by provider or display name. Defaults to the whole catalog.
  #[arg(short, long, value_delimiter = ',')]
  columns: Vec<String>,

  /// CoinMarketCap API key
  #[arg(long, env = "CMC_API_KEY", hide_env_values = true)]
  api_key: Option<String>,

  /// Directory the CSV and HTML files are written to
  #[arg(short, long, default_value = ".")]
  out_dir: PathBuf,
}

/// Main execute function
pub async fn execute(args: QueryArgs, catalog: ColumnCatalog) -> Result<()> {
  let config = config::api_config(args.api_key.clone())?;

  run(&args, &catalog, config).await?;
  Ok(())
}

/// Resolve `--columns` against the catalog
fn selection_for(columns: &[String], catalog: &ColumnCatalog) -> Result<ColumnSelection> {
  if columns.is_empty() {
    return Ok(ColumnSelection::new(catalog.keys().iter().copied()));
  }
  Ok(ColumnSelection::from_names(columns, catalog)?)
}

async fn run(args: &QueryArgs, catalog: &ColumnCatalog, config: CoreConfig) -> Result<ArtifactPaths> {
  let selection = selection_for(&args.columns, catalog)?;
  info!("Running query '{}' with {} columns", args.query, selection.len());

  let output = ctm_pipeline::run(config, &args.query, &selection).await?;

  if output.filtered.is_empty() {
    println!("No listings matched '{}'", args.query.trim());
  } else {
    render_table(&output.filtered).printstd();
  }

  let paths = output
    .write_to(&args.out_dir)
    .with_context(|| format!("Failed to write exports to {}", args.out_dir.display()))?;

  info!("Filtered CSV: {}", paths.filtered_csv.display());
  info!("Unfiltered CSV: {}", paths.unfiltered_csv.display());
  info!("HTML table: {}", paths.html.display());

  Ok(paths)
}

fn render_table(listings: &ListingTable) -> Table {
  let mut table = Table::new();
  table.set_titles(Row::new(listings.headers().into_iter().map(Cell::new).collect()));

  for row in listings.rows() {
    table.add_row(Row::new(row.cells.iter().map(|cell| Cell::new(&cell.to_string())).collect()));
  }
  table
}

#[cfg(test)]
mod tests {
  use super::*;
  use ctm_core::{ColumnKey, Error};
  use ctm_pipeline::PipelineError;
  use serde_json::json;
  use wiremock::matchers::path;
  use wiremock::{Mock, MockServer, ResponseTemplate};

  fn args(query: &str, out_dir: PathBuf) -> QueryArgs {
    QueryArgs { query: query.to_string(), columns: vec![], api_key: None, out_dir }
  }

  fn config_for(server: &MockServer) -> CoreConfig {
    let mut config = CoreConfig::default_with_key("test_key".to_string());
    config.base_url = server.uri();
    config
  }

  fn listing(id: u64, symbol: &str, rank: u32) -> serde_json::Value {
    json!({
      "id": id,
      "name": symbol,
      "symbol": symbol,
      "slug": symbol.to_lowercase(),
      "num_market_pairs": 50,
      "date_added": "2015-08-07T00:00:00.000Z",
      "tags": [],
      "max_supply": null,
      "circulating_supply": 120000000.0,
      "total_supply": 120000000.0,
      "platform": null,
      "cmc_rank": rank,
      "last_updated": "2025-08-14T10:00:00.000Z",
      "quote": {
        "USD": {
          "price": 2500.5,
          "volume_24h": 1.0e10,
          "volume_change_24h": 1.0,
          "percent_change_1h": 0.1,
          "percent_change_24h": 0.2,
          "percent_change_7d": 0.3,
          "percent_change_30d": 0.4,
          "percent_change_60d": 0.5,
          "percent_change_90d": 0.6,
          "market_cap": 3.0e11,
          "market_cap_dominance": 18.0,
          "fully_diluted_market_cap": 3.0e11,
          "last_updated": "2025-08-14T10:00:00.000Z"
        }
      }
    })
  }

  fn status(code: i64, message: Option<&str>) -> serde_json::Value {
    json!({
      "timestamp": "2025-08-14T10:00:00.000Z",
      "error_code": code,
      "error_message": message,
      "elapsed": 1,
      "credit_count": 1
    })
  }

  #[test]
  fn test_selection_defaults_to_catalog() {
    let catalog = ColumnCatalog::new(vec![ColumnKey::Symbol, ColumnKey::Price]);
    let selection = selection_for(&[], &catalog).unwrap();
    assert_eq!(selection.keys(), &[ColumnKey::Id, ColumnKey::Symbol, ColumnKey::Price]);
  }

  #[test]
  fn test_selection_outside_catalog_rejected() {
    let catalog = ColumnCatalog::new(vec![ColumnKey::Symbol]);
    let err = selection_for(&["market_cap".to_string()], &catalog).unwrap_err();
    assert!(matches!(err.downcast_ref::<Error>(), Some(Error::Validation(_))));
  }

  #[tokio::test]
  async fn test_run_writes_three_artifacts() {
    let server = MockServer::start().await;
    Mock::given(path("/v1/cryptocurrency/listings/latest"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
        "status": status(0, None),
        "data": [listing(1, "BTC", 1), listing(1027, "ETH", 2)]
      })))
      .mount(&server)
      .await;

    let dir = tempfile::tempdir().unwrap();
    let mut query = args("1", dir.path().to_path_buf());
    query.columns = vec!["ticker".to_string(), "quote.USD.price".to_string()];
    let paths = run(&query, &ColumnCatalog::default(), config_for(&server)).await.unwrap();

    let filtered = std::fs::read_to_string(&paths.filtered_csv).unwrap();
    assert_eq!(filtered, "id,ticker,price_USD\n1,BTC,2500.5\n");
    assert!(paths.unfiltered_csv.exists());
    assert!(std::fs::read_to_string(&paths.html).unwrap().contains("<td>BTC</td>"));
  }

  #[tokio::test]
  async fn test_auth_failure_writes_nothing() {
    let server = MockServer::start().await;
    Mock::given(path("/v1/cryptocurrency/listings/latest"))
      .respond_with(
        ResponseTemplate::new(401).set_body_json(json!({"status": status(1001, Some("This API Key is invalid."))})),
      )
      .mount(&server)
      .await;

    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().join("out");
    let err = run(&args("BTC", out_dir.clone()), &ColumnCatalog::default(), config_for(&server))
      .await
      .unwrap_err();

    let pipeline = err.downcast_ref::<PipelineError>().unwrap();
    assert_eq!(pipeline.class(), "AuthError");
    assert!(!out_dir.exists());
  }

  #[tokio::test]
  async fn test_unknown_column_rejected_before_fetch() {
    let server = MockServer::start().await;
    Mock::given(path("/v1/cryptocurrency/listings/latest"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
        "status": status(0, None),
        "data": [listing(1, "BTC", 1)]
      })))
      .expect(0)
      .mount(&server)
      .await;

    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().join("out");
    let mut query = args("BTC", out_dir.clone());
    query.columns = vec!["price_EUR".to_string()];

    let err = run(&query, &ColumnCatalog::default(), config_for(&server)).await.unwrap_err();

    let core = err.downcast_ref::<Error>().unwrap();
    assert!(matches!(core, Error::Validation(_)));
    assert_eq!(core.class(), "ValidationError");
    assert!(!out_dir.exists());
  }

  #[test]
  fn test_render_table_shape() {
    let catalog = ColumnCatalog::default();
    let selection = selection_for(&["ticker".to_string()], &catalog).unwrap();
    assert_eq!(selection.len(), 2);

    let table = render_table(&ctm_pipeline::project(&vec![], &selection));
    assert_eq!(table.len(), 0);
  }
}
