//! `/v1/cryptocurrency/listings/latest`

use crate::endpoints::{impl_endpoint_base, EndpointBase};
use crate::transport::Transport;
use ctm_core::{Endpoint, Result, QUOTE_CURRENCY};
use ctm_models::{ListingRecord, ListingSet};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Latest listings endpoint
pub struct ListingsEndpoints {
  transport: Arc<Transport>,
  limit: usize,
}

impl_endpoint_base!(ListingsEndpoints);

impl ListingsEndpoints {
  /// Create a new listings endpoints instance
  pub fn new(transport: Arc<Transport>, limit: usize) -> Self {
    Self { transport, limit }
  }

  /// Fetch the top ranked listings converted to USD
  ///
  /// Issues one GET with `start=1`, `limit=<limit>` and `convert=USD`. The
  /// records come back ordered by rank, largest market cap first.
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// # use ctm_client::CoinMarketCapClient;
  /// # use ctm_core::Config;
  /// # async fn run() -> ctm_core::Result<()> {
  /// let client = CoinMarketCapClient::new(Config::from_env()?)?;
  /// let listings = client.listings().latest().await?;
  /// println!("Top asset: {}", listings[0].symbol);
  /// # Ok(())
  /// # }
  /// ```
  #[instrument(skip(self), fields(limit = self.limit))]
  pub async fn latest(&self) -> Result<ListingSet> {
    let params = [
      ("start", "1".to_string()),
      ("limit", self.limit.to_string()),
      ("convert", QUOTE_CURRENCY.to_string()),
    ];

    let mut listings: Vec<ListingRecord> =
      self.transport().get(Endpoint::ListingsLatest, &params).await?;
    debug!("CoinMarketCap returned {} listings", listings.len());

    // Stable, so ties and unranked records keep provider order.
    listings.sort_by_key(|record| record.cmc_rank.unwrap_or(u32::MAX));

    info!("Fetched {} listings", listings.len());
    Ok(listings)
  }
}
