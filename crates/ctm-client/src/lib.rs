//! # ctm-client
//!
//! A small CoinMarketCap API client covering what the table maker needs.
//!
//! ## Features
//!
//! - **Listings**: the latest top-ranked listings converted to USD
//! - **Symbol map**: resolve ticker symbols to CoinMarketCap ids
//! - **Type Safe**: strongly typed responses using ctm-models
//! - **Isolated**: one short-lived HTTP client per request, no shared state
//!
//! ## Usage
//!
//! ```rust,no_run
//! use ctm_client::CoinMarketCapClient;
//! use ctm_core::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let client = CoinMarketCapClient::new(config)?;
//!
//!     let listings = client.listings().latest().await?;
//!     println!("Top listing: {}", listings[0].symbol);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All methods return `Result<T, ctm_core::Error>`. Connection problems map to
//! `Error::Transport`, rejected keys to `Error::Auth`, and bodies that do not
//! decode to `Error::Parse`.

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod endpoints;
pub mod transport;

// Re-export the main client and common types
pub use client::CoinMarketCapClient;
pub use ctm_core::{Config, Error, Result};

// Re-export endpoint modules for direct access if needed
pub use endpoints::{
  listings::ListingsEndpoints,
  map::{normalize_symbols, MapEndpoints},
};
