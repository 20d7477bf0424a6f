//! # ctm-models
//!
//! Data models for CoinMarketCap API responses.
//!
//! Every response is decoded into explicit structures at the API boundary.
//! Required fields that are missing, or carry the wrong type, fail decoding
//! instead of surfacing later as missing columns.
//!
//! ## Usage
//!
//! ```ignore
//! use ctm_models::{ApiResponse, ListingRecord};
//!
//! let response: ApiResponse<Vec<ListingRecord>> = serde_json::from_str(&body)?;
//! ```

#![warn(clippy::all)]

pub mod common;
pub mod listings;
pub mod map;

// Re-export common types for convenience
pub use common::*;

// Re-export all model types
pub use listings::*;
pub use map::*;
