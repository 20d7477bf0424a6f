use anyhow::{Context, Result};
use ctm_core::{ColumnCatalog, Config as CoreConfig};
use std::env;
use std::path::Path;

/// Catalog file picked up from the working directory when none is given
pub const DEFAULT_COLUMNS_CONFIG: &str = "columns.json";

/// Build the API configuration. A key given on the command line wins over
/// `CMC_API_KEY`; everything else comes from the environment.
pub fn api_config(api_key: Option<String>) -> Result<CoreConfig> {
  let config = CoreConfig::from_lookup(|name| match name {
    "CMC_API_KEY" => api_key.clone().or_else(|| env::var(name).ok()),
    _ => env::var(name).ok(),
  })
  .context("Failed to load CoinMarketCap configuration")?;

  Ok(config)
}

/// Load the selectable columns.
///
/// An explicit path must exist. Without one, `columns.json` in the working
/// directory is used if present, otherwise every known column is selectable.
pub fn column_catalog(path: Option<&Path>) -> Result<ColumnCatalog> {
  let path = match path {
    Some(path) => path,
    None if Path::new(DEFAULT_COLUMNS_CONFIG).exists() => Path::new(DEFAULT_COLUMNS_CONFIG),
    None => return Ok(ColumnCatalog::default()),
  };

  ColumnCatalog::from_path(path)
    .with_context(|| format!("Failed to load column catalog from {}", path.display()))
}
