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

//! One query end to end: fetch, project, filter, export

use crate::error::PipelineResult;
use crate::export::{to_csv, IndexColumn, FILTERED_CSV, FILTERED_HTML, UNFILTERED_CSV};
use crate::projection::{project, project_all, ListingTable};
use crate::query::{QueryEngine, QuerySpec};
use crate::sources::{IdResolver, ListingsSource};
use ctm_client::CoinMarketCapClient;
use ctm_core::{ColumnSelection, Config};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

/// Everything a query produces, held in memory until written
#[derive(Debug, Clone)]
pub struct QueryOutput {
  pub filtered: ListingTable,
  pub html: String,
  pub filtered_csv: Vec<u8>,
  pub unfiltered_csv: Vec<u8>,
}

/// Where [`QueryOutput::write_to`] put each artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
  pub filtered_csv: PathBuf,
  pub unfiltered_csv: PathBuf,
  pub html: PathBuf,
}

impl QueryOutput {
  /// Write the two CSV files and the HTML table into `dir`, creating it if needed.
  ///
  /// Every artifact is first written to a staging name and only renamed into
  /// place once all three are on disk. On failure the staged and already
  /// renamed files are removed again.
  pub fn write_to(&self, dir: &Path) -> PipelineResult<ArtifactPaths> {
    fs::create_dir_all(dir)?;

    let paths = ArtifactPaths {
      filtered_csv: dir.join(FILTERED_CSV),
      unfiltered_csv: dir.join(UNFILTERED_CSV),
      html: dir.join(FILTERED_HTML),
    };

    let artifacts: [(&Path, &[u8]); 3] = [
      (&paths.filtered_csv, &self.filtered_csv),
      (&paths.unfiltered_csv, &self.unfiltered_csv),
      (&paths.html, self.html.as_bytes()),
    ];

    let mut staged: Vec<(PathBuf, &Path)> = Vec::with_capacity(artifacts.len());
    for (target, bytes) in artifacts {
      let staging = staging_path(target);
      if let Err(err) = fs::write(&staging, bytes) {
        remove_all(staged.iter().map(|(staging, _)| staging.as_path()));
        remove_all([staging.as_path()]);
        return Err(err.into());
      }
      staged.push((staging, target));
    }

    for (index, (staging, target)) in staged.iter().enumerate() {
      if let Err(err) = fs::rename(staging, target) {
        remove_all(staged[..index].iter().map(|(_, target)| *target));
        remove_all(staged[index..].iter().map(|(staging, _)| staging.as_path()));
        return Err(err.into());
      }
    }

    Ok(paths)
  }
}

/// Hidden sibling of `target` used while an export is incomplete
fn staging_path(target: &Path) -> PathBuf {
  let name = target.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
  target.with_file_name(format!(".{}.partial", name))
}

fn remove_all<'a>(paths: impl IntoIterator<Item = &'a Path>) {
  for path in paths.into_iter().filter(|path| path.is_file()) {
    if let Err(err) = fs::remove_file(path) {
      warn!("Could not remove {}: {}", path.display(), err);
    }
  }
}

/// Run a raw query string against `source`.
///
/// The query is parsed before anything is fetched, so a malformed query never
/// reaches the network.
pub async fn run_query<S>(
  source: &S,
  query: &str,
  columns: &ColumnSelection,
) -> PipelineResult<QueryOutput>
where
  S: ListingsSource + IdResolver + ?Sized,
{
  let spec = QuerySpec::parse(query)?;
  run_spec(source, &spec, columns).await
}

/// Run an already parsed query against `source`
#[instrument(skip(source, columns), fields(column_count = columns.len()))]
pub async fn run_spec<S>(
  source: &S,
  spec: &QuerySpec,
  columns: &ColumnSelection,
) -> PipelineResult<QueryOutput>
where
  S: ListingsSource + IdResolver + ?Sized,
{
  let listings = source.fetch_listings().await?;
  info!("Projecting {} listings", listings.len());

  let selected = project(&listings, columns);
  let everything = project_all(&listings);

  let result = QueryEngine::new(source).run(&selected, spec).await?;

  Ok(QueryOutput {
    filtered_csv: to_csv(&result.table, IndexColumn::Omit)?,
    unfiltered_csv: to_csv(&everything, IndexColumn::Include)?,
    filtered: result.table,
    html: result.html,
  })
}

/// Validate the query and credential, then run against CoinMarketCap.
///
/// The client is built for this call only and dropped when it returns.
pub async fn run(config: Config, query: &str, columns: &ColumnSelection) -> PipelineResult<QueryOutput> {
  let spec = QuerySpec::parse(query)?;
  let client = CoinMarketCapClient::new(config)?;
  run_spec(&client, &spec, columns).await
}
