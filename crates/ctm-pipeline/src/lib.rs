//! # ctm-pipeline
//!
//! Turns a CoinMarketCap listings snapshot into the tables the user asked for.
//!
//! A query runs linearly: fetch listings, project and relabel columns, filter
//! by ticker or top-N, then export the filtered and unfiltered tables as CSV
//! and the filtered table as HTML.

pub mod error;
pub mod export;
pub mod pipeline;
pub mod projection;
pub mod query;
pub mod sources;

pub use error::{PipelineError, PipelineResult};
pub use export::{
  read_csv, to_csv, to_html, CsvTable, IndexColumn, FILTERED_CSV, FILTERED_HTML, UNFILTERED_CSV,
};
pub use pipeline::{run, run_query, run_spec, ArtifactPaths, QueryOutput};
pub use projection::{cell_for, project, project_all, CellValue, ListingTable, TableRow};
pub use query::{QueryEngine, QueryResult, QuerySpec};
pub use sources::{IdResolver, ListingsSource};

// Prelude for convenient imports
pub mod prelude {
  pub use crate::{
    IdResolver, ListingTable, ListingsSource, PipelineError, PipelineResult, QueryOutput, QuerySpec,
  };
}
