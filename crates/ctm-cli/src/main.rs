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

use anyhow::Result;
use clap::{Parser, Subcommand};
use ctm_core::Error as CoreError;
use ctm_pipeline::PipelineError;
use dotenvy::dotenv;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;

mod commands;
use commands::query::QueryArgs;

mod config;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "ctm")]
#[command(propagate_version = true)]
struct Cli {
  #[command(subcommand)]
  command: Commands,

  /// JSON file listing the selectable columns
  #[arg(long, global = true)]
  columns_config: Option<PathBuf>,

  /// Verbose output
  #[arg(short, long, global = true)]
  verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
  /// Fetch the top listings, filter them and export the tables
  Query(QueryArgs),
  /// List the selectable columns
  Columns,
}

#[tokio::main]
async fn main() -> ExitCode {
  // Load environment variables
  dotenv().ok();

  // Parse CLI arguments
  let cli = Cli::parse();

  // Initialize logging
  let log_level = if cli.verbose { "debug" } else { "info" };
  tracing_subscriber::fmt().with_env_filter(log_level).init();

  match run(cli).await {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      error!("{:#}", err);
      eprintln!("{}: {}", failure_class(&err), err);
      ExitCode::FAILURE
    }
  }
}

async fn run(cli: Cli) -> Result<()> {
  let catalog = config::column_catalog(cli.columns_config.as_deref())?;

  // Execute command
  match cli.command {
    Commands::Query(args) => commands::query::execute(args, catalog).await?,
    Commands::Columns => commands::columns::execute(&catalog)?,
  }

  Ok(())
}

/// Name of the failure class for the one-line error report
fn failure_class(err: &anyhow::Error) -> &'static str {
  if let Some(err) = err.downcast_ref::<PipelineError>() {
    return err.class();
  }
  if let Some(err) = err.downcast_ref::<CoreError>() {
    return err.class();
  }
  "Error"
}
