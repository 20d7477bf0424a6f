//! CSV and HTML rendering of listing tables

use crate::error::{PipelineError, PipelineResult};
use crate::projection::ListingTable;
use csv::{Reader, Writer};
use std::fmt::Write as _;

/// Artifact holding the filtered selection
pub const FILTERED_CSV: &str = "CMC_filtered.csv";
/// Artifact holding every known column for every listing
pub const UNFILTERED_CSV: &str = "CMC_unfiltered.csv";
/// Markup table for the filtered selection
pub const FILTERED_HTML: &str = "CMC_filtered.html";

/// Whether a CSV export carries a leading row-position column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexColumn {
  /// Empty header, 0-based positions
  Include,
  Omit,
}

/// Serialize a table to UTF-8 CSV with display-name headers
pub fn to_csv(table: &ListingTable, index: IndexColumn) -> PipelineResult<Vec<u8>> {
  let mut writer = Writer::from_writer(Vec::new());

  let mut header: Vec<&str> = Vec::with_capacity(table.keys().len() + 1);
  if index == IndexColumn::Include {
    header.push("");
  }
  header.extend(table.headers());
  writer.write_record(&header)?;

  for (position, row) in table.rows().iter().enumerate() {
    let mut record: Vec<String> = Vec::with_capacity(row.cells.len() + 1);
    if index == IndexColumn::Include {
      record.push(position.to_string());
    }
    record.extend(row.cells.iter().map(|cell| cell.to_string()));
    writer.write_record(&record)?;
  }

  writer.into_inner().map_err(|e| PipelineError::Csv(e.to_string()))
}

/// Plain string view of a CSV export, as read back from disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvTable {
  pub headers: Vec<String>,
  pub rows: Vec<Vec<String>>,
}

/// Parse CSV produced by [`to_csv`]
pub fn read_csv(bytes: &[u8]) -> PipelineResult<CsvTable> {
  let mut reader = Reader::from_reader(bytes);
  let headers = reader.headers()?.iter().map(str::to_string).collect();

  let mut rows = Vec::new();
  for result in reader.records() {
    let record = result?;
    rows.push(record.iter().map(str::to_string).collect());
  }

  Ok(CsvTable { headers, rows })
}

// Covers the five characters significant in element text and attribute values.
fn escape_html(text: &str) -> String {
  let mut escaped = String::with_capacity(text.len());
  for c in text.chars() {
    match c {
      '&' => escaped.push_str("&amp;"),
      '<' => escaped.push_str("&lt;"),
      '>' => escaped.push_str("&gt;"),
      '"' => escaped.push_str("&quot;"),
      '\'' => escaped.push_str("&#39;"),
      _ => escaped.push(c),
    }
  }
  escaped
}

/// Render a table as a `dataframe` styled HTML table, without an index column
pub fn to_html(table: &ListingTable) -> String {
  let mut html = String::from("<table border=\"1\" class=\"dataframe\">\n");

  html.push_str("  <thead>\n    <tr style=\"text-align: right;\">\n");
  for header in table.headers() {
    // Writing to a String cannot fail.
    let _ = writeln!(html, "      <th>{}</th>", escape_html(header));
  }
  html.push_str("    </tr>\n  </thead>\n");

  html.push_str("  <tbody>\n");
  for row in table.rows() {
    html.push_str("    <tr>\n");
    for cell in &row.cells {
      let _ = writeln!(html, "      <td>{}</td>", escape_html(&cell.to_string()));
    }
    html.push_str("    </tr>\n");
  }
  html.push_str("  </tbody>\n</table>");

  html
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::projection::tests::record;
  use crate::projection::{project, project_all};
  use ctm_core::{ColumnKey, ColumnSelection};

  fn sample_table() -> ListingTable {
    let listings = vec![record(1, "BTC", 1), record(1027, "ETH", 2)];
    project(&listings, &ColumnSelection::new([ColumnKey::Symbol, ColumnKey::MaxSupply]))
  }

  #[test]
  fn test_csv_without_index() {
    let csv = String::from_utf8(to_csv(&sample_table(), IndexColumn::Omit).unwrap()).unwrap();
    assert_eq!(csv, "id,ticker,max_supply\n1,BTC,\n1027,ETH,\n");
  }

  #[test]
  fn test_csv_with_index() {
    let csv = String::from_utf8(to_csv(&sample_table(), IndexColumn::Include).unwrap()).unwrap();
    assert_eq!(csv, ",id,ticker,max_supply\n0,1,BTC,\n1,1027,ETH,\n");
  }

  #[test]
  fn test_csv_round_trip_preserves_headers_and_values() {
    let listings = vec![record(1, "BTC", 1), record(1027, "ETH", 2), record(825, "USDT", 3)];
    let table = project_all(&listings);

    let parsed = read_csv(&to_csv(&table, IndexColumn::Omit).unwrap()).unwrap();

    let headers: Vec<String> = table.headers().iter().map(|h| h.to_string()).collect();
    assert_eq!(parsed.headers, headers);
    assert_eq!(parsed.rows.len(), table.len());
    for (parsed_row, row) in parsed.rows.iter().zip(table.rows()) {
      let expected: Vec<String> = row.cells.iter().map(|c| c.to_string()).collect();
      assert_eq!(parsed_row, &expected);
    }
  }

  #[test]
  fn test_csv_quotes_fields_with_commas() {
    let mut listing = record(1, "BTC", 1);
    listing.name = "Bitcoin, Inc".to_string();
    let table = project(&vec![listing], &ColumnSelection::new([ColumnKey::Name]));

    let bytes = to_csv(&table, IndexColumn::Omit).unwrap();
    assert_eq!(String::from_utf8(bytes.clone()).unwrap(), "id,name\n1,\"Bitcoin, Inc\"\n");
    assert_eq!(read_csv(&bytes).unwrap().rows[0][1], "Bitcoin, Inc");
  }

  #[test]
  fn test_empty_table_csv_is_header_only() {
    let table = sample_table().head(0);
    let csv = String::from_utf8(to_csv(&table, IndexColumn::Omit).unwrap()).unwrap();
    assert_eq!(csv, "id,ticker,max_supply\n");
  }

  #[test]
  fn test_html_layout() {
    let html = to_html(&sample_table());

    assert!(html.starts_with("<table border=\"1\" class=\"dataframe\">"));
    assert!(html.contains("<th>ticker</th>"));
    assert_eq!(html.matches("<tr>").count(), 2);
    assert!(html.contains("<td>1027</td>"));
    assert!(html.ends_with("</table>"));
  }

  #[test]
  fn test_html_escapes_text() {
    let mut listing = record(1, "BTC", 1);
    listing.name = "<script>\"x\" & 'y'".to_string();
    let html = to_html(&project(&vec![listing], &ColumnSelection::new([ColumnKey::Name])));

    assert!(html.contains("<td>&lt;script&gt;&quot;x&quot; &amp; &#39;y&#39;</td>"));
    assert!(!html.contains("<script>"));
  }

  #[test]
  fn test_html_keeps_percent_headers() {
    let html = to_html(&project(&vec![record(1, "BTC", 1)], &ColumnSelection::new([ColumnKey::PercentChange1h])));
    assert!(html.contains("<th>1h%</th>"));
  }
}
