use anyhow::Result;
use ctm_core::{ColumnCatalog, ColumnKey};
use prettytable::{row, Table};

/// Print the selectable columns as provider name -> display name
pub fn execute(catalog: &ColumnCatalog) -> Result<()> {
  catalog_table(catalog).printstd();
  Ok(())
}

fn catalog_table(catalog: &ColumnCatalog) -> Table {
  let mut table = Table::new();
  table.set_titles(row!["column", "shown as"]);

  let id = ColumnKey::Id;
  table.add_row(row![id.raw_name(), id.display_name()]);
  for key in catalog.keys().iter().filter(|key| **key != ColumnKey::Id) {
    table.add_row(row![key.raw_name(), key.display_name()]);
  }
  table
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_catalog_table_lists_id_first() {
    let catalog = ColumnCatalog::new(vec![ColumnKey::Price, ColumnKey::Id, ColumnKey::CmcRank]);
    let table = catalog_table(&catalog);

    assert_eq!(table.len(), 3);
    assert_eq!(table.get_row(0).unwrap().get_cell(0).unwrap().get_content(), "id");
    assert_eq!(table.get_row(1).unwrap().get_cell(1).unwrap().get_content(), "price_USD");
    assert_eq!(table.get_row(2).unwrap().get_cell(1).unwrap().get_content(), "CMC_rank");
  }
}
