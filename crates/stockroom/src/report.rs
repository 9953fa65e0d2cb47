//! Human-readable grid reports of the inventory.
//!
//! A report is a snapshot written to its own text file, separate from the
//! CSV store. Rendering is pure; the caller decides where the text goes and
//! handles any overwrite prompt before calling [`Reporter::write_report`].

use std::fs;
use std::path::Path;

use comfy_table::presets::ASCII_FULL;
use comfy_table::{CellAlignment, ContentArrangement, Table as Grid};
use tracing::info;

use crate::error::{Result, StockroomError};
use crate::record::Item;
use crate::schema::{self, Field};
use crate::table::Table;

/// Report configuration.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// comfy-table preset string for borders.
    pub preset: &'static str,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self { preset: ASCII_FULL }
    }
}

/// Renders tables to text and writes reports.
pub trait Reporter {
    /// Render every column in schema order, rows optionally sorted by `sort_keys`.
    fn render(&self, table: &Table, sort_keys: Option<&[Field]>) -> String;

    /// Write rendered text to `path`, replacing any existing file.
    fn write_report(&self, path: &Path, text: &str) -> Result<()> {
        fs::write(path, text).map_err(|source| StockroomError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), bytes = text.len(), "wrote inventory report");
        Ok(())
    }
}

/// Bordered grid with a header row; numeric columns right-aligned.
#[derive(Debug, Clone, Default)]
pub struct GridReporter {
    config: ReportConfig,
}

impl GridReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ReportConfig) -> Self {
        Self { config }
    }
}

impl Reporter for GridReporter {
    fn render(&self, table: &Table, sort_keys: Option<&[Field]>) -> String {
        let rows = table.sort_by(sort_keys.unwrap_or(&[]));

        let mut grid = Grid::new();
        grid.load_preset(self.config.preset)
            .set_content_arrangement(ContentArrangement::Disabled)
            .set_header(schema::header());

        for item in rows {
            grid.add_row(item.to_row());
        }

        for field in schema::fields() {
            if field.kind().is_numeric() {
                if let Some(column) = grid.column_mut(field.position()) {
                    column.set_cell_alignment(CellAlignment::Right);
                }
            }
        }

        grid.to_string()
    }
}

/// Two-column `name  value` listing of one item, Total_Value included.
pub fn render_item(item: &Item) -> String {
    let width = schema::fields()
        .iter()
        .map(|f| f.name().len())
        .max()
        .unwrap_or(0);

    schema::fields()
        .iter()
        .map(|&f| format!("{:<width$}  {}", f.name(), item.get(f)))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;

    use super::*;
    use crate::record::build_record;

    fn item(id: &str, category: &str, qty: &str) -> Item {
        let mut raw = IndexMap::new();
        raw.insert(Field::ItemId, id.to_string());
        raw.insert(Field::Category, category.to_string());
        raw.insert(Field::PurchasePrice, "2".to_string());
        raw.insert(Field::SalesPrice, "10".to_string());
        raw.insert(Field::Quantity, qty.to_string());
        build_record(&raw, &Table::new()).unwrap()
    }

    fn table() -> Table {
        Table::from_items([item("A1", "shirts", "3"), item("B2", "hats", "1")]).unwrap()
    }

    #[test]
    fn test_render_has_all_columns_in_order() {
        let text = GridReporter::new().render(&table(), None);
        let header_line = text.lines().nth(1).unwrap();
        let mut last = 0;
        for name in schema::header() {
            let pos = header_line.find(name).unwrap();
            assert!(pos >= last, "{} out of order", name);
            last = pos;
        }
        assert!(text.starts_with('+'));
        assert!(text.contains("30.00"));
    }

    #[test]
    fn test_render_sorted_view() {
        let table = table();
        let text = GridReporter::new().render(&table, Some(&[Field::Category]));
        let a1 = text.find("A1").unwrap();
        let b2 = text.find("B2").unwrap();
        assert!(b2 < a1);

        let unsorted = GridReporter::new().render(&table, None);
        assert!(unsorted.find("A1").unwrap() < unsorted.find("B2").unwrap());
    }

    #[test]
    fn test_render_empty_table_still_has_header() {
        let text = GridReporter::new().render(&Table::new(), None);
        assert!(text.contains("Item_ID"));
        assert!(text.contains("Total_Value"));
    }

    #[test]
    fn test_render_item_listing() {
        let text = render_item(&item("a1", "shirts", "3"));
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 11);
        assert!(lines[0].starts_with("Item_ID"));
        assert!(lines[0].ends_with("A1"));
        assert!(lines[10].starts_with("Total_Value"));
        assert!(lines[10].ends_with("30.00"));
    }

    #[test]
    fn test_write_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stock.txt");
        GridReporter::new().write_report(&path, "grid").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "grid");
    }
}
