//! Table management

use super::{CatalogId, Column};

pub type TableId = CatalogId;

/// A table in the catalog
#[derive(Debug, Clone)]
pub struct Table {
    /// Unique identifier
    pub id: TableId,
    /// Table name
    pub name: String,
    /// Columns in declaration order
    pub columns: Vec<Column>,
}

impl Table {
    pub fn new(id: TableId, name: String, columns: Vec<Column>) -> Self {
        Table { id, name, columns }
    }

    /// Get a column by name (case-insensitive, like DuckDB identifiers)
    pub fn get_column(&self, name: &str) -> Option<&Column> {
        self.columns
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Get the number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}
