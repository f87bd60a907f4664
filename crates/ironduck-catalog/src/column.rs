//! Column definition

use ironduck_common::LogicalType;

pub type ColumnId = u32;

/// A column in a table
#[derive(Debug, Clone)]
pub struct Column {
    /// Column index within the table
    pub id: ColumnId,
    /// Column name
    pub name: String,
    /// Column type
    pub logical_type: LogicalType,
}

impl Column {
    pub fn new(id: ColumnId, name: String, logical_type: LogicalType) -> Self {
        Column {
            id,
            name,
            logical_type,
        }
    }
}
