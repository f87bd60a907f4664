//! Result set descriptions

use ironduck_common::LogicalType;

use crate::type_id::{self, RawTypeId};
use crate::LogicalTypeHandle;

/// One output column of a result
#[derive(Debug, Clone)]
pub struct ResultColumn {
    pub name: String,
    pub logical_type: LogicalTypeHandle,
}

/// The shape of a result set: its columns in output order
#[derive(Debug, Clone, Default)]
pub struct ResultSchema {
    columns: Vec<ResultColumn>,
}

impl ResultSchema {
    pub fn new(columns: Vec<(String, LogicalType)>) -> Self {
        ResultSchema {
            columns: columns
                .into_iter()
                .map(|(name, ty)| ResultColumn {
                    name,
                    logical_type: LogicalTypeHandle::new(ty),
                })
                .collect(),
        }
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn column_name(&self, col: usize) -> Option<&str> {
        self.columns.get(col).map(|c| c.name.as_str())
    }

    /// Raw type id of a column; INVALID when `col` is out of range
    pub fn column_type(&self, col: usize) -> RawTypeId {
        self.columns
            .get(col)
            .map(|c| c.logical_type.type_id())
            .unwrap_or(type_id::INVALID)
    }

    pub fn column_logical_type(&self, col: usize) -> Option<LogicalTypeHandle> {
        self.columns.get(col).map(|c| c.logical_type.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_schema() {
        let schema = ResultSchema::new(vec![
            ("id".to_string(), LogicalType::Integer),
            ("amount".to_string(), LogicalType::Decimal { width: 18, scale: 3 }),
        ]);
        assert_eq!(schema.column_count(), 2);
        assert_eq!(schema.column_name(1), Some("amount"));
        assert_eq!(schema.column_type(0), type_id::INTEGER);
        assert_eq!(
            schema.column_logical_type(1).unwrap().decimal_width(),
            18
        );
    }

    #[test]
    fn test_out_of_range_column() {
        let schema = ResultSchema::default();
        assert_eq!(schema.column_name(0), None);
        assert_eq!(schema.column_type(0), type_id::INVALID);
        assert!(schema.column_logical_type(0).is_none());
    }
}
