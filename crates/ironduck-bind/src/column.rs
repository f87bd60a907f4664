//! Result columns

use ironduck_capi::{LogicalTypeHandle, ResultSchema};

use crate::logical_type::LogicalType;
use crate::symbol::{resolve, TypeSymbol};

/// One column of a described result
#[derive(Debug, Clone, Copy)]
pub struct Column<'r> {
    result: &'r ResultSchema,
    index: usize,
}

/// All columns of `result`, in output order
pub fn columns(result: &ResultSchema) -> Vec<Column<'_>> {
    (0..result.column_count())
        .map(|index| Column { result, index })
        .collect()
}

impl<'r> Column<'r> {
    /// Column `index` of `result`, if there is one
    pub fn new(result: &'r ResultSchema, index: usize) -> Option<Self> {
        (index < result.column_count()).then_some(Column { result, index })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn name(&self) -> &'r str {
        self.result.column_name(self.index).unwrap_or_default()
    }

    /// Symbol of the column's raw type id
    pub fn type_symbol(&self) -> TypeSymbol {
        resolve(self.result.column_type(self.index))
    }

    pub fn logical_type(&self) -> LogicalType {
        self.result
            .column_logical_type(self.index)
            .unwrap_or_else(LogicalTypeHandle::invalid)
            .into()
    }

    /// DuckDB text of the column's type, e.g. `DECIMAL(18,3)`
    pub fn logical_type_name(&self) -> Option<String> {
        self.logical_type().name()
    }
}
