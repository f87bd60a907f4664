//! Logical type handles
//!
//! A [`LogicalTypeHandle`] is what the C API hands out for a column or a
//! nested child type. The accessors follow the C API conventions: asking a
//! handle for facets of a different kind returns zero, an empty string or an
//! INVALID handle instead of failing.

use std::sync::Arc;

use ironduck_common::LogicalType;

use crate::type_id::{self, RawTypeId};

/// Shared, immutable handle on an engine logical type
#[derive(Debug, Clone, PartialEq)]
pub struct LogicalTypeHandle(Arc<LogicalType>);

impl LogicalTypeHandle {
    pub fn new(logical_type: LogicalType) -> Self {
        LogicalTypeHandle(Arc::new(logical_type))
    }

    /// Handle the engine returns when no type can be produced
    pub fn invalid() -> Self {
        Self::new(LogicalType::Invalid)
    }

    /// The engine type behind this handle
    pub fn logical_type(&self) -> &LogicalType {
        &self.0
    }

    pub fn type_id(&self) -> RawTypeId {
        type_id::of(&self.0)
    }

    // ============================================
    // DECIMAL
    // ============================================

    pub fn decimal_width(&self) -> u8 {
        match *self.0 {
            LogicalType::Decimal { width, .. } => width,
            _ => 0,
        }
    }

    pub fn decimal_scale(&self) -> u8 {
        match *self.0 {
            LogicalType::Decimal { scale, .. } => scale,
            _ => 0,
        }
    }

    // ============================================
    // LIST / MAP / ARRAY
    // ============================================

    /// Child of a LIST; for a MAP, its `STRUCT(key, value)` entry type
    pub fn list_child_type(&self) -> LogicalTypeHandle {
        self.0
            .list_child()
            .map(LogicalTypeHandle::new)
            .unwrap_or_else(LogicalTypeHandle::invalid)
    }

    pub fn map_key_type(&self) -> LogicalTypeHandle {
        match &*self.0 {
            LogicalType::Map { key, .. } => Self::new((**key).clone()),
            _ => Self::invalid(),
        }
    }

    pub fn map_value_type(&self) -> LogicalTypeHandle {
        match &*self.0 {
            LogicalType::Map { value, .. } => Self::new((**value).clone()),
            _ => Self::invalid(),
        }
    }

    pub fn array_size(&self) -> u64 {
        match *self.0 {
            LogicalType::Array { size, .. } => size,
            _ => 0,
        }
    }

    pub fn array_child_type(&self) -> LogicalTypeHandle {
        match &*self.0 {
            LogicalType::Array { element_type, .. } => Self::new((**element_type).clone()),
            _ => Self::invalid(),
        }
    }

    // ============================================
    // STRUCT
    // ============================================

    pub fn struct_child_count(&self) -> usize {
        self.struct_children().len()
    }

    /// # Panics
    ///
    /// Panics if `index >= struct_child_count()`.
    pub fn struct_child_name(&self, index: usize) -> String {
        self.struct_children()[index].0.clone()
    }

    /// # Panics
    ///
    /// Panics if `index >= struct_child_count()`.
    pub fn struct_child_type(&self, index: usize) -> LogicalTypeHandle {
        Self::new(self.struct_children()[index].1.clone())
    }

    fn struct_children(&self) -> &[(String, LogicalType)] {
        match &*self.0 {
            LogicalType::Struct(children) => children,
            _ => &[],
        }
    }

    // ============================================
    // UNION
    // ============================================

    pub fn union_member_count(&self) -> usize {
        self.union_members().len()
    }

    /// # Panics
    ///
    /// Panics if `index >= union_member_count()`.
    pub fn union_member_name(&self, index: usize) -> String {
        self.union_members()[index].0.clone()
    }

    /// # Panics
    ///
    /// Panics if `index >= union_member_count()`.
    pub fn union_member_type(&self, index: usize) -> LogicalTypeHandle {
        Self::new(self.union_members()[index].1.clone())
    }

    fn union_members(&self) -> &[(String, LogicalType)] {
        match &*self.0 {
            LogicalType::Union(members) => members,
            _ => &[],
        }
    }

    // ============================================
    // ENUM
    // ============================================

    pub fn enum_dictionary_size(&self) -> usize {
        self.enum_values().len()
    }

    /// # Panics
    ///
    /// Panics if `index >= enum_dictionary_size()`.
    pub fn enum_dictionary_value(&self, index: usize) -> String {
        self.enum_values()[index].clone()
    }

    fn enum_values(&self) -> &[String] {
        match &*self.0 {
            LogicalType::Enum(values) => values,
            _ => &[],
        }
    }
}

impl From<LogicalType> for LogicalTypeHandle {
    fn from(logical_type: LogicalType) -> Self {
        Self::new(logical_type)
    }
}
