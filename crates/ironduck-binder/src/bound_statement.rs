//! Bound statements

use ironduck_common::LogicalType;

/// A bound statement ready for the engine
#[derive(Debug, Clone)]
pub enum BoundStatement {
    Select(BoundSelect),
    CreateTable(BoundCreateTable),
    CreateSchema(BoundCreateSchema),
    Drop(BoundDrop),
}

/// Bound SELECT statement, reduced to the shape of its output
#[derive(Debug, Clone)]
pub struct BoundSelect {
    /// Output columns in projection order
    pub select_list: Vec<BoundColumnDef>,
}

/// A named, typed column
#[derive(Debug, Clone, PartialEq)]
pub struct BoundColumnDef {
    pub name: String,
    pub data_type: LogicalType,
}

/// Bound CREATE TABLE statement
#[derive(Debug, Clone)]
pub struct BoundCreateTable {
    pub schema: String,
    pub name: String,
    pub columns: Vec<BoundColumnDef>,
    pub if_not_exists: bool,
}

/// Bound CREATE SCHEMA statement
#[derive(Debug, Clone)]
pub struct BoundCreateSchema {
    pub name: String,
    pub if_not_exists: bool,
}

/// Bound DROP TABLE statement
#[derive(Debug, Clone)]
pub struct BoundDrop {
    pub schema: String,
    pub name: String,
    pub if_exists: bool,
}
