//! IronDuck Parser - SQL parsing with DuckDB dialect support
//!
//! This crate wraps sqlparser-rs. The DuckDB dialect is required for the
//! nested type syntax (`STRUCT(a INT)`, `UNION(a INT)`). `MAP(K, V)` comes
//! back as a custom type whose modifiers are the key and value type names;
//! [`parse_data_type`] turns each modifier back into a data type.

use ironduck_common::{Error, Result};
use sqlparser::ast::{DataType, Statement};
use sqlparser::dialect::DuckDbDialect;
use sqlparser::parser::Parser;

/// Parse a SQL string into a list of statements
pub fn parse_sql(sql: &str) -> Result<Vec<Statement>> {
    let dialect = DuckDbDialect {};
    Parser::parse_sql(&dialect, sql).map_err(|e| Error::Parse(e.to_string()))
}

/// Parse a single SQL statement
pub fn parse_statement(sql: &str) -> Result<Statement> {
    let mut statements = parse_sql(sql)?;
    if statements.len() != 1 {
        return Err(Error::Parse(format!(
            "Expected 1 statement, got {}",
            statements.len()
        )));
    }
    statements
        .pop()
        .ok_or_else(|| Error::Internal("statement list emptied".to_string()))
}

/// Parse a standalone data type such as `VARCHAR` or `DECIMAL(10,2)`
pub fn parse_data_type(sql: &str) -> Result<DataType> {
    let dialect = DuckDbDialect {};
    Parser::new(&dialect)
        .try_with_sql(sql)
        .and_then(|mut parser| parser.parse_data_type())
        .map_err(|e| Error::Parse(e.to_string()))
}
