//! IronDuck Binder - Semantic analysis and schema binding
//!
//! The binder takes parsed SQL and resolves:
//! - Table and column references
//! - SQL data types into `LogicalType`s
//! - The output columns of a query

mod bound_statement;
mod statement_binder;
mod type_binder;

pub use bound_statement::*;
pub use type_binder::bind_data_type;

use ironduck_catalog::Catalog;
use ironduck_common::{Config, Result};
use sqlparser::ast as sql;
use std::sync::Arc;

/// The binder context holds state during binding
pub struct Binder {
    catalog: Arc<Catalog>,
    config: Config,
}

impl Binder {
    pub fn new(catalog: Arc<Catalog>, config: &Config) -> Self {
        Binder {
            catalog,
            config: config.clone(),
        }
    }

    /// Bind a parsed statement
    pub fn bind(&self, statement: &sql::Statement) -> Result<BoundStatement> {
        statement_binder::bind_statement(self, statement)
    }

    /// Get the catalog
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Get the settings used while binding
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the current schema name
    pub fn current_schema(&self) -> &str {
        self.catalog.default_schema_name()
    }
}
