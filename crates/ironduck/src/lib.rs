//! IronDuck - A pure Rust analytical database, DuckDB compatible
//!
//! This facade wires the parser, binder and catalog together and exposes
//! typed result descriptions through the C API surface:
//!
//! ```rust
//! use ironduck::Database;
//!
//! let db = Database::new();
//! db.execute("CREATE TABLE climates (id INTEGER, temperature DECIMAL)").unwrap();
//!
//! let result = db.describe("SELECT * FROM climates").unwrap();
//! assert_eq!(result.column_count(), 2);
//! assert_eq!(result.column_name(1), Some("temperature"));
//! ```

pub use ironduck_capi as capi;
pub use ironduck_catalog as catalog;
pub use ironduck_common as common;

use ironduck_binder::{Binder, BoundStatement};
use ironduck_capi::ResultSchema;
use ironduck_catalog::Catalog;
use ironduck_common::{Config, Error, Result};
use std::sync::Arc;

/// The main database instance
pub struct Database {
    catalog: Arc<Catalog>,
    config: Config,
}

impl Database {
    /// Create a new in-memory database with default settings
    pub fn new() -> Self {
        let config = Config::default();
        Database {
            catalog: Arc::new(Catalog::new(&config.default_schema)),
            config,
        }
    }

    /// Create a new in-memory database with the given settings
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Database {
            catalog: Arc::new(Catalog::new(&config.default_schema)),
            config,
        })
    }

    /// Run every statement in `sql`. Only DDL is accepted.
    pub fn execute(&self, sql: &str) -> Result<()> {
        let statements = ironduck_parser::parse_sql(sql)?;
        let binder = Binder::new(self.catalog.clone(), &self.config);

        for statement in &statements {
            match binder.bind(statement)? {
                BoundStatement::CreateTable(create) => {
                    if create.if_not_exists
                        && self.catalog.get_table(&create.schema, &create.name).is_some()
                    {
                        continue;
                    }
                    let columns = create
                        .columns
                        .into_iter()
                        .map(|c| (c.name, c.data_type))
                        .collect();
                    self.catalog.create_table(&create.schema, &create.name, columns)?;
                }
                BoundStatement::CreateSchema(create) => {
                    if create.if_not_exists && self.catalog.get_schema(&create.name).is_some() {
                        continue;
                    }
                    self.catalog.create_schema(&create.name)?;
                }
                BoundStatement::Drop(drop) => {
                    if drop.if_exists && self.catalog.get_table(&drop.schema, &drop.name).is_none() {
                        continue;
                    }
                    self.catalog.drop_table(&drop.schema, &drop.name)?;
                }
                BoundStatement::Select(_) => {
                    return Err(Error::NotImplemented(
                        "query execution; use describe() for result columns".to_string(),
                    ));
                }
            }
        }

        log::debug!("executed {} statements", statements.len());
        Ok(())
    }

    /// Describe the columns a single query would produce
    pub fn describe(&self, sql: &str) -> Result<ResultSchema> {
        let statement = ironduck_parser::parse_statement(sql)?;
        let binder = Binder::new(self.catalog.clone(), &self.config);

        match binder.bind(&statement)? {
            BoundStatement::Select(select) => {
                log::debug!("described {} result columns", select.select_list.len());
                Ok(ResultSchema::new(
                    select
                        .select_list
                        .into_iter()
                        .map(|c| (c.name, c.data_type))
                        .collect(),
                ))
            }
            _ => Err(Error::InvalidArguments(
                "describe() expects a SELECT statement".to_string(),
            )),
        }
    }

    /// Get the catalog
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Get the settings this database was opened with
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Default for Database {
    fn default() -> Self {
        Self::new()
    }
}
