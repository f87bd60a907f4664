//! IronDuck Catalog - Schema and table management
//!
//! The catalog manages database objects: schemas, tables and their typed
//! columns. Result descriptions are built from the column types held here.

use hashbrown::HashMap;
use ironduck_common::{Error, LogicalType, Result};
use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

mod column;
mod schema;
mod table;

pub use column::{Column, ColumnId};
pub use schema::{Schema, SchemaId};
pub use table::{Table, TableId};

/// Unique identifier for catalog entries
pub type CatalogId = u64;

/// The main catalog that holds all database objects
pub struct Catalog {
    /// All schemas in the catalog
    schemas: RwLock<HashMap<String, Arc<Schema>>>,
    /// Name of the schema used for unqualified names
    default_schema: String,
    /// Next available ID for new objects
    next_id: AtomicU64,
}

impl Catalog {
    /// Create a new catalog holding only the default schema
    pub fn new(default_schema: &str) -> Self {
        let default_schema = default_schema.to_lowercase();
        let catalog = Catalog {
            schemas: RwLock::new(HashMap::new()),
            default_schema: default_schema.clone(),
            next_id: AtomicU64::new(1),
        };

        let schema = Schema::new(0, default_schema.clone());
        catalog
            .schemas
            .write()
            .insert(default_schema, Arc::new(schema));

        catalog
    }

    /// Get the next unique ID
    fn next_id(&self) -> CatalogId {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }

    /// Name of the schema unqualified names resolve against
    pub fn default_schema_name(&self) -> &str {
        &self.default_schema
    }

    /// Get a schema by name (case-insensitive)
    pub fn get_schema(&self, name: &str) -> Option<Arc<Schema>> {
        let name_lower = name.to_lowercase();
        self.schemas.read().get(&name_lower).cloned()
    }

    /// Create a new schema (name is normalized to lowercase)
    pub fn create_schema(&self, name: &str) -> Result<Arc<Schema>> {
        let mut schemas = self.schemas.write();
        let name_lower = name.to_lowercase();
        if schemas.contains_key(&name_lower) {
            return Err(Error::SchemaAlreadyExists(name.to_string()));
        }

        let schema = Arc::new(Schema::new(self.next_id(), name_lower.clone()));
        schemas.insert(name_lower, schema.clone());
        log::debug!("created schema {}", schema.name);
        Ok(schema)
    }

    /// Create a table in the given schema
    pub fn create_table(
        &self,
        schema_name: &str,
        table_name: &str,
        columns: Vec<(String, LogicalType)>,
    ) -> Result<TableId> {
        let schema = self
            .get_schema(schema_name)
            .ok_or_else(|| Error::SchemaNotFound(schema_name.to_string()))?;

        let table_id = self.next_id();
        let columns: Vec<Column> = columns
            .into_iter()
            .enumerate()
            .map(|(idx, (name, logical_type))| Column::new(idx as ColumnId, name, logical_type))
            .collect();

        let table = Table::new(table_id, table_name.to_string(), columns);
        schema.add_table(table)?;
        log::debug!("created table {}.{} (id {})", schema.name, table_name, table_id);

        Ok(table_id)
    }

    /// Get a table by schema and table name
    pub fn get_table(&self, schema_name: &str, table_name: &str) -> Option<Arc<Table>> {
        let schema = self.get_schema(schema_name)?;
        schema.get_table(table_name)
    }

    /// Remove a table from the given schema
    pub fn drop_table(&self, schema_name: &str, table_name: &str) -> Result<()> {
        let schema = self
            .get_schema(schema_name)
            .ok_or_else(|| Error::SchemaNotFound(schema_name.to_string()))?;
        schema.drop_table(table_name)?;
        log::debug!("dropped table {}.{}", schema.name, table_name);
        Ok(())
    }

    /// List all schema names
    pub fn list_schemas(&self) -> Vec<String> {
        self.schemas.read().keys().cloned().collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new("main")
    }
}
