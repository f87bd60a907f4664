//! IronDuck Bind - Logical type introspection over the C API
//!
//! This crate turns the raw type ids and logical type handles of
//! `ironduck-capi` into a typed model:
//! - [`resolve`] maps a raw type id to a [`TypeSymbol`]
//! - [`LogicalType::kind`] decodes a handle into a [`LogicalTypeKind`]
//! - struct children, union members and enum values are walked through
//!   [`Nested`] sequences
//! - [`Column`] describes one column of a result
//!
//! ```rust
//! use ironduck::Database;
//! use ironduck_bind::{columns, TypeSymbol};
//!
//! let db = Database::new();
//! db.execute("CREATE TABLE t (u UNION(num INTEGER, str VARCHAR))").unwrap();
//! let result = db.describe("SELECT * FROM t").unwrap();
//!
//! let column = columns(&result)[0];
//! assert_eq!(column.type_symbol(), TypeSymbol::Union);
//!
//! let ty = column.logical_type();
//! let names: Vec<String> = ty.as_union().unwrap().member_names().collect();
//! assert_eq!(names, ["num", "str"]);
//! ```

mod column;
mod logical_type;
mod name;
mod nested;
mod symbol;

pub use column::{columns, Column};
pub use ironduck_capi::RawTypeId;
pub use logical_type::{DecimalType, EnumType, LogicalType, LogicalTypeKind, StructType, UnionType};
pub use nested::Nested;
pub use symbol::{resolve, TypeSymbol};
