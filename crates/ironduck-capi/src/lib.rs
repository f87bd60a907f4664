//! IronDuck C API surface
//!
//! The engine's type introspection boundary, shaped after DuckDB's C API:
//! raw integer type ids, logical type handles with per-kind accessors, and
//! result descriptions exposing each column's type id and logical type.

mod logical_type;
mod result;
pub mod type_id;

pub use logical_type::LogicalTypeHandle;
pub use result::{ResultColumn, ResultSchema};
pub use type_id::RawTypeId;
