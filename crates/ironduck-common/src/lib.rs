//! IronDuck Common - Core types and utilities shared across all crates
//!
//! This crate provides the foundational types used throughout IronDuck:
//! - `LogicalType`: The type system matching DuckDB semantics
//! - `Config`: Database settings
//! - `Error`: Unified error types

pub mod config;
pub mod error;
pub mod types;

pub use config::Config;
pub use error::{Error, Result};
pub use types::LogicalType;
