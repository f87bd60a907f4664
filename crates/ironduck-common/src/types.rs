//! Logical type system for IronDuck
//!
//! This module defines the type system that matches DuckDB's semantics.
//! Every column in IronDuck has a LogicalType; the C API layer hands out
//! handles on these values and the binding layer introspects them.

use std::fmt;

use crate::{Error, Result};

/// Largest decimal width supported by the engine
pub const DECIMAL_MAX_WIDTH: u8 = 38;

/// The logical type of a value in IronDuck.
/// This matches DuckDB's type system for compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LogicalType {
    // ============================================
    // Special types
    // ============================================
    /// Marker for a type the engine could not produce
    Invalid,
    /// The NULL type - represents absence of value
    Null,
    /// Any type - used in function signatures for polymorphic functions
    Any,

    // ============================================
    // Boolean
    // ============================================
    /// Boolean (true/false)
    Boolean,

    // ============================================
    // Numeric types
    // ============================================
    /// 8-bit signed integer (-128 to 127)
    TinyInt,
    /// 16-bit signed integer (-32768 to 32767)
    SmallInt,
    /// 32-bit signed integer
    Integer,
    /// 64-bit signed integer
    BigInt,
    /// 128-bit signed integer
    HugeInt,
    /// Unsigned 8-bit integer (0 to 255)
    UTinyInt,
    /// Unsigned 16-bit integer (0 to 65535)
    USmallInt,
    /// Unsigned 32-bit integer
    UInteger,
    /// Unsigned 64-bit integer
    UBigInt,
    /// Unsigned 128-bit integer
    UHugeInt,
    /// Arbitrary precision integer
    VarInt,

    // ============================================
    // Floating point
    // ============================================
    /// 32-bit IEEE 754 floating point
    Float,
    /// 64-bit IEEE 754 floating point
    Double,

    // ============================================
    // Fixed-point decimal
    // ============================================
    /// Fixed-point decimal with specified width and scale
    /// - width: total number of digits (1-38)
    /// - scale: digits after decimal point
    Decimal { width: u8, scale: u8 },

    // ============================================
    // String types
    // ============================================
    /// Variable-length string (UTF-8)
    Varchar,
    /// Binary large object
    Blob,
    /// Bit string
    Bit,

    // ============================================
    // Date/Time types
    // ============================================
    /// Date (year, month, day)
    Date,
    /// Time of day (hour, minute, second, microsecond)
    Time,
    /// Time of day with timezone offset
    TimeTz,
    /// Timestamp without timezone (microsecond precision)
    Timestamp,
    /// Timestamp with second precision
    TimestampS,
    /// Timestamp with millisecond precision
    TimestampMs,
    /// Timestamp with nanosecond precision
    TimestampNs,
    /// Timestamp with timezone (stored as UTC)
    TimestampTz,
    /// Time interval
    Interval,

    // ============================================
    // Other scalar types
    // ============================================
    /// UUID (128-bit universally unique identifier)
    Uuid,

    // ============================================
    // Nested types
    // ============================================
    /// Variable-length list of elements of the same type
    List(Box<LogicalType>),

    /// Fixed-size array
    Array {
        element_type: Box<LogicalType>,
        size: u64,
    },

    /// Struct with named fields
    Struct(Vec<(String, LogicalType)>),

    /// Map from key type to value type
    Map {
        key: Box<LogicalType>,
        value: Box<LogicalType>,
    },

    /// Tagged union; every member has a name
    Union(Vec<(String, LogicalType)>),

    /// Enum with named values
    Enum(Vec<String>),
}

impl LogicalType {
    /// Build a decimal type, checking width and scale against engine limits
    pub fn decimal(width: u8, scale: u8) -> Result<LogicalType> {
        if width == 0 || width > DECIMAL_MAX_WIDTH {
            return Err(Error::InvalidArguments(format!(
                "DECIMAL width must be between 1 and {}, got {}",
                DECIMAL_MAX_WIDTH, width
            )));
        }
        if scale > width {
            return Err(Error::InvalidArguments(format!(
                "DECIMAL scale {} cannot exceed width {}",
                scale, width
            )));
        }
        Ok(LogicalType::Decimal { width, scale })
    }

    /// Returns true if this type is a nested type (list, struct, map, etc.)
    pub fn is_nested(&self) -> bool {
        matches!(
            self,
            LogicalType::List(_)
                | LogicalType::Array { .. }
                | LogicalType::Struct(_)
                | LogicalType::Map { .. }
                | LogicalType::Union(_)
        )
    }

    /// The element type of a LIST. A MAP is a list of `STRUCT(key, value)`
    /// entries, so that struct is returned for maps.
    pub fn list_child(&self) -> Option<LogicalType> {
        match self {
            LogicalType::List(inner) => Some((**inner).clone()),
            LogicalType::Map { key, value } => Some(LogicalType::Struct(vec![
                ("key".to_string(), (**key).clone()),
                ("value".to_string(), (**value).clone()),
            ])),
            _ => None,
        }
    }
}

fn write_fields(f: &mut fmt::Formatter<'_>, fields: &[(String, LogicalType)]) -> fmt::Result {
    for (i, (name, ty)) in fields.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{} {}", name, ty)?;
    }
    Ok(())
}

impl fmt::Display for LogicalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogicalType::Invalid => write!(f, "INVALID"),
            LogicalType::Null => write!(f, "NULL"),
            LogicalType::Any => write!(f, "ANY"),
            LogicalType::Boolean => write!(f, "BOOLEAN"),
            LogicalType::TinyInt => write!(f, "TINYINT"),
            LogicalType::SmallInt => write!(f, "SMALLINT"),
            LogicalType::Integer => write!(f, "INTEGER"),
            LogicalType::BigInt => write!(f, "BIGINT"),
            LogicalType::HugeInt => write!(f, "HUGEINT"),
            LogicalType::UTinyInt => write!(f, "UTINYINT"),
            LogicalType::USmallInt => write!(f, "USMALLINT"),
            LogicalType::UInteger => write!(f, "UINTEGER"),
            LogicalType::UBigInt => write!(f, "UBIGINT"),
            LogicalType::UHugeInt => write!(f, "UHUGEINT"),
            LogicalType::VarInt => write!(f, "VARINT"),
            LogicalType::Float => write!(f, "FLOAT"),
            LogicalType::Double => write!(f, "DOUBLE"),
            LogicalType::Decimal { width, scale } => write!(f, "DECIMAL({},{})", width, scale),
            LogicalType::Varchar => write!(f, "VARCHAR"),
            LogicalType::Blob => write!(f, "BLOB"),
            LogicalType::Bit => write!(f, "BIT"),
            LogicalType::Date => write!(f, "DATE"),
            LogicalType::Time => write!(f, "TIME"),
            LogicalType::TimeTz => write!(f, "TIME WITH TIME ZONE"),
            LogicalType::Timestamp => write!(f, "TIMESTAMP"),
            LogicalType::TimestampS => write!(f, "TIMESTAMP_S"),
            LogicalType::TimestampMs => write!(f, "TIMESTAMP_MS"),
            LogicalType::TimestampNs => write!(f, "TIMESTAMP_NS"),
            LogicalType::TimestampTz => write!(f, "TIMESTAMP WITH TIME ZONE"),
            LogicalType::Interval => write!(f, "INTERVAL"),
            LogicalType::Uuid => write!(f, "UUID"),
            LogicalType::List(inner) => write!(f, "{}[]", inner),
            LogicalType::Array { element_type, size } => write!(f, "{}[{}]", element_type, size),
            LogicalType::Struct(fields) => {
                write!(f, "STRUCT(")?;
                write_fields(f, fields)?;
                write!(f, ")")
            }
            LogicalType::Map { key, value } => write!(f, "MAP({}, {})", key, value),
            LogicalType::Union(members) => {
                write!(f, "UNION(")?;
                write_fields(f, members)?;
                write!(f, ")")
            }
            LogicalType::Enum(values) => {
                write!(f, "ENUM(")?;
                for (i, v) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "'{}'", v)?;
                }
                write!(f, ")")
            }
        }
    }
}
