//! Raw type ids, numbered exactly as DuckDB's `duckdb_type` enum.
//!
//! The values are part of the C API contract and never change meaning; new
//! engine types only ever append new ids.

use ironduck_common::LogicalType;

/// A raw type tag as returned by the C API
pub type RawTypeId = i32;

pub const INVALID: RawTypeId = 0;
pub const BOOLEAN: RawTypeId = 1;
pub const TINYINT: RawTypeId = 2;
pub const SMALLINT: RawTypeId = 3;
pub const INTEGER: RawTypeId = 4;
pub const BIGINT: RawTypeId = 5;
pub const UTINYINT: RawTypeId = 6;
pub const USMALLINT: RawTypeId = 7;
pub const UINTEGER: RawTypeId = 8;
pub const UBIGINT: RawTypeId = 9;
pub const FLOAT: RawTypeId = 10;
pub const DOUBLE: RawTypeId = 11;
pub const TIMESTAMP: RawTypeId = 12;
pub const DATE: RawTypeId = 13;
pub const TIME: RawTypeId = 14;
pub const INTERVAL: RawTypeId = 15;
pub const HUGEINT: RawTypeId = 16;
pub const VARCHAR: RawTypeId = 17;
pub const BLOB: RawTypeId = 18;
pub const DECIMAL: RawTypeId = 19;
pub const TIMESTAMP_S: RawTypeId = 20;
pub const TIMESTAMP_MS: RawTypeId = 21;
pub const TIMESTAMP_NS: RawTypeId = 22;
pub const ENUM: RawTypeId = 23;
pub const LIST: RawTypeId = 24;
pub const STRUCT: RawTypeId = 25;
pub const MAP: RawTypeId = 26;
pub const UUID: RawTypeId = 27;
pub const UNION: RawTypeId = 28;
pub const BIT: RawTypeId = 29;
pub const TIME_TZ: RawTypeId = 30;
pub const TIMESTAMP_TZ: RawTypeId = 31;
pub const UHUGEINT: RawTypeId = 32;
pub const ARRAY: RawTypeId = 33;
pub const ANY: RawTypeId = 34;
pub const VARINT: RawTypeId = 35;
pub const SQLNULL: RawTypeId = 36;

/// Type id of an engine logical type
pub fn of(logical_type: &LogicalType) -> RawTypeId {
    match logical_type {
        LogicalType::Invalid => INVALID,
        LogicalType::Null => SQLNULL,
        LogicalType::Any => ANY,
        LogicalType::Boolean => BOOLEAN,
        LogicalType::TinyInt => TINYINT,
        LogicalType::SmallInt => SMALLINT,
        LogicalType::Integer => INTEGER,
        LogicalType::BigInt => BIGINT,
        LogicalType::HugeInt => HUGEINT,
        LogicalType::UTinyInt => UTINYINT,
        LogicalType::USmallInt => USMALLINT,
        LogicalType::UInteger => UINTEGER,
        LogicalType::UBigInt => UBIGINT,
        LogicalType::UHugeInt => UHUGEINT,
        LogicalType::VarInt => VARINT,
        LogicalType::Float => FLOAT,
        LogicalType::Double => DOUBLE,
        LogicalType::Decimal { .. } => DECIMAL,
        LogicalType::Varchar => VARCHAR,
        LogicalType::Blob => BLOB,
        LogicalType::Bit => BIT,
        LogicalType::Date => DATE,
        LogicalType::Time => TIME,
        LogicalType::TimeTz => TIME_TZ,
        LogicalType::Timestamp => TIMESTAMP,
        LogicalType::TimestampS => TIMESTAMP_S,
        LogicalType::TimestampMs => TIMESTAMP_MS,
        LogicalType::TimestampNs => TIMESTAMP_NS,
        LogicalType::TimestampTz => TIMESTAMP_TZ,
        LogicalType::Interval => INTERVAL,
        LogicalType::Uuid => UUID,
        LogicalType::List(_) => LIST,
        LogicalType::Array { .. } => ARRAY,
        LogicalType::Struct(_) => STRUCT,
        LogicalType::Map { .. } => MAP,
        LogicalType::Union(_) => UNION,
        LogicalType::Enum(_) => ENUM,
    }
}
