//! Type symbols and raw type id resolution

use std::fmt;

use ironduck_capi::type_id::{self, RawTypeId};

/// Symbolic name of a column or logical type's kind.
///
/// `Unknown` means the type id is not mapped by this binding; `Invalid`
/// means the engine itself marked the type invalid. The two never mix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeSymbol {
    Invalid,
    Boolean,
    TinyInt,
    SmallInt,
    Integer,
    BigInt,
    UTinyInt,
    USmallInt,
    UInteger,
    UBigInt,
    Float,
    Double,
    Timestamp,
    Date,
    Time,
    Interval,
    HugeInt,
    UHugeInt,
    Varchar,
    Blob,
    Decimal,
    TimestampS,
    TimestampMs,
    TimestampNs,
    Enum,
    List,
    Struct,
    Map,
    Array,
    Uuid,
    Union,
    Bit,
    TimeTz,
    TimestampTz,
    Any,
    VarInt,
    SqlNull,
    Unknown,
}

/// Resolve a raw type id to its symbol. Total: ids this binding does not
/// map resolve to [`TypeSymbol::Unknown`].
pub fn resolve(tag: RawTypeId) -> TypeSymbol {
    match tag {
        type_id::INVALID => TypeSymbol::Invalid,
        type_id::BOOLEAN => TypeSymbol::Boolean,
        type_id::TINYINT => TypeSymbol::TinyInt,
        type_id::SMALLINT => TypeSymbol::SmallInt,
        type_id::INTEGER => TypeSymbol::Integer,
        type_id::BIGINT => TypeSymbol::BigInt,
        type_id::UTINYINT => TypeSymbol::UTinyInt,
        type_id::USMALLINT => TypeSymbol::USmallInt,
        type_id::UINTEGER => TypeSymbol::UInteger,
        type_id::UBIGINT => TypeSymbol::UBigInt,
        type_id::FLOAT => TypeSymbol::Float,
        type_id::DOUBLE => TypeSymbol::Double,
        type_id::TIMESTAMP => TypeSymbol::Timestamp,
        type_id::DATE => TypeSymbol::Date,
        type_id::TIME => TypeSymbol::Time,
        type_id::INTERVAL => TypeSymbol::Interval,
        type_id::HUGEINT => TypeSymbol::HugeInt,
        type_id::UHUGEINT => TypeSymbol::UHugeInt,
        type_id::VARCHAR => TypeSymbol::Varchar,
        type_id::BLOB => TypeSymbol::Blob,
        type_id::DECIMAL => TypeSymbol::Decimal,
        type_id::TIMESTAMP_S => TypeSymbol::TimestampS,
        type_id::TIMESTAMP_MS => TypeSymbol::TimestampMs,
        type_id::TIMESTAMP_NS => TypeSymbol::TimestampNs,
        type_id::ENUM => TypeSymbol::Enum,
        type_id::LIST => TypeSymbol::List,
        type_id::STRUCT => TypeSymbol::Struct,
        type_id::MAP => TypeSymbol::Map,
        type_id::ARRAY => TypeSymbol::Array,
        type_id::UUID => TypeSymbol::Uuid,
        type_id::UNION => TypeSymbol::Union,
        type_id::BIT => TypeSymbol::Bit,
        type_id::TIME_TZ => TypeSymbol::TimeTz,
        type_id::TIMESTAMP_TZ => TypeSymbol::TimestampTz,
        type_id::ANY => TypeSymbol::Any,
        type_id::VARINT => TypeSymbol::VarInt,
        type_id::SQLNULL => TypeSymbol::SqlNull,
        _ => TypeSymbol::Unknown,
    }
}

impl TypeSymbol {
    /// Lower-case symbol, e.g. `"decimal"` or `"timestamp_tz"`
    pub fn as_str(self) -> &'static str {
        match self {
            TypeSymbol::Invalid => "invalid",
            TypeSymbol::Boolean => "boolean",
            TypeSymbol::TinyInt => "tinyint",
            TypeSymbol::SmallInt => "smallint",
            TypeSymbol::Integer => "integer",
            TypeSymbol::BigInt => "bigint",
            TypeSymbol::UTinyInt => "utinyint",
            TypeSymbol::USmallInt => "usmallint",
            TypeSymbol::UInteger => "uinteger",
            TypeSymbol::UBigInt => "ubigint",
            TypeSymbol::Float => "float",
            TypeSymbol::Double => "double",
            TypeSymbol::Timestamp => "timestamp",
            TypeSymbol::Date => "date",
            TypeSymbol::Time => "time",
            TypeSymbol::Interval => "interval",
            TypeSymbol::HugeInt => "hugeint",
            TypeSymbol::UHugeInt => "uhugeint",
            TypeSymbol::Varchar => "varchar",
            TypeSymbol::Blob => "blob",
            TypeSymbol::Decimal => "decimal",
            TypeSymbol::TimestampS => "timestamp_s",
            TypeSymbol::TimestampMs => "timestamp_ms",
            TypeSymbol::TimestampNs => "timestamp_ns",
            TypeSymbol::Enum => "enum",
            TypeSymbol::List => "list",
            TypeSymbol::Struct => "struct",
            TypeSymbol::Map => "map",
            TypeSymbol::Array => "array",
            TypeSymbol::Uuid => "uuid",
            TypeSymbol::Union => "union",
            TypeSymbol::Bit => "bit",
            TypeSymbol::TimeTz => "time_tz",
            TypeSymbol::TimestampTz => "timestamp_tz",
            TypeSymbol::Any => "any",
            TypeSymbol::VarInt => "varint",
            TypeSymbol::SqlNull => "sqlnull",
            TypeSymbol::Unknown => "unknown",
        }
    }

    /// Engine type name, e.g. `"DECIMAL"`; `"UNKNOWN"` for unmapped ids
    pub fn type_name(self) -> String {
        self.as_str().to_uppercase()
    }

    /// Returns true for kinds that carry child types.
    ///
    /// `Enum` is not nested: its dictionary entries are plain strings, walked
    /// through [`EnumType::values`](crate::EnumType::values) rather than as
    /// child types.
    pub fn is_nested(self) -> bool {
        matches!(
            self,
            TypeSymbol::List
                | TypeSymbol::Array
                | TypeSymbol::Struct
                | TypeSymbol::Map
                | TypeSymbol::Union
        )
    }
}

impl fmt::Display for TypeSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
