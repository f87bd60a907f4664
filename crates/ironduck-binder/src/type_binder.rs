//! SQL data type binding

use ironduck_common::{Config, Error, LogicalType, Result};
use sqlparser::ast as sql;

/// Bind a SQL data type to LogicalType
///
/// A bare `DECIMAL` takes its width and scale from `config`.
pub fn bind_data_type(data_type: &sql::DataType, config: &Config) -> Result<LogicalType> {
    let bound = match data_type {
        sql::DataType::Boolean | sql::DataType::Bool => LogicalType::Boolean,
        sql::DataType::TinyInt(_) => LogicalType::TinyInt,
        sql::DataType::SmallInt(_) | sql::DataType::Int2(_) => LogicalType::SmallInt,
        sql::DataType::Int(_) | sql::DataType::Integer(_) | sql::DataType::Int4(_) => {
            LogicalType::Integer
        }
        sql::DataType::BigInt(_) | sql::DataType::Int8(_) => LogicalType::BigInt,
        sql::DataType::Float(_) | sql::DataType::Real => LogicalType::Float,
        sql::DataType::Double | sql::DataType::DoublePrecision => LogicalType::Double,
        sql::DataType::Decimal(info) | sql::DataType::Numeric(info) => {
            let (width, scale) = match info {
                sql::ExactNumberInfo::PrecisionAndScale(p, s) => (narrow(*p)?, narrow(*s)?),
                sql::ExactNumberInfo::Precision(p) => (narrow(*p)?, 0),
                sql::ExactNumberInfo::None => {
                    (config.default_decimal_width, config.default_decimal_scale)
                }
            };
            LogicalType::decimal(width, scale)?
        }
        sql::DataType::Varchar(_) | sql::DataType::Text | sql::DataType::String(_) => {
            LogicalType::Varchar
        }
        sql::DataType::Blob(_) | sql::DataType::Bytea => LogicalType::Blob,
        sql::DataType::Date => LogicalType::Date,
        // TimeTz (time with timezone) - must come before generic Time
        sql::DataType::Time(_, sql::TimezoneInfo::Tz)
        | sql::DataType::Time(_, sql::TimezoneInfo::WithTimeZone) => LogicalType::TimeTz,
        sql::DataType::Time(_, _) => LogicalType::Time,
        // TimestampTz (timestamp with timezone) - must come before generic Timestamp
        sql::DataType::Timestamp(_, sql::TimezoneInfo::Tz)
        | sql::DataType::Timestamp(_, sql::TimezoneInfo::WithTimeZone) => LogicalType::TimestampTz,
        sql::DataType::Timestamp(_, _) => LogicalType::Timestamp,
        sql::DataType::Interval => LogicalType::Interval,
        sql::DataType::Uuid => LogicalType::Uuid,
        sql::DataType::Array(elem) => bind_array_type(elem, config)?,
        sql::DataType::Struct(fields, _) => {
            let mut children = Vec::with_capacity(fields.len());
            for field in fields {
                let name = field.field_name.as_ref().ok_or_else(|| {
                    Error::Parse("STRUCT fields must be named".to_string())
                })?;
                children.push((name.value.clone(), bind_data_type(&field.field_type, config)?));
            }
            LogicalType::Struct(children)
        }
        sql::DataType::Union(fields) => {
            let members = fields
                .iter()
                .map(|field| {
                    Ok((
                        field.field_name.value.clone(),
                        bind_data_type(&field.field_type, config)?,
                    ))
                })
                .collect::<Result<Vec<_>>>()?;
            if members.is_empty() {
                return Err(Error::Parse("UNION requires at least one member".to_string()));
            }
            LogicalType::Union(members)
        }
        // DuckDB dialect hands MAP over as a custom type, see below
        sql::DataType::Map(key, value) => LogicalType::Map {
            key: Box::new(bind_data_type(key, config)?),
            value: Box::new(bind_data_type(value, config)?),
        },
        // DuckDB type names that sqlparser does not know about
        sql::DataType::Custom(name, modifiers) => {
            let type_name = name.to_string().to_uppercase();
            match type_name.as_str() {
                "MAP" => bind_map_modifiers(modifiers, config)?,
                "HUGEINT" | "INT128" => LogicalType::HugeInt,
                "UHUGEINT" | "UINT128" => LogicalType::UHugeInt,
                "UTINYINT" | "UINT8" => LogicalType::UTinyInt,
                "USMALLINT" | "UINT16" => LogicalType::USmallInt,
                "UINTEGER" | "UINT32" => LogicalType::UInteger,
                "UBIGINT" | "UINT64" => LogicalType::UBigInt,
                "VARINT" => LogicalType::VarInt,
                "BIT" | "BITSTRING" => LogicalType::Bit,
                "TIMESTAMPTZ" => LogicalType::TimestampTz,
                "TIMETZ" => LogicalType::TimeTz,
                "TIMESTAMP_S" => LogicalType::TimestampS,
                "TIMESTAMP_MS" => LogicalType::TimestampMs,
                "TIMESTAMP_NS" => LogicalType::TimestampNs,
                _ => return Err(Error::NotImplemented(format!("Data type: {}", type_name))),
            }
        }
        _ => return Err(Error::NotImplemented(format!("Data type: {}", data_type))),
    };
    log::trace!("bound data type {} to {}", data_type, bound);
    Ok(bound)
}

/// `T[]` is a LIST, `T[n]` a fixed-size ARRAY
fn bind_array_type(elem: &sql::ArrayElemTypeDef, config: &Config) -> Result<LogicalType> {
    match elem {
        sql::ArrayElemTypeDef::SquareBracket(inner, Some(size)) => Ok(LogicalType::Array {
            element_type: Box::new(bind_data_type(inner, config)?),
            size: *size,
        }),
        sql::ArrayElemTypeDef::SquareBracket(inner, None)
        | sql::ArrayElemTypeDef::AngleBracket(inner)
        | sql::ArrayElemTypeDef::Parenthesis(inner) => {
            Ok(LogicalType::List(Box::new(bind_data_type(inner, config)?)))
        }
        sql::ArrayElemTypeDef::None => {
            Err(Error::Parse("Array type requires element type".to_string()))
        }
    }
}

/// `MAP(K, V)` as parsed by the DuckDB dialect: two type-name modifiers
fn bind_map_modifiers(modifiers: &[String], config: &Config) -> Result<LogicalType> {
    let [key, value] = modifiers else {
        return Err(Error::Parse(format!(
            "MAP expects a key and a value type, got {} type arguments",
            modifiers.len()
        )));
    };
    let bind_modifier = |modifier: &str| -> Result<Box<LogicalType>> {
        let data_type = ironduck_parser::parse_data_type(modifier)?;
        Ok(Box::new(bind_data_type(&data_type, config)?))
    };
    Ok(LogicalType::Map {
        key: bind_modifier(key)?,
        value: bind_modifier(value)?,
    })
}

fn narrow(value: u64) -> Result<u8> {
    u8::try_from(value)
        .map_err(|_| Error::InvalidArguments(format!("DECIMAL modifier out of range: {}", value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn column_type(sql_type: &str, config: &Config) -> Result<LogicalType> {
        let statement = ironduck_parser::parse_statement(&format!("CREATE TABLE t (c {})", sql_type))?;
        match statement {
            sql::Statement::CreateTable(create) => bind_data_type(&create.columns[0].data_type, config),
            other => panic!("unexpected statement {}", other),
        }
    }

    #[rstest]
    #[case("BOOLEAN", LogicalType::Boolean)]
    #[case("INTEGER", LogicalType::Integer)]
    #[case("BIGINT", LogicalType::BigInt)]
    #[case("DOUBLE", LogicalType::Double)]
    #[case("VARCHAR", LogicalType::Varchar)]
    #[case("DATE", LogicalType::Date)]
    #[case("DECIMAL", LogicalType::Decimal { width: 18, scale: 3 })]
    #[case("DECIMAL(10,2)", LogicalType::Decimal { width: 10, scale: 2 })]
    #[case("NUMERIC(9)", LogicalType::Decimal { width: 9, scale: 0 })]
    #[case("INTEGER[]", LogicalType::List(Box::new(LogicalType::Integer)))]
    fn test_bind_scalar_types(#[case] sql_type: &str, #[case] expected: LogicalType) {
        assert_eq!(column_type(sql_type, &Config::default()).unwrap(), expected);
    }

    #[test]
    fn test_bind_default_decimal_from_config() {
        let config = Config::default().with_default_decimal(12, 4);
        assert_eq!(
            column_type("DECIMAL", &config).unwrap(),
            LogicalType::Decimal { width: 12, scale: 4 }
        );
    }

    #[test]
    fn test_bind_decimal_out_of_range() {
        assert!(column_type("DECIMAL(40,2)", &Config::default()).is_err());
        assert!(column_type("DECIMAL(4,6)", &Config::default()).is_err());
    }

    #[test]
    fn test_bind_struct() {
        let ty = column_type("STRUCT(a INTEGER, b VARCHAR)", &Config::default()).unwrap();
        assert_eq!(
            ty,
            LogicalType::Struct(vec![
                ("a".to_string(), LogicalType::Integer),
                ("b".to_string(), LogicalType::Varchar),
            ])
        );
    }

    #[test]
    fn test_bind_union() {
        let ty = column_type("UNION(member1 VARCHAR, member2 INTEGER)", &Config::default()).unwrap();
        assert_eq!(
            ty,
            LogicalType::Union(vec![
                ("member1".to_string(), LogicalType::Varchar),
                ("member2".to_string(), LogicalType::Integer),
            ])
        );
    }

    #[test]
    fn test_bind_map() {
        let ty = column_type("MAP(VARCHAR, DOUBLE)", &Config::default()).unwrap();
        assert_eq!(
            ty,
            LogicalType::Map {
                key: Box::new(LogicalType::Varchar),
                value: Box::new(LogicalType::Double),
            }
        );
    }

    #[test]
    fn test_bind_map_value_uses_config() {
        let config = Config::default().with_default_decimal(12, 4);
        assert_eq!(
            column_type("MAP(INTEGER, DECIMAL)", &config).unwrap(),
            LogicalType::Map {
                key: Box::new(LogicalType::Integer),
                value: Box::new(LogicalType::Decimal { width: 12, scale: 4 }),
            }
        );
    }

    #[rstest]
    #[case("MAP(VARCHAR)")]
    #[case("MAP(VARCHAR, INTEGER, DOUBLE)")]
    #[case("MAP(VARCHAR, NOSUCHTYPE)")]
    fn test_bind_map_rejects_bad_arguments(#[case] sql_type: &str) {
        assert!(column_type(sql_type, &Config::default()).is_err());
    }
}
