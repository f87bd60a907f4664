//! DuckDB type text, built by walking a type through its handle

use crate::logical_type::{LogicalType, LogicalTypeKind};

pub(crate) fn render(ty: &LogicalType) -> String {
    match ty.kind() {
        LogicalTypeKind::Decimal(decimal) => {
            format!("DECIMAL({},{})", decimal.width(), decimal.scale())
        }
        LogicalTypeKind::List(child) => format!("{}[]", render(&child)),
        LogicalTypeKind::Array { child, size } => format!("{}[{}]", render(&child), size),
        LogicalTypeKind::Map { key, value } => {
            format!("MAP({}, {})", render(&key), render(&value))
        }
        LogicalTypeKind::Struct(fields) => format!("STRUCT({})", render_fields(fields.children())),
        LogicalTypeKind::Union(members) => format!("UNION({})", render_fields(members.members())),
        LogicalTypeKind::Enum(_) => ty.type_symbol().type_name(),
        LogicalTypeKind::Scalar(symbol) => symbol.type_name(),
        LogicalTypeKind::Unknown(_) => "UNKNOWN".to_string(),
        LogicalTypeKind::Invalid => "INVALID".to_string(),
    }
}

fn render_fields(fields: impl Iterator<Item = (String, LogicalType)>) -> String {
    fields
        .map(|(name, ty)| format!("{} {}", name, render(&ty)))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use ironduck_capi::LogicalTypeHandle;
    use ironduck_common::LogicalType as EngineType;

    use crate::LogicalType;

    fn name_of(ty: EngineType) -> Option<String> {
        LogicalType::from_handle(LogicalTypeHandle::new(ty)).name()
    }

    #[test]
    fn test_scalar_names() {
        assert_eq!(name_of(EngineType::Integer).as_deref(), Some("INTEGER"));
        assert_eq!(name_of(EngineType::TimestampTz).as_deref(), Some("TIMESTAMP_TZ"));
        assert_eq!(name_of(EngineType::Null).as_deref(), Some("SQLNULL"));
        assert_eq!(
            name_of(EngineType::Enum(vec!["a".to_string()])).as_deref(),
            Some("ENUM")
        );
        assert_eq!(name_of(EngineType::Invalid), None);
    }

    #[test]
    fn test_decimal_name() {
        assert_eq!(
            name_of(EngineType::Decimal { width: 18, scale: 3 }).as_deref(),
            Some("DECIMAL(18,3)")
        );
    }

    #[test]
    fn test_nested_names() {
        assert_eq!(
            name_of(EngineType::List(Box::new(EngineType::Varchar))).as_deref(),
            Some("VARCHAR[]")
        );
        assert_eq!(
            name_of(EngineType::Array {
                element_type: Box::new(EngineType::Integer),
                size: 3,
            })
            .as_deref(),
            Some("INTEGER[3]")
        );
        assert_eq!(
            name_of(EngineType::Map {
                key: Box::new(EngineType::Varchar),
                value: Box::new(EngineType::List(Box::new(EngineType::Double))),
            })
            .as_deref(),
            Some("MAP(VARCHAR, DOUBLE[])")
        );
        assert_eq!(
            name_of(EngineType::Struct(vec![
                ("a".to_string(), EngineType::Integer),
                (
                    "b".to_string(),
                    EngineType::Struct(vec![("c".to_string(), EngineType::Boolean)]),
                ),
            ]))
            .as_deref(),
            Some("STRUCT(a INTEGER, b STRUCT(c BOOLEAN))")
        );
        assert_eq!(
            name_of(EngineType::Union(vec![
                ("member1".to_string(), EngineType::Varchar),
                ("member2".to_string(), EngineType::Integer),
            ]))
            .as_deref(),
            Some("UNION(member1 VARCHAR, member2 INTEGER)")
        );
        assert_eq!(name_of(EngineType::Struct(vec![])).as_deref(), Some("STRUCT()"));
    }
}
