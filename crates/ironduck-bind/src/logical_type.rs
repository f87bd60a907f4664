//! Logical types as seen through the binding
//!
//! [`LogicalType::kind`] decodes a handle once into a [`LogicalTypeKind`].
//! Decimal facets and child traversal are only reachable from the matching
//! variant, so asking a VARCHAR for its scale cannot be written.

use ironduck_capi::{LogicalTypeHandle, RawTypeId};

use crate::name;
use crate::nested::Nested;
use crate::symbol::{resolve, TypeSymbol};

/// A logical type obtained from the engine
#[derive(Debug, Clone, PartialEq)]
pub struct LogicalType {
    handle: LogicalTypeHandle,
}

/// Decoded shape of a [`LogicalType`]
#[derive(Debug, Clone)]
pub enum LogicalTypeKind<'a> {
    Decimal(DecimalType),
    List(LogicalType),
    Array { child: LogicalType, size: u64 },
    Map { key: LogicalType, value: LogicalType },
    Struct(StructType<'a>),
    Union(UnionType<'a>),
    Enum(EnumType<'a>),
    /// Any type without facets or children
    Scalar(TypeSymbol),
    /// A type id this binding does not map. Handles from the current engine
    /// always carry a mapped id; this keeps newer engine ids decodable.
    Unknown(RawTypeId),
    Invalid,
}

impl LogicalType {
    pub fn from_handle(handle: LogicalTypeHandle) -> Self {
        LogicalType { handle }
    }

    pub fn handle(&self) -> &LogicalTypeHandle {
        &self.handle
    }

    pub fn type_id(&self) -> RawTypeId {
        self.handle.type_id()
    }

    pub fn type_symbol(&self) -> TypeSymbol {
        resolve(self.type_id())
    }

    pub fn kind(&self) -> LogicalTypeKind<'_> {
        let handle = &self.handle;
        match self.type_symbol() {
            TypeSymbol::Decimal => LogicalTypeKind::Decimal(DecimalType {
                width: handle.decimal_width(),
                scale: handle.decimal_scale(),
            }),
            TypeSymbol::List => LogicalTypeKind::List(handle.list_child_type().into()),
            TypeSymbol::Array => LogicalTypeKind::Array {
                child: handle.array_child_type().into(),
                size: handle.array_size(),
            },
            TypeSymbol::Map => LogicalTypeKind::Map {
                key: handle.map_key_type().into(),
                value: handle.map_value_type().into(),
            },
            TypeSymbol::Struct => LogicalTypeKind::Struct(StructType { handle }),
            TypeSymbol::Union => LogicalTypeKind::Union(UnionType { handle }),
            TypeSymbol::Enum => LogicalTypeKind::Enum(EnumType { handle }),
            TypeSymbol::Invalid => LogicalTypeKind::Invalid,
            TypeSymbol::Unknown => {
                log::debug!("type id {} is not mapped by the binding", self.type_id());
                LogicalTypeKind::Unknown(self.type_id())
            }
            symbol => LogicalTypeKind::Scalar(symbol),
        }
    }

    pub fn as_decimal(&self) -> Option<DecimalType> {
        match self.kind() {
            LogicalTypeKind::Decimal(decimal) => Some(decimal),
            _ => None,
        }
    }

    pub fn as_struct(&self) -> Option<StructType<'_>> {
        (self.type_symbol() == TypeSymbol::Struct).then_some(StructType {
            handle: &self.handle,
        })
    }

    pub fn as_union(&self) -> Option<UnionType<'_>> {
        (self.type_symbol() == TypeSymbol::Union).then_some(UnionType {
            handle: &self.handle,
        })
    }

    pub fn as_enum(&self) -> Option<EnumType<'_>> {
        (self.type_symbol() == TypeSymbol::Enum).then_some(EnumType {
            handle: &self.handle,
        })
    }

    /// Child type of a LIST, or the `STRUCT(key, value)` entry type of a MAP
    pub fn child_type(&self) -> Option<LogicalType> {
        match self.type_symbol() {
            TypeSymbol::List | TypeSymbol::Map => Some(self.handle.list_child_type().into()),
            _ => None,
        }
    }

    /// DuckDB text for this type, e.g. `DECIMAL(18,3)` or
    /// `STRUCT(a INTEGER, b VARCHAR)`. `None` for an invalid type.
    pub fn name(&self) -> Option<String> {
        match self.type_symbol() {
            TypeSymbol::Invalid => None,
            _ => Some(name::render(self)),
        }
    }
}

impl From<LogicalTypeHandle> for LogicalType {
    fn from(handle: LogicalTypeHandle) -> Self {
        LogicalType::from_handle(handle)
    }
}

/// Width and scale of a DECIMAL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecimalType {
    width: u8,
    scale: u8,
}

impl DecimalType {
    /// Total number of digits
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Digits after the decimal point
    pub fn scale(&self) -> u8 {
        self.scale
    }
}

/// Children of a STRUCT
#[derive(Debug, Clone, Copy)]
pub struct StructType<'a> {
    handle: &'a LogicalTypeHandle,
}

impl<'a> StructType<'a> {
    pub fn child_count(&self) -> usize {
        self.handle.struct_child_count()
    }

    /// # Panics
    ///
    /// Panics if `index >= child_count()`.
    pub fn child_name_at(&self, index: usize) -> String {
        self.handle.struct_child_name(index)
    }

    /// # Panics
    ///
    /// Panics if `index >= child_count()`.
    pub fn child_type_at(&self, index: usize) -> LogicalType {
        self.handle.struct_child_type(index).into()
    }

    pub fn child_names(&self) -> Nested<'a, String> {
        Nested::new(self.handle, self.child_count(), |h, i| h.struct_child_name(i))
    }

    pub fn child_types(&self) -> Nested<'a, LogicalType> {
        Nested::new(self.handle, self.child_count(), |h, i| {
            LogicalType::from(h.struct_child_type(i))
        })
    }

    pub fn children(&self) -> Nested<'a, (String, LogicalType)> {
        Nested::new(self.handle, self.child_count(), |h, i| {
            (h.struct_child_name(i), LogicalType::from(h.struct_child_type(i)))
        })
    }
}

/// Members of a UNION
#[derive(Debug, Clone, Copy)]
pub struct UnionType<'a> {
    handle: &'a LogicalTypeHandle,
}

impl<'a> UnionType<'a> {
    pub fn member_count(&self) -> usize {
        self.handle.union_member_count()
    }

    /// # Panics
    ///
    /// Panics if `index >= member_count()`.
    pub fn member_name_at(&self, index: usize) -> String {
        self.handle.union_member_name(index)
    }

    /// # Panics
    ///
    /// Panics if `index >= member_count()`.
    pub fn member_type_at(&self, index: usize) -> LogicalType {
        self.handle.union_member_type(index).into()
    }

    pub fn member_names(&self) -> Nested<'a, String> {
        Nested::new(self.handle, self.member_count(), |h, i| h.union_member_name(i))
    }

    pub fn member_types(&self) -> Nested<'a, LogicalType> {
        Nested::new(self.handle, self.member_count(), |h, i| {
            LogicalType::from(h.union_member_type(i))
        })
    }

    pub fn members(&self) -> Nested<'a, (String, LogicalType)> {
        Nested::new(self.handle, self.member_count(), |h, i| {
            (h.union_member_name(i), LogicalType::from(h.union_member_type(i)))
        })
    }
}

/// Dictionary of an ENUM
#[derive(Debug, Clone, Copy)]
pub struct EnumType<'a> {
    handle: &'a LogicalTypeHandle,
}

impl<'a> EnumType<'a> {
    pub fn dictionary_size(&self) -> usize {
        self.handle.enum_dictionary_size()
    }

    /// # Panics
    ///
    /// Panics if `index >= dictionary_size()`.
    pub fn value_at(&self, index: usize) -> String {
        self.handle.enum_dictionary_value(index)
    }

    pub fn values(&self) -> Nested<'a, String> {
        Nested::new(self.handle, self.dictionary_size(), |h, i| {
            h.enum_dictionary_value(i)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ironduck_common::LogicalType as EngineType;

    fn logical(ty: EngineType) -> LogicalType {
        LogicalTypeHandle::new(ty).into()
    }

    #[test]
    fn test_engine_handles_never_decode_unknown() {
        let engine_types = [
            EngineType::Null,
            EngineType::Any,
            EngineType::Boolean,
            EngineType::UHugeInt,
            EngineType::VarInt,
            EngineType::Bit,
            EngineType::TimestampMs,
            EngineType::TimeTz,
            EngineType::Uuid,
            EngineType::Interval,
            EngineType::Decimal { width: 4, scale: 1 },
            EngineType::List(Box::new(EngineType::Blob)),
            EngineType::Array {
                element_type: Box::new(EngineType::Float),
                size: 2,
            },
            EngineType::Enum(vec!["x".to_string()]),
        ];
        for ty in engine_types {
            let logical_type = logical(ty);
            assert_ne!(logical_type.type_symbol(), TypeSymbol::Unknown);
            assert!(!matches!(logical_type.kind(), LogicalTypeKind::Unknown(_)));
        }
    }

    fn union_type() -> LogicalType {
        logical(EngineType::Union(vec![
            ("member1".to_string(), EngineType::Varchar),
            ("member2".to_string(), EngineType::Integer),
        ]))
    }

    #[test]
    fn test_union_members() {
        let ty = union_type();
        let union = ty.as_union().unwrap();

        assert_eq!(union.member_count(), 2);
        assert_eq!(union.member_names().collect::<Vec<_>>(), vec!["member1", "member2"]);
        assert_eq!(
            union.member_types().map(|t| t.type_symbol()).collect::<Vec<_>>(),
            vec![TypeSymbol::Varchar, TypeSymbol::Integer]
        );
        assert_eq!(union.member_name_at(1), "member2");
        assert_eq!(union.member_type_at(0).type_symbol(), TypeSymbol::Varchar);
    }

    #[test]
    fn test_producers_are_restartable() {
        let ty = union_type();
        let union = ty.as_union().unwrap();

        let first: Vec<_> = union.members().collect();
        let second: Vec<_> = union.members().collect();
        assert_eq!(first, second);
        assert_eq!(union.member_names().len(), 2);
    }

    #[test]
    fn test_empty_struct() {
        let ty = logical(EngineType::Struct(vec![]));
        let fields = ty.as_struct().unwrap();
        assert_eq!(fields.child_count(), 0);
        assert_eq!(fields.child_names().len(), 0);
        assert_eq!(fields.child_names().next(), None);
        assert_eq!(fields.child_types().count(), 0);
    }

    #[test]
    fn test_struct_children() {
        let ty = logical(EngineType::Struct(vec![
            ("child1".to_string(), EngineType::Integer),
            ("child2".to_string(), EngineType::Varchar),
        ]));
        let LogicalTypeKind::Struct(fields) = ty.kind() else {
            panic!("expected a struct kind");
        };
        let children: Vec<_> = fields
            .children()
            .map(|(name, ty)| (name, ty.type_symbol()))
            .collect();
        assert_eq!(
            children,
            vec![
                ("child1".to_string(), TypeSymbol::Integer),
                ("child2".to_string(), TypeSymbol::Varchar),
            ]
        );
        assert_eq!(
            fields.child_types().rev().map(|t| t.type_symbol()).collect::<Vec<_>>(),
            vec![TypeSymbol::Varchar, TypeSymbol::Integer]
        );
    }

    #[test]
    fn test_decimal_kind() {
        let ty = logical(EngineType::Decimal { width: 18, scale: 3 });
        let decimal = ty.as_decimal().unwrap();
        assert_eq!(decimal.width(), 18);
        assert_eq!(decimal.scale(), 3);
        assert!(logical(EngineType::Varchar).as_decimal().is_none());
    }

    #[test]
    fn test_enum_values() {
        let ty = logical(EngineType::Enum(vec!["sad".to_string(), "happy".to_string()]));
        let dictionary = ty.as_enum().unwrap();
        assert_eq!(dictionary.dictionary_size(), 2);
        assert_eq!(dictionary.values().collect::<Vec<_>>(), vec!["sad", "happy"]);
        assert_eq!(dictionary.value_at(1), "happy");
    }

    #[test]
    fn test_kind_of_list_map_array() {
        let list = logical(EngineType::List(Box::new(EngineType::BigInt)));
        match list.kind() {
            LogicalTypeKind::List(child) => assert_eq!(child.type_symbol(), TypeSymbol::BigInt),
            other => panic!("unexpected {:?}", other),
        }

        let map = logical(EngineType::Map {
            key: Box::new(EngineType::Varchar),
            value: Box::new(EngineType::Double),
        });
        match map.kind() {
            LogicalTypeKind::Map { key, value } => {
                assert_eq!(key.type_symbol(), TypeSymbol::Varchar);
                assert_eq!(value.type_symbol(), TypeSymbol::Double);
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(
            map.child_type().map(|t| t.type_symbol()),
            Some(TypeSymbol::Struct)
        );

        let array = logical(EngineType::Array {
            element_type: Box::new(EngineType::Float),
            size: 4,
        });
        match array.kind() {
            LogicalTypeKind::Array { child, size } => {
                assert_eq!(child.type_symbol(), TypeSymbol::Float);
                assert_eq!(size, 4);
            }
            other => panic!("unexpected {:?}", other),
        }
        assert!(array.child_type().is_none());
    }

    #[test]
    fn test_scalar_and_invalid_kinds() {
        assert!(matches!(
            logical(EngineType::Uuid).kind(),
            LogicalTypeKind::Scalar(TypeSymbol::Uuid)
        ));
        assert!(matches!(
            logical(EngineType::Invalid).kind(),
            LogicalTypeKind::Invalid
        ));
        assert!(logical(EngineType::Invalid).name().is_none());
    }
}
