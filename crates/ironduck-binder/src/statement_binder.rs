//! Statement binding

use super::type_binder::bind_data_type;
use super::{
    Binder, BoundColumnDef, BoundCreateSchema, BoundCreateTable, BoundDrop, BoundSelect,
    BoundStatement,
};
use ironduck_catalog::Table;
use ironduck_common::{Error, Result};
use sqlparser::ast as sql;
use std::sync::Arc;

/// Bind a statement
pub fn bind_statement(binder: &Binder, stmt: &sql::Statement) -> Result<BoundStatement> {
    match stmt {
        sql::Statement::Query(query) => Ok(BoundStatement::Select(bind_query(binder, query)?)),

        sql::Statement::CreateTable(create) => {
            let bound = bind_create_table(binder, create)?;
            Ok(BoundStatement::CreateTable(bound))
        }

        sql::Statement::CreateSchema {
            schema_name,
            if_not_exists,
            ..
        } => Ok(BoundStatement::CreateSchema(BoundCreateSchema {
            name: schema_name.to_string(),
            if_not_exists: *if_not_exists,
        })),

        sql::Statement::Drop {
            object_type,
            names,
            if_exists,
            ..
        } => {
            if *object_type != sql::ObjectType::Table {
                return Err(Error::NotImplemented(format!("DROP {}", object_type)));
            }
            let name = names
                .first()
                .ok_or_else(|| Error::Parse("Missing object name".to_string()))?;
            let (schema, name) = split_object_name(binder, name)?;

            Ok(BoundStatement::Drop(BoundDrop {
                schema,
                name,
                if_exists: *if_exists,
            }))
        }

        _ => Err(Error::NotImplemented(format!("Statement: {}", stmt))),
    }
}

/// Split `[schema.]name` into its parts, defaulting the schema
fn split_object_name(binder: &Binder, name: &sql::ObjectName) -> Result<(String, String)> {
    let parts: Vec<_> = name.0.iter().map(|i| i.value.clone()).collect();
    match parts.as_slice() {
        [table] => Ok((binder.current_schema().to_string(), table.clone())),
        [schema, table] => Ok((schema.clone(), table.clone())),
        _ => Err(Error::NotImplemented(format!("Qualified name: {}", name))),
    }
}

fn bind_create_table(binder: &Binder, create: &sql::CreateTable) -> Result<BoundCreateTable> {
    if create.query.is_some() {
        return Err(Error::NotImplemented("CREATE TABLE AS".to_string()));
    }
    let (schema, name) = split_object_name(binder, &create.name)?;

    let columns = create
        .columns
        .iter()
        .map(|col| {
            Ok(BoundColumnDef {
                name: col.name.value.clone(),
                data_type: bind_data_type(&col.data_type, binder.config())?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(BoundCreateTable {
        schema,
        name,
        columns,
        if_not_exists: create.if_not_exists,
    })
}

/// Bind a query down to its output columns
fn bind_query(binder: &Binder, query: &sql::Query) -> Result<BoundSelect> {
    let select = match query.body.as_ref() {
        sql::SetExpr::Select(select) => select,
        other => return Err(Error::NotImplemented(format!("Query body: {}", other))),
    };

    let table = match select.from.as_slice() {
        [] => None,
        [from] if from.joins.is_empty() => Some(bind_table_ref(binder, &from.relation)?),
        _ => return Err(Error::NotImplemented("Joins".to_string())),
    };

    let mut select_list = Vec::with_capacity(select.projection.len());
    for item in &select.projection {
        match item {
            sql::SelectItem::Wildcard(_) | sql::SelectItem::QualifiedWildcard(..) => {
                let table = table
                    .as_ref()
                    .ok_or_else(|| Error::Parse("SELECT * requires a FROM clause".to_string()))?;
                select_list.extend(table.columns.iter().map(|col| BoundColumnDef {
                    name: col.name.clone(),
                    data_type: col.logical_type.clone(),
                }));
            }
            sql::SelectItem::UnnamedExpr(expr) => {
                select_list.push(bind_projection(binder, expr, table.as_deref())?);
            }
            sql::SelectItem::ExprWithAlias { expr, alias } => {
                let mut column = bind_projection(binder, expr, table.as_deref())?;
                column.name = alias.value.clone();
                select_list.push(column);
            }
        }
    }

    Ok(BoundSelect { select_list })
}

fn bind_table_ref(binder: &Binder, relation: &sql::TableFactor) -> Result<Arc<Table>> {
    match relation {
        sql::TableFactor::Table { name, .. } => {
            let (schema, table) = split_object_name(binder, name)?;
            binder
                .catalog()
                .get_table(&schema, &table)
                .ok_or(Error::TableNotFound(table))
        }
        other => Err(Error::NotImplemented(format!("Table reference: {}", other))),
    }
}

/// Bind one projection expression. Only column references and casts carry a
/// type that can be known without evaluating anything.
fn bind_projection(
    binder: &Binder,
    expr: &sql::Expr,
    table: Option<&Table>,
) -> Result<BoundColumnDef> {
    match expr {
        sql::Expr::Identifier(ident) => bind_column_ref(&ident.value, table),
        sql::Expr::CompoundIdentifier(idents) => {
            let ident = idents
                .last()
                .ok_or_else(|| Error::Parse("Empty column reference".to_string()))?;
            bind_column_ref(&ident.value, table)
        }
        sql::Expr::Cast { data_type, .. } => Ok(BoundColumnDef {
            name: expr.to_string(),
            data_type: bind_data_type(data_type, binder.config())?,
        }),
        sql::Expr::Nested(inner) => bind_projection(binder, inner, table),
        _ => Err(Error::NotImplemented(format!("Projection: {}", expr))),
    }
}

fn bind_column_ref(name: &str, table: Option<&Table>) -> Result<BoundColumnDef> {
    let column = table
        .and_then(|t| t.get_column(name))
        .ok_or_else(|| Error::ColumnNotFound(name.to_string()))?;
    Ok(BoundColumnDef {
        name: column.name.clone(),
        data_type: column.logical_type.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ironduck_catalog::Catalog;
    use ironduck_common::{Config, LogicalType};

    fn binder() -> Binder {
        let catalog = Arc::new(Catalog::default());
        catalog
            .create_table(
                "main",
                "items",
                vec![
                    ("id".to_string(), LogicalType::Integer),
                    ("price".to_string(), LogicalType::Decimal { width: 18, scale: 3 }),
                ],
            )
            .unwrap();
        Binder::new(catalog, &Config::default())
    }

    fn bind_sql(binder: &Binder, sql: &str) -> Result<BoundStatement> {
        let statement = ironduck_parser::parse_statement(sql)?;
        binder.bind(&statement)
    }

    fn select_list(binder: &Binder, sql: &str) -> Vec<BoundColumnDef> {
        match bind_sql(binder, sql).unwrap() {
            BoundStatement::Select(select) => select.select_list,
            other => panic!("expected SELECT, got {:?}", other),
        }
    }

    #[test]
    fn test_bind_create_table() {
        let binder = binder();
        let bound = bind_sql(&binder, "CREATE TABLE IF NOT EXISTS s.t (a DECIMAL, b VARCHAR)").unwrap();
        match bound {
            BoundStatement::CreateTable(create) => {
                assert_eq!(create.schema, "s");
                assert_eq!(create.name, "t");
                assert!(create.if_not_exists);
                assert_eq!(create.columns.len(), 2);
                assert_eq!(
                    create.columns[0].data_type,
                    LogicalType::Decimal { width: 18, scale: 3 }
                );
            }
            other => panic!("expected CREATE TABLE, got {:?}", other),
        }
    }

    #[test]
    fn test_bind_drop_table() {
        let binder = binder();
        match bind_sql(&binder, "DROP TABLE IF EXISTS items").unwrap() {
            BoundStatement::Drop(drop) => {
                assert_eq!(drop.schema, "main");
                assert_eq!(drop.name, "items");
                assert!(drop.if_exists);
            }
            other => panic!("expected DROP, got {:?}", other),
        }
    }

    #[test]
    fn test_bind_drop_only_tables() {
        let binder = binder();
        assert!(matches!(
            bind_sql(&binder, "DROP VIEW items"),
            Err(Error::NotImplemented(_))
        ));
    }

    #[test]
    fn test_bind_select_star() {
        let binder = binder();
        let columns = select_list(&binder, "SELECT * FROM items");
        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0].name, "id");
        assert_eq!(columns[1].data_type, LogicalType::Decimal { width: 18, scale: 3 });
    }

    #[test]
    fn test_bind_select_columns_and_alias() {
        let binder = binder();
        let columns = select_list(&binder, "SELECT price AS cost, items.id FROM items");
        assert_eq!(columns[0].name, "cost");
        assert_eq!(columns[1].name, "id");
        assert_eq!(columns[1].data_type, LogicalType::Integer);
    }

    #[test]
    fn test_bind_cast_without_from() {
        let binder = binder();
        let columns = select_list(&binder, "SELECT CAST(NULL AS STRUCT(a INTEGER)) AS s");
        assert_eq!(columns[0].name, "s");
        assert_eq!(
            columns[0].data_type,
            LogicalType::Struct(vec![("a".to_string(), LogicalType::Integer)])
        );
    }

    #[test]
    fn test_bind_errors() {
        let binder = binder();
        assert!(matches!(
            bind_sql(&binder, "SELECT * FROM missing"),
            Err(Error::TableNotFound(_))
        ));
        assert!(matches!(
            bind_sql(&binder, "SELECT nope FROM items"),
            Err(Error::ColumnNotFound(_))
        ));
        assert!(matches!(
            bind_sql(&binder, "SELECT id + 1 FROM items"),
            Err(Error::NotImplemented(_))
        ));
        assert!(matches!(
            bind_sql(&binder, "INSERT INTO items VALUES (1, 2.5)"),
            Err(Error::NotImplemented(_))
        ));
    }
}
