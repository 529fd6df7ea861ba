//! Store introspection: physical columns and the Relation Catalog.

use crate::{
    schema::{self, RelationData, TableMapping},
    stmt::{Row, Value},
    Error, Result,
};

use skiff_core::{
    driver::operation::{ListColumns, ListRelations, QuerySql},
    Connection,
};
use tracing::debug;

/// Physical column names of `table`, in the store's order. Empty when the
/// table does not exist.
pub(crate) async fn list_columns(conn: &mut dyn Connection, table: &str) -> Result<Vec<String>> {
    let rows = conn
        .exec(
            ListColumns {
                table: table.to_string(),
            }
            .into(),
        )
        .await?
        .rows
        .into_values()?;

    rows.iter()
        .map(|row| match row.get(ListColumns::COLUMN) {
            Some(Value::String(name)) => Ok(name.clone()),
            _ => Err(Error::invalid_result(format!(
                "column listing for `{table}` has no `{}` string",
                ListColumns::COLUMN
            ))),
        })
        .collect()
}

/// Every foreign-key edge where `table` is the parent or the child.
pub(crate) async fn load_relations(
    conn: &mut dyn Connection,
    table: &str,
) -> Result<Vec<RelationData>> {
    let rows = conn
        .exec(
            ListRelations {
                table: table.to_string(),
            }
            .into(),
        )
        .await?
        .rows
        .into_values()?;

    let relations = rows
        .iter()
        .map(RelationData::from_row)
        .collect::<Result<Vec<_>>>()?;

    debug!(table, relations = relations.len(), "loaded relations");
    Ok(relations)
}

/// Resolves the table mapping of `model` against its physical columns.
pub(crate) async fn resolve_mapping(
    conn: &mut dyn Connection,
    model: &schema::Model,
) -> Result<TableMapping> {
    let physical = list_columns(conn, model.table_name()).await?;
    TableMapping::resolve(model, &physical)
}

/// Runs a command that yields rows.
pub(crate) async fn query(conn: &mut dyn Connection, op: QuerySql) -> Result<Vec<Row>> {
    debug!(sql = %op.sql, params = op.params.len(), "query");
    conn.exec(op.into()).await?.rows.into_values()
}

/// Runs a command that reports an affected-row count.
pub(crate) async fn execute(conn: &mut dyn Connection, op: QuerySql) -> Result<u64> {
    debug!(sql = %op.sql, params = op.params.len(), "execute");
    conn.exec(op.into()).await?.rows.into_count()
}
