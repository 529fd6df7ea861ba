mod list_columns;
pub use list_columns::ListColumns;

mod list_relations;
pub use list_relations::ListRelations;

mod query_sql;
pub use query_sql::{Param, QuerySql};

#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Execute a SQL command
    QuerySql(QuerySql),

    /// List the physical columns of a table
    ListColumns(ListColumns),

    /// List the foreign-key edges touching a table
    ListRelations(ListRelations),
}

impl Operation {
    /// The SQL text of a `QuerySql` operation.
    pub fn sql(&self) -> Option<&str> {
        match self {
            Self::QuerySql(op) => Some(&*op.sql),
            _ => None,
        }
    }
}
