use crate::stmt::{Row, Value};
use crate::{Error, Result};

/// One foreign-key edge of the schema graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelationData {
    pub parent_table: String,
    pub child_table: String,
    pub parent_key_column: String,
    pub foreign_key_column: String,
}

impl RelationData {
    /// Column names drivers use when reporting relations.
    pub const COLUMNS: [&'static str; 4] = [
        "ParentTable",
        "ChildTable",
        "ParentKeyColumn",
        "ForeignKeyColumn",
    ];

    /// Decodes an edge from a relation introspection row. Columns are looked
    /// up by name so drivers may return them in any order.
    pub fn from_row(row: &Row) -> Result<RelationData> {
        let [parent_table, child_table, parent_key_column, foreign_key_column] =
            Self::COLUMNS.map(|column| read(row, column));

        Ok(RelationData {
            parent_table: parent_table?,
            child_table: child_table?,
            parent_key_column: parent_key_column?,
            foreign_key_column: foreign_key_column?,
        })
    }

    pub fn is_parent(&self, table: &str) -> bool {
        self.parent_table.eq_ignore_ascii_case(table)
    }

    pub fn is_child(&self, table: &str) -> bool {
        self.child_table.eq_ignore_ascii_case(table)
    }

    /// An edge from a table to itself, such as `Employee.ManagerId`.
    pub fn is_self_referencing(&self) -> bool {
        self.parent_table.eq_ignore_ascii_case(&self.child_table)
    }
}

fn read(row: &Row, column: &str) -> Result<String> {
    match row.get(column) {
        Some(Value::String(value)) => Ok(value.clone()),
        Some(value) => Err(Error::invalid_result(format!(
            "relation column `{column}` holds {:?}, expected a string",
            value.infer_ty()
        ))),
        None => Err(Error::invalid_result(format!(
            "relation row is missing column `{column}`"
        ))),
    }
}

impl core::fmt::Display for RelationData {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "{}.{} -> {}.{}",
            self.child_table, self.foreign_key_column, self.parent_table, self.parent_key_column
        )
    }
}
