use super::Operation;

/// Schema introspection: one row per physical column of `table`, in
/// declaration order, each carrying the column name under
/// [`ListColumns::COLUMN`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListColumns {
    pub table: String,
}

impl ListColumns {
    pub const COLUMN: &'static str = "ColumnName";
}

impl From<ListColumns> for Operation {
    fn from(value: ListColumns) -> Self {
        Self::ListColumns(value)
    }
}
