use super::Operation;

/// Relation introspection: one row per foreign-key edge where `table` is the
/// parent or the child. Rows carry the columns listed in
/// [`RelationData::COLUMNS`](crate::schema::RelationData::COLUMNS).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRelations {
    pub table: String,
}

impl From<ListRelations> for Operation {
    fn from(value: ListRelations) -> Self {
        Self::ListRelations(value)
    }
}
