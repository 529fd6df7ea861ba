/// A single `WHERE` predicate. Predicates of one statement are joined with
/// `AND`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// `column = <param>`, bound to the parameter named after the column.
    Eq { column: String },

    /// `column = '<value>'`, with the value inlined as a string literal.
    EqLiteral { column: String, value: String },

    /// `column IS NOT NULL`
    NotNull { column: String },
}

impl Filter {
    pub fn eq(column: impl Into<String>) -> Filter {
        Filter::Eq {
            column: column.into(),
        }
    }
}
