use super::Statement;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insert {
    pub table: String,

    /// Columns bound to parameters named after them, in this order.
    pub columns: Vec<String>,

    /// Discriminator column and the literal value stored in it.
    pub discriminator: Option<(String, String)>,

    /// Column returned by the insert, typically the generated identity.
    pub returning: Option<String>,
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Statement::Insert(value)
    }
}
