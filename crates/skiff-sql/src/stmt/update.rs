use super::Statement;

/// `UPDATE <table> SET col = <param>, ... WHERE <key> = <param>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Update {
    pub table: String,
    pub columns: Vec<String>,
    pub key: String,
}

impl From<Update> for Statement {
    fn from(value: Update) -> Self {
        Statement::Update(value)
    }
}
