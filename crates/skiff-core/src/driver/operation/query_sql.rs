use super::Operation;

use crate::stmt::Value;

use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub struct QuerySql {
    /// The SQL text to execute. Shared with the compiled command it was
    /// produced from.
    pub sql: Arc<str>,

    /// Parameter values, in the order the command declares them
    pub params: Vec<Param>,

    /// When true, the command produces rows. Otherwise the driver reports
    /// the number of affected rows.
    pub returning: bool,
}

/// A named parameter value.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    /// Parameter name without the dialect's placeholder prefix
    pub name: String,
    pub value: Value,
}

impl From<QuerySql> for Operation {
    fn from(value: QuerySql) -> Self {
        Self::QuerySql(value)
    }
}
