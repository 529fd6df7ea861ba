use crate::{Serializer, Statement};

use skiff_core::{
    driver::operation::{Param, QuerySql},
    schema::TableMapping,
    stmt::Value,
    Result,
};

use std::sync::Arc;

/// SQL text compiled once and executed many times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// The SQL text, shared with every operation built from this command.
    pub sql: Arc<str>,

    /// Names of the parameters the text refers to, in placeholder order.
    pub params: Vec<String>,

    /// True when the command yields rows.
    pub returning: bool,
}

impl Command {
    pub fn compile(serializer: &Serializer, stmt: &Statement) -> Command {
        let mut params = Vec::<String>::new();
        let sql = serializer.serialize(stmt, &mut params);

        Command {
            sql: sql.into(),
            params,
            returning: stmt.is_returning(),
        }
    }

    /// Builds the operation executing this command. `bind` supplies the
    /// value of each named parameter.
    pub fn bind(&self, mut bind: impl FnMut(&str) -> Result<Value>) -> Result<QuerySql> {
        let params = self
            .params
            .iter()
            .map(|name| {
                Ok(Param {
                    name: name.clone(),
                    value: bind(name)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(QuerySql {
            sql: self.sql.clone(),
            params,
            returning: self.returning,
        })
    }

    /// Builds the operation for a command that takes no parameters.
    pub fn query(&self) -> QuerySql {
        QuerySql {
            sql: self.sql.clone(),
            params: vec![],
            returning: self.returning,
        }
    }
}

/// The CRUD commands of one repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commands {
    pub select_all: Command,
    pub select_by_id: Command,
    pub insert: Command,
    pub update: Command,
    pub delete: Command,
}

impl Commands {
    pub fn compile(serializer: &Serializer, mapping: &TableMapping) -> Commands {
        let compile = |stmt: Statement| Command::compile(serializer, &stmt);

        Commands {
            select_all: compile(Statement::select_all(mapping)),
            select_by_id: compile(Statement::select_by_id(mapping)),
            insert: compile(Statement::insert(mapping)),
            update: compile(Statement::update(mapping)),
            delete: compile(Statement::delete(mapping)),
        }
    }
}
