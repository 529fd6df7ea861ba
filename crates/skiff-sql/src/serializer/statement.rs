use super::{literal::Literal, Comma, Conjunction, Formatter, Ident, Params, ToSql};

use crate::stmt::{self, Statement};

impl ToSql for &Statement {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        match self {
            Statement::Delete(stmt) => stmt.to_sql(f),
            Statement::Insert(stmt) => stmt.to_sql(f),
            Statement::Select(stmt) => stmt.to_sql(f),
            Statement::Update(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &stmt::Select {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        fmt!(f, "SELECT * FROM ", Ident(&self.table));

        if !self.filters.is_empty() {
            fmt!(f, " WHERE ", Conjunction(&self.filters));
        }
    }
}

impl ToSql for &stmt::Insert {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let discriminator = self.discriminator.as_ref();

        if self.columns.is_empty() && discriminator.is_none() {
            fmt!(f, "INSERT INTO ", Ident(&self.table), " DEFAULT VALUES");
            if let Some(returning) = &self.returning {
                fmt!(f, " RETURNING ", Ident(returning));
            }
            return;
        }

        let columns = Comma(
            self.columns
                .iter()
                .chain(discriminator.map(|(column, _)| column))
                .map(Ident),
        );

        fmt!(f, "INSERT INTO ", Ident(&self.table), " (", columns, ") VALUES (");

        let mut s = "";
        for column in &self.columns {
            let placeholder = f.params.push(column);
            fmt!(f, s, placeholder);
            s = ", ";
        }

        if let Some((_, value)) = discriminator {
            fmt!(f, s, Literal(value));
        }

        fmt!(f, ")");

        if let Some(returning) = &self.returning {
            fmt!(f, " RETURNING ", Ident(returning));
        }
    }
}

impl ToSql for &stmt::Update {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        fmt!(f, "UPDATE ", Ident(&self.table), " SET ");

        // A table with nothing but an identity still gets a valid statement.
        let columns = if self.columns.is_empty() {
            std::slice::from_ref(&self.key)
        } else {
            &self.columns[..]
        };

        let mut s = "";
        for column in columns {
            let placeholder = f.params.push(column);
            fmt!(f, s, Ident(column), " = ", placeholder);
            s = ", ";
        }

        let key = f.params.push(&self.key);
        fmt!(f, " WHERE ", Ident(&self.key), " = ", key);
    }
}

impl ToSql for &stmt::Delete {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let key = f.params.push(&self.key);
        fmt!(f, "DELETE FROM ", Ident(&self.table), " WHERE ", Ident(&self.key), " = ", key);
    }
}
