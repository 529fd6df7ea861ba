use super::{Formatter, Ident, Params, ToSql};

use crate::{serializer::literal::Literal, stmt::Filter};

impl ToSql for &Filter {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        match self {
            Filter::Eq { column } => {
                let placeholder = f.params.push(column);
                fmt!(f, Ident(column), " = ", placeholder);
            }
            Filter::EqLiteral { column, value } => {
                fmt!(f, Ident(column), " = ", Literal(value));
            }
            Filter::NotNull { column } => {
                fmt!(f, Ident(column), " IS NOT NULL");
            }
        }
    }
}
