//! Entity Mapper: rows into entities and entities into command parameters.
//!
//! Both directions resolve columns to fields through
//! [`schema::Model::field_for_column`], so reading and writing can never
//! disagree on which field backs a column.

use crate::{
    err,
    schema::{self, DISCRIMINATOR},
    stmt::{Row, Value},
    Error, Model, Result,
};

use skiff_core::driver::operation::QuerySql;
use skiff_sql::Command;

/// Hydrates a new entity from `row`.
///
/// The concrete variant is chosen from the row's discriminator column. An
/// absent or empty discriminator, or one naming `M` itself, yields
/// `M::default()`. Any other value must be registered in
/// [`Model::variants`].
pub fn map_row<M: Model>(row: &Row) -> Result<M> {
    let mut entity = instantiate::<M>(row)?;
    map_row_into(row, &mut entity)?;
    Ok(entity)
}

/// Copies every column of `row` that has a matching field into `entity`.
/// Columns without a field are skipped.
pub fn map_row_into<M: Model>(row: &Row, entity: &mut M) -> Result<()> {
    let model = M::schema();

    for (column, value) in row.iter() {
        let Some(field) = model.field_for_column(column) else {
            continue;
        };

        entity.set(field.name, value.clone()).map_err(|cause| {
            cause.context(err!(
                "failed to map column `{column}` of model `{}`",
                model.name
            ))
        })?;
    }

    Ok(())
}

/// Builds the operation for `command`, reading each parameter from the field
/// backing the column of the same name.
///
/// A discriminator parameter with no backing field takes the entity's
/// [`Model::discriminator`].
pub fn bind_params<M: Model>(command: &Command, entity: &M) -> Result<QuerySql> {
    command.bind(|column| match M::schema().field_for_column(column) {
        None if column.eq_ignore_ascii_case(DISCRIMINATOR) => Ok(entity.discriminator().into()),
        _ => read_column(entity, column),
    })
}

/// Reads the value of the field backing `column`.
pub fn read_column<M: Model>(entity: &M, column: &str) -> Result<Value> {
    let field = field(M::schema(), column)?;

    entity
        .get(field.name)
        .ok_or_else(|| Error::unknown_field(M::schema().name, field.name))
}

/// Writes `value` into the field backing `column`.
pub fn write_column<M: Model>(entity: &mut M, column: &str, value: Value) -> Result<()> {
    let field = field(M::schema(), column)?;
    entity.set(field.name, value)
}

fn field(model: &schema::Model, column: &str) -> Result<&'static schema::Field> {
    model.field_for_column(column).ok_or_else(|| {
        Error::invalid_schema(format!(
            "model `{}` has no field for column `{column}`",
            model.name
        ))
    })
}

fn instantiate<M: Model>(row: &Row) -> Result<M> {
    let discriminator = match row.get(DISCRIMINATOR) {
        None | Some(Value::Null) => "",
        Some(Value::String(value)) => value.as_str(),
        Some(other) => return Err(Error::type_conversion(other.clone(), "String")),
    };

    if discriminator.is_empty() {
        return Ok(M::default());
    }

    if let Some(variant) = M::variants().iter().find(|v| v.name == discriminator) {
        return Ok((variant.construct)());
    }

    let model = M::schema();

    if model.discriminator() == discriminator {
        return Ok(M::default());
    }

    Err(Error::unknown_discriminator(model.name, discriminator))
}
