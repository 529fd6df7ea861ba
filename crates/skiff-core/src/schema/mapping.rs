use super::{Model, DISCRIMINATOR, ID};
use crate::{Error, Result};

/// Resolved table layout for one model.
///
/// Built once when a repository is constructed and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableMapping {
    /// Physical table name.
    pub table: String,

    /// Columns shared by the table and the model, in the table's column
    /// order. The discriminator column is always kept when the table has one.
    pub columns: Vec<String>,

    /// Set when the model is stored in its base model's table.
    pub inherited: bool,

    /// Discriminator value rows of this model are filtered on. Only set for
    /// inherited models.
    pub discriminator: Option<String>,
}

impl TableMapping {
    /// Resolves the mapping of `model` against the physical columns the
    /// store reports for its table.
    ///
    /// Physical columns without a matching field are dropped, which lets
    /// sibling models share a table that carries columns only some of them
    /// use. Fields without a physical column are dropped as well.
    pub fn resolve<S: AsRef<str>>(model: &Model, physical: &[S]) -> Result<TableMapping> {
        let table = model.table_name();

        if physical.is_empty() {
            return Err(Error::invalid_schema(format!(
                "table `{table}` for model `{}` does not exist or has no columns",
                model.name
            )));
        }

        let columns: Vec<String> = physical
            .iter()
            .map(AsRef::as_ref)
            .filter(|column| {
                model.field_for_column(column).is_some()
                    || column.eq_ignore_ascii_case(DISCRIMINATOR)
            })
            .map(str::to_string)
            .collect();

        if columns.iter().all(|column| column.eq_ignore_ascii_case(DISCRIMINATOR)) {
            return Err(Error::invalid_schema(format!(
                "model `{}` shares no columns with table `{table}`",
                model.name
            )));
        }

        let inherited = model.is_inherited();

        Ok(TableMapping {
            table: table.to_string(),
            columns,
            inherited,
            discriminator: inherited.then(|| model.discriminator().to_string()),
        })
    }

    /// Columns written by insert and update commands: every mapped column
    /// except the identity and the discriminator.
    pub fn writable_columns(&self) -> impl Iterator<Item = &str> + '_ {
        self.columns
            .iter()
            .map(String::as_str)
            .filter(|column| {
                !column.eq_ignore_ascii_case(ID) && !column.eq_ignore_ascii_case(DISCRIMINATOR)
            })
    }

    /// The discriminator column, as spelled by the store, when the table has
    /// one.
    pub fn discriminator_column(&self) -> Option<&str> {
        self.columns
            .iter()
            .find(|column| column.eq_ignore_ascii_case(DISCRIMINATOR))
            .map(String::as_str)
    }

    /// True when rows of several variants of a model without a base share
    /// this table. Each entity then supplies its own discriminator value.
    pub fn stores_variants(&self) -> bool {
        !self.inherited && self.discriminator_column().is_some()
    }

    /// The mapped identity column, as spelled by the store.
    pub fn id_column(&self) -> &str {
        self.columns
            .iter()
            .find(|column| column.eq_ignore_ascii_case(ID))
            .map(String::as_str)
            .unwrap_or(ID)
    }
}
