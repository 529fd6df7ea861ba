mod delete;
pub use delete::Delete;

mod filter;
pub use filter::Filter;

mod insert;
pub use insert::Insert;

mod select;
pub use select::Select;

mod update;
pub use update::Update;

use skiff_core::schema::{TableMapping, DISCRIMINATOR};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Delete(Delete),
    Insert(Insert),
    Select(Select),
    Update(Update),
}

impl Statement {
    /// `SELECT *` over the mapped table, restricted to the model's
    /// discriminator when the model is inherited.
    pub fn select_all(mapping: &TableMapping) -> Statement {
        Select::new(&mapping.table)
            .filter_discriminator(mapping)
            .into()
    }

    /// [`Statement::select_all`] keyed by the identity column.
    pub fn select_by_id(mapping: &TableMapping) -> Statement {
        Statement::select_by(mapping, mapping.id_column())
    }

    /// [`Statement::select_all`] restricted to rows where `column` equals the
    /// parameter of the same name.
    pub fn select_by(mapping: &TableMapping, column: &str) -> Statement {
        Select::new(&mapping.table)
            .filter_discriminator(mapping)
            .filter(Filter::eq(column))
            .into()
    }

    /// [`Statement::select_all`] restricted to rows where `column` is set.
    pub fn select_not_null(mapping: &TableMapping, column: &str) -> Statement {
        Select::new(&mapping.table)
            .filter_discriminator(mapping)
            .filter(Filter::NotNull {
                column: column.to_string(),
            })
            .into()
    }

    /// Inserts the bound columns, stores the discriminator as a literal for
    /// inherited models, and returns the generated identity.
    pub fn insert(mapping: &TableMapping) -> Statement {
        Insert {
            table: mapping.table.clone(),
            columns: bound_columns(mapping),
            discriminator: mapping
                .discriminator
                .as_ref()
                .map(|value| (DISCRIMINATOR.to_string(), value.clone())),
            returning: Some(mapping.id_column().to_string()),
        }
        .into()
    }

    pub fn update(mapping: &TableMapping) -> Statement {
        Update {
            table: mapping.table.clone(),
            columns: bound_columns(mapping),
            key: mapping.id_column().to_string(),
        }
        .into()
    }

    pub fn delete(mapping: &TableMapping) -> Statement {
        Delete {
            table: mapping.table.clone(),
            key: mapping.id_column().to_string(),
        }
        .into()
    }

    /// True when executing the statement yields rows.
    pub fn is_returning(&self) -> bool {
        match self {
            Statement::Select(_) => true,
            Statement::Insert(insert) => insert.returning.is_some(),
            Statement::Update(_) | Statement::Delete(_) => false,
        }
    }
}

/// Columns insert and update bind to entity values: the writable columns,
/// then the discriminator when each entity supplies its own.
fn bound_columns(mapping: &TableMapping) -> Vec<String> {
    let mut columns: Vec<String> = mapping.writable_columns().map(str::to_string).collect();

    if mapping.stores_variants() {
        columns.extend(mapping.discriminator_column().map(str::to_string));
    }

    columns
}
