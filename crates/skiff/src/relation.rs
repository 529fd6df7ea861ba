//! Relationship fields.
//!
//! A [`Navigation`] ties a field of a model to one foreign-key edge of the
//! schema graph. Edges are discovered from the store; navigations say which
//! field receives the rows on the far side of each edge.

use crate::{mapper, schema, stmt::Row, Model, Result};

/// A relationship field declared by model `M`.
pub struct Navigation<M> {
    field: &'static str,
    target: &'static schema::Model,
    via: Option<&'static str>,
    attach: Attach<M>,
}

type AttachMany<M> = Box<dyn Fn(&mut M, &[Row]) -> Result<()> + Send + Sync>;
type AttachOne<M> = Box<dyn Fn(&mut M, Option<&Row>) -> Result<()> + Send + Sync>;

pub(crate) enum Attach<M> {
    /// The model is the parent of the edge and receives a collection.
    Many(AttachMany<M>),

    /// The model is the child of the edge and receives at most one parent.
    One(AttachOne<M>),
}

impl<M: Model> Navigation<M> {
    /// A one-to-many field: rows of `T` whose foreign key references this
    /// model.
    pub fn has_many<T: Model>(
        field: &'static str,
        set: impl Fn(&mut M, Vec<T>) + Send + Sync + 'static,
    ) -> Navigation<M> {
        Navigation {
            field,
            target: T::schema(),
            via: None,
            attach: Attach::Many(Box::new(move |entity: &mut M, rows: &[Row]| {
                let related = rows
                    .iter()
                    .map(mapper::map_row::<T>)
                    .collect::<Result<Vec<_>>>()?;
                set(entity, related);
                Ok(())
            })),
        }
    }

    /// A many-to-one field: the row of `T` this model's foreign key
    /// references.
    pub fn belongs_to<T: Model>(
        field: &'static str,
        set: impl Fn(&mut M, Option<T>) + Send + Sync + 'static,
    ) -> Navigation<M> {
        Navigation {
            field,
            target: T::schema(),
            via: None,
            attach: Attach::One(Box::new(move |entity: &mut M, row: Option<&Row>| {
                let related = row.map(mapper::map_row::<T>).transpose()?;
                set(entity, related);
                Ok(())
            })),
        }
    }

    /// Restricts the navigation to the edge whose foreign-key column is
    /// `column`. Needed when several edges connect the same two tables.
    pub fn via(mut self, column: &'static str) -> Navigation<M> {
        self.via = Some(column);
        self
    }
}

impl<M> Navigation<M> {
    pub fn field(&self) -> &'static str {
        self.field
    }

    pub fn target(&self) -> &'static schema::Model {
        self.target
    }

    pub fn is_many(&self) -> bool {
        matches!(self.attach, Attach::Many(_))
    }

    pub(crate) fn attach(&self) -> &Attach<M> {
        &self.attach
    }

    /// True when this navigation receives the far side of `edge` as seen from
    /// `table`.
    pub(crate) fn matches(&self, edge: &schema::RelationData, table: &str) -> bool {
        let via = |column: &str| self.via.map_or(true, |via| via.eq_ignore_ascii_case(column));
        let target = self.target.table_name();

        match self.attach {
            Attach::Many(_) => {
                edge.is_parent(table)
                    && edge.is_child(target)
                    && via(&edge.foreign_key_column)
            }
            Attach::One(_) => {
                edge.is_child(table)
                    && edge.is_parent(target)
                    && via(&edge.foreign_key_column)
            }
        }
    }
}

impl<M> core::fmt::Debug for Navigation<M> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Navigation")
            .field("field", &self.field)
            .field("target", &self.target.name)
            .field("via", &self.via)
            .field("many", &self.is_many())
            .finish()
    }
}
