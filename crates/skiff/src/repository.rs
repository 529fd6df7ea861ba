use crate::{
    catalog, mapper,
    relation::Navigation,
    resolver::{self, Plan},
    schema::{RelationData, TableMapping, DISCRIMINATOR},
    Error, Model, Result, Value,
};

use skiff_core::{Connection, Driver};
use skiff_sql::{Commands, Serializer};
use tracing::{debug, info, instrument};

use std::sync::Arc;

/// CRUD and relationship loading for one model.
///
/// The table mapping, the relations touching the table, and every command
/// are resolved once in [`Repository::new`] and never change afterwards.
/// Each operation opens its own connection and releases it before
/// returning, on success and on error alike.
pub struct Repository<M: Model> {
    driver: Arc<dyn Driver>,
    mapping: TableMapping,
    relations: Vec<RelationData>,
    commands: Commands,
    navigations: Vec<Navigation<M>>,
    plans: Vec<Plan>,
}

impl<M: Model> Repository<M> {
    /// Resolves the model against the store and compiles its commands.
    #[instrument(skip_all, fields(model = M::schema().name))]
    pub async fn new(driver: Arc<dyn Driver>) -> Result<Repository<M>> {
        let model = M::schema();
        let mut conn = driver.connect().await?;

        let mapping = catalog::resolve_mapping(&mut *conn, model).await?;
        let relations = catalog::load_relations(&mut *conn, &mapping.table).await?;

        let serializer = Serializer::for_capability(driver.capability());
        let commands = Commands::compile(&serializer, &mapping);

        let navigations = M::navigations();
        let plans =
            resolver::plan(&mut *conn, &serializer, &mapping, &relations, &navigations).await?;

        info!(
            table = %mapping.table,
            columns = mapping.columns.len(),
            relations = relations.len(),
            inherited = mapping.inherited,
            "repository ready"
        );
        debug!(select = %commands.select_all.sql, insert = %commands.insert.sql, "compiled commands");

        Ok(Repository {
            driver,
            mapping,
            relations,
            commands,
            navigations,
            plans,
        })
    }

    pub fn mapping(&self) -> &TableMapping {
        &self.mapping
    }

    /// Foreign-key edges where this model's table is the parent or the child.
    pub fn relations(&self) -> &[RelationData] {
        &self.relations
    }

    pub fn commands(&self) -> &Commands {
        &self.commands
    }

    /// Finds the entity with the given id. A missing id is not an error.
    pub async fn find(&self, id: impl Into<Value>) -> Result<Option<M>> {
        self.find_with(id, false).await
    }

    /// Finds the entity with the given id, optionally loading its
    /// relationships on the same connection.
    #[instrument(skip_all, fields(model = M::schema().name))]
    pub async fn find_with(&self, id: impl Into<Value>, load_related: bool) -> Result<Option<M>> {
        let id = id.into();
        let mut conn = self.connect().await?;

        let op = self.commands.select_by_id.bind(|_| Ok(id.clone()))?;
        let rows = catalog::query(&mut *conn, op).await?;

        let Some(row) = rows.first() else {
            return Ok(None);
        };

        let mut entity = mapper::map_row::<M>(row)?;

        if load_related {
            resolver::load_one(&mut *conn, &self.plans, &self.navigations, &mut entity).await?;
        }

        Ok(Some(entity))
    }

    /// Every row of the table. Inherited models only see rows carrying their
    /// own discriminator.
    pub async fn all(&self) -> Result<Vec<M>> {
        self.all_with(false).await
    }

    #[instrument(skip_all, fields(model = M::schema().name))]
    pub async fn all_with(&self, load_related: bool) -> Result<Vec<M>> {
        let mut conn = self.connect().await?;

        let rows = catalog::query(&mut *conn, self.commands.select_all.query()).await?;
        let mut entities = rows
            .iter()
            .map(mapper::map_row::<M>)
            .collect::<Result<Vec<_>>>()?;

        if load_related {
            resolver::load_many(&mut *conn, &self.plans, &self.navigations, &mut entities).await?;
        }

        Ok(entities)
    }

    /// Inserts the entity and writes the generated id back into it.
    #[instrument(skip_all, fields(model = M::schema().name))]
    pub async fn add(&self, entity: &mut M) -> Result<()> {
        self.check_storable(entity)?;
        let mut conn = self.connect().await?;

        let op = mapper::bind_params(&self.commands.insert, entity)?;
        let rows = catalog::query(&mut *conn, op).await?;

        let id_column = self.mapping.id_column();
        let id = rows
            .first()
            .and_then(|row| row.get(id_column).or_else(|| row.iter().next().map(|(_, v)| v)))
            .cloned()
            .ok_or_else(|| Error::invalid_result("insert did not return the generated id"))?;

        debug!(id = ?id, "inserted");
        mapper::write_column(entity, id_column, id)
    }

    /// Writes every writable column of the entity to the row with its id.
    /// Updating a missing id affects no rows and is not an error.
    #[instrument(skip_all, fields(model = M::schema().name))]
    pub async fn update(&self, entity: &M) -> Result<()> {
        self.check_storable(entity)?;
        let mut conn = self.connect().await?;

        let op = mapper::bind_params(&self.commands.update, entity)?;
        let count = catalog::execute(&mut *conn, op).await?;

        debug!(count, "updated");
        Ok(())
    }

    /// Deletes the row of the entity. The entity must carry an id.
    pub async fn delete(&self, entity: &M) -> Result<()> {
        let id = mapper::read_column(entity, self.mapping.id_column())?;

        if id.is_null() {
            return Err(Error::invalid_argument(format!(
                "cannot delete a `{}` without an id",
                M::schema().name
            )));
        }

        self.delete_by_id(id).await
    }

    /// Deletes the row with the given id. Deleting a missing id affects no
    /// rows and is not an error.
    #[instrument(skip_all, fields(model = M::schema().name))]
    pub async fn delete_by_id(&self, id: impl Into<Value>) -> Result<()> {
        let id = id.into();
        let mut conn = self.connect().await?;

        let op = self.commands.delete.bind(|_| Ok(id.clone()))?;
        let count = catalog::execute(&mut *conn, op).await?;

        debug!(count, "deleted");
        Ok(())
    }

    /// Loads every relationship of `entity`.
    #[instrument(skip_all, fields(model = M::schema().name))]
    pub async fn load_related(&self, entity: &mut M) -> Result<()> {
        let mut conn = self.connect().await?;
        resolver::load_one(&mut *conn, &self.plans, &self.navigations, entity).await
    }

    /// Loads every relationship of `entities`, one query per edge.
    #[instrument(skip_all, fields(model = M::schema().name))]
    pub async fn load_related_all(&self, entities: &mut [M]) -> Result<()> {
        let mut conn = self.connect().await?;
        resolver::load_many(&mut *conn, &self.plans, &self.navigations, entities).await
    }

    /// Fails when the entity is a variant its table has no discriminator
    /// column to record.
    fn check_storable(&self, entity: &M) -> Result<()> {
        let model = M::schema();

        match entity.discriminator() {
            Some(variant)
                if !self.mapping.inherited
                    && !self.mapping.stores_variants()
                    && variant != model.discriminator() =>
            {
                Err(Error::invalid_argument(format!(
                    "table `{}` has no `{DISCRIMINATOR}` column to store variant `{variant}` of `{}`",
                    self.mapping.table, model.name
                )))
            }
            _ => Ok(()),
        }
    }

    async fn connect(&self) -> Result<Box<dyn Connection>> {
        self.driver.connect().await
    }
}

impl<M: Model> core::fmt::Debug for Repository<M> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Repository")
            .field("mapping", &self.mapping)
            .field("relations", &self.relations)
            .field("navigations", &self.navigations)
            .finish()
    }
}
