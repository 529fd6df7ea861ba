use crate::{relation::Navigation, schema, Result, Value};

/// An entity type the mapper can hydrate and persist.
///
/// Fields are addressed by the names declared in [`Model::schema`]. Column
/// name overrides are resolved before these methods are called, so
/// implementations only ever see field names.
///
/// ```
/// use skiff::{schema::{self, Field}, Error, Model, Result, Value};
///
/// #[derive(Debug, Default)]
/// struct Customer {
///     id: i64,
///     name: String,
/// }
///
/// static CUSTOMER: schema::Model = schema::Model {
///     name: "Customer",
///     table: Some("Customers"),
///     fields: &[Field::new("id").column("Id"), Field::new("name").column("Name")],
///     base: None,
/// };
///
/// impl Model for Customer {
///     fn schema() -> &'static schema::Model {
///         &CUSTOMER
///     }
///
///     fn get(&self, field: &str) -> Option<Value> {
///         match field {
///             "id" => Some(self.id.into()),
///             "name" => Some(self.name.as_str().into()),
///             _ => None,
///         }
///     }
///
///     fn set(&mut self, field: &str, value: Value) -> Result<()> {
///         match field {
///             "id" => self.id = value.load()?,
///             "name" => self.name = value.load()?,
///             _ => return Err(Error::unknown_field("Customer", field)),
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Model: Default + Send + Sync + 'static {
    /// Static description of the entity: table, fields, base entity.
    fn schema() -> &'static schema::Model;

    /// Reads a column-backed field. Returns `None` for unknown names.
    fn get(&self, field: &str) -> Option<Value>;

    /// Writes a column-backed field, coercing the store value into the
    /// field's type.
    fn set(&mut self, field: &str, value: Value) -> Result<()>;

    /// Discriminator value stored for this entity when its table holds
    /// several variants. `None` stores a null discriminator, which reads back
    /// as [`Default`].
    fn discriminator(&self) -> Option<&'static str> {
        None
    }

    /// Concrete variants rows of this model may hold, keyed by discriminator
    /// value.
    ///
    /// Rows whose discriminator is empty, or names this model itself, are
    /// built with [`Default`].
    fn variants() -> &'static [Variant<Self>] {
        &[]
    }

    /// Relationship fields, each bound to a foreign-key edge touching this
    /// model's table.
    ///
    /// Name the model in the constructor so the setter's arguments are
    /// typed:
    ///
    /// ```ignore
    /// fn navigations() -> Vec<Navigation<Self>> {
    ///     vec![Navigation::<Self>::has_many::<Order>("orders", |customer, orders| {
    ///         customer.orders = orders
    ///     })]
    /// }
    /// ```
    fn navigations() -> Vec<Navigation<Self>> {
        vec![]
    }
}

/// Construction function for one discriminator value.
pub struct Variant<M> {
    pub name: &'static str,
    pub construct: fn() -> M,
}

impl<M> Variant<M> {
    pub const fn new(name: &'static str, construct: fn() -> M) -> Variant<M> {
        Variant { name, construct }
    }
}

impl<M> core::fmt::Debug for Variant<M> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Variant").field("name", &self.name).finish()
    }
}
