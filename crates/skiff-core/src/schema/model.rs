/// Static description of an entity type, supplied by the host.
///
/// ```
/// use skiff_core::schema::{Field, Model};
///
/// static VEHICLE: Model = Model {
///     name: "Vehicle",
///     table: Some("Vehicles"),
///     fields: &[Field::new("Id"), Field::new("Name")],
///     base: None,
/// };
///
/// static CAR: Model = Model {
///     name: "Car",
///     table: None,
///     fields: &[
///         Field::new("Id"),
///         Field::new("Name"),
///         Field::new("wheels").column("WheelCount"),
///     ],
///     base: Some(&VEHICLE),
/// };
///
/// assert_eq!(CAR.table_name(), "Vehicles");
/// assert!(CAR.is_inherited());
/// ```
#[derive(Debug)]
pub struct Model {
    /// Name of the entity type. Doubles as the default table name and as the
    /// discriminator value stored for rows of this type.
    pub name: &'static str,

    /// If the model maps to a table with a different name, this is set.
    pub table: Option<&'static str>,

    /// Column-backed fields. Navigational fields are not listed here.
    pub fields: &'static [Field],

    /// The base entity when the model is stored in its base's table.
    pub base: Option<&'static Model>,
}

/// A column-backed field of a [`Model`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    /// The field name, as passed to `Model::get` / `Model::set`.
    pub name: &'static str,

    /// If the field maps to a column with a different name, this is set.
    pub column: Option<&'static str>,
}

impl Model {
    /// Name of the table rows of this model are stored in. Inherited models
    /// share their base's table.
    pub fn table_name(&self) -> &'static str {
        match self.base {
            Some(base) => base.table_name(),
            None => self.table.unwrap_or(self.name),
        }
    }

    pub fn is_inherited(&self) -> bool {
        self.base.is_some()
    }

    /// Value stored in the discriminator column for rows of this model.
    pub fn discriminator(&self) -> &'static str {
        self.name
    }

    /// Finds the field backing `column`.
    ///
    /// This is the single column resolution used in both directions: when
    /// hydrating rows and when binding command parameters.
    pub fn field_for_column(&self, column: &str) -> Option<&'static Field> {
        let fields = self.fields;

        fields
            .iter()
            .find(|field| field.column_name() == column)
            .or_else(|| {
                fields
                    .iter()
                    .find(|field| field.column_name().eq_ignore_ascii_case(column))
            })
    }

    pub fn column_names(&self) -> impl Iterator<Item = &'static str> {
        self.fields.iter().map(Field::column_name)
    }
}

impl Field {
    pub const fn new(name: &'static str) -> Field {
        Field { name, column: None }
    }

    /// Maps the field to a column with a different name.
    pub const fn column(self, column: &'static str) -> Field {
        Field {
            column: Some(column),
            ..self
        }
    }

    pub fn column_name(&self) -> &'static str {
        self.column.unwrap_or(self.name)
    }
}
