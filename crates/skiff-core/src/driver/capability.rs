#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    Sqlite,

    /// No bundled driver reports this dialect yet. It is available to
    /// out-of-tree drivers.
    Postgresql,
}

#[derive(Debug)]
pub struct Capability {
    /// SQL dialect the driver speaks. Every supported dialect reads back
    /// generated identities with `INSERT ... RETURNING`.
    pub dialect: Dialect,
}

impl Capability {
    /// SQLite capabilities.
    pub const SQLITE: Self = Self {
        dialect: Dialect::Sqlite,
    };

    /// PostgreSQL capabilities.
    pub const POSTGRESQL: Self = Self {
        dialect: Dialect::Postgresql,
    };
}
