//! Entity-to-table metadata.
//!
//! [`Model`] and [`Field`] are declared statically by the host for every
//! entity type. [`TableMapping`] and [`RelationData`] are derived from those
//! declarations plus store introspection when a repository is built.

mod mapping;
pub use mapping::TableMapping;

mod model;
pub use model::{Field, Model};

mod relation;
pub use relation::RelationData;

/// Name of the primary-key column every mapped table carries.
pub const ID: &str = "Id";

/// Name of the column holding the concrete variant on inheritance tables.
pub const DISCRIMINATOR: &str = "Discriminator";
