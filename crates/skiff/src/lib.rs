//! A micro object-relational mapper.
//!
//! Hosts describe each entity with a static [`schema::Model`] and implement
//! [`Model`] to expose its fields by name. A [`Repository`] then derives the
//! table mapping from store introspection, compiles its CRUD commands once,
//! and hydrates rows into entities, dispatching on the discriminator column
//! for single-table inheritance. Foreign-key relationships are loaded on
//! request through the [`Navigation`]s a model declares.

mod catalog;

pub mod config;
pub use config::ConnectionStrings;

pub mod db;
pub use db::Db;

pub mod driver;

pub mod mapper;

mod model;
pub use model::{Model, Variant};

pub mod relation;
pub use relation::Navigation;

mod repository;
pub use repository::Repository;

mod resolver;

pub use skiff_core::{
    bail, err, schema,
    stmt::{self, Load, Value},
    Error, Result,
};
