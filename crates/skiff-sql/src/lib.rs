//! Command Builder: turns a [`TableMapping`](skiff_core::schema::TableMapping)
//! into parametrized SQL text, once per repository.

mod command;
pub use command::{Command, Commands};

pub mod serializer;
pub use serializer::{Params, Serializer};

pub mod stmt;
pub use stmt::Statement;
