mod capability;
pub use capability::{Capability, Dialect};

mod response;
pub use response::{Response, Rows};

pub mod operation;
pub use operation::Operation;

use crate::{async_trait, Result};

use std::{borrow::Cow, fmt::Debug};

#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// Returns the URL this driver is connecting to.
    fn url(&self) -> Cow<'_, str>;

    /// Describes the driver's capability, which selects the SQL dialect
    /// commands are compiled for.
    fn capability(&self) -> &'static Capability;

    /// Creates a new connection to the database.
    ///
    /// Repositories open one connection per operation and drop it when the
    /// operation completes, on every exit path.
    async fn connect(&self) -> Result<Box<dyn Connection>>;

    /// Makes sure the store can answer relation introspection queries.
    ///
    /// Called once per connection URL before the first repository is built.
    /// Must be idempotent.
    async fn bootstrap(&self) -> Result<()> {
        Ok(())
    }
}

#[async_trait]
pub trait Connection: Debug + Send + 'static {
    /// Execute a database operation
    async fn exec(&mut self, op: Operation) -> Result<Response>;
}
