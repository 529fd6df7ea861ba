use super::{connect, Db};
use crate::{config::ConnectionStrings, Result};

use skiff_core::Driver;
use tokio::sync::Mutex;
use tracing::info;

use std::{
    collections::HashSet,
    sync::{Arc, OnceLock},
};

/// URLs whose drivers already ran [`Driver::bootstrap`] in this process.
fn bootstrapped() -> &'static Mutex<HashSet<String>> {
    static BOOTSTRAPPED: OnceLock<Mutex<HashSet<String>>> = OnceLock::new();
    BOOTSTRAPPED.get_or_init(|| Mutex::new(HashSet::new()))
}

#[derive(Debug, Default)]
pub struct Builder {
    /// Named connection strings. Loaded from the environment on first use
    /// when not set explicitly.
    connection_strings: Option<ConnectionStrings>,
}

impl Builder {
    /// Sets the named connection strings used by [`Builder::connect_named`].
    pub fn connection_strings(&mut self, connection_strings: ConnectionStrings) -> &mut Self {
        self.connection_strings = Some(connection_strings);
        self
    }

    /// Connects to the database at `url`, choosing the driver by scheme.
    pub async fn connect(&mut self, url: &str) -> Result<Db> {
        self.build_arc(connect::driver(url)?).await
    }

    /// Connects using the connection string registered under `name`.
    pub async fn connect_named(&mut self, name: &str) -> Result<Db> {
        let url = self
            .connection_strings
            .get_or_insert_with(ConnectionStrings::from_env)
            .get(name)?
            .to_string();

        self.connect(&url).await
    }

    pub async fn build(&mut self, driver: impl Driver) -> Result<Db> {
        self.build_arc(Arc::new(driver)).await
    }

    /// Bootstraps the driver once per URL, process-wide, and returns a handle
    /// over it.
    pub async fn build_arc(&mut self, driver: Arc<dyn Driver>) -> Result<Db> {
        let url = driver.url().into_owned();
        let mut done = bootstrapped().lock().await;

        if !done.contains(&url) {
            driver.bootstrap().await?;
            info!(url = %url, "bootstrapped driver");
            done.insert(url);
        }

        drop(done);
        Ok(Db::new(driver))
    }
}
