//! Named connection strings.
//!
//! A connection string named `main` is read from the environment variable
//! `SKIFF_CONNECTION_MAIN`. A `.env` file in the working directory (or any
//! parent) is loaded first when present.

use crate::{Error, Result};

use indexmap::IndexMap;
use tracing::{debug, warn};

/// Prefix of the environment variables holding connection strings.
pub const ENV_PREFIX: &str = "SKIFF_CONNECTION_";

/// Connection URLs keyed by name. Names are case-insensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionStrings {
    entries: IndexMap<String, String>,
}

impl ConnectionStrings {
    pub fn new() -> ConnectionStrings {
        ConnectionStrings::default()
    }

    /// Loads `.env` if present, then collects every `SKIFF_CONNECTION_*`
    /// variable of the process environment.
    pub fn from_env() -> ConnectionStrings {
        match dotenvy::dotenv() {
            Ok(path) => debug!(path = %path.display(), "loaded .env"),
            Err(err) if err.not_found() => {}
            Err(err) => warn!(error = %err, "failed to load .env"),
        }

        ConnectionStrings::from_vars(std::env::vars())
    }

    /// Collects connection strings from `(name, value)` pairs shaped like
    /// environment variables. Pairs without the prefix are ignored.
    pub fn from_vars<K, V>(vars: impl IntoIterator<Item = (K, V)>) -> ConnectionStrings
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut connection_strings = ConnectionStrings::new();

        for (key, value) in vars {
            if let Some(name) = key.as_ref().strip_prefix(ENV_PREFIX) {
                if !name.is_empty() {
                    connection_strings.insert(name, value);
                }
            }
        }

        connection_strings
    }

    pub fn insert(&mut self, name: impl AsRef<str>, url: impl Into<String>) -> &mut Self {
        self.entries
            .insert(name.as_ref().to_ascii_uppercase(), url.into());
        self
    }

    /// The URL registered under `name`.
    pub fn get(&self, name: &str) -> Result<&str> {
        self.entries
            .get(&name.to_ascii_uppercase())
            .map(String::as_str)
            .ok_or_else(|| {
                Error::invalid_connection_url(format!(
                    "no connection string named `{name}`; set {ENV_PREFIX}{}",
                    name.to_ascii_uppercase()
                ))
            })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries
            .iter()
            .map(|(name, url)| (name.as_str(), url.as_str()))
    }
}
