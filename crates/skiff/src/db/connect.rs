use crate::{Error, Result};

use skiff_core::Driver;
use url::Url;

use std::sync::Arc;

/// Picks the driver for `url` by its scheme.
pub(super) fn driver(url: &str) -> Result<Arc<dyn Driver>> {
    let parsed = Url::parse(url)
        .map_err(|err| Error::invalid_connection_url(format!("{err}; url={url}")))?;

    match parsed.scheme() {
        "sqlite" => connect_sqlite(url),
        scheme => Err(Error::invalid_connection_url(format!(
            "unsupported database; scheme={scheme}; url={url}"
        ))),
    }
}

#[cfg(feature = "sqlite")]
fn connect_sqlite(url: &str) -> Result<Arc<dyn Driver>> {
    let driver = skiff_driver_sqlite::Sqlite::new(url)?;
    Ok(Arc::new(driver))
}

#[cfg(not(feature = "sqlite"))]
fn connect_sqlite(_url: &str) -> Result<Arc<dyn Driver>> {
    Err(Error::invalid_connection_url("`sqlite` feature not enabled"))
}
