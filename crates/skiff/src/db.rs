mod builder;
pub use builder::Builder;

mod connect;

use crate::{err, Error, Model, Repository, Result};

use skiff_core::Driver;
use tokio::sync::{Mutex, OnceCell};

use std::{
    any::{Any, TypeId},
    collections::HashMap,
    sync::Arc,
};

/// Shared state between all `Db` clones.
struct Shared {
    driver: Arc<dyn Driver>,

    /// One repository per model, built on first use.
    repositories: Mutex<HashMap<TypeId, Arc<Slot>>>,
}

type Slot = OnceCell<Arc<dyn Any + Send + Sync>>;

/// A database handle and the registry of its repositories.
///
/// Cloning is cheap; clones share the driver and the repository cache.
#[derive(Clone)]
pub struct Db {
    shared: Arc<Shared>,
}

impl Db {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub(crate) fn new(driver: Arc<dyn Driver>) -> Db {
        Db {
            shared: Arc::new(Shared {
                driver,
                repositories: Mutex::new(HashMap::new()),
            }),
        }
    }

    pub fn driver(&self) -> &Arc<dyn Driver> {
        &self.shared.driver
    }

    /// Returns the repository for `M`, building it on first use.
    ///
    /// Concurrent first calls for the same model build it once. Repositories
    /// of different models build independently. A failed build is retried on
    /// the next call.
    pub async fn repository<M: Model>(&self) -> Result<Arc<Repository<M>>> {
        let slot = self
            .shared
            .repositories
            .lock()
            .await
            .entry(TypeId::of::<M>())
            .or_default()
            .clone();

        let entry = slot
            .get_or_try_init(|| async {
                let repository = Repository::<M>::new(self.shared.driver.clone()).await?;
                Ok::<_, Error>(Arc::new(repository) as Arc<dyn Any + Send + Sync>)
            })
            .await?
            .clone();

        entry
            .downcast::<Repository<M>>()
            .map_err(|_| err!("repository cache entry for `{}` has the wrong type", M::schema().name))
    }
}

impl core::fmt::Debug for Db {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Db")
            .field("driver", &self.shared.driver)
            .finish()
    }
}
