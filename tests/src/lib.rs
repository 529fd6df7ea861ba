pub use exec_log::ExecLog;

pub mod fixtures;

pub use logging_driver::LoggingDriver;

use skiff::{Db, Model, Repository};
use skiff_driver_sqlite::Sqlite;

use std::sync::{Arc, Once};

/// Installs a test-friendly `tracing` subscriber, filtered by `RUST_LOG`.
pub fn init_tracing() {
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// A fresh in-memory database with every executed operation logged.
pub struct DbTest {
    pub db: Db,
    sqlite: Arc<Sqlite>,
    log: ExecLog,
}

impl DbTest {
    /// Database holding the fixture schema.
    pub async fn new() -> DbTest {
        DbTest::with_schema(fixtures::SCHEMA).await
    }

    pub async fn with_schema(ddl: &str) -> DbTest {
        init_tracing();

        let sqlite = Arc::new(Sqlite::in_memory().unwrap());
        sqlite.execute_batch(ddl).unwrap();

        let driver = LoggingDriver::new(sqlite.clone());
        let log = ExecLog::new(driver.ops_log_handle());

        let db = Db::builder().build(driver).await.unwrap();

        DbTest { db, sqlite, log }
    }

    /// Runs raw SQL against the database, bypassing the log.
    pub fn execute(&self, sql: &str) {
        self.sqlite.execute_batch(sql).unwrap();
    }

    pub fn log(&self) -> &ExecLog {
        &self.log
    }

    pub async fn repository<M: Model>(&self) -> Arc<Repository<M>> {
        self.db.repository::<M>().await.unwrap()
    }
}
