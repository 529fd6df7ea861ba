mod value;
pub(crate) use value::Value;

use rusqlite::{Connection as RusqliteConnection, OpenFlags};
use skiff_core::{
    async_trait,
    driver::{
        operation::{ListColumns, ListRelations, Operation, QuerySql},
        Capability, Driver, Response,
    },
    stmt::Row,
    Error, Result,
};
use tracing::{debug, info};
use url::Url;

use std::{
    borrow::Cow,
    path::{Path, PathBuf},
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
};

/// Column listing, one row per physical column in declaration order.
const LIST_COLUMNS: &str = "SELECT name AS ColumnName FROM pragma_table_info(?1) ORDER BY cid";

/// Every foreign-key edge where the table is the parent or the child. A
/// reference without explicit target columns points at the parent's primary
/// key.
const LIST_RELATIONS: &str = r#"SELECT
    p."table" AS ParentTable,
    m.name AS ChildTable,
    COALESCE(p."to", (SELECT k.name FROM pragma_table_info(p."table") AS k WHERE k.pk = 1)) AS ParentKeyColumn,
    p."from" AS ForeignKeyColumn
FROM sqlite_master AS m
JOIN pragma_foreign_key_list(m.name) AS p
WHERE m.type = 'table'
  AND (m.name = ?1 COLLATE NOCASE OR p."table" = ?1 COLLATE NOCASE)
ORDER BY m.name, p.id"#;

#[derive(Debug)]
pub enum Sqlite {
    File(PathBuf),
    InMemory {
        /// Shared-cache URI every connection opens.
        uri: String,

        /// Keeps the in-memory database alive between connections.
        anchor: Mutex<RusqliteConnection>,
    },
}

impl Sqlite {
    /// Create a new SQLite driver with an arbitrary connection URL
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str).map_err(|err| {
            Error::invalid_connection_url(format!("{err}; url={url_str}"))
        })?;

        if url.scheme() != "sqlite" {
            return Err(Error::invalid_connection_url(format!(
                "connection URL does not have a `sqlite` scheme; url={url_str}"
            )));
        }

        if url.path() == ":memory:" {
            Self::in_memory()
        } else {
            Ok(Self::File(PathBuf::from(url.path())))
        }
    }

    /// Create an in-memory SQLite database.
    ///
    /// Every connection of this driver sees the same database. Separate
    /// drivers get separate databases.
    pub fn in_memory() -> Result<Self> {
        static NEXT_DATABASE: AtomicUsize = AtomicUsize::new(0);

        let id = NEXT_DATABASE.fetch_add(1, Ordering::Relaxed);
        let uri = format!("file:skiff-mem-{id}?mode=memory&cache=shared");
        let anchor = open_uri(&uri)?;

        Ok(Self::InMemory {
            uri,
            anchor: Mutex::new(anchor),
        })
    }

    /// Open a SQLite database at the specified file path
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self::File(path.as_ref().to_path_buf())
    }

    /// Runs a batch of semicolon-separated statements, such as DDL.
    pub fn execute_batch(&self, sql: &str) -> Result<()> {
        match self {
            Sqlite::File(path) => RusqliteConnection::open(path)
                .and_then(|connection| connection.execute_batch(sql))
                .map_err(Error::driver),
            Sqlite::InMemory { anchor, .. } => {
                let anchor = anchor
                    .lock()
                    .map_err(|_| Error::invalid_result("in-memory anchor connection is poisoned"))?;
                anchor.execute_batch(sql).map_err(Error::driver)
            }
        }
    }

    fn open_connection(&self) -> Result<RusqliteConnection> {
        match self {
            Sqlite::File(path) => RusqliteConnection::open(path).map_err(Error::driver),
            Sqlite::InMemory { uri, .. } => open_uri(uri),
        }
    }
}

fn open_uri(uri: &str) -> Result<RusqliteConnection> {
    RusqliteConnection::open_with_flags(
        uri,
        OpenFlags::SQLITE_OPEN_READ_WRITE
            | OpenFlags::SQLITE_OPEN_CREATE
            | OpenFlags::SQLITE_OPEN_URI
            | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .map_err(Error::driver)
}

#[async_trait]
impl Driver for Sqlite {
    fn url(&self) -> Cow<'_, str> {
        match self {
            Sqlite::InMemory { uri, .. } => Cow::Owned(format!("sqlite:{uri}")),
            Sqlite::File(path) => Cow::Owned(format!("sqlite:{}", path.display())),
        }
    }

    fn capability(&self) -> &'static Capability {
        &Capability::SQLITE
    }

    async fn connect(&self) -> Result<Box<dyn skiff_core::Connection>> {
        let connection = self.open_connection()?;
        Ok(Box::new(Connection { connection }))
    }

    /// Relation introspection needs table-valued pragma functions. Check them
    /// once so a store that lacks them fails before any repository is built.
    async fn bootstrap(&self) -> Result<()> {
        let connection = self.open_connection()?;

        let version: String = connection
            .query_row("SELECT sqlite_version()", [], |row| row.get(0))
            .map_err(Error::driver)?;

        connection
            .prepare(LIST_RELATIONS)
            .map_err(Error::driver)?;

        info!(version = %version, "sqlite relation introspection available");
        Ok(())
    }
}

#[derive(Debug)]
pub struct Connection {
    connection: RusqliteConnection,
}

impl Connection {
    /// Prepares `sql`, binds each `(name, value)` pair to its `@name`
    /// placeholder, and runs it.
    fn run<'p>(
        &self,
        sql: &str,
        params: impl IntoIterator<Item = (&'p str, &'p skiff_core::stmt::Value)>,
        returning: bool,
    ) -> Result<Response> {
        let mut stmt = self.connection.prepare_cached(sql).map_err(Error::driver)?;

        for (name, value) in params {
            let placeholder = format!("@{name}");
            let index = stmt
                .parameter_index(&placeholder)
                .map_err(Error::driver)?
                .ok_or_else(|| {
                    Error::invalid_argument(format!("command has no parameter `{placeholder}`"))
                })?;

            stmt.raw_bind_parameter(index, Value(value))
                .map_err(Error::driver)?;
        }

        if !returning {
            let count = stmt.raw_execute().map_err(Error::driver)?;
            return Ok(Response::count(count as u64));
        }

        let columns: Arc<[String]> = stmt
            .column_names()
            .into_iter()
            .map(String::from)
            .collect();

        read_rows(stmt.raw_query(), &columns)
    }

    fn introspect(&self, sql: &str, table: &str) -> Result<Response> {
        let mut stmt = self.connection.prepare_cached(sql).map_err(Error::driver)?;

        let columns: Arc<[String]> = stmt
            .column_names()
            .into_iter()
            .map(String::from)
            .collect();

        let rows = stmt.query([table]).map_err(Error::driver)?;
        read_rows(rows, &columns)
    }
}

fn read_rows(mut rows: rusqlite::Rows<'_>, columns: &Arc<[String]>) -> Result<Response> {
    let mut ret = vec![];

    while let Some(row) = rows.next().map_err(Error::driver)? {
        let values = (0..columns.len())
            .map(|index| row.get_ref(index).map(Value::from_sql))
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(Error::driver)?;

        ret.push(Row::new(columns.clone(), values));
    }

    Ok(Response::values(ret))
}

#[async_trait]
impl skiff_core::Connection for Connection {
    async fn exec(&mut self, op: Operation) -> Result<Response> {
        match op {
            Operation::QuerySql(QuerySql {
                sql,
                params,
                returning,
            }) => {
                debug!(sql = %sql, "sqlite exec");
                self.run(
                    &sql,
                    params
                        .iter()
                        .map(|param| (param.name.as_str(), &param.value)),
                    returning,
                )
            }
            Operation::ListColumns(ListColumns { table }) => self.introspect(LIST_COLUMNS, &table),
            Operation::ListRelations(ListRelations { table }) => {
                self.introspect(LIST_RELATIONS, &table)
            }
        }
    }
}
