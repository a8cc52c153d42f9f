//! SQLite-backed board store.
//!
//! A [`SqliteStore`] wraps one board database (one physical board product's
//! synced catalog) behind a connection pool and exposes the reference reads
//! and the mirror-aware climb search. Construction takes a path; there is no
//! ambient registry of open boards, callers hold the store they opened.

pub mod query;
pub mod reference;
pub mod schema;
pub mod search;

use std::fmt::Debug;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use serde::{Deserialize, Serialize};

use crimp_board::GradeLabel;

use crate::error::{BackendError, StoreError, StoreResult};

/// SQLite store for one board database.
pub struct SqliteStore {
    pool: Pool<SqliteConnectionManager>,
    config: SqliteStoreConfig,
    is_memory: bool,
    /// Grade table cache; immutable reference data, loaded on first use.
    grades: RwLock<Option<Arc<Vec<GradeLabel>>>>,
}

impl Debug for SqliteStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteStore")
            .field("config", &self.config)
            .field("is_memory", &self.is_memory)
            .field("grades_cached", &self.grades.read().is_some())
            .finish_non_exhaustive()
    }
}

/// Configuration for the SQLite store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SqliteStoreConfig {
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Minimum number of idle connections.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,

    /// Connection timeout in milliseconds.
    #[serde(default = "default_connection_timeout_ms")]
    pub connection_timeout_ms: u64,

    /// SQLite busy timeout in milliseconds.
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u32,

    /// Enable WAL mode for better read concurrency.
    #[serde(default = "default_true")]
    pub enable_wal: bool,

    /// Enable foreign key constraints.
    #[serde(default = "default_true")]
    pub enable_foreign_keys: bool,
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_connection_timeout_ms() -> u64 {
    30000
}

fn default_busy_timeout_ms() -> u32 {
    5000
}

fn default_true() -> bool {
    true
}

impl Default for SqliteStoreConfig {
    fn default() -> Self {
        Self {
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connection_timeout_ms: default_connection_timeout_ms(),
            busy_timeout_ms: default_busy_timeout_ms(),
            enable_wal: true,
            enable_foreign_keys: true,
        }
    }
}

impl SqliteStore {
    /// Creates a new in-memory store.
    pub fn in_memory() -> StoreResult<Self> {
        Self::with_config(":memory:", SqliteStoreConfig::default())
    }

    /// Opens or creates a file-based board database.
    pub fn open<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        Self::with_config(path, SqliteStoreConfig::default())
    }

    /// Creates a store with custom configuration.
    pub fn with_config<P: AsRef<Path>>(path: P, config: SqliteStoreConfig) -> StoreResult<Self> {
        let path_str = path.as_ref().to_string_lossy().into_owned();
        let is_memory = path_str == ":memory:";

        // A `:memory:` database exists per connection, so the pool is
        // clamped to a single shared connection.
        let max_connections = if is_memory { 1 } else { config.max_connections };
        let min_connections = config.min_connections.min(max_connections);

        let busy_timeout = Duration::from_millis(u64::from(config.busy_timeout_ms));
        let enable_foreign_keys = config.enable_foreign_keys;
        let manager = SqliteConnectionManager::file(path.as_ref()).with_init(move |conn| {
            conn.busy_timeout(busy_timeout)?;
            if enable_foreign_keys {
                conn.execute_batch("PRAGMA foreign_keys = ON")?;
            }
            Ok(())
        });

        let pool = Pool::builder()
            .max_size(max_connections)
            .min_idle(Some(min_connections))
            .connection_timeout(Duration::from_millis(config.connection_timeout_ms))
            .build(manager)
            .map_err(|e| {
                StoreError::Backend(BackendError::ConnectionFailed {
                    message: e.to_string(),
                })
            })?;

        let store = Self {
            pool,
            config,
            is_memory,
            grades: RwLock::new(None),
        };

        if store.config.enable_wal && !is_memory {
            let conn = store.get_connection()?;
            conn.pragma_update(None, "journal_mode", "WAL").map_err(|e| {
                StoreError::Backend(BackendError::ConnectionFailed {
                    message: format!("failed to enable WAL mode: {e}"),
                })
            })?;
        }

        tracing::debug!(database = %path_str, max_connections, "opened board store");
        Ok(store)
    }

    /// Initialize the database schema. Idempotent; synced board databases
    /// already carry it.
    pub fn init_schema(&self) -> StoreResult<()> {
        let conn = self.get_connection()?;
        schema::initialize_schema(&conn)
    }

    /// Get a connection from the pool.
    ///
    /// Exposed for ingest tooling and tests; the search and reference reads
    /// acquire their own connection per call.
    pub fn get_connection(&self) -> StoreResult<PooledConnection<SqliteConnectionManager>> {
        Ok(self.pool.get()?)
    }

    /// Returns whether this is an in-memory database.
    pub fn is_memory(&self) -> bool {
        self.is_memory
    }

    /// Returns the store configuration.
    pub fn config(&self) -> &SqliteStoreConfig {
        &self.config
    }

    pub(crate) fn grades_cache(&self) -> &RwLock<Option<Arc<Vec<GradeLabel>>>> {
        &self.grades
    }
}
