//! Connection pool, migrations, and the async write helper.

use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, Pool, PooledConnection};
use diesel::sqlite::SqliteConnection;
use diesel::Connection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use log::debug;
use std::sync::Arc;
use std::time::Duration;

use crate::errors::StorageError;
use fleetbooks_core::errors::{DatabaseError, Error, Result};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

pub type DbPool = Arc<Pool<ConnectionManager<SqliteConnection>>>;
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

#[derive(Debug)]
struct ConnectionCustomizer;

impl r2d2::CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for ConnectionCustomizer {
    fn on_acquire(
        &self,
        conn: &mut SqliteConnection,
    ) -> std::result::Result<(), diesel::r2d2::Error> {
        conn.batch_execute(
            "PRAGMA journal_mode = WAL; \
             PRAGMA foreign_keys = ON; \
             PRAGMA busy_timeout = 5000; \
             PRAGMA synchronous = NORMAL;",
        )
        .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Creates the connection pool for the given database path.
pub fn create_pool(database_url: &str) -> Result<DbPool> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let pool = Pool::builder()
        .max_size(8)
        .connection_timeout(Duration::from_secs(5))
        .connection_customizer(Box::new(ConnectionCustomizer))
        .build(manager)
        .map_err(|e| Error::Database(DatabaseError::PoolCreationFailed(e.to_string())))?;
    Ok(Arc::new(pool))
}

/// Runs all embedded migrations to completion.
pub fn run_migrations(pool: &DbPool) -> Result<()> {
    let mut conn = get_connection(pool)?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| Error::from(StorageError::MigrationFailed(e.to_string())))?;
    debug!("Applied {} pending migrations", applied.len());
    Ok(())
}

pub fn get_connection(pool: &DbPool) -> Result<DbConnection> {
    pool.get()
        .map_err(|e| Error::Database(DatabaseError::ConnectionFailed(e.to_string())))
}

/// Runs a write job on the blocking thread pool inside an immediate
/// transaction. SQLite writes are serialized by the database itself; the
/// busy_timeout pragma covers contention between concurrent writers.
pub async fn execute_write<F, T>(pool: DbPool, job: F) -> Result<T>
where
    F: FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(move || {
        let mut conn = get_connection(&pool)?;
        conn.immediate_transaction(|c| job(c).map_err(JobError))
            .map_err(|JobError(e)| e)
    })
    .await
    .map_err(|e| Error::Database(DatabaseError::Internal(format!("write task failed: {}", e))))?
}

// Wrapper so a core::Error can travel through Diesel's transaction error
// type, which requires From<diesel::result::Error>.
struct JobError(Error);

impl From<diesel::result::Error> for JobError {
    fn from(e: diesel::result::Error) -> Self {
        JobError(StorageError::from(e).into())
    }
}
