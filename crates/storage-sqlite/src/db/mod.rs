//! Database connection management: pooling, migrations, and the single
//! writer actor.

pub mod write_actor;

pub use write_actor::{spawn_writer, WriteHandle};

use std::fs;
use std::path::Path;
use std::sync::Arc;

use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PooledConnection};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use log::info;

use crate::errors::StorageError;
use catalog_core::errors::{DatabaseError, Result};

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Ensures the database file exists, creating parent directories on first
/// run. Returns the path in use.
pub fn init(db_path: &str) -> Result<String> {
    if !Path::new(db_path).exists() {
        create_db_file(db_path)?;
    }
    Ok(db_path.to_string())
}

/// Builds the r2d2 connection pool. Every acquired connection gets a busy
/// timeout so readers tolerate the single writer's transactions.
pub fn create_pool(db_path: &str) -> Result<Arc<DbPool>> {
    let manager = ConnectionManager::<SqliteConnection>::new(db_path);
    let pool = Pool::builder()
        .connection_customizer(Box::new(ConnectionOptions))
        .build(manager)
        .map_err(|e| DatabaseError::PoolCreationFailed(e.to_string()))?;

    Ok(Arc::new(pool))
}

/// Runs any pending embedded migrations.
pub fn run_migrations(pool: &DbPool) -> Result<()> {
    let mut conn = get_connection(pool)?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| StorageError::MigrationFailed(e.to_string()))?;

    if !applied.is_empty() {
        info!("Applied {} pending database migration(s)", applied.len());
    }
    Ok(())
}

/// Checks out a pooled connection.
pub fn get_connection(pool: &DbPool) -> Result<DbConnection> {
    pool.get().map_err(|e| StorageError::PoolError(e).into())
}

fn create_db_file(db_path: &str) -> Result<()> {
    if let Some(db_dir) = Path::new(db_path).parent() {
        if !db_dir.exists() {
            fs::create_dir_all(db_dir)
                .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?;
        }
    }
    fs::File::create(db_path).map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?;
    Ok(())
}

#[derive(Debug)]
struct ConnectionOptions;

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for ConnectionOptions {
    fn on_acquire(
        &self,
        conn: &mut SqliteConnection,
    ) -> std::result::Result<(), diesel::r2d2::Error> {
        conn.batch_execute("PRAGMA busy_timeout = 5000; PRAGMA foreign_keys = ON;")
            .map_err(diesel::r2d2::Error::QueryError)
    }
}
