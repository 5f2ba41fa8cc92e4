//! SQLite connection and schema lifecycle.

use rusqlite::Connection;
use std::path::Path;
use std::sync::Mutex;

use crate::error::StoreError;

/// Schema version the crate was built against, stamped into
/// `PRAGMA user_version` on every successful open.
pub const SCHEMA_VERSION: i32 = 1;

#[derive(Debug)]
pub struct DbPool(pub Mutex<Connection>);

/// Initialize DB at path at the current schema version, return managed pool.
/// Safe to call on every process start.
pub fn init_db(db_path: &Path) -> Result<DbPool, StoreError> {
    init_db_at_version(db_path, SCHEMA_VERSION)
}

/// Open the DB at path requesting an explicit schema version.
///
/// A requested version above the one on disk drops both tables and recreates
/// them; every existing row is lost. There is no downgrade path: requesting a
/// version below the one on disk fails.
pub fn init_db_at_version(db_path: &Path, version: i32) -> Result<DbPool, StoreError> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| StoreError::Db(e.to_string()))?;
    }
    let conn = Connection::open(db_path).map_err(|e| StoreError::Db(e.to_string()))?;
    migrate_to(&conn, version)?;
    Ok(DbPool(Mutex::new(conn)))
}

fn current_version(conn: &Connection) -> Result<i32, StoreError> {
    let v = conn.pragma_query_value(None, "user_version", |r| r.get(0))?;
    Ok(v)
}

fn migrate_to(conn: &Connection, version: i32) -> Result<(), StoreError> {
    let current = current_version(conn)?;
    if version < current {
        return Err(StoreError::Schema(format!(
            "schema downgrade {} -> {} is not supported",
            current, version
        )));
    }
    if current == 0 {
        create_tables(conn)?;
    } else if version > current {
        log::warn!(
            "upgrading schema {} -> {}: dropping all rows",
            current,
            version
        );
        conn.execute_batch(
            "DROP TABLE IF EXISTS products;
             DROP TABLE IF EXISTS users;",
        )?;
        create_tables(conn)?;
    }
    conn.pragma_update(None, "user_version", version)?;
    Ok(())
}

fn create_tables(conn: &Connection) -> Result<(), StoreError> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS products (
             id INTEGER PRIMARY KEY AUTOINCREMENT,
             name TEXT,
             description TEXT,
             price TEXT,
             image_id INTEGER
         );
         CREATE TABLE IF NOT EXISTS users (
             id INTEGER PRIMARY KEY AUTOINCREMENT,
             username TEXT,
             email TEXT,
             password TEXT
         );",
    )?;
    Ok(())
}

/// Upgrade an open pool to `version` (drop and recreate, see
/// [`init_db_at_version`]). A no-op when `version` equals the stored one.
pub fn upgrade(pool: &DbPool, version: i32) -> Result<(), StoreError> {
    let conn = get_connection(pool);
    migrate_to(&conn, version)
}

/// Read the stored `PRAGMA user_version`.
pub fn schema_version(pool: &DbPool) -> Result<i32, StoreError> {
    let conn = get_connection(pool);
    current_version(&conn)
}

/// Get connection from pool (for use in operations).
pub fn get_connection(pool: &DbPool) -> std::sync::MutexGuard<'_, Connection> {
    pool.0.lock().expect("db lock")
}

/// Fresh in-memory DB at the current schema version, for tests.
pub fn init_test_db() -> DbPool {
    let conn = Connection::open_in_memory().expect("open in-memory db");
    migrate_to(&conn, SCHEMA_VERSION).expect("migrate test db");
    DbPool(Mutex::new(conn))
}
