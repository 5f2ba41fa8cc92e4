//! Infrastructure: SQLite connection and schema lifecycle.

pub mod db;

pub(crate) use db::get_connection;
pub use db::{
    init_db, init_db_at_version, init_test_db, schema_version, upgrade, DbPool, SCHEMA_VERSION,
};
