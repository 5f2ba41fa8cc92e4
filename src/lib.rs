//! Cornershop: file-backed local store for a small storefront app.
//!
//! Owns a single SQLite file with two tables (`users`, `products`) and
//! exposes the create/read/update operations the screens call into:
//! signup, login lookup, password reset, add product, list products.
//! Screens, navigation and form state live in the presentation layer and
//! stay out of this crate.

pub mod app;
pub mod domain;
pub mod error;
pub mod infra;

use std::path::PathBuf;

/// Default location of the database file, under the per-user data dir.
pub fn default_db_path() -> PathBuf {
    let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("com.nickdu.cornershop").join("app.db")
}
