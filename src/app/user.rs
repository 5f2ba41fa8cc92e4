//! User account use cases: signup, login lookup, password reset.

use crate::domain::password::{hash_password, verify_password};
use crate::error::StoreError;
use crate::infra::get_connection;
use crate::infra::DbPool;
use rusqlite::params;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCreateReq {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct UserDto {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

/// Insert a signup row. No field validation and no uniqueness check on
/// email: a second signup with the same address creates a second account.
pub fn user_create(pool: &DbPool, req: UserCreateReq) -> Result<UserDto, StoreError> {
    let password_hash = hash_password(&req.password);
    let conn = get_connection(pool);
    conn.execute(
        "INSERT INTO users (username, email, password) VALUES (?1, ?2, ?3)",
        params![req.username, req.email, password_hash],
    )?;
    let id = conn.last_insert_rowid();
    log::info!("user {} created", id);
    Ok(UserDto {
        id,
        username: req.username,
        email: req.email,
        password_hash,
    })
}

/// Look up the account behind a login attempt.
///
/// Email matching is exact and case-sensitive; the password is checked
/// against the stored salted digest in constant time. Returns `Ok(None)`
/// for an unknown email and for a wrong password alike, so a caller cannot
/// tell the two apart. With duplicate accounts the lowest id that verifies
/// wins.
pub fn user_find_by_credentials(
    pool: &DbPool,
    email: &str,
    password: &str,
) -> Result<Option<UserDto>, StoreError> {
    let conn = get_connection(pool);
    let mut stmt = conn.prepare(
        "SELECT id, username, email, password FROM users WHERE email = ?1 ORDER BY id",
    )?;
    let rows = stmt.query_map([email], |row| {
        Ok(UserDto {
            id: row.get(0)?,
            username: row.get(1)?,
            email: row.get(2)?,
            password_hash: row.get(3)?,
        })
    })?;
    for row in rows {
        let user = row.map_err(StoreError::from)?;
        if verify_password(&user.password_hash, password) {
            return Ok(Some(user));
        }
    }
    Ok(None)
}

/// Reset the password for every row matching `email`, under a fresh salt.
///
/// Returns the affected-row count: 0 means the email is unknown, more than
/// 1 is possible when duplicate accounts exist.
pub fn user_update_password(
    pool: &DbPool,
    email: &str,
    new_password: &str,
) -> Result<usize, StoreError> {
    let password_hash = hash_password(new_password);
    let conn = get_connection(pool);
    let affected = conn.execute(
        "UPDATE users SET password = ?1 WHERE email = ?2",
        params![password_hash, email],
    )?;
    Ok(affected)
}
