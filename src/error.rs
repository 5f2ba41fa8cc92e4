//! Stable error codes for the presentation layer.

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0}")]
    Db(String),

    #[error("Schema contract violation: {0}")]
    Schema(String),
}

impl StoreError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Db(_) => "DB_ERROR",
            Self::Schema(_) => "SCHEMA_ERROR",
        }
    }

    pub fn to_serde(&self) -> StoreErrorDto {
        StoreErrorDto {
            code: self.code().to_string(),
            message: self.to_string(),
            details: None,
        }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(e: rusqlite::Error) -> Self {
        match e {
            // Row-mapping drift against the live schema is a defect, not an
            // I/O condition; keep it on its own code so callers can fail fast.
            rusqlite::Error::InvalidColumnIndex(_)
            | rusqlite::Error::InvalidColumnName(_)
            | rusqlite::Error::InvalidColumnType(..) => StoreError::Schema(e.to_string()),
            other => StoreError::Db(other.to_string()),
        }
    }
}

impl serde::Serialize for StoreError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_serde().serialize(serializer)
    }
}

#[derive(Debug, Serialize)]
pub struct StoreErrorDto {
    pub code: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}
