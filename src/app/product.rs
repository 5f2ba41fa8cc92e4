//! Product catalog use cases.

use crate::error::StoreError;
use crate::infra::get_connection;
use crate::infra::DbPool;
use rusqlite::params;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreateReq {
    pub name: String,
    pub description: String,
    /// Display string, not a numeric amount ("$100").
    pub price: String,
    /// Reference to a bundled visual asset; opaque to the store.
    pub image_id: i64,
}

#[derive(Debug, Serialize)]
pub struct ProductDto {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: String,
    pub image_id: i64,
}

/// Insert a catalog row. Fields are stored as given, no validation.
pub fn product_create(pool: &DbPool, req: ProductCreateReq) -> Result<ProductDto, StoreError> {
    let conn = get_connection(pool);
    conn.execute(
        "INSERT INTO products (name, description, price, image_id) VALUES (?1, ?2, ?3, ?4)",
        params![req.name, req.description, req.price, req.image_id],
    )?;
    let id = conn.last_insert_rowid();
    Ok(ProductDto {
        id,
        name: req.name,
        description: req.description,
        price: req.price,
        image_id: req.image_id,
    })
}

/// All products in store order (no ORDER BY; SQLite hands rows back in
/// rowid order, which matches insertion here). Empty vec when none.
pub fn product_list(pool: &DbPool) -> Result<Vec<ProductDto>, StoreError> {
    let conn = get_connection(pool);
    let mut stmt = conn.prepare("SELECT id, name, description, price, image_id FROM products")?;
    let rows = stmt.query_map([], |row| {
        Ok(ProductDto {
            id: row.get(0)?,
            name: row.get(1)?,
            description: row.get(2)?,
            price: row.get(3)?,
            image_id: row.get(4)?,
        })
    })?;
    let mut out = Vec::new();
    for r in rows {
        out.push(r.map_err(StoreError::from)?);
    }
    Ok(out)
}
