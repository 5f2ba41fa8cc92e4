//! Schema lifecycle integration tests: init, destructive upgrade, reopen

use cornershop::app::{
    product_create, product_list, user_create, user_find_by_credentials, ProductCreateReq,
    UserCreateReq,
};
use cornershop::infra::db::{
    init_db, init_db_at_version, init_test_db, schema_version, upgrade, SCHEMA_VERSION,
};
use cornershop::infra::DbPool;
use std::path::PathBuf;

// ──────────────────────── Helpers ────────────────────────

fn temp_db_path() -> PathBuf {
    std::env::temp_dir().join(format!("cornershop-test-{}.db", uuid::Uuid::new_v4()))
}

fn seed(pool: &DbPool) {
    user_create(
        pool,
        UserCreateReq {
            username: "alice".to_string(),
            email: "a@x.com".to_string(),
            password: "secret".to_string(),
        },
    )
    .unwrap();
    product_create(
        pool,
        ProductCreateReq {
            name: "Widget".to_string(),
            description: "A widget".to_string(),
            price: "$5".to_string(),
            image_id: 1,
        },
    )
    .unwrap();
}

// ══════════════════════════════════════════════════════════
//  Versioning
// ══════════════════════════════════════════════════════════

#[test]
fn fresh_store_is_stamped_with_current_version() {
    let pool = init_test_db();
    assert_eq!(schema_version(&pool).unwrap(), SCHEMA_VERSION);
}

#[test]
fn upgrade_to_same_version_keeps_rows() {
    let pool = init_test_db();
    seed(&pool);

    upgrade(&pool, SCHEMA_VERSION).unwrap();

    assert_eq!(product_list(&pool).unwrap().len(), 1);
    assert!(user_find_by_credentials(&pool, "a@x.com", "secret")
        .unwrap()
        .is_some());
}

#[test]
fn upgrade_to_higher_version_drops_all_rows() {
    let pool = init_test_db();
    seed(&pool);

    upgrade(&pool, SCHEMA_VERSION + 1).unwrap();

    assert_eq!(schema_version(&pool).unwrap(), SCHEMA_VERSION + 1);
    assert!(product_list(&pool).unwrap().is_empty());
    assert!(user_find_by_credentials(&pool, "a@x.com", "secret")
        .unwrap()
        .is_none());
}

#[test]
fn downgrade_is_rejected() {
    let pool = init_test_db();
    upgrade(&pool, SCHEMA_VERSION + 1).unwrap();

    let err = upgrade(&pool, SCHEMA_VERSION).unwrap_err();
    assert_eq!(err.code(), "SCHEMA_ERROR");
    // And the store is untouched by the failed attempt.
    assert_eq!(schema_version(&pool).unwrap(), SCHEMA_VERSION + 1);
}

// ══════════════════════════════════════════════════════════
//  On-disk lifecycle
// ══════════════════════════════════════════════════════════

#[test]
fn reopen_is_idempotent_and_keeps_rows() {
    let path = temp_db_path();

    {
        let pool = init_db(&path).unwrap();
        seed(&pool);
    }
    {
        let pool = init_db(&path).unwrap();
        assert_eq!(schema_version(&pool).unwrap(), SCHEMA_VERSION);
        assert_eq!(product_list(&pool).unwrap().len(), 1);
        assert!(user_find_by_credentials(&pool, "a@x.com", "secret")
            .unwrap()
            .is_some());
    }

    let _ = std::fs::remove_file(&path);
}

#[test]
fn reopen_at_higher_version_wipes_the_store() {
    let path = temp_db_path();

    {
        let pool = init_db(&path).unwrap();
        seed(&pool);
    }
    {
        let pool = init_db_at_version(&path, SCHEMA_VERSION + 1).unwrap();
        assert_eq!(schema_version(&pool).unwrap(), SCHEMA_VERSION + 1);
        assert!(product_list(&pool).unwrap().is_empty());
    }

    let _ = std::fs::remove_file(&path);
}

#[test]
fn reopen_at_lower_version_fails() {
    let path = temp_db_path();

    {
        init_db_at_version(&path, SCHEMA_VERSION + 1).unwrap();
    }
    let err = init_db(&path).unwrap_err();
    assert_eq!(err.code(), "SCHEMA_ERROR");

    let _ = std::fs::remove_file(&path);
}
