//! Shared test infrastructure for model and API tests.
//!
//! Creates a temporary SQLite database with the full schema, plus small
//! fixture helpers for the entities most tests need.

#![allow(dead_code)]

use sqlx::SqlitePool;
use tempfile::TempDir;

use yoklama::db;

/// Setup a test database with schema applied.
///
/// Returns a tuple of (TempDir, SqlitePool) where TempDir must be kept
/// alive for the database file to remain valid.
pub async fn setup_test_db() -> (TempDir, SqlitePool) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = dir.path().join("test.db");
    let pool = db::init_pool(db_path.to_str().expect("utf-8 temp path"))
        .await
        .expect("Failed to open test DB");
    db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");
    (dir, pool)
}

pub async fn insert_role(pool: &SqlitePool, name: &str, sort_order: i64) -> i64 {
    sqlx::query("INSERT INTO district_roles (name, sort_order) VALUES (?1, ?2)")
        .bind(name)
        .bind(sort_order)
        .execute(pool)
        .await
        .expect("Failed to insert district role")
        .last_insert_rowid()
}

pub async fn insert_member(
    pool: &SqlitePool,
    first_name: &str,
    last_name: &str,
    role_id: Option<i64>,
) -> i64 {
    sqlx::query("INSERT INTO members (first_name, last_name, district_role_id) VALUES (?1, ?2, ?3)")
        .bind(first_name)
        .bind(last_name)
        .bind(role_id)
        .execute(pool)
        .await
        .expect("Failed to insert member")
        .last_insert_rowid()
}

pub async fn insert_commission(pool: &SqlitePool, name: &str) -> i64 {
    sqlx::query("INSERT INTO commissions (name) VALUES (?1)")
        .bind(name)
        .execute(pool)
        .await
        .expect("Failed to insert commission")
        .last_insert_rowid()
}

pub async fn add_commission_member(pool: &SqlitePool, commission_id: i64, member_id: i64) {
    sqlx::query("INSERT INTO commission_members (member_id, commission_id) VALUES (?1, ?2)")
        .bind(member_id)
        .bind(commission_id)
        .execute(pool)
        .await
        .expect("Failed to add commission member");
}

pub async fn insert_event(
    pool: &SqlitePool,
    name: &str,
    date: &str,
    mandatory: bool,
    include_leadership: bool,
) -> i64 {
    sqlx::query(
        "INSERT INTO events (name, event_date, mandatory, include_leadership) \
         VALUES (?1, ?2, ?3, ?4)",
    )
    .bind(name)
    .bind(date)
    .bind(mandatory)
    .bind(include_leadership)
    .execute(pool)
    .await
    .expect("Failed to insert event")
    .last_insert_rowid()
}

pub async fn link_event_commission(pool: &SqlitePool, event_id: i64, commission_id: i64) {
    sqlx::query("INSERT INTO event_commissions (event_id, commission_id) VALUES (?1, ?2)")
        .bind(event_id)
        .bind(commission_id)
        .execute(pool)
        .await
        .expect("Failed to link event commission");
}

pub async fn count_attendance(pool: &SqlitePool, event_id: i64) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM attendance_records WHERE event_id = ?1")
        .bind(event_id)
        .fetch_one(pool)
        .await
        .expect("Failed to count attendance records")
}
