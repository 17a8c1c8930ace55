use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;

pub const MIGRATIONS: &str = include_str!("schema.sql");

/// Default district roles, created idempotently at boot and by the seed
/// endpoint. The first three are the usual leadership roles.
pub const DEFAULT_DISTRICT_ROLES: &[(&str, &str, i64)] = &[
    ("İlçe Başkanı", "İlçe yönetiminin başkanı", 1),
    ("Yönetim Kurulu", "İlçe yönetim kurulu üyesi", 2),
    ("Yürütme Kurulu", "İlçe yürütme kurulu üyesi", 3),
    ("Meclis Üyesi", "İlçe meclis üyesi", 4),
    ("İlçe İdari İşler", "İlçe idari işler sorumlusu", 5),
];

pub async fn init_pool(database_url: &str) -> sqlx::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal);
    SqlitePoolOptions::new()
        .max_connections(8)
        .connect_with(options)
        .await
}

pub async fn run_migrations(pool: &SqlitePool) -> sqlx::Result<()> {
    sqlx::raw_sql(MIGRATIONS).execute(pool).await?;
    log::info!("Database migrations complete");
    Ok(())
}

/// Seed the default district roles (skips names that already exist).
/// Returns the number of roles created.
pub async fn seed_district_roles(pool: &SqlitePool) -> sqlx::Result<u64> {
    let mut created = 0;
    for (name, description, sort_order) in DEFAULT_DISTRICT_ROLES {
        let result = sqlx::query(
            "INSERT OR IGNORE INTO district_roles (name, description, sort_order) \
             VALUES (?1, ?2, ?3)",
        )
        .bind(name)
        .bind(description)
        .bind(sort_order)
        .execute(pool)
        .await?;
        created += result.rows_affected();
    }
    if created > 0 {
        log::info!("Seeded {created} default district role(s)");
    }
    Ok(created)
}
