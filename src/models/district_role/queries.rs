use sqlx::SqlitePool;

use super::types::*;
use crate::models::now_timestamp;

/// Find all district roles, ordered by display order.
pub async fn find_all(pool: &SqlitePool) -> sqlx::Result<Vec<DistrictRole>> {
    sqlx::query_as::<_, DistrictRole>(
        "SELECT id, name, description, sort_order, created_at, updated_at \
         FROM district_roles ORDER BY sort_order, id",
    )
    .fetch_all(pool)
    .await
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> sqlx::Result<Option<DistrictRole>> {
    sqlx::query_as::<_, DistrictRole>(
        "SELECT id, name, description, sort_order, created_at, updated_at \
         FROM district_roles WHERE id = ?1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Members currently holding the role.
pub async fn find_holders(pool: &SqlitePool, role_id: i64) -> sqlx::Result<Vec<RoleHolder>> {
    sqlx::query_as::<_, RoleHolder>(
        "SELECT id, first_name, last_name FROM members \
         WHERE district_role_id = ?1 ORDER BY last_name, first_name",
    )
    .bind(role_id)
    .fetch_all(pool)
    .await
}

/// Create a district role. Fails on a duplicate name (unique constraint).
pub async fn create(pool: &SqlitePool, req: &DistrictRoleRequest) -> sqlx::Result<i64> {
    let result = sqlx::query(
        "INSERT INTO district_roles (name, description, sort_order) VALUES (?1, ?2, ?3)",
    )
    .bind(req.name.trim())
    .bind(req.description.as_deref().unwrap_or("").trim())
    .bind(req.sort_order.unwrap_or(0))
    .execute(pool)
    .await?;
    Ok(result.last_insert_rowid())
}

/// Update a district role. Returns false when the role does not exist.
pub async fn update(pool: &SqlitePool, id: i64, req: &DistrictRoleRequest) -> sqlx::Result<bool> {
    let result = sqlx::query(
        "UPDATE district_roles SET name = ?1, description = ?2, \
                sort_order = COALESCE(?3, sort_order), updated_at = ?4 \
         WHERE id = ?5",
    )
    .bind(req.name.trim())
    .bind(req.description.as_deref().unwrap_or("").trim())
    .bind(req.sort_order)
    .bind(now_timestamp())
    .bind(id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected() > 0)
}

/// Delete a district role. Members holding it fall back to no role.
pub async fn delete(pool: &SqlitePool, id: i64) -> sqlx::Result<u64> {
    let result = sqlx::query("DELETE FROM district_roles WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
