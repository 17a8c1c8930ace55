use sqlx::{Sqlite, SqlitePool};

use super::status::AttendanceStatus;
use super::types::AttendanceRecordRow;
use crate::models::now_timestamp;

/// All attendance rows recorded for an event.
pub async fn find_by_event(
    pool: &SqlitePool,
    event_id: i64,
) -> sqlx::Result<Vec<AttendanceRecordRow>> {
    sqlx::query_as::<_, AttendanceRecordRow>(
        "SELECT id, event_id, member_id, status, created_at, updated_at \
         FROM attendance_records WHERE event_id = ?1",
    )
    .bind(event_id)
    .fetch_all(pool)
    .await
}

/// Upsert one status on the (event, member) unique key: the record is
/// created on first write and overwritten on every later one.
async fn upsert<'e, E>(
    executor: E,
    event_id: i64,
    member_id: i64,
    status: &AttendanceStatus,
) -> sqlx::Result<AttendanceRecordRow>
where
    E: sqlx::Executor<'e, Database = Sqlite>,
{
    sqlx::query_as::<_, AttendanceRecordRow>(
        "INSERT INTO attendance_records (event_id, member_id, status) VALUES (?1, ?2, ?3) \
         ON CONFLICT(event_id, member_id) \
         DO UPDATE SET status = excluded.status, updated_at = ?4 \
         RETURNING id, event_id, member_id, status, created_at, updated_at",
    )
    .bind(event_id)
    .bind(member_id)
    .bind(status.label())
    .bind(now_timestamp())
    .fetch_one(executor)
    .await
}

/// Record a single member's status.
pub async fn set_status(
    pool: &SqlitePool,
    event_id: i64,
    member_id: i64,
    status: &AttendanceStatus,
) -> sqlx::Result<AttendanceRecordRow> {
    upsert(pool, event_id, member_id, status).await
}

/// Record statuses for many members at once. All-or-nothing: the writes
/// share one transaction and the first failure rolls back every item.
pub async fn set_statuses(
    pool: &SqlitePool,
    event_id: i64,
    items: &[(i64, AttendanceStatus)],
) -> sqlx::Result<usize> {
    let mut tx = pool.begin().await?;
    for (member_id, status) in items {
        upsert(&mut *tx, event_id, *member_id, status).await?;
    }
    tx.commit().await?;
    Ok(items.len())
}

/// Delete an attendance record. Returns the number of rows removed so the
/// caller can report a missing record as an error.
pub async fn delete(pool: &SqlitePool, event_id: i64, member_id: i64) -> sqlx::Result<u64> {
    let result =
        sqlx::query("DELETE FROM attendance_records WHERE event_id = ?1 AND member_id = ?2")
            .bind(event_id)
            .bind(member_id)
            .execute(pool)
            .await?;
    Ok(result.rows_affected())
}
