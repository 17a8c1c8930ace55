use sqlx::SqlitePool;

use super::types::*;
use crate::models::attendance::LABEL_CAME;
use crate::models::now_timestamp;

/// Find all commissions with their member counts, newest first.
pub async fn find_all(pool: &SqlitePool) -> sqlx::Result<Vec<CommissionListItem>> {
    sqlx::query_as::<_, CommissionListItem>(
        "SELECT c.id, c.name, c.description, c.created_at, c.updated_at, \
                (SELECT COUNT(*) FROM commission_members cm WHERE cm.commission_id = c.id) \
                    AS member_count \
         FROM commissions c \
         ORDER BY c.created_at DESC, c.id DESC",
    )
    .fetch_all(pool)
    .await
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> sqlx::Result<Option<Commission>> {
    sqlx::query_as::<_, Commission>(
        "SELECT id, name, description, created_at, updated_at FROM commissions WHERE id = ?1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Commission members in joining order, with role names for display.
pub async fn find_members(
    pool: &SqlitePool,
    commission_id: i64,
) -> sqlx::Result<Vec<CommissionMemberEntry>> {
    sqlx::query_as::<_, CommissionMemberEntry>(
        "SELECT cm.id AS membership_id, m.id AS member_id, m.first_name, m.last_name, \
                cm.duty, r.name AS role_name \
         FROM commission_members cm \
         JOIN members m ON m.id = cm.member_id \
         LEFT JOIN district_roles r ON r.id = m.district_role_id \
         WHERE cm.commission_id = ?1 \
         ORDER BY cm.created_at, cm.id",
    )
    .bind(commission_id)
    .fetch_all(pool)
    .await
}

/// Events the commission is linked to, newest first, each with the number
/// of members recorded as having come.
pub async fn find_events(
    pool: &SqlitePool,
    commission_id: i64,
) -> sqlx::Result<Vec<CommissionEventEntry>> {
    sqlx::query_as::<_, CommissionEventEntry>(
        "SELECT e.id AS event_id, e.name, e.event_date, e.mandatory, \
                (SELECT COUNT(*) FROM attendance_records a \
                 WHERE a.event_id = e.id AND a.status = ?1) AS came_count \
         FROM events e \
         JOIN event_commissions ec ON ec.event_id = e.id \
         WHERE ec.commission_id = ?2 \
         ORDER BY e.event_date DESC",
    )
    .bind(LABEL_CAME)
    .bind(commission_id)
    .fetch_all(pool)
    .await
}

pub async fn create(pool: &SqlitePool, req: &CommissionRequest) -> sqlx::Result<i64> {
    let result = sqlx::query("INSERT INTO commissions (name, description) VALUES (?1, ?2)")
        .bind(req.name.trim())
        .bind(req.description.as_deref().unwrap_or("").trim())
        .execute(pool)
        .await?;
    Ok(result.last_insert_rowid())
}

/// Update a commission. Returns false when it does not exist.
pub async fn update(pool: &SqlitePool, id: i64, req: &CommissionRequest) -> sqlx::Result<bool> {
    let result = sqlx::query(
        "UPDATE commissions SET name = ?1, description = ?2, updated_at = ?3 WHERE id = ?4",
    )
    .bind(req.name.trim())
    .bind(req.description.as_deref().unwrap_or("").trim())
    .bind(now_timestamp())
    .bind(id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn delete(pool: &SqlitePool, id: i64) -> sqlx::Result<u64> {
    let result = sqlx::query("DELETE FROM commissions WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

/// Add a member to a commission, or update the duty if the membership
/// already exists (upsert on the (member, commission) pair).
pub async fn add_member(
    pool: &SqlitePool,
    commission_id: i64,
    member_id: i64,
    duty: &str,
) -> sqlx::Result<MembershipRecord> {
    sqlx::query_as::<_, MembershipRecord>(
        "INSERT INTO commission_members (member_id, commission_id, duty) VALUES (?1, ?2, ?3) \
         ON CONFLICT(member_id, commission_id) DO UPDATE SET duty = excluded.duty \
         RETURNING id, member_id, commission_id, duty, created_at",
    )
    .bind(member_id)
    .bind(commission_id)
    .bind(duty.trim())
    .fetch_one(pool)
    .await
}

/// Look up a membership row by id.
pub async fn find_membership(
    pool: &SqlitePool,
    membership_id: i64,
) -> sqlx::Result<Option<MembershipRecord>> {
    sqlx::query_as::<_, MembershipRecord>(
        "SELECT id, member_id, commission_id, duty, created_at \
         FROM commission_members WHERE id = ?1",
    )
    .bind(membership_id)
    .fetch_optional(pool)
    .await
}

pub async fn update_member_duty(
    pool: &SqlitePool,
    membership_id: i64,
    duty: &str,
) -> sqlx::Result<u64> {
    let result = sqlx::query("UPDATE commission_members SET duty = ?1 WHERE id = ?2")
        .bind(duty.trim())
        .bind(membership_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

pub async fn remove_member(pool: &SqlitePool, membership_id: i64) -> sqlx::Result<u64> {
    let result = sqlx::query("DELETE FROM commission_members WHERE id = ?1")
        .bind(membership_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
