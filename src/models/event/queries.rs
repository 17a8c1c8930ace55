use std::collections::{HashMap, HashSet};

use sqlx::SqlitePool;

use super::types::*;
use crate::config::LeadershipRoles;
use crate::models::now_timestamp;

const EVENT_SELECT: &str = "\
SELECT id, name, description, event_date, location, mandatory, include_leadership, \
       created_at, updated_at \
FROM events";

#[derive(sqlx::FromRow)]
struct CommissionLinkRow {
    event_id: i64,
    commission_id: i64,
    commission_name: String,
}

async fn find_commission_links(
    pool: &SqlitePool,
) -> sqlx::Result<HashMap<i64, Vec<EventCommissionRef>>> {
    let rows = sqlx::query_as::<_, CommissionLinkRow>(
        "SELECT ec.event_id, ec.commission_id, c.name AS commission_name \
         FROM event_commissions ec \
         JOIN commissions c ON c.id = ec.commission_id \
         ORDER BY ec.id",
    )
    .fetch_all(pool)
    .await?;
    let mut grouped: HashMap<i64, Vec<EventCommissionRef>> = HashMap::new();
    for row in rows {
        grouped
            .entry(row.event_id)
            .or_default()
            .push(EventCommissionRef {
                commission_id: row.commission_id,
                commission_name: row.commission_name,
            });
    }
    Ok(grouped)
}

/// Find all events with their commissions, newest first.
pub async fn find_all(pool: &SqlitePool) -> sqlx::Result<Vec<EventDetail>> {
    let sql = format!("{EVENT_SELECT} ORDER BY event_date DESC, id DESC");
    let rows = sqlx::query_as::<_, EventRow>(&sql).fetch_all(pool).await?;
    let mut links = find_commission_links(pool).await?;
    Ok(rows
        .into_iter()
        .map(|row| {
            let commissions = links.remove(&row.id).unwrap_or_default();
            EventDetail::from_row(row, commissions)
        })
        .collect())
}

pub async fn find_row(pool: &SqlitePool, id: i64) -> sqlx::Result<Option<EventRow>> {
    let sql = format!("{EVENT_SELECT} WHERE id = ?1");
    sqlx::query_as::<_, EventRow>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn find_detail(pool: &SqlitePool, id: i64) -> sqlx::Result<Option<EventDetail>> {
    let row = match find_row(pool, id).await? {
        Some(row) => row,
        None => return Ok(None),
    };
    let commissions = sqlx::query_as::<_, CommissionLinkRow>(
        "SELECT ec.event_id, ec.commission_id, c.name AS commission_name \
         FROM event_commissions ec \
         JOIN commissions c ON c.id = ec.commission_id \
         WHERE ec.event_id = ?1 \
         ORDER BY ec.id",
    )
    .bind(id)
    .fetch_all(pool)
    .await?
    .into_iter()
    .map(|link| EventCommissionRef {
        commission_id: link.commission_id,
        commission_name: link.commission_name,
    })
    .collect();
    Ok(Some(EventDetail::from_row(row, commissions)))
}

/// Create an event and its commission links in one transaction.
pub async fn create(pool: &SqlitePool, req: &EventRequest, date: &str) -> sqlx::Result<i64> {
    let mut tx = pool.begin().await?;
    let result = sqlx::query(
        "INSERT INTO events (name, description, event_date, location, mandatory, include_leadership) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
    )
    .bind(req.name.trim())
    .bind(req.description.as_deref().unwrap_or("").trim())
    .bind(date)
    .bind(req.location.as_deref().unwrap_or("").trim())
    .bind(req.mandatory.unwrap_or(true))
    .bind(req.include_leadership.unwrap_or(false))
    .execute(&mut *tx)
    .await?;
    let event_id = result.last_insert_rowid();

    if let Some(commission_ids) = &req.commissions {
        for commission_id in commission_ids {
            sqlx::query(
                "INSERT OR IGNORE INTO event_commissions (event_id, commission_id) \
                 VALUES (?1, ?2)",
            )
            .bind(event_id)
            .bind(commission_id)
            .execute(&mut *tx)
            .await?;
        }
    }

    tx.commit().await?;
    Ok(event_id)
}

/// Update an event and reconcile its roster incrementally: commission links
/// are diffed against the request and only the deltas applied, then
/// attendance records are pruned for members who are no longer on the
/// resolved roster. Recorded attendance of members who remain is preserved.
/// The whole sequence runs in one transaction. Returns false when the event
/// does not exist.
pub async fn update(
    pool: &SqlitePool,
    id: i64,
    req: &EventRequest,
    leadership: &LeadershipRoles,
) -> sqlx::Result<bool> {
    let include_leadership = req.include_leadership.unwrap_or(false);

    let mut tx = pool.begin().await?;
    let result = sqlx::query(
        "UPDATE events SET name = ?1, description = ?2, \
                event_date = COALESCE(?3, event_date), location = ?4, \
                mandatory = ?5, include_leadership = ?6, updated_at = ?7 \
         WHERE id = ?8",
    )
    .bind(req.name.trim())
    .bind(req.description.as_deref().unwrap_or("").trim())
    .bind(
        req.date
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty()),
    )
    .bind(req.location.as_deref().unwrap_or("").trim())
    .bind(req.mandatory.unwrap_or(true))
    .bind(include_leadership)
    .bind(now_timestamp())
    .bind(id)
    .execute(&mut *tx)
    .await?;
    if result.rows_affected() == 0 {
        return Ok(false);
    }

    // Diff commission links against the requested set.
    let current: Vec<i64> =
        sqlx::query_scalar("SELECT commission_id FROM event_commissions WHERE event_id = ?1")
            .bind(id)
            .fetch_all(&mut *tx)
            .await?;
    let current: HashSet<i64> = current.into_iter().collect();
    let desired: HashSet<i64> = req
        .commissions
        .as_deref()
        .unwrap_or_default()
        .iter()
        .copied()
        .collect();

    for removed in current.difference(&desired) {
        sqlx::query("DELETE FROM event_commissions WHERE event_id = ?1 AND commission_id = ?2")
            .bind(id)
            .bind(removed)
            .execute(&mut *tx)
            .await?;
    }
    for added in desired.difference(&current) {
        sqlx::query("INSERT INTO event_commissions (event_id, commission_id) VALUES (?1, ?2)")
            .bind(id)
            .bind(added)
            .execute(&mut *tx)
            .await?;
    }

    // Prune attendance for members who left the roster.
    let names = leadership.names();
    let placeholders = vec!["?"; names.len().max(1)].join(", ");
    let sql = format!(
        "DELETE FROM attendance_records WHERE event_id = ? AND member_id NOT IN ( \
             SELECT cm.member_id FROM commission_members cm \
             JOIN event_commissions ec ON ec.commission_id = cm.commission_id \
             WHERE ec.event_id = ? \
             UNION \
             SELECT m.id FROM members m \
             JOIN district_roles r ON r.id = m.district_role_id \
             WHERE ? AND r.name IN ({placeholders}) \
         )"
    );
    let mut query = sqlx::query(&sql)
        .bind(id)
        .bind(id)
        .bind(include_leadership && !names.is_empty());
    if names.is_empty() {
        query = query.bind("");
    } else {
        for name in names {
            query = query.bind(name);
        }
    }
    query.execute(&mut *tx).await?;

    tx.commit().await?;
    Ok(true)
}

/// Delete an event. Commission links and attendance records cascade.
pub async fn delete(pool: &SqlitePool, id: i64) -> sqlx::Result<u64> {
    let result = sqlx::query("DELETE FROM events WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
