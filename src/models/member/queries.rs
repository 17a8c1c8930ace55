use std::collections::HashMap;

use sqlx::SqlitePool;

use super::types::*;
use crate::collate;
use crate::models::attendance::AttendanceStatus;
use crate::models::now_timestamp;

/// Base SELECT for member rows joined with the optional district role.
const MEMBER_SELECT: &str = "\
SELECT m.id, m.first_name, m.last_name, m.phone, m.email, m.address, \
       m.created_at, m.updated_at, \
       r.id AS role_id, r.name AS role_name, \
       r.description AS role_description, r.sort_order AS role_sort_order \
FROM members m \
LEFT JOIN district_roles r ON r.id = m.district_role_id";

#[derive(sqlx::FromRow)]
struct MembershipRow {
    membership_id: i64,
    member_id: i64,
    commission_id: i64,
    commission_name: String,
    duty: String,
}

#[derive(sqlx::FromRow)]
struct NeighborhoodLinkRow {
    member_id: i64,
    neighborhood_id: i64,
    neighborhood_name: String,
}

/// Attach commission memberships and neighborhood responsibilities to raw
/// member rows.
pub async fn attach_details(
    pool: &SqlitePool,
    rows: Vec<MemberRoleRow>,
) -> sqlx::Result<Vec<MemberDetail>> {
    if rows.is_empty() {
        return Ok(Vec::new());
    }

    let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
    let placeholders = vec!["?"; ids.len()].join(", ");

    let sql = format!(
        "SELECT cm.id AS membership_id, cm.member_id, cm.commission_id, \
                c.name AS commission_name, cm.duty \
         FROM commission_members cm \
         JOIN commissions c ON c.id = cm.commission_id \
         WHERE cm.member_id IN ({placeholders}) \
         ORDER BY cm.created_at, cm.id"
    );
    let mut query = sqlx::query_as::<_, MembershipRow>(&sql);
    for id in &ids {
        query = query.bind(id);
    }
    let mut memberships: HashMap<i64, Vec<MemberCommission>> = HashMap::new();
    for row in query.fetch_all(pool).await? {
        memberships
            .entry(row.member_id)
            .or_default()
            .push(MemberCommission {
                membership_id: row.membership_id,
                commission_id: row.commission_id,
                commission_name: row.commission_name,
                duty: row.duty,
            });
    }

    let sql = format!(
        "SELECT mn.member_id, mn.neighborhood_id, n.name AS neighborhood_name \
         FROM member_neighborhoods mn \
         JOIN neighborhoods n ON n.id = mn.neighborhood_id \
         WHERE mn.member_id IN ({placeholders}) \
         ORDER BY mn.id"
    );
    let mut query = sqlx::query_as::<_, NeighborhoodLinkRow>(&sql);
    for id in &ids {
        query = query.bind(id);
    }
    let mut neighborhoods: HashMap<i64, Vec<MemberNeighborhood>> = HashMap::new();
    for row in query.fetch_all(pool).await? {
        neighborhoods
            .entry(row.member_id)
            .or_default()
            .push(MemberNeighborhood {
                neighborhood_id: row.neighborhood_id,
                neighborhood_name: row.neighborhood_name,
            });
    }

    Ok(rows
        .into_iter()
        .map(|row| {
            let district_role = match (row.role_id, row.role_name) {
                (Some(id), Some(name)) => Some(DistrictRoleRef {
                    id,
                    name,
                    description: row.role_description.unwrap_or_default(),
                    sort_order: row.role_sort_order.unwrap_or(0),
                }),
                _ => None,
            };
            MemberDetail {
                id: row.id,
                first_name: row.first_name,
                last_name: row.last_name,
                phone: row.phone,
                email: row.email,
                address: row.address,
                district_role,
                commissions: memberships.remove(&row.id).unwrap_or_default(),
                neighborhoods: neighborhoods.remove(&row.id).unwrap_or_default(),
                created_at: row.created_at,
                updated_at: row.updated_at,
            }
        })
        .collect())
}

/// Find all members, ordered by district-role sort order (members without a
/// role last), then by Turkish-collated full name.
pub async fn find_all(pool: &SqlitePool) -> sqlx::Result<Vec<MemberDetail>> {
    let rows = sqlx::query_as::<_, MemberRoleRow>(MEMBER_SELECT)
        .fetch_all(pool)
        .await?;
    let mut members = attach_details(pool, rows).await?;
    members.sort_by(|a, b| {
        let rank_a = a.district_role.as_ref().map(|r| r.sort_order).unwrap_or(i64::MAX);
        let rank_b = b.district_role.as_ref().map(|r| r.sort_order).unwrap_or(i64::MAX);
        rank_a
            .cmp(&rank_b)
            .then_with(|| collate::compare(&a.full_name(), &b.full_name()))
    });
    Ok(members)
}

/// Find a single member with full detail.
pub async fn find_detail(pool: &SqlitePool, id: i64) -> sqlx::Result<Option<MemberDetail>> {
    let sql = format!("{MEMBER_SELECT} WHERE m.id = ?");
    let row = sqlx::query_as::<_, MemberRoleRow>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    match row {
        Some(row) => Ok(attach_details(pool, vec![row]).await?.into_iter().next()),
        None => Ok(None),
    }
}

/// Create a member and its neighborhood links in one transaction.
pub async fn create(pool: &SqlitePool, req: &MemberRequest) -> sqlx::Result<i64> {
    let mut tx = pool.begin().await?;
    let result = sqlx::query(
        "INSERT INTO members (first_name, last_name, phone, email, address, district_role_id) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
    )
    .bind(req.first_name.trim())
    .bind(req.last_name.trim())
    .bind(req.phone.as_deref().unwrap_or("").trim())
    .bind(req.email.as_deref().unwrap_or("").trim())
    .bind(req.address.as_deref().unwrap_or("").trim())
    .bind(req.district_role_id)
    .execute(&mut *tx)
    .await?;
    let member_id = result.last_insert_rowid();

    if let Some(neighborhood_ids) = &req.neighborhoods {
        for neighborhood_id in neighborhood_ids {
            sqlx::query(
                "INSERT OR IGNORE INTO member_neighborhoods (member_id, neighborhood_id) \
                 VALUES (?1, ?2)",
            )
            .bind(member_id)
            .bind(neighborhood_id)
            .execute(&mut *tx)
            .await?;
        }
    }

    tx.commit().await?;
    Ok(member_id)
}

/// Update a member, replacing its neighborhood links. Returns false when
/// the member does not exist.
pub async fn update(pool: &SqlitePool, id: i64, req: &MemberRequest) -> sqlx::Result<bool> {
    let mut tx = pool.begin().await?;
    let result = sqlx::query(
        "UPDATE members SET first_name = ?1, last_name = ?2, phone = ?3, email = ?4, \
                address = ?5, district_role_id = ?6, updated_at = ?7 \
         WHERE id = ?8",
    )
    .bind(req.first_name.trim())
    .bind(req.last_name.trim())
    .bind(req.phone.as_deref().unwrap_or("").trim())
    .bind(req.email.as_deref().unwrap_or("").trim())
    .bind(req.address.as_deref().unwrap_or("").trim())
    .bind(req.district_role_id)
    .bind(now_timestamp())
    .bind(id)
    .execute(&mut *tx)
    .await?;
    if result.rows_affected() == 0 {
        return Ok(false);
    }

    sqlx::query("DELETE FROM member_neighborhoods WHERE member_id = ?1")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    if let Some(neighborhood_ids) = &req.neighborhoods {
        for neighborhood_id in neighborhood_ids {
            sqlx::query(
                "INSERT OR IGNORE INTO member_neighborhoods (member_id, neighborhood_id) \
                 VALUES (?1, ?2)",
            )
            .bind(id)
            .bind(neighborhood_id)
            .execute(&mut *tx)
            .await?;
        }
    }

    tx.commit().await?;
    Ok(true)
}

/// Delete a member. Join rows and attendance records cascade.
pub async fn delete(pool: &SqlitePool, id: i64) -> sqlx::Result<u64> {
    let result = sqlx::query("DELETE FROM members WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

#[derive(sqlx::FromRow)]
struct HistoryRow {
    record_id: i64,
    event_id: i64,
    event_name: String,
    event_date: String,
    location: String,
    mandatory: bool,
    status: String,
    updated_at: String,
}

/// A member's attendance history, newest event first.
pub async fn find_attendance_history(
    pool: &SqlitePool,
    member_id: i64,
) -> sqlx::Result<Vec<MemberAttendanceEntry>> {
    let rows = sqlx::query_as::<_, HistoryRow>(
        "SELECT a.id AS record_id, e.id AS event_id, e.name AS event_name, \
                e.event_date, e.location, e.mandatory, a.status, a.updated_at \
         FROM attendance_records a \
         JOIN events e ON e.id = a.event_id \
         WHERE a.member_id = ?1 \
         ORDER BY e.event_date DESC",
    )
    .bind(member_id)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|row| {
            let status = AttendanceStatus::from_note(&row.status);
            MemberAttendanceEntry {
                record_id: row.record_id,
                event_id: row.event_id,
                event_name: row.event_name,
                event_date: row.event_date,
                location: row.location,
                mandatory: row.mandatory,
                attended: status.attended(),
                status: row.status,
                updated_at: row.updated_at,
            }
        })
        .collect())
}

/// Reduce a member's history into personal participation stats. The rate
/// only counts mandatory events.
pub fn compute_member_stats(entries: &[MemberAttendanceEntry]) -> MemberStats {
    let mut stats = MemberStats {
        total: entries.len() as i64,
        came: 0,
        excused: 0,
        absent: 0,
        mandatory_total: 0,
        mandatory_came: 0,
        participation_rate: 0,
    };
    for entry in entries {
        let status = AttendanceStatus::from_note(&entry.status);
        match status {
            AttendanceStatus::Came => stats.came += 1,
            AttendanceStatus::Excused(_) => stats.excused += 1,
            AttendanceStatus::Absent => stats.absent += 1,
            AttendanceStatus::Undetermined => {}
        }
        if entry.mandatory {
            stats.mandatory_total += 1;
            if status.attended() {
                stats.mandatory_came += 1;
            }
        }
    }
    if stats.mandatory_total > 0 {
        stats.participation_rate =
            ((stats.mandatory_came as f64 / stats.mandatory_total as f64) * 100.0).round() as i64;
    }
    stats
}
