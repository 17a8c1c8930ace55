use std::collections::HashMap;

use sqlx::SqlitePool;

use super::types::*;
use crate::models::now_timestamp;

const NEIGHBORHOOD_SELECT: &str = "\
SELECT n.id, n.name, n.description, n.local_office, n.chair_member_id, \
       c.first_name AS chair_first_name, c.last_name AS chair_last_name, \
       n.created_at, n.updated_at \
FROM neighborhoods n \
LEFT JOIN members c ON c.id = n.chair_member_id";

#[derive(sqlx::FromRow)]
struct ResponsibleRow {
    neighborhood_id: i64,
    id: i64,
    first_name: String,
    last_name: String,
}

fn into_detail(
    row: NeighborhoodRow,
    responsible: &mut HashMap<i64, Vec<ResponsibleMember>>,
) -> NeighborhoodDetail {
    let chair = match (row.chair_member_id, row.chair_first_name, row.chair_last_name) {
        (Some(id), Some(first_name), Some(last_name)) => Some(NeighborhoodChair {
            id,
            first_name,
            last_name,
        }),
        _ => None,
    };
    NeighborhoodDetail {
        id: row.id,
        name: row.name,
        description: row.description,
        local_office: row.local_office,
        chair,
        responsible_members: responsible.remove(&row.id).unwrap_or_default(),
        created_at: row.created_at,
        updated_at: row.updated_at,
    }
}

async fn find_responsible(
    pool: &SqlitePool,
) -> sqlx::Result<HashMap<i64, Vec<ResponsibleMember>>> {
    let rows = sqlx::query_as::<_, ResponsibleRow>(
        "SELECT mn.neighborhood_id, m.id, m.first_name, m.last_name \
         FROM member_neighborhoods mn \
         JOIN members m ON m.id = mn.member_id \
         ORDER BY m.last_name, m.first_name",
    )
    .fetch_all(pool)
    .await?;
    let mut grouped: HashMap<i64, Vec<ResponsibleMember>> = HashMap::new();
    for row in rows {
        grouped
            .entry(row.neighborhood_id)
            .or_default()
            .push(ResponsibleMember {
                id: row.id,
                first_name: row.first_name,
                last_name: row.last_name,
            });
    }
    Ok(grouped)
}

/// Find all neighborhoods with chair and responsible members, newest first.
pub async fn find_all(pool: &SqlitePool) -> sqlx::Result<Vec<NeighborhoodDetail>> {
    let sql = format!("{NEIGHBORHOOD_SELECT} ORDER BY n.created_at DESC, n.id DESC");
    let rows = sqlx::query_as::<_, NeighborhoodRow>(&sql)
        .fetch_all(pool)
        .await?;
    let mut responsible = find_responsible(pool).await?;
    Ok(rows
        .into_iter()
        .map(|row| into_detail(row, &mut responsible))
        .collect())
}

pub async fn find_detail(pool: &SqlitePool, id: i64) -> sqlx::Result<Option<NeighborhoodDetail>> {
    let sql = format!("{NEIGHBORHOOD_SELECT} WHERE n.id = ?1");
    let row = sqlx::query_as::<_, NeighborhoodRow>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    match row {
        Some(row) => {
            let mut responsible = find_responsible(pool).await?;
            Ok(Some(into_detail(row, &mut responsible)))
        }
        None => Ok(None),
    }
}

pub async fn create(pool: &SqlitePool, req: &NeighborhoodRequest) -> sqlx::Result<i64> {
    let result = sqlx::query(
        "INSERT INTO neighborhoods (name, description, local_office, chair_member_id) \
         VALUES (?1, ?2, ?3, ?4)",
    )
    .bind(req.name.trim())
    .bind(req.description.as_deref().unwrap_or("").trim())
    .bind(req.local_office.as_deref().unwrap_or("").trim())
    .bind(req.chair_member_id)
    .execute(pool)
    .await?;
    Ok(result.last_insert_rowid())
}

/// Update a neighborhood. Returns false when it does not exist.
pub async fn update(pool: &SqlitePool, id: i64, req: &NeighborhoodRequest) -> sqlx::Result<bool> {
    let result = sqlx::query(
        "UPDATE neighborhoods SET name = ?1, description = ?2, local_office = ?3, \
                chair_member_id = ?4, updated_at = ?5 \
         WHERE id = ?6",
    )
    .bind(req.name.trim())
    .bind(req.description.as_deref().unwrap_or("").trim())
    .bind(req.local_office.as_deref().unwrap_or("").trim())
    .bind(req.chair_member_id)
    .bind(now_timestamp())
    .bind(id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn delete(pool: &SqlitePool, id: i64) -> sqlx::Result<u64> {
    let result = sqlx::query("DELETE FROM neighborhoods WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
