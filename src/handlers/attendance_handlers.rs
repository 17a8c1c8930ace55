use std::collections::HashMap;

use actix_web::{web, HttpResponse};
use sqlx::SqlitePool;

use crate::cache::TtlCache;
use crate::config::LeadershipRoles;
use crate::errors::AppError;
use crate::models::attendance::{
    self, AttendanceRecordResponse, AttendanceStatus, AttendanceWrite, AttendanceWriteItem,
    EventSummary, RosterResponse, LABEL_ABSENT, LABEL_CAME,
};
use crate::models::{event, member, ApiMessageResponse};

/// Computed roster responses, keyed by event id. Attendance writes and
/// event mutations invalidate the entry; roster changes that come in
/// through other resources age out with the TTL.
pub type RosterCache = TtlCache<i64, RosterResponse>;

/// GET /api/v1/events/{id}/attendance - The event's computed roster with
/// per-member statuses and summary stats.
pub async fn roster(
    pool: web::Data<SqlitePool>,
    cache: web::Data<RosterCache>,
    leadership: web::Data<LeadershipRoles>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let event_id = path.into_inner();
    let event = event::find_row(&pool, event_id)
        .await?
        .ok_or(AppError::NotFound("Event"))?;

    if let Some((cached, false)) = cache.get(&event_id) {
        return Ok(HttpResponse::Ok().json(cached));
    }

    let resolved =
        attendance::roster::resolve(&pool, event_id, event.include_leadership, &leadership).await?;
    let members = attendance::roster::attach_attendance(&pool, event_id, resolved).await?;
    let stats = attendance::roster::compute_stats(&members);

    let response = RosterResponse {
        event: EventSummary::from(&event),
        members,
        stats,
    };
    cache.insert(event_id, response.clone());
    Ok(HttpResponse::Ok().json(response))
}

fn parse_item(item: &AttendanceWriteItem) -> Result<(i64, AttendanceStatus), AppError> {
    let member_id = item
        .member_id
        .ok_or_else(|| AppError::Validation("memberId is required".to_string()))?;
    let label = item
        .status
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::Validation("status is required".to_string()))?;
    let status = AttendanceStatus::from_request(label, item.reason.as_deref())
        .map_err(AppError::Validation)?;
    Ok((member_id, status))
}

/// POST /api/v1/events/{id}/attendance - Record one status, or many at once
/// when the body is an array. Bulk writes accept only "Geldi"/"Gelmedi" and
/// are all-or-nothing: one transaction, rolled back on the first failure.
pub async fn record(
    pool: web::Data<SqlitePool>,
    cache: web::Data<RosterCache>,
    path: web::Path<i64>,
    body: web::Json<AttendanceWrite>,
) -> Result<HttpResponse, AppError> {
    let event_id = path.into_inner();
    event::find_row(&pool, event_id)
        .await?
        .ok_or(AppError::NotFound("Event"))?;

    match body.into_inner() {
        AttendanceWrite::Single(item) => {
            let (member_id, status) = parse_item(&item)?;
            member::find_detail(&pool, member_id)
                .await?
                .ok_or(AppError::NotFound("Member"))?;

            let record = attendance::set_status(&pool, event_id, member_id, &status).await?;
            cache.invalidate(&event_id);
            Ok(HttpResponse::Ok().json(AttendanceRecordResponse::from(record)))
        }
        AttendanceWrite::Bulk(items) => {
            let mut parsed = Vec::with_capacity(items.len());
            for item in &items {
                let (member_id, status) = parse_item(item)?;
                let label = status.label();
                if label != LABEL_CAME && label != LABEL_ABSENT {
                    return Err(AppError::Validation(format!(
                        "Bulk updates only accept \"{LABEL_CAME}\" or \"{LABEL_ABSENT}\""
                    )));
                }
                parsed.push((member_id, status));
            }

            let count = attendance::set_statuses(&pool, event_id, &parsed).await?;
            cache.invalidate(&event_id);
            Ok(HttpResponse::Ok().json(ApiMessageResponse::with_count(
                format!("Attendance recorded for {count} member(s)"),
                count,
            )))
        }
    }
}

/// DELETE /api/v1/events/{id}/attendance?memberId=N - Remove a member's
/// record, putting them back to undetermined. Deleting a record that does
/// not exist is an error.
pub async fn delete(
    pool: web::Data<SqlitePool>,
    cache: web::Data<RosterCache>,
    path: web::Path<i64>,
    query: web::Query<HashMap<String, String>>,
) -> Result<HttpResponse, AppError> {
    let event_id = path.into_inner();
    let member_id: i64 = query
        .get("memberId")
        .and_then(|v| v.parse().ok())
        .ok_or_else(|| AppError::Validation("memberId is required".to_string()))?;

    if attendance::delete(&pool, event_id, member_id).await? == 0 {
        return Err(AppError::NotFound("Attendance record"));
    }
    cache.invalidate(&event_id);
    Ok(HttpResponse::Ok().json(ApiMessageResponse::new("Attendance record deleted")))
}
