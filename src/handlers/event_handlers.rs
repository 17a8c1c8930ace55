use actix_web::{web, HttpResponse};
use sqlx::SqlitePool;

use super::attendance_handlers::RosterCache;
use crate::config::LeadershipRoles;
use crate::errors::AppError;
use crate::models::event::{self, EventRequest};
use crate::models::ApiMessageResponse;

fn validate(req: &EventRequest, date_required: bool) -> Result<(), AppError> {
    if req.name.trim().is_empty() {
        return Err(AppError::Validation("Event name is required".to_string()));
    }
    if date_required
        && req
            .date
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .is_none()
    {
        return Err(AppError::Validation("Event date is required".to_string()));
    }
    Ok(())
}

/// GET /api/v1/events - List events, newest first.
pub async fn list(pool: web::Data<SqlitePool>) -> Result<HttpResponse, AppError> {
    let events = event::find_all(&pool).await?;
    Ok(HttpResponse::Ok().json(events))
}

/// GET /api/v1/events/{id}
pub async fn read(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let detail = event::find_detail(&pool, path.into_inner())
        .await?
        .ok_or(AppError::NotFound("Event"))?;
    Ok(HttpResponse::Ok().json(detail))
}

/// POST /api/v1/events - Create an event with its commission links.
pub async fn create(
    pool: web::Data<SqlitePool>,
    body: web::Json<EventRequest>,
) -> Result<HttpResponse, AppError> {
    validate(&body, true)?;

    let date = body.date.as_deref().unwrap_or("").trim().to_string();
    let id = event::create(&pool, &body, &date).await?;
    let created = event::find_detail(&pool, id)
        .await?
        .ok_or(AppError::NotFound("Event"))?;
    Ok(HttpResponse::Created().json(created))
}

/// PUT /api/v1/events/{id} - Update an event. The roster is reconciled
/// incrementally; attendance already recorded for members who stay on the
/// roster survives the edit.
pub async fn update(
    pool: web::Data<SqlitePool>,
    cache: web::Data<RosterCache>,
    leadership: web::Data<LeadershipRoles>,
    path: web::Path<i64>,
    body: web::Json<EventRequest>,
) -> Result<HttpResponse, AppError> {
    validate(&body, false)?;

    let event_id = path.into_inner();
    if !event::update(&pool, event_id, &body, &leadership).await? {
        return Err(AppError::NotFound("Event"));
    }
    cache.invalidate(&event_id);

    let updated = event::find_detail(&pool, event_id)
        .await?
        .ok_or(AppError::NotFound("Event"))?;
    Ok(HttpResponse::Ok().json(updated))
}

/// DELETE /api/v1/events/{id} - Delete an event and its attendance records.
pub async fn delete(
    pool: web::Data<SqlitePool>,
    cache: web::Data<RosterCache>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let event_id = path.into_inner();
    if event::delete(&pool, event_id).await? == 0 {
        return Err(AppError::NotFound("Event"));
    }
    cache.invalidate(&event_id);
    Ok(HttpResponse::Ok().json(ApiMessageResponse::new("Event deleted")))
}
