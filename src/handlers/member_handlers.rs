use actix_web::{web, HttpResponse};
use sqlx::SqlitePool;

use crate::errors::AppError;
use crate::models::member::{self, MemberDetailResponse, MemberRequest};
use crate::models::ApiMessageResponse;

fn validate(req: &MemberRequest) -> Result<(), AppError> {
    if req.first_name.trim().is_empty() {
        return Err(AppError::Validation("First name is required".to_string()));
    }
    if req.last_name.trim().is_empty() {
        return Err(AppError::Validation("Last name is required".to_string()));
    }
    Ok(())
}

/// GET /api/v1/members - List members, ordered by role display order, then
/// by Turkish-collated name.
pub async fn list(pool: web::Data<SqlitePool>) -> Result<HttpResponse, AppError> {
    let members = member::find_all(&pool).await?;
    Ok(HttpResponse::Ok().json(members))
}

/// GET /api/v1/members/{id} - Member detail with attendance history and
/// personal participation stats.
pub async fn read(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let member_id = path.into_inner();
    let detail = member::find_detail(&pool, member_id)
        .await?
        .ok_or(AppError::NotFound("Member"))?;
    let attendance = member::find_attendance_history(&pool, member_id).await?;
    let stats = member::compute_member_stats(&attendance);

    Ok(HttpResponse::Ok().json(MemberDetailResponse {
        member: detail,
        attendance,
        stats,
    }))
}

/// POST /api/v1/members - Create a member.
pub async fn create(
    pool: web::Data<SqlitePool>,
    body: web::Json<MemberRequest>,
) -> Result<HttpResponse, AppError> {
    validate(&body)?;

    let member_id = member::create(&pool, &body).await?;
    let created = member::find_detail(&pool, member_id)
        .await?
        .ok_or(AppError::NotFound("Member"))?;
    Ok(HttpResponse::Created().json(created))
}

/// PUT /api/v1/members/{id} - Update a member, replacing neighborhood links.
pub async fn update(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
    body: web::Json<MemberRequest>,
) -> Result<HttpResponse, AppError> {
    validate(&body)?;

    let member_id = path.into_inner();
    if !member::update(&pool, member_id, &body).await? {
        return Err(AppError::NotFound("Member"));
    }
    let updated = member::find_detail(&pool, member_id)
        .await?
        .ok_or(AppError::NotFound("Member"))?;
    Ok(HttpResponse::Ok().json(updated))
}

/// DELETE /api/v1/members/{id} - Delete a member.
pub async fn delete(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let member_id = path.into_inner();
    if member::delete(&pool, member_id).await? == 0 {
        return Err(AppError::NotFound("Member"));
    }
    Ok(HttpResponse::Ok().json(ApiMessageResponse::new("Member deleted")))
}
