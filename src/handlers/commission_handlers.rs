use std::collections::HashMap;

use actix_web::{web, HttpResponse};
use sqlx::SqlitePool;

use crate::errors::AppError;
use crate::models::commission::{
    self, CommissionDetail, CommissionMemberRequest, CommissionMemberUpdateRequest,
    CommissionRequest,
};
use crate::models::{member, ApiMessageResponse};

fn validate(req: &CommissionRequest) -> Result<(), AppError> {
    if req.name.trim().is_empty() {
        return Err(AppError::Validation(
            "Commission name is required".to_string(),
        ));
    }
    Ok(())
}

/// GET /api/v1/commissions - List commissions with member counts.
pub async fn list(pool: web::Data<SqlitePool>) -> Result<HttpResponse, AppError> {
    let commissions = commission::find_all(&pool).await?;
    Ok(HttpResponse::Ok().json(commissions))
}

/// GET /api/v1/commissions/{id} - Commission detail: members (in joining
/// order) and linked events with their turnout.
pub async fn read(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let commission_id = path.into_inner();
    let row = commission::find_by_id(&pool, commission_id)
        .await?
        .ok_or(AppError::NotFound("Commission"))?;
    let members = commission::find_members(&pool, commission_id).await?;
    let events = commission::find_events(&pool, commission_id).await?;

    Ok(HttpResponse::Ok().json(CommissionDetail {
        commission: row,
        members,
        events,
    }))
}

/// POST /api/v1/commissions
pub async fn create(
    pool: web::Data<SqlitePool>,
    body: web::Json<CommissionRequest>,
) -> Result<HttpResponse, AppError> {
    validate(&body)?;

    let id = commission::create(&pool, &body).await?;
    let created = commission::find_by_id(&pool, id)
        .await?
        .ok_or(AppError::NotFound("Commission"))?;
    Ok(HttpResponse::Created().json(created))
}

/// PUT /api/v1/commissions/{id}
pub async fn update(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
    body: web::Json<CommissionRequest>,
) -> Result<HttpResponse, AppError> {
    validate(&body)?;

    let id = path.into_inner();
    if !commission::update(&pool, id, &body).await? {
        return Err(AppError::NotFound("Commission"));
    }
    let updated = commission::find_by_id(&pool, id)
        .await?
        .ok_or(AppError::NotFound("Commission"))?;
    Ok(HttpResponse::Ok().json(updated))
}

/// DELETE /api/v1/commissions/{id}
pub async fn delete(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    if commission::delete(&pool, path.into_inner()).await? == 0 {
        return Err(AppError::NotFound("Commission"));
    }
    Ok(HttpResponse::Ok().json(ApiMessageResponse::new("Commission deleted")))
}

/// POST /api/v1/commissions/{id}/members - Add a member (or update their
/// duty if already a member).
pub async fn add_member(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
    body: web::Json<CommissionMemberRequest>,
) -> Result<HttpResponse, AppError> {
    let commission_id = path.into_inner();
    let member_id = body
        .member_id
        .ok_or_else(|| AppError::Validation("memberId is required".to_string()))?;

    commission::find_by_id(&pool, commission_id)
        .await?
        .ok_or(AppError::NotFound("Commission"))?;
    member::find_detail(&pool, member_id)
        .await?
        .ok_or(AppError::NotFound("Member"))?;

    let duty = body.duty.as_deref().unwrap_or("");
    let membership = commission::add_member(&pool, commission_id, member_id, duty).await?;
    Ok(HttpResponse::Created().json(membership))
}

/// PUT /api/v1/commissions/{id}/members - Update a membership's duty.
/// Memberships belonging to another commission are reported as not found.
pub async fn update_member(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
    body: web::Json<CommissionMemberUpdateRequest>,
) -> Result<HttpResponse, AppError> {
    let commission_id = path.into_inner();
    let membership_id = body
        .membership_id
        .ok_or_else(|| AppError::Validation("membershipId is required".to_string()))?;

    let existing = commission::find_membership(&pool, membership_id)
        .await?
        .filter(|m| m.commission_id == commission_id)
        .ok_or(AppError::NotFound("Commission membership"))?;

    let duty = body.duty.as_deref().unwrap_or("");
    commission::update_member_duty(&pool, existing.id, duty).await?;
    let updated = commission::find_membership(&pool, existing.id)
        .await?
        .ok_or(AppError::NotFound("Commission membership"))?;
    Ok(HttpResponse::Ok().json(updated))
}

/// DELETE /api/v1/commissions/{id}/members?membershipId=N - Remove a member
/// from the commission.
pub async fn remove_member(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
    query: web::Query<HashMap<String, String>>,
) -> Result<HttpResponse, AppError> {
    let commission_id = path.into_inner();
    let membership_id: i64 = query
        .get("membershipId")
        .and_then(|v| v.parse().ok())
        .ok_or_else(|| AppError::Validation("membershipId is required".to_string()))?;

    let existing = commission::find_membership(&pool, membership_id)
        .await?
        .filter(|m| m.commission_id == commission_id)
        .ok_or(AppError::NotFound("Commission membership"))?;

    commission::remove_member(&pool, existing.id).await?;
    Ok(HttpResponse::Ok().json(ApiMessageResponse::new("Member removed from commission")))
}
