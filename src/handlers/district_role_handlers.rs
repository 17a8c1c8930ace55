use actix_web::{web, HttpResponse};
use sqlx::SqlitePool;

use crate::db;
use crate::errors::{unique_violation, AppError};
use crate::models::district_role::{self, DistrictRoleDetail, DistrictRoleRequest};
use crate::models::ApiMessageResponse;

fn validate(req: &DistrictRoleRequest) -> Result<(), AppError> {
    if req.name.trim().is_empty() {
        return Err(AppError::Validation("Role name is required".to_string()));
    }
    Ok(())
}

/// GET /api/v1/district-roles - List roles in display order.
pub async fn list(pool: web::Data<SqlitePool>) -> Result<HttpResponse, AppError> {
    let roles = district_role::find_all(&pool).await?;
    Ok(HttpResponse::Ok().json(roles))
}

/// GET /api/v1/district-roles/{id} - Role detail with its holders.
pub async fn read(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let role_id = path.into_inner();
    let role = district_role::find_by_id(&pool, role_id)
        .await?
        .ok_or(AppError::NotFound("District role"))?;
    let members = district_role::find_holders(&pool, role_id).await?;
    Ok(HttpResponse::Ok().json(DistrictRoleDetail { role, members }))
}

/// POST /api/v1/district-roles - Create a role; names are unique.
pub async fn create(
    pool: web::Data<SqlitePool>,
    body: web::Json<DistrictRoleRequest>,
) -> Result<HttpResponse, AppError> {
    validate(&body)?;

    let id = district_role::create(&pool, &body)
        .await
        .map_err(|e| unique_violation(e, "A district role with this name already exists"))?;
    let created = district_role::find_by_id(&pool, id)
        .await?
        .ok_or(AppError::NotFound("District role"))?;
    Ok(HttpResponse::Created().json(created))
}

/// PUT /api/v1/district-roles/{id}
pub async fn update(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
    body: web::Json<DistrictRoleRequest>,
) -> Result<HttpResponse, AppError> {
    validate(&body)?;

    let role_id = path.into_inner();
    let found = district_role::update(&pool, role_id, &body)
        .await
        .map_err(|e| unique_violation(e, "A district role with this name already exists"))?;
    if !found {
        return Err(AppError::NotFound("District role"));
    }
    let updated = district_role::find_by_id(&pool, role_id)
        .await?
        .ok_or(AppError::NotFound("District role"))?;
    Ok(HttpResponse::Ok().json(updated))
}

/// DELETE /api/v1/district-roles/{id} - Holders keep their membership but
/// lose the role.
pub async fn delete(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    if district_role::delete(&pool, path.into_inner()).await? == 0 {
        return Err(AppError::NotFound("District role"));
    }
    Ok(HttpResponse::Ok().json(ApiMessageResponse::new("District role deleted")))
}

/// POST /api/v1/district-roles/seed - Create the default roles; existing
/// names are left untouched.
pub async fn seed(pool: web::Data<SqlitePool>) -> Result<HttpResponse, AppError> {
    let created = db::seed_district_roles(&pool).await?;
    let roles = district_role::find_all(&pool).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": format!("{created} default role(s) created"),
        "roles": roles,
    })))
}
