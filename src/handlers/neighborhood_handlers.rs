use actix_web::{web, HttpResponse};
use sqlx::SqlitePool;

use crate::errors::AppError;
use crate::models::neighborhood::{self, NeighborhoodRequest};
use crate::models::ApiMessageResponse;

fn validate(req: &NeighborhoodRequest) -> Result<(), AppError> {
    if req.name.trim().is_empty() {
        return Err(AppError::Validation(
            "Neighborhood name is required".to_string(),
        ));
    }
    Ok(())
}

/// GET /api/v1/neighborhoods - List neighborhoods with chairs and
/// responsible members.
pub async fn list(pool: web::Data<SqlitePool>) -> Result<HttpResponse, AppError> {
    let neighborhoods = neighborhood::find_all(&pool).await?;
    Ok(HttpResponse::Ok().json(neighborhoods))
}

/// GET /api/v1/neighborhoods/{id}
pub async fn read(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let detail = neighborhood::find_detail(&pool, path.into_inner())
        .await?
        .ok_or(AppError::NotFound("Neighborhood"))?;
    Ok(HttpResponse::Ok().json(detail))
}

/// POST /api/v1/neighborhoods
pub async fn create(
    pool: web::Data<SqlitePool>,
    body: web::Json<NeighborhoodRequest>,
) -> Result<HttpResponse, AppError> {
    validate(&body)?;

    let id = neighborhood::create(&pool, &body).await?;
    let created = neighborhood::find_detail(&pool, id)
        .await?
        .ok_or(AppError::NotFound("Neighborhood"))?;
    Ok(HttpResponse::Created().json(created))
}

/// PUT /api/v1/neighborhoods/{id}
pub async fn update(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
    body: web::Json<NeighborhoodRequest>,
) -> Result<HttpResponse, AppError> {
    validate(&body)?;

    let id = path.into_inner();
    if !neighborhood::update(&pool, id, &body).await? {
        return Err(AppError::NotFound("Neighborhood"));
    }
    let updated = neighborhood::find_detail(&pool, id)
        .await?
        .ok_or(AppError::NotFound("Neighborhood"))?;
    Ok(HttpResponse::Ok().json(updated))
}

/// DELETE /api/v1/neighborhoods/{id}
pub async fn delete(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    if neighborhood::delete(&pool, path.into_inner()).await? == 0 {
        return Err(AppError::NotFound("Neighborhood"));
    }
    Ok(HttpResponse::Ok().json(ApiMessageResponse::new("Neighborhood deleted")))
}
