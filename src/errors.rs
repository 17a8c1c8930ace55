use actix_web::{HttpResponse, ResponseError};
use std::fmt;

use crate::models::ApiErrorResponse;

#[derive(Debug)]
pub enum AppError {
    Db(sqlx::Error),
    NotFound(&'static str),
    Validation(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Db(e) => write!(f, "Database error: {e}"),
            AppError::NotFound(what) => write!(f, "{what} not found"),
            AppError::Validation(msg) => write!(f, "{msg}"),
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::NotFound(_) => HttpResponse::NotFound().json(ApiErrorResponse {
                error: self.to_string(),
                details: None,
            }),
            AppError::Validation(_) => HttpResponse::BadRequest().json(ApiErrorResponse {
                error: self.to_string(),
                details: None,
            }),
            AppError::Db(_) => {
                log::error!("{self}");
                HttpResponse::InternalServerError().json(ApiErrorResponse {
                    error: "Internal Server Error".to_string(),
                    details: None,
                })
            }
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::Db(e)
    }
}

/// Map a uniqueness violation to a caller error; everything else stays a
/// store failure.
pub fn unique_violation(e: sqlx::Error, msg: &str) -> AppError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return AppError::Validation(msg.to_string());
        }
    }
    AppError::Db(e)
}
