pub mod attendance_handlers;
pub mod commission_handlers;
pub mod district_role_handlers;
pub mod event_handlers;
pub mod member_handlers;
pub mod neighborhood_handlers;

use actix_web::{
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    middleware::Next,
    web, Error, HttpResponse,
};

/// CSRF protection for REST API mutation endpoints.
///
/// Rejects POST/PUT/DELETE requests that don't have Content-Type:
/// application/json. Browsers cannot send cross-origin JSON with cookies via
/// simple form POST — the Content-Type check acts as a CSRF guard without
/// requiring tokens. GET requests are exempt (read-only, no state changes).
async fn require_json_content_type(
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    let method = req.method().clone();

    if method == actix_web::http::Method::POST
        || method == actix_web::http::Method::PUT
        || method == actix_web::http::Method::DELETE
    {
        let content_type = req
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");

        if !content_type.starts_with("application/json") {
            let body = serde_json::json!({
                "error": "Content-Type must be application/json for mutation requests"
            });
            let response = HttpResponse::BadRequest().json(body);
            return Ok(req.into_response(response).map_into_right_body());
        }
    }

    next.call(req).await.map(|res| res.map_into_left_body())
}

/// Configure API v1 routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/members")
            .wrap(actix_web::middleware::from_fn(require_json_content_type))
            .route("", web::get().to(member_handlers::list))
            .route("", web::post().to(member_handlers::create))
            .route("/{id}", web::get().to(member_handlers::read))
            .route("/{id}", web::put().to(member_handlers::update))
            .route("/{id}", web::delete().to(member_handlers::delete)),
    );
    cfg.service(
        web::scope("/neighborhoods")
            .wrap(actix_web::middleware::from_fn(require_json_content_type))
            .route("", web::get().to(neighborhood_handlers::list))
            .route("", web::post().to(neighborhood_handlers::create))
            .route("/{id}", web::get().to(neighborhood_handlers::read))
            .route("/{id}", web::put().to(neighborhood_handlers::update))
            .route("/{id}", web::delete().to(neighborhood_handlers::delete)),
    );
    cfg.service(
        web::scope("/commissions")
            .wrap(actix_web::middleware::from_fn(require_json_content_type))
            .route("", web::get().to(commission_handlers::list))
            .route("", web::post().to(commission_handlers::create))
            .route("/{id}", web::get().to(commission_handlers::read))
            .route("/{id}", web::put().to(commission_handlers::update))
            .route("/{id}", web::delete().to(commission_handlers::delete))
            .route("/{id}/members", web::post().to(commission_handlers::add_member))
            .route("/{id}/members", web::put().to(commission_handlers::update_member))
            .route("/{id}/members", web::delete().to(commission_handlers::remove_member)),
    );
    cfg.service(
        web::scope("/district-roles")
            .wrap(actix_web::middleware::from_fn(require_json_content_type))
            .route("", web::get().to(district_role_handlers::list))
            .route("", web::post().to(district_role_handlers::create))
            .route("/seed", web::post().to(district_role_handlers::seed))
            .route("/{id}", web::get().to(district_role_handlers::read))
            .route("/{id}", web::put().to(district_role_handlers::update))
            .route("/{id}", web::delete().to(district_role_handlers::delete)),
    );
    cfg.service(
        web::scope("/events")
            .wrap(actix_web::middleware::from_fn(require_json_content_type))
            .route("", web::get().to(event_handlers::list))
            .route("", web::post().to(event_handlers::create))
            .route("/{id}", web::get().to(event_handlers::read))
            .route("/{id}", web::put().to(event_handlers::update))
            .route("/{id}", web::delete().to(event_handlers::delete))
            .route("/{id}/attendance", web::get().to(attendance_handlers::roster))
            .route("/{id}/attendance", web::post().to(attendance_handlers::record))
            .route("/{id}/attendance", web::delete().to(attendance_handlers::delete)),
    );
}
