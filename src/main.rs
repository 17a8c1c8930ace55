use actix_web::{middleware, web, App, HttpServer};

use yoklama::handlers;
use yoklama::handlers::attendance_handlers::RosterCache;
use yoklama::{config::AppConfig, db};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = AppConfig::from_env();

    // Ensure data directory exists for the default database location
    std::fs::create_dir_all("data").expect("Failed to create data directory");

    // Initialize database
    let pool = db::init_pool(&config.database_url)
        .await
        .expect("Failed to create DB pool");
    db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");
    db::seed_district_roles(&pool)
        .await
        .expect("Failed to seed district roles");

    let roster_cache = web::Data::new(RosterCache::new(config.roster_cache_ttl));
    let leadership = web::Data::new(config.leadership_roles.clone());

    log::info!("Starting server at http://{}", config.bind_addr);

    let bind_addr = config.bind_addr.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(pool.clone()))
            .app_data(roster_cache.clone())
            .app_data(leadership.clone())
            .route(
                "/health",
                web::get().to(|| async {
                    actix_web::HttpResponse::Ok().json(serde_json::json!({"status": "ok"}))
                }),
            )
            .service(web::scope("/api/v1").configure(handlers::configure))
    })
    .bind(bind_addr)?
    .run()
    .await
}
