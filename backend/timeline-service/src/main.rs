use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpResponse, HttpServer};
use sqlx::postgres::PgPoolOptions;
use std::io;
use std::sync::Arc;
use timeline_service::db::{ContentStore, PgContentStore};
use timeline_service::handlers;
use timeline_service::services::{GeminiClient, SummaryProvider};
use timeline_service::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

async fn health_summary(pool: web::Data<sqlx::PgPool>) -> HttpResponse {
    match sqlx::query("SELECT 1").execute(pool.get_ref()).await {
        Ok(_) => HttpResponse::Ok().json(serde_json::json!({
            "status": "ok",
            "service": "timeline-service",
            "version": env!("CARGO_PKG_VERSION")
        })),
        Err(e) => HttpResponse::ServiceUnavailable().json(serde_json::json!({
            "status": "unhealthy",
            "error": format!("PostgreSQL connection failed: {}", e),
            "service": "timeline-service"
        })),
    }
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=debug,sqlx=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Configuration loading failed: {:#}", e);
            eprintln!("ERROR: Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Starting timeline-service v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {}", config.app.env);

    // Initialize database connection pool
    let db_pool = match PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await
    {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Database pool creation failed: {:#}", e);
            eprintln!("ERROR: Failed to create database pool: {}", e);
            std::process::exit(1);
        }
    };

    // Verify database connection
    if let Err(e) = sqlx::query("SELECT 1").execute(&db_pool).await {
        tracing::error!("Database connection verification failed: {:#}", e);
        return Err(io::Error::new(
            io::ErrorKind::ConnectionRefused,
            format!("database verification failed: {}", e),
        ));
    }
    tracing::info!("Database pool created and verified");

    // Run database migrations
    sqlx::migrate!("./migrations")
        .run(&db_pool)
        .await
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("migration failed: {}", e)))?;
    tracing::info!("Database migrations completed");

    // Store gateway and generation provider, constructed once and injected
    // into every handler
    let store: Arc<dyn ContentStore> = Arc::new(PgContentStore::new(db_pool.clone()));
    let provider: Arc<dyn SummaryProvider> = Arc::new(
        GeminiClient::from_config(&config.gemini)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?,
    );
    tracing::info!(model = %config.gemini.model, "Generation provider initialized");

    let store_data = web::Data::from(store);
    let provider_data = web::Data::from(provider);

    let bind_address = format!("{}:{}", config.app.host, config.app.port);
    tracing::info!("Starting HTTP server at {}", bind_address);

    let allowed_origins = config.cors.allowed_origins.clone();

    HttpServer::new(move || {
        // Build CORS configuration
        let mut cors = Cors::default();
        for origin in allowed_origins.split(',') {
            let origin = origin.trim();
            if origin == "*" {
                cors = cors.allow_any_origin();
            } else {
                cors = cors.allowed_origin(origin);
            }
        }
        cors = cors.allow_any_method().allow_any_header().max_age(3600);

        App::new()
            .app_data(web::Data::new(db_pool.clone()))
            .app_data(store_data.clone())
            .app_data(provider_data.clone())
            .wrap(cors)
            .wrap(Logger::default())
            .wrap(tracing_actix_web::TracingLogger::default())
            .route("/api/health", web::get().to(health_summary))
            .service(
                web::scope("/api")
                    .route("/login", web::post().to(handlers::login))
                    .service(
                        web::resource("/posts")
                            .route(web::get().to(handlers::get_feed))
                            .route(web::post().to(handlers::create_post)),
                    )
                    .route("/replies", web::post().to(handlers::create_reply))
                    .route("/likes", web::post().to(handlers::create_like))
                    .route("/summary/{post_id}", web::get().to(handlers::get_summary)),
            )
    })
    .bind(&bind_address)?
    .workers(4)
    .run()
    .await
}
