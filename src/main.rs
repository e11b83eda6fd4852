use std::sync::Arc;

use axum::{routing::get, routing::post, Extension, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use folio_api::cache::{HttpCacheInvalidator, NoopCacheInvalidator, SharedCacheInvalidator};
use folio_api::database::DatabaseManager;
use folio_api::middleware::admin_auth_middleware;

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    // Initialize configuration (this loads the config singleton)
    let config = folio_api::config::config();

    tracing_subscriber::fmt::init();
    tracing::info!("Starting folio API in {:?} mode", config.environment);

    let app = app();

    // Allow tests or deployments to override port via env
    let port = std::env::var("FOLIO_API_PORT")
        .ok()
        .or_else(|| std::env::var("PORT").ok())
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(4000);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    println!("folio API server listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}

fn app() -> Router {
    // Without a configured revalidate hook there is nothing to invalidate
    let invalidator: SharedCacheInvalidator =
        match folio_api::config::config().cache.revalidate_url {
            Some(_) => Arc::new(HttpCacheInvalidator::new()),
            None => Arc::new(NoopCacheInvalidator),
        };

    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        .merge(portfolio_routes())
        // Admin console API (role-gated)
        .merge(admin_routes(invalidator))
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

fn portfolio_routes() -> Router {
    use folio_api::handlers::public::portfolio;

    Router::new().route("/api/portfolio/:entity", get(portfolio::entity_list))
}

fn admin_routes(invalidator: SharedCacheInvalidator) -> Router {
    use folio_api::handlers::admin::{bulk, duplicate, list, record};

    Router::new()
        // Entity-level operations (collection)
        .route(
            "/api/admin/:entity",
            get(list::entity_list).post(record::create),
        )
        // Batched mutations
        .route("/api/admin/:entity/bulk", post(bulk::bulk_mutate))
        // Record-level operations (individual)
        .route(
            "/api/admin/:entity/:id",
            get(record::show)
                .patch(record::update)
                .delete(record::destroy),
        )
        .route(
            "/api/admin/:entity/:id/duplicate",
            post(duplicate::duplicate),
        )
        .layer(axum::middleware::from_fn(admin_auth_middleware))
        .layer(Extension(invalidator))
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "success": true,
        "data": {
            "name": "folio API",
            "version": version,
            "description": "Bilingual portfolio backend with an admin console API (Axum)",
            "endpoints": {
                "home": "/ (public)",
                "portfolio": "/api/portfolio/:entity (public)",
                "admin": "/api/admin/:entity[/:id] (admin token required)",
                "bulk": "/api/admin/:entity/bulk (admin token required)",
                "duplicate": "/api/admin/:entity/:id/duplicate (admin token required)",
            }
        }
    }))
}

async fn health() -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match DatabaseManager::health_check().await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            axum::response::Json(json!({
                "success": true,
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "database": "ok"
                }
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            axum::response::Json(json!({
                "success": false,
                "error": "database unavailable",
                "data": {
                    "status": "degraded",
                    "timestamp": now,
                    "database_error": e.to_string()
                }
            })),
        ),
    }
}
