//! Product Transaction Service - Main Application Entry Point
//!
//! This is a REST API server over a collection of product-sale records. It seeds the collection from an upstream JSON feed and serves a searchable, paginated listing plus per-month sales statistics.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Database**: SQLite with sqlx (async queries)
//! - **Upstream**: Third-party HTTP feed fetched with reqwest
//! - **Format**: JSON responses (plain text for the seed confirmation)
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Create database connection pool
//! 3. Run database migrations
//! 4. Build HTTP router with routes and middleware
//! 5. Start server on configured port

mod config;
mod db;
mod error;
mod handlers;
mod models;
mod services;

use tracing_subscriber::EnvFilter;

use axum::{Router, routing::get};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Shared application state injected into every handler.
///
/// Built once at startup and cloned per request by Axum's State extractor
/// (the pool and client both clone cheaply). Passing the handle through
/// state keeps the store connection out of ambient global scope.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub pool: db::DbPool,

    /// HTTP client used to fetch the seed feed (30 second timeout)
    pub http: reqwest::Client,

    /// Upstream URL serving the seed JSON array
    pub seed_source_url: String,
}

/// Build the application router.
///
/// # Routes
///
/// - `GET /initialize` - seed the collection from the upstream feed
/// - `GET /transactions` - searchable, paginated listing
/// - `GET /statistics/{month}` - per-month sales summary
/// - `GET /health` - service and database status
///
/// All routes are public; the API has no authentication surface.
fn app(state: AppState) -> Router {
    Router::new()
        .route("/initialize", get(handlers::seed::initialize))
        .route(
            "/transactions",
            get(handlers::transactions::list_transactions),
        )
        .route(
            "/statistics/{month}",
            get(handlers::statistics::monthly_statistics),
        )
        .route("/health", get(handlers::health::health_check))
        // Add distributed tracing middleware for observability
        .layer(TraceLayer::new_for_http())
        // The listing and statistics endpoints back a browser dashboard
        .layer(CorsLayer::permissive())
        // Share state with all handlers via State extraction
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with tracing subscriber. Reads RUST_LOG environment variable (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Load configuration
    let config = config::Config::from_env()?;
    tracing::info!("Configuration loaded");

    // Create database pool
    let pool = db::create_pool(&config.database_url).await?;
    tracing::info!("Database pool created");

    // Run migrations
    db::run_migrations(&pool).await?;
    tracing::info!("Database migrations complete");

    // Shared client for the seed fetch; the timeout bounds how long
    // /initialize can hang on a stalled upstream
    let http = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(30))
        .build()?;

    let app = app(AppState {
        pool,
        http,
        seed_source_url: config.seed_source_url,
    });

    // Bind to network address and start server
    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    // Start serving HTTP requests
    // This blocks forever, handling requests concurrently with tokio
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::seed_service::{
        insert_transactions,
        tests::{feed_body, fixture_records, spawn_feed, test_pool},
    };
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    async fn test_state(seed_source_url: &str) -> AppState {
        AppState {
            pool: test_pool().await,
            http: reqwest::Client::new(),
            seed_source_url: seed_source_url.to_string(),
        }
    }

    async fn get_raw(router: &Router, uri: &str) -> (StatusCode, String) {
        let req = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let resp = router.clone().oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), 1024 * 1024)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    async fn get_json(router: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let (status, body) = get_raw(router, uri).await;
        (status, serde_json::from_str(&body).unwrap())
    }

    #[tokio::test]
    async fn initialize_seeds_and_confirms() {
        let records = fixture_records(3);
        let url = spawn_feed(feed_body(&records)).await;
        let router = app(test_state(&url).await);

        let (status, body) = get_raw(&router, "/initialize").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "Database initialized successfully!");

        let (status, listed) = get_json(&router, "/transactions").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(listed.as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn initialize_with_dead_upstream_is_502() {
        // Bind then drop to get a port with nothing listening.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let router = app(test_state(&format!("http://{addr}/feed.json")).await);

        let (status, body) = get_json(&router, "/initialize").await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"]["code"], "upstream_unavailable");
    }

    #[tokio::test]
    async fn listing_defaults_to_first_ten_in_store_order() {
        let state = test_state("http://unused.invalid/").await;
        insert_transactions(&state.pool, &fixture_records(12))
            .await
            .unwrap();
        let router = app(state);

        let (status, body) = get_json(&router, "/transactions").await;
        assert_eq!(status, StatusCode::OK);

        let page = body.as_array().unwrap();
        assert_eq!(page.len(), 10);
        assert_eq!(page[0]["id"], 1);
        assert_eq!(page[9]["id"], 10);
        // Wire names are camelCase, as in the upstream feed.
        assert_eq!(page[0]["productId"], "P-0001");
        assert_eq!(page[0]["productName"], "Fixture product 1");
    }

    #[tokio::test]
    async fn listing_honors_page_and_per_page() {
        let state = test_state("http://unused.invalid/").await;
        insert_transactions(&state.pool, &fixture_records(12))
            .await
            .unwrap();
        let router = app(state);

        let (status, body) = get_json(&router, "/transactions?page=2&perPage=5").await;
        assert_eq!(status, StatusCode::OK);

        let ids: Vec<i64> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["id"].as_i64().unwrap())
            .collect();
        assert_eq!(ids, vec![6, 7, 8, 9, 10]);
    }

    #[tokio::test]
    async fn listing_searches_names_and_prices() {
        let state = test_state("http://unused.invalid/").await;
        insert_transactions(&state.pool, &fixture_records(5))
            .await
            .unwrap();
        let router = app(state);

        let (status, by_name) = get_json(&router, "/transactions?search=product%203").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(by_name.as_array().unwrap().len(), 1);
        assert_eq!(by_name[0]["productName"], "Fixture product 3");

        let (status, by_price) = get_json(&router, "/transactions?search=31.5").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(by_price.as_array().unwrap().len(), 1);
        assert_eq!(by_price[0]["productPrice"], 31.5);
    }

    #[tokio::test]
    async fn listing_rejects_zero_page() {
        let router = app(test_state("http://unused.invalid/").await);

        let (status, body) = get_json(&router, "/transactions?page=0").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "invalid_request");
    }

    #[tokio::test]
    async fn statistics_reports_month_summary() {
        let state = test_state("http://unused.invalid/").await;
        // All fixtures sell in January: prices 10.5..52.5, quantities 1..5.
        insert_transactions(&state.pool, &fixture_records(5))
            .await
            .unwrap();
        let router = app(state);

        let (status, body) = get_json(&router, "/statistics/1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["totalSaleAmount"], 157.5);
        assert_eq!(body["totalSoldItems"], 15);
        // 5 matching rows minus 15 units sold: the contract formula.
        assert_eq!(body["totalNotSoldItems"], -10);
    }

    #[tokio::test]
    async fn statistics_for_empty_month_is_all_zeros() {
        let state = test_state("http://unused.invalid/").await;
        insert_transactions(&state.pool, &fixture_records(5))
            .await
            .unwrap();
        let router = app(state);

        let (status, body) = get_json(&router, "/statistics/4").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["totalSaleAmount"], 0.0);
        assert_eq!(body["totalSoldItems"], 0);
        assert_eq!(body["totalNotSoldItems"], 0);
    }

    #[tokio::test]
    async fn statistics_rejects_bad_months() {
        let router = app(test_state("http://unused.invalid/").await);

        for uri in ["/statistics/0", "/statistics/13", "/statistics/november"] {
            let (status, body) = get_json(&router, uri).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "uri {uri}");
            assert_eq!(body["error"]["code"], "invalid_request");
        }
    }

    #[tokio::test]
    async fn health_reports_connected_database() {
        let router = app(test_state("http://unused.invalid/").await);

        let (status, body) = get_json(&router, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["database"], "connected");
    }
}
