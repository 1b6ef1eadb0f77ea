//! Larder Engine - Main entry point.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::{HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod app;
mod infrastructure;
mod use_cases;

use app::App;
use infrastructure::{
    http_store::HttpRecordStore, in_memory::InMemoryRecordStore, ports::RecordStore,
};
use use_cases::InventoryTracker;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root (the engine runs from `crates/engine`).
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "larder_engine=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Larder Engine");

    // Load configuration
    let store_url =
        std::env::var("STORE_URL").unwrap_or_else(|_| "http://localhost:8984".into());
    let collection = std::env::var("STORE_COLLECTION").unwrap_or_else(|_| "inventory".into());
    let server_host = std::env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".into());
    let server_port: u16 = std::env::var("SERVER_PORT")
        .or_else(|_| std::env::var("PORT"))
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .unwrap_or(3000);

    // Select the record store backend
    let store: Arc<dyn RecordStore> = if store_url == "memory" {
        tracing::info!("Using in-memory record store");
        Arc::new(InMemoryRecordStore::new())
    } else {
        tracing::info!("Using record store at {} (collection {})", store_url, collection);
        let base_url = reqwest::Url::parse(&store_url)?;
        Arc::new(HttpRecordStore::new(base_url, collection))
    };

    // Create the tracker and pull the initial snapshot. A failure here is
    // not fatal: the next successful action resynchronizes.
    let tracker = Arc::new(InventoryTracker::new(store));
    if let Err(e) = tracker.refresh().await {
        tracing::warn!(
            error = %e,
            "Initial synchronization failed, starting with an empty snapshot"
        );
    }

    // Create application
    let app = Arc::new(App::new(tracker));

    // Build router
    let mut router = api::http::routes()
        .with_state(app)
        .layer(TraceLayer::new_for_http());

    if let Some(cors) = build_cors_layer_from_env() {
        router = router.layer(cors);
    }

    // Start server
    let addr: SocketAddr = format!("{server_host}:{server_port}").parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}

fn build_cors_layer_from_env() -> Option<CorsLayer> {
    let allowed_origins = std::env::var("CORS_ALLOWED_ORIGINS")
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())?;

    let mut cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        // JSON bodies trigger CORS preflights.
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    if allowed_origins == "*" {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .filter_map(|s| HeaderValue::from_str(s).ok())
            .collect();

        if origins.is_empty() {
            return None;
        }

        cors = cors.allow_origin(origins);
    }

    Some(cors)
}
