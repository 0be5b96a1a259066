//! Student Registry Backend
//!
//! Registers student profiles through a validated form, keeps the collection in a
//! SQLite key-value slot, and serves card/table views with live search.

mod api;
mod config;
mod errors;
mod form;
mod models;
mod registry;
mod storage;
mod view;

use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};
use tokio::sync::Mutex;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use form::FormController;
use models::FormOptions;
use registry::ProfileStore;
use storage::{ProfilePersistence, SqliteStore};

/// The registry as served: form controller over SQLite storage.
pub type Registry = FormController<SqliteStore>;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// One interaction at a time runs against the registry.
    pub registry: Arc<Mutex<Registry>>,
}

impl AppState {
    /// Open storage, load the persisted collection and render the initial views.
    pub async fn open(config: &Config) -> Result<Self, errors::AppError> {
        let kv = SqliteStore::open(&config.db_path).await?;
        let persistence = ProfilePersistence::new(kv, config.storage_key.clone());
        let store = ProfileStore::open(persistence, config.placeholder_photo_url.clone()).await?;

        let options = FormOptions {
            programmes: config.programmes.clone(),
            years: config.years.clone(),
        };
        let registry = FormController::new(store, options, config.announcement_ttl);

        Ok(Self {
            registry: Arc::new(Mutex::new(registry)),
        })
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Student Registry Backend");
    tracing::info!("Database path: {:?}", config.db_path);
    tracing::info!("Storage key: {}", config.storage_key);
    tracing::info!("Bind address: {}", config.bind_addr);

    let state = AppState::open(&config).await?;

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        // Page state
        .route("/registry", get(api::get_registry))
        .route("/search", get(api::search_profiles))
        // Form surface
        .route("/form/submit", post(api::submit_form))
        .route("/form/{field}", put(api::set_field))
        .route("/form/{field}/validate", post(api::validate_field))
        // Profiles
        .route("/profiles", get(api::list_profiles))
        .route(
            "/profiles/{id}",
            get(api::get_profile).delete(api::delete_profile),
        )
        .route("/profiles/{id}/edit", post(api::edit_profile));

    // Health check
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
