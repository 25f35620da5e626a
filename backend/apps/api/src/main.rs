//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; request-level errors are
//! `users::UsersError`, rendered through `kernel::error::AppError`.

use anyhow::Context;
use axum::{
    Router, http,
    http::{Method, header},
};
use platform::http_client::{HttpClientConfig, build_client};
use sqlx::postgres::PgPoolOptions;
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use users::{HttpProfileService, PgUserRepository, UsersConfig, users_router};

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_PROFILE_TIMEOUT_SECS: u64 = 5;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,users=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // Users configuration
    let config = load_users_config()?;
    tracing::info!(
        profile_service_url = %config.profile_service_url,
        request_timeout_ms = config.profile_http.request_timeout.as_millis() as u64,
        "Profile Service configured"
    );

    let client = build_client(&config.profile_http).context("failed to build HTTP client")?;
    let profiles = HttpProfileService::new(client, Arc::new(config.clone()));
    let repo = PgUserRepository::new(pool);

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:5173,http://127.0.0.1:5173".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]));

    // Build router
    let app = Router::new()
        .merge(users_router(repo, profiles, config))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let addr: SocketAddr = env::var("LISTEN_ADDR")
        .unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string())
        .parse()
        .context("LISTEN_ADDR must be a socket address")?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the users configuration from the environment
fn load_users_config() -> anyhow::Result<UsersConfig> {
    let secret = env::var("JWT_SECRET_KEY").context("JWT_SECRET_KEY must be set")?;
    let profile_service_url =
        env::var("PROFILE_SERVICE_URL").context("PROFILE_SERVICE_URL must be set")?;

    let timeout_secs = match env::var("PROFILE_SERVICE_TIMEOUT_SECS") {
        Ok(raw) => raw
            .parse::<u64>()
            .context("PROFILE_SERVICE_TIMEOUT_SECS must be a whole number of seconds")?,
        Err(_) => DEFAULT_PROFILE_TIMEOUT_SECS,
    };

    let mut config = UsersConfig::new(secret, profile_service_url);
    config.profile_http = HttpClientConfig {
        request_timeout: Duration::from_secs(timeout_secs),
        ..HttpClientConfig::default()
    };
    config.password_pepper = env::var("PASSWORD_PEPPER")
        .ok()
        .filter(|pepper| !pepper.is_empty())
        .map(String::into_bytes);

    Ok(config)
}
