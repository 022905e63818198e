use axum::{routing::get, Router};
use std::net::SocketAddr;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod constants;
mod error;
mod handlers;
mod middleware;
mod models;
mod scheduling;
mod site;
mod validation;

use config::Config;
use site::SITE;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "blogsite=debug,tower_http=debug,axum=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    // Refuse to serve broken site data
    validation::validate_site_data()?;
    tracing::info!(
        "Site data OK: {} active socials, {} skills",
        site::active_socials().count(),
        site::SKILLS.len()
    );

    // Store port before moving config
    let port = config.port;

    // Build application state
    let app_state = std::sync::Arc::new(config);

    // Rate limiting - config reads are cheap but still metered per IP
    let rate_limit_config = GovernorConfigBuilder::default()
        .per_second(2) // 2 requests per second
        .burst_size(10) // Allow burst of 10
        .finish()
        .ok_or_else(|| anyhow::anyhow!("Failed to build rate limit config"))?;

    let rate_limit_layer = GovernorLayer {
        config: std::sync::Arc::new(rate_limit_config),
    };

    // Build router
    let app = Router::new()
        // API routes
        .route("/api/health", get(handlers::health))
        .route("/api/config", get(handlers::site_config))
        .route("/api/config/site", get(handlers::site_descriptor))
        .route("/api/config/locale", get(handlers::locale))
        .route("/api/config/logo", get(handlers::logo))
        .route("/api/socials", get(handlers::socials))
        .route("/api/socials/:name", get(handlers::social_by_name))
        .route("/api/skills", get(handlers::skills))
        .route("/api/schedule/check", get(handlers::schedule_check))
        // API docs
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", handlers::ApiDoc::openapi()))
        .layer(axum::middleware::from_fn(middleware::security_headers))
        .layer(TraceLayer::new_for_http())
        .layer(rate_limit_layer)
        .with_state(app_state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("📝 {} config API listening on {}", SITE.title, addr);
    tracing::info!("📖 API docs available at http://{}/docs", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
