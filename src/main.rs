use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, http::HeaderValue};
use lupe_backend::{app_router, AppState, Config, FileStorage, SpleeterSeparator};
use tower_http::{
    cors::{AllowHeaders, AllowMethods, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Uploads are whole audio files; axum's default body limit is far too small.
const MAX_UPLOAD_BYTES: usize = 100 * 1024 * 1024;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("lupe_backend=info,tower_http=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Arc::new(Config::from_env()?);

    let storage = FileStorage::new(&config.uploads_dir, &config.temp_dir)?;
    let separator = SpleeterSeparator::new(&config.spleeter_container);

    // Credentialed CORS restricted to the frontend origin; wildcard methods
    // and headers are not allowed alongside credentials, so mirror instead.
    let origin: HeaderValue = config.frontend_url.parse()?;
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request());

    let state = AppState {
        config: config.clone(),
        storage: Arc::new(storage),
        separator: Arc::new(separator),
    };

    let app = app_router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES));

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, container = %config.spleeter_container, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install ctrl-c handler");
    info!("shutting down");
}
