use std::net::SocketAddr;
use std::sync::Arc;

use atlas_core::source::AtlasSource;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use atlas_api::config::{LogFormat, ServerConfig};
use atlas_api::router::build_app_router;
use atlas_api::service::AtlasService;
use atlas_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Configuration ---
    let config = ServerConfig::from_env().expect("Invalid server configuration");

    // --- Tracing ---
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "atlas_api=debug,atlas_db=debug,tower_http=debug".into());
    match config.log_format {
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }

    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Row store ---
    let source = connect_source(&config).await;
    let mut atlas = AtlasService::new(source);
    if let Some(db) = &config.database {
        atlas = atlas.with_fetch_timeout(db.fetch_timeout());
    }

    // --- App state ---
    let state = AppState { atlas };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Build the row source from configuration.
///
/// Returns `None` when no `DATABASE_URL` is set. The pool connects lazily,
/// so an unreachable database at startup is logged and the service starts
/// anyway; requests fall back to static content until it comes up.
async fn connect_source(config: &ServerConfig) -> Option<Arc<dyn AtlasSource>> {
    let Some(db) = &config.database else {
        tracing::warn!("DATABASE_URL not set, serving static atlas content only");
        return None;
    };

    let pool = match atlas_db::create_pool(&db.url, db.pool_settings()) {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!(error = %e, "Invalid DATABASE_URL, serving static atlas content only");
            return None;
        }
    };
    tracing::info!(max_connections = db.max_connections, "Database connection pool created");

    match atlas_db::health_check(&pool).await {
        Ok(()) => {
            tracing::info!("Database health check passed");
            if db.run_migrations {
                match atlas_db::run_migrations(&pool).await {
                    Ok(()) => tracing::info!("Database migrations applied"),
                    Err(e) => tracing::error!(error = %e, "Failed to run database migrations"),
                }
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, "Database unreachable at startup, migrations skipped");
        }
    }

    Some(Arc::new(atlas_db::PgAtlasSource::new(pool)))
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server
/// shuts down cleanly whether stopped interactively or by a process
/// manager.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
