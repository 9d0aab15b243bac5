use std::net::SocketAddr;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use oro_api::config::ServerConfig;
use oro_api::router::build_app_router;
use oro_api::state::AppState;
use oro_db::store::{DatabaseStore, MemoryStore};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "oro_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Database (optional: absence or failure pins the server to mock mode) ---
    let database = match &config.database_url {
        Some(database_url) => match connect_database(database_url).await {
            Ok(store) => Some(store),
            Err(e) => {
                tracing::warn!(error = %e, "Database unavailable, running mock-only");
                None
            }
        },
        None => {
            tracing::info!("DATABASE_URL not set, running mock-only");
            None
        }
    };

    // --- App state ---
    let state = AppState::new(database, MemoryStore::seeded(), config.clone());
    tracing::info!(
        mode = %state.data_mode.current(),
        database_available = state.data_mode.database_available(),
        "Data mode initialized"
    );

    // --- Router ---
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

/// Connect, probe, and migrate the database, returning the ready store.
async fn connect_database(database_url: &str) -> Result<DatabaseStore, Box<dyn std::error::Error>> {
    let pool = oro_db::create_pool(database_url).await?;
    oro_db::health_check(&pool).await?;
    tracing::info!("Database health check passed");

    oro_db::run_migrations(&pool).await?;
    tracing::info!("Database migrations applied");

    Ok(DatabaseStore::new(pool))
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server
/// shuts down cleanly whether stopped interactively or by a process
/// manager (e.g. systemd, Docker, Kubernetes).
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
