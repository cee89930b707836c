use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bridgewatch_api::auth::password::hash_password;
use bridgewatch_api::config::ServerConfig;
use bridgewatch_api::router::build_app_router;
use bridgewatch_api::state::AppState;
use bridgewatch_core::roles::ROLE_ADMIN;
use bridgewatch_db::models::user::CreateUser;
use bridgewatch_db::repositories::UserRepo;
use bridgewatch_engine::{PgTelemetryStore, Simulator};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "bridgewatch_api=debug,bridgewatch_engine=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Database ---
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = bridgewatch_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connection pool created");

    bridgewatch_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    tracing::info!("Database health check passed");

    bridgewatch_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database migrations applied");

    bootstrap_admin(&pool).await;

    // --- Telemetry simulator ---
    let sim_cancel = CancellationToken::new();
    let sim_handle = if config.sim_enabled {
        let store = PgTelemetryStore::new(pool.clone());
        let simulator = Simulator::new(store, Duration::from_secs(config.sim_interval_secs));
        Some(tokio::spawn(simulator.run(sim_cancel.clone())))
    } else {
        tracing::info!("Telemetry simulator disabled via SIM_ENABLED");
        None
    };

    // --- App state ---
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };

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

    // --- Post-shutdown cleanup ---
    tracing::info!("Server stopped accepting connections, cleaning up");

    // Stop the simulator; cancellation lets an in-flight tick finish.
    sim_cancel.cancel();
    if let Some(handle) = sim_handle {
        let _ = tokio::time::timeout(Duration::from_secs(5), handle).await;
    }
    tracing::info!("Telemetry simulator stopped");

    tracing::info!("Graceful shutdown complete");
}

/// Create the initial admin account when the users table is empty.
///
/// The password comes from `ADMIN_PASSWORD` (default `admin123`, with a
/// loud warning) so a fresh install is immediately usable.
async fn bootstrap_admin(pool: &bridgewatch_db::DbPool) {
    let count = UserRepo::count(pool)
        .await
        .expect("Failed to count users during bootstrap");
    if count > 0 {
        return;
    }

    let password = std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| {
        tracing::warn!("ADMIN_PASSWORD not set; using the default bootstrap password");
        "admin123".to_string()
    });

    let password_hash = hash_password(&password).expect("Failed to hash bootstrap password");

    let input = CreateUser {
        username: "admin".to_string(),
        password_hash,
        display_name: Some("Administrator".to_string()),
        role: ROLE_ADMIN.to_string(),
    };

    UserRepo::create(pool, &input)
        .await
        .expect("Failed to create bootstrap admin user");
    tracing::info!("Bootstrap admin account created");
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
