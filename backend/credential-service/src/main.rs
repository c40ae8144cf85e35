/// Credential Service Main Entry Point
///
/// Bootstrap sequence, in order:
/// 1. Tracing subscriber
/// 2. Configuration from the environment
/// 3. PostgreSQL pool, established through the bounded retry driver
/// 4. Migrations
/// 5. gRPC server (health reporting turns SERVING only once the store
///    connection is live)
///
/// Exhausting the connection retries is fatal: the process exits
/// non-zero without ever serving traffic.
use anyhow::{Context, Result};
use credential_service::{
    config::Settings,
    grpc::{
        credmesh::credential_service::credential_service_server::CredentialServiceServer,
        CredentialServer,
    },
    services::CredentialEngine,
    store::PgAccountStore,
    token::TokenIssuer,
};
use resilience::{connect_with_retry, RetryConfig};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tonic::transport::Server;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "credential_service=info,info".into()),
        )
        .with_target(false)
        .json()
        .init();

    info!("Starting Credential Service");

    let settings = Settings::load().context("Failed to load configuration")?;
    info!("Configuration loaded successfully");

    // Establish the database connection through the retry driver; the
    // database may still be coming up when this process starts.
    let retry_config = RetryConfig {
        max_attempts: settings.database.connect_attempts,
        base_delay: Duration::from_millis(settings.database.connect_base_delay_ms),
    };
    let db_pool = connect_with_retry("postgres", retry_config, || {
        PgPoolOptions::new()
            .max_connections(settings.database.max_connections)
            .acquire_timeout(Duration::from_secs(5))
            .connect(&settings.database.url)
    })
    .await
    .context("Failed to connect to PostgreSQL")?;

    info!(
        "Database pool initialized with {} max connections",
        settings.database.max_connections
    );

    sqlx::migrate!("./migrations")
        .run(&db_pool)
        .await
        .context("Failed to run database migrations")?;
    info!("Database migrations completed");

    let store = Arc::new(PgAccountStore::new(db_pool));
    let engine = Arc::new(CredentialEngine::new(store));
    let issuer = TokenIssuer::new(&settings.jwt.secret_key);

    let credential_server = CredentialServer::new(engine, issuer);

    let (mut health_reporter, health_service) = tonic_health::server::health_reporter();
    health_reporter
        .set_serving::<CredentialServiceServer<CredentialServer<PgAccountStore>>>()
        .await;

    let addr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server address")?;

    info!("Starting gRPC server on {}", addr);

    Server::builder()
        .add_service(health_service)
        .add_service(CredentialServiceServer::new(credential_server))
        .serve_with_shutdown(addr, shutdown_signal())
        .await
        .context("gRPC server error")?;

    info!("Credential service shutdown complete");

    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received SIGTERM signal");
        },
    }

    info!("Shutting down gracefully...");
}
