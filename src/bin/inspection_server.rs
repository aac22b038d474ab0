//! HTTP server for the inspection desk.
//!
//! Configuration is read from the environment (see
//! [`inspection_desk::config`]); the process exits with a failure status
//! when it is incomplete. Log verbosity follows `RUST_LOG`, defaulting to
//! `info`.

use inspection_desk::{
    api::{AppState, router},
    config::{AppConfig, ConfigError},
    database::LazyPgPool,
    inspection::{
        adapters::postgres::PostgresInspectionTaskRepository, ports::InspectionTaskRepository,
        services::InspectionTaskService,
    },
    notification::{
        adapters::smtp::{SmtpMailTransport, SmtpSetupError},
        domain::{NoticeComposer, NoticeRenderError},
        ports::MailTransport,
        services::NotificationDispatcher,
    },
    property::{adapters::postgres::PostgresAddressRegistry, ports::AddressRegistry},
};
use mockable::DefaultClock;
use std::process::ExitCode;
use std::sync::Arc;
use thiserror::Error;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Error)]
enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Smtp(#[from] SmtpSetupError),
    #[error(transparent)]
    Template(#[from] NoticeRenderError),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        source: std::io::Error,
    },
    #[error("server terminated: {0}")]
    Serve(std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "inspection server stopped");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = std::env::var("RUST_LOG")
        .ok()
        .and_then(|raw| EnvFilter::try_new(raw.trim()).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}

async fn run() -> Result<(), ServerError> {
    let config = AppConfig::from_env()?;
    tracing::info!(?config, "configuration loaded");

    let pool = LazyPgPool::new(config.database.clone());
    let repository: Arc<dyn InspectionTaskRepository> =
        Arc::new(PostgresInspectionTaskRepository::new(pool.clone()));
    let registry: Arc<dyn AddressRegistry> =
        Arc::new(PostgresAddressRegistry::new(pool, DefaultClock));
    let tasks =
        InspectionTaskService::new(repository, Arc::clone(&registry), Arc::new(DefaultClock));

    let transport: Arc<dyn MailTransport> = Arc::new(SmtpMailTransport::new(&config.smtp)?);
    let composer = NoticeComposer::new(config.notice_language, config.smtp.from_name.clone())?;
    let notifier = NotificationDispatcher::new(transport, composer);

    let app = router(AppState::new(tasks, registry, notifier));
    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: config.bind_addr,
            source,
        })?;
    tracing::info!(addr = %config.bind_addr, "inspection server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
