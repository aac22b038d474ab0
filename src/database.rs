//! Process-wide `PostgreSQL` connection pool shared by store adapters.
//!
//! The pool is created lazily on first use. Initialisation is single-flight:
//! the first caller of [`LazyPgPool::acquire`] builds the pool while concurrent
//! callers await the same in-flight initialisation. A failed build is not
//! cached, so the next caller retries.

use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PoolError};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::OnceCell;

/// `PostgreSQL` connection pool type used by store adapters.
pub type PgPool = Pool<ConnectionManager<PgConnection>>;

/// Connection settings for the shared pool.
#[derive(Clone, PartialEq, Eq)]
pub struct PoolSettings {
    /// `PostgreSQL` connection string.
    pub database_url: String,
    /// Upper bound on pooled connections.
    pub max_connections: u32,
    /// Connections kept open while idle.
    pub min_idle: u32,
    /// How long to wait for a connection before failing.
    pub connect_timeout: Duration,
}

impl fmt::Debug for PoolSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PoolSettings")
            .field("database_url", &"<redacted>")
            .field("max_connections", &self.max_connections)
            .field("min_idle", &self.min_idle)
            .field("connect_timeout", &self.connect_timeout)
            .finish()
    }
}

/// Errors raised while initialising the shared pool.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// The pool could not establish its initial connections.
    #[error("failed to build PostgreSQL connection pool: {0}")]
    Pool(#[from] PoolError),

    /// The blocking initialisation task did not complete.
    #[error("connection pool initialisation was interrupted: {0}")]
    Interrupted(#[from] tokio::task::JoinError),
}

/// Lazily initialised, cheaply cloneable handle to the shared pool.
#[derive(Clone)]
pub struct LazyPgPool {
    settings: Arc<PoolSettings>,
    cell: Arc<OnceCell<PgPool>>,
}

impl LazyPgPool {
    /// Creates a handle that will build its pool on first acquisition.
    ///
    /// `max_connections` is raised to at least one and `min_idle` is capped
    /// at `max_connections`.
    #[must_use]
    pub fn new(settings: PoolSettings) -> Self {
        let max_connections = settings.max_connections.max(1);
        let normalized = PoolSettings {
            max_connections,
            min_idle: settings.min_idle.min(max_connections),
            ..settings
        };
        Self {
            settings: Arc::new(normalized),
            cell: Arc::new(OnceCell::new()),
        }
    }

    /// Reports whether the pool has been built.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.cell.initialized()
    }

    /// Returns the shared pool, building it on first use.
    ///
    /// # Errors
    ///
    /// Returns [`DatabaseError`] when the pool cannot be built within the
    /// configured connection timeout.
    pub async fn acquire(&self) -> Result<PgPool, DatabaseError> {
        let pool = self
            .cell
            .get_or_try_init(|| {
                let settings = Arc::clone(&self.settings);
                async move {
                    tracing::info!(
                        max_connections = settings.max_connections,
                        min_idle = settings.min_idle,
                        "initialising PostgreSQL connection pool"
                    );
                    let built = tokio::task::spawn_blocking(move || build_pool(&settings))
                        .await?
                        .inspect_err(|err| {
                            tracing::error!(error = %err, "PostgreSQL connection pool unavailable");
                        })?;
                    Ok::<_, DatabaseError>(built)
                }
            })
            .await?;
        Ok(pool.clone())
    }
}

impl fmt::Debug for LazyPgPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyPgPool")
            .field("settings", &self.settings)
            .field("initialized", &self.is_initialized())
            .finish()
    }
}

fn build_pool(settings: &PoolSettings) -> Result<PgPool, PoolError> {
    let manager = ConnectionManager::<PgConnection>::new(settings.database_url.as_str());
    Pool::builder()
        .max_size(settings.max_connections)
        .min_idle(Some(settings.min_idle))
        .connection_timeout(settings.connect_timeout)
        .build(manager)
}
