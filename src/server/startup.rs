use std::{sync::Arc, time::Duration};

use sea_orm::DatabaseConnection;
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    error::AppError,
    service::leaderboard::{
        registry::LeaderboardRegistry, store::LeaderboardStore, LeaderboardService,
    },
};

/// Installs the global tracing subscriber.
///
/// The filter comes from `RUST_LOG` and defaults to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then runs
/// all pending SeaORM migrations so the schema is up-to-date before anything reads it.
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.acquire_timeout(Duration::from_secs(config.request_timeout_secs))
        .sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the application database.
///
/// Sessions expire after seven days of inactivity.
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store
        .migrate()
        .await
        .map_err(|e| sea_orm::DbErr::Custom(e.to_string()))?;

    let session = SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(time::Duration::days(7)));

    Ok(session)
}

/// Loads leaderboard definitions from `LEADERBOARDS_PATH`, or the built-in set when unset.
///
/// # Returns
/// - `Ok(LeaderboardRegistry)` - Validated definitions
/// - `Err(AppError::ConfigErr)` - Unreadable file, invalid or duplicate definition
pub fn build_leaderboard_registry(config: &Config) -> Result<LeaderboardRegistry, AppError> {
    let registry = match &config.leaderboards_path {
        Some(path) => LeaderboardRegistry::from_file(path)?,
        None => LeaderboardRegistry::with_defaults()?,
    };

    tracing::info!("Registered {} leaderboards", registry.len());

    Ok(registry)
}

/// Creates the in-memory rankings and fills them from the persisted scores.
pub async fn hydrate_leaderboards(
    db: &DatabaseConnection,
    registry: &Arc<LeaderboardRegistry>,
    config: &Config,
) -> Result<Arc<LeaderboardStore>, AppError> {
    let max_slice = usize::try_from(config.leaderboard_max_slice).unwrap_or(usize::MAX);
    let store = Arc::new(LeaderboardStore::new(registry, max_slice));

    let entries = LeaderboardService::new(db, registry, &store)
        .rebuild_all()
        .await?;

    tracing::info!("Loaded {} leaderboard entries", entries);

    Ok(store)
}
