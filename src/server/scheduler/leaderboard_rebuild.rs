use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    error::AppError,
    service::leaderboard::{
        registry::LeaderboardRegistry, store::LeaderboardStore, LeaderboardService,
    },
};

/// Starts the leaderboard rebuild scheduler.
///
/// Every run reloads all rankings from the persisted scores. A failed run is logged and
/// the next run proceeds normally.
///
/// # Arguments
/// - `cron` - Six field cron expression (seconds first)
///
/// # Returns
/// - `Ok(JobScheduler)` - Running scheduler, kept alive by the caller
/// - `Err(AppError::SchedulerErr)` - Invalid cron expression or scheduler failure
pub async fn start_scheduler(
    db: DatabaseConnection,
    registry: Arc<LeaderboardRegistry>,
    store: Arc<LeaderboardStore>,
    cron: &str,
) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(cron, move |_uuid, _lock| {
        let db = db.clone();
        let registry = registry.clone();
        let store = store.clone();

        Box::pin(async move {
            match LeaderboardService::new(&db, &registry, &store)
                .rebuild_all()
                .await
            {
                Ok(entries) => tracing::debug!("Rebuilt leaderboards with {} entries", entries),
                Err(e) => tracing::error!("Error rebuilding leaderboards: {}", e),
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Leaderboard rebuild scheduler started ({})", cron);

    Ok(scheduler)
}
