//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and cloned for each request through
//! Axum's state extraction. Every field is cheap to clone.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::service::{
    event::lock::EventLocks,
    leaderboard::{registry::LeaderboardRegistry, store::LeaderboardStore},
};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool; clones share the pool.
    pub db: DatabaseConnection,

    /// Leaderboard definitions, fixed after startup.
    pub leaderboard_registry: Arc<LeaderboardRegistry>,

    /// In-memory rankings for every registered leaderboard.
    pub leaderboard_store: Arc<LeaderboardStore>,

    /// Per-event locks serializing team membership changes.
    pub event_locks: EventLocks,

    /// Team capacity used when an event is created without one.
    pub default_team_size: u32,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        leaderboard_registry: Arc<LeaderboardRegistry>,
        leaderboard_store: Arc<LeaderboardStore>,
        default_team_size: u32,
    ) -> Self {
        Self {
            db,
            leaderboard_registry,
            leaderboard_store,
            event_locks: EventLocks::new(),
            default_team_size,
        }
    }
}
