//! Cron jobs running alongside the HTTP server.

pub mod leaderboard_rebuild;
