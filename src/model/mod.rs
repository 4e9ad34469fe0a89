//! Request and response DTOs shared by the API layer.

pub mod api;
pub mod event;
pub mod leaderboard;
pub mod team;
