//! Server-side domain models and operation parameters.
//!
//! Repositories convert entity models into these types at the data layer boundary so entity
//! models never leak into services or controllers. Each model converts itself into its API
//! DTO with `into_dto`.

pub mod event;
pub mod leaderboard;
pub mod team;
pub mod user;
