//! HTTP request handlers.
//!
//! Controllers check access, convert DTOs to service parameters and convert the results
//! back to DTOs. Every handler carries a `#[utoipa::path]` annotation for the generated
//! OpenAPI document.

pub mod event;
pub mod leaderboard;
pub mod team;
