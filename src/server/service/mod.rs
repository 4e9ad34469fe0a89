//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer and
//! are responsible for:
//!
//! - **Business Logic**: Ranking rules, team membership rules and validation
//! - **Orchestration**: Coordinating repository calls with the in-memory rankings
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Locking & Transactions**: Serializing writes per leaderboard and per event

pub mod event;
pub mod leaderboard;
