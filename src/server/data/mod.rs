//! Database repository layer.
//!
//! Repositories wrap SeaORM queries for one table each and convert entity models into the
//! domain models in `server::model` at this boundary. They are generic over
//! `ConnectionTrait` so services can run several repository calls inside one
//! `DatabaseTransaction`.

pub mod event;
pub mod event_team;
pub mod event_team_member;
pub mod leaderboard_score;
pub mod user;

#[cfg(test)]
mod test;
