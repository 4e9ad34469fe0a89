//! Factory methods for creating test data.
//!
//! Factories insert rows with sensible defaults so tests only spell out the values they
//! care about. Each entity has a `*Factory` builder for customization and a `create_*`
//! convenience function for the default case.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::create_user(&db).await?;
//! let event = factory::event::create_event(&db).await?;
//! let team = factory::event_team::create_team(&db, event.id, &user.discord_id).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let event = factory::event::EventFactory::new(&db)
//!     .max_team_size(2)
//!     .ended()
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Linked user accounts
//! - `event` - Community events
//! - `event_team` - Teams (owner membership included)
//! - `event_team_member` - Additional team memberships
//! - `leaderboard_score` - Persisted leaderboard scores
//! - `helpers` - ID generation and multi-entity setups

pub mod event;
pub mod event_team;
pub mod event_team_member;
pub mod helpers;
pub mod leaderboard_score;
pub mod user;

pub use event::create_event;
pub use event_team::create_team;
pub use event_team_member::create_member;
pub use leaderboard_score::create_score;
pub use user::create_user;
