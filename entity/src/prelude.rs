pub use super::event::Entity as Event;
pub use super::event_team::Entity as EventTeam;
pub use super::event_team_member::Entity as EventTeamMember;
pub use super::leaderboard_score::Entity as LeaderboardScore;
pub use super::user::Entity as User;
