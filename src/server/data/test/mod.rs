mod event;
mod event_team;
mod event_team_member;
mod leaderboard_score;
mod user;
