use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum LeaderboardError {
    /// No leaderboard is registered under the requested id.
    ///
    /// Results in 404 Not Found.
    #[error("Leaderboard '{0}' does not exist")]
    UnknownLeaderboard(String),

    /// Negative offset or limit.
    ///
    /// Results in 400 Bad Request. Oversized limits are clamped rather than rejected.
    #[error("Invalid range: offset {offset}, limit {limit}")]
    InvalidRange { offset: i64, limit: i64 },

    /// Score is NaN or infinite.
    ///
    /// Results in 400 Bad Request.
    #[error("Invalid score {0}")]
    InvalidScore(f64),
}

impl IntoResponse for LeaderboardError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::UnknownLeaderboard(_) => StatusCode::NOT_FOUND,
            Self::InvalidRange { .. } | Self::InvalidScore(_) => StatusCode::BAD_REQUEST,
        };

        error_response(status, self.to_string())
    }
}
