//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error type returned by services and controllers. It wraps the
//! domain-specific error enums and implements `IntoResponse`, so handlers can use `?` and let
//! each error pick its own status code. Domain errors (`AuthError`, `LeaderboardError`,
//! `TeamError`) map themselves; infrastructure errors become a generic 500.

pub mod auth;
pub mod config;
pub mod internal;
pub mod leaderboard;
pub mod team;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, internal::InternalError,
        leaderboard::LeaderboardError, team::TeamError,
    },
};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for status code mapping.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Leaderboard lookup or validation failure.
    #[error(transparent)]
    LeaderboardErr(#[from] LeaderboardError),

    /// Rejected event team operation.
    #[error(transparent)]
    TeamErr(#[from] TeamError),

    /// Unexpected internal state, usually a bug.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM.
    ///
    /// Propagated unchanged from the data layer. Results in 500 Internal Server Error with
    /// the details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Session store operation error.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Socket or file I/O error while starting the server.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest`
/// - Variable - For `AuthErr`, `LeaderboardErr` and `TeamErr`, delegated to the wrapped error
/// - 500 Internal Server Error - For every infrastructure error
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::LeaderboardErr(err) => err.into_response(),
            Self::TeamErr(err) => err.into_response(),
            Self::BadRequest(msg) => error_response(StatusCode::BAD_REQUEST, msg),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the full error and returns a generic message so implementation details never reach
/// the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}

/// Builds the JSON error body shared by the domain error mappings.
pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDto {
            error: message.into(),
        }),
    )
        .into_response()
}
