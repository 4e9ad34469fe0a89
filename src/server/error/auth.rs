use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No authenticated user is stored in the session.
    #[error("No user is logged in for this session")]
    UserNotInSession,

    /// The session references a user that no longer exists.
    #[error("User {0} from session was not found in the database")]
    UserNotInDatabase(u64),

    /// The user lacks a permission required by the endpoint.
    ///
    /// # Fields
    /// - Discord ID of the user
    /// - Description of what was attempted, for server-side logs
    #[error("User {0} denied access: {1}")]
    AccessDenied(u64, String),
}

/// Converts authentication errors into HTTP responses.
///
/// Details are logged at debug level while client-facing messages stay generic.
///
/// # Returns
/// - 401 Unauthorized - No user in session
/// - 404 Not Found - Session user missing from the database
/// - 403 Forbidden - Missing permission
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::UserNotInSession => {
                error_response(StatusCode::UNAUTHORIZED, "You must be logged in")
            }
            Self::UserNotInDatabase(_) => error_response(StatusCode::NOT_FOUND, "User not found"),
            Self::AccessDenied(_, _) => error_response(
                StatusCode::FORBIDDEN,
                "You do not have permission to perform this action",
            ),
        }
    }
}
