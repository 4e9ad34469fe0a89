use std::num::ParseIntError;
use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse id from String
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// Could not find a join code that is not already in use.
    #[error("Failed to generate a unique join code after {attempts} attempts")]
    JoinCodeExhausted { attempts: usize },

    /// A leaderboard registered in the registry has no slot in the ranking store.
    #[error("Leaderboard '{0}' is registered but has no ranking slot")]
    MissingRankingSlot(String),
}
