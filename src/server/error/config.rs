use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// Check the `.env.example` file for the required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but cannot be parsed into the expected type.
    #[error("Invalid value '{value}' for environment variable {name}")]
    InvalidEnvVar { name: String, value: String },

    /// Leaderboard definitions file could not be read or parsed.
    #[error("Failed to load leaderboard definitions from {path}: {reason}")]
    LeaderboardFile { path: String, reason: String },

    /// A leaderboard definition failed validation during registration.
    #[error("Invalid leaderboard definition '{id}': {reason}")]
    InvalidLeaderboard { id: String, reason: String },

    /// Two leaderboard definitions share the same id.
    #[error("Duplicate leaderboard definition '{0}'")]
    DuplicateLeaderboard(String),
}
