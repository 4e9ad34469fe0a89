//! Leaderboard domain models.
//!
//! `LeaderboardDefinition` is the validated, immutable form of a leaderboard's metadata.
//! `LeaderboardDefinitionConfig` is its serialized form, read from the definitions file or
//! built from the defaults in the registry.

use serde::Deserialize;
use std::collections::BTreeMap;

use crate::{
    model::leaderboard::{
        IntervalType, LeaderboardDefinitionDto, LeaderboardEntryDto, LeaderboardPositionsDto,
        LeaderboardRankDto, LeaderboardSliceDto, ScoreDataType, SubmitScoreResultDto,
    },
    server::error::config::ConfigError,
};

const DEFAULT_LIMIT: usize = 5000;

/// Which identity a leaderboard's entries are keyed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaderboardScope {
    /// Keyed by profile member id (one player on one profile).
    Profile,
    /// Keyed by account id.
    Account,
}

/// Static metadata describing one leaderboard.
#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardDefinition {
    /// Unique slug.
    pub id: String,
    pub title: String,
    pub short_title: String,
    pub category: String,
    pub scope: LeaderboardScope,
    /// Scores below this are never ranked.
    pub minimum_score: f64,
    /// Maximum number of ranked entries retained.
    pub limit: usize,
    pub score_data_type: ScoreDataType,
    pub interval_type: IntervalType,
}

impl LeaderboardDefinition {
    /// Validates a definition config.
    ///
    /// # Returns
    /// - `Ok(LeaderboardDefinition)` - Validated definition with interval derived from the id
    /// - `Err(ConfigError::InvalidLeaderboard)` - Empty or malformed id, empty title, zero
    ///   limit or non-finite minimum score
    pub fn from_config(config: LeaderboardDefinitionConfig) -> Result<Self, ConfigError> {
        let invalid = |reason: &str| ConfigError::InvalidLeaderboard {
            id: config.id.clone(),
            reason: reason.to_string(),
        };

        let valid_slug = !config.id.is_empty()
            && config
                .id
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
        if !valid_slug {
            return Err(invalid(
                "id must be non-empty lowercase letters, digits and dashes",
            ));
        }
        if config.title.trim().is_empty() {
            return Err(invalid("title must not be empty"));
        }
        if config.limit == 0 {
            return Err(invalid("limit must be greater than zero"));
        }
        if !config.minimum_score.is_finite() {
            return Err(invalid("minimum score must be finite"));
        }

        let interval_type = IntervalType::from_slug(&config.id);
        let short_title = config.short_title.unwrap_or_else(|| config.title.clone());
        let scope = if config.profile {
            LeaderboardScope::Profile
        } else {
            LeaderboardScope::Account
        };

        Ok(Self {
            id: config.id,
            title: config.title,
            short_title,
            category: config.category,
            scope,
            minimum_score: config.minimum_score,
            limit: config.limit,
            score_data_type: config.score_data_type,
            interval_type,
        })
    }

    pub fn is_profile(&self) -> bool {
        self.scope == LeaderboardScope::Profile
    }

    pub fn to_dto(&self) -> LeaderboardDefinitionDto {
        LeaderboardDefinitionDto {
            id: self.id.clone(),
            title: self.title.clone(),
            short_title: self.short_title.clone(),
            category: self.category.clone(),
            profile: self.is_profile(),
            minimum_score: self.minimum_score,
            limit: self.limit as u64,
            interval_type: self.interval_type,
            score_data_type: self.score_data_type,
        }
    }
}

/// Serialized leaderboard definition.
#[derive(Debug, Clone, Deserialize)]
pub struct LeaderboardDefinitionConfig {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub short_title: Option<String>,
    pub category: String,
    #[serde(default = "default_profile")]
    pub profile: bool,
    #[serde(default)]
    pub minimum_score: f64,
    #[serde(default = "default_limit")]
    pub limit: usize,
    #[serde(default = "default_score_data_type")]
    pub score_data_type: ScoreDataType,
}

fn default_profile() -> bool {
    true
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

fn default_score_data_type() -> ScoreDataType {
    ScoreDataType::Integer
}

/// An entry with its 1-based rank.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedScore {
    pub subject_id: String,
    pub score: f64,
    pub rank: usize,
}

impl RankedScore {
    pub fn into_dto(self) -> LeaderboardEntryDto {
        LeaderboardEntryDto {
            subject_id: self.subject_id,
            score: self.score,
            rank: self.rank as u64,
        }
    }
}

/// Persisted score row.
#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardScore {
    pub leaderboard_id: String,
    pub subject_id: String,
    pub score: f64,
}

impl LeaderboardScore {
    pub fn from_entity(entity: entity::leaderboard_score::Model) -> Self {
        Self {
            leaderboard_id: entity.leaderboard_id,
            subject_id: entity.subject_id,
            score: entity.score,
        }
    }
}

/// A page of a leaderboard together with the metadata shown alongside it.
#[derive(Debug, Clone)]
pub struct LeaderboardSlice {
    pub definition: LeaderboardDefinition,
    pub offset: usize,
    /// Limit after clamping to the configured maximum.
    pub limit: usize,
    pub entries: Vec<RankedScore>,
}

impl LeaderboardSlice {
    pub fn into_dto(self) -> LeaderboardSliceDto {
        LeaderboardSliceDto {
            id: self.definition.id,
            title: self.definition.title,
            short_title: self.definition.short_title,
            profile: self.definition.scope == LeaderboardScope::Profile,
            max_entries: self.definition.limit as u64,
            offset: self.offset as u64,
            limit: self.limit as u64,
            entries: self.entries.into_iter().map(RankedScore::into_dto).collect(),
        }
    }
}

/// A subject's standing on one leaderboard.
#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardRank {
    pub leaderboard_id: String,
    pub subject_id: String,
    pub rank: Option<usize>,
    pub score: Option<f64>,
    /// Entries directly above the subject, best first.
    pub upcoming: Vec<RankedScore>,
}

impl LeaderboardRank {
    pub fn into_dto(self) -> LeaderboardRankDto {
        LeaderboardRankDto {
            id: self.leaderboard_id,
            subject_id: self.subject_id,
            rank: self.rank.map(|r| r as u64),
            score: self.score,
            upcoming: self.upcoming.into_iter().map(RankedScore::into_dto).collect(),
        }
    }
}

/// Ranks across every leaderboard the subject appears on, keyed by leaderboard id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeaderboardPositions(pub BTreeMap<String, usize>);

impl LeaderboardPositions {
    pub fn into_dto(self) -> LeaderboardPositionsDto {
        LeaderboardPositionsDto {
            positions: self.0.into_iter().map(|(k, v)| (k, v as u64)).collect(),
        }
    }
}

/// Outcome of writing a score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreSubmission {
    pub leaderboard_id: String,
    pub subject_id: String,
    /// Score after normalization for the leaderboard's data type.
    pub score: f64,
    /// `None` when the score was below the minimum or fell outside the retained limit.
    pub rank: Option<usize>,
}

impl ScoreSubmission {
    pub fn into_dto(self) -> SubmitScoreResultDto {
        SubmitScoreResultDto {
            id: self.leaderboard_id,
            subject_id: self.subject_id,
            score: self.score,
            rank: self.rank.map(|r| r as u64),
        }
    }
}
