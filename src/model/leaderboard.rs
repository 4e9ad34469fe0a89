use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// How a leaderboard's scores are interpreted and displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ScoreDataType {
    Integer,
    Decimal,
    /// Whole seconds.
    Duration,
}

impl ScoreDataType {
    /// Normalizes a raw score to this data type.
    ///
    /// Integer and duration scores are truncated toward zero; decimal scores pass through.
    pub fn normalize(self, score: f64) -> f64 {
        match self {
            Self::Integer | Self::Duration => score.trunc(),
            Self::Decimal => score,
        }
    }
}

/// Time window a leaderboard covers, derived from its slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum IntervalType {
    Current,
    Weekly,
    Monthly,
    Total,
}

impl IntervalType {
    /// Derives the interval from a leaderboard slug.
    ///
    /// `-current`, `-weekly` and `-monthly` suffixes select their interval; any other slug
    /// is an all-time (`Total`) leaderboard.
    pub fn from_slug(slug: &str) -> Self {
        if slug.ends_with("-current") {
            Self::Current
        } else if slug.ends_with("-weekly") {
            Self::Weekly
        } else if slug.ends_with("-monthly") {
            Self::Monthly
        } else {
            Self::Total
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LeaderboardDefinitionDto {
    pub id: String,
    pub title: String,
    pub short_title: String,
    pub category: String,
    /// `true` when entries are keyed by profile member rather than by account.
    pub profile: bool,
    pub minimum_score: f64,
    pub limit: u64,
    pub interval_type: IntervalType,
    pub score_data_type: ScoreDataType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LeaderboardsDto {
    pub leaderboards: BTreeMap<String, LeaderboardDefinitionDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LeaderboardEntryDto {
    pub subject_id: String,
    pub score: f64,
    pub rank: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LeaderboardSliceDto {
    pub id: String,
    pub title: String,
    pub short_title: String,
    pub profile: bool,
    pub max_entries: u64,
    pub offset: u64,
    pub limit: u64,
    pub entries: Vec<LeaderboardEntryDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LeaderboardRankDto {
    pub id: String,
    pub subject_id: String,
    pub rank: Option<u64>,
    pub score: Option<f64>,
    /// Entries ranked directly above the subject, best first.
    pub upcoming: Vec<LeaderboardEntryDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LeaderboardPositionsDto {
    pub positions: BTreeMap<String, u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubmitScoreDto {
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SubmitScoreResultDto {
    pub id: String,
    pub subject_id: String,
    pub score: f64,
    /// `None` when the score is below the leaderboard minimum or outside its retained limit.
    pub rank: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RemovedSubjectDto {
    pub subject_id: String,
    pub leaderboards: Vec<String>,
}
