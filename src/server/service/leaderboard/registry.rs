//! Registry of leaderboard definitions.
//!
//! Built once at startup and shared read-only as `Arc<LeaderboardRegistry>`. Definitions
//! come from the built-in defaults or from a JSON file:
//!
//! ```json
//! [
//!   { "id": "farming-weight", "title": "Farming Weight", "category": "General",
//!     "minimum_score": 100, "score_data_type": "decimal" }
//! ]
//! ```

use std::{collections::BTreeMap, path::Path};

use crate::{
    model::leaderboard::ScoreDataType,
    server::{
        error::config::ConfigError,
        model::leaderboard::{LeaderboardDefinition, LeaderboardDefinitionConfig},
    },
};

#[derive(Debug)]
pub struct LeaderboardRegistry {
    definitions: BTreeMap<String, LeaderboardDefinition>,
}

impl LeaderboardRegistry {
    pub fn builder() -> LeaderboardRegistryBuilder {
        LeaderboardRegistryBuilder {
            definitions: BTreeMap::new(),
        }
    }

    /// Builds a registry from definition configs.
    ///
    /// # Returns
    /// - `Ok(LeaderboardRegistry)` - All definitions registered
    /// - `Err(ConfigError::InvalidLeaderboard)` - A definition failed validation
    /// - `Err(ConfigError::DuplicateLeaderboard)` - Two definitions share an id
    pub fn from_configs<I>(configs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = LeaderboardDefinitionConfig>,
    {
        configs
            .into_iter()
            .try_fold(Self::builder(), |builder, config| builder.register(config))
            .map(LeaderboardRegistryBuilder::build)
    }

    /// Builds a registry from the built-in leaderboard set.
    pub fn with_defaults() -> Result<Self, ConfigError> {
        Self::from_configs(default_definitions())
    }

    /// Builds a registry from a JSON array of definition configs.
    ///
    /// # Returns
    /// - `Ok(LeaderboardRegistry)` - All definitions registered
    /// - `Err(ConfigError::LeaderboardFile)` - File unreadable or not valid JSON
    /// - `Err(ConfigError)` - A definition failed registration
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let file_error = |reason: String| ConfigError::LeaderboardFile {
            path: path.display().to_string(),
            reason,
        };

        let contents = std::fs::read_to_string(path).map_err(|e| file_error(e.to_string()))?;
        let configs: Vec<LeaderboardDefinitionConfig> =
            serde_json::from_str(&contents).map_err(|e| file_error(e.to_string()))?;

        Self::from_configs(configs)
    }

    /// Looks up a definition by id.
    pub fn get(&self, id: &str) -> Option<&LeaderboardDefinition> {
        self.definitions.get(id)
    }

    /// All definitions ordered by id.
    pub fn all(&self) -> impl Iterator<Item = &LeaderboardDefinition> {
        self.definitions.values()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

pub struct LeaderboardRegistryBuilder {
    definitions: BTreeMap<String, LeaderboardDefinition>,
}

impl LeaderboardRegistryBuilder {
    /// Validates and adds a definition.
    pub fn register(mut self, config: LeaderboardDefinitionConfig) -> Result<Self, ConfigError> {
        let definition = LeaderboardDefinition::from_config(config)?;

        if self.definitions.contains_key(&definition.id) {
            return Err(ConfigError::DuplicateLeaderboard(definition.id));
        }

        self.definitions.insert(definition.id.clone(), definition);
        Ok(self)
    }

    pub fn build(self) -> LeaderboardRegistry {
        LeaderboardRegistry {
            definitions: self.definitions,
        }
    }
}

struct Defaults<'a> {
    category: &'a str,
    profile: bool,
    minimum_score: f64,
    limit: usize,
    score_data_type: ScoreDataType,
}

impl Defaults<'_> {
    fn define(&self, id: &str, title: &str, short_title: &str) -> LeaderboardDefinitionConfig {
        LeaderboardDefinitionConfig {
            id: id.to_string(),
            title: title.to_string(),
            short_title: Some(short_title.to_string()),
            category: self.category.to_string(),
            profile: self.profile,
            minimum_score: self.minimum_score,
            limit: self.limit,
            score_data_type: self.score_data_type,
        }
    }
}

fn default_definitions() -> Vec<LeaderboardDefinitionConfig> {
    let general = Defaults {
        category: "General",
        profile: true,
        minimum_score: 0.0,
        limit: 5000,
        score_data_type: ScoreDataType::Integer,
    };
    let weight = Defaults {
        minimum_score: 100.0,
        score_data_type: ScoreDataType::Decimal,
        ..general
    };
    let contests = Defaults {
        category: "Contests",
        minimum_score: 1.0,
        ..general
    };
    let skills = Defaults {
        category: "Skills",
        ..general
    };
    let collections = Defaults {
        category: "Collections",
        ..general
    };
    let account = Defaults {
        category: "Account",
        profile: false,
        limit: 1000,
        ..general
    };
    let playtime = Defaults {
        score_data_type: ScoreDataType::Duration,
        minimum_score: 60.0,
        ..account
    };

    vec![
        weight.define("farming-weight", "Farming Weight", "Weight"),
        weight.define("farming-weight-monthly", "Monthly Farming Weight", "Monthly Weight"),
        general.define("skyblock-xp", "Skyblock XP", "Skyblock XP"),
        contests.define("participations", "Contest Participations", "Participations"),
        contests.define("firstplace", "First Place Contests", "First Places"),
        contests.define("diamond-medals", "Diamond Medals", "Diamond"),
        contests.define("platinum-medals", "Platinum Medals", "Platinum"),
        contests.define("gold-medals", "Gold Medals", "Gold"),
        skills.define("farming-xp", "Farming XP", "Farming"),
        skills.define("farming-xp-weekly", "Weekly Farming XP", "Weekly Farming"),
        collections.define("cactus", "Cactus Collection", "Cactus"),
        collections.define("carrot", "Carrot Collection", "Carrot"),
        collections.define("melon", "Melon Collection", "Melon"),
        collections.define("potato", "Potato Collection", "Potato"),
        collections.define("pumpkin", "Pumpkin Collection", "Pumpkin"),
        collections.define("wheat", "Wheat Collection", "Wheat"),
        collections.define("wheat-current", "Current Wheat Collection", "Wheat (Current)"),
        account.define("achievement-points", "Achievement Points", "Achievements"),
        playtime.define("active-playtime-weekly", "Weekly Active Playtime", "Playtime"),
    ]
}
