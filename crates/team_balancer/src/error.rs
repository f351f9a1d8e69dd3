//! Error type for roster, config and team-edit failures

use thiserror::Error;

/// Errors raised at the edges of the balancer (files, validation, edits).
///
/// Balancing itself never fails; these only come from loading rosters and
/// configs, validating input, or editing teams after the fact.
#[derive(Debug, Error)]
pub enum BalanceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML write error: {0}")]
    TomlWrite(#[from] toml::ser::Error),

    #[error("Invalid rating {rating} for player '{name}'")]
    InvalidRating { name: String, rating: f64 },

    #[error("Unknown position '{label}' for player '{name}'")]
    UnknownPosition { name: String, label: String },

    #[error("Player name is required")]
    MissingName,

    #[error("Player name '{0}' is longer than {max} characters", max = crate::MAX_NAME_LEN)]
    NameTooLong(String),

    #[error("No such player: {0}")]
    NoSuchPlayer(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, BalanceError>;
