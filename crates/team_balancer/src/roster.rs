//! Roster storage and input validation
//!
//! A roster is the list of players available for a match. Rosters are read
//! from JSON or TOML files and validated here, before they reach the
//! balancer, so that balancing itself can stay total.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{BalanceError, Result};
use crate::types::{Player, Position, DEFAULT_RATING, MAX_NAME_LEN, MAX_RATING, MIN_RATING};

/// Handling of ratings outside `[0, 100]`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RatingPolicy {
    /// Pull the rating back into range
    #[default]
    Clamp,
    Reject,
}

/// Handling of unrecognized position labels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionPolicy {
    /// Keep the player and play them as an outfielder
    #[default]
    Outfield,
    Reject,
}

/// Validation rules applied to a roster
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationPolicy {
    pub rating: RatingPolicy,
    pub positions: PositionPolicy,
}

/// On-disk format of a roster file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Toml,
}

impl Format {
    fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Format::Toml,
            _ => Format::Json,
        }
    }
}

/// A list of players available for a match
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    #[serde(default)]
    pub players: Vec<Player>,
}

impl Roster {
    pub fn new(players: Vec<Player>) -> Self {
        Self { players }
    }

    /// Load a roster; `.toml` files are read as TOML, anything else as JSON.
    ///
    /// JSON rosters may be either `{"players": [...]}` or a bare array.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        match Format::from_path(path) {
            Format::Toml => Ok(toml::from_str(&contents)?),
            Format::Json => Self::from_json(&contents),
        }
    }

    pub fn from_json(contents: &str) -> Result<Self> {
        if contents.trim_start().starts_with('[') {
            let players: Vec<Player> = serde_json::from_str(contents)?;
            return Ok(Self::new(players));
        }
        Ok(serde_json::from_str(contents)?)
    }

    /// Save the roster in the format matching the file extension
    pub fn save(&self, path: &Path) -> Result<()> {
        let text = match Format::from_path(path) {
            Format::Toml => toml::to_string_pretty(self)?,
            Format::Json => serde_json::to_string_pretty(self)?,
        };
        std::fs::write(path, text)?;
        Ok(())
    }

    /// Add an ad-hoc player. A missing rating gets the default of 50.
    pub fn push_manual(
        &mut self,
        name: &str,
        rating: Option<f64>,
        position: Position,
    ) -> Result<&Player> {
        let player = Player::new(name.trim(), rating.unwrap_or(DEFAULT_RATING), position);
        check_name(&player.name)?;
        self.players.push(player);
        Ok(&self.players[self.players.len() - 1])
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Validate every player and return the cleaned list, ready to balance.
    ///
    /// The first offending player aborts validation.
    pub fn validate(&self, policy: &ValidationPolicy) -> Result<Vec<Player>> {
        self.players
            .iter()
            .map(|player| validate_player(player, policy))
            .collect()
    }
}

fn check_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(BalanceError::MissingName);
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(BalanceError::NameTooLong(name.to_string()));
    }
    Ok(())
}

fn validate_player(player: &Player, policy: &ValidationPolicy) -> Result<Player> {
    check_name(&player.name)?;

    let mut player = player.clone();

    if !player.rating.is_finite() {
        return Err(BalanceError::InvalidRating {
            name: player.name,
            rating: player.rating,
        });
    }
    if !(MIN_RATING..=MAX_RATING).contains(&player.rating) {
        match policy.rating {
            RatingPolicy::Clamp => {
                let clamped = player.rating.clamp(MIN_RATING, MAX_RATING);
                tracing::warn!(
                    player = %player.name,
                    rating = player.rating,
                    clamped,
                    "rating out of range, clamped"
                );
                player.rating = clamped;
            }
            RatingPolicy::Reject => {
                return Err(BalanceError::InvalidRating {
                    name: player.name,
                    rating: player.rating,
                });
            }
        }
    }

    if let Position::Other(label) = &player.position {
        match policy.positions {
            PositionPolicy::Outfield => {
                tracing::warn!(
                    player = %player.name,
                    position = %label,
                    "unknown position, playing as outfield"
                );
            }
            PositionPolicy::Reject => {
                return Err(BalanceError::UnknownPosition {
                    label: label.clone(),
                    name: player.name,
                });
            }
        }
    }

    Ok(player)
}

#[cfg(test)]
#[path = "roster_tests.rs"]
mod roster_tests;
