//! Core player types: positions, display lines and the player record.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Rated;

/// Rating given to players entered without one
pub const DEFAULT_RATING: f64 = 50.0;

/// Lowest valid rating
pub const MIN_RATING: f64 = 0.0;

/// Highest valid rating
pub const MAX_RATING: f64 = 100.0;

/// Longest accepted player name, in characters
pub const MAX_NAME_LEN: usize = 60;

// =============================================================================
// Position
// =============================================================================

/// Playing position of a player.
///
/// Only the goalkeeper/outfield split matters for balancing. The finer
/// outfield roles are kept on the player so that line-ups can be shown by
/// line afterwards. Labels outside the known set are preserved as `Other`
/// and play as outfielders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Position {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
    /// Wildcard that can fill any outfield slot
    Utility,
    /// Unrecognized label, kept verbatim
    Other(String),
}

impl Position {
    /// All known positions, in line-up order
    pub const KNOWN: [Position; 5] = [
        Position::Goalkeeper,
        Position::Defender,
        Position::Midfielder,
        Position::Forward,
        Position::Utility,
    ];

    /// Parse a position label. Never fails: unknown labels become `Other`.
    ///
    /// Accepts English names, short codes and the Italian labels used by
    /// five-a-side leagues ("Portiere", "Difensore", "Centrocampista",
    /// "Attaccante", "Jolly"), case-insensitively.
    pub fn parse(label: &str) -> Self {
        let trimmed = label.trim();
        match trimmed.to_lowercase().as_str() {
            "goalkeeper" | "gk" | "keeper" | "portiere" => Position::Goalkeeper,
            "defender" | "def" | "d" | "difensore" => Position::Defender,
            "midfielder" | "mid" | "m" | "centrocampista" => Position::Midfielder,
            "forward" | "fwd" | "f" | "att" | "striker" | "attaccante" => Position::Forward,
            "utility" | "utl" | "jolly" => Position::Utility,
            _ => Position::Other(trimmed.to_string()),
        }
    }

    pub fn is_goalkeeper(&self) -> bool {
        matches!(self, Position::Goalkeeper)
    }

    /// True for labels outside the known set
    pub fn is_unknown(&self) -> bool {
        matches!(self, Position::Other(_))
    }

    /// Line this position is shown in on a team sheet
    pub fn line(&self) -> Line {
        match self {
            Position::Goalkeeper => Line::Goal,
            Position::Defender => Line::Defence,
            Position::Midfielder | Position::Utility | Position::Other(_) => Line::Midfield,
            Position::Forward => Line::Attack,
        }
    }

    /// Canonical label
    pub fn label(&self) -> &str {
        match self {
            Position::Goalkeeper => "Goalkeeper",
            Position::Defender => "Defender",
            Position::Midfielder => "Midfielder",
            Position::Forward => "Forward",
            Position::Utility => "Utility",
            Position::Other(label) => label,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl From<String> for Position {
    fn from(label: String) -> Self {
        Position::parse(&label)
    }
}

impl From<&str> for Position {
    fn from(label: &str) -> Self {
        Position::parse(label)
    }
}

impl From<Position> for String {
    fn from(position: Position) -> Self {
        match position {
            Position::Other(label) => label,
            known => known.label().to_string(),
        }
    }
}

/// Display line of a team sheet, from the goal outwards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Line {
    Goal,
    Defence,
    Midfield,
    Attack,
}

impl Line {
    pub const ALL: [Line; 4] = [Line::Goal, Line::Defence, Line::Midfield, Line::Attack];

    pub fn name(self) -> &'static str {
        match self {
            Line::Goal => "Goal",
            Line::Defence => "Defence",
            Line::Midfield => "Midfield",
            Line::Attack => "Attack",
        }
    }
}

// =============================================================================
// Player
// =============================================================================

fn default_rating() -> f64 {
    DEFAULT_RATING
}

/// A player as entered on a roster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Opaque identity, e.g. a registration id (None for ad-hoc entries)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default = "default_rating")]
    pub rating: f64,
    pub position: Position,
}

impl Player {
    pub fn new(name: impl Into<String>, rating: f64, position: Position) -> Self {
        Self {
            id: None,
            name: name.into(),
            rating,
            position,
        }
    }

    /// Attach an id to this player
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Id if present, otherwise the name
    pub fn key(&self) -> &str {
        self.id.as_deref().unwrap_or(&self.name)
    }
}

impl Rated for Player {
    fn rating(&self) -> f64 {
        self.rating
    }

    fn position(&self) -> &Position {
        &self.position
    }
}
