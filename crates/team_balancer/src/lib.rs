//! Team balancing for amateur five-a-side and friendly matches
//!
//! This crate provides:
//! - A player model with positions and numeric ratings
//! - The two-team balancing heuristic (goalkeepers first, then greedy by rating)
//! - Manual adjustments to balanced teams
//! - Roster loading and boundary validation
//! - Team summaries and text reports
//!
//! # Usage
//!
//! ```
//! use team_balancer::{balance, Player, Position};
//!
//! let players = vec![
//!     Player::new("Marco", 90.0, Position::Goalkeeper),
//!     Player::new("Luca", 80.0, Position::Goalkeeper),
//!     Player::new("Anna", 70.0, Position::Midfielder),
//!     Player::new("Sara", 60.0, Position::Midfielder),
//! ];
//!
//! let teams = balance(players);
//! assert_eq!(teams.len(), 4);
//! ```

mod adjust;
mod balance;
mod config;
mod error;
mod roster;
mod summary;
mod types;

pub use balance::*;
pub use config::*;
pub use error::*;
pub use roster::*;
pub use summary::*;
pub use types::*;

// =============================================================================
// Rated trait: implemented by anything the balancer can place on a team
// =============================================================================

/// Trait for records that can be split into teams.
///
/// The balancer only ever looks at the rating and the position. Anything else
/// on the record (names, ids, images) is carried through untouched, so callers
/// can balance their own player type directly.
pub trait Rated {
    /// Skill rating, conventionally in `[0, 100]`
    fn rating(&self) -> f64;

    /// Playing position
    fn position(&self) -> &Position;
}

impl<T: Rated + ?Sized> Rated for &T {
    fn rating(&self) -> f64 {
        (**self).rating()
    }

    fn position(&self) -> &Position {
        (**self).position()
    }
}
