//! Two-team balancing
//!
//! Goalkeepers are placed first so that each side gets one when there are
//! enough to go round. Every other player is then handed, best first, to
//! whichever side has the lower running rating total (greedy partitioning).
//!
//! Ratings are perturbed by a small random jitter before ordering, so
//! re-balancing the same roster usually gives a different but still even
//! split. The jitter only decides the order; the running totals always use
//! the true ratings.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::{BalancerConfig, DEFAULT_JITTER, MAX_JITTER};
use crate::Rated;

/// One of the two teams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn other(self) -> Self {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

/// Result of a balance: two teams in assignment order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Teams<P> {
    pub team_a: Vec<P>,
    pub team_b: Vec<P>,
}

impl<P> Default for Teams<P> {
    fn default() -> Self {
        Self {
            team_a: Vec::new(),
            team_b: Vec::new(),
        }
    }
}

impl<P> Teams<P> {
    pub fn team(&self, side: Side) -> &[P] {
        match side {
            Side::A => &self.team_a,
            Side::B => &self.team_b,
        }
    }

    pub(crate) fn team_mut(&mut self, side: Side) -> &mut Vec<P> {
        match side {
            Side::A => &mut self.team_a,
            Side::B => &mut self.team_b,
        }
    }

    /// Total number of players across both teams
    pub fn len(&self) -> usize {
        self.team_a.len() + self.team_b.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All players with the side they are on, team A first
    pub fn iter(&self) -> impl Iterator<Item = (Side, &P)> {
        self.team_a
            .iter()
            .map(|p| (Side::A, p))
            .chain(self.team_b.iter().map(|p| (Side::B, p)))
    }

    pub fn into_parts(self) -> (Vec<P>, Vec<P>) {
        (self.team_a, self.team_b)
    }
}

impl<P: Rated> Teams<P> {
    /// Sum of true ratings on one side
    pub fn rating_sum(&self, side: Side) -> f64 {
        self.team(side).iter().map(Rated::rating).sum()
    }

    /// Absolute difference between the two rating sums
    pub fn imbalance(&self) -> f64 {
        (self.rating_sum(Side::A) - self.rating_sum(Side::B)).abs()
    }
}

/// Balances rosters into two teams
#[derive(Debug, Clone)]
pub struct Balancer {
    jitter: f64,
}

impl Default for Balancer {
    fn default() -> Self {
        Self {
            jitter: DEFAULT_JITTER,
        }
    }
}

impl Balancer {
    pub fn new(config: &BalancerConfig) -> Self {
        Self::with_jitter(config.jitter)
    }

    /// Balancer with a given jitter half-width. Negative or NaN values are
    /// treated as zero; anything above `MAX_JITTER` is capped.
    pub fn with_jitter(jitter: f64) -> Self {
        let jitter = if jitter > 0.0 {
            jitter.min(MAX_JITTER)
        } else {
            0.0
        };
        Self { jitter }
    }

    pub fn jitter(&self) -> f64 {
        self.jitter
    }

    /// Balance using a fresh thread-local random source
    pub fn balance<P: Rated>(&self, players: Vec<P>) -> Teams<P> {
        self.balance_with_rng(players, &mut rand::thread_rng())
    }

    /// Balance using the given random source.
    ///
    /// With the same seed and the same input order the output is identical.
    pub fn balance_with_rng<P, R>(&self, players: Vec<P>, rng: &mut R) -> Teams<P>
    where
        P: Rated,
        R: Rng + ?Sized,
    {
        let total = players.len();
        let mut goalkeepers = Vec::new();
        let mut outfield = Vec::new();

        for player in players {
            let key = self.jittered(player.rating(), rng);
            if player.position().is_goalkeeper() {
                goalkeepers.push((key, player));
            } else {
                if player.position().is_unknown() {
                    tracing::debug!(position = %player.position(), "unknown position placed as outfield");
                }
                outfield.push((key, player));
            }
        }

        // Stable, descending, NaN-safe
        goalkeepers.sort_by(|a, b| b.0.total_cmp(&a.0));
        outfield.sort_by(|a, b| b.0.total_cmp(&a.0));

        let mut draft = Draft::with_capacity(total);

        for (_, keeper) in goalkeepers {
            let side = if !draft.has_keeper_a {
                Side::A
            } else if !draft.has_keeper_b {
                Side::B
            } else {
                draft.lower_side()
            };
            match side {
                Side::A => draft.has_keeper_a = true,
                Side::B => draft.has_keeper_b = true,
            }
            draft.assign(side, keeper);
        }

        tracing::debug!(
            sum_a = draft.sum_a,
            sum_b = draft.sum_b,
            "goalkeepers placed"
        );

        for (_, player) in outfield {
            let side = draft.lower_side();
            draft.assign(side, player);
        }

        tracing::debug!(
            players = total,
            sum_a = draft.sum_a,
            sum_b = draft.sum_b,
            "teams balanced"
        );

        draft.teams
    }

    fn jittered<R: Rng + ?Sized>(&self, rating: f64, rng: &mut R) -> f64 {
        if self.jitter == 0.0 {
            return rating;
        }
        rating + rng.gen_range(-self.jitter..=self.jitter)
    }
}

/// Teams under construction with their running rating totals
struct Draft<P> {
    teams: Teams<P>,
    sum_a: f64,
    sum_b: f64,
    has_keeper_a: bool,
    has_keeper_b: bool,
}

impl<P: Rated> Draft<P> {
    fn with_capacity(total: usize) -> Self {
        let half = total / 2 + 1;
        Self {
            teams: Teams {
                team_a: Vec::with_capacity(half),
                team_b: Vec::with_capacity(half),
            },
            sum_a: 0.0,
            sum_b: 0.0,
            has_keeper_a: false,
            has_keeper_b: false,
        }
    }

    /// Side with the lower running total; ties go to A
    fn lower_side(&self) -> Side {
        if self.sum_a <= self.sum_b {
            Side::A
        } else {
            Side::B
        }
    }

    fn assign(&mut self, side: Side, player: P) {
        match side {
            Side::A => self.sum_a += player.rating(),
            Side::B => self.sum_b += player.rating(),
        }
        self.teams.team_mut(side).push(player);
    }
}

/// Balance players with the default jitter and fresh randomness
pub fn balance<P: Rated>(players: Vec<P>) -> Teams<P> {
    Balancer::default().balance(players)
}

/// Balance players with the default jitter and the given random source
pub fn balance_with_rng<P, R>(players: Vec<P>, rng: &mut R) -> Teams<P>
where
    P: Rated,
    R: Rng + ?Sized,
{
    Balancer::default().balance_with_rng(players, rng)
}

#[cfg(test)]
#[path = "balance_tests.rs"]
mod balance_tests;
