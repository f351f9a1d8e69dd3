//! Team summaries and text reports

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::balance::{Side, Teams};
use crate::types::{Line, Player};
use crate::Rated;

/// Aggregate view of one team
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamSummary {
    pub size: usize,
    pub rating_sum: f64,
    /// Mean rating (0 for an empty team)
    pub average: f64,
    pub goalkeepers: usize,
    /// Players per line, from the goal outwards
    pub lines: BTreeMap<Line, usize>,
}

impl TeamSummary {
    pub fn from_players<P: Rated>(players: &[P]) -> Self {
        let size = players.len();
        let rating_sum: f64 = players.iter().map(Rated::rating).sum();
        let average = if size == 0 {
            0.0
        } else {
            rating_sum / size as f64
        };

        let mut lines = BTreeMap::new();
        for player in players {
            *lines.entry(player.position().line()).or_insert(0) += 1;
        }

        Self {
            size,
            rating_sum,
            average,
            goalkeepers: lines.get(&Line::Goal).copied().unwrap_or(0),
            lines,
        }
    }
}

/// Side-by-side summary of a balanced pair of teams
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchUp {
    pub a: TeamSummary,
    pub b: TeamSummary,
}

impl MatchUp {
    pub fn new<P: Rated>(teams: &Teams<P>) -> Self {
        Self {
            a: TeamSummary::from_players(teams.team(Side::A)),
            b: TeamSummary::from_players(teams.team(Side::B)),
        }
    }

    pub fn summary(&self, side: Side) -> &TeamSummary {
        match side {
            Side::A => &self.a,
            Side::B => &self.b,
        }
    }

    /// Absolute difference of the two rating sums
    pub fn rating_gap(&self) -> f64 {
        (self.a.rating_sum - self.b.rating_sum).abs()
    }

    /// Generate a text report of both team sheets
    pub fn generate_report(&self, teams: &Teams<Player>) -> String {
        let mut report = String::new();
        report.push_str("=== Balanced Teams ===\n\n");

        for side in [Side::A, Side::B] {
            let summary = self.summary(side);
            report.push_str(&format!(
                "Team {:?} ({} players, total {:.0}, avg {:.1})\n",
                side, summary.size, summary.rating_sum, summary.average
            ));
            report.push_str(&"-".repeat(40));
            report.push('\n');

            for line in Line::ALL {
                let players: Vec<&Player> = teams
                    .team(side)
                    .iter()
                    .filter(|p| p.position.line() == line)
                    .collect();
                if players.is_empty() {
                    continue;
                }
                report.push_str(&format!("{}:\n", line.name()));
                for player in players {
                    report.push_str(&format!(
                        "  {:<28} {:<12} {:>5.1}\n",
                        player.name, player.position, player.rating
                    ));
                }
            }
            report.push('\n');
        }

        report.push_str(&format!("Rating gap: {:.1}\n", self.rating_gap()));
        report
    }

    /// Print report to stdout
    pub fn print_report(&self, teams: &Teams<Player>) {
        println!("{}", self.generate_report(teams));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    fn sample() -> Teams<Player> {
        Teams {
            team_a: vec![
                Player::new("Marco", 90.0, Position::Goalkeeper),
                Player::new("Sara", 60.0, Position::Midfielder),
                Player::new("Gio", 40.0, Position::Utility),
            ],
            team_b: vec![
                Player::new("Luca", 80.0, Position::Goalkeeper),
                Player::new("Anna", 70.0, Position::Forward),
            ],
        }
    }

    #[test]
    fn test_summary_counts() {
        let matchup = MatchUp::new(&sample());

        assert_eq!(matchup.a.size, 3);
        assert_eq!(matchup.a.rating_sum, 190.0);
        assert!((matchup.a.average - 190.0 / 3.0).abs() < 1e-9);
        assert_eq!(matchup.a.goalkeepers, 1);
        assert_eq!(matchup.a.lines.get(&Line::Midfield), Some(&2));
        assert_eq!(matchup.b.lines.get(&Line::Attack), Some(&1));
        assert_eq!(matchup.rating_gap(), 40.0);
    }

    #[test]
    fn test_empty_team_average_is_zero() {
        let summary = TeamSummary::from_players::<Player>(&[]);
        assert_eq!(summary.size, 0);
        assert_eq!(summary.average, 0.0);
        assert!(summary.lines.is_empty());
    }

    #[test]
    fn test_report_lists_players_by_line() {
        let teams = sample();
        let report = MatchUp::new(&teams).generate_report(&teams);

        assert!(report.contains("Team A (3 players, total 190, avg 63.3)"));
        assert!(report.contains("Goal:\n  Luca"));
        assert!(report.contains("Attack:\n  Anna"));
        assert!(report.contains("Rating gap: 40.0"));
        assert!(!report.contains("Defence:"));
    }
}
