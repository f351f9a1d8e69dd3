//! Property tests for the team balancer
//!
//! These cover the guarantees that must hold for every roster:
//! - No player is lost or duplicated
//! - Two goalkeepers always end up on different sides
//! - The final rating gap never exceeds the highest single rating
//! - A fixed seed reproduces the same split
//! - Mixed rosters almost always split within one player of each other

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use team_balancer::{Balancer, Player, Position, Side, Teams};

fn position() -> impl Strategy<Value = Position> {
    prop_oneof![
        Just(Position::Goalkeeper),
        Just(Position::Defender),
        Just(Position::Midfielder),
        Just(Position::Forward),
        Just(Position::Utility),
        "[a-z]{3,8}".prop_map(|label| Position::parse(&label)),
    ]
}

fn roster(max: usize) -> impl Strategy<Value = Vec<Player>> {
    prop::collection::vec((0.0f64..=100.0, position()), 0..max).prop_map(|entries| {
        entries
            .into_iter()
            .enumerate()
            .map(|(i, (rating, position))| {
                Player::new(format!("p{}", i), rating, position).with_id(i.to_string())
            })
            .collect()
    })
}

fn ids(teams: &Teams<Player>) -> Vec<String> {
    let mut ids: Vec<String> = teams
        .iter()
        .map(|(_, p)| p.id.clone().unwrap_or_default())
        .collect();
    ids.sort();
    ids
}

fn keepers(team: &[Player]) -> usize {
    team.iter().filter(|p| p.position.is_goalkeeper()).count()
}

proptest! {
    #[test]
    fn every_player_is_placed_once(players in roster(30), seed in any::<u64>()) {
        let mut expected: Vec<String> = players.iter().filter_map(|p| p.id.clone()).collect();
        expected.sort();

        let teams = Balancer::default().balance_with_rng(players, &mut StdRng::seed_from_u64(seed));

        prop_assert_eq!(ids(&teams), expected);
    }

    #[test]
    fn two_keepers_are_split(outfield in roster(20), seed in any::<u64>()) {
        let mut players: Vec<Player> = outfield
            .into_iter()
            .filter(|p| !p.position.is_goalkeeper())
            .collect();
        players.push(Player::new("gk1", 70.0, Position::Goalkeeper));
        players.insert(0, Player::new("gk2", 40.0, Position::Goalkeeper));

        let teams = Balancer::default().balance_with_rng(players, &mut StdRng::seed_from_u64(seed));

        prop_assert_eq!(keepers(&teams.team_a), 1);
        prop_assert_eq!(keepers(&teams.team_b), 1);
    }

    #[test]
    fn outfield_gap_bounded_by_best_rating(ratings in prop::collection::vec(0.0f64..=100.0, 1..25), seed in any::<u64>()) {
        let best = ratings.iter().cloned().fold(0.0, f64::max);
        let players: Vec<Player> = ratings
            .iter()
            .enumerate()
            .map(|(i, &r)| Player::new(format!("p{}", i), r, Position::Midfielder))
            .collect();

        let teams = Balancer::default().balance_with_rng(players, &mut StdRng::seed_from_u64(seed));

        prop_assert!(teams.imbalance() <= best + 1e-9);
    }

    #[test]
    fn seeded_runs_repeat(players in roster(20), seed in any::<u64>()) {
        let balancer = Balancer::default();
        let first = balancer.balance_with_rng(players.clone(), &mut StdRng::seed_from_u64(seed));
        let second = balancer.balance_with_rng(players, &mut StdRng::seed_from_u64(seed));

        prop_assert_eq!(first, second);
    }

    #[test]
    fn equal_ratings_split_evenly(count in 0usize..30) {
        let players: Vec<Player> = (0..count)
            .map(|i| Player::new(format!("p{}", i), 50.0, Position::Forward))
            .collect();

        let teams = Balancer::with_jitter(0.0).balance(players);

        prop_assert!(teams.team_a.len() >= teams.team_b.len());
        prop_assert!(teams.team_a.len() - teams.team_b.len() <= 1);
    }
}

fn mixed_rosters(count: usize) -> impl Strategy<Value = Vec<Vec<Player>>> {
    let entry = (30.0f64..95.0, prop::bool::weighted(0.1));
    let roster = prop::collection::vec(entry, 4..=20).prop_map(|entries| {
        entries
            .into_iter()
            .enumerate()
            .map(|(i, (rating, keeper))| {
                let position = if keeper { Position::Goalkeeper } else { Position::Midfielder };
                Player::new(format!("p{}", i), rating, position)
            })
            .collect::<Vec<_>>()
    });
    prop::collection::vec(roster, count)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn mixed_rosters_mostly_split_by_size(rosters in mixed_rosters(200), seed in any::<u64>()) {
        let balancer = Balancer::default();
        let mut rng = StdRng::seed_from_u64(seed);

        let even = rosters
            .into_iter()
            .map(|players| balancer.balance_with_rng(players, &mut rng))
            .filter(|teams| teams.team_a.len().abs_diff(teams.team_b.len()) <= 1)
            .count();

        // Typically ~97%; skew only comes from a few very strong players
        prop_assert!(even >= 170, "only {} of 200 rosters split evenly", even);
    }
}

#[test]
fn eleven_outfield_players_stay_within_greedy_bound() {
    let ratings = [99.0, 88.0, 77.0, 66.0, 55.0, 44.0, 33.0, 22.0, 11.0, 10.0, 9.0];

    for seed in 0..500 {
        let players: Vec<Player> = ratings
            .iter()
            .enumerate()
            .map(|(i, &r)| Player::new(format!("p{}", i), r, Position::Forward))
            .collect();

        let teams = Balancer::default().balance_with_rng(players, &mut StdRng::seed_from_u64(seed));

        assert_eq!(teams.len(), 11);
        assert!(teams.imbalance() <= 99.0, "seed {}: gap {}", seed, teams.imbalance());
    }
}

#[test]
fn reroll_usually_changes_the_split() {
    // Near-equal ratings: jitter should reshuffle across seeds
    let roster: Vec<Player> = (0..10)
        .map(|i| Player::new(format!("p{}", i), 60.0 + i as f64 * 0.5, Position::Midfielder))
        .collect();

    let mut splits = std::collections::HashSet::new();
    for seed in 0..50 {
        let teams = Balancer::default().balance_with_rng(roster.clone(), &mut StdRng::seed_from_u64(seed));
        let mut names: Vec<String> = teams.team(Side::A).iter().map(|p| p.name.clone()).collect();
        names.sort();
        splits.insert(names);
    }

    assert!(splits.len() > 1);
}
