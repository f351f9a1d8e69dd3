//! Team Balancer CLI
//!
//! Split a roster into two even teams, re-roll splits and manage roster files.

use anyhow::{bail, Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;
use std::env;
use std::path::{Path, PathBuf};
use team_balancer::{Balancer, BalancerConfig, MatchUp, Player, Position, Roster, Side, Teams};
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("Team Balancer");
    println!();
    println!("Usage:");
    println!("  balancer balance <roster> [--seed N] [--jitter J] [--config FILE] [--json] [--out FILE]");
    println!("  balancer reroll <roster> [--times N] [--seed N] [--config FILE]");
    println!("  balancer check <roster> [--config FILE]");
    println!("  balancer add <roster> <name> <position> [--rating R]");
    println!();
    println!("Rosters are JSON (default) or TOML (.toml extension).");
    println!();
    println!("Positions:");
    for position in Position::KNOWN {
        println!("  {}", position);
    }
    println!("  (Italian labels such as Portiere, Difensore, Centrocampista, Attaccante, Jolly also work)");
    println!();
    println!("Examples:");
    println!("  balancer balance players.json --seed 7");
    println!("  balancer add players.json \"Marco Rossi\" Portiere --rating 72");
}

/// Options shared by the sub-commands
#[derive(Debug, Default)]
struct Options {
    seed: Option<u64>,
    jitter: Option<f64>,
    config: Option<PathBuf>,
    out: Option<PathBuf>,
    times: Option<u32>,
    rating: Option<f64>,
    json: bool,
}

/// Split arguments into positionals and parsed `--flag value` options
fn parse_args(args: &[String]) -> Result<(Vec<String>, Options)> {
    let mut positional = Vec::new();
    let mut opts = Options::default();

    let mut i = 0;
    while i < args.len() {
        let flag = args[i].as_str();
        let value = || {
            args.get(i + 1)
                .with_context(|| format!("{} requires a value", flag))
        };
        match flag {
            "--seed" | "-s" => {
                opts.seed = Some(value()?.parse().context("--seed must be an integer")?);
                i += 1;
            }
            "--jitter" | "-j" => {
                opts.jitter = Some(value()?.parse().context("--jitter must be a number")?);
                i += 1;
            }
            "--times" | "-n" => {
                opts.times = Some(value()?.parse().context("--times must be an integer")?);
                i += 1;
            }
            "--rating" | "-r" => {
                opts.rating = Some(value()?.parse().context("--rating must be a number")?);
                i += 1;
            }
            "--config" | "-c" => {
                opts.config = Some(PathBuf::from(value()?));
                i += 1;
            }
            "--out" | "-o" => {
                opts.out = Some(PathBuf::from(value()?));
                i += 1;
            }
            "--json" => opts.json = true,
            _ if flag.starts_with("--") => bail!("Unknown option: {}", flag),
            _ => positional.push(args[i].clone()),
        }
        i += 1;
    }

    Ok((positional, opts))
}

/// Config from `--config` (if given), with command-line overrides applied
fn load_config(opts: &Options) -> Result<BalancerConfig> {
    let mut config = match &opts.config {
        Some(path) => BalancerConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => BalancerConfig::default(),
    };
    if let Some(seed) = opts.seed {
        config.seed = Some(seed);
    }
    if let Some(jitter) = opts.jitter {
        config.jitter = jitter;
    }
    config.validate()?;
    Ok(config)
}

fn load_players(path: &Path, config: &BalancerConfig) -> Result<Vec<Player>> {
    let roster =
        Roster::load(path).with_context(|| format!("Failed to read roster {}", path.display()))?;
    let players = roster
        .validate(&config.validation())
        .with_context(|| format!("Invalid roster {}", path.display()))?;
    tracing::info!(players = players.len(), roster = %path.display(), "roster loaded");
    Ok(players)
}

fn rng_for(config: &BalancerConfig) -> StdRng {
    match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn run_balance(args: &[String]) -> Result<()> {
    let (positional, opts) = parse_args(args)?;
    let Some(roster_path) = positional.first() else {
        print_usage();
        bail!("balance requires a roster file");
    };

    let config = load_config(&opts)?;
    let players = load_players(Path::new(roster_path), &config)?;

    let balancer = Balancer::new(&config);
    let teams = balancer.balance_with_rng(players, &mut rng_for(&config));
    let matchup = MatchUp::new(&teams);

    if opts.json {
        let output = serde_json::json!({ "teams": teams, "summary": matchup });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        matchup.print_report(&teams);
    }

    if let Some(out) = &opts.out {
        let json = serde_json::to_string_pretty(&teams)?;
        std::fs::write(out, json)
            .with_context(|| format!("Failed to write teams to {}", out.display()))?;
        tracing::info!(path = %out.display(), "teams saved");
    }

    Ok(())
}

fn run_reroll(args: &[String]) -> Result<()> {
    let (positional, opts) = parse_args(args)?;
    let Some(roster_path) = positional.first() else {
        print_usage();
        bail!("reroll requires a roster file");
    };

    let config = load_config(&opts)?;
    let players = load_players(Path::new(roster_path), &config)?;
    let times = opts.times.unwrap_or(10).max(1);

    let balancer = Balancer::new(&config);
    let mut rng = rng_for(&config);
    let mut splits = HashSet::new();
    let mut worst: f64 = 0.0;
    let mut total_gap = 0.0;

    println!("=== Re-rolling {} times ===", times);
    println!("{:>5} {:>10} {:>10} {:>8}", "Roll", "Team A", "Team B", "Gap");
    println!("{}", "-".repeat(36));

    for roll in 1..=times {
        let teams = balancer.balance_with_rng(players.clone(), &mut rng);
        let gap = teams.imbalance();
        println!(
            "{:>5} {:>10.1} {:>10.1} {:>8.1}",
            roll,
            teams.rating_sum(Side::A),
            teams.rating_sum(Side::B),
            gap
        );
        worst = worst.max(gap);
        total_gap += gap;
        splits.insert(split_key(&teams));
    }

    println!();
    println!("Distinct splits: {}", splits.len());
    println!("Average gap: {:.1}, worst gap: {:.1}", total_gap / times as f64, worst);
    Ok(())
}

/// Team A membership, order-independent
fn split_key(teams: &Teams<Player>) -> Vec<String> {
    let mut keys: Vec<String> = teams.team_a.iter().map(|p| p.key().to_string()).collect();
    keys.sort();
    keys
}

fn run_check(args: &[String]) -> Result<()> {
    let (positional, opts) = parse_args(args)?;
    let Some(roster_path) = positional.first() else {
        print_usage();
        bail!("check requires a roster file");
    };

    let config = load_config(&opts)?;
    let players = load_players(Path::new(roster_path), &config)?;

    println!("{:<30} {:<14} {:>6}", "Player", "Position", "Rating");
    println!("{}", "-".repeat(52));
    for player in &players {
        println!("{:<30} {:<14} {:>6.1}", player.name, player.position, player.rating);
    }
    let keepers = players.iter().filter(|p| p.position.is_goalkeeper()).count();
    println!();
    println!("{} players, {} goalkeepers: roster OK", players.len(), keepers);
    Ok(())
}

fn run_add(args: &[String]) -> Result<()> {
    let (positional, opts) = parse_args(args)?;
    let [roster_path, name, position] = positional.as_slice() else {
        print_usage();
        bail!("add requires a roster file, a name and a position");
    };

    let path = Path::new(roster_path);
    let mut roster = if path.exists() {
        Roster::load(path).with_context(|| format!("Failed to read roster {}", path.display()))?
    } else {
        tracing::info!(roster = %path.display(), "creating new roster");
        Roster::default()
    };

    let position = Position::parse(position);
    if position.is_unknown() {
        tracing::warn!(%position, "unknown position, will play as outfield");
    }
    let player = roster.push_manual(name, opts.rating, position)?;
    println!("Added {} ({}, {:.0})", player.name, player.position, player.rating);

    roster
        .save(path)
        .with_context(|| format!("Failed to save roster {}", path.display()))?;
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return Ok(());
    }

    match args[1].as_str() {
        "balance" => run_balance(&args[2..]),
        "reroll" => run_reroll(&args[2..]),
        "check" => run_check(&args[2..]),
        "add" => run_add(&args[2..]),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            print_usage();
            bail!("Unknown command: {}", other)
        }
    }
}
