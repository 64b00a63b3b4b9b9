//! Standalone engine-vs-engine series runner.
//!
//! Run with:
//! `cargo run --release --bin engine_match_series`
//! `cargo run --release --bin engine_match_series -- --verbose --games 20 --black 3 --white 1`
//!
//! `--black` and `--white` take difficulty levels (0 random, 1-4 search).
//! Set `RUST_LOG=debug` to see the engines' info lines.

use plum_draughts::engines::difficulty::Difficulty;
use plum_draughts::utils::engine_match_harness::{
    play_engine_match_series, MatchConfig, MatchSeriesConfig,
};

struct Args {
    verbose: bool,
    games: u16,
    player1_level: u8,
    player2_level: u8,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        verbose: false,
        games: 10,
        player1_level: 3,
        player2_level: 2,
    };

    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--verbose" | "-v" => args.verbose = true,
            "--games" => args.games = parse_value(&arg, it.next())?,
            "--black" => args.player1_level = parse_value(&arg, it.next())?,
            "--white" => args.player2_level = parse_value(&arg, it.next())?,
            other => return Err(format!("unknown argument: {other}")),
        }
    }

    Ok(args)
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: Option<String>) -> Result<T, String> {
    let value = value.ok_or_else(|| format!("{flag} needs a value"))?;
    value
        .parse::<T>()
        .map_err(|_| format!("invalid value for {flag}: {value}"))
}

fn main() -> Result<(), String> {
    let args = parse_args()?;

    let default_filter = if args.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    // Sides are shuffled per game, so player 1 only starts as Black nominally.
    let player1 = Difficulty::from_level(args.player1_level);
    let player2 = Difficulty::from_level(args.player2_level);
    log::info!(
        "player1={} player2={} games={}",
        player1.name(),
        player2.name(),
        args.games
    );

    let stats = play_engine_match_series(
        || player1.engine(None),
        || player2.engine(None),
        MatchSeriesConfig {
            games: args.games,
            base_seed: 1234,
            per_game: MatchConfig {
                max_plies: 200,
                opening_min_plies: 2,
                opening_max_plies: 6,
            },
            verbose: args.verbose,
        },
    )?;

    println!("{}", stats.report());
    println!("outcomes: {:?}", stats.outcomes);
    Ok(())
}
