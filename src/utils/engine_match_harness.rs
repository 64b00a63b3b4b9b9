//! Minimal head-to-head engine match harness for local testing.
//!
//! This module runs two `Engine` implementations against each other without
//! any UI, with an optional seeded random opening prefix. Black always moves
//! first. A side left without a legal move ends the game as a draw, matching
//! the score the search gives such positions.

use chrono::{DateTime, Local};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::time::Instant;

use crate::engines::engine_trait::Engine;
use crate::game_state::board::Board;
use crate::game_state::draughts_types::Player;
use crate::move_generation::legal_move_checks::{black_wins, white_wins};
use crate::move_generation::legal_move_generator::generate_successors;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    BlackWin,
    WhiteWin,
    DrawBlockade { blocked: Player },
    DrawMaxPlies,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerId {
    Player1,
    Player2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesOutcome {
    PlayerWin { player: PlayerId, side: Player },
    DrawBlockade,
    DrawMaxPlies,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
    pub opening_min_plies: u8,
    pub opening_max_plies: u8,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 200,
            opening_min_plies: 0,
            opening_max_plies: 4,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub started_at: DateTime<Local>,
    pub final_board: Board,
    /// Layouts after each random opening ply.
    pub opening_layouts: Vec<String>,
    /// Layouts after each engine ply.
    pub played_layouts: Vec<String>,
    pub black_move_count: u32,
    pub white_move_count: u32,
    pub black_total_time_ns: u128,
    pub white_total_time_ns: u128,
}

impl MatchResult {
    /// Plain-text record of the game: headers, then one layout per ply.
    pub fn transcript(&self, black_name: &str, white_name: &str) -> String {
        let mut out = String::new();
        out.push_str(&format!("[Date \"{}\"]\n", self.started_at.format("%Y.%m.%d")));
        out.push_str(&format!("[Time \"{}\"]\n", self.started_at.format("%H:%M:%S")));
        out.push_str(&format!("[Black \"{black_name}\"]\n"));
        out.push_str(&format!("[White \"{white_name}\"]\n"));
        out.push_str(&format!("[Result \"{}\"]\n\n", outcome_tag(self.outcome)));

        let plies = self.opening_layouts.iter().chain(self.played_layouts.iter());
        for (ply, layout) in plies.enumerate() {
            out.push_str(&format!("{}. {}\n", ply + 1, layout));
        }

        out
    }
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
    pub verbose: bool,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 9,
            base_seed: 0,
            per_game: MatchConfig::default(),
            verbose: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub started_at: Option<DateTime<Local>>,
    pub player1_wins: u16,
    pub player2_wins: u16,
    pub draws: u16,
    pub outcomes: Vec<SeriesOutcome>,
    pub player1_moves: u32,
    pub player2_moves: u32,
    pub player1_total_time_ns: u128,
    pub player2_total_time_ns: u128,
    pub player1_avg_move_time_ms: f64,
    pub player2_avg_move_time_ms: f64,
    pub overall_avg_move_time_ms: f64,
}

impl MatchSeriesStats {
    pub fn report(&self) -> String {
        let started = self
            .started_at
            .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| "-".to_owned());
        format!(
            "started={} games={} player1_wins={} player2_wins={} draws={} p1_avg_ms={:.3} p2_avg_ms={:.3} overall_avg_ms={:.3}",
            started,
            self.games,
            self.player1_wins,
            self.player2_wins,
            self.draws,
            self.player1_avg_move_time_ms,
            self.player2_avg_move_time_ms,
            self.overall_avg_move_time_ms
        )
    }
}

/// Play a single seeded engine-vs-engine match from the starting position.
pub fn play_engine_match(
    mut engine_black: Box<dyn Engine>,
    mut engine_white: Box<dyn Engine>,
    seed: u64,
    config: MatchConfig,
) -> Result<MatchResult, String> {
    play_engine_match_from_board_internal(
        Board::new_game(),
        &mut engine_black,
        &mut engine_white,
        seed,
        config,
        true,
    )
}

/// Play a single match from a caller-provided board, Black to move.
///
/// This entrypoint bypasses random opening plies and is intended for curated
/// positions such as endgame conversion checks.
pub fn play_engine_match_from_board(
    mut engine_black: Box<dyn Engine>,
    mut engine_white: Box<dyn Engine>,
    start_board: Board,
    seed: u64,
    config: MatchConfig,
) -> Result<MatchResult, String> {
    play_engine_match_from_board_internal(
        start_board,
        &mut engine_black,
        &mut engine_white,
        seed,
        config,
        false,
    )
}

fn play_engine_match_from_board_internal(
    mut board: Board,
    engine_black: &mut Box<dyn Engine>,
    engine_white: &mut Box<dyn Engine>,
    seed: u64,
    config: MatchConfig,
    apply_random_opening: bool,
) -> Result<MatchResult, String> {
    let started_at = Local::now();
    engine_black.new_game();
    engine_white.new_game();

    let mut to_move = Player::Black;
    let opening_layouts = if apply_random_opening {
        let (board_after_opening, next_to_move, layouts) = apply_seeded_random_opening(
            &board,
            seed,
            config.opening_min_plies,
            config.opening_max_plies,
        );
        board = board_after_opening;
        to_move = next_to_move;
        layouts
    } else {
        Vec::new()
    };

    let mut result = MatchResult {
        outcome: MatchOutcome::DrawMaxPlies,
        started_at,
        final_board: board,
        opening_layouts,
        played_layouts: Vec::new(),
        black_move_count: 0,
        white_move_count: 0,
        black_total_time_ns: 0,
        white_total_time_ns: 0,
    };

    for _ in 0..config.max_plies {
        if black_wins(&board) {
            result.outcome = MatchOutcome::BlackWin;
            break;
        }
        if white_wins(&board) {
            result.outcome = MatchOutcome::WhiteWin;
            break;
        }

        let successors = generate_successors(&board, to_move);
        if successors.is_empty() {
            result.outcome = MatchOutcome::DrawBlockade { blocked: to_move };
            break;
        }

        let started = Instant::now();
        let out = match to_move {
            Player::Black => engine_black.choose_move(&board, to_move)?,
            Player::White => engine_white.choose_move(&board, to_move)?,
        };
        let elapsed_ns = started.elapsed().as_nanos();

        match to_move {
            Player::Black => {
                result.black_move_count = result.black_move_count.saturating_add(1);
                result.black_total_time_ns = result.black_total_time_ns.saturating_add(elapsed_ns);
            }
            Player::White => {
                result.white_move_count = result.white_move_count.saturating_add(1);
                result.white_total_time_ns = result.white_total_time_ns.saturating_add(elapsed_ns);
            }
        }

        let chosen = out.best_board.unwrap_or(successors[0]);
        if !successors.contains(&chosen) {
            return Err(format!("engine returned illegal move for {to_move:?}"));
        }

        log::trace!("{to_move:?} played {}", chosen.get_layout());
        result.played_layouts.push(chosen.get_layout());
        board = chosen;
        to_move = to_move.opponent();
    }

    // A decisive final ply is only detected at the top of the next iteration.
    if result.outcome == MatchOutcome::DrawMaxPlies {
        if black_wins(&board) {
            result.outcome = MatchOutcome::BlackWin;
        } else if white_wins(&board) {
            result.outcome = MatchOutcome::WhiteWin;
        }
    }

    result.final_board = board;
    Ok(result)
}

/// Play a series of matches and aggregate win/loss/draw statistics.
///
/// Player sides are randomized each game (deterministic from `base_seed`).
pub fn play_engine_match_series<F1, F2>(
    player1_factory: F1,
    player2_factory: F2,
    config: MatchSeriesConfig,
) -> Result<MatchSeriesStats, String>
where
    F1: Fn() -> Box<dyn Engine>,
    F2: Fn() -> Box<dyn Engine>,
{
    let mut stats = MatchSeriesStats {
        games: config.games,
        started_at: Some(Local::now()),
        ..MatchSeriesStats::default()
    };
    let mut side_rng = StdRng::seed_from_u64(config.base_seed ^ 0xA5A5_5A5A_0123_4567);

    for i in 0..config.games {
        let player1_is_black = side_rng.random_bool(0.5);
        let seed = config.base_seed.wrapping_add(u64::from(i));
        if config.verbose {
            let (black, white) = if player1_is_black {
                ("Player1", "Player2")
            } else {
                ("Player2", "Player1")
            };
            log::info!(
                "[series] game {}/{} seed={} black={} white={}",
                i + 1,
                config.games,
                seed,
                black,
                white
            );
        }

        let result = if player1_is_black {
            play_engine_match(
                player1_factory(),
                player2_factory(),
                seed,
                config.per_game.clone(),
            )?
        } else {
            play_engine_match(
                player2_factory(),
                player1_factory(),
                seed,
                config.per_game.clone(),
            )?
        };

        let (p1_moves, p1_ns, p2_moves, p2_ns) = if player1_is_black {
            (
                result.black_move_count,
                result.black_total_time_ns,
                result.white_move_count,
                result.white_total_time_ns,
            )
        } else {
            (
                result.white_move_count,
                result.white_total_time_ns,
                result.black_move_count,
                result.black_total_time_ns,
            )
        };
        stats.player1_moves = stats.player1_moves.saturating_add(p1_moves);
        stats.player2_moves = stats.player2_moves.saturating_add(p2_moves);
        stats.player1_total_time_ns = stats.player1_total_time_ns.saturating_add(p1_ns);
        stats.player2_total_time_ns = stats.player2_total_time_ns.saturating_add(p2_ns);

        let winner_side = match result.outcome {
            MatchOutcome::BlackWin => Some(Player::Black),
            MatchOutcome::WhiteWin => Some(Player::White),
            MatchOutcome::DrawBlockade { .. } | MatchOutcome::DrawMaxPlies => None,
        };

        let mapped = match (winner_side, result.outcome) {
            (Some(side), _) => {
                let player1_won = (side == Player::Black) == player1_is_black;
                let player = if player1_won {
                    stats.player1_wins += 1;
                    PlayerId::Player1
                } else {
                    stats.player2_wins += 1;
                    PlayerId::Player2
                };
                SeriesOutcome::PlayerWin { player, side }
            }
            (None, MatchOutcome::DrawBlockade { .. }) => {
                stats.draws += 1;
                SeriesOutcome::DrawBlockade
            }
            (None, _) => {
                stats.draws += 1;
                SeriesOutcome::DrawMaxPlies
            }
        };
        stats.outcomes.push(mapped);

        if config.verbose {
            log::info!(
                "[series] game {}/{} result={:?} p1_wins={} p2_wins={} draws={}",
                i + 1,
                config.games,
                mapped,
                stats.player1_wins,
                stats.player2_wins,
                stats.draws
            );
        }
    }

    stats.player1_avg_move_time_ms =
        avg_ns_per_move_ms(stats.player1_total_time_ns, stats.player1_moves);
    stats.player2_avg_move_time_ms =
        avg_ns_per_move_ms(stats.player2_total_time_ns, stats.player2_moves);

    let total_ns = stats
        .player1_total_time_ns
        .saturating_add(stats.player2_total_time_ns);
    let total_moves = stats.player1_moves.saturating_add(stats.player2_moves);
    stats.overall_avg_move_time_ms = avg_ns_per_move_ms(total_ns, total_moves);

    Ok(stats)
}

#[inline]
fn avg_ns_per_move_ms(total_ns: u128, moves: u32) -> f64 {
    if moves == 0 {
        0.0
    } else {
        (total_ns as f64) / (moves as f64) / 1_000_000.0
    }
}

fn outcome_tag(outcome: MatchOutcome) -> &'static str {
    match outcome {
        MatchOutcome::BlackWin => "1-0",
        MatchOutcome::WhiteWin => "0-1",
        MatchOutcome::DrawBlockade { .. } | MatchOutcome::DrawMaxPlies => "1/2-1/2",
    }
}

/// Random plies from `initial`, Black first. Returns the board, the side to
/// move next, and the layout after each ply.
fn apply_seeded_random_opening(
    initial: &Board,
    seed: u64,
    min_plies: u8,
    max_plies: u8,
) -> (Board, Player, Vec<String>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = *initial;
    let mut to_move = Player::Black;
    let mut layouts = Vec::<String>::new();

    let low = min_plies.min(max_plies);
    let high = max_plies.max(min_plies);
    let target_plies = if low == high {
        low
    } else {
        rng.random_range(low..=high)
    };

    for _ in 0..target_plies {
        let successors = generate_successors(&board, to_move);
        if successors.is_empty() {
            break;
        }

        let idx = rng.random_range(0..successors.len());
        board = successors[idx];
        layouts.push(board.get_layout());
        to_move = to_move.opponent();
    }

    (board, to_move, layouts)
}
