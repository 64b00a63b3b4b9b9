//! Difficulty policy: maps the level a player picks to how the computer moves.
//!
//! Level 0 plays a uniformly random legal move; every other level runs the
//! alpha-beta search with a fixed depth limit.

use crate::engines::engine_minimax::MinimaxEngine;
use crate::engines::engine_random::RandomEngine;
use crate::engines::engine_trait::Engine;
use crate::game_state::board::Board;
use crate::game_state::draughts_rules::COMPUTER_PLAYER;

/// Named difficulty levels, from the weakest to the strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Feeble,
    Alright,
    Solid,
    Strong,
    Bonkers,
}

/// What the computer does with its turn at a given difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepthPolicy {
    RandomMove,
    Search { depth_limit: u8 },
}

impl Difficulty {
    /// Any level above 3 is the strongest setting.
    pub const fn from_level(level: u8) -> Self {
        match level {
            0 => Difficulty::Feeble,
            1 => Difficulty::Alright,
            2 => Difficulty::Solid,
            3 => Difficulty::Strong,
            _ => Difficulty::Bonkers,
        }
    }

    pub const fn depth_policy(self) -> DepthPolicy {
        match self {
            Difficulty::Feeble => DepthPolicy::RandomMove,
            Difficulty::Alright => DepthPolicy::Search { depth_limit: 1 },
            Difficulty::Solid => DepthPolicy::Search { depth_limit: 2 },
            Difficulty::Strong => DepthPolicy::Search { depth_limit: 5 },
            Difficulty::Bonkers => DepthPolicy::Search { depth_limit: 10 },
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Difficulty::Feeble => "feeble",
            Difficulty::Alright => "alright",
            Difficulty::Solid => "solid",
            Difficulty::Strong => "strong",
            Difficulty::Bonkers => "bonkers",
        }
    }

    /// Engine implementing this level. `seed` only affects the random level.
    pub fn engine(self, seed: Option<u64>) -> Box<dyn Engine> {
        match self.depth_policy() {
            DepthPolicy::RandomMove => Box::new(match seed {
                Some(seed) => RandomEngine::with_seed(seed),
                None => RandomEngine::new(),
            }),
            DepthPolicy::Search { depth_limit } => Box::new(MinimaxEngine::new(depth_limit)),
        }
    }
}

/// The computer's reply to `board` at `level`.
///
/// When the computer has no legal move the board comes back unchanged.
pub fn compute_computer_move(board: &Board, level: u8) -> Board {
    let difficulty = Difficulty::from_level(level);
    let mut engine = difficulty.engine(None);

    match engine.choose_move(board, COMPUTER_PLAYER) {
        Ok(out) => {
            for line in &out.info_lines {
                log::debug!("{} [{}]: {line}", engine.name(), difficulty.name());
            }
            out.best_board.unwrap_or(*board)
        }
        Err(err) => {
            log::warn!("{} failed to choose a move: {err}", engine.name());
            *board
        }
    }
}
