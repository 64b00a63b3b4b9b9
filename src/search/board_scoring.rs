//! Pluggable board evaluation interfaces and the baseline material scorer.
//!
//! Search remains modular by delegating static position scoring to this trait,
//! allowing alternate heuristics to be swapped without altering search code.

use crate::game_state::board::Board;
use crate::game_state::draughts_rules::KING_WEIGHT;
use crate::game_state::draughts_types::Cell;

pub trait BoardScorer: Send + Sync {
    /// Score from Black's (the maximizer's) point of view.
    fn score(&self, board: &Board) -> i32;
}

/// Men count one, kings count [`KING_WEIGHT`]. Nothing positional.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl MaterialScorer {
    #[inline]
    pub const fn piece_value(cell: Cell) -> i32 {
        match cell {
            Cell::Empty => 0,
            Cell::BlackMan => 1,
            Cell::WhiteMan => -1,
            Cell::BlackKing => KING_WEIGHT,
            Cell::WhiteKing => -KING_WEIGHT,
        }
    }
}

impl BoardScorer for MaterialScorer {
    fn score(&self, board: &Board) -> i32 {
        [
            Cell::BlackMan,
            Cell::WhiteMan,
            Cell::BlackKing,
            Cell::WhiteKing,
        ]
        .into_iter()
        .map(|cell| board.count(cell) as i32 * Self::piece_value(cell))
        .sum()
    }
}

/// Static material evaluation used at the search horizon.
#[inline]
pub fn evaluate(board: &Board) -> i32 {
    MaterialScorer.score(board)
}
