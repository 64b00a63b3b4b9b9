//! State transitions: stepping, jumping and promotion.
//!
//! Both transitions return a new board and never touch the input. Callers are
//! expected to have validated the move with `can_step` / `can_jump`; applying
//! a move from an empty square is a programming error and panics.

use crate::game_state::board::Board;
use crate::game_state::draughts_types::*;

/// The piece that lands on `to` after moving `piece` there.
///
/// Promotion depends only on the landing row, never on where the piece came from.
#[inline]
pub fn landing_piece(piece: Cell, to: Square) -> Cell {
    match piece.owner() {
        Some(owner) if to.row == owner.back_rank() => piece.crowned(),
        _ => piece,
    }
}

/// Whether moving `piece` onto `to` crowns it.
#[inline]
pub fn promotes(piece: Cell, to: Square) -> bool {
    !piece.is_king() && landing_piece(piece, to).is_king()
}

pub fn apply_step(board: &Board, from: Square, to: Square) -> Board {
    let piece = board.cell(from);
    assert!(!piece.is_empty(), "apply_step from empty square {from:?}");

    board
        .with_cell(from, Cell::Empty)
        .with_cell(to, landing_piece(piece, to))
}

pub fn apply_jump(board: &Board, from: Square, over: Square, to: Square) -> Board {
    let piece = board.cell(from);
    assert!(!piece.is_empty(), "apply_jump from empty square {from:?}");

    board
        .with_cell(from, Cell::Empty)
        .with_cell(over, Cell::Empty)
        .with_cell(to, landing_piece(piece, to))
}
