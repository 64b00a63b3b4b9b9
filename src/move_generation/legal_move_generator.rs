//! Full legal move generation pipeline.
//!
//! Explores every completed capture chain first; only when no capture exists
//! anywhere does it fall back to single steps. Pieces are scanned in row-major
//! order and directions in [`Direction::ALL`] order, which fixes the order of
//! the returned successors.

use crate::game_state::board::Board;
use crate::game_state::draughts_types::*;
use crate::move_generation::legal_move_apply::{apply_jump, apply_step, promotes};
use crate::move_generation::legal_move_checks::{
    can_step, capture_available_from, jump_in_direction,
};
use crate::move_generation::move_generator::{GeneratedMove, MoveGenerator, MoveKind};

pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_successors(&self, board: &Board, player: Player) -> Vec<GeneratedMove> {
        let mut moves = Vec::<GeneratedMove>::with_capacity(16);

        for from in board.squares_of(player) {
            let mut path = vec![from];
            collect_capture_chains(board, player, from, &mut path, false, &mut moves);
        }

        if moves.is_empty() {
            collect_steps(board, player, &mut moves);
        }

        moves
    }
}

/// Successor boards only, for callers that do not need move provenance.
pub fn generate_successors(board: &Board, player: Player) -> Vec<Board> {
    LegalMoveGenerator
        .generate_successors(board, player)
        .into_iter()
        .map(|mv| mv.board_after_move)
        .collect()
}

/// Depth-first walk over jump chains starting at `from`.
///
/// A chain is recorded only once its last landing square offers no further
/// jump for the same piece, so partial chains never become successors.
fn collect_capture_chains(
    board: &Board,
    player: Player,
    from: Square,
    path: &mut Vec<Square>,
    promoted: bool,
    out: &mut Vec<GeneratedMove>,
) {
    for direction in Direction::ALL {
        let Some((over, to)) = jump_in_direction(player, board, from, direction) else {
            continue;
        };

        let next = apply_jump(board, from, over, to);
        let promoted = promoted || promotes(board.cell(from), to);
        path.push(to);

        if capture_available_from(player, &next, to) {
            collect_capture_chains(&next, player, to, path, promoted, out);
        } else {
            out.push(GeneratedMove {
                kind: MoveKind::Capture { path: path.clone() },
                board_after_move: next,
                promoted,
            });
        }

        path.pop();
    }
}

fn collect_steps(board: &Board, player: Player, out: &mut Vec<GeneratedMove>) {
    for from in board.squares_of(player) {
        for direction in Direction::ALL {
            let Some(to) = from.offset(direction, 1) else {
                continue;
            };
            if !can_step(player, board, from, to) {
                continue;
            }

            out.push(GeneratedMove {
                kind: MoveKind::Step { from, to },
                board_after_move: apply_step(board, from, to),
                promoted: promotes(board.cell(from), to),
            });
        }
    }
}
