//! Pure rule predicates: step and jump legality, capture availability, and
//! end-of-game detection. None of these mutate their inputs.

use crate::game_state::board::Board;
use crate::game_state::draughts_types::*;

/// Men only move toward the opponent's back rank; kings move either way.
#[inline]
fn row_direction_allowed(piece: Cell, player: Player, d_row: i32) -> bool {
    piece.is_king() || d_row == i32::from(player.forward_row_step())
}

/// Whether `player` may step the piece on `from` one diagonal square to `to`.
pub fn can_step(player: Player, board: &Board, from: Square, to: Square) -> bool {
    let piece = board.cell(from);
    if !piece.is_owned_by(player) || !board.cell(to).is_empty() {
        return false;
    }

    let (d_row, d_col) = from.delta_to(to);
    if d_row.abs() != 1 || d_col.abs() != 1 {
        return false;
    }

    row_direction_allowed(piece, player, d_row)
}

/// Whether `player` may jump the piece on `from` over `over` into `to`.
///
/// `over` and `to` must be one and two diagonal steps from `from` in the same
/// direction; any other geometry is simply not a jump.
pub fn can_jump(player: Player, board: &Board, from: Square, over: Square, to: Square) -> bool {
    let piece = board.cell(from);
    if !piece.is_owned_by(player) || !board.cell(to).is_empty() {
        return false;
    }

    let (d_row, d_col) = from.delta_to(to);
    if d_row.abs() != 2 || d_col.abs() != 2 || from.delta_to(over) != (d_row / 2, d_col / 2) {
        return false;
    }

    if !row_direction_allowed(piece, player, d_row / 2) {
        return false;
    }

    board.cell(over).is_owned_by(player.opponent())
}

/// Jump along `direction` from `from`, if the board allows it.
///
/// Returns the `(over, to)` squares of the jump.
#[inline]
pub fn jump_in_direction(
    player: Player,
    board: &Board,
    from: Square,
    direction: Direction,
) -> Option<(Square, Square)> {
    let over = from.offset(direction, 1)?;
    let to = from.offset(direction, 2)?;
    can_jump(player, board, from, over, to).then_some((over, to))
}

/// Whether the piece on `from` has at least one jump available.
///
/// This is the landing-square check that decides if a capture chain goes on.
pub fn capture_available_from(player: Player, board: &Board, from: Square) -> bool {
    Direction::ALL
        .iter()
        .any(|&direction| jump_in_direction(player, board, from, direction).is_some())
}

/// Whether any piece of `player` has a jump; if so, plain steps are illegal.
pub fn any_capture_available(player: Player, board: &Board) -> bool {
    board
        .squares_of(player)
        .any(|from| capture_available_from(player, board, from))
}

/// Black wins once White has no pieces left.
#[inline]
pub fn black_wins(board: &Board) -> bool {
    board.piece_count(Player::White) == 0
}

/// White wins once Black has no pieces left.
#[inline]
pub fn white_wins(board: &Board) -> bool {
    board.piece_count(Player::Black) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: usize, col: usize) -> Square {
        Square::new(row, col)
    }

    #[test]
    fn men_step_forward_only() {
        let board = Board::with_pieces(&[(sq(3, 2), Cell::BlackMan), (sq(4, 5), Cell::WhiteMan)]);

        assert!(can_step(Player::Black, &board, sq(3, 2), sq(4, 3)));
        assert!(can_step(Player::Black, &board, sq(3, 2), sq(4, 1)));
        assert!(!can_step(Player::Black, &board, sq(3, 2), sq(2, 3)));

        assert!(can_step(Player::White, &board, sq(4, 5), sq(3, 4)));
        assert!(!can_step(Player::White, &board, sq(4, 5), sq(5, 6)));
    }

    #[test]
    fn kings_step_both_ways() {
        let board = Board::with_pieces(&[(sq(3, 2), Cell::BlackKing)]);
        for to in [sq(4, 3), sq(4, 1), sq(2, 3), sq(2, 1)] {
            assert!(can_step(Player::Black, &board, sq(3, 2), to), "{to:?}");
        }
    }

    #[test]
    fn step_rejects_wrong_owner_occupied_target_and_long_moves() {
        let board = Board::with_pieces(&[(sq(3, 2), Cell::BlackMan), (sq(4, 3), Cell::WhiteMan)]);

        assert!(!can_step(Player::White, &board, sq(3, 2), sq(4, 1)));
        assert!(!can_step(Player::Black, &board, sq(3, 2), sq(4, 3)));
        assert!(!can_step(Player::Black, &board, sq(3, 2), sq(5, 4)));
        assert!(!can_step(Player::Black, &board, sq(3, 2), sq(4, 2)));
        assert!(!can_step(Player::Black, &board, sq(0, 0), sq(1, 1)));
    }

    #[test]
    fn jump_requires_opponent_in_between_and_empty_landing() {
        let board = Board::with_pieces(&[
            (sq(4, 3), Cell::BlackMan),
            (sq(5, 4), Cell::WhiteMan),
            (sq(5, 2), Cell::BlackMan),
        ]);

        assert!(can_jump(Player::Black, &board, sq(4, 3), sq(5, 4), sq(6, 5)));
        // Own piece in between.
        assert!(!can_jump(Player::Black, &board, sq(4, 3), sq(5, 2), sq(6, 1)));
        // Mismatched geometry.
        assert!(!can_jump(Player::Black, &board, sq(4, 3), sq(5, 4), sq(6, 1)));

        let blocked = board.with_cell(sq(6, 5), Cell::WhiteMan);
        assert!(!can_jump(Player::Black, &blocked, sq(4, 3), sq(5, 4), sq(6, 5)));
    }

    #[test]
    fn men_cannot_capture_backwards_but_kings_can() {
        let man = Board::with_pieces(&[(sq(4, 3), Cell::BlackMan), (sq(3, 2), Cell::WhiteKing)]);
        assert!(!can_jump(Player::Black, &man, sq(4, 3), sq(3, 2), sq(2, 1)));

        let king = man.with_cell(sq(4, 3), Cell::BlackKing);
        assert!(can_jump(Player::Black, &king, sq(4, 3), sq(3, 2), sq(2, 1)));
    }

    #[test]
    fn any_capture_scans_every_piece() {
        let quiet = Board::new_game();
        assert!(!any_capture_available(Player::Black, &quiet));
        assert!(!any_capture_available(Player::White, &quiet));

        let tactical = Board::with_pieces(&[
            (sq(0, 1), Cell::BlackMan),
            (sq(4, 3), Cell::BlackMan),
            (sq(5, 4), Cell::WhiteMan),
        ]);
        assert!(any_capture_available(Player::Black, &tactical));
        assert!(capture_available_from(Player::Black, &tactical, sq(4, 3)));
        assert!(!capture_available_from(Player::Black, &tactical, sq(0, 1)));
        // Adjacent men attack each other: White jumps (5,4) -> (3,2).
        assert!(any_capture_available(Player::White, &tactical));

        let retreated = Board::with_pieces(&[(sq(4, 3), Cell::BlackMan), (sq(3, 4), Cell::WhiteMan)]);
        // The White man would have to capture backwards.
        assert!(!any_capture_available(Player::White, &retreated));
    }

    #[test]
    fn win_detection_counts_kings() {
        let only_black = Board::with_pieces(&[(sq(2, 1), Cell::BlackKing)]);
        assert!(black_wins(&only_black));
        assert!(!white_wins(&only_black));

        let both = only_black.with_cell(sq(7, 0), Cell::WhiteKing);
        assert!(!black_wins(&both));
        assert!(!white_wins(&both));
    }
}
