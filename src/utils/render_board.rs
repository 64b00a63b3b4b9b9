//! Terminal-oriented board renderer.
//!
//! Creates a human-readable board view for debugging, logs and tests in
//! text environments. Row 0 (Black's home row) is printed at the top.

use crate::game_state::board::Board;
use crate::game_state::draughts_types::*;

/// Render the board to a multi-line string with row and column indices.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  0 1 2 3 4 5 6 7\n");

    for row in 0..BOARD_SIZE {
        out.push(char::from(b'0' + row as u8));
        out.push(' ');

        for col in 0..BOARD_SIZE {
            let sq = Square::new(row, col);
            out.push(cell_glyph(board.cell(sq), sq.is_dark()));
            if col + 1 < BOARD_SIZE {
                out.push(' ');
            }
        }

        out.push('\n');
    }

    out.push_str("  0 1 2 3 4 5 6 7");

    out
}

fn cell_glyph(cell: Cell, dark: bool) -> char {
    match cell {
        Cell::Empty if dark => '·',
        Cell::Empty => ' ',
        Cell::BlackMan => '●',
        Cell::WhiteMan => '○',
        Cell::BlackKing => '♚',
        Cell::WhiteKing => '♔',
    }
}
