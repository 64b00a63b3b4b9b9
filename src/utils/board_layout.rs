//! Board-layout text parser and generator.
//!
//! A layout is eight `/`-separated rows, row 0 first, each exactly eight
//! characters: `.` empty, `b` black man, `w` white man, `B` black king,
//! `W` white king. Surrounding whitespace is ignored.

use crate::game_state::board::Board;
use crate::game_state::draughts_types::*;

pub fn parse_layout(layout: &str) -> Result<Board, String> {
    let rows: Vec<&str> = layout.trim().split('/').collect();
    if rows.len() != BOARD_SIZE {
        return Err(format!(
            "Board layout must contain {BOARD_SIZE} rows, found {}",
            rows.len()
        ));
    }

    let mut board = Board::empty();

    for (row, row_str) in rows.iter().enumerate() {
        let chars: Vec<char> = row_str.chars().collect();
        if chars.len() != BOARD_SIZE {
            return Err(format!(
                "Row {row} must contain {BOARD_SIZE} cells, found {}",
                chars.len()
            ));
        }

        for (col, ch) in chars.into_iter().enumerate() {
            let cell = cell_from_layout_char(ch)
                .ok_or_else(|| format!("Invalid cell character '{ch}' at row {row}"))?;
            if !cell.is_empty() {
                board = board.with_cell(Square::new(row, col), cell);
            }
        }
    }

    Ok(board)
}

pub fn generate_layout(board: &Board) -> String {
    let mut out = String::with_capacity(BOARD_SIZE * (BOARD_SIZE + 1));

    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            out.push(cell_to_layout_char(board.cell(Square::new(row, col))));
        }
        if row + 1 < BOARD_SIZE {
            out.push('/');
        }
    }

    out
}

fn cell_from_layout_char(ch: char) -> Option<Cell> {
    match ch {
        '.' => Some(Cell::Empty),
        'b' => Some(Cell::BlackMan),
        'w' => Some(Cell::WhiteMan),
        'B' => Some(Cell::BlackKing),
        'W' => Some(Cell::WhiteKing),
        _ => None,
    }
}

fn cell_to_layout_char(cell: Cell) -> char {
    match cell {
        Cell::Empty => '.',
        Cell::BlackMan => 'b',
        Cell::WhiteMan => 'w',
        Cell::BlackKing => 'B',
        Cell::WhiteKing => 'W',
    }
}
