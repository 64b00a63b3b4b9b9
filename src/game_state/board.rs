//! Immutable 8x8 board value.
//!
//! `Board` is the central model for the engine. It is `Copy`; every transition
//! builds a fresh board from the old one plus a delta, so a board handed out to
//! the search or to a caller can never be altered through another board.

use std::fmt;

use crate::game_state::draughts_rules::STARTING_LAYOUT;
use crate::game_state::draughts_types::*;
use crate::utils::board_layout::{generate_layout, parse_layout};
use crate::utils::render_board::render_board;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn new_game() -> Self {
        parse_layout(STARTING_LAYOUT).expect("starting layout should always parse")
    }

    #[inline]
    pub fn from_layout(layout: &str) -> Result<Self, String> {
        parse_layout(layout)
    }

    #[inline]
    pub fn get_layout(&self) -> String {
        generate_layout(self)
    }

    #[inline]
    pub fn cell(&self, square: Square) -> Cell {
        self.cells[square.row][square.col]
    }

    /// A copy of this board with `square` set to `cell`.
    #[inline]
    #[must_use]
    pub fn with_cell(&self, square: Square, cell: Cell) -> Self {
        let mut next = *self;
        next.cells[square.row][square.col] = cell;
        next
    }

    /// Builds a board from explicit placements on an otherwise empty grid.
    pub fn with_pieces(placements: &[(Square, Cell)]) -> Self {
        placements
            .iter()
            .fold(Self::empty(), |board, &(square, cell)| {
                board.with_cell(square, cell)
            })
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&c| c == cell)
            .count()
    }

    /// Men plus kings owned by `player`.
    pub fn piece_count(&self, player: Player) -> usize {
        self.count(player.man()) + self.count(player.king())
    }

    /// Squares holding a piece of `player`, in row-major scan order.
    pub fn squares_of(&self, player: Player) -> impl Iterator<Item = Square> + '_ {
        Square::all().filter(move |&sq| self.cell(sq).is_owned_by(player))
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.get_layout())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_board(self))
    }
}
