/// Core value types for the 8x8 draughts board.
/// Everything here is `Copy`; boards and squares are passed around by value.

/// Board edge length. The engine only plays the fixed 8x8 variant.
pub const BOARD_SIZE: usize = 8;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Black,
    White,
}

impl Player {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Player::Black => 0,
            Player::White => 1,
        }
    }

    #[inline]
    pub const fn opponent(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// Black maximizes the search score, White minimizes it.
    #[inline]
    pub const fn is_maximizer(self) -> bool {
        matches!(self, Player::Black)
    }

    /// Row delta of a forward move for this side's men.
    #[inline]
    pub const fn forward_row_step(self) -> i8 {
        match self {
            Player::Black => 1,
            Player::White => -1,
        }
    }

    /// Row on which this side's men are crowned.
    #[inline]
    pub const fn back_rank(self) -> usize {
        match self {
            Player::Black => BOARD_SIZE - 1,
            Player::White => 0,
        }
    }

    #[inline]
    pub const fn man(self) -> Cell {
        match self {
            Player::Black => Cell::BlackMan,
            Player::White => Cell::WhiteMan,
        }
    }

    #[inline]
    pub const fn king(self) -> Cell {
        match self {
            Player::Black => Cell::BlackKing,
            Player::White => Cell::WhiteKing,
        }
    }
}

/// Occupant of a single square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    BlackMan,
    WhiteMan,
    BlackKing,
    WhiteKing,
}

impl Cell {
    #[inline]
    pub const fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::BlackMan | Cell::BlackKing => Some(Player::Black),
            Cell::WhiteMan | Cell::WhiteKing => Some(Player::White),
        }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    #[inline]
    pub const fn is_king(self) -> bool {
        matches!(self, Cell::BlackKing | Cell::WhiteKing)
    }

    #[inline]
    pub fn is_owned_by(self, player: Player) -> bool {
        self.owner() == Some(player)
    }

    /// The crowned version of this piece. Kings and empty cells are unchanged.
    #[inline]
    pub const fn crowned(self) -> Self {
        match self {
            Cell::BlackMan => Cell::BlackKing,
            Cell::WhiteMan => Cell::WhiteKing,
            other => other,
        }
    }
}

/// One of the four diagonal directions, as a (row, col) delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    pub d_row: i8,
    pub d_col: i8,
}

impl Direction {
    /// Fixed scan order used by move generation; root tie-breaks depend on it.
    pub const ALL: [Direction; 4] = [
        Direction { d_row: 1, d_col: 1 },
        Direction { d_row: 1, d_col: -1 },
        Direction { d_row: -1, d_col: 1 },
        Direction { d_row: -1, d_col: -1 },
    ];
}

/// On-board coordinate. Construction outside `0..8` panics; use
/// [`Square::try_new`] or [`Square::offset`] when leaving the board is possible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub row: usize,
    pub col: usize,
}

impl Square {
    #[inline]
    pub fn new(row: usize, col: usize) -> Self {
        assert!(
            row < BOARD_SIZE && col < BOARD_SIZE,
            "square ({row}, {col}) is off the board"
        );
        Self { row, col }
    }

    #[inline]
    pub fn try_new(row: i32, col: i32) -> Option<Self> {
        let size = BOARD_SIZE as i32;
        if (0..size).contains(&row) && (0..size).contains(&col) {
            Some(Self {
                row: row as usize,
                col: col as usize,
            })
        } else {
            None
        }
    }

    /// Square `distance` diagonal steps away, if it is still on the board.
    #[inline]
    pub fn offset(self, direction: Direction, distance: i32) -> Option<Self> {
        Self::try_new(
            self.row as i32 + i32::from(direction.d_row) * distance,
            self.col as i32 + i32::from(direction.d_col) * distance,
        )
    }

    /// Signed (row, col) delta from `self` to `other`.
    #[inline]
    pub fn delta_to(self, other: Square) -> (i32, i32) {
        (
            other.row as i32 - self.row as i32,
            other.col as i32 - self.col as i32,
        )
    }

    /// Dark squares are the only ones pieces ever occupy.
    #[inline]
    pub const fn is_dark(self) -> bool {
        (self.row + self.col) % 2 == 1
    }

    /// Iterates every square in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Square { row, col }))
    }
}

#[cfg(test)]
mod tests {
    use super::{Cell, Direction, Player, Square};

    #[test]
    fn opponent_roundtrips() {
        assert_eq!(Player::Black.opponent(), Player::White);
        assert_eq!(Player::White.opponent().opponent(), Player::White);
    }

    #[test]
    fn crowning_only_affects_men() {
        assert_eq!(Cell::BlackMan.crowned(), Cell::BlackKing);
        assert_eq!(Cell::WhiteMan.crowned(), Cell::WhiteKing);
        assert_eq!(Cell::BlackKing.crowned(), Cell::BlackKing);
        assert_eq!(Cell::Empty.crowned(), Cell::Empty);
    }

    #[test]
    fn offset_stops_at_board_edge() {
        let corner = Square::new(0, 1);
        assert_eq!(corner.offset(Direction::ALL[3], 1), None);
        assert_eq!(corner.offset(Direction::ALL[0], 2), Some(Square::new(2, 3)));
    }

    #[test]
    #[should_panic(expected = "off the board")]
    fn new_rejects_off_board_coordinates() {
        let _ = Square::new(8, 0);
    }

    #[test]
    fn all_squares_scan_row_major() {
        let squares: Vec<Square> = Square::all().collect();
        assert_eq!(squares.len(), 64);
        assert_eq!(squares[0], Square::new(0, 0));
        assert_eq!(squares[9], Square::new(1, 1));
    }
}
