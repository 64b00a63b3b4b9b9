//! Canonical draughts rule constants.
//!
//! Holds the starting layout, the fixed role assignment between the computer
//! and the human, and the score bounds shared by the evaluator and the search.

use crate::game_state::draughts_types::Player;

/// Starting position in board-layout notation (row 0 first).
///
/// `b`/`w` are men, `B`/`W` kings, `.` an empty square.
pub const STARTING_LAYOUT: &str =
    ".b.b.b.b/b.b.b.b./.b.b.b.b/......../......../w.w.w.w./.w.w.w.w/w.w.w.w.";

/// The computer plays Black, moves first, and is the maximizing side.
pub const COMPUTER_PLAYER: Player = Player::Black;

/// The human plays White and is the minimizing side.
pub const HUMAN_PLAYER: Player = COMPUTER_PLAYER.opponent();

/// Pieces each side starts with.
pub const PIECES_PER_SIDE: usize = 12;

/// Weight of a king relative to a man in the material evaluation.
pub const KING_WEIGHT: i32 = 2;

/// Score of a position with no White pieces left. Its negation is the score
/// with no Black pieces left. Equals the largest possible material balance.
pub const WIN_SCORE: i32 = PIECES_PER_SIDE as i32 * KING_WEIGHT;

/// Score of a position where the side to move has no legal successor.
pub const BLOCKADE_SCORE: i32 = 0;
