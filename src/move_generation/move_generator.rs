use crate::game_state::board::Board;
use crate::game_state::draughts_types::{Player, Square};

/// How a successor board was reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveKind {
    Step { from: Square, to: Square },
    /// Origin followed by every landing square of the chain, in order.
    Capture { path: Vec<Square> },
}

impl MoveKind {
    #[inline]
    pub fn is_capture(&self) -> bool {
        matches!(self, MoveKind::Capture { .. })
    }

    /// Number of pieces removed by this move.
    #[inline]
    pub fn captured_count(&self) -> usize {
        match self {
            MoveKind::Step { .. } => 0,
            MoveKind::Capture { path } => path.len().saturating_sub(1),
        }
    }

    #[inline]
    pub fn origin(&self) -> Square {
        match self {
            MoveKind::Step { from, .. } => *from,
            MoveKind::Capture { path } => path[0],
        }
    }

    #[inline]
    pub fn destination(&self) -> Square {
        match self {
            MoveKind::Step { to, .. } => *to,
            MoveKind::Capture { path } => path[path.len() - 1],
        }
    }
}

#[derive(Debug, Clone)]
pub struct GeneratedMove {
    pub kind: MoveKind,
    pub board_after_move: Board,
    /// The moving man was crowned somewhere along the move.
    pub promoted: bool,
}

pub trait MoveGenerator: Send + Sync {
    /// Every legal successor of `board` with `player` to move, in generation order.
    fn generate_successors(&self, board: &Board, player: Player) -> Vec<GeneratedMove>;
}
