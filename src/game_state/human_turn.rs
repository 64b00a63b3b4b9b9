//! Click-by-click validation of a human player's turn.
//!
//! The presentation layer forwards every square the player clicks to
//! [`HumanTurn::click`]. The first click selects a piece, the second names its
//! destination. When a capture exists anywhere the player must select a piece
//! that can capture, and after each jump leg the same piece keeps jumping for
//! as long as its landing square offers another jump.

use crate::game_state::board::Board;
use crate::game_state::draughts_types::*;
use crate::move_generation::legal_move_apply::{apply_jump, apply_step};
use crate::move_generation::legal_move_checks::{
    any_capture_available, can_jump, can_step, capture_available_from,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// A capture exists and the clicked piece cannot make one.
    MustCapture,
    /// The clicked square holds no piece of the player.
    NotYourPiece,
    /// Destination is a jump away but the jump is illegal.
    JumpNotPossible,
    /// The selected piece must capture and the destination is not a jump.
    MustJump,
    /// A capture chain is under way and the destination does not continue it.
    MustContinueChain,
    /// Destination is one diagonal away but the step is illegal.
    StepNotPossible,
    /// Destination is neither a step nor a jump away.
    IllegalTarget,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnEvent {
    Selected(Square),
    /// The turn is over; the board is the position after the move.
    Moved(Board),
    /// A jump leg landed and the same piece must jump again.
    ContinueJump(Board),
    /// Nothing was applied; the caller's board is unchanged.
    Rejected(RejectReason),
}

#[derive(Debug, Clone)]
pub struct HumanTurn {
    player: Player,
    selected: Option<Square>,
    jumping: bool,
    chain_in_progress: bool,
}

impl HumanTurn {
    pub fn new(player: Player) -> Self {
        Self {
            player,
            selected: None,
            jumping: false,
            chain_in_progress: false,
        }
    }

    #[inline]
    pub fn player(&self) -> Player {
        self.player
    }

    #[inline]
    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    #[inline]
    pub fn is_chain_in_progress(&self) -> bool {
        self.chain_in_progress
    }

    pub fn reset(&mut self) {
        self.selected = None;
        self.jumping = false;
        self.chain_in_progress = false;
    }

    pub fn click(&mut self, board: &Board, square: Square) -> TurnEvent {
        match self.selected {
            None => self.select(board, square),
            Some(from) if self.jumping => self.jump_target(board, from, square),
            Some(from) => self.step_target(board, from, square),
        }
    }

    fn select(&mut self, board: &Board, square: Square) -> TurnEvent {
        if any_capture_available(self.player, board) {
            if !capture_available_from(self.player, board, square) {
                return TurnEvent::Rejected(RejectReason::MustCapture);
            }
            self.selected = Some(square);
            self.jumping = true;
            return TurnEvent::Selected(square);
        }

        if !board.cell(square).is_owned_by(self.player) {
            return TurnEvent::Rejected(RejectReason::NotYourPiece);
        }
        self.selected = Some(square);
        TurnEvent::Selected(square)
    }

    fn jump_target(&mut self, board: &Board, from: Square, to: Square) -> TurnEvent {
        let (d_row, d_col) = from.delta_to(to);
        if d_row.abs() != 2 || d_col.abs() != 2 {
            if self.chain_in_progress {
                return TurnEvent::Rejected(RejectReason::MustContinueChain);
            }
            self.reset();
            return TurnEvent::Rejected(RejectReason::MustJump);
        }

        let over = Square::new(
            (from.row as i32 + d_row / 2) as usize,
            (from.col as i32 + d_col / 2) as usize,
        );
        if !can_jump(self.player, board, from, over, to) {
            return TurnEvent::Rejected(RejectReason::JumpNotPossible);
        }

        let next = apply_jump(board, from, over, to);
        if capture_available_from(self.player, &next, to) {
            self.selected = Some(to);
            self.chain_in_progress = true;
            TurnEvent::ContinueJump(next)
        } else {
            self.reset();
            TurnEvent::Moved(next)
        }
    }

    fn step_target(&mut self, board: &Board, from: Square, to: Square) -> TurnEvent {
        let (d_row, d_col) = from.delta_to(to);
        self.reset();

        if d_row.abs() != 1 || d_col.abs() != 1 {
            return TurnEvent::Rejected(RejectReason::IllegalTarget);
        }
        if !can_step(self.player, board, from, to) {
            return TurnEvent::Rejected(RejectReason::StepNotPossible);
        }

        TurnEvent::Moved(apply_step(board, from, to))
    }
}
