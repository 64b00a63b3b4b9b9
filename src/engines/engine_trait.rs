//! Engine abstraction layer used by the difficulty policy and match harness.
//!
//! Defines the common output payload so different move-choice strategies can
//! be selected at runtime behind a single trait interface.

use crate::game_state::board::Board;
use crate::game_state::draughts_types::Player;

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    /// Board after the chosen move, or `None` when the side to move is blocked.
    pub best_board: Option<Board>,
    /// Search score of the chosen move, when the engine searched at all.
    pub score: Option<i32>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn choose_move(&mut self, board: &Board, player: Player) -> Result<EngineOutput, String>;
}
