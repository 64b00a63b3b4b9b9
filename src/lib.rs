//! Crate root module declarations for the Plum Draughts engine project.
//!
//! This file exposes all top-level subsystems (game state, move generation,
//! search, engines, and utility helpers) so binaries, tests, and external
//! tooling can import stable module paths.

pub mod game_state {
    pub mod board;
    pub mod draughts_rules;
    pub mod draughts_types;
    pub mod human_turn;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod move_generator;
    pub mod perft;
}

pub mod search {
    pub mod board_scoring;
    pub mod minimax;
}

pub mod engines {
    pub mod difficulty;
    pub mod engine_minimax;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod board_layout;
    pub mod engine_match_harness;
    pub mod render_board;
}

pub use engines::difficulty::compute_computer_move;
pub use game_state::board::Board;
pub use game_state::draughts_types::{Cell, Player, Square};
