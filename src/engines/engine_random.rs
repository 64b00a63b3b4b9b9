//! Lowest-difficulty random-move engine.
//!
//! Selects uniformly among legal successors without any search. A seeded
//! generator makes games reproducible for tests and the match harness.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::board::Board;
use crate::game_state::draughts_types::Player;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;

pub struct RandomEngine {
    move_generator: LegalMoveGenerator,
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            move_generator: LegalMoveGenerator,
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            move_generator: LegalMoveGenerator,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "PlumDraughts Random"
    }

    fn choose_move(&mut self, board: &Board, player: Player) -> Result<EngineOutput, String> {
        let successors = self.move_generator.generate_successors(board, player);

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string random_engine legal_moves {}",
            successors.len()
        ));

        if successors.is_empty() {
            return Ok(out);
        }

        let picked = successors
            .as_slice()
            .choose(&mut self.rng)
            .ok_or("failed to choose a random move")?;

        log::debug!(
            "random engine picked {:?} -> {:?} out of {} moves",
            picked.kind.origin(),
            picked.kind.destination(),
            successors.len()
        );

        out.best_board = Some(picked.board_after_move);
        Ok(out)
    }
}
