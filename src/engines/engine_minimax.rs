//! Fixed-depth alpha-beta engine.
//!
//! Wraps [`minimax_search`] with a depth limit and a pluggable scorer. The
//! search is deterministic: the same board always yields the same reply.

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::board::Board;
use crate::game_state::draughts_types::Player;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::search::board_scoring::{BoardScorer, MaterialScorer};
use crate::search::minimax::{minimax_search, SearchConfig};

pub struct MinimaxEngine<S: BoardScorer = MaterialScorer> {
    config: SearchConfig,
    move_generator: LegalMoveGenerator,
    scorer: S,
}

impl MinimaxEngine<MaterialScorer> {
    pub fn new(depth_limit: u8) -> Self {
        Self::new_with_scorer(depth_limit, MaterialScorer)
    }
}

impl<S: BoardScorer> MinimaxEngine<S> {
    pub fn new_with_scorer(depth_limit: u8, scorer: S) -> Self {
        Self {
            config: SearchConfig {
                depth_limit,
                ..SearchConfig::default()
            },
            move_generator: LegalMoveGenerator,
            scorer,
        }
    }

    #[inline]
    pub fn depth_limit(&self) -> u8 {
        self.config.depth_limit
    }
}

impl<S: BoardScorer> Engine for MinimaxEngine<S> {
    fn name(&self) -> &str {
        "PlumDraughts Minimax"
    }

    fn choose_move(&mut self, board: &Board, player: Player) -> Result<EngineOutput, String> {
        let result = minimax_search(board, player, &self.move_generator, &self.scorer, self.config);

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string minimax_engine depth {} nodes {} root_moves {} score {}",
            self.config.depth_limit,
            result.nodes,
            result.root_records.len(),
            result.best_score
        ));

        out.best_board = result.best_board;
        out.score = out.best_board.map(|_| result.best_score);
        Ok(out)
    }
}
