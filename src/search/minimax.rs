//! Depth-limited minimax with alpha-beta pruning.
//!
//! Black maximizes and White minimizes a score taken from Black's point of
//! view. The root frame returns every (successor, score) pair it examined so
//! the caller can pick the move to play; inner frames only return a score.

use crate::game_state::board::Board;
use crate::game_state::draughts_rules::{BLOCKADE_SCORE, WIN_SCORE};
use crate::game_state::draughts_types::Player;
use crate::move_generation::legal_move_checks::{black_wins, white_wins};
use crate::move_generation::move_generator::MoveGenerator;
use crate::search::board_scoring::BoardScorer;

pub const NEG_INFINITY: i32 = i32::MIN;
pub const POS_INFINITY: i32 = i32::MAX;

#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    /// Plies searched before the scorer is consulted.
    pub depth_limit: u8,
    /// When false every child is searched with an open window and nothing is pruned.
    pub alpha_beta: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth_limit: 2,
            alpha_beta: true,
        }
    }
}

/// A root successor paired with the score the search gave it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchRecord {
    pub board: Board,
    pub score: i32,
}

#[derive(Debug, Clone, Default)]
pub struct SearchResult {
    pub best_board: Option<Board>,
    pub best_score: i32,
    pub root_records: Vec<SearchRecord>,
    pub nodes: u64,
}

pub fn minimax_search<G: MoveGenerator, S: BoardScorer>(
    board: &Board,
    player: Player,
    generator: &G,
    scorer: &S,
    config: SearchConfig,
) -> SearchResult {
    let mut searcher = Searcher {
        generator,
        scorer,
        config,
        nodes: 0,
    };

    let (best_score, root_records) = searcher.search_root(board, player);
    let best_board = select_root_board(&root_records, player);

    log::debug!(
        "minimax depth_limit={} alpha_beta={} root_moves={} nodes={} score={}",
        config.depth_limit,
        config.alpha_beta,
        root_records.len(),
        searcher.nodes,
        best_score
    );

    SearchResult {
        best_board,
        best_score,
        root_records,
        nodes: searcher.nodes,
    }
}

/// First record with the best score for `player`; later ties never replace it.
pub fn select_root_board(records: &[SearchRecord], player: Player) -> Option<Board> {
    let mut best: Option<&SearchRecord> = None;

    for record in records {
        let improves = match best {
            None => true,
            Some(current) if player.is_maximizer() => record.score > current.score,
            Some(current) => record.score < current.score,
        };
        if improves {
            best = Some(record);
        }
    }

    best.map(|record| record.board)
}

struct Searcher<'a, G: MoveGenerator, S: BoardScorer> {
    generator: &'a G,
    scorer: &'a S,
    config: SearchConfig,
    nodes: u64,
}

/// Running best score plus the alpha-beta window of one frame.
struct Window {
    maximizing: bool,
    alpha: i32,
    beta: i32,
    best: i32,
}

impl Window {
    fn new(player: Player, alpha: i32, beta: i32) -> Self {
        let maximizing = player.is_maximizer();
        Self {
            maximizing,
            alpha,
            beta,
            best: if maximizing { -WIN_SCORE } else { WIN_SCORE },
        }
    }

    fn absorb(&mut self, child_score: i32) {
        if self.maximizing {
            self.best = self.best.max(child_score);
            self.alpha = self.alpha.max(child_score);
        } else {
            self.best = self.best.min(child_score);
            self.beta = self.beta.min(child_score);
        }
    }

    #[inline]
    fn is_cut(&self) -> bool {
        self.alpha >= self.beta
    }
}

impl<G: MoveGenerator, S: BoardScorer> Searcher<'_, G, S> {
    fn search_root(&mut self, board: &Board, player: Player) -> (i32, Vec<SearchRecord>) {
        self.nodes += 1;

        let successors = match self.leaf_or_successors(board, player, 0) {
            Ok(successors) => successors,
            Err(score) => return (score, Vec::new()),
        };

        let mut window = Window::new(player, NEG_INFINITY, POS_INFINITY);
        let mut records = Vec::with_capacity(successors.len());

        for child in successors {
            let score = self.search_child(&child, player, 1, &window);
            window.absorb(score);
            records.push(SearchRecord {
                board: child,
                score,
            });
            if self.config.alpha_beta && window.is_cut() {
                break;
            }
        }

        (window.best, records)
    }

    fn search_node(
        &mut self,
        board: &Board,
        player: Player,
        depth: u8,
        alpha: i32,
        beta: i32,
    ) -> i32 {
        self.nodes += 1;

        let successors = match self.leaf_or_successors(board, player, depth) {
            Ok(successors) => successors,
            Err(score) => return score,
        };

        let mut window = Window::new(player, alpha, beta);

        for child in successors {
            let score = self.search_child(&child, player, depth + 1, &window);
            window.absorb(score);
            if self.config.alpha_beta && window.is_cut() {
                break;
            }
        }

        window.best
    }

    fn search_child(&mut self, child: &Board, player: Player, depth: u8, window: &Window) -> i32 {
        let (alpha, beta) = if self.config.alpha_beta {
            (window.alpha, window.beta)
        } else {
            (NEG_INFINITY, POS_INFINITY)
        };
        self.search_node(child, player.opponent(), depth, alpha, beta)
    }

    /// Terminal checks in fixed order: Black won, White won, side to move is
    /// blocked, horizon reached. `Err` carries the terminal score.
    fn leaf_or_successors(
        &self,
        board: &Board,
        player: Player,
        depth: u8,
    ) -> Result<Vec<Board>, i32> {
        if black_wins(board) {
            return Err(WIN_SCORE);
        }
        if white_wins(board) {
            return Err(-WIN_SCORE);
        }

        let successors: Vec<Board> = self
            .generator
            .generate_successors(board, player)
            .into_iter()
            .map(|mv| mv.board_after_move)
            .collect();

        if successors.is_empty() {
            return Err(BLOCKADE_SCORE);
        }
        if depth >= self.config.depth_limit {
            return Err(self.scorer.score(board));
        }

        Ok(successors)
    }
}
