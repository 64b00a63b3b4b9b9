use std::sync::Arc;
use std::thread;

use crate::game_state::board::Board;
use crate::game_state::draughts_types::Player;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::{GeneratedMove, MoveGenerator};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub pieces_captured: usize,
    pub promotions: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.pieces_captured += rhs.pieces_captured;
        self.promotions += rhs.promotions;
    }
}

pub fn perft<G: MoveGenerator>(
    generator: &G,
    board: &Board,
    player: Player,
    depth: u8,
) -> PerftCounts {
    perft_single_thread(generator, board, player, depth)
}

/// Perft with the crate's own legal move generator.
pub fn perft_legal(board: &Board, player: Player, depth: u8) -> PerftCounts {
    perft(&LegalMoveGenerator, board, player, depth)
}

pub fn perft_single_thread<G: MoveGenerator>(
    generator: &G,
    board: &Board,
    player: Player,
    depth: u8,
) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in generator.generate_successors(board, player) {
        perft_recurse(generator, &mv, player.opponent(), depth, 1, &mut total);
    }

    total
}

pub fn perft_multi_threaded(
    generator: Arc<dyn MoveGenerator>,
    board: &Board,
    player: Player,
    depth: u8,
) -> Result<PerftCounts, String> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let root_moves = generator.generate_successors(board, player);
    let mut handles = Vec::with_capacity(root_moves.len());

    for mv in root_moves {
        let generator_ref = Arc::clone(&generator);
        handles.push(thread::spawn(move || {
            let mut local = PerftCounts::default();
            perft_recurse(
                generator_ref.as_ref(),
                &mv,
                player.opponent(),
                depth,
                1,
                &mut local,
            );
            local
        }));
    }

    let mut total = PerftCounts::default();
    for handle in handles {
        let local = handle
            .join()
            .map_err(|_| "perft worker thread panicked".to_owned())?;
        total.merge(local);
    }

    Ok(total)
}

fn perft_recurse<G: MoveGenerator + ?Sized>(
    generator: &G,
    mv: &GeneratedMove,
    to_move: Player,
    search_depth: u8,
    current_depth: u8,
    counts: &mut PerftCounts,
) {
    if current_depth == search_depth {
        counts.nodes += 1;

        if mv.kind.is_capture() {
            counts.captures += 1;
            counts.pieces_captured += mv.kind.captured_count();
        }
        if mv.promoted {
            counts.promotions += 1;
        }

        return;
    }

    for child in generator.generate_successors(&mv.board_after_move, to_move) {
        perft_recurse(
            generator,
            &child,
            to_move.opponent(),
            search_depth,
            current_depth + 1,
            counts,
        );
    }
}
