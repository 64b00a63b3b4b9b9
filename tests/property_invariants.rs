//! Property-based tests for rule and search invariants over random playouts.

use plum_draughts::game_state::board::Board;
use plum_draughts::game_state::draughts_rules::WIN_SCORE;
use plum_draughts::game_state::draughts_types::Player;
use plum_draughts::move_generation::legal_move_checks::{
    any_capture_available, black_wins, white_wins,
};
use plum_draughts::move_generation::legal_move_generator::LegalMoveGenerator;
use plum_draughts::move_generation::move_generator::MoveGenerator;
use plum_draughts::search::board_scoring::{evaluate, MaterialScorer};
use plum_draughts::search::minimax::{minimax_search, SearchConfig};
use proptest::prelude::*;

/// Play `choices` from the starting position, Black first, stopping early at
/// a finished game. Each choice indexes the successor list modulo its length.
fn playout(choices: &[usize]) -> (Board, Player) {
    let generator = LegalMoveGenerator;
    let mut board = Board::new_game();
    let mut to_move = Player::Black;

    for choice in choices {
        if black_wins(&board) || white_wins(&board) {
            break;
        }
        let moves = generator.generate_successors(&board, to_move);
        if moves.is_empty() {
            break;
        }
        board = moves[choice % moves.len()].board_after_move;
        to_move = to_move.opponent();
    }

    (board, to_move)
}

fn random_position(max_plies: usize) -> impl Strategy<Value = (Board, Player)> {
    prop::collection::vec(any::<usize>(), 0..max_plies).prop_map(|choices| playout(&choices))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn captures_remove_one_piece_per_leg((board, player) in random_position(60)) {
        let mover_before = board.piece_count(player);
        let opponent_before = board.piece_count(player.opponent());

        for mv in LegalMoveGenerator.generate_successors(&board, player) {
            let after = mv.board_after_move;
            prop_assert_eq!(after.piece_count(player), mover_before);
            prop_assert_eq!(
                after.piece_count(player.opponent()) + mv.kind.captured_count(),
                opponent_before
            );
        }
    }

    #[test]
    fn captures_are_forced((board, player) in random_position(60)) {
        let moves = LegalMoveGenerator.generate_successors(&board, player);
        if any_capture_available(player, &board) {
            prop_assert!(!moves.is_empty());
            prop_assert!(moves.iter().all(|mv| mv.kind.is_capture()));
        } else {
            prop_assert!(moves.iter().all(|mv| !mv.kind.is_capture()));
        }
    }

    #[test]
    fn men_reaching_the_far_row_are_crowned((board, player) in random_position(80)) {
        for mv in LegalMoveGenerator.generate_successors(&board, player) {
            let started_as_king = board.cell(mv.kind.origin()).is_king();
            let landed = mv.board_after_move.cell(mv.kind.destination());

            prop_assert!(landed.is_owned_by(player));
            if mv.kind.destination().row == player.back_rank() {
                prop_assert!(landed.is_king());
            }
            prop_assert_eq!(landed.is_king(), started_as_king || mv.promoted);
            prop_assert_eq!(
                mv.board_after_move.count(player.king()),
                board.count(player.king()) + usize::from(mv.promoted)
            );
        }
    }

    #[test]
    fn evaluation_stays_within_win_bounds((board, _player) in random_position(80)) {
        let score = evaluate(&board);
        prop_assert!((-WIN_SCORE..=WIN_SCORE).contains(&score));
    }

    #[test]
    fn pruning_never_changes_the_result((board, player) in random_position(30)) {
        let pruned = minimax_search(
            &board,
            player,
            &LegalMoveGenerator,
            &MaterialScorer,
            SearchConfig { depth_limit: 3, alpha_beta: true },
        );
        let full = minimax_search(
            &board,
            player,
            &LegalMoveGenerator,
            &MaterialScorer,
            SearchConfig { depth_limit: 3, alpha_beta: false },
        );

        prop_assert_eq!(pruned.best_score, full.best_score);
        prop_assert_eq!(pruned.best_board, full.best_board);
        prop_assert!(pruned.nodes <= full.nodes);
    }
}
