//! End-to-end scenarios through the public API: rule checks, search terminal
//! scores, difficulty policy, and a short human-vs-computer exchange.

use plum_draughts::compute_computer_move;
use plum_draughts::game_state::board::Board;
use plum_draughts::game_state::draughts_rules::{COMPUTER_PLAYER, HUMAN_PLAYER, WIN_SCORE};
use plum_draughts::game_state::draughts_types::{Cell, Player, Square};
use plum_draughts::game_state::human_turn::{HumanTurn, TurnEvent};
use plum_draughts::move_generation::legal_move_apply::apply_jump;
use plum_draughts::move_generation::legal_move_checks::can_jump;
use plum_draughts::move_generation::legal_move_generator::{
    generate_successors, LegalMoveGenerator,
};
use plum_draughts::move_generation::move_generator::MoveGenerator;
use plum_draughts::search::board_scoring::MaterialScorer;
use plum_draughts::search::minimax::{minimax_search, SearchConfig};

fn sq(row: usize, col: usize) -> Square {
    Square::new(row, col)
}

fn search(board: &Board, player: Player, depth_limit: u8) -> (Option<Board>, i32) {
    let result = minimax_search(
        board,
        player,
        &LegalMoveGenerator,
        &MaterialScorer,
        SearchConfig {
            depth_limit,
            alpha_beta: true,
        },
    );
    (result.best_board, result.best_score)
}

#[test]
fn opening_search_at_depth_one_picks_a_legal_move() {
    let board = Board::new_game();
    let (best, score) = search(&board, Player::Black, 1);

    assert!((-WIN_SCORE..=WIN_SCORE).contains(&score));
    let best = best.expect("opening has moves");
    assert!(generate_successors(&board, Player::Black).contains(&best));
}

#[test]
fn jump_over_adjacent_man_without_promotion() {
    let board = Board::with_pieces(&[(sq(4, 3), Cell::BlackMan), (sq(5, 4), Cell::WhiteMan)]);
    assert!(can_jump(Player::Black, &board, sq(4, 3), sq(5, 4), sq(6, 5)));

    let after = apply_jump(&board, sq(4, 3), sq(5, 4), sq(6, 5));
    assert_eq!(after.cell(sq(4, 3)), Cell::Empty);
    assert_eq!(after.cell(sq(5, 4)), Cell::Empty);
    assert_eq!(after.cell(sq(6, 5)), Cell::BlackMan);
}

#[test]
fn jump_onto_far_row_crowns() {
    let board = Board::with_pieces(&[(sq(5, 3), Cell::BlackMan), (sq(6, 4), Cell::WhiteMan)]);
    assert!(can_jump(Player::Black, &board, sq(5, 3), sq(6, 4), sq(7, 5)));

    let after = apply_jump(&board, sq(5, 3), sq(6, 4), sq(7, 5));
    assert_eq!(after.cell(sq(7, 5)), Cell::BlackKing);
}

#[test]
fn terminal_scores_are_exact_at_any_depth() {
    let black_only = Board::with_pieces(&[(sq(2, 1), Cell::BlackMan)]);
    let white_only = Board::with_pieces(&[(sq(5, 2), Cell::WhiteKing)]);
    let blockade = Board::with_pieces(&[(sq(7, 0), Cell::BlackMan), (sq(5, 2), Cell::WhiteMan)]);

    for depth in [0, 1, 4] {
        for player in [Player::Black, Player::White] {
            assert_eq!(search(&black_only, player, depth).1, WIN_SCORE);
            assert_eq!(search(&white_only, player, depth).1, -WIN_SCORE);
        }
        assert_eq!(search(&blockade, Player::Black, depth), (None, 0));
    }
}

#[test]
fn random_level_with_a_single_successor_is_deterministic() {
    // Black must take the only capture on the board.
    let board = Board::with_pieces(&[
        (sq(4, 3), Cell::BlackMan),
        (sq(5, 4), Cell::WhiteMan),
        (sq(7, 0), Cell::WhiteMan),
    ]);
    let expected = apply_jump(&board, sq(4, 3), sq(5, 4), sq(6, 5));

    for _ in 0..20 {
        assert_eq!(compute_computer_move(&board, 0), expected);
    }
}

#[test]
fn human_and_computer_alternate_legal_moves() {
    let mut board = Board::new_game();

    // Computer opens.
    let reply = compute_computer_move(&board, 2);
    assert!(generate_successors(&board, COMPUTER_PLAYER).contains(&reply));
    board = reply;

    // Human plays the first legal move the generator offers, click by click.
    let human_moves = LegalMoveGenerator.generate_successors(&board, HUMAN_PLAYER);
    let first = human_moves.first().expect("human has a reply");
    assert!(!first.kind.is_capture(), "no capture is possible after one opening move");

    let mut turn = HumanTurn::new(HUMAN_PLAYER);
    assert_eq!(
        turn.click(&board, first.kind.origin()),
        TurnEvent::Selected(first.kind.origin())
    );
    assert_eq!(
        turn.click(&board, first.kind.destination()),
        TurnEvent::Moved(first.board_after_move)
    );
    board = first.board_after_move;

    let reply = compute_computer_move(&board, 3);
    assert!(generate_successors(&board, COMPUTER_PLAYER).contains(&reply));
}
