//! Game scenarios played through the public API.
//!
//! Boards are written in index order: Player One's six pits, Player One's
//! house, Player Two's six pits, Player Two's house.

use kalah::core::{Board, BoardConfig, Player};
use kalah::rules::GameResult;
use kalah::MoveError;

fn position(pits: [u32; 14], turn: Player) -> Board {
    Board::from_pits(&pits, turn).unwrap()
}

/// Plays the lowest legal pit until the game ends.
fn play_out(board: &mut Board) -> usize {
    let mut moves = 0;
    loop {
        let Some(pit) = board.legal_moves().next() else {
            assert!(board.is_finished(), "no legal moves on an unfinished board");
            return moves;
        };
        board.make_move(pit).unwrap();
        moves += 1;
    }
}

// =============================================================================
// Sowing
// =============================================================================

#[test]
fn test_first_move_from_new_board() {
    let mut board = Board::new();
    board.make_move(1).unwrap();

    assert_eq!(board.pits(), &[0, 7, 7, 7, 7, 7, 1, 6, 6, 6, 6, 6, 6, 0]);
}

#[test]
fn test_player_one_skips_player_two_house() {
    let mut board = position([1, 1, 1, 1, 1, 8, 0, 1, 1, 1, 1, 1, 1, 0], Player::One);
    board.make_move(6).unwrap();

    assert_eq!(board.pits(), &[2, 1, 1, 1, 1, 0, 1, 2, 2, 2, 2, 2, 2, 0]);
    assert_eq!(board.house(Player::Two), 0);
}

#[test]
fn test_player_two_skips_player_one_house() {
    let mut board = position([1, 1, 1, 1, 1, 1, 0, 1, 1, 1, 1, 1, 8, 0], Player::Two);
    board.make_move(13).unwrap();

    assert_eq!(board.pits(), &[2, 2, 2, 2, 2, 2, 0, 2, 1, 1, 1, 1, 0, 1]);
    assert_eq!(board.house(Player::One), 0);
}

#[test]
fn test_sowing_more_than_a_lap_refills_the_selected_pit() {
    // 13 stones: one into every slot except Player Two's house.
    let mut board = position([0, 0, 0, 0, 0, 13, 0, 1, 1, 1, 1, 1, 1, 0], Player::One);
    let report = board.make_move(6).unwrap();

    assert_eq!(report.landing_pit, 6);
    // Pit 6 was emptied by the lift, so the last stone captures pit 8.
    assert_eq!(report.captured, Some(3));
    assert_eq!(board.pits(), &[1, 1, 1, 1, 1, 0, 4, 0, 2, 2, 2, 2, 2, 0]);
}

// =============================================================================
// Capture
// =============================================================================

#[test]
fn test_player_one_captures() {
    let mut board = position([0, 1, 1, 1, 1, 8, 0, 1, 1, 1, 1, 1, 3, 0], Player::One);
    board.make_move(6).unwrap();

    assert_eq!(board.pits(), &[0, 1, 1, 1, 1, 0, 6, 2, 2, 2, 2, 2, 0, 0]);
}

#[test]
fn test_player_two_captures() {
    let mut board = position([1, 1, 17, 1, 1, 0, 77, 5, 1, 1, 0, 12, 2, 0], Player::Two);
    board.make_move(12).unwrap();

    assert_eq!(board.pits(), &[2, 2, 0, 2, 2, 1, 77, 6, 2, 2, 0, 0, 3, 20]);
}

#[test]
fn test_landing_in_opponents_empty_pit_does_not_capture() {
    let mut board = position([7, 7, 7, 7, 7, 3, 7, 1, 0, 1, 1, 1, 1, 1], Player::One);
    board.make_move(6).unwrap();

    assert_eq!(board.pits(), &[7, 7, 7, 7, 7, 0, 8, 2, 1, 1, 1, 1, 1, 1]);
}

#[test]
fn test_landing_in_own_occupied_pit_does_not_capture() {
    let mut board = position([1, 1, 0, 0, 0, 1, 0, 1, 1, 1, 1, 1, 1, 0], Player::One);
    let report = board.make_move(1).unwrap();

    assert_eq!(report.landing_pit, 2);
    assert_eq!(report.captured, None);
    assert_eq!(board.pit(2), Some(2));
}

// =============================================================================
// Game end
// =============================================================================

#[test]
fn test_last_move_finishes_game_for_mover() {
    let mut board = position([0, 0, 0, 0, 0, 1, 14, 1, 1, 1, 1, 1, 1, 5], Player::One);
    let report = board.make_move(6).unwrap();

    assert!(board.is_finished());
    assert_eq!(board.winner(), Some(Player::One));
    assert_eq!(report.result, Some(GameResult::Winner(Player::One)));
    assert_eq!(board.pits(), &[0, 0, 0, 0, 0, 0, 15, 0, 0, 0, 0, 0, 0, 11]);
}

#[test]
fn test_last_move_finishes_game_for_opponent() {
    let mut board = position([0, 0, 0, 0, 0, 1, 14, 2, 2, 2, 2, 2, 2, 5], Player::One);
    board.make_move(6).unwrap();

    assert!(board.is_finished());
    assert_eq!(board.winner(), Some(Player::Two));
    assert_eq!(board.pits(), &[0, 0, 0, 0, 0, 0, 15, 0, 0, 0, 0, 0, 0, 17]);
}

#[test]
fn test_last_move_with_capture() {
    let mut board = position([0, 0, 0, 0, 0, 8, 14, 1, 1, 1, 1, 1, 3, 5], Player::One);
    board.make_move(6).unwrap();

    assert!(board.is_finished());
    assert_eq!(board.winner(), Some(Player::One));
    assert_eq!(board.pits(), &[0, 0, 0, 0, 0, 0, 20, 0, 0, 0, 0, 0, 0, 15]);
}

#[test]
fn test_capturing_opponents_last_stones_ends_game() {
    let mut board = position([1, 0, 1, 1, 1, 1, 10, 0, 0, 0, 0, 15, 0, 5], Player::One);
    board.make_move(1).unwrap();

    assert!(board.is_finished());
    assert_eq!(board.winner(), Some(Player::One));
    assert_eq!(board.pits(), &[0, 0, 0, 0, 0, 0, 30, 0, 0, 0, 0, 0, 0, 5]);
}

#[test]
fn test_draw() {
    let mut board = position([0, 0, 0, 0, 1, 0, 8, 1, 0, 0, 0, 0, 0, 10], Player::One);
    let report = board.make_move(5).unwrap();

    assert!(board.is_finished());
    assert_eq!(board.winner(), None);
    assert_eq!(board.outcome(), Some(GameResult::Draw));
    assert_eq!(report.result, Some(GameResult::Draw));
    assert_eq!(board.pits(), &[0, 0, 0, 0, 0, 0, 10, 0, 0, 0, 0, 0, 0, 10]);
}

// =============================================================================
// Validation
// =============================================================================

#[test]
fn test_cant_move_from_empty_pit() {
    let mut board = position([0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1], Player::One);

    assert_eq!(board.make_move(1), Err(MoveError::EmptyPit { pit: 1 }));
}

#[test]
fn test_cant_move_other_players_pit() {
    let ones = [1; 14];

    let mut board = position(ones, Player::One);
    assert_eq!(
        board.make_move(8),
        Err(MoveError::NotYourPit {
            pit: 8,
            owner: Player::Two
        })
    );

    let mut board = position(ones, Player::Two);
    assert_eq!(
        board.make_move(1),
        Err(MoveError::NotYourPit {
            pit: 1,
            owner: Player::One
        })
    );
}

#[test]
fn test_cant_move_house() {
    let ones = [1; 14];

    let mut board = position(ones, Player::One);
    assert_eq!(board.make_move(7), Err(MoveError::CantMoveHouse { pit: 7 }));

    let mut board = position(ones, Player::Two);
    assert_eq!(board.make_move(14), Err(MoveError::CantMoveHouse { pit: 14 }));
}

#[test]
fn test_house_check_precedes_ownership_check() {
    // Player One's house is not "Player Two's pit" for Player Two.
    let mut board = position([1; 14], Player::Two);
    assert_eq!(board.make_move(7), Err(MoveError::CantMoveHouse { pit: 7 }));
}

#[test]
fn test_rejected_moves_leave_board_unchanged() {
    let mut board = position([0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1], Player::One);
    let before = board.clone();

    for pit in [0, 1, 7, 8, 14, 15, 100] {
        assert!(board.make_move(pit).is_err());
        assert_eq!(board, before);
    }
}

#[test]
fn test_finished_game_rejects_every_move() {
    let mut board = position([0, 0, 0, 0, 1, 0, 8, 1, 0, 0, 0, 0, 0, 10], Player::One);
    board.make_move(5).unwrap();
    let finished = board.clone();

    for pit in 0..=20 {
        assert_eq!(board.make_move(pit), Err(MoveError::GameFinished));
        assert_eq!(board, finished);
    }
}

#[test]
fn test_finished_check_precedes_bounds_check() {
    let mut board = position([0, 0, 0, 0, 0, 1, 14, 1, 1, 1, 1, 1, 1, 5], Player::One);
    board.make_move(6).unwrap();

    assert_eq!(board.make_move(99), Err(MoveError::GameFinished));
    assert_eq!(board.make_move(0), Err(MoveError::GameFinished));
}

// =============================================================================
// Full games
// =============================================================================

#[test]
fn test_full_game_conserves_stones() {
    let mut board = Board::new();
    let moves = play_out(&mut board);

    assert!(moves > 0);
    assert!(board.is_finished());
    assert_eq!(board.total_stones(), 48);
    assert_eq!(
        board.house(Player::One) + board.house(Player::Two),
        48
    );
    assert_eq!(board.legal_moves().count(), 0);
}

#[test]
fn test_full_game_on_other_board_sizes() {
    for (pits, stones) in [(1, 1), (3, 4), (4, 3), (8, 5), (10, 1)] {
        let config = BoardConfig::new(pits, stones);
        let mut board = Board::with_config(config);
        play_out(&mut board);

        assert!(board.is_finished(), "{pits}x{stones}");
        assert_eq!(board.total_stones(), config.total_stones(), "{pits}x{stones}");
        for player in Player::all() {
            assert_eq!(board.side_stones(player), 0, "{pits}x{stones}");
        }
    }
}

#[test]
fn test_replaying_moves_is_deterministic() {
    let mut first = Board::new();
    let mut pits = Vec::new();
    while !first.is_finished() {
        let pit = first.legal_moves().last().unwrap();
        first.make_move(pit).unwrap();
        pits.push(pit);
    }

    let mut second = Board::new();
    for pit in pits {
        second.make_move(pit).unwrap();
    }

    assert_eq!(first, second);
}
