//! The play transition: validation order, placement, jacks, winning.

use super::board::{Board, Occupant, Position, STANDARD_LAYOUT};
use super::game::PlayKind;
use super::state::Phase;
use super::test_game_helpers::{
    assert_in_progress, card, empty_spot_for, force_turn, lobby_game, place_chip, set_hand,
    started_game,
};
use crate::config::GameConfig;
use crate::errors::ErrorCode;

#[test]
fn play_requires_a_running_game() {
    let mut game = lobby_game(2, 1, GameConfig::default());
    let err = game
        .play("p0", "AS", Position::new(2, 9))
        .expect_err("still in lobby");
    assert_eq!(err.code(), ErrorCode::GameNotActive);
}

#[test]
fn play_out_of_turn_is_rejected() {
    let mut game = started_game(2, 1);
    set_hand(&mut game, "p1", &["AS"]);
    let err = game
        .play("p1", "AS", Position::new(2, 9))
        .expect_err("p0's turn");
    assert_eq!(err.code(), ErrorCode::NotYourTurn);
    assert_eq!(game.current_turn_player().map(String::as_str), Some("p0"));
}

#[test]
fn play_requires_the_card_in_hand() {
    let mut game = started_game(2, 1);
    set_hand(&mut game, "p0", &["2C", "3C"]);
    let err = game
        .play("p0", "AS", Position::new(2, 9))
        .expect_err("not holding AS");
    assert_eq!(err.code(), ErrorCode::CardNotInHand);
}

#[test]
fn play_rejects_out_of_bounds_targets() {
    let mut game = started_game(2, 1);
    set_hand(&mut game, "p0", &["AS"]);
    let err = game
        .play("p0", "AS", Position::new(10, 3))
        .expect_err("off the board");
    assert_eq!(err.code(), ErrorCode::OutOfBounds);
}

#[test]
fn normal_card_placement_succeeds() {
    let mut game = started_game(2, 1);
    set_hand(&mut game, "p0", &["AS", "2C", "3C", "4C", "5C", "6C", "7C"]);
    let target = empty_spot_for(&game, "AS");
    let pile_before = game.draw_pile.len();

    let outcome = game.play("p0", "AS", target).expect("valid play");

    assert_eq!(outcome.kind, PlayKind::Placed);
    assert_eq!(outcome.new_sequences, 0);
    assert!(outcome.winner.is_none());
    let space = game.board.space(target).expect("in bounds");
    assert!(space.occupant.is_chip_of("p0"));

    let hand = &game.players["p0"].hand;
    assert_eq!(hand.len(), 7, "replacement card drawn");
    assert_eq!(game.draw_pile.len(), pile_before - 1);
    assert_eq!(game.discard_pile, vec![card("AS")]);
    assert_eq!(game.current_turn_player().map(String::as_str), Some("p1"));
}

#[test]
fn normal_card_must_match_the_printed_cell() {
    let mut game = started_game(2, 1);
    set_hand(&mut game, "p0", &["AS"]);
    let target = empty_spot_for(&game, "KD");
    let err = game.play("p0", "AS", target).expect_err("wrong cell");
    assert_eq!(err.code(), ErrorCode::CardDoesNotMatchCell);
    assert_eq!(
        game.current_turn_player().map(String::as_str),
        Some("p0"),
        "failed play does not consume the turn"
    );
}

#[test]
fn occupied_cells_cannot_be_played_on() {
    let mut game = started_game(2, 1);
    set_hand(&mut game, "p0", &["AS"]);
    let target = empty_spot_for(&game, "AS");
    place_chip(&mut game, target, "p1");
    let err = game.play("p0", "AS", target).expect_err("occupied");
    assert_eq!(err.code(), ErrorCode::TargetOccupied);
}

#[test]
fn corners_cannot_be_played_on() {
    let mut game = started_game(2, 1);
    set_hand(&mut game, "p0", &["JH"]);
    let err = game
        .play("p0", "JH", Position::new(0, 0))
        .expect_err("corner");
    assert_eq!(err.code(), ErrorCode::TargetOccupied);
}

#[test]
fn two_eyed_jack_is_wild_on_any_empty_cell() {
    let mut game = started_game(2, 1);
    set_hand(&mut game, "p0", &["JD"]);
    // Any printed cell works, the printed card is ignored.
    let target = empty_spot_for(&game, "KD");
    let outcome = game.play("p0", "JD", target).expect("wild placement");
    assert_eq!(outcome.kind, PlayKind::Placed);
    let space = game.board.space(target).expect("in bounds");
    assert!(space.occupant.is_chip_of("p0"));
}

#[test]
fn one_eyed_jack_removes_an_opposing_chip() {
    let mut game = started_game(2, 1);
    set_hand(&mut game, "p0", &["JS"]);
    let target = empty_spot_for(&game, "KD");
    place_chip(&mut game, target, "p1");

    let outcome = game.play("p0", "JS", target).expect("removal");
    assert_eq!(outcome.kind, PlayKind::Removed);
    assert_eq!(outcome.new_sequences, 0);
    let space = game.board.space(target).expect("in bounds");
    assert_eq!(space.occupant, Occupant::Empty);
    assert_eq!(game.current_turn_player().map(String::as_str), Some("p1"));
}

#[test]
fn one_eyed_jack_needs_an_occupied_cell() {
    let mut game = started_game(2, 1);
    set_hand(&mut game, "p0", &["JS"]);
    let target = empty_spot_for(&game, "KD");
    let err = game.play("p0", "JS", target).expect_err("nothing there");
    assert_eq!(err.code(), ErrorCode::TargetNotOccupied);

    set_hand(&mut game, "p0", &["JC"]);
    let err = game
        .play("p0", "JC", Position::new(9, 9))
        .expect_err("corner marker is not a chip");
    assert_eq!(err.code(), ErrorCode::TargetNotOccupied);
}

#[test]
fn one_eyed_jack_cannot_remove_your_own_chip() {
    let mut game = started_game(2, 1);
    set_hand(&mut game, "p0", &["JS"]);
    let target = empty_spot_for(&game, "KD");
    place_chip(&mut game, target, "p0");
    let err = game.play("p0", "JS", target).expect_err("own chip");
    assert_eq!(err.code(), ErrorCode::CannotRemoveOwnChip);
}

#[test]
fn one_eyed_jack_cannot_break_a_locked_sequence() {
    let mut game = started_game(2, 1);
    set_hand(&mut game, "p0", &["JS"]);
    let target = empty_spot_for(&game, "KD");
    place_chip(&mut game, target, "p1");
    game.board.space_mut(target).expect("in bounds").is_locked = true;
    let err = game.play("p0", "JS", target).expect_err("locked");
    assert_eq!(err.code(), ErrorCode::TargetLocked);
}

#[test]
fn degraded_cells_are_unplayable() {
    let mut layout = STANDARD_LAYOUT;
    layout[0][1] = "11H";
    let mut game = started_game(2, 1);
    game.board = Board::from_layout(&layout);
    set_hand(&mut game, "p0", &["2S"]);
    let err = game
        .play("p0", "2S", Position::new(0, 1))
        .expect_err("degraded cell");
    assert_eq!(err.code(), ErrorCode::BoardCellEmpty);
}

#[test]
fn empty_draw_pile_shrinks_the_hand_but_play_continues() {
    let mut game = started_game(2, 1);
    set_hand(&mut game, "p0", &["AS", "2C"]);
    game.draw_pile.clear();
    let target = empty_spot_for(&game, "AS");

    game.play("p0", "AS", target).expect("still playable");
    assert_eq!(game.players["p0"].hand.len(), 1);
    assert_in_progress(&game);
}

#[test]
fn completing_the_last_sequence_wins_and_freezes_the_turn() {
    let mut game = lobby_game(2, 3, GameConfig::clamped(2, 1));
    game.start("p0").expect("start");
    // Four chips on row 2 columns 4..7 ("AH", "KH", "QH", "10H"), the fifth
    // at (2, 8) printed "KD" completes the row.
    for y in 4..8 {
        place_chip(&mut game, Position::new(2, y), "p0");
    }
    set_hand(&mut game, "p0", &["KD"]);
    force_turn(&mut game, "p0");

    let outcome = game
        .play("p0", "KD", Position::new(2, 8))
        .expect("winning play");

    assert_eq!(outcome.new_sequences, 1);
    assert_eq!(outcome.total_sequences, 1);
    assert_eq!(outcome.phase, Phase::Finished);
    assert_eq!(outcome.winner.as_deref(), Some("p0"));
    assert_eq!(game.winner.as_deref(), Some("p0"));
    assert_eq!(game.phase, Phase::Finished);
    assert_eq!(
        game.current_turn_index, 0,
        "turn does not advance after the game ends"
    );
    assert_eq!(game.current_turn_player(), None);

    // The finished game accepts no further plays.
    set_hand(&mut game, "p1", &["AS"]);
    let target = empty_spot_for(&game, "AS");
    let err = game.play("p1", "AS", target).expect_err("finished");
    assert_eq!(err.code(), ErrorCode::GameNotActive);
}

#[test]
fn wild_jack_through_a_free_corner_wins_at_threshold_one() {
    let mut game = lobby_game(2, 11, GameConfig::clamped(2, 1));
    game.start("p0").expect("start");
    // Three chips on the main diagonal next to the (0, 0) corner; a wild
    // jack at (4, 4) makes corner + four chips = five in a row.
    for i in 1..=3 {
        place_chip(&mut game, Position::new(i, i), "p0");
    }
    set_hand(&mut game, "p0", &["JH"]);

    let outcome = game
        .play("p0", "JH", Position::new(4, 4))
        .expect("winning wild play");

    assert_eq!(outcome.kind, PlayKind::Placed);
    assert_eq!(outcome.new_sequences, 1);
    assert_eq!(outcome.total_sequences, 1);
    assert_eq!(outcome.phase, Phase::Finished);
    assert_eq!(outcome.winner.as_deref(), Some("p0"));

    let corner = game.board.space(Position::new(0, 0)).expect("in bounds");
    assert!(!corner.is_locked, "corners stay reusable");
    for i in 1..=4 {
        let space = game.board.space(Position::new(i, i)).expect("in bounds");
        assert!(space.occupant.is_chip_of("p0"));
        assert!(space.is_locked);
    }
    assert_eq!(game.current_turn_player(), None);
}

#[test]
fn sequences_accumulate_toward_the_threshold() {
    let mut game = started_game(2, 5);
    assert_eq!(game.sequences_to_win, 2);
    // First sequence along row 2 columns 4..8.
    for y in 4..8 {
        place_chip(&mut game, Position::new(2, y), "p0");
    }
    set_hand(&mut game, "p0", &["KD"]);
    let outcome = game
        .play("p0", "KD", Position::new(2, 8))
        .expect("first sequence");
    assert_eq!(outcome.new_sequences, 1);
    assert_eq!(outcome.total_sequences, 1);
    assert_eq!(outcome.phase, Phase::InProgress);
    assert!(outcome.winner.is_none());
    assert_eq!(game.players["p0"].sequences, 1);
    assert_eq!(game.current_turn_player().map(String::as_str), Some("p1"));
}
