//! Fifty-move rule, threefold repetition and insufficient material.

use super::sq;
use crate::board::{Position, Status, FIFTY_MOVE_PLIES};

const SHUFFLE: &str = "g1f3 g8f6 f3g1 f6g8";

#[test]
fn test_halfmove_clock_from_fen() {
    let position = Position::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 57 40");
    assert_eq!(position.halfmove_clock(), 57);
    assert!(!position.is_fifty_move_draw());
}

#[test]
fn test_fifty_move_rule_reached_by_quiet_move() {
    let mut position = Position::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 99 80");
    assert_eq!(position.status(), Status::Normal);

    position.play("a1a2").unwrap();
    assert_eq!(position.halfmove_clock(), FIFTY_MOVE_PLIES);
    assert!(position.is_fifty_move_draw());
    assert_eq!(position.status(), Status::DrawByFiftyMove);
}

#[test]
fn test_checkmate_outranks_fifty_move_rule() {
    let position = Position::from_fen("7k/7Q/7K/8/8/8/8/8 b - - 120 90");
    assert!(position.is_fifty_move_draw());
    assert_eq!(position.status(), Status::Checkmate);
}

#[test]
fn test_halfmove_clock_counts_quiet_plies() {
    let mut position = Position::new();
    for ply in 1..=24 {
        let notation = SHUFFLE.split_whitespace().nth((ply - 1) % 4).unwrap();
        position.play(notation).unwrap();
        assert_eq!(position.halfmove_clock() as usize, ply);
    }
}

#[test]
fn test_pawn_move_resets_clock() {
    let mut position = Position::from_fen("4k3/4p3/8/8/8/8/8/R3K3 b - - 40 60");
    position.play("e7e6").unwrap();
    assert_eq!(position.halfmove_clock(), 0);
}

#[test]
fn test_capture_resets_clock() {
    let mut position = Position::from_fen("4k3/8/8/8/8/r7/8/4K2R w - - 40 60");
    position.play("h1h2").unwrap();
    assert_eq!(position.halfmove_clock(), 41);
    position.play("a3a2").unwrap();
    position.play("h2a2").unwrap();
    assert_eq!(position.halfmove_clock(), 0);
}

#[test]
fn test_threefold_repetition() {
    let mut position = Position::new();
    position.play_line(SHUFFLE).unwrap();
    assert_eq!(position.repetition_count(), 2);
    assert!(!position.is_threefold_repetition());
    assert_eq!(position.status(), Status::Normal);

    position.play_line(SHUFFLE).unwrap();
    assert_eq!(position.repetition_count(), 3);
    assert!(position.is_threefold_repetition());
    assert_eq!(position.status(), Status::DrawByRepetition);
    assert!(position.is_draw());
}

#[test]
fn test_repetition_through_different_paths() {
    let mut position = Position::new();
    position.play_line(SHUFFLE).unwrap();
    position.play_line("b1c3 b8c6 c3b1 c6b8").unwrap();
    assert_eq!(position.repetition_count(), 3);
    assert_eq!(position.status(), Status::DrawByRepetition);
}

#[test]
fn test_repetition_persists_after_leaving_position() {
    let mut position = Position::new();
    position.play_line(SHUFFLE).unwrap();
    position.play_line(SHUFFLE).unwrap();
    position.play("e2e4").unwrap();
    assert_eq!(position.repetition_count(), 1);
    assert!(position.is_threefold_repetition());
}

#[test]
fn test_en_passant_target_distinguishes_keys() {
    let mut played = Position::new();
    played.play("e2e4").unwrap();
    assert_eq!(played.en_passant_target(), Some(sq("e3")));

    let same = Position::from_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1");
    let no_target =
        Position::from_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1");
    assert_eq!(played.key(), same.key());
    assert_eq!(played.hash(), same.hash());
    assert_ne!(played.key(), no_target.key());
    assert_ne!(played.hash(), no_target.hash());
}

#[test]
fn test_castling_rights_distinguish_keys() {
    let with_rights = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let without = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w kq - 0 1");
    assert_eq!(with_rights.grid(), without.grid());
    assert_ne!(with_rights.key(), without.key());
}

#[test]
fn test_insufficient_material() {
    assert!(Position::from_fen("8/8/8/8/8/8/8/K1k5 w - - 0 1").is_insufficient_material());
    assert!(Position::from_fen("8/8/8/8/8/8/6N1/K1k5 w - - 0 1").is_insufficient_material());
    assert!(Position::from_fen("8/8/8/4b3/8/8/7B/K1k5 w - - 0 1").is_insufficient_material());
    assert!(!Position::from_fen("8/8/8/3b4/8/8/7B/K1k5 w - - 0 1").is_insufficient_material());
    assert!(!Position::from_fen("8/8/8/8/8/8/5NN1/K1k5 w - - 0 1").is_insufficient_material());
    assert!(!Position::from_fen("8/8/8/8/8/8/6P1/K1k5 w - - 0 1").is_insufficient_material());
    assert!(!Position::new().is_insufficient_material());
}

#[test]
fn test_insufficient_material_is_a_draw_but_not_a_status() {
    let position = Position::from_fen("8/8/8/8/8/8/6N1/K1k5 w - - 0 1");
    assert!(position.is_draw());
    assert_eq!(position.status(), Status::Normal);
}
