// Copyright 2024 Chess3D developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
extern crate chess3d;
use chess3d::{Color, Move, MoveError, Position, PositionState};

#[test]
fn smoke_test_starting_position() {
    let pos = Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1")
        .unwrap();

    // white is not in check and has twenty moves.
    assert!(!pos.is_in_check(Color::White));
    assert_eq!(20, pos.legal_moves().len());
    assert_eq!(PositionState::Normal, pos.state());
    assert!(pos.is_playable());
}

#[test]
fn fools_mate_checkmate() {
    let pos = Position::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3")
        .unwrap();

    // white is checkmated
    assert!(pos.is_in_check(Color::White));
    assert_eq!(0, pos.legal_moves().len());
    assert_eq!(PositionState::Checkmate, pos.state());
    assert!(!pos.is_playable());
}

#[test]
fn fools_mate_played_out() {
    let mut pos = Position::from_start_position();
    for text in &["f2f3", "e7e5", "g2g4", "d8h4"] {
        pos = pos.play_uci(text).unwrap();
    }

    assert_eq!(PositionState::Checkmate, pos.state());
}

#[test]
fn sliding_piece_pin() {
    let pos = Position::from_fen("8/8/4q3/8/8/8/4P3/4K3 w - - 0 1").unwrap();

    // white is not checked, the white pawn is blocking the queen
    assert!(!pos.is_in_check(Color::White));

    // the pawn may still advance along the pin
    assert!(pos.is_legal_destination(
        chess3d::Coord::from_algebraic("e2"),
        chess3d::Coord::from_algebraic("e4")
    ));
}

#[test]
fn absolute_pin_check() {
    let pos = Position::from_fen("rnR2k1r/pp1qbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R b KQ - 0 1")
        .unwrap();

    // black is checked by the white rook
    assert!(pos.is_in_check(Color::Black));
    assert_eq!(PositionState::Check, pos.state());
}

#[test]
fn check_restricts_moves() {
    let pos = Position::from_fen("4k3/8/8/8/8/8/4r3/R3K3 w Q - 0 1").unwrap();
    assert_eq!(PositionState::Check, pos.state());

    // the king must deal with the rook; castling out of check is not allowed.
    let moves: Vec<String> = pos.legal_moves().iter().map(Move::as_uci).collect();
    assert!(!moves.contains(&"e1c1".to_string()));
    assert!(moves.iter().all(|m| m.starts_with("e1")));
}

#[test]
fn stalemate_smoke() {
    let pos = Position::from_fen("7k/5K2/6Q1/8/8/8/8/8 b - - 0 1").unwrap();

    // black's turn to move. black is not in check but black has no legal moves.
    assert!(!pos.is_in_check(Color::Black));
    assert!(pos.legal_moves().is_empty());
    assert_eq!(PositionState::Draw, pos.state());
}

#[test]
fn fifty_move_rule_smoke() {
    let pos = Position::from_fen("8/7k/6R1/5K2/1r3B2/8/8/8 w - - 99 121").unwrap();

    // white's turn to move, the game is not over
    assert_eq!(PositionState::Normal, pos.state());
    let pos = pos.play_uci("g6g5").unwrap();

    // black's turn to move, the game is drawn.
    assert_eq!(100, pos.halfmove_clock());
    assert_eq!(PositionState::Draw, pos.state());
}

#[test]
fn fifty_move_rule_beats_check() {
    let pos = Position::from_fen("7k/8/8/8/8/8/8/R3K3 w - - 99 50").unwrap();
    let pos = pos.play_uci("a1a8").unwrap();
    assert!(pos.is_in_check(Color::Black));
    assert_eq!(PositionState::Draw, pos.state());
}

#[test]
fn fifty_move_rule_beats_checkmate() {
    let pos = Position::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 99 60").unwrap();
    let pos = pos.play_uci("a1a8").unwrap();
    assert!(pos.is_in_check(Color::Black));
    assert!(pos.legal_moves().is_empty());
    assert_eq!(PositionState::Draw, pos.state());
}

#[test]
fn pawn_move_resets_halfmove_clock() {
    let pos = Position::from_fen("4k3/8/8/8/8/8/4P3/4K3 w - - 99 60").unwrap();
    let pos = pos.play_uci("e2e3").unwrap();
    assert_eq!(0, pos.halfmove_clock());
    assert_eq!(PositionState::Normal, pos.state());
}

#[test]
fn capture_resets_halfmove_clock() {
    let pos = Position::from_fen("4k3/8/8/8/8/8/4r3/4K3 w - - 99 60").unwrap();
    let pos = pos.play_uci("e1e2").unwrap();
    assert_eq!(0, pos.halfmove_clock());
    assert_eq!(PositionState::Normal, pos.state());
}

#[test]
fn side_not_to_move_in_check_is_invalid() {
    let pos = Position::from_fen("4k3/8/8/8/8/8/4R3/4K3 w - - 0 1").unwrap();
    assert!(!pos.is_legal());
    assert_eq!(PositionState::Invalid, pos.state());
}

#[test]
fn illegal_candidate_is_rejected() {
    let pos = Position::from_start_position();
    match pos.play_uci("e2e5") {
        Err(MoveError::NotLegal(mov)) => assert_eq!("e2e5", mov.as_uci()),
        other => panic!("unexpected result: {:?}", other),
    }

    match pos.play_uci("e2") {
        Err(MoveError::Malformed(text)) => assert_eq!("e2", text),
        other => panic!("unexpected result: {:?}", other),
    }

    // the position is unchanged
    assert_eq!(Position::from_start_position(), pos);
}

#[test]
fn promotion_requires_piece() {
    let pos = Position::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").unwrap();
    assert!(pos.play_uci("a7a8").is_err());
    let pos = pos.play_uci("a7a8r").unwrap();
    assert_eq!(
        Some(chess3d::Piece::new(chess3d::PieceKind::Rook, Color::White)),
        pos.piece_at(chess3d::Coord::from_algebraic("a8"))
    );
}
