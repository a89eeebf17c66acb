// Copyright 2024 Chess3D developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
extern crate chess3d;
use chess3d::{Move, Position};

fn notation_of(fen: &str, uci: &str) -> String {
    let pos = Position::from_fen(fen).unwrap();
    let mov = pos
        .does_move_exist(&Move::from_uci(uci).unwrap())
        .unwrap_or_else(|| panic!("{} is not legal in {}", uci, fen));
    mov.notation(&pos).to_owned()
}

#[test]
fn knights_on_different_files() {
    let fen = "4k3/8/8/8/8/8/8/1N2KN2 w - - 0 1";
    assert_eq!("Nbd2", notation_of(fen, "b1d2"));
    assert_eq!("Nfd2", notation_of(fen, "f1d2"));

    // only one knight reaches c3.
    assert_eq!("Nc3", notation_of(fen, "b1c3"));
}

#[test]
fn knights_on_same_file() {
    let fen = "4k3/8/8/N7/8/8/8/N3K3 w - - 0 1";
    assert_eq!("N1b3", notation_of(fen, "a1b3"));
    assert_eq!("N5b3", notation_of(fen, "a5b3"));
}

#[test]
fn disambiguated_capture() {
    let fen = "4k3/8/8/8/8/8/3p4/1N2KN2 w - - 0 1";
    assert_eq!("Nbxd2", notation_of(fen, "b1d2"));
    assert_eq!("Nfxd2", notation_of(fen, "f1d2"));
}

#[test]
fn pinned_rival_does_not_disambiguate() {
    // the knight on f1 is pinned against the king by the rook on h1.
    let fen = "4k3/8/8/8/8/8/8/1N1K1N1r w - - 0 1";
    assert_eq!("Nd2", notation_of(fen, "b1d2"));
}

#[test]
fn rooks_on_same_rank() {
    let fen = "4k3/8/8/8/R6R/8/8/4K3 w - - 0 1";
    assert_eq!("Rad4", notation_of(fen, "a4d4"));
    assert_eq!("Rhd4", notation_of(fen, "h4d4"));
}

#[test]
fn three_queens() {
    let fen = "8/Q7/8/7k/8/7K/8/Q5Q1 w - - 0 1";

    // a1 shares its file with a7 and its rank with g1, so the file is used.
    assert_eq!("Qad4", notation_of(fen, "a1d4"));
    assert_eq!("Q7d4", notation_of(fen, "a7d4"));
    assert_eq!("Qgd4", notation_of(fen, "g1d4"));
}

#[test]
fn check_and_mate_suffixes() {
    assert_eq!(
        "Qh4#",
        notation_of(
            "rnbqkbnr/pppp1ppp/8/4p3/6P1/5P2/PPPPP2P/RNBQKBNR b KQkq - 0 2",
            "d8h4",
        )
    );
    assert_eq!("Ra8+", notation_of("4k3/8/8/8/8/8/8/R3K3 w - - 0 1", "a1a8"));
    assert_eq!("Re8#", notation_of("6k1/5ppp/8/8/8/8/8/4R1K1 w - - 0 1", "e1e8"));
}

#[test]
fn every_start_move_has_notation() {
    let pos = Position::from_start_position();
    let mut notations: Vec<&str> = pos.legal_moves().iter().map(|m| m.notation(&pos)).collect();
    notations.sort();
    assert_eq!(
        vec![
            "Na3", "Nc3", "Nf3", "Nh3", "a3", "a4", "b3", "b4", "c3", "c4", "d3", "d4", "e3",
            "e4", "f3", "f4", "g3", "g4", "h3", "h4"
        ],
        notations
    );
}
