// Copyright 2024 Chess3D developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt::Write;

use crate::moves::Move;
use crate::position::{Position, PositionState};
use crate::types::{CastleKind, Coord, Piece, PieceKind};

/// Renders legal moves of a position as algebraic text, e.g. "Nbd2",
/// "exd6", "e8=Q+" or "0-0-0#".
pub struct NotationGenerator<'a> {
    pos: &'a Position,
}

impl<'a> NotationGenerator<'a> {
    pub fn new(pos: &'a Position) -> NotationGenerator<'a> {
        NotationGenerator { pos }
    }

    /// `mov` must be legal in the wrapped position.
    pub fn notation(&self, mov: &Move) -> String {
        let mut buf = String::new();
        match mov.castle_kind() {
            Some(CastleKind::Short) => buf.push_str("0-0"),
            Some(CastleKind::Long) => buf.push_str("0-0-0"),
            None => {
                let piece = match self.pos.piece_at(mov.from()) {
                    Some(piece) => piece,
                    None => {
                        debug_assert!(false, "no piece on {} for {}", mov.from(), mov.as_uci());
                        return mov.as_uci();
                    }
                };

                if piece.kind == PieceKind::Pawn {
                    if mov.is_capture() {
                        buf.push(mov.from().file_char());
                    }
                } else {
                    buf.push(piece.kind.symbol());
                    self.disambiguate(mov, piece, &mut buf);
                }

                if mov.is_capture() {
                    buf.push('x');
                }

                write!(&mut buf, "{}", mov.to()).unwrap();
                if let Some(kind) = mov.promotion() {
                    buf.push('=');
                    buf.push(kind.symbol());
                }
            }
        }

        match self.pos.apply_move(mov).state() {
            PositionState::Check => buf.push('+'),
            PositionState::Checkmate => buf.push('#'),
            _ => {}
        }

        buf
    }

    /// Pieces identical to the mover that could legally reach the same square.
    fn rivals(&self, mov: &Move, piece: Piece) -> Vec<Coord> {
        self.pos
            .attackers_targeting(mov.to(), piece.color, piece.move_types())
            .iter()
            .copied()
            .filter(|&square| square != mov.from())
            .filter(|&square| self.pos.piece_at(square) == Some(piece))
            .filter(|&square| self.pos.is_legal_destination(square, mov.to()))
            .collect()
    }

    fn disambiguate(&self, mov: &Move, piece: Piece, buf: &mut String) {
        let rivals = self.rivals(mov, piece);
        if rivals.is_empty() {
            return;
        }

        let from = mov.from();
        let shares_file = rivals.iter().any(|rival| rival.file() == from.file());
        let shares_rank = rivals.iter().any(|rival| rival.rank() == from.rank());
        if shares_file && !shares_rank {
            buf.push(from.rank_char());
        } else {
            // The file is used whenever it helps, and as the fallback when
            // neither coordinate alone is enough.
            buf.push(from.file_char());
        }
    }
}
