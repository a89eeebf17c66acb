// Copyright 2024 Chess3D developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The `moves` module contains the definition of a Move, a single transition
//! from one position to the next.
//!
//! A move always names its origin and destination squares. The remaining
//! fields describe what else happens on the board:
//!
//!  * capture target - the square whose piece is removed. This is the
//!    destination for ordinary captures and the square behind the destination
//!    for en-passant captures.
//!  * promotion - the piece a pawn turns into on the far rank.
//!  * castle - set for castling moves, which are encoded using the king's
//!    start and target squares. The rook is relocated when the move is
//!    applied.
//!
//! Moves read from user input only carry origin, destination and promotion;
//! `Position::does_move_exist` resolves them into the fully described move.
use std::cell::OnceCell;
use std::fmt::{self, Write};

use crate::notation::NotationGenerator;
use crate::position::Position;
use crate::types::{CastleKind, Coord, PieceKind};

#[derive(Clone, Debug)]
pub struct Move {
    from: Coord,
    to: Coord,
    capture_target: Option<Coord>,
    promotion: Option<PieceKind>,
    castle: Option<CastleKind>,
    notation: OnceCell<String>,
}

impl Move {
    /// Constructs a move that captures nothing.
    pub fn quiet(from: Coord, to: Coord) -> Move {
        Move {
            from,
            to,
            capture_target: None,
            promotion: None,
            castle: None,
            notation: OnceCell::new(),
        }
    }

    /// Constructs a move capturing the piece standing on the destination.
    pub fn capture(from: Coord, to: Coord) -> Move {
        Move {
            capture_target: Some(to),
            ..Move::quiet(from, to)
        }
    }

    /// Constructs an en-passant capture; `captured` is the square of the pawn
    /// being taken, one rank behind `to`.
    pub fn en_passant(from: Coord, to: Coord, captured: Coord) -> Move {
        Move {
            capture_target: Some(captured),
            ..Move::quiet(from, to)
        }
    }

    /// Constructs a castle, encoded as the king's start and target squares.
    pub fn castle(king_from: Coord, king_to: Coord, kind: CastleKind) -> Move {
        Move {
            castle: Some(kind),
            ..Move::quiet(king_from, king_to)
        }
    }

    /// Constructs a bare candidate carrying only the squares and promotion,
    /// as submitted by a front end.
    pub fn request(from: Coord, to: Coord, promotion: Option<PieceKind>) -> Move {
        Move {
            promotion,
            ..Move::quiet(from, to)
        }
    }

    pub fn with_promotion(self, kind: PieceKind) -> Move {
        Move {
            promotion: Some(kind),
            ..self
        }
    }

    pub fn from(&self) -> Coord {
        self.from
    }

    pub fn to(&self) -> Coord {
        self.to
    }

    pub fn capture_target(&self) -> Option<Coord> {
        self.capture_target
    }

    pub fn promotion(&self) -> Option<PieceKind> {
        self.promotion
    }

    pub fn castle_kind(&self) -> Option<CastleKind> {
        self.castle
    }

    pub fn is_capture(&self) -> bool {
        self.capture_target.is_some()
    }

    pub fn is_castle(&self) -> bool {
        self.castle.is_some()
    }

    pub fn is_en_passant(&self) -> bool {
        match self.capture_target {
            Some(target) => target != self.to,
            None => false,
        }
    }

    /// Whether this move and `other` name the same origin, destination and
    /// promotion, which is all a front end can specify.
    pub fn same_request(&self, other: &Move) -> bool {
        self.from == other.from && self.to == other.to && self.promotion == other.promotion
    }

    /// Returns the algebraic notation of this move, computing it on first use.
    /// `pos` must be the position this move is legal in; later calls return
    /// the cached text regardless of the position passed.
    pub fn notation(&self, pos: &Position) -> &str {
        self.notation
            .get_or_init(|| NotationGenerator::new(pos).notation(self))
    }

    /// Returns the cached notation if it has already been computed.
    pub fn cached_notation(&self) -> Option<&str> {
        self.notation.get().map(String::as_str)
    }

    /// Returns the move-string representation: origin, destination and an
    /// optional lowercase promotion letter.
    /// # Example
    /// ```
    /// use chess3d::{Coord, Move};
    ///
    /// let mov = Move::quiet(Coord::from_algebraic("e2"), Coord::from_algebraic("e4"));
    /// assert_eq!("e2e4", mov.as_uci());
    /// ```
    pub fn as_uci(&self) -> String {
        let mut buf = String::new();
        write!(&mut buf, "{}{}", self.from, self.to).unwrap();
        if let Some(kind) = self.promotion {
            buf.push(kind.symbol().to_ascii_lowercase());
        }

        buf
    }

    /// Decodes a 4 or 5 character move string into a bare candidate. Returns
    /// `None` if either square is not on the board or the promotion letter
    /// does not name a promotion piece.
    pub fn from_uci(text: &str) -> Option<Move> {
        let chars: Vec<char> = text.chars().collect();
        if chars.len() != 4 && chars.len() != 5 {
            return None;
        }

        let from: String = chars[0..2].iter().collect();
        let to: String = chars[2..4].iter().collect();
        let from = Coord::from_algebraic(&from);
        let to = Coord::from_algebraic(&to);
        if !from.is_valid() || !to.is_valid() {
            return None;
        }

        let promotion = match chars.get(4) {
            Some(&c) => Some(PieceKind::from_promotion_char(c)?),
            None => None,
        };

        Some(Move::request(from, to, promotion))
    }
}

// The notation cache is derived data and never takes part in equality.
impl PartialEq for Move {
    fn eq(&self, other: &Move) -> bool {
        self.same_request(other)
            && self.capture_target == other.capture_target
            && self.castle == other.castle
    }
}

impl Eq for Move {}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.as_uci())?;
        if let Some(notation) = self.cached_notation() {
            write!(f, " ({})", notation)?;
        }

        Ok(())
    }
}
