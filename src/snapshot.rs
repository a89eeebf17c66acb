// Copyright 2024 Chess3D developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Serializable views of a position for front ends.
//!
//! A front end draws squares and highlights destinations; it never inspects
//! engine internals. `BoardSnapshot` carries everything it needs in one value,
//! and serializes to JSON with serde.
use crate::position::{Position, PositionState};
use crate::types::{all_coords, Color, Piece};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SquareSnapshot {
    pub square: String,
    pub piece: Option<Piece>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveSnapshot {
    pub from: String,
    pub to: String,
    pub uci: String,
    pub notation: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub fen: String,
    pub side_to_move: Color,
    pub state: PositionState,
    /// a1 through h8, rank by rank.
    pub squares: Vec<SquareSnapshot>,
    pub legal_moves: Vec<MoveSnapshot>,
}

impl BoardSnapshot {
    pub fn from_position(pos: &Position) -> BoardSnapshot {
        let squares = all_coords()
            .map(|coord| SquareSnapshot {
                square: coord.to_string(),
                piece: pos.piece_at(coord),
            })
            .collect();

        let legal_moves = pos
            .legal_moves()
            .iter()
            .map(|mov| MoveSnapshot {
                from: mov.from().to_string(),
                to: mov.to().to_string(),
                uci: mov.as_uci(),
                notation: mov.notation(pos).to_owned(),
            })
            .collect();

        BoardSnapshot {
            fen: pos.as_fen(),
            side_to_move: pos.side_to_move(),
            state: pos.state(),
            squares,
            legal_moves,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(text: &str) -> serde_json::Result<BoardSnapshot> {
        serde_json::from_str(text)
    }

    /// Destinations reachable from `square`, for highlighting.
    pub fn destinations_from(&self, square: &str) -> Vec<&str> {
        self.legal_moves
            .iter()
            .filter(|mov| mov.from == square)
            .map(|mov| mov.to.as_str())
            .collect()
    }
}
