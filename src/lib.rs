// Copyright 2024 Chess3D developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Rules engine for the Chess3D board.
//!
//! A `Position` is parsed from FEN, answers queries about its legal moves and
//! game state, and produces successor positions when moves are played. The
//! rendering side only ever reads positions (or their `BoardSnapshot`) and
//! submits candidate moves.

#[macro_use]
extern crate num_derive;
#[macro_use]
extern crate bitflags;
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

mod move_generator;
mod moves;
mod notation;
mod perft;
mod position;
mod snapshot;
mod types;

pub use move_generator::{MoveGenerator, MoveRule, MoveVec, MOVE_RULES};
pub use moves::Move;
pub use notation::NotationGenerator;
pub use perft::{divide, perft};
pub use position::{
    AttackerVec, FenParseError, MoveError, Position, PositionMetadata, PositionState,
    DRAW_HALFMOVES, START_FEN,
};
pub use snapshot::{BoardSnapshot, MoveSnapshot, SquareSnapshot};
pub use types::{
    all_coords, CastleKind, CastleStatus, Color, Coord, File, MoveTypes, Piece, PieceKind, Rank,
    TableIndex, PROMOTION_KINDS,
};
