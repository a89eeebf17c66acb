// Copyright 2024 Chess3D developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Pseudo-legal move generation.
//!
//! Every piece's movement is described by one or more of five rules, selected
//! by the piece's `MoveTypes` mask. A rule only looks at board occupancy; it
//! never checks whether the move would leave the mover's own king attacked.
//! Castling is not produced here, see `Position::legal_moves`.
use arrayvec::ArrayVec;

use crate::moves::Move;
use crate::position::Position;
use crate::types::{Color, Coord, MoveTypes, PROMOTION_KINDS};

/// Moves produced by a single rule from a single square. The busiest rule is
/// an orthogonal slide on an empty board (14 moves).
pub type MoveVec = ArrayVec<Move, 32>;

static DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (1, 1), (-1, 1), (1, -1)];
static ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

static KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

static KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// One movement pattern.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveRule {
    Sliding {
        move_type: MoveTypes,
        directions: &'static [(i8, i8); 4],
    },
    Knight,
    Pawn,
    King,
}

pub static MOVE_RULES: [MoveRule; 5] = [
    MoveRule::Sliding {
        move_type: MoveTypes::DIAGONAL,
        directions: &DIAGONAL_DIRECTIONS,
    },
    MoveRule::Sliding {
        move_type: MoveTypes::ORTHOGONAL,
        directions: &ORTHOGONAL_DIRECTIONS,
    },
    MoveRule::Knight,
    MoveRule::Pawn,
    MoveRule::King,
];

impl MoveRule {
    /// The capability flag this rule implements.
    pub fn move_type(self) -> MoveTypes {
        match self {
            MoveRule::Sliding { move_type, .. } => move_type,
            MoveRule::Knight => MoveTypes::KNIGHT,
            MoveRule::Pawn => MoveTypes::PAWN,
            MoveRule::King => MoveTypes::KING,
        }
    }

    /// The rules enabled by a capability mask, in a fixed order.
    pub fn rules_for(types: MoveTypes) -> impl Iterator<Item = MoveRule> {
        MOVE_RULES
            .iter()
            .copied()
            .filter(move |rule| types.contains(rule.move_type()))
    }

    /// Appends the pseudo-legal moves of this rule for a piece of `color`
    /// standing on `from`. The square itself need not hold that piece, which
    /// is what lets `Position::attackers_targeting` cast a rule backwards.
    pub fn generate(self, pos: &Position, from: Coord, color: Color, moves: &mut MoveVec) {
        match self {
            MoveRule::Sliding { directions, .. } => slide(pos, from, color, directions, moves),
            MoveRule::Knight => step(pos, from, color, &KNIGHT_OFFSETS, moves),
            MoveRule::King => step(pos, from, color, &KING_OFFSETS, moves),
            MoveRule::Pawn => pawn(pos, from, color, moves),
        }
    }
}

fn slide(
    pos: &Position,
    from: Coord,
    color: Color,
    directions: &[(i8, i8); 4],
    moves: &mut MoveVec,
) {
    for &(file_delta, rank_delta) in directions {
        let mut current = from.offset(file_delta, rank_delta);
        while current.is_valid() {
            match pos.piece_at(current) {
                Some(piece) => {
                    if piece.color != color {
                        moves.push(Move::capture(from, current));
                    }

                    break;
                }
                None => moves.push(Move::quiet(from, current)),
            }

            current = current.offset(file_delta, rank_delta);
        }
    }
}

fn step(pos: &Position, from: Coord, color: Color, offsets: &[(i8, i8); 8], moves: &mut MoveVec) {
    for &(file_delta, rank_delta) in offsets {
        let target = from.offset(file_delta, rank_delta);
        if !target.is_valid() {
            continue;
        }

        match pos.piece_at(target) {
            Some(piece) if piece.color == color => {}
            Some(_) => moves.push(Move::capture(from, target)),
            None => moves.push(Move::quiet(from, target)),
        }
    }
}

fn pawn(pos: &Position, from: Coord, color: Color, moves: &mut MoveVec) {
    let direction = color.pawn_direction();

    // Pushes are blocked by any piece, friend or foe.
    let max_steps = if from.rank() == color.pawn_start_rank() {
        2
    } else {
        1
    };
    let mut current = from;
    for _ in 0..max_steps {
        current = current.offset(0, direction);
        if !current.is_valid() || pos.piece_at(current).is_some() {
            break;
        }

        push_pawn_move(Move::quiet(from, current), color, moves);
    }

    for &file_delta in &[-1, 1] {
        let target = from.offset(file_delta, direction);
        if !target.is_valid() {
            continue;
        }

        match pos.piece_at(target) {
            Some(piece) if piece.color != color => {
                push_pawn_move(Move::capture(from, target), color, moves);
            }
            Some(_) => {}
            None => {
                if Some(target) == pos.en_passant_square() && color == pos.side_to_move() {
                    let captured = target.offset(0, -direction);
                    moves.push(Move::en_passant(from, target, captured));
                }
            }
        }
    }
}

// A pawn landing on the far rank is emitted once per promotion piece.
fn push_pawn_move(mov: Move, color: Color, moves: &mut MoveVec) {
    if mov.to().rank() != color.promotion_rank() {
        moves.push(mov);
        return;
    }

    for &kind in &PROMOTION_KINDS {
        moves.push(mov.clone().with_promotion(kind));
    }
}

/// Generates pseudo-legal moves for whole positions.
#[derive(Copy, Clone, Debug, Default)]
pub struct MoveGenerator;

impl MoveGenerator {
    pub fn new() -> MoveGenerator {
        MoveGenerator
    }

    /// Appends every pseudo-legal move of the piece on `from`, using the rules
    /// its capability mask enables. Does nothing for an empty square.
    pub fn generate_moves_from(&self, pos: &Position, from: Coord, moves: &mut Vec<Move>) {
        let piece = match pos.piece_at(from) {
            Some(piece) => piece,
            None => return,
        };

        for rule in MoveRule::rules_for(piece.move_types()) {
            let mut rule_moves = MoveVec::new();
            rule.generate(pos, from, piece.color, &mut rule_moves);
            moves.extend(rule_moves);
        }
    }

    /// Appends every pseudo-legal move for the side to move, scanning files
    /// a through h and ranks 1 through 8 within each file.
    pub fn generate_moves(&self, pos: &Position, moves: &mut Vec<Move>) {
        let side = pos.side_to_move();
        for file in 0..8 {
            for rank in 0..8 {
                let from = Coord::new(file, rank);
                match pos.piece_at(from) {
                    Some(piece) if piece.color == side => {
                        self.generate_moves_from(pos, from, moves)
                    }
                    _ => {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{MoveGenerator, MoveRule, MoveVec, MOVE_RULES};
    use crate::moves::Move;
    use crate::position::Position;
    use crate::types::{Color, Coord, MoveTypes, PieceKind};

    fn sq(text: &str) -> Coord {
        Coord::from_algebraic(text)
    }

    fn uci_set(fen: &str) -> HashSet<String> {
        let pos = Position::from_fen(fen).unwrap();
        let mut moves = Vec::new();
        MoveGenerator::new().generate_moves(&pos, &mut moves);
        moves.iter().map(Move::as_uci).collect()
    }

    fn assert_generated(fen: &str, expected: &[&str]) {
        let generated = uci_set(fen);
        let expected: HashSet<String> = expected.iter().map(|s| s.to_string()).collect();
        assert_eq!(expected, generated);
    }

    #[test]
    fn rules_for_queen() {
        let rules: Vec<_> = MoveRule::rules_for(PieceKind::Queen.move_types()).collect();
        assert_eq!(vec![MOVE_RULES[0], MOVE_RULES[1]], rules);
        assert_eq!(5, MoveRule::rules_for(MoveTypes::ALL).count());
    }

    #[test]
    fn rook_slides_until_blocked() {
        assert_generated(
            "8/8/8/8/8/3p4/8/3R1N2 w - - 0 1",
            &[
                "d1a1", "d1b1", "d1c1", "d1e1", "d1d2", "d1d3", "f1d2", "f1e3", "f1g3", "f1h2",
            ],
        );
    }

    #[test]
    fn bishop_stops_at_friendly_piece() {
        assert_generated(
            "8/8/8/8/8/8/1P6/B7 w - - 0 1",
            &["b2b3", "b2b4"],
        );
    }

    #[test]
    fn knight_in_corner() {
        assert_generated("8/8/8/8/8/8/8/N7 w - - 0 1", &["a1b3", "a1c2"]);
    }

    #[test]
    fn king_does_not_castle_here() {
        let generated = uci_set("8/8/8/8/8/8/8/4K2R w K - 0 1");
        assert!(!generated.contains("e1g1"));
        assert!(generated.contains("e1f1"));
    }

    #[test]
    fn white_pawn_starting_rank() {
        assert_generated("8/8/8/8/8/8/4P3/8 w - - 0 1", &["e2e3", "e2e4"]);
    }

    #[test]
    fn pawn_push_blocked_by_enemy() {
        assert_generated("8/8/8/8/8/4p3/4P3/8 w - - 0 1", &[]);
        assert_generated("8/8/8/8/4p3/8/4P3/8 w - - 0 1", &["e2e3"]);
    }

    #[test]
    fn black_pawn_captures() {
        assert_generated(
            "8/4p3/3P1n2/8/8/8/8/8 b - - 0 1",
            &["e7e6", "e7e5", "e7d6", "f6d5", "f6e4", "f6g4", "f6h5", "f6h7", "f6g8", "f6e8", "f6d7"],
        );
    }

    #[test]
    fn promotion_emits_four_moves() {
        assert_generated(
            "3r4/4P3/8/8/8/8/8/8 w - - 0 1",
            &[
                "e7e8n", "e7e8b", "e7e8r", "e7e8q", "e7d8n", "e7d8b", "e7d8r", "e7d8q",
            ],
        );
    }

    #[test]
    fn en_passant_capture_target() {
        let pos = Position::from_fen("8/8/8/3pP3/8/8/8/8 w - d6 0 1").unwrap();
        let mut moves = MoveVec::new();
        MoveRule::Pawn.generate(&pos, sq("e5"), Color::White, &mut moves);
        let ep = moves.iter().find(|m| m.to() == sq("d6")).unwrap();
        assert!(ep.is_en_passant());
        assert_eq!(Some(sq("d5")), ep.capture_target());
    }

    #[test]
    fn en_passant_only_for_side_to_move() {
        let pos = Position::from_fen("8/8/8/3pP3/8/8/8/8 b - d6 0 1").unwrap();
        let mut moves = MoveVec::new();
        MoveRule::Pawn.generate(&pos, sq("e5"), Color::White, &mut moves);
        assert!(moves.iter().all(|m| m.to() != sq("d6")));
    }
}
