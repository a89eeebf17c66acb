// Copyright 2024 Chess3D developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::cell::OnceCell;
use std::convert::TryFrom;
use std::error::Error;
use std::fmt::{self, Write};

use arrayvec::ArrayVec;

use crate::move_generator::{MoveGenerator, MoveRule, MoveVec};
use crate::moves::Move;
use crate::types::TableIndex;
use crate::types::{CastleKind, CastleStatus, Color, Coord, File, MoveTypes, Piece, PieceKind, Rank};
use crate::types::{CASTLE_KINDS, COLORS, FILES, KING_START_FILE, RANKS};

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Halfmove clock value at which the game is drawn.
pub const DRAW_HALFMOVES: u32 = 100;

/// Possible errors that can arise when parsing a FEN string into a `Position`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FenParseError {
    UnexpectedChar(char),
    UnexpectedEnd,
    InvalidDigit,
    FileDoesNotSumToEight,
    UnknownPiece,
    InvalidSideToMove,
    InvalidCastle,
    InvalidEnPassant,
    EmptyHalfmove,
    InvalidHalfmove,
    EmptyFullmove,
    InvalidFullmove,
}

impl fmt::Display for FenParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FenParseError::UnexpectedChar(c) => write!(f, "unexpected character '{}'", c),
            FenParseError::UnexpectedEnd => f.write_str("unexpected end of input"),
            FenParseError::InvalidDigit => f.write_str("empty-square count out of range"),
            FenParseError::FileDoesNotSumToEight => f.write_str("rank does not sum to eight files"),
            FenParseError::UnknownPiece => f.write_str("unknown piece letter"),
            FenParseError::InvalidSideToMove => f.write_str("side to move must be 'w' or 'b'"),
            FenParseError::InvalidCastle => f.write_str("invalid castling rights"),
            FenParseError::InvalidEnPassant => f.write_str("invalid en-passant square"),
            FenParseError::EmptyHalfmove => f.write_str("missing halfmove clock"),
            FenParseError::InvalidHalfmove => f.write_str("invalid halfmove clock"),
            FenParseError::EmptyFullmove => f.write_str("missing fullmove number"),
            FenParseError::InvalidFullmove => f.write_str("invalid fullmove number"),
        }
    }
}

impl Error for FenParseError {}

/// Reasons a requested move can't be played.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveError {
    /// The move string does not decode to a pair of squares.
    Malformed(String),
    /// The candidate is well formed but not in the legal-move list.
    NotLegal(Move),
    /// A legal move produced a position whose side not to move is in check.
    /// This is an engine bug, never a game outcome.
    InconsistentPosition,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MoveError::Malformed(text) => write!(f, "malformed move string '{}'", text),
            MoveError::NotLegal(mov) => write!(f, "move not legal: {}", mov.as_uci()),
            MoveError::InconsistentPosition => {
                f.write_str("move produced an inconsistent position")
            }
        }
    }
}

impl Error for MoveError {}

/// Classification of a position, computed once per position.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PositionState {
    Normal,
    Check,
    Checkmate,
    Draw,
    /// The side not to move is in check. Never produced by playing legal
    /// moves from a legal position.
    Invalid,
}

/// Lazily computed facts about a position.
#[derive(Clone, Debug)]
pub struct PositionMetadata {
    legal_moves: Vec<Move>,
    state: PositionState,
}

impl PositionMetadata {
    pub fn legal_moves(&self) -> &[Move] {
        &self.legal_moves
    }

    pub fn state(&self) -> PositionState {
        self.state
    }
}

/// Squares found by `Position::attackers_targeting`. At most 26 squares can
/// be reached by all five rules combined.
pub type AttackerVec = ArrayVec<Coord, 32>;

/// A full game-state snapshot.
///
/// Positions are values: `apply_move` returns a new position and leaves the
/// receiver untouched, so callers keep history by keeping old positions.
/// Metadata (legal moves and state) is computed on first query and cached;
/// the cache is not carried over to derived positions.
#[derive(Clone, Debug)]
pub struct Position {
    board: [Option<Piece>; 64],
    side_to_move: Color,
    castle_status: CastleStatus,
    en_passant_square: Option<Coord>,
    halfmove_clock: u32,
    fullmove_number: u32,
    king_squares: [Option<Coord>; 2],
    metadata: OnceCell<PositionMetadata>,
}

//
// Board state getters
//

impl Position {
    /// An empty board with White to move and no castling rights.
    pub fn new() -> Position {
        Position {
            board: [None; 64],
            side_to_move: Color::White,
            castle_status: CastleStatus::NONE,
            en_passant_square: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            king_squares: [None; 2],
            metadata: OnceCell::new(),
        }
    }

    /// Returns the piece on the given square. Off-board coordinates, including
    /// the invalid sentinel, hold no piece.
    pub fn piece_at(&self, coord: Coord) -> Option<Piece> {
        coord.index().and_then(|idx| self.board[idx])
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn en_passant_square(&self) -> Option<Coord> {
        self.en_passant_square
    }

    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    pub fn king_square(&self, color: Color) -> Option<Coord> {
        self.king_squares[color.as_index()]
    }

    pub fn can_castle(&self, color: Color, kind: CastleKind) -> bool {
        self.castle_status.contains(CastleStatus::side(color, kind))
    }

    fn set_piece(&mut self, coord: Coord, piece: Option<Piece>) {
        if let Some(idx) = coord.index() {
            self.board[idx] = piece;
        }
    }

    fn find_kings(&mut self) {
        self.king_squares = [None; 2];
        for file in 0..8 {
            for rank in 0..8 {
                let coord = Coord::new(file, rank);
                if let Some(piece) = self.piece_at(coord) {
                    if piece.kind == PieceKind::King {
                        self.king_squares[piece.color.as_index()] = Some(coord);
                    }
                }
            }
        }
    }
}

//
// Board analysis (attacks, check detection, legality)
//

impl Position {
    /// Returns the squares of `attacker`'s pieces that attack `target` using
    /// any of the patterns in `types`.
    ///
    /// Rather than scanning the board, each enabled rule is cast backwards
    /// from `target` as if a piece of the other color stood there. Any
    /// attacker-owned piece it reaches that moves by that same rule attacks
    /// the target.
    pub fn attackers_targeting(&self, target: Coord, attacker: Color, types: MoveTypes) -> AttackerVec {
        let mut attackers = AttackerVec::new();
        if !target.is_valid() {
            return attackers;
        }

        let casting_as = attacker.toggle();
        for rule in MoveRule::rules_for(types) {
            let mut moves = MoveVec::new();
            rule.generate(self, target, casting_as, &mut moves);
            for mov in &moves {
                let square = mov.to();
                let hit = match self.piece_at(square) {
                    Some(piece) => piece.move_types().contains(rule.move_type()),
                    None => false,
                };

                // Promotion captures reach the same square four times.
                if hit && !attackers.contains(&square) {
                    attackers.push(square);
                }
            }
        }

        attackers
    }

    /// Whether `color`'s king is attacked. A color without a king is never in
    /// check.
    pub fn is_in_check(&self, color: Color) -> bool {
        match self.king_square(color) {
            Some(king) => !self
                .attackers_targeting(king, color.toggle(), MoveTypes::ALL)
                .is_empty(),
            None => false,
        }
    }

    /// Whether this position could have arisen from legal play, i.e. the side
    /// that just moved did not leave its king in check.
    pub fn is_legal(&self) -> bool {
        !self.is_in_check(self.side_to_move.toggle())
    }

    /// Whether the game goes on from here.
    pub fn is_playable(&self) -> bool {
        match self.state() {
            PositionState::Normal | PositionState::Check => true,
            _ => false,
        }
    }

    fn create_legal_moves(&self) -> Vec<Move> {
        let side = self.side_to_move;
        let mut candidates = Vec::new();
        MoveGenerator::new().generate_moves(self, &mut candidates);

        let mut legal: Vec<Move> = candidates
            .into_iter()
            .filter(|mov| !self.apply_move(mov).is_in_check(side))
            .collect();

        for &kind in &CASTLE_KINDS {
            if let Some(castle) = self.castle_move(kind) {
                legal.push(castle);
            }
        }

        legal
    }

    /// Returns the castle of the given kind for the side to move if all of
    /// its preconditions hold.
    fn castle_move(&self, kind: CastleKind) -> Option<Move> {
        let side = self.side_to_move;
        if !self.can_castle(side, kind) {
            return None;
        }

        let rank = side.back_rank();
        let king_start = Coord::new(KING_START_FILE, rank);
        let rook_start = Coord::new(kind.rook_start_file(), rank);
        if self.piece_at(king_start) != Some(Piece::new(PieceKind::King, side))
            || self.piece_at(rook_start) != Some(Piece::new(PieceKind::Rook, side))
        {
            return None;
        }

        let (low, high) = ordered(KING_START_FILE, kind.rook_start_file());
        if (low + 1..high).any(|file| self.piece_at(Coord::new(file, rank)).is_some()) {
            return None;
        }

        // The king may not start in, pass through, or land on an attacked square.
        let (low, high) = ordered(KING_START_FILE, kind.king_target_file());
        let attacked = (low..=high).any(|file| {
            !self
                .attackers_targeting(Coord::new(file, rank), side.toggle(), MoveTypes::ALL)
                .is_empty()
        });
        if attacked {
            return None;
        }

        Some(Move::castle(
            king_start,
            Coord::new(kind.king_target_file(), rank),
            kind,
        ))
    }
}

//
// Metadata and the state machine
//

impl Position {
    pub fn metadata(&self) -> &PositionMetadata {
        self.metadata.get_or_init(|| self.create_metadata())
    }

    /// The legal moves of the side to move. The order is stable: squares are
    /// visited file by file, then castles are appended short before long.
    pub fn legal_moves(&self) -> &[Move] {
        self.metadata().legal_moves()
    }

    pub fn state(&self) -> PositionState {
        self.metadata().state()
    }

    fn create_metadata(&self) -> PositionMetadata {
        let legal_moves = self.create_legal_moves();
        let state = if self.is_in_check(self.side_to_move.toggle()) {
            error!(
                "inconsistent position, {} is in check but not to move: {}",
                self.side_to_move.toggle(),
                self.as_fen()
            );
            PositionState::Invalid
        } else if self.halfmove_clock >= DRAW_HALFMOVES {
            PositionState::Draw
        } else {
            let in_check = self.is_in_check(self.side_to_move);
            match (in_check, legal_moves.is_empty()) {
                (true, true) => PositionState::Checkmate,
                (true, false) => PositionState::Check,
                (false, true) => PositionState::Draw,
                (false, false) => PositionState::Normal,
            }
        };

        trace!(
            "metadata for {}: {} legal moves, {:?}",
            self.as_fen(),
            legal_moves.len(),
            state
        );
        PositionMetadata { legal_moves, state }
    }

    /// Legal moves leaving the given square.
    pub fn moves_from_square(&self, from: Coord) -> impl Iterator<Item = &Move> + '_ {
        self.legal_moves().iter().filter(move |mov| mov.from() == from)
    }

    /// Whether some legal move goes from `from` to `to`.
    pub fn is_legal_destination(&self, from: Coord, to: Coord) -> bool {
        self.moves_from_square(from).any(|mov| mov.to() == to)
    }

    /// Looks up a candidate carrying only origin, destination and promotion in
    /// the legal-move list, returning the fully described legal move.
    pub fn does_move_exist(&self, candidate: &Move) -> Option<&Move> {
        self.legal_moves()
            .iter()
            .find(|mov| mov.same_request(candidate))
    }

    /// Validates a candidate against the legal-move list and plays it.
    pub fn play(&self, candidate: &Move) -> Result<Position, MoveError> {
        let mov = match self.does_move_exist(candidate) {
            Some(mov) => mov,
            None => {
                debug!("rejected move {} in {}", candidate.as_uci(), self.as_fen());
                return Err(MoveError::NotLegal(candidate.clone()));
            }
        };

        let next = self.apply_move(mov);
        if next.state() == PositionState::Invalid {
            error!(
                "legal move {} from {} produced {}",
                mov.as_uci(),
                self.as_fen(),
                next.as_fen()
            );
            return Err(MoveError::InconsistentPosition);
        }

        debug!("played {} ({})", mov.as_uci(), mov.notation(self));
        Ok(next)
    }

    /// Decodes a move string such as "e2e4" or "e7e8q" and plays it.
    pub fn play_uci(&self, text: &str) -> Result<Position, MoveError> {
        let candidate =
            Move::from_uci(text).ok_or_else(|| MoveError::Malformed(text.to_owned()))?;
        self.play(&candidate)
    }
}

//
// Move application
//

impl Position {
    /// Returns the position after `mov`. The move is trusted: it must come
    /// from this position's move generation (legal or pseudo-legal).
    ///
    /// Castling rights are lost when a king or rook leaves its start square,
    /// and also when a rook is captured on its corner, so a rook that later
    /// reaches that corner never revives the right.
    ///
    /// # Panics
    /// Panics if a non-castle move's origin square is empty.
    pub fn apply_move(&self, mov: &Move) -> Position {
        let side = self.side_to_move;
        let mut next = Position {
            board: self.board,
            side_to_move: side,
            castle_status: self.castle_status,
            en_passant_square: None,
            halfmove_clock: self.halfmove_clock + 1,
            fullmove_number: self.fullmove_number,
            king_squares: self.king_squares,
            metadata: OnceCell::new(),
        };

        if side == Color::Black {
            next.fullmove_number += 1;
        }

        if let Some(kind) = mov.castle_kind() {
            let rank = side.back_rank();
            let king_target = Coord::new(kind.king_target_file(), rank);
            next.set_piece(Coord::new(KING_START_FILE, rank), None);
            next.set_piece(Coord::new(kind.rook_start_file(), rank), None);
            next.set_piece(king_target, Some(Piece::new(PieceKind::King, side)));
            next.set_piece(
                Coord::new(kind.rook_target_file(), rank),
                Some(Piece::new(PieceKind::Rook, side)),
            );
            next.castle_status.remove(CastleStatus::color(side));
            next.king_squares[side.as_index()] = Some(king_target);
        } else {
            let moving = self
                .piece_at(mov.from())
                .expect("invalid move: no piece at source square");

            match moving.kind {
                PieceKind::King => {
                    next.castle_status.remove(CastleStatus::color(side));
                    next.king_squares[side.as_index()] = Some(mov.to());
                }
                PieceKind::Rook => {
                    if let Some(kind) = castle_corner(side, mov.from()) {
                        next.castle_status.remove(CastleStatus::side(side, kind));
                    }
                }
                PieceKind::Pawn => {
                    next.halfmove_clock = 0;
                    next.en_passant_square = self.en_passant_after_push(mov, side);
                }
                _ => {}
            }

            if self.piece_at(mov.to()).is_some() {
                next.halfmove_clock = 0;
            }

            if let Some(target) = mov.capture_target() {
                match self.piece_at(target) {
                    // A rook taken on its corner takes its owner's castle with it.
                    Some(victim) if victim.kind == PieceKind::Rook => {
                        if let Some(kind) = castle_corner(victim.color, target) {
                            next.castle_status
                                .remove(CastleStatus::side(victim.color, kind));
                        }
                    }
                    // Only pseudo-legal moves from an invalid position take a king.
                    Some(victim) if victim.kind == PieceKind::King => {
                        next.king_squares[victim.color.as_index()] = None;
                    }
                    _ => {}
                }

                next.set_piece(target, None);
            }

            let placed = match mov.promotion() {
                Some(kind) => Piece::new(kind, side),
                None => moving,
            };
            next.set_piece(mov.to(), Some(placed));
            next.set_piece(mov.from(), None);
        }

        next.side_to_move = side.toggle();
        next
    }

    /// The en-passant target left by a pawn move.
    ///
    /// Only a double step sets one, and only when an enemy pawn already stands
    /// beside the landing square. This is stricter than the textbook rule,
    /// which sets it on every double step; the set of playable captures is the
    /// same either way.
    fn en_passant_after_push(&self, mov: &Move, side: Color) -> Option<Coord> {
        let direction = side.pawn_direction();
        let from = mov.from();
        let to = mov.to();
        if from.rank() != side.pawn_start_rank() || to != from.offset(0, 2 * direction) {
            return None;
        }

        let enemy_pawn = Some(Piece::new(PieceKind::Pawn, side.toggle()));
        if self.piece_at(to.offset(-1, 0)) == enemy_pawn
            || self.piece_at(to.offset(1, 0)) == enemy_pawn
        {
            Some(from.offset(0, direction))
        } else {
            None
        }
    }
}

//
// FEN parsing and generation.
//

impl Position {
    pub fn from_start_position() -> Position {
        Position::from_fen(START_FEN).unwrap()
    }

    /// Constructs a new position from a FEN representation of a board position.
    pub fn from_fen<S: AsRef<str>>(fen: S) -> Result<Position, FenParseError> {
        use std::iter::Peekable;
        use std::str::Chars;

        type Stream<'a> = Peekable<Chars<'a>>;

        fn eat<'a>(iter: &mut Stream<'a>, expected: char) -> Result<(), FenParseError> {
            match iter.next() {
                Some(c) if c == expected => Ok(()),
                Some(c) => Err(FenParseError::UnexpectedChar(c)),
                None => Err(FenParseError::UnexpectedEnd),
            }
        }

        fn advance<'a>(iter: &mut Stream<'a>) {
            let _ = iter.next();
        }

        fn peek<'a>(iter: &mut Stream<'a>) -> Result<char, FenParseError> {
            iter.peek().copied().ok_or(FenParseError::UnexpectedEnd)
        }

        fn eat_side_to_move<'a>(iter: &mut Stream<'a>) -> Result<Color, FenParseError> {
            let side = match peek(iter)? {
                'w' => Color::White,
                'b' => Color::Black,
                _ => return Err(FenParseError::InvalidSideToMove),
            };

            advance(iter);
            Ok(side)
        }

        fn eat_castle_status<'a>(iter: &mut Stream<'a>) -> Result<CastleStatus, FenParseError> {
            if peek(iter)? == '-' {
                advance(iter);
                return Ok(CastleStatus::NONE);
            }

            let mut status = CastleStatus::NONE;
            for _ in 0..4 {
                match peek(iter)? {
                    'K' => status |= CastleStatus::WHITE_SHORT,
                    'Q' => status |= CastleStatus::WHITE_LONG,
                    'k' => status |= CastleStatus::BLACK_SHORT,
                    'q' => status |= CastleStatus::BLACK_LONG,
                    ' ' => break,
                    _ => return Err(FenParseError::InvalidCastle),
                }

                advance(iter);
            }

            Ok(status)
        }

        fn eat_en_passant<'a>(iter: &mut Stream<'a>) -> Result<Option<Coord>, FenParseError> {
            let c = peek(iter)?;
            if c == '-' {
                advance(iter);
                return Ok(None);
            }

            let file = File::try_from(c).map_err(|_| FenParseError::InvalidEnPassant)?;
            advance(iter);
            let rank = Rank::try_from(peek(iter)?).map_err(|_| FenParseError::InvalidEnPassant)?;
            advance(iter);
            Ok(Some(Coord::of(rank, file)))
        }

        fn eat_halfmove<'a>(iter: &mut Stream<'a>) -> Result<u32, FenParseError> {
            let mut buf = String::new();
            loop {
                let c = peek(iter)?;
                if !c.is_ascii_digit() {
                    break;
                }

                buf.push(c);
                advance(iter);
            }

            if buf.is_empty() {
                return Err(FenParseError::EmptyHalfmove);
            }

            buf.parse::<u32>()
                .map_err(|_| FenParseError::InvalidHalfmove)
        }

        fn eat_fullmove<'a>(iter: &mut Stream<'a>) -> Result<u32, FenParseError> {
            let mut buf = String::new();
            for ch in iter {
                if !ch.is_ascii_digit() {
                    break;
                }

                buf.push(ch);
            }

            if buf.is_empty() {
                return Err(FenParseError::EmptyFullmove);
            }

            buf.parse::<u32>()
                .map_err(|_| FenParseError::InvalidFullmove)
        }

        let mut pos = Position::new();
        let iter = &mut fen.as_ref().chars().peekable();
        for &rank in RANKS.iter().rev() {
            let mut file = 0;
            while file < 8 {
                let c = peek(iter)?;
                // digits 1 through 8 indicate empty squares.
                if c.is_ascii_digit() {
                    if c < '1' || c > '8' {
                        return Err(FenParseError::InvalidDigit);
                    }

                    file += c as usize - '0' as usize;
                    if file > 8 {
                        return Err(FenParseError::FileDoesNotSumToEight);
                    }

                    advance(iter);
                    continue;
                }

                // if it's not a digit, it represents a piece.
                let piece = Piece::try_from(c).map_err(|_| FenParseError::UnknownPiece)?;
                pos.set_piece(Coord::of(rank, File::from_index(file)), Some(piece));
                advance(iter);
                file += 1;
            }

            if rank != Rank::One {
                eat(iter, '/')?;
            }
        }

        eat(iter, ' ')?;
        pos.side_to_move = eat_side_to_move(iter)?;
        eat(iter, ' ')?;
        pos.castle_status = eat_castle_status(iter)?;
        eat(iter, ' ')?;
        pos.en_passant_square = eat_en_passant(iter)?;
        eat(iter, ' ')?;
        pos.halfmove_clock = eat_halfmove(iter)?;
        eat(iter, ' ')?;
        pos.fullmove_number = eat_fullmove(iter)?;
        pos.find_kings();
        Ok(pos)
    }

    pub fn as_fen(&self) -> String {
        let mut buf = String::new();
        for &rank in RANKS.iter().rev() {
            let mut empty_squares = 0;
            for &file in &FILES {
                if let Some(piece) = self.piece_at(Coord::of(rank, file)) {
                    if empty_squares != 0 {
                        write!(&mut buf, "{}", empty_squares).unwrap();
                    }
                    buf.push(piece.fen_char());
                    empty_squares = 0;
                } else {
                    empty_squares += 1;
                }
            }

            if empty_squares != 0 {
                write!(&mut buf, "{}", empty_squares).unwrap();
            }

            if rank != Rank::One {
                buf.push('/');
            }
        }

        buf.push(' ');
        match self.side_to_move {
            Color::White => buf.push('w'),
            Color::Black => buf.push('b'),
        }

        buf.push(' ');
        let castle_start = buf.len();
        for &color in &COLORS {
            for &kind in &CASTLE_KINDS {
                if self.can_castle(color, kind) {
                    let letter = match kind {
                        CastleKind::Short => 'K',
                        CastleKind::Long => 'Q',
                    };
                    buf.push(match color {
                        Color::White => letter,
                        Color::Black => letter.to_ascii_lowercase(),
                    });
                }
            }
        }
        if buf.len() == castle_start {
            buf.push('-');
        }

        buf.push(' ');
        match self.en_passant_square {
            Some(square) => write!(&mut buf, "{}", square).unwrap(),
            None => buf.push('-'),
        }

        write!(
            &mut buf,
            " {} {}",
            self.halfmove_clock, self.fullmove_number
        )
        .unwrap();
        buf
    }
}

//
// Trait implementations
//

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for &rank in RANKS.iter().rev() {
            for &file in &FILES {
                match self.piece_at(Coord::of(rank, file)) {
                    Some(piece) => write!(f, " {} ", piece)?,
                    None => write!(f, " . ")?,
                }
            }

            writeln!(f, "| {}", rank)?;
        }

        for _ in &FILES {
            write!(f, "---")?;
        }

        writeln!(f)?;
        for &file in &FILES {
            write!(f, " {} ", file)?;
        }

        writeln!(f)?;
        Ok(())
    }
}

// Two positions are equal when their game state is; cached metadata is ignored.
impl PartialEq for Position {
    fn eq(&self, other: &Position) -> bool {
        self.board == other.board
            && self.side_to_move == other.side_to_move
            && self.castle_status == other.castle_status
            && self.en_passant_square == other.en_passant_square
            && self.halfmove_clock == other.halfmove_clock
            && self.fullmove_number == other.fullmove_number
    }
}

impl Eq for Position {}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}

//
// Helper functions
//

fn ordered(a: i8, b: i8) -> (i8, i8) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// The castle whose rook starts on `square` for `color`, if any.
fn castle_corner(color: Color, square: Coord) -> Option<CastleKind> {
    CASTLE_KINDS
        .iter()
        .copied()
        .find(|kind| square == Coord::new(kind.rook_start_file(), color.back_rank()))
}
