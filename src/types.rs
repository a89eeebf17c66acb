// Copyright 2024 Chess3D developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use num_traits::{FromPrimitive, ToPrimitive};
use std::convert::TryFrom;
use std::fmt::{self, Display, Write};

// TableIndex is a trait for all types that can serve as an index into a table.
// It is common to use these types as indices into tables, so this trait allows
// any type implementing To and FromPrimitive to be used as table indices.
pub trait TableIndex {
    fn as_index(self) -> usize;
    fn from_index(idx: usize) -> Self;
}

impl<T> TableIndex for T
where
    T: FromPrimitive + ToPrimitive,
{
    fn as_index(self) -> usize {
        self.to_u32().unwrap() as usize
    }

    fn from_index(idx: usize) -> T {
        <T as FromPrimitive>::from_u64(idx as u64).unwrap()
    }
}

/// A square on the 8x8 board, or the invalid sentinel.
///
/// A `Coord` is always either on the board or exactly `Coord::INVALID`; every
/// constructor and offset folds off-board results into the sentinel, so
/// walking off an edge can be detected with `is_valid`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Coord {
    file: i8,
    rank: i8,
}

impl Coord {
    pub const INVALID: Coord = Coord { file: -1, rank: -1 };

    pub fn new(file: i8, rank: i8) -> Coord {
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Coord { file, rank }
        } else {
            Coord::INVALID
        }
    }

    pub fn of(rank: Rank, file: File) -> Coord {
        Coord {
            file: file.as_index() as i8,
            rank: rank.as_index() as i8,
        }
    }

    /// Parses algebraic square text such as "e4". Only the first two characters
    /// are inspected; anything that does not name a square yields the sentinel.
    pub fn from_algebraic(text: &str) -> Coord {
        let mut chars = text.chars();
        let file = chars.next().and_then(|c| File::try_from(c).ok());
        let rank = chars.next().and_then(|c| Rank::try_from(c).ok());
        match (file, rank) {
            (Some(file), Some(rank)) => Coord::of(rank, file),
            _ => Coord::INVALID,
        }
    }

    pub fn file(self) -> i8 {
        self.file
    }

    pub fn rank(self) -> i8 {
        self.rank
    }

    pub fn is_valid(self) -> bool {
        self != Coord::INVALID
    }

    pub fn offset(self, file_delta: i8, rank_delta: i8) -> Coord {
        if !self.is_valid() {
            return Coord::INVALID;
        }

        Coord::new(self.file + file_delta, self.rank + rank_delta)
    }

    /// Index into a 64-entry board, rank-major from a1. `None` for the sentinel.
    pub fn index(self) -> Option<usize> {
        if self.is_valid() {
            Some(self.rank as usize * 8 + self.file as usize)
        } else {
            None
        }
    }

    pub fn file_char(self) -> char {
        (b'a' + self.file as u8) as char
    }

    pub fn rank_char(self) -> char {
        (b'1' + self.rank as u8) as char
    }
}

impl Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if !self.is_valid() {
            return f.write_char('-');
        }

        f.write_char(self.file_char())?;
        f.write_char(self.rank_char())
    }
}

/// Every on-board coordinate, a1 through h8, rank by rank.
pub fn all_coords() -> impl Iterator<Item = Coord> {
    RANKS
        .iter()
        .flat_map(|&rank| FILES.iter().map(move |&file| Coord::of(rank, file)))
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, FromPrimitive, ToPrimitive)]
pub enum Rank {
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
}

impl Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_char((b'1' + self.as_index() as u8) as char)
    }
}

impl TryFrom<char> for Rank {
    type Error = ();

    fn try_from(value: char) -> Result<Self, Self::Error> {
        let res = match value {
            '1' => Rank::One,
            '2' => Rank::Two,
            '3' => Rank::Three,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            _ => return Err(()),
        };
        Ok(res)
    }
}

pub static RANKS: [Rank; 8] = [
    Rank::One,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
];

#[derive(Copy, Clone, Debug, PartialEq, Eq, FromPrimitive, ToPrimitive)]
pub enum File {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
}

impl Display for File {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_char((b'a' + self.as_index() as u8) as char)
    }
}

impl TryFrom<char> for File {
    type Error = ();

    fn try_from(value: char) -> Result<Self, Self::Error> {
        let res = match value {
            'a' => File::A,
            'b' => File::B,
            'c' => File::C,
            'd' => File::D,
            'e' => File::E,
            'f' => File::F,
            'g' => File::G,
            'h' => File::H,
            _ => return Err(()),
        };
        Ok(res)
    }
}

pub static FILES: [File; 8] = [
    File::A,
    File::B,
    File::C,
    File::D,
    File::E,
    File::F,
    File::G,
    File::H,
];

#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive, Serialize, Deserialize,
)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn toggle(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank delta of a pawn push for this color.
    pub fn pawn_direction(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    pub fn pawn_start_rank(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    pub fn promotion_rank(self) -> i8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// The rank both of this color's castling pieces start on.
    pub fn back_rank(self) -> i8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Color::White => f.write_str("White"),
            Color::Black => f.write_str("Black"),
        }
    }
}

pub static COLORS: [Color; 2] = [Color::White, Color::Black];

bitflags! {
    /// The movement patterns a piece is capable of. Each flag names one of
    /// the rules in `move_generator`.
    pub struct MoveTypes: u8 {
        const DIAGONAL   = 0b0000_0001;
        const ORTHOGONAL = 0b0000_0010;
        const KNIGHT     = 0b0000_0100;
        const PAWN       = 0b0000_1000;
        const KING       = 0b0001_0000;
        const QUEEN = Self::DIAGONAL.bits | Self::ORTHOGONAL.bits;
        const ALL = Self::DIAGONAL.bits
            | Self::ORTHOGONAL.bits
            | Self::KNIGHT.bits
            | Self::PAWN.bits
            | Self::KING.bits;
    }
}

/// Static per-kind data: display letter, material value and capability mask.
#[derive(Copy, Clone, Debug)]
pub struct PieceData {
    pub symbol: char,
    pub value: u32,
    pub move_types: MoveTypes,
}

static PIECE_DATA: [PieceData; 6] = [
    PieceData {
        symbol: 'P',
        value: 1,
        move_types: MoveTypes::PAWN,
    },
    PieceData {
        symbol: 'N',
        value: 3,
        move_types: MoveTypes::KNIGHT,
    },
    PieceData {
        symbol: 'B',
        value: 3,
        move_types: MoveTypes::DIAGONAL,
    },
    PieceData {
        symbol: 'R',
        value: 5,
        move_types: MoveTypes::ORTHOGONAL,
    },
    PieceData {
        symbol: 'Q',
        value: 9,
        move_types: MoveTypes::QUEEN,
    },
    PieceData {
        symbol: 'K',
        value: 0,
        move_types: MoveTypes::KING,
    },
];

#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive, Serialize, Deserialize,
)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub fn data(self) -> &'static PieceData {
        &PIECE_DATA[self.as_index()]
    }

    pub fn symbol(self) -> char {
        self.data().symbol
    }

    pub fn value(self) -> u32 {
        self.data().value
    }

    pub fn move_types(self) -> MoveTypes {
        self.data().move_types
    }

    /// Decodes the lowercase promotion suffix of a move string.
    pub fn from_promotion_char(c: char) -> Option<PieceKind> {
        match c {
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            _ => None,
        }
    }
}

pub static PIECE_KINDS: [PieceKind; 6] = [
    PieceKind::Pawn,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
    PieceKind::King,
];

/// Pieces a pawn may promote to, in generation order.
pub static PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
];

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive)]
pub enum CastleKind {
    Short,
    Long,
}

pub static CASTLE_KINDS: [CastleKind; 2] = [CastleKind::Short, CastleKind::Long];

impl CastleKind {
    /// File of the rook that takes part in this castle.
    pub fn rook_start_file(self) -> i8 {
        match self {
            CastleKind::Short => 7,
            CastleKind::Long => 0,
        }
    }

    pub fn king_target_file(self) -> i8 {
        match self {
            CastleKind::Short => 6,
            CastleKind::Long => 2,
        }
    }

    pub fn rook_target_file(self) -> i8 {
        match self {
            CastleKind::Short => 5,
            CastleKind::Long => 3,
        }
    }
}

pub const KING_START_FILE: i8 = 4;

bitflags! {
    pub struct CastleStatus: u8 {
        const NONE = 0;
        const WHITE_SHORT = 0b0000_0001;
        const WHITE_LONG  = 0b0000_0010;
        const WHITE = Self::WHITE_SHORT.bits | Self::WHITE_LONG.bits;
        const BLACK_SHORT = 0b0000_0100;
        const BLACK_LONG  = 0b0000_1000;
        const BLACK = Self::BLACK_SHORT.bits | Self::BLACK_LONG.bits;
    }
}

impl CastleStatus {
    pub fn side(color: Color, kind: CastleKind) -> CastleStatus {
        match (color, kind) {
            (Color::White, CastleKind::Short) => CastleStatus::WHITE_SHORT,
            (Color::White, CastleKind::Long) => CastleStatus::WHITE_LONG,
            (Color::Black, CastleKind::Short) => CastleStatus::BLACK_SHORT,
            (Color::Black, CastleKind::Long) => CastleStatus::BLACK_LONG,
        }
    }

    pub fn color(color: Color) -> CastleStatus {
        match color {
            Color::White => CastleStatus::WHITE,
            Color::Black => CastleStatus::BLACK,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color) -> Piece {
        Piece { kind, color }
    }

    pub fn move_types(&self) -> MoveTypes {
        self.kind.move_types()
    }

    /// The FEN letter for this piece: uppercase for White, lowercase for Black.
    pub fn fen_char(&self) -> char {
        let symbol = self.kind.symbol();
        match self.color {
            Color::White => symbol,
            Color::Black => symbol.to_ascii_lowercase(),
        }
    }
}

impl TryFrom<char> for Piece {
    type Error = ();

    fn try_from(c: char) -> Result<Self, Self::Error> {
        let upper = c.to_ascii_uppercase();
        let kind = PIECE_KINDS
            .iter()
            .copied()
            .find(|kind| kind.symbol() == upper)
            .ok_or(())?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };

        Ok(Piece::new(kind, color))
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_char(self.fen_char())
    }
}
