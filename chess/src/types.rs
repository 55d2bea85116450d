//! Canonical square, piece and color types for the project.
//! cozy-chess types are internal implementation details.

use std::fmt;
use std::str::FromStr;

/// Project-owned piece type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// Project-owned color type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceColor {
    White,
    Black,
}

/// A colored piece as it stands on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: PieceColor,
}

/// A board coordinate, file a..h and rank 1..8.
///
/// Stored zero-based; serialized as the usual two-character code ("e4").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    rank: u8,
    file: u8,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        Self::Pawn,
        Self::Knight,
        Self::Bishop,
        Self::Rook,
        Self::Queen,
        Self::King,
    ];

    pub fn to_char_upper(self) -> char {
        match self {
            Self::Pawn => 'P',
            Self::Knight => 'N',
            Self::Bishop => 'B',
            Self::Rook => 'R',
            Self::Queen => 'Q',
            Self::King => 'K',
        }
    }

    pub fn to_char_lower(self) -> char {
        self.to_char_upper().to_ascii_lowercase()
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'p' => Some(Self::Pawn),
            'n' => Some(Self::Knight),
            'b' => Some(Self::Bishop),
            'r' => Some(Self::Rook),
            'q' => Some(Self::Queen),
            'k' => Some(Self::King),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Pawn => "pawn",
            Self::Knight => "knight",
            Self::Bishop => "bishop",
            Self::Rook => "rook",
            Self::Queen => "queen",
            Self::King => "king",
        }
    }

    /// Position in [`PieceKind::ALL`], handy for lookup tables.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl PieceColor {
    pub const ALL: [PieceColor; 2] = [Self::White, Self::Black];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Black => "black",
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// Capitalized name for status lines ("White", "Black").
    pub fn title(self) -> &'static str {
        match self {
            Self::White => "White",
            Self::Black => "Black",
        }
    }
}

impl Piece {
    pub fn new(kind: PieceKind, color: PieceColor) -> Self {
        Self { kind, color }
    }

    /// FEN letter: uppercase for white, lowercase for black.
    pub fn to_fen_char(self) -> char {
        match self.color {
            PieceColor::White => self.kind.to_char_upper(),
            PieceColor::Black => self.kind.to_char_lower(),
        }
    }

    pub fn from_fen_char(c: char) -> Option<Self> {
        let kind = PieceKind::from_char(c)?;
        let color = if c.is_ascii_uppercase() {
            PieceColor::White
        } else {
            PieceColor::Black
        };
        Some(Self { kind, color })
    }
}

impl Square {
    /// Build a square from zero-based file and rank. Returns `None` off the board.
    pub fn new(file: u8, rank: u8) -> Option<Self> {
        (file < 8 && rank < 8).then_some(Self { rank, file })
    }

    /// All 64 squares, a1 first, h8 last.
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(|i| Self {
            rank: i / 8,
            file: i % 8,
        })
    }

    pub fn file(self) -> u8 {
        self.file
    }

    pub fn rank(self) -> u8 {
        self.rank
    }

    pub fn index(self) -> usize {
        self.rank as usize * 8 + self.file as usize
    }

    pub fn file_char(self) -> char {
        (b'a' + self.file) as char
    }

    pub fn rank_char(self) -> char {
        (b'1' + self.rank) as char
    }

    /// a1 is a dark square.
    pub fn is_light(self) -> bool {
        (self.file + self.rank) % 2 == 1
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SquareParseError {
    #[error("Square must be two characters, got {0:?}")]
    Length(String),
    #[error("Invalid file: {0}")]
    InvalidFile(char),
    #[error("Invalid rank: {0}")]
    InvalidRank(char),
}

impl FromStr for Square {
    type Err = SquareParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(file_char), Some(rank_char), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(SquareParseError::Length(s.to_string()));
        };

        let file = match file_char.to_ascii_lowercase() {
            c @ 'a'..='h' => c as u8 - b'a',
            _ => return Err(SquareParseError::InvalidFile(file_char)),
        };
        let rank = match rank_char {
            c @ '1'..='8' => c as u8 - b'1',
            _ => return Err(SquareParseError::InvalidRank(rank_char)),
        };

        Ok(Self { rank, file })
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char_upper())
    }
}

impl fmt::Display for PieceColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<cozy_chess::Piece> for PieceKind {
    fn from(p: cozy_chess::Piece) -> Self {
        match p {
            cozy_chess::Piece::Pawn => Self::Pawn,
            cozy_chess::Piece::Knight => Self::Knight,
            cozy_chess::Piece::Bishop => Self::Bishop,
            cozy_chess::Piece::Rook => Self::Rook,
            cozy_chess::Piece::Queen => Self::Queen,
            cozy_chess::Piece::King => Self::King,
        }
    }
}

impl From<PieceKind> for cozy_chess::Piece {
    fn from(p: PieceKind) -> Self {
        match p {
            PieceKind::Pawn => Self::Pawn,
            PieceKind::Knight => Self::Knight,
            PieceKind::Bishop => Self::Bishop,
            PieceKind::Rook => Self::Rook,
            PieceKind::Queen => Self::Queen,
            PieceKind::King => Self::King,
        }
    }
}

impl From<cozy_chess::Color> for PieceColor {
    fn from(c: cozy_chess::Color) -> Self {
        match c {
            cozy_chess::Color::White => Self::White,
            cozy_chess::Color::Black => Self::Black,
        }
    }
}

impl From<PieceColor> for cozy_chess::Color {
    fn from(c: PieceColor) -> Self {
        match c {
            PieceColor::White => Self::White,
            PieceColor::Black => Self::Black,
        }
    }
}

impl From<cozy_chess::Square> for Square {
    fn from(sq: cozy_chess::Square) -> Self {
        Self {
            rank: sq.rank() as u8,
            file: sq.file() as u8,
        }
    }
}

impl From<Square> for cozy_chess::Square {
    fn from(sq: Square) -> Self {
        cozy_chess::Square::new(
            cozy_chess::File::index(sq.file as usize),
            cozy_chess::Rank::index(sq.rank as usize),
        )
    }
}
