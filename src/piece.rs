//! Piece kinds, colors, and per-kind movement rules.
//!
//! Each kind has a move predicate and an attack predicate. They agree for every
//! kind except the pawn, which moves straight ahead but attacks diagonally.
//! A predicate only asks the board which squares are empty. Whether the
//! destination holds a friendly piece or a king is the move generator's
//! business.

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::constants::{
    BLACK_PAWN_RANK, BLACK_PROMOTION_RANK, WHITE_PAWN_RANK, WHITE_PROMOTION_RANK,
};
use crate::coord::Coordinate;
use crate::error::ChessError;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Index for per-color arrays: White=0, Black=1.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Rank step of a pawn moving forward.
    #[inline]
    pub const fn direction(self) -> i32 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    #[inline]
    pub const fn pawn_rank(self) -> u8 {
        match self {
            Color::White => WHITE_PAWN_RANK,
            Color::Black => BLACK_PAWN_RANK,
        }
    }

    #[inline]
    pub const fn promotion_rank(self) -> u8 {
        match self {
            Color::White => WHITE_PROMOTION_RANK,
            Color::Black => BLACK_PROMOTION_RANK,
        }
    }

    fn letter(self) -> char {
        match self {
            Color::White => 'W',
            Color::Black => 'B',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

impl FromStr for Color {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "w" | "white" => Ok(Color::White),
            "b" | "black" => Ok(Color::Black),
            _ => Err(ChessError::InvalidColor(s.to_string())),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceKind {
    /// Letter used in the board dump.
    pub const fn letter(self) -> char {
        match self {
            PieceKind::King => 'K',
            PieceKind::Queen => 'Q',
            PieceKind::Rook => 'R',
            PieceKind::Bishop => 'B',
            PieceKind::Knight => 'N',
            PieceKind::Pawn => 'P',
        }
    }

    /// Prefix used in move notation. Pawns have none.
    pub const fn notation(self) -> &'static str {
        match self {
            PieceKind::King => "K",
            PieceKind::Queen => "Q",
            PieceKind::Rook => "R",
            PieceKind::Bishop => "B",
            PieceKind::Knight => "N",
            PieceKind::Pawn => "",
        }
    }

    /// Worth of capturing a piece of this kind, as ranked by the move selector.
    ///
    /// Kings are never capture targets and are worth nothing.
    pub const fn capture_value(self) -> u32 {
        match self {
            PieceKind::Queen => 8,
            PieceKind::Bishop => 7,
            PieceKind::Knight => 6,
            PieceKind::Rook => 5,
            PieceKind::Pawn => 4,
            PieceKind::King => 0,
        }
    }
}

impl FromStr for PieceKind {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "k" | "king" => Ok(PieceKind::King),
            "q" | "queen" => Ok(PieceKind::Queen),
            "r" | "rook" => Ok(PieceKind::Rook),
            "b" | "bishop" => Ok(PieceKind::Bishop),
            "n" | "knight" => Ok(PieceKind::Knight),
            "p" | "pawn" => Ok(PieceKind::Pawn),
            _ => Err(ChessError::InvalidPiece(s.to_string())),
        }
    }
}

/// A colored piece.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// Can this piece move from `from` to the (empty) square `to`?
    pub fn can_move(&self, from: Coordinate, to: Coordinate, board: &Board) -> bool {
        match self.kind {
            PieceKind::Pawn => self.pawn_can_advance(from, to, board),
            _ => self.can_reach(from, to, board),
        }
    }

    /// Does this piece, standing on `from`, attack `to`?
    pub fn can_attack(&self, from: Coordinate, to: Coordinate, board: &Board) -> bool {
        match self.kind {
            PieceKind::Pawn => {
                let rank_delta = to.rank() as i32 - from.rank() as i32;
                let file_delta = (to.file() as i32 - from.file() as i32).abs();
                file_delta == 1 && rank_delta == self.color.direction()
            }
            _ => self.can_reach(from, to, board),
        }
    }

    /// Shared move/attack rule of every kind but the pawn.
    fn can_reach(&self, from: Coordinate, to: Coordinate, board: &Board) -> bool {
        match self.kind {
            PieceKind::King => from.chebyshev_distance(to) == 1,
            PieceKind::Knight => {
                let dr = (to.rank() as i32 - from.rank() as i32).abs();
                let df = (to.file() as i32 - from.file() as i32).abs();
                (dr, df) == (1, 2) || (dr, df) == (2, 1)
            }
            PieceKind::Rook => from.is_orthogonal(to) && board.is_path_clear(from, to),
            PieceKind::Bishop => from.is_diagonal(to) && board.is_path_clear(from, to),
            PieceKind::Queen => board.is_path_clear(from, to),
            PieceKind::Pawn => false,
        }
    }

    fn pawn_can_advance(&self, from: Coordinate, to: Coordinate, board: &Board) -> bool {
        if from.file() != to.file() {
            return false;
        }
        let rank_delta = to.rank() as i32 - from.rank() as i32;
        let direction = self.color.direction();
        if rank_delta == direction {
            return true;
        }
        // Double step: starting rank only, through and onto empty squares.
        rank_delta == 2 * direction
            && from.rank() == self.color.pawn_rank()
            && board.is_path_clear(from, to)
            && board.piece_at(to).is_none()
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.color.letter(), self.kind.letter())
    }
}
