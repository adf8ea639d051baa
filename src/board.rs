//! Board snapshots.
//!
//! A [`Board`] is a fixed 64-slot array of optional pieces. It is `Copy`, and
//! [`Board::move_piece`] returns a fresh board rather than patching the old one,
//! so every snapshot held by a [`Move`](crate::moves::Move) stays valid.
//!
//! Nothing here enforces standard chess set-up: a board may hold no king, or
//! several kings of one color.

use std::fmt;

use crate::constants::{N, SQUARES};
use crate::coord::Coordinate;
use crate::error::ChessError;
use crate::piece::{Color, Piece, PieceKind};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Option<Piece>; SQUARES],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub const fn empty() -> Self {
        Self {
            cells: [None; SQUARES],
        }
    }

    /// The standard initial arrangement.
    pub fn standard() -> Self {
        use PieceKind::{Bishop, King, Knight, Pawn, Queen, Rook};
        let back_rank = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];

        let mut board = Self::empty();
        for (file, kind) in (0..N).zip(back_rank) {
            board.place(Coordinate::new(0, file), Piece::new(Color::White, kind));
            board.place(Coordinate::new(1, file), Piece::new(Color::White, Pawn));
            board.place(Coordinate::new(6, file), Piece::new(Color::Black, Pawn));
            board.place(Coordinate::new(7, file), Piece::new(Color::Black, kind));
        }
        board
    }

    #[inline]
    pub fn piece_at(&self, coord: Coordinate) -> Option<Piece> {
        self.cells[coord.index()]
    }

    /// Put a piece on a square, replacing whatever was there.
    pub fn place(&mut self, coord: Coordinate, piece: Piece) {
        self.cells[coord.index()] = Some(piece);
    }

    /// Clear a square, returning the piece that stood on it.
    pub fn remove(&mut self, coord: Coordinate) -> Option<Piece> {
        self.cells[coord.index()].take()
    }

    /// True if `from` and `to` share a line and every square strictly between
    /// them is empty. Squares on no common rank, file or diagonal have no path.
    pub fn is_path_clear(&self, from: Coordinate, to: Coordinate) -> bool {
        (from.is_orthogonal(to) || from.is_diagonal(to))
            && from.path_between(to).all(|c| self.piece_at(c).is_none())
    }

    /// Occupied squares with their pieces, in rank-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Coordinate, Piece)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, cell)| cell.map(|p| (Coordinate::from_index(i), p)))
    }

    /// Squares occupied by `color`.
    pub fn occupied_by(&self, color: Color) -> Vec<Coordinate> {
        self.pieces()
            .filter(|(_, p)| p.color == color)
            .map(|(c, _)| c)
            .collect()
    }

    pub fn empty_squares(&self) -> Vec<Coordinate> {
        Coordinate::all()
            .filter(|&c| self.piece_at(c).is_none())
            .collect()
    }

    pub fn piece_count(&self) -> usize {
        self.cells.iter().flatten().count()
    }

    /// Drop king squares from a list of capture targets.
    pub fn excluding_king(&self, coords: Vec<Coordinate>) -> Vec<Coordinate> {
        coords
            .into_iter()
            .filter(|&c| !matches!(self.piece_at(c), Some(p) if p.kind == PieceKind::King))
            .collect()
    }

    /// First square (rank-major) holding a king of `color`.
    pub fn find_king(&self, color: Color) -> Option<Coordinate> {
        let king = Piece::new(color, PieceKind::King);
        self.pieces().find(|&(_, p)| p == king).map(|(c, _)| c)
    }

    /// Is the king of `color` attacked by any enemy piece?
    ///
    /// A board without a king of that color is never in check.
    pub fn king_in_check(&self, color: Color) -> bool {
        let Some(king) = self.find_king(color) else {
            return false;
        };
        self.pieces()
            .filter(|(_, p)| p.color != color)
            .any(|(c, p)| p.can_attack(c, king, self))
    }

    /// A new board with the piece on `from` moved to `to`.
    ///
    /// Whatever stood on `to` is overwritten. A pawn reaching its promotion
    /// rank becomes a queen.
    ///
    /// # Errors
    /// [`ChessError::EmptySquare`] if `from` holds no piece.
    pub fn move_piece(&self, from: Coordinate, to: Coordinate) -> Result<Board, ChessError> {
        let piece = self.piece_at(from).ok_or(ChessError::EmptySquare(from))?;
        Ok(self.relocate(from, to, piece))
    }

    /// [`Board::move_piece`] for a caller that already holds the moving piece.
    pub(crate) fn relocate(&self, from: Coordinate, to: Coordinate, piece: Piece) -> Board {
        let mut next = *self;
        let landed = if piece.kind == PieceKind::Pawn && to.rank() == piece.color.promotion_rank() {
            Piece::new(piece.color, PieceKind::Queen)
        } else {
            piece
        };
        next.remove(from);
        next.place(to, landed);
        next
    }
}

impl FromIterator<(Coordinate, Piece)> for Board {
    fn from_iter<I: IntoIterator<Item = (Coordinate, Piece)>>(iter: I) -> Self {
        let mut board = Board::empty();
        for (coord, piece) in iter {
            board.place(coord, piece);
        }
        board
    }
}

/// Debug dump, rank 8 at the top.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..N).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..N {
                match self.piece_at(Coordinate::new(rank, file)) {
                    Some(piece) => write!(f, "{piece} ")?,
                    None => write!(f, ".. ")?,
                }
            }
            writeln!(f)?;
        }
        writeln!(f, "  a  b  c  d  e  f  g  h")
    }
}
