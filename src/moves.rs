//! A move together with its outcome.
//!
//! Building a [`Move`] applies it immediately: the board after the move and
//! the check status of both kings are computed up front, so legality tests and
//! the move selector only ever read precomputed fields.

use std::fmt;

use crate::board::Board;
use crate::coord::Coordinate;
use crate::error::ChessError;
use crate::piece::{Color, Piece};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Move {
    pub from: Coordinate,
    pub to: Coordinate,
    /// The piece that moved, as it stood before the move.
    pub piece: Piece,
    /// What stood on `to` before the move.
    pub captured: Option<Piece>,
    pub board_before: Board,
    pub board_after: Board,
    /// Check status after the move, indexed by [`Color::index`].
    in_check: [bool; 2],
}

impl Move {
    /// Apply the piece on `from` to `to` on a copy of `board`.
    ///
    /// # Errors
    /// [`ChessError::EmptySquare`] if `from` holds no piece.
    pub fn new(from: Coordinate, to: Coordinate, board: &Board) -> Result<Move, ChessError> {
        let piece = board.piece_at(from).ok_or(ChessError::EmptySquare(from))?;
        Ok(Self::with_piece(from, to, piece, board))
    }

    pub(crate) fn with_piece(from: Coordinate, to: Coordinate, piece: Piece, board: &Board) -> Move {
        let board_after = board.relocate(from, to, piece);
        let in_check = Color::ALL.map(|c| board_after.king_in_check(c));
        Move {
            from,
            to,
            piece,
            captured: board.piece_at(to),
            board_before: *board,
            board_after,
            in_check,
        }
    }

    /// Is the king of `color` in check once this move is played?
    #[inline]
    pub fn in_check(&self, color: Color) -> bool {
        self.in_check[color.index()]
    }

    /// Does this move check the mover's opponent?
    #[inline]
    pub fn gives_check(&self) -> bool {
        self.in_check(self.piece.color.opponent())
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// Value of the captured piece, zero for a quiet move.
    pub fn capture_value(&self) -> u32 {
        self.captured.map_or(0, |p| p.kind.capture_value())
    }

    /// Short algebraic notation: piece letter, `x` on capture, destination.
    ///
    /// No disambiguation and no check suffix, e.g. `"Ng6"`, `"e4"`, `"Bxf7"`.
    pub fn to_notation(&self) -> String {
        let capture = if self.is_capture() { "x" } else { "" };
        format!("{}{}{}", self.piece.kind.notation(), capture, self.to)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_notation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::PieceKind;

    fn sq(s: &str) -> Coordinate {
        s.parse().unwrap()
    }

    #[test]
    fn test_notation() {
        let board = Board::standard();
        let mv = Move::new(sq("e2"), sq("e4"), &board).unwrap();
        assert_eq!(mv.to_notation(), "e4");
        let mv = Move::new(sq("g1"), sq("f3"), &board).unwrap();
        assert_eq!(mv.to_notation(), "Nf3");
        let mv = Move::new(sq("d1"), sq("d7"), &board).unwrap();
        assert_eq!(mv.to_notation(), "Qxd7");
        assert_eq!(mv.to_string(), "Qxd7");
    }

    #[test]
    fn test_captured_piece_from_board_before() {
        let board = Board::standard();
        let mv = Move::new(sq("d1"), sq("d7"), &board).unwrap();
        assert_eq!(mv.captured, Some(Piece::new(Color::Black, PieceKind::Pawn)));
        assert_eq!(mv.capture_value(), PieceKind::Pawn.capture_value());
        assert_eq!(mv.board_before, board);
        assert_eq!(
            mv.board_after.piece_at(sq("d7")),
            Some(Piece::new(Color::White, PieceKind::Queen))
        );
    }

    #[test]
    fn test_check_status_computed_for_both_sides() {
        // Qxd7 attacks e8 and leaves the white king alone.
        let mv = Move::new(sq("d1"), sq("d7"), &Board::standard()).unwrap();
        assert!(mv.in_check(Color::Black));
        assert!(!mv.in_check(Color::White));
        assert!(mv.gives_check());
    }

    #[test]
    fn test_pawn_promotion_notation_keeps_pawn_letter() {
        let board: Board = [(sq("c7"), Piece::new(Color::White, PieceKind::Pawn))]
            .into_iter()
            .collect();
        let mv = Move::new(sq("c7"), sq("c8"), &board).unwrap();
        assert_eq!(mv.to_notation(), "c8");
        assert_eq!(
            mv.board_after.piece_at(sq("c8")),
            Some(Piece::new(Color::White, PieceKind::Queen))
        );
    }

    #[test]
    fn test_move_from_empty_square() {
        assert_eq!(
            Move::new(sq("e4"), sq("e5"), &Board::standard()),
            Err(ChessError::EmptySquare(sq("e4")))
        );
    }
}
