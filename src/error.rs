//! Error type shared by the board, the move generator and the text protocol.

use thiserror::Error;

use crate::coord::Coordinate;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    /// A move was requested from a square with no piece on it.
    #[error("no piece on {0}")]
    EmptySquare(Coordinate),
    /// Text that is not a square in algebraic form.
    #[error("invalid square: {0:?}")]
    InvalidSquare(String),
    #[error("invalid color: {0:?}")]
    InvalidColor(String),
    #[error("invalid piece: {0:?}")]
    InvalidPiece(String),
}
