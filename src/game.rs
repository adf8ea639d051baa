//! Move selection and turn-taking.
//!
//! The selector walks a fixed priority ladder over the legal moves of the side
//! to move and takes the first tier that is not empty:
//!
//! 1. a mating move (first found),
//! 2. a checking move (first found),
//! 3. the capture of the most valuable piece (the last found among equals),
//! 4. a quiet move chosen uniformly at random.
//!
//! Randomness comes from an injected [`fastrand::Rng`], so a seeded game is
//! reproducible.

use log::debug;

use crate::board::Board;
use crate::movegen::{checking_moves, has_legal_move, legal_moves, mating_moves};
use crate::moves::Move;
use crate::piece::Color;

/// Which rung of the ladder produced a move.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Tier {
    Mate,
    Check,
    Capture,
    Quiet,
}

/// State of the game from the point of view of the side to move.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    /// No legal move while in check.
    Checkmate,
    /// No legal move while not in check.
    Stalemate,
}

/// Choose a move for `color` on `board`, or `None` if it has no legal move.
pub fn select_move(board: &Board, color: Color, rng: &mut fastrand::Rng) -> Option<(Tier, Move)> {
    let moves = legal_moves(board, color);
    let checks = checking_moves(&moves, color);
    let mates = mating_moves(&checks, color);

    if let Some(mv) = mates.into_iter().next() {
        return Some((Tier::Mate, mv));
    }
    if let Some(mv) = checks.into_iter().next() {
        return Some((Tier::Check, mv));
    }
    // max_by_key keeps the last of several equal maxima.
    if let Some(mv) = moves.captures.into_iter().max_by_key(Move::capture_value) {
        return Some((Tier::Capture, mv));
    }
    let mut quiet = moves.quiet;
    if quiet.is_empty() {
        return None;
    }
    let pick = rng.usize(..quiet.len());
    Some((Tier::Quiet, quiet.swap_remove(pick)))
}

/// Status of `color` on `board`.
pub fn game_status(board: &Board, color: Color) -> GameStatus {
    if has_legal_move(board, color) {
        GameStatus::Ongoing
    } else if board.king_in_check(color) {
        GameStatus::Checkmate
    } else {
        GameStatus::Stalemate
    }
}

/// A game in progress: the current board and the random source for the selector.
pub struct Game {
    board: Board,
    rng: fastrand::Rng,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// A game from the standard initial arrangement.
    pub fn new() -> Self {
        Self::from_board(&Board::standard())
    }

    /// A game starting from a copy of `board`.
    pub fn from_board(board: &Board) -> Self {
        Self::with_rng(board, fastrand::Rng::new())
    }

    /// A game starting from a copy of `board`, drawing from `rng`.
    pub fn with_rng(board: &Board, rng: fastrand::Rng) -> Self {
        Self { board: *board, rng }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Replace the current board with a copy of `board`, keeping the random source.
    pub fn set_board(&mut self, board: &Board) {
        self.board = *board;
    }

    /// Play one ply for `color`.
    ///
    /// Returns the chosen move and replaces the current board with its
    /// `board_after`, or returns `None` and leaves the board untouched when
    /// `color` has no legal move.
    pub fn next_move(&mut self, color: Color) -> Option<Move> {
        let (tier, mv) = select_move(&self.board, color, &mut self.rng)?;
        debug!("{color} plays {mv} ({tier:?})");
        self.board = mv.board_after;
        Some(mv)
    }

    pub fn status(&self, color: Color) -> GameStatus {
        game_status(&self.board, color)
    }

    pub fn pieces_left(&self) -> usize {
        self.board.piece_count()
    }
}
