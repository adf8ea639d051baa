//! Constants for board geometry, pawn ranks, and engine parameters.
//!
//! Squares are addressed by zero-based `(rank, file)` pairs. Rank 0 is White's
//! back rank and file 0 is the `a` file.

// =============================================================================
// Board Geometry
// =============================================================================

/// Board width and height.
pub const N: u8 = 8;

/// Total number of squares.
pub const SQUARES: usize = (N as usize) * (N as usize);

/// File letters, left to right from White's point of view.
pub const FILES: &[u8; 8] = b"abcdefgh";

/// Rank digits, bottom to top from White's point of view.
pub const RANKS: &[u8; 8] = b"12345678";

// =============================================================================
// Pawn Ranks
// =============================================================================

/// Rank White pawns start on (and may double-step from).
pub const WHITE_PAWN_RANK: u8 = 1;

/// Rank Black pawns start on (and may double-step from).
pub const BLACK_PAWN_RANK: u8 = 6;

/// Rank on which a White pawn promotes.
pub const WHITE_PROMOTION_RANK: u8 = 7;

/// Rank on which a Black pawn promotes.
pub const BLACK_PROMOTION_RANK: u8 = 0;

// =============================================================================
// Engine Parameters
// =============================================================================

/// Maximum number of plies in a self-play game.
pub const MAX_GAME_LEN: usize = 300;

/// Mate validation only runs when at least this many checking moves exist.
///
/// A lone checking move is therefore never classified as mate.
pub const MATE_MIN_CHECKS: usize = 2;
