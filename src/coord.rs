//! Square addressing and line geometry.
//!
//! A [`Coordinate`] is a `(rank, file)` pair with both components in `0..8`.
//! Squares are written in algebraic form: a file letter `a`-`h` followed by a
//! rank digit `1`-`8`, so `Coordinate::new(0, 4)` is `"e1"`.

use std::fmt;
use std::str::FromStr;

use crate::constants::{FILES, N, RANKS, SQUARES};
use crate::error::ChessError;

/// A square on the board.
///
/// Ordering is rank-major (`a1 < b1 < ... < h1 < a2`), which is also the order
/// squares are visited in by every board scan.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    rank: u8,
    file: u8,
}

impl Coordinate {
    /// Create a coordinate. Panics if either component is outside `0..8`.
    pub const fn new(rank: u8, file: u8) -> Self {
        assert!(rank < N && file < N, "coordinate out of range");
        Self { rank, file }
    }

    /// Create a coordinate from signed components, or `None` when off the board.
    pub fn checked(rank: i32, file: i32) -> Option<Self> {
        let range = 0..N as i32;
        (range.contains(&rank) && range.contains(&file)).then(|| Self::new(rank as u8, file as u8))
    }

    #[inline]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    #[inline]
    pub const fn file(self) -> u8 {
        self.file
    }

    /// Index into a 64-slot board array.
    #[inline]
    pub const fn index(self) -> usize {
        self.rank as usize * N as usize + self.file as usize
    }

    #[inline]
    pub const fn from_index(index: usize) -> Self {
        Self::new((index / N as usize) as u8, (index % N as usize) as u8)
    }

    /// All 64 squares in rank-major order.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..SQUARES).map(Coordinate::from_index)
    }

    /// Parse a square such as `"e4"`.
    pub fn from_algebraic(text: &str) -> Result<Self, ChessError> {
        let invalid = || ChessError::InvalidSquare(text.to_string());
        let bytes = text.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }
        let file = FILES
            .iter()
            .position(|&c| c == bytes[0].to_ascii_lowercase())
            .ok_or_else(invalid)?;
        let rank = RANKS
            .iter()
            .position(|&c| c == bytes[1])
            .ok_or_else(invalid)?;
        Ok(Self::new(rank as u8, file as u8))
    }

    pub fn to_algebraic(self) -> String {
        self.to_string()
    }

    /// Signed `(rank, file)` difference from `self` to `other`.
    #[inline]
    fn delta(self, other: Coordinate) -> (i32, i32) {
        (
            other.rank as i32 - self.rank as i32,
            other.file as i32 - self.file as i32,
        )
    }

    /// King-step distance between two squares.
    pub fn chebyshev_distance(self, other: Coordinate) -> u8 {
        let (dr, df) = self.delta(other);
        dr.abs().max(df.abs()) as u8
    }

    /// True if both squares lie on a common diagonal. A square is not diagonal to itself.
    pub fn is_diagonal(self, other: Coordinate) -> bool {
        let (dr, df) = self.delta(other);
        dr.abs() == df.abs() && dr != 0
    }

    /// True if both squares share a rank or a file. A square is not orthogonal to itself.
    pub fn is_orthogonal(self, other: Coordinate) -> bool {
        let (dr, df) = self.delta(other);
        (dr == 0) != (df == 0)
    }

    /// The squares strictly between `self` and `end`, in order from `self`.
    ///
    /// Steps one unit in rank and file at a time, `max(|drank|, |dfile|) - 1`
    /// times. Only meaningful when the two squares are aligned orthogonally or
    /// diagonally; for other pairs the walk stops at the board edge.
    pub fn path_between(self, end: Coordinate) -> impl Iterator<Item = Coordinate> {
        let (dr, df) = self.delta(end);
        let (sr, sf) = (dr.signum(), df.signum());
        let steps = dr.abs().max(df.abs());
        let (r0, f0) = (self.rank as i32, self.file as i32);
        (1..steps).map_while(move |i| Coordinate::checked(r0 + sr * i, f0 + sf * i))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            FILES[self.file as usize] as char, RANKS[self.rank as usize] as char
        )
    }
}

impl FromStr for Coordinate {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_algebraic(s)
    }
}
