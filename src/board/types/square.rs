//! Board squares in little-endian rank-file layout.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A square on the chess board, stored as a compact 0-63 index.
///
/// Layout: `rank * 8 + file`, so a1 = 0, b1 = 1, ..., h1 = 7, a2 = 8, h8 = 63.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(u8);

impl Square {
    pub(crate) const A1: Square = Square(0);
    pub(crate) const E1: Square = Square(4);
    pub(crate) const H1: Square = Square(7);
    pub(crate) const A8: Square = Square(56);
    pub(crate) const E8: Square = Square(60);
    pub(crate) const H8: Square = Square(63);

    /// Create a square from rank and file (both 0-7, unchecked).
    #[inline]
    #[must_use]
    pub const fn new(rank: usize, file: usize) -> Self {
        Square((rank * 8 + file) as u8)
    }

    /// Create a square from a 0-63 index.
    #[inline]
    #[must_use]
    pub const fn from_index(idx: usize) -> Self {
        Square(idx as u8)
    }

    /// The square's 0-63 index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Rank 0-7 (0 = rank 1).
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        (self.0 >> 3) as usize
    }

    /// File 0-7 (0 = file a).
    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        (self.0 & 7) as usize
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            (b'a' + self.file() as u8) as char,
            self.rank() + 1
        )
    }
}

/// Parse a two-character square name ("a1".."h8"). Used by FEN and UCI parsing.
pub(crate) fn parse_square(name: &str) -> Option<Square> {
    let bytes = name.as_bytes();
    if bytes.len() != 2 {
        return None;
    }
    let file = bytes[0].wrapping_sub(b'a');
    let rank = bytes[1].wrapping_sub(b'1');
    if file > 7 || rank > 7 {
        return None;
    }
    Some(Square::new(rank as usize, file as usize))
}

impl FromStr for Square {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_square(s).ok_or(())
    }
}
