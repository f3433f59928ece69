//! Square type and coordinate helpers.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on the board, represented as (row, column).
///
/// Row 0 is White's home rank and column 0 is the a-file, so `Square(1, 4)`
/// is e2. The fields are public and unchecked: a caller may build an
/// out-of-range square, and every operation that accepts one treats it as a
/// rejected input rather than indexing with it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub usize, pub usize); // (row, col)

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Square(row, col))
        } else {
            None
        }
    }

    /// Get the row (0-7, where 0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.0
    }

    /// Get the column (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.1
    }

    /// True when both coordinates lie on the board
    #[inline]
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 < 8 && self.1 < 8
    }

    /// Get the square's index (0-63, a1=0, b1=1, ..., h8=63)
    #[inline]
    #[must_use]
    pub const fn as_index(self) -> usize {
        self.0 * 8 + self.1
    }

    /// Create a square from an index (0-63)
    #[must_use]
    pub const fn from_index(idx: usize) -> Self {
        Square(idx / 8, idx % 8)
    }

    /// The square displaced by (`d_row`, `d_col`), if it is still on the board
    #[inline]
    #[must_use]
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Square> {
        let row = self.0 as isize + d_row;
        let col = self.1 as isize + d_col;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square(row as usize, col as usize))
        } else {
            None
        }
    }

    /// Signed (row, col) displacement from `self` to `to`
    #[inline]
    #[must_use]
    pub(crate) fn delta(self, to: Square) -> (isize, isize) {
        (
            to.0 as isize - self.0 as isize,
            to.1 as isize - self.1 as isize,
        )
    }

    /// Every square on the board in index order
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "{}{}", (self.1 as u8 + b'a') as char, self.0 + 1)
        } else {
            write!(f, "({}, {})", self.0, self.1)
        }
    }
}

impl PartialOrd for Square {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Square {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.0, self.1).cmp(&(other.0, other.1))
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        if row >= 8 {
            return Err(SquareError::RowOutOfBounds { row });
        }
        if col >= 8 {
            return Err(SquareError::ColumnOutOfBounds { col });
        }
        Ok(Square(row, col))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(SquareError::InvalidNotation {
                notation: s.to_string(),
            });
        }

        match (bytes[0], bytes[1]) {
            (file @ b'a'..=b'h', rank @ b'1'..=b'8') => {
                Ok(Square((rank - b'1') as usize, (file - b'a') as usize))
            }
            _ => Err(SquareError::InvalidNotation {
                notation: s.to_string(),
            }),
        }
    }
}
