//! Mailbox grid: the 8x8 cell array shared by the position and its scratch copies.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Color, Piece};
use super::square::Square;

/// Contents of one square; `None` is an empty square.
pub type Cell = Option<(Color, Piece)>;

/// The piece layout of a position, indexed `[row][col]`.
///
/// `Grid` is `Copy`: a hypothetical move is tried on a copy of the grid and
/// the copy is simply dropped afterwards.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Grid([[Cell; 8]; 8]);

impl Grid {
    /// A grid with no pieces on it
    #[must_use]
    pub const fn empty() -> Self {
        Grid([[None; 8]; 8])
    }

    /// The standard initial layout
    #[must_use]
    pub fn starting() -> Self {
        const BACK_RANK: [Piece; 8] = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];

        let mut grid = Grid::empty();
        for (col, piece) in BACK_RANK.iter().enumerate() {
            grid.set(Square(0, col), Some((Color::White, *piece)));
            grid.set(Square(1, col), Some((Color::White, Piece::Pawn)));
            grid.set(Square(6, col), Some((Color::Black, Piece::Pawn)));
            grid.set(Square(7, col), Some((Color::Black, *piece)));
        }
        grid
    }

    /// Contents of `sq`; off-board squares read as empty
    #[inline]
    #[must_use]
    pub fn get(&self, sq: Square) -> Cell {
        self.0.get(sq.0).and_then(|row| row.get(sq.1)).copied().flatten()
    }

    /// Overwrite `sq`; writes to off-board squares are ignored
    #[inline]
    pub(crate) fn set(&mut self, sq: Square, cell: Cell) {
        if let Some(slot) = self.0.get_mut(sq.0).and_then(|row| row.get_mut(sq.1)) {
            *slot = cell;
        }
    }

    /// Remove and return whatever stands on `sq`
    #[inline]
    pub(crate) fn take(&mut self, sq: Square) -> Cell {
        let cell = self.get(sq);
        self.set(sq, None);
        cell
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.get(sq).is_none()
    }

    /// Color of the piece on `sq`, if any
    #[inline]
    #[must_use]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.get(sq).map(|(color, _)| color)
    }

    /// All rows, row 0 (White's home rank) first
    #[must_use]
    pub fn rows(&self) -> &[[Cell; 8]; 8] {
        &self.0
    }

    /// Every occupied square with its occupant, in index order
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Color, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.get(sq).map(|(color, piece)| (sq, color, piece)))
    }

    /// Squares holding pieces of `color`, in index order
    pub fn squares_of(&self, color: Color) -> impl Iterator<Item = Square> + '_ {
        self.pieces()
            .filter(move |(_, c, _)| *c == color)
            .map(|(sq, _, _)| sq)
    }

    /// Location of `color`'s king.
    ///
    /// A well-formed position has exactly one; `None` only shows up in
    /// hand-built test positions.
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|&(_, c, p)| c == color && p == Piece::King)
            .map(|(sq, _, _)| sq)
    }

    /// True if every square strictly between `from` and `to` is empty.
    ///
    /// The squares must share a row, a column or a diagonal.
    #[must_use]
    pub(crate) fn path_clear(&self, from: Square, to: Square) -> bool {
        let (d_row, d_col) = from.delta(to);
        debug_assert!(d_row == 0 || d_col == 0 || d_row.abs() == d_col.abs());
        let step = (d_row.signum(), d_col.signum());

        let mut current = from;
        loop {
            current = match current.offset(step.0, step.1) {
                Some(next) => next,
                None => return false,
            };
            if current == to {
                return true;
            }
            if !self.is_empty(current) {
                return false;
            }
        }
    }
}
