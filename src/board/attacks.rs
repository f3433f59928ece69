//! Attack detection: which squares a side currently threatens.
//!
//! This is a threat query, not a legality query. Pieces attack along their
//! full movement pattern regardless of whose turn it is or whether moving
//! would expose their own king.

use super::{Color, Grid, Piece, Position, Square};

pub(crate) const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

pub(crate) const KING_OFFSETS: [(isize, isize); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

impl Grid {
    /// True if any piece of color `by` attacks `target`.
    #[must_use]
    pub fn is_attacked(&self, target: Square, by: Color) -> bool {
        if !target.is_valid() {
            return false;
        }
        self.pieces()
            .filter(|&(from, color, _)| color == by && from != target)
            .any(|(from, color, piece)| self.piece_attacks(from, color, piece, target))
    }

    /// Whether a `color` `piece` standing on `from` attacks `target`
    fn piece_attacks(&self, from: Square, color: Color, piece: Piece, target: Square) -> bool {
        let (d_row, d_col) = from.delta(target);
        let straight = d_row == 0 || d_col == 0;
        let diagonal = d_row.abs() == d_col.abs();

        match piece {
            // Pawns only ever attack diagonally forward, never straight ahead.
            Piece::Pawn => d_row == color.pawn_direction() && d_col.abs() == 1,
            Piece::Knight => KNIGHT_OFFSETS.contains(&(d_row, d_col)),
            Piece::King => KING_OFFSETS.contains(&(d_row, d_col)),
            Piece::Bishop => diagonal && self.path_clear(from, target),
            Piece::Rook => straight && self.path_clear(from, target),
            Piece::Queen => (straight || diagonal) && self.path_clear(from, target),
        }
    }
}

impl Position {
    /// True if any piece of color `by` attacks `square`.
    #[must_use]
    pub fn is_attacked(&self, square: Square, by: Color) -> bool {
        self.grid.is_attacked(square, by)
    }

    /// True if `side`'s king is attacked by the other side.
    #[must_use]
    pub fn in_check(&self, side: Color) -> bool {
        self.king_square(side)
            .is_some_and(|king| self.is_attacked(king, side.opponent()))
    }
}
