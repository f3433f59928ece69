//! Move types and move list.

use std::fmt;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Color, Piece};
use super::square::Square;

/// How a validated move interacts with the board beyond relocating a piece.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveKind {
    Quiet,
    DoublePawnPush,
    Capture,
    EnPassant,
    CastleKingside,
    CastleQueenside,
}

/// A fully classified legal move.
///
/// Moves are only produced by validation, so the classification flags always
/// agree with the position they were validated against. Callers never build
/// one by hand; they propose `(start, end, promotion)` instead.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    from: Square,
    to: Square,
    color: Color,
    piece: Piece,
    promotion: Option<Piece>,
    captured: Option<Piece>,
    kind: MoveKind,
}

impl Move {
    #[inline]
    #[must_use]
    pub(crate) const fn new(
        from: Square,
        to: Square,
        (color, piece): (Color, Piece),
        kind: MoveKind,
    ) -> Self {
        Move {
            from,
            to,
            color,
            piece,
            promotion: None,
            captured: None,
            kind,
        }
    }

    #[inline]
    #[must_use]
    pub(crate) const fn with_capture(mut self, captured: Piece) -> Self {
        self.captured = Some(captured);
        self
    }

    #[inline]
    #[must_use]
    pub(crate) const fn with_promotion(mut self, promotion: Piece) -> Self {
        self.promotion = Some(promotion);
        self
    }

    /// Get the source square
    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Get the destination square
    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        self.to
    }

    /// Color of the moving side
    #[inline]
    #[must_use]
    pub const fn color(self) -> Color {
        self.color
    }

    /// The piece that moved (a pawn for promotions)
    #[inline]
    #[must_use]
    pub const fn piece(self) -> Piece {
        self.piece
    }

    /// Piece removed from the board by this move, if any
    #[inline]
    #[must_use]
    pub const fn captured(self) -> Option<Piece> {
        self.captured
    }

    #[inline]
    #[must_use]
    pub const fn kind(self) -> MoveKind {
        self.kind
    }

    /// Returns true if this move captures a piece (including en passant)
    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        self.captured.is_some()
    }

    /// Returns true if this move is en passant
    #[inline]
    #[must_use]
    pub const fn is_en_passant(self) -> bool {
        matches!(self.kind, MoveKind::EnPassant)
    }

    /// Returns true if this move is castling (kingside or queenside)
    #[inline]
    #[must_use]
    pub const fn is_castling(self) -> bool {
        matches!(
            self.kind,
            MoveKind::CastleKingside | MoveKind::CastleQueenside
        )
    }

    /// Returns true if this is kingside castling (O-O)
    #[inline]
    #[must_use]
    pub const fn is_castle_kingside(self) -> bool {
        matches!(self.kind, MoveKind::CastleKingside)
    }

    /// Returns true if this is queenside castling (O-O-O)
    #[inline]
    #[must_use]
    pub const fn is_castle_queenside(self) -> bool {
        matches!(self.kind, MoveKind::CastleQueenside)
    }

    /// Returns true if this move is a double pawn push
    #[inline]
    #[must_use]
    pub const fn is_double_pawn_push(self) -> bool {
        matches!(self.kind, MoveKind::DoublePawnPush)
    }

    /// Returns true if this move is a pawn promotion
    #[inline]
    #[must_use]
    pub const fn is_promotion(self) -> bool {
        self.promotion.is_some()
    }

    /// Get the promotion piece, if this is a promotion move
    #[inline]
    #[must_use]
    pub const fn promotion(self) -> Option<Piece> {
        self.promotion
    }

    /// The square skipped by a double pawn push
    #[inline]
    #[must_use]
    pub(crate) fn skipped_square(self) -> Option<Square> {
        if self.is_double_pawn_push() {
            Some(Square((self.from.0 + self.to.0) / 2, self.from.1))
        } else {
            None
        }
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Move({} {}{}",
            self.piece.to_fen_char(self.color),
            self.from,
            self.to
        )?;
        if let Some(promo) = self.promotion {
            write!(f, "={}", promo.to_char().to_ascii_uppercase())?;
        }
        if let Some(captured) = self.captured {
            write!(f, " x{}", captured.to_char())?;
        }
        match self.kind {
            MoveKind::CastleKingside => write!(f, " O-O")?,
            MoveKind::CastleQueenside => write!(f, " O-O-O")?,
            MoveKind::EnPassant => write!(f, " ep")?,
            _ => {}
        }
        write!(f, ")")
    }
}

/// Coordinate notation, e.g. `e2e4` or `e7e8q`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}

pub(crate) const MAX_MOVES: usize = 256;
pub(crate) const EMPTY_MOVE: Move = Move::new(
    Square(0, 0),
    Square(0, 0),
    (Color::White, Piece::Pawn),
    MoveKind::Quiet,
);

/// List of moves with fixed-size backing array.
#[derive(Clone, Debug)]
pub struct MoveList {
    moves: [Move; MAX_MOVES],
    len: usize,
}

impl MoveList {
    pub(crate) fn new() -> Self {
        MoveList {
            moves: [EMPTY_MOVE; MAX_MOVES],
            len: 0,
        }
    }

    pub(crate) fn push(&mut self, mv: Move) {
        self.moves[self.len] = mv;
        self.len += 1;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<Move> {
        self.as_slice().get(idx).copied()
    }

    /// True if some move in the list goes from `from` to `to`
    #[must_use]
    pub fn contains_squares(&self, from: Square, to: Square) -> bool {
        self.iter().any(|m| m.from() == from && m.to() == to)
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl Default for MoveList {
    fn default() -> Self {
        MoveList::new()
    }
}

/// Owning iterator over moves in a `MoveList`
pub struct MoveListIntoIter {
    list: MoveList,
    idx: usize,
}

impl Iterator for MoveListIntoIter {
    type Item = Move;

    fn next(&mut self) -> Option<Self::Item> {
        let mv = self.list.get(self.idx)?;
        self.idx += 1;
        Some(mv)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.len - self.idx;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MoveListIntoIter {}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = MoveListIntoIter;

    fn into_iter(self) -> Self::IntoIter {
        MoveListIntoIter { list: self, idx: 0 }
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.as_slice()[idx]
    }
}
