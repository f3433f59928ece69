//! Move validation.
//!
//! `validate` turns a proposed `(start, end, promotion)` into a classified
//! `Move` or a `Rejection`. Checks run in a fixed order and stop at the first
//! failure: source piece and turn, bounds, friendly destination, the piece's
//! movement shape, promotion choice, and finally king safety.

use super::attacks::{KING_OFFSETS, KNIGHT_OFFSETS};
use super::{Color, Move, MoveKind, Piece, Position, Rejection, Square};

impl Position {
    /// Validate a move for the side to move without changing the position.
    pub fn validate(
        &self,
        start: Square,
        end: Square,
        promotion: Option<Piece>,
    ) -> Result<Move, Rejection> {
        self.validate_for(self.side_to_move, start, end, promotion)
    }

    /// Validate a move as if `side` were to move.
    ///
    /// En passant stays tied to the last move actually played, so it is only
    /// ever available to the side that is really on move.
    pub(crate) fn validate_for(
        &self,
        side: Color,
        start: Square,
        end: Square,
        promotion: Option<Piece>,
    ) -> Result<Move, Rejection> {
        if !start.is_valid() {
            return Err(Rejection::OutOfBounds);
        }
        let (color, piece) = self.grid.get(start).ok_or(Rejection::NoPieceAtSource)?;
        if color != side {
            return Err(Rejection::NotSideToMove);
        }
        if !end.is_valid() {
            return Err(Rejection::OutOfBounds);
        }
        if self.grid.color_on(end) == Some(color) {
            return Err(Rejection::DestinationOccupiedBySelf);
        }

        let mv = match piece {
            Piece::Pawn => self.classify_pawn(start, end, color)?,
            Piece::Knight => {
                if !KNIGHT_OFFSETS.contains(&start.delta(end)) {
                    return Err(Rejection::IllegalShapeForPiece);
                }
                self.plain_move(start, end, (color, piece))
            }
            Piece::Bishop => self.classify_line(start, end, (color, piece), false, true)?,
            Piece::Rook => self.classify_line(start, end, (color, piece), true, false)?,
            Piece::Queen => self.classify_line(start, end, (color, piece), true, true)?,
            Piece::King => self.classify_king(start, end, color)?,
        };
        let mv = attach_promotion(mv, promotion)?;

        if self.leaves_king_in_check(mv) {
            return Err(Rejection::MoveLeavesKingInCheck);
        }
        Ok(mv)
    }

    /// Quiet move or ordinary capture, depending on what stands on `end`
    fn plain_move(&self, start: Square, end: Square, mover: (Color, Piece)) -> Move {
        match self.grid.get(end) {
            Some((_, victim)) => Move::new(start, end, mover, MoveKind::Capture).with_capture(victim),
            None => Move::new(start, end, mover, MoveKind::Quiet),
        }
    }

    fn classify_line(
        &self,
        start: Square,
        end: Square,
        mover: (Color, Piece),
        straight_ok: bool,
        diagonal_ok: bool,
    ) -> Result<Move, Rejection> {
        let (d_row, d_col) = start.delta(end);
        let straight = (d_row == 0) != (d_col == 0);
        let diagonal = d_row != 0 && d_row.abs() == d_col.abs();

        if !((straight_ok && straight) || (diagonal_ok && diagonal)) {
            return Err(Rejection::IllegalShapeForPiece);
        }
        if !self.grid.path_clear(start, end) {
            return Err(Rejection::PathBlocked);
        }
        Ok(self.plain_move(start, end, mover))
    }

    fn classify_king(&self, start: Square, end: Square, color: Color) -> Result<Move, Rejection> {
        let (d_row, d_col) = start.delta(end);
        if KING_OFFSETS.contains(&(d_row, d_col)) {
            return Ok(self.plain_move(start, end, (color, Piece::King)));
        }
        if d_row == 0 && d_col.abs() == 2 {
            return self.classify_castle(start, end, color);
        }
        Err(Rejection::IllegalShapeForPiece)
    }

    /// King steps two columns along its home rank toward column 2 or 6.
    fn classify_castle(&self, start: Square, end: Square, color: Color) -> Result<Move, Rejection> {
        let home = color.back_rank();
        if start != Square(home, 4) {
            return Err(Rejection::IllegalShapeForPiece);
        }

        let kingside = end.1 == 6;
        let rook_square = Square(home, if kingside { 7 } else { 0 });
        if !self.castling_rights.has(color, kingside)
            || self.grid.get(rook_square) != Some((color, Piece::Rook))
        {
            return Err(Rejection::CastlingRightForfeited);
        }
        // Covers the landing square as well, which always lies between king and rook.
        if !self.grid.path_clear(start, rook_square) {
            return Err(Rejection::PathBlocked);
        }

        let passed = Square(home, if kingside { 5 } else { 3 });
        let opponent = color.opponent();
        if [start, passed, end]
            .iter()
            .any(|&sq| self.grid.is_attacked(sq, opponent))
        {
            return Err(Rejection::CastlingPathAttacked);
        }

        let kind = if kingside {
            MoveKind::CastleKingside
        } else {
            MoveKind::CastleQueenside
        };
        Ok(Move::new(start, end, (color, Piece::King), kind))
    }

    fn classify_pawn(&self, start: Square, end: Square, color: Color) -> Result<Move, Rejection> {
        let mover = (color, Piece::Pawn);
        let (d_row, d_col) = start.delta(end);
        let forward = d_row * color.pawn_direction();

        match (forward, d_col.abs()) {
            (1, 0) => {
                if !self.grid.is_empty(end) {
                    return Err(Rejection::PathBlocked);
                }
                Ok(Move::new(start, end, mover, MoveKind::Quiet))
            }
            (2, 0) => {
                if start.0 != color.pawn_start_rank() {
                    return Err(Rejection::IllegalShapeForPiece);
                }
                let skipped = Square((start.0 + end.0) / 2, start.1);
                if !self.grid.is_empty(skipped) || !self.grid.is_empty(end) {
                    return Err(Rejection::PathBlocked);
                }
                Ok(Move::new(start, end, mover, MoveKind::DoublePawnPush))
            }
            (1, 1) => match self.grid.get(end) {
                Some((_, victim)) => {
                    Ok(Move::new(start, end, mover, MoveKind::Capture).with_capture(victim))
                }
                None if self.en_passant_available(start, end, color) => {
                    Ok(Move::new(start, end, mover, MoveKind::EnPassant).with_capture(Piece::Pawn))
                }
                None => Err(Rejection::NoEnPassantAvailable),
            },
            _ => Err(Rejection::IllegalShapeForPiece),
        }
    }

    /// `end` is the recorded target and the last move was an enemy double
    /// push that landed beside `start`.
    fn en_passant_available(&self, start: Square, end: Square, color: Color) -> bool {
        let enemy = color.opponent();
        let beside = Square(start.0, end.1);

        self.en_passant_target == Some(end)
            && self.last_move.is_some_and(|last| {
                last.is_double_pawn_push()
                    && last.color() == enemy
                    && last.to() == beside
                    && last.skipped_square() == Some(end)
            })
            && self.grid.get(beside) == Some((enemy, Piece::Pawn))
    }

    /// Play `mv` on a scratch copy of the grid and look at the mover's king.
    fn leaves_king_in_check(&self, mv: Move) -> bool {
        let mut scratch = self.grid;
        scratch.place(mv);
        scratch
            .king_square(mv.color())
            .is_some_and(|king| scratch.is_attacked(king, mv.color().opponent()))
    }
}

/// A pawn reaching the far rank must become a queen, rook, bishop or knight
/// (queen when unspecified); every other move must not name a promotion.
fn attach_promotion(mv: Move, promotion: Option<Piece>) -> Result<Move, Rejection> {
    let promotes = mv.piece() == Piece::Pawn && mv.to().0 == mv.color().pawn_promotion_rank();
    match (promotes, promotion) {
        (true, None) => Ok(mv.with_promotion(Piece::Queen)),
        (true, Some(piece)) if piece.is_promotion_target() => Ok(mv.with_promotion(piece)),
        (false, None) => Ok(mv),
        _ => Err(Rejection::InvalidPromotion),
    }
}
