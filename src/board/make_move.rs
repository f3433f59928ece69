use log::{debug, trace};

use super::{Color, Grid, Move, MoveKind, Piece, Position, Rejection, Square};

/// Rook (from, to) columns for a castle of the given wing
const fn castle_rook_columns(kingside: bool) -> (usize, usize) {
    if kingside {
        (7, 5)
    } else {
        (0, 3)
    }
}

/// The wing whose castling right depends on a rook standing on `sq`
fn corner_wing(color: Color, sq: Square) -> Option<bool> {
    let home = color.back_rank();
    if sq == Square(home, 7) {
        Some(true)
    } else if sq == Square(home, 0) {
        Some(false)
    } else {
        None
    }
}

impl Grid {
    /// Relocate the pieces a move touches: the mover (or its promotion), the
    /// castling rook and an en passant victim.
    pub(crate) fn place(&mut self, mv: Move) {
        let moving = self.take(mv.from());
        let placed = match mv.promotion() {
            Some(promoted) => Some((mv.color(), promoted)),
            None => moving,
        };

        match mv.kind() {
            MoveKind::EnPassant => {
                // The captured pawn sits beside the start square, behind `to`.
                self.set(Square(mv.from().0, mv.to().1), None);
            }
            MoveKind::CastleKingside | MoveKind::CastleQueenside => {
                let row = mv.from().0;
                let (rook_from, rook_to) = castle_rook_columns(mv.is_castle_kingside());
                let rook = self.take(Square(row, rook_from));
                self.set(Square(row, rook_to), rook);
            }
            MoveKind::Quiet | MoveKind::DoublePawnPush | MoveKind::Capture => {}
        }

        self.set(mv.to(), placed);
    }
}

impl Position {
    /// Apply a move produced by `validate` or `legal_moves` on this position.
    ///
    /// Never fails. Applying a move validated against a different position
    /// is a caller bug and leaves the position inconsistent.
    pub fn apply(&mut self, mv: Move) {
        let color = mv.color();
        debug_assert_eq!(color, self.side_to_move, "move applied out of turn");

        self.grid.place(mv);

        if mv.piece() == Piece::King {
            self.castling_rights.remove_color(color);
        } else if mv.piece() == Piece::Rook {
            if let Some(kingside) = corner_wing(color, mv.from()) {
                self.castling_rights.remove(color, kingside);
            }
        }
        if mv.captured() == Some(Piece::Rook) {
            if let Some(kingside) = corner_wing(color.opponent(), mv.to()) {
                self.castling_rights.remove(color.opponent(), kingside);
            }
        }

        self.en_passant_target = mv.skipped_square();

        if mv.piece() == Piece::Pawn || mv.is_capture() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }
        if color == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }

        self.last_move = Some(mv);
        self.side_to_move = color.opponent();
        let seen = self.record_current();

        trace!(
            "applied {mv} for {color}; halfmove clock {}, position seen {seen} time(s)",
            self.halfmove_clock
        );
    }

    /// Validate and apply in place. On rejection the position is untouched.
    pub fn make_move(
        &mut self,
        start: Square,
        end: Square,
        promotion: Option<Piece>,
    ) -> Result<Move, Rejection> {
        let mv = self.validate_logged(start, end, promotion)?;
        self.apply(mv);
        Ok(mv)
    }

    /// `validate`, reporting rejections through the log.
    pub(crate) fn validate_logged(
        &self,
        start: Square,
        end: Square,
        promotion: Option<Piece>,
    ) -> Result<Move, Rejection> {
        self.validate(start, end, promotion).map_err(|reason| {
            debug!("rejected {start}{end} for {}: {reason}", self.side_to_move);
            reason
        })
    }
}
