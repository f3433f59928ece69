//! Terminal-state and draw queries.
//!
//! Nothing here is cached on the position: every answer is recomputed from
//! the grid, the clocks and the repetition history.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, Piece, Position};

/// Plies without a pawn move or capture after which a draw may be claimed
pub const FIFTY_MOVE_PLIES: u32 = 100;

/// Occurrences of one canonical position after which a draw may be claimed
pub const REPETITION_LIMIT: u32 = 3;

/// Classification of a position from the side to move's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Status {
    Normal,
    Check,
    Checkmate,
    Stalemate,
    DrawByFiftyMove,
    DrawByRepetition,
}

impl Status {
    /// True for checkmate and stalemate, where no move can be played
    #[must_use]
    pub const fn is_game_over(self) -> bool {
        matches!(self, Status::Checkmate | Status::Stalemate)
    }

    /// True for stalemate and the claimable draws
    #[must_use]
    pub const fn is_draw(self) -> bool {
        matches!(
            self,
            Status::Stalemate | Status::DrawByFiftyMove | Status::DrawByRepetition
        )
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Status::Normal => "normal",
            Status::Check => "check",
            Status::Checkmate => "checkmate",
            Status::Stalemate => "stalemate",
            Status::DrawByFiftyMove => "draw by fifty-move rule",
            Status::DrawByRepetition => "draw by threefold repetition",
        };
        f.write_str(label)
    }
}

impl Position {
    /// `side` is in check and has no legal move.
    #[must_use]
    pub fn is_checkmate(&self, side: Color) -> bool {
        self.in_check(side) && !self.has_legal_move(side)
    }

    /// `side` is not in check and has no legal move.
    #[must_use]
    pub fn is_stalemate(&self, side: Color) -> bool {
        !self.in_check(side) && !self.has_legal_move(side)
    }

    /// 100 plies have passed without a pawn move or capture.
    #[must_use]
    pub fn is_fifty_move_draw(&self) -> bool {
        self.halfmove_clock >= FIFTY_MOVE_PLIES
    }

    /// Some canonical position has occurred three times in this game.
    #[must_use]
    pub fn is_threefold_repetition(&self) -> bool {
        self.repetition_counts.highest() >= REPETITION_LIMIT
    }

    /// Neither side has mating material: bare kings, a single minor piece,
    /// or only bishops that all stand on one square color.
    #[must_use]
    pub fn is_insufficient_material(&self) -> bool {
        let mut knights = 0;
        let mut bishop_square_colors = [false; 2];
        let mut bishops = 0;

        for (sq, _, piece) in self.grid.pieces() {
            match piece {
                Piece::King => {}
                Piece::Pawn | Piece::Rook | Piece::Queen => return false,
                Piece::Knight => knights += 1,
                Piece::Bishop => {
                    bishops += 1;
                    bishop_square_colors[(sq.0 + sq.1) % 2] = true;
                }
            }
        }

        match (knights, bishops) {
            (0, 0) | (1, 0) | (0, 1) => true,
            (0, _) => !(bishop_square_colors[0] && bishop_square_colors[1]),
            _ => false,
        }
    }

    /// Any draw condition holds: fifty-move, threefold, insufficient material
    #[must_use]
    pub fn is_draw(&self) -> bool {
        self.is_fifty_move_draw() || self.is_threefold_repetition() || self.is_insufficient_material()
    }

    /// Classify the position for the side to move.
    ///
    /// Mate and stalemate take precedence over the claimable draws, and the
    /// draws over a plain check.
    #[must_use]
    pub fn status(&self) -> Status {
        let side = self.side_to_move;
        let in_check = self.in_check(side);

        if !self.has_legal_move(side) {
            return if in_check {
                Status::Checkmate
            } else {
                Status::Stalemate
            };
        }
        if self.is_fifty_move_draw() {
            Status::DrawByFiftyMove
        } else if self.is_threefold_repetition() {
            Status::DrawByRepetition
        } else if in_check {
            Status::Check
        } else {
            Status::Normal
        }
    }
}
