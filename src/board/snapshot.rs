//! Read-only board state for display or transmission.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{CastlingRights, Color, Grid, Move, Position, Square, Status};

/// Everything a transport layer needs to render or send a position.
///
/// Detached from the position it was taken from; later moves do not change it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Snapshot {
    pub grid: Grid,
    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub en_passant_target: Option<Square>,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
    pub last_move: Option<Move>,
    pub status: Status,
    pub fen: String,
}

impl Position {
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            grid: self.grid,
            side_to_move: self.side_to_move,
            castling_rights: self.castling_rights,
            en_passant_target: self.en_passant_target,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
            last_move: self.last_move,
            status: self.status(),
            fen: self.to_fen(),
        }
    }
}

/// Text diagram, rank 8 at the top, White in uppercase.
impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  +-----------------+")?;
        for row in (0..8).rev() {
            write!(f, "{} |", row + 1)?;
            for col in 0..8 {
                let c = self
                    .grid
                    .get(Square(row, col))
                    .map_or('.', |(color, piece)| piece.to_fen_char(color));
                write!(f, " {c}")?;
            }
            writeln!(f, " |")?;
        }
        writeln!(f, "  +-----------------+")?;
        writeln!(f, "    a b c d e f g h")?;
        write!(
            f,
            "{} to move, castling {}, {}",
            self.side_to_move, self.castling_rights, self.status
        )
    }
}
