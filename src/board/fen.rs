use super::error::FenError;
use super::{Color, Move, MoveKind, Piece, Position, Square};

impl Position {
    /// Parse a position from FEN notation.
    ///
    /// The halfmove clock and fullmove number are optional and default to 0
    /// and 1. An en-passant field is accepted only when a pawn of the side
    /// that just moved stands where the double push would have put it; that
    /// push is recorded as the last move, so the capture is available for
    /// exactly one ply as it would be in play.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let mut position = Position::empty();
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        // Piece placement, rank 8 first
        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidRank { rank: ranks.len() });
        }
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let row = 7 - rank_idx;
            let mut file = 0;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as usize;
                } else {
                    let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                    let color = if c.is_ascii_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    if file >= 8 {
                        return Err(FenError::TooManyFiles {
                            rank: rank_idx,
                            files: file + 1,
                        });
                    }
                    position.grid.set(Square(row, file), Some((color, piece)));
                    file += 1;
                }
            }
            if file != 8 {
                return Err(FenError::TooManyFiles {
                    rank: rank_idx,
                    files: file,
                });
            }
        }

        position.side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        for c in parts[2].chars() {
            match c {
                'K' => position.castling_rights.insert(Color::White, true),
                'Q' => position.castling_rights.insert(Color::White, false),
                'k' => position.castling_rights.insert(Color::Black, true),
                'q' => position.castling_rights.insert(Color::Black, false),
                '-' => {}
                _ => return Err(FenError::InvalidCastling { char: c }),
            }
        }

        if parts[3] != "-" {
            let target: Square = parts[3].parse().map_err(|_| FenError::InvalidEnPassant {
                found: parts[3].to_string(),
            })?;
            let push = position
                .implied_double_push(target)
                .ok_or_else(|| FenError::InvalidEnPassant {
                    found: parts[3].to_string(),
                })?;
            position.en_passant_target = Some(target);
            position.last_move = Some(push);
        }

        if let Some(field) = parts.get(4) {
            position.halfmove_clock = parse_counter(field)?;
        }
        if let Some(field) = parts.get(5) {
            position.fullmove_number = parse_counter(field)?;
        }

        position.record_current();
        Ok(position)
    }

    /// Parse a position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// The double push that would leave `target` as the en-passant square,
    /// if the board agrees it happened.
    fn implied_double_push(&self, target: Square) -> Option<Move> {
        let pusher = self.side_to_move.opponent();
        let dir = pusher.pawn_direction();
        let from = Square(pusher.pawn_start_rank(), target.1);
        let to = from.offset(2 * dir, 0)?;

        let consistent = from.offset(dir, 0) == Some(target)
            && self.grid.get(to) == Some((pusher, Piece::Pawn))
            && self.grid.is_empty(target)
            && self.grid.is_empty(from);
        consistent.then(|| Move::new(from, to, (pusher, Piece::Pawn), MoveKind::DoublePawnPush))
    }

    /// Convert the position to FEN notation.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::new();
        for row in (0..8).rev() {
            let mut rank = String::new();
            let mut empty = 0;
            for col in 0..8 {
                if let Some((color, piece)) = self.grid.get(Square(row, col)) {
                    if empty > 0 {
                        rank.push_str(&empty.to_string());
                        empty = 0;
                    }
                    rank.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                rank.push_str(&empty.to_string());
            }
            rows.push(rank);
        }

        let active = match self.side_to_move {
            Color::White => "w",
            Color::Black => "b",
        };
        let ep = self
            .en_passant_target
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            active,
            self.castling_rights,
            ep,
            self.halfmove_clock,
            self.fullmove_number
        )
    }
}

fn parse_counter(field: &str) -> Result<u32, FenError> {
    field.parse().map_err(|_| FenError::InvalidCounter {
        found: field.to_string(),
    })
}
