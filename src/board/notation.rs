//! Coordinate move notation (`e2e4`, `e7e8q`).

use super::error::MoveParseError;
use super::{Move, Piece, Position, Square};

/// Split a coordinate move into start, end and optional promotion piece.
///
/// Only the syntax is checked here; legality is the position's business.
///
/// # Example
/// ```
/// use chess_rules::board::{parse_coordinate_move, Piece, Square};
///
/// let (from, to, promo) = parse_coordinate_move("e7e8q").unwrap();
/// assert_eq!(from, Square(6, 4));
/// assert_eq!(to, Square(7, 4));
/// assert_eq!(promo, Some(Piece::Queen));
/// ```
pub fn parse_coordinate_move(
    notation: &str,
) -> Result<(Square, Square, Option<Piece>), MoveParseError> {
    let len = notation.chars().count();
    if !(4..=5).contains(&len) || !notation.is_ascii() {
        return Err(MoveParseError::InvalidLength { len });
    }

    let invalid_square = || MoveParseError::InvalidSquare {
        notation: notation.to_string(),
    };
    let from: Square = notation[0..2].parse().map_err(|_| invalid_square())?;
    let to: Square = notation[2..4].parse().map_err(|_| invalid_square())?;

    let promotion = match notation[4..].chars().next() {
        None => None,
        Some(c) => match Piece::from_char(c) {
            Some(piece) if piece.is_promotion_target() => Some(piece),
            _ => return Err(MoveParseError::InvalidPromotion { char: c }),
        },
    };

    Ok((from, to, promotion))
}

impl Position {
    /// Parse a coordinate move and play it in place.
    ///
    /// # Example
    /// ```
    /// use chess_rules::board::Position;
    ///
    /// let mut position = Position::new();
    /// let mv = position.play("e2e4").unwrap();
    /// assert!(mv.is_double_pawn_push());
    /// assert!(position.play("e2e4").is_err());
    /// ```
    pub fn play(&mut self, notation: &str) -> Result<Move, MoveParseError> {
        let (from, to, promotion) = parse_coordinate_move(notation)?;
        self.make_move(from, to, promotion)
            .map_err(|reason| MoveParseError::Rejected {
                notation: notation.to_string(),
                reason,
            })
    }

    /// Play a whitespace-separated list of coordinate moves, stopping at the
    /// first one that fails. Moves before the failure stay applied.
    pub fn play_line(&mut self, line: &str) -> Result<usize, MoveParseError> {
        let mut played = 0;
        for notation in line.split_whitespace() {
            self.play(notation)?;
            played += 1;
        }
        Ok(played)
    }
}
