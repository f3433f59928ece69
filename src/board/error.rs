//! Error types for rules-engine operations.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Why a proposed move was refused.
///
/// A rejection is an ordinary outcome, not a fault: the position the move was
/// proposed against is left exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Rejection {
    /// The start square is empty
    NoPieceAtSource,
    /// The piece on the start square belongs to the side not on move
    NotSideToMove,
    /// A square lies outside the 8x8 board
    OutOfBounds,
    /// The destination holds a piece of the mover's own color
    DestinationOccupiedBySelf,
    /// The piece cannot move along this displacement
    IllegalShapeForPiece,
    /// A piece stands on the path between start and destination
    PathBlocked,
    /// The castling right for this wing has been lost
    CastlingRightForfeited,
    /// The king would castle out of, through, or into an attacked square
    CastlingPathAttacked,
    /// The move would leave the mover's own king attacked
    MoveLeavesKingInCheck,
    /// A diagonal pawn move onto an empty square without a live en passant
    NoEnPassantAvailable,
    /// The promotion piece is missing from a promoting move's options, or
    /// given for a move that does not promote
    InvalidPromotion,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Rejection::NoPieceAtSource => "no piece on the start square",
            Rejection::NotSideToMove => "piece does not belong to the side to move",
            Rejection::OutOfBounds => "square is off the board",
            Rejection::DestinationOccupiedBySelf => "destination holds a friendly piece",
            Rejection::IllegalShapeForPiece => "piece cannot move that way",
            Rejection::PathBlocked => "path is blocked",
            Rejection::CastlingRightForfeited => "castling right has been forfeited",
            Rejection::CastlingPathAttacked => "king would castle out of, through or into check",
            Rejection::MoveLeavesKingInCheck => "move leaves the king in check",
            Rejection::NoEnPassantAvailable => "no en passant capture is available",
            Rejection::InvalidPromotion => "invalid promotion",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for Rejection {}

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string has too few parts (needs at least 4)
    TooFewParts { found: usize },
    /// Invalid piece character in position string
    InvalidPiece { char: char },
    /// Invalid castling character
    InvalidCastling { char: char },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Invalid en passant square, or no pawn that could have made it
    InvalidEnPassant { found: String },
    /// Wrong number of ranks in position string
    InvalidRank { rank: usize },
    /// Too many or too few files in a rank
    TooManyFiles { rank: usize, files: usize },
    /// Halfmove clock or fullmove number is not a number
    InvalidCounter { found: String },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::TooFewParts { found } => {
                write!(f, "FEN must have at least 4 parts, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::InvalidCastling { char } => {
                write!(f, "Invalid castling character '{char}' in FEN")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "Invalid en passant square '{found}'")
            }
            FenError::InvalidRank { rank } => {
                write!(f, "Invalid rank index {rank} in FEN")
            }
            FenError::TooManyFiles { rank, files } => {
                write!(f, "Wrong number of files ({files}) in rank {rank}")
            }
            FenError::InvalidCounter { found } => {
                write!(f, "Invalid move counter '{found}' in FEN")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for coordinate move parsing and playing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string has invalid length (must be 4-5 characters)
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
    /// Invalid promotion piece
    InvalidPromotion { char: char },
    /// The move parsed but the position refused it
    Rejected { notation: String, reason: Rejection },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must be 4-5 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
            MoveParseError::InvalidPromotion { char } => {
                write!(f, "Invalid promotion piece '{char}'")
            }
            MoveParseError::Rejected { notation, reason } => {
                write!(f, "Illegal move '{notation}': {reason}")
            }
        }
    }
}

impl std::error::Error for MoveParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveParseError::Rejected { reason, .. } => Some(reason),
            _ => None,
        }
    }
}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row out of bounds (must be 0-7)
    RowOutOfBounds { row: usize },
    /// Column out of bounds (must be 0-7)
    ColumnOutOfBounds { col: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-7)")
            }
            SquareError::ColumnOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_rejection_messages_are_distinct() {
        let all = [
            Rejection::NoPieceAtSource,
            Rejection::NotSideToMove,
            Rejection::OutOfBounds,
            Rejection::DestinationOccupiedBySelf,
            Rejection::IllegalShapeForPiece,
            Rejection::PathBlocked,
            Rejection::CastlingRightForfeited,
            Rejection::CastlingPathAttacked,
            Rejection::MoveLeavesKingInCheck,
            Rejection::NoEnPassantAvailable,
            Rejection::InvalidPromotion,
        ];
        let messages: std::collections::HashSet<String> =
            all.iter().map(ToString::to_string).collect();
        assert_eq!(messages.len(), all.len());
    }

    #[test]
    fn test_fen_error_too_few_parts() {
        let err = FenError::TooFewParts { found: 2 };
        assert!(err.to_string().contains('2'));
        assert!(err.to_string().contains('4'));
    }

    #[test]
    fn test_fen_error_invalid_piece() {
        let err = FenError::InvalidPiece { char: 'z' };
        assert!(err.to_string().contains("'z'"));
    }

    #[test]
    fn test_fen_error_invalid_counter() {
        let err = FenError::InvalidCounter {
            found: "x1".to_string(),
        };
        assert!(err.to_string().contains("'x1'"));
    }

    #[test]
    fn test_move_error_invalid_length() {
        let err = MoveParseError::InvalidLength { len: 3 };
        assert!(err.to_string().contains('3'));
    }

    #[test]
    fn test_move_error_rejected_carries_reason() {
        let err = MoveParseError::Rejected {
            notation: "e2e5".to_string(),
            reason: Rejection::IllegalShapeForPiece,
        };
        assert!(err.to_string().contains("e2e5"));
        assert!(err.to_string().contains("cannot move"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_square_error_bounds() {
        assert!(SquareError::RowOutOfBounds { row: 9 }.to_string().contains('9'));
        assert!(SquareError::ColumnOutOfBounds { col: 10 }
            .to_string()
            .contains("10"));
    }

    #[test]
    fn test_square_error_invalid_notation() {
        let err = SquareError::InvalidNotation {
            notation: "xyz".to_string(),
        };
        assert!(err.to_string().contains("xyz"));
    }
}
