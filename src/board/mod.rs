//! Chess position representation and rules.
//!
//! Uses an 8x8 mailbox grid. Enforces the full rules: movement shapes, path
//! obstruction, captures, castling, en passant, promotion, check, mate,
//! stalemate and the fifty-move and threefold-repetition draws.
//!
//! # Example
//! ```
//! use chess_rules::board::{Position, Square, Status};
//!
//! let mut position = Position::new();
//! position.make_move(Square(1, 4), Square(3, 4), None).unwrap();
//! assert_eq!(position.generate_moves().len(), 20);
//! assert_eq!(position.status(), Status::Normal);
//! ```

mod attacks;
mod error;
mod fen;
mod history;
mod legality;
mod make_move;
mod movegen;
mod notation;
mod snapshot;
mod state;
mod status;
mod types;

#[cfg(test)]
mod tests;

pub use error::{FenError, MoveParseError, Rejection, SquareError};
pub use history::PositionKey;
pub use notation::parse_coordinate_move;
pub use snapshot::Snapshot;
pub use state::Position;
pub use status::{Status, FIFTY_MOVE_PLIES, REPETITION_LIMIT};
pub use types::{
    CastlingRights, Cell, Color, Grid, Move, MoveKind, MoveList, MoveListIntoIter, Piece, Square,
};

pub(crate) use types::PROMOTION_PIECES;
