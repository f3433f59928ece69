pub mod board;
pub mod game;
mod zobrist;

pub use board::{
    CastlingRights, Color, Move, Piece, Position, Rejection, Snapshot, Square, Status,
};
pub use game::{attempt_move, new_game, snapshot, status};
