//! Core chess types.
//!
//! This module contains the fundamental types used throughout the rules engine:
//! - `Piece` and `Color` - piece kinds and colors
//! - `Square` - (row, column) board coordinate
//! - `Grid` - the 8x8 mailbox of cells
//! - `Move` and `MoveList` - classified moves
//! - `CastlingRights` - castling state

mod castling;
mod grid;
mod moves;
mod piece;
mod square;

pub use castling::CastlingRights;
pub use grid::{Cell, Grid};
pub use moves::{Move, MoveKind, MoveList, MoveListIntoIter};
pub use piece::{Color, Piece};
pub use square::Square;

pub(crate) use piece::PROMOTION_PIECES;
