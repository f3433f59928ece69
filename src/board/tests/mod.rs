//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `legality.rs` - Rejection reasons and move classification
//! - `special_moves.rs` - Castling, en passant and promotion
//! - `terminal.rs` - Check, checkmate and stalemate
//! - `draw.rs` - Fifty-move rule, repetition, insufficient material
//! - `fen.rs` - FEN import/export and coordinate notation
//! - `perft.rs` - Move generator node counts
//! - `proptest.rs` - Property-based tests over random games

use crate::board::Square;

mod draw;
mod perft;
mod proptest;

/// Square from algebraic notation, e.g. `sq("e2") == Square(1, 4)`
fn sq(notation: &str) -> Square {
    notation.parse().expect("valid square notation")
}
