//! Value-in, value-out entry points for a surrounding session or transport.
//!
//! Each function takes the position by reference and never mutates it; an
//! accepted move comes back as a new `Position`.

use log::debug;

use crate::board::{Piece, Position, Rejection, Snapshot, Square, Status};

/// Standard initial layout, White to move.
#[must_use]
pub fn new_game() -> Position {
    Position::new()
}

/// Validate a proposed move and return the position after it.
///
/// On rejection `position` is unchanged and the reason is returned.
pub fn attempt_move(
    position: &Position,
    start: Square,
    end: Square,
    promotion: Option<Piece>,
) -> Result<Position, Rejection> {
    let mv = position.validate_logged(start, end, promotion)?;
    let mut next = position.clone();
    next.apply(mv);

    let status = next.status();
    if status != Status::Normal {
        debug!("{mv} leads to {status}");
    }
    Ok(next)
}

/// Classify `position` for the side to move.
#[must_use]
pub fn status(position: &Position) -> Status {
    position.status()
}

/// Serializable view of `position`.
#[must_use]
pub fn snapshot(position: &Position) -> Snapshot {
    position.snapshot()
}
