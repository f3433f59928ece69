use super::history::{PositionKey, RepetitionTable};
use super::{CastlingRights, Cell, Color, Grid, Move, Piece, Square};
use crate::zobrist;

/// The authoritative game state.
///
/// A `Position` is an owned value: each game holds its own, and every
/// operation either reads it or transitions it through a validated move.
/// Cloning yields an independent snapshot, history included.
#[derive(Clone, Debug, PartialEq)]
pub struct Position {
    pub(crate) grid: Grid,
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
    pub(crate) last_move: Option<Move>,
    pub(crate) repetition_counts: RepetitionTable,
}

impl Position {
    /// Standard initial layout, White to move, all castling rights held.
    #[must_use]
    pub fn new() -> Self {
        let mut position = Position::empty();
        position.grid = Grid::starting();
        position.castling_rights = CastlingRights::all();
        position.record_current();
        position
    }

    /// No pieces, no rights, nothing recorded. Callers fill it in and then
    /// call `record_current`.
    pub(crate) fn empty() -> Self {
        Position {
            grid: Grid::empty(),
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            last_move: None,
            repetition_counts: RepetitionTable::new(),
        }
    }

    /// Count the current canonical key once more in the history.
    pub(crate) fn record_current(&mut self) -> u32 {
        let key = self.key();
        self.repetition_counts.increment(key)
    }

    /// The canonical key of the current position
    #[must_use]
    pub fn key(&self) -> PositionKey {
        PositionKey {
            signature: self.hash(),
            grid: self.grid,
            side_to_move: self.side_to_move,
            castling_rights: self.castling_rights,
            en_passant_target: self.en_passant_target,
        }
    }

    /// Zobrist signature of the canonical key
    #[must_use]
    pub fn hash(&self) -> u64 {
        zobrist::signature(
            &self.grid,
            self.side_to_move,
            self.castling_rights,
            self.en_passant_target,
        )
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Color and kind of the piece on `sq`; off-board squares read as empty
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Cell {
        self.grid.get(sq)
    }

    /// Get just the piece type on a square (without color)
    #[must_use]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.piece_at(sq).map(|(_, piece)| piece)
    }

    /// Get just the color of the piece on a square
    #[must_use]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.grid.color_on(sq)
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    /// Plies since the last pawn move or capture
    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    #[must_use]
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// How many times the current canonical position has occurred
    #[must_use]
    pub fn repetition_count(&self) -> u32 {
        self.repetition_counts.get(&self.key())
    }

    /// Number of distinct canonical positions seen in this game
    #[must_use]
    pub fn distinct_positions(&self) -> usize {
        self.repetition_counts.len()
    }

    /// Location of `color`'s king, if it has one
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.grid.king_square(color)
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}
