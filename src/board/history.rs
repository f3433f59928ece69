use std::collections::HashMap;
use std::hash::{Hash, Hasher};

use super::{CastlingRights, Color, Grid, Square};

/// Canonical position key: layout, side to move, castling rights and
/// en-passant target.
///
/// Equality compares every component; hashing uses only the precomputed
/// Zobrist signature, which is a function of those same components.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PositionKey {
    pub(crate) signature: u64,
    pub(crate) grid: Grid,
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
}

impl PositionKey {
    #[must_use]
    pub fn signature(&self) -> u64 {
        self.signature
    }
}

impl Hash for PositionKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.signature.hash(state);
    }
}

/// Occurrence counts of every canonical key reached in the game.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct RepetitionTable {
    counts: HashMap<PositionKey, u32>,
    highest: u32,
}

impl RepetitionTable {
    pub(crate) fn new() -> Self {
        RepetitionTable::default()
    }

    pub(crate) fn get(&self, key: &PositionKey) -> u32 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    pub(crate) fn increment(&mut self, key: PositionKey) -> u32 {
        let count = self.counts.entry(key).or_insert(0);
        *count = count.saturating_add(1);
        self.highest = self.highest.max(*count);
        *count
    }

    /// Largest occurrence count of any key so far
    pub(crate) fn highest(&self) -> u32 {
        self.highest
    }

    pub(crate) fn len(&self) -> usize {
        self.counts.len()
    }
}
