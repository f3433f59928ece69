//! Legal move enumeration.
//!
//! Every square held by the side is paired with every destination and the
//! pair is run through `validate_for`. Squares are visited in index order
//! (a1, b1, ..., h8) for both origin and destination, and promotions in
//! queen, rook, bishop, knight order, so the output order is stable.

use super::{Color, Move, MoveList, Piece, Position, Square, PROMOTION_PIECES};

const NO_PROMOTION: [Option<Piece>; 1] = [None];
const PROMOTION_CHOICES: [Option<Piece>; 4] = [
    Some(PROMOTION_PIECES[0]),
    Some(PROMOTION_PIECES[1]),
    Some(PROMOTION_PIECES[2]),
    Some(PROMOTION_PIECES[3]),
];

impl Position {
    /// All legal moves for `side`.
    #[must_use]
    pub fn legal_moves(&self, side: Color) -> MoveList {
        let mut moves = MoveList::new();
        for mv in self.legal_moves_iter(side) {
            moves.push(mv);
        }
        moves
    }

    /// All legal moves for the side to move.
    #[must_use]
    pub fn generate_moves(&self) -> MoveList {
        self.legal_moves(self.side_to_move)
    }

    /// True if `side` has at least one legal move. Stops at the first one.
    #[must_use]
    pub fn has_legal_move(&self, side: Color) -> bool {
        self.legal_moves_iter(side).next().is_some()
    }

    fn legal_moves_iter(&self, side: Color) -> impl Iterator<Item = Move> + '_ {
        self.grid.squares_of(side).flat_map(move |from| {
            Square::all()
                .filter(move |&to| self.grid.color_on(to) != Some(side))
                .flat_map(move |to| {
                    self.promotion_choices(from, to)
                        .iter()
                        .filter_map(move |&promotion| {
                            self.validate_for(side, from, to, promotion).ok()
                        })
                })
        })
    }

    /// Promotion options to try for a candidate: four for a pawn arriving on
    /// its far rank, none otherwise.
    fn promotion_choices(&self, from: Square, to: Square) -> &'static [Option<Piece>] {
        match self.grid.get(from) {
            Some((color, Piece::Pawn)) if to.0 == color.pawn_promotion_rank() => {
                &PROMOTION_CHOICES
            }
            _ => &NO_PROMOTION,
        }
    }

    /// Count leaf nodes of the legal move tree to the given depth.
    #[must_use]
    pub fn perft(&self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.generate_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        moves
            .iter()
            .map(|&mv| {
                let mut next = self.clone();
                next.apply(mv);
                next.perft(depth - 1)
            })
            .sum()
    }
}
