//! Property-based tests over random games.

use crate::board::{Color, Position, Square};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Strategy for the number of plies in a random game
fn ply_count_strategy() -> impl Strategy<Value = usize> {
    0..=40usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Coordinates a little past the board edge, so out-of-range input is drawn too
fn coordinate_strategy() -> impl Strategy<Value = usize> {
    0..10usize
}

/// Play up to `plies` uniformly chosen legal moves from the initial position.
fn random_game(seed: u64, plies: usize) -> Position {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut position = Position::new();
    for _ in 0..plies {
        let moves = position.generate_moves();
        if moves.is_empty() {
            break;
        }
        let mv = moves.as_slice()[rng.gen_range(0..moves.len())];
        position.apply(mv);
    }
    position
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// A rejected move leaves the position exactly as it was
    #[test]
    fn prop_rejection_leaves_position_unchanged(
        seed in seed_strategy(),
        plies in ply_count_strategy(),
        from in (coordinate_strategy(), coordinate_strategy()),
        to in (coordinate_strategy(), coordinate_strategy()),
    ) {
        let mut position = random_game(seed, plies);
        let before = position.clone();
        let from = Square(from.0, from.1);
        let to = Square(to.0, to.1);

        match position.make_move(from, to, None) {
            Ok(mv) => {
                prop_assert_eq!(mv.from(), from);
                prop_assert_eq!(mv.to(), to);
                prop_assert_ne!(position.side_to_move(), before.side_to_move());
            }
            Err(reason) => {
                prop_assert!(position == before);
                prop_assert_eq!(before.validate(from, to, None), Err(reason));
            }
        }
    }

    /// Turns alternate, castling rights only shrink, and the mover is never left in check
    #[test]
    fn prop_move_invariants(seed in seed_strategy(), plies in ply_count_strategy()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut position = Position::new();

        for _ in 0..plies {
            let moves = position.generate_moves();
            if moves.is_empty() {
                break;
            }
            let mv = moves.as_slice()[rng.gen_range(0..moves.len())];
            let mover = position.side_to_move();
            let rights_before = position.castling_rights();

            position.make_move(mv.from(), mv.to(), mv.promotion()).unwrap();

            prop_assert_eq!(position.side_to_move(), mover.opponent());
            prop_assert!(position.castling_rights().is_subset_of(rights_before));
            prop_assert!(!position.in_check(mover));
            prop_assert_eq!(position.last_move(), Some(mv));
        }
    }

    /// Exporting to FEN and importing again yields the same FEN
    #[test]
    fn prop_fen_round_trip(seed in seed_strategy(), plies in ply_count_strategy()) {
        let position = random_game(seed, plies);
        let fen = position.to_fen();
        let imported = Position::from_fen(&fen);
        prop_assert_eq!(imported.to_fen(), fen);
        prop_assert_eq!(imported.key(), position.key());
        prop_assert_eq!(imported.generate_moves().len(), position.generate_moves().len());
    }

    /// The generator lists exactly the pairs that validation accepts
    #[test]
    fn prop_generator_agrees_with_validation(seed in seed_strategy(), plies in ply_count_strategy()) {
        let position = random_game(seed, plies);
        let side = position.side_to_move();
        let moves = position.generate_moves();

        for mv in &moves {
            prop_assert_eq!(position.validate(mv.from(), mv.to(), mv.promotion()), Ok(*mv));
        }
        for from in Square::all() {
            for to in Square::all() {
                let accepted = position.validate(from, to, None).is_ok();
                prop_assert_eq!(accepted, moves.contains_squares(from, to));
            }
        }
        prop_assert_eq!(moves.is_empty(), !position.has_legal_move(side));
    }

    /// Each side keeps exactly one king
    #[test]
    fn prop_kings_survive(seed in seed_strategy(), plies in ply_count_strategy()) {
        let position = random_game(seed, plies);
        for color in Color::BOTH {
            let kings = position
                .grid()
                .pieces()
                .filter(|&(_, c, p)| c == color && p == crate::board::Piece::King)
                .count();
            prop_assert_eq!(kings, 1);
        }
    }
}
