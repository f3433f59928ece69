//! Benchmarks for the rules engine.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chess_rules::board::Position;
use chess_rules::{attempt_move, Square};

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");
    group.sample_size(10);

    let startpos = Position::new();
    for depth in 1..=3 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| startpos.perft(black_box(depth)))
        });
    }

    let kiwipete = Position::from_fen(KIWIPETE);
    for depth in 1..=2 {
        group.bench_with_input(BenchmarkId::new("kiwipete", depth), &depth, |b, &depth| {
            b.iter(|| kiwipete.perft(black_box(depth)))
        });
    }

    group.finish();
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    let positions = [
        ("startpos", "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
        (
            "middlegame",
            "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4",
        ),
        ("kiwipete", KIWIPETE),
    ];

    for (name, fen) in positions {
        let position = Position::from_fen(fen);
        group.bench_with_input(BenchmarkId::new("legal_moves", name), &position, |b, p| {
            b.iter(|| black_box(p.generate_moves()))
        });
    }

    group.finish();
}

fn bench_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate");

    let position = Position::from_fen(KIWIPETE);
    let castle = (Square(0, 4), Square(0, 6));
    let knight_capture = (Square(4, 4), Square(6, 5));
    let empty_source = (Square(3, 3), Square(4, 3));

    for (name, (from, to)) in [
        ("castle", castle),
        ("knight_capture", knight_capture),
        ("empty_source", empty_source),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| black_box(position.validate(black_box(from), black_box(to), None)))
        });
    }

    group.bench_function("attempt_move", |b| {
        b.iter(|| black_box(attempt_move(&position, castle.0, castle.1, None)))
    });

    group.bench_function("status", |b| b.iter(|| black_box(position.status())));

    group.finish();
}

criterion_group!(benches, bench_perft, bench_movegen, bench_validate);
criterion_main!(benches);
