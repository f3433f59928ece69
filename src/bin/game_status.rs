use std::env;
use std::process;

use chess_rules::board::Position;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        eprintln!("usage: game_status [<move> ...]   (coordinate moves, e.g. e2e4 e7e5 g1f3)");
        return;
    }

    let mut position = Position::new();
    for notation in &args {
        if let Err(err) = position.play(notation) {
            eprintln!("{err}");
            process::exit(1);
        }
    }

    let snapshot = position.snapshot();
    let legal_moves = position.generate_moves();
    println!("{snapshot}");
    println!("fen: {}", snapshot.fen);
    println!("status: {}", snapshot.status);
    println!("legal_moves: {}", legal_moves.len());
    let listed: Vec<String> = legal_moves.iter().map(ToString::to_string).collect();
    println!("{}", listed.join(" "));
}
