//! Play random pseudo-legal moves from a position and print where it ends up.
//!
//! Usage:
//! `cargo run --bin random_walk -- --seed 42 --plies 80`
//! `RUST_LOG=trace cargo run --bin random_walk -- --fen "4k3/8/8/8/8/8/8/4K2R w K - 0 1"`

use plum_core::game_state::chess_rules::STARTING_POSITION_FEN;
use plum_core::game_state::game_state::GameState;
use plum_core::move_generation::move_generator::PseudoLegalMoveGenerator;
use plum_core::utils::random_playout::{seeded_playout, PlayoutEnd};
use plum_core::utils::render_game_state::render_game_state;

fn parse_arg<T: std::str::FromStr>(args: &[String], flag: &str, default: T) -> T {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            if let Ok(v) = args[i + 1].parse::<T>() {
                return v;
            }
        }
    }
    default
}

fn main() -> Result<(), String> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let seed = parse_arg(&args, "--seed", 1u64);
    let plies = parse_arg(&args, "--plies", 60usize);
    let fen = parse_arg(&args, "--fen", STARTING_POSITION_FEN.to_owned());

    let mut game = GameState::from_fen(&fen).map_err(|e| e.to_string())?;
    let generator = PseudoLegalMoveGenerator::default();
    let playout = seeded_playout(&mut game, &generator, plies, seed);

    let line: Vec<String> = playout.moves.iter().map(|mv| mv.to_string()).collect();
    println!("seed={seed} plies={}", playout.moves.len());
    println!("{}", line.join(" "));
    if playout.end == PlayoutEnd::NoMoves {
        println!("no moves left for {:?}", game.color_to_move());
    }
    println!("\n{}\n", render_game_state(&game));
    println!("{}", game.get_fen());

    game.validate_consistency().map_err(|e| e.to_string())
}
