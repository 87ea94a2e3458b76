//! Pseudo-legal perft with a per-root-move breakdown.
//!
//! Usage:
//! `cargo run --release --bin perft_divide`
//! `cargo run --release --bin perft_divide -- --depth 4 --fen "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1"`
//! `cargo run --release --bin perft_divide -- --no-castling`

use std::time::Instant;

use plum_core::game_state::chess_rules::STARTING_POSITION_FEN;
use plum_core::game_state::game_state::GameState;
use plum_core::move_generation::move_generator::{GeneratorConfig, PseudoLegalMoveGenerator};
use plum_core::move_generation::perft::{perft_divide, PerftCounts};
use plum_core::utils::render_game_state::render_game_state;

fn parse_arg_u8(args: &[String], flag: &str, default: u8) -> u8 {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            if let Ok(v) = args[i + 1].parse::<u8>() {
                return v.max(1);
            }
        }
    }
    default
}

fn parse_arg_str<'a>(args: &'a [String], flag: &str, default: &'a str) -> &'a str {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            return &args[i + 1];
        }
    }
    default
}

fn main() -> Result<(), String> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let depth = parse_arg_u8(&args, "--depth", 3);
    let fen = parse_arg_str(&args, "--fen", STARTING_POSITION_FEN);
    let config = GeneratorConfig {
        generate_castling: !args.iter().any(|a| a == "--no-castling"),
    };

    let game = GameState::from_fen(fen).map_err(|e| e.to_string())?;
    let generator = PseudoLegalMoveGenerator::new(config);
    println!("{}\n", render_game_state(&game));

    let started = Instant::now();
    let divided = perft_divide(&generator, &game, depth);
    let elapsed = started.elapsed();

    let mut total = PerftCounts::default();
    for (mv, counts) in &divided {
        println!("{mv}: {}", counts.nodes);
        total.nodes += counts.nodes;
        total.captures += counts.captures;
        total.en_passant += counts.en_passant;
        total.castles += counts.castles;
        total.promotions += counts.promotions;
    }

    let nps = if elapsed.as_secs_f64() > 0.0 {
        (total.nodes as f64 / elapsed.as_secs_f64()) as u64
    } else {
        0
    };
    println!(
        "\nmoves={} depth={depth} nodes={} captures={} ep={} castles={} promotions={}",
        divided.len(),
        total.nodes,
        total.captures,
        total.en_passant,
        total.castles,
        total.promotions
    );
    println!("elapsed_ms={} nps={nps}", elapsed.as_millis());
    Ok(())
}
