//! Engine-vs-engine game printed move by move.
//!
//! Run with:
//! `cargo run --release --bin self_play`
//! `cargo run --release --bin self_play -- --depth 2 --seed 42 --verbose`

use grid_chess::engines::engine_greedy::GreedyEngine;
use grid_chess::engines::engine_negamax::NegamaxEngine;
use grid_chess::engines::engine_trait::{parse_option_value, Engine, SearchParams};
use grid_chess::errors::ChessError;
use grid_chess::game_state::game_state::GameState;
use grid_chess::moves::notation::MoveStatus;
use grid_chess::search::negamax::SearchConfig;
use grid_chess::search::search_worker::spawn_search;
use grid_chess::utils::render_game_state::render_game_state;

const MAX_PLIES: usize = 200;

fn main() -> Result<(), ChessError> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let verbose = args.iter().any(|a| a == "--verbose" || a == "-v");
    let depth: u8 = flag_value(&args, "--depth")?.unwrap_or(3);
    let seed: Option<u64> = flag_value(&args, "--seed")?;

    // Each worker owns its engine, so a fresh one is built per move. The
    // ply offset keeps seeded games from repeating the same shuffle.
    let white = |ply: u64| -> Box<dyn Engine> {
        Box::new(NegamaxEngine::new(SearchConfig {
            depth,
            seed: seed.map(|s| s.wrapping_add(ply)),
        }))
    };
    let black = |ply: u64| -> Box<dyn Engine> {
        Box::new(match seed {
            Some(s) => GreedyEngine::with_seed(s.wrapping_add(ply)),
            None => GreedyEngine::new(),
        })
    };
    println!("{} (white) vs {} (black)", white(0).name(), black(0).name());

    let mut game = GameState::new_game();
    let mut legal_moves = game.get_legal_moves();
    let mut line = Vec::new();

    while !legal_moves.is_empty() && game.move_log().len() < MAX_PLIES {
        let ply = game.move_log().len() as u64;
        let engine = if game.white_to_move() {
            white(ply)
        } else {
            black(ply)
        };

        let output = spawn_search(engine, game.clone(), SearchParams::default()).wait()?;
        if verbose {
            for info in &output.info_lines {
                eprintln!("{info}");
            }
        }

        let chosen = output.best_move.ok_or(ChessError::NoLegalMoves)?;
        let played = game.try_apply_move(&chosen)?;
        legal_moves = game.get_legal_moves();

        let status = if game.is_checkmate() {
            MoveStatus::Checkmate
        } else if game.in_check() {
            MoveStatus::Check
        } else {
            MoveStatus::Quiet
        };
        line.push(played.notation_with_status(status));
    }

    for (index, pair) in line.chunks(2).enumerate() {
        println!("{}. {}", index + 1, pair.join(" "));
    }
    println!("{}", render_game_state(&game));

    let result = match game.terminal_state() {
        (true, _) if game.white_to_move() => "0-1 (checkmate)",
        (true, _) => "1-0 (checkmate)",
        (_, true) => "1/2-1/2 (stalemate)",
        _ => "* (ply limit)",
    };
    println!("{result}");
    Ok(())
}

fn flag_value<T: std::str::FromStr>(args: &[String], flag: &str) -> Result<Option<T>, ChessError> {
    match args.iter().position(|a| a == flag) {
        Some(index) => {
            let value = args.get(index + 1).map(String::as_str).unwrap_or("");
            parse_option_value(flag, value).map(Some)
        }
        None => Ok(None),
    }
}
