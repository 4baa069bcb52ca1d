//! Crate root module declarations for the Grid Chess engine.
//!
//! Exposes the rules core (game state, moves, move generation), the negamax
//! search, the engine layer built on it, and text utilities so binaries,
//! tests, and benches can import stable module paths.

pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
}

pub mod moves {
    pub mod chess_move;
    pub mod notation;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod perft;
}

pub mod search {
    pub mod board_scoring;
    pub mod negamax;
    pub mod search_worker;
}

pub mod engines {
    pub mod engine_greedy;
    pub mod engine_negamax;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod board_diagram;
    pub mod render_game_state;
}
