//! Engine abstraction layer.
//!
//! Defines common input parameters and output payloads so different move
//! selection strategies can be swapped at runtime behind a single trait.

use std::str::FromStr;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::game_state::GameState;
use crate::moves::chess_move::Move;

/// Per-call overrides for a single move choice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchParams {
    pub depth: Option<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<Move>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn set_option(&mut self, name: &str, _value: &str) -> ChessResult<()> {
        Err(ChessError::UnknownOption(name.to_owned()))
    }

    /// Pick a move for the side to move. `best_move` is `None` only when the
    /// position has no legal moves.
    fn choose_move(
        &mut self,
        game_state: &GameState,
        params: &SearchParams,
    ) -> ChessResult<EngineOutput>;
}

/// Parse an option value, naming the option in the error.
pub fn parse_option_value<T: FromStr>(name: &str, value: &str) -> ChessResult<T> {
    value
        .trim()
        .parse()
        .map_err(|_| ChessError::InvalidOptionValue {
            name: name.to_owned(),
            value: value.to_owned(),
        })
}
