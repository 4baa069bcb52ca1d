//! Random-move engine.
//!
//! Selects uniformly from legal moves. Used as the fallback opponent and for
//! diagnostics and integration testing.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;

use crate::engines::engine_trait::{parse_option_value, Engine, EngineOutput, SearchParams};
use crate::errors::{ChessError, ChessResult};
use crate::game_state::game_state::GameState;
use crate::search::negamax::search_rng;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: search_rng(None),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: search_rng(Some(seed)),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "GridChess Random"
    }

    fn set_option(&mut self, name: &str, value: &str) -> ChessResult<()> {
        if name.eq_ignore_ascii_case("seed") {
            self.rng = search_rng(Some(parse_option_value(name, value)?));
            return Ok(());
        }
        Err(ChessError::UnknownOption(name.to_owned()))
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        params: &SearchParams,
    ) -> ChessResult<EngineOutput> {
        let legal_moves = game_state.clone().get_legal_moves();

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string random_engine legal_moves {}",
            legal_moves.len()
        ));
        if let Some(depth) = params.depth {
            out.info_lines
                .push(format!("info string random_engine requested_depth {depth}"));
        }

        out.best_move = legal_moves.as_slice().choose(&mut self.rng).copied();
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Color;

    #[test]
    fn random_engine_picks_a_legal_move() {
        let mut engine = RandomEngine::with_seed(11);
        let game = GameState::new_game();
        let out = engine
            .choose_move(&game, &SearchParams::default())
            .expect("random engine should not fail");
        let picked = out.best_move.expect("start position has moves");
        assert!(game.clone().get_legal_moves().contains(&picked));
        assert_eq!(out.info_lines[0], "info string random_engine legal_moves 20");
    }

    #[test]
    fn random_engine_reports_none_when_mated() {
        let game = GameState::from_diagram(
            "R.....k.
             .....ppp
             ........
             ........
             ........
             ........
             ........
             ......K.",
            Color::Black,
        )
        .expect("diagram should parse");
        let out = RandomEngine::new()
            .choose_move(&game, &SearchParams::default())
            .expect("random engine should not fail");
        assert!(out.best_move.is_none());
    }

    #[test]
    fn random_engine_rejects_unknown_options() {
        let mut engine = RandomEngine::new();
        assert!(engine.set_option("Seed", "3").is_ok());
        assert_eq!(
            engine.set_option("Hash", "16"),
            Err(ChessError::UnknownOption("Hash".to_owned()))
        );
    }
}
