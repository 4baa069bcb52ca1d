//! Negamax alpha-beta engine.
//!
//! Thin engine wrapper around `search::negamax`: owns the search
//! configuration, applies per-call depth overrides, and reports search
//! statistics as info lines.

use crate::engines::engine_trait::{parse_option_value, Engine, EngineOutput, SearchParams};
use crate::errors::{ChessError, ChessResult};
use crate::game_state::game_state::GameState;
use crate::search::board_scoring::MaterialScorer;
use crate::search::negamax::{search, SearchConfig};

#[derive(Debug, Clone, Default)]
pub struct NegamaxEngine {
    config: SearchConfig,
}

impl NegamaxEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }
}

impl Engine for NegamaxEngine {
    fn name(&self) -> &str {
        "GridChess Negamax"
    }

    fn set_option(&mut self, name: &str, value: &str) -> ChessResult<()> {
        match name.to_ascii_lowercase().as_str() {
            "depth" => self.config.depth = parse_option_value(name, value)?,
            "seed" => self.config.seed = Some(parse_option_value(name, value)?),
            _ => return Err(ChessError::UnknownOption(name.to_owned())),
        }
        Ok(())
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        params: &SearchParams,
    ) -> ChessResult<EngineOutput> {
        let mut game = game_state.clone();
        let legal_moves = game.get_legal_moves();

        let config = SearchConfig {
            depth: params.depth.unwrap_or(self.config.depth),
            ..self.config
        };
        let result = search(&mut game, &legal_moves, &MaterialScorer, config);

        let mut out = EngineOutput {
            best_move: result.best_move,
            ..EngineOutput::default()
        };
        out.info_lines.push(format!(
            "info string negamax_engine legal_moves {}",
            legal_moves.len()
        ));
        out.info_lines
            .push(format!("info string negamax_engine depth {}", result.depth));
        out.info_lines
            .push(format!("info string negamax_engine nodes {}", result.nodes));
        out.info_lines
            .push(format!("info string negamax_engine score {}", result.best_score));
        Ok(out)
    }
}
