//! Two-ply material engine.
//!
//! For each candidate, assumes the opponent answers with its best material
//! reply, then plays the candidate whose best reply is least good for the
//! opponent. Cheap and shallow; mostly a sparring partner for the negamax
//! engine.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::engines::engine_trait::{parse_option_value, Engine, EngineOutput, SearchParams};
use crate::errors::{ChessError, ChessResult};
use crate::game_state::game_state::GameState;
use crate::search::board_scoring::{evaluate, CHECKMATE};
use crate::search::negamax::search_rng;

pub struct GreedyEngine {
    rng: StdRng,
}

impl GreedyEngine {
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

impl Default for GreedyEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for GreedyEngine {
    fn name(&self) -> &str {
        "GridChess Greedy"
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
        let mut game = game_state.clone();
        let mut legal_moves = game.get_legal_moves();
        legal_moves.shuffle(&mut self.rng);

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string greedy_engine legal_moves {}",
            legal_moves.len()
        ));
        if let Some(depth) = params.depth {
            out.info_lines
                .push(format!("info string greedy_engine requested_depth {depth}"));
        }

        // Opponent's point of view: positive is good for the side replying.
        let opponent_sign = if game.white_to_move() { -1 } else { 1 };
        let mut lowest_reply_score = CHECKMATE + 1;

        for mv in &legal_moves {
            game.apply_move(mv);
            let replies = game.get_legal_moves();
            let best_reply_score = if replies.is_empty() {
                opponent_sign * evaluate(&game)
            } else {
                let mut best = -(CHECKMATE + 1);
                for reply in &replies {
                    game.apply_move(reply);
                    // Only for the terminal flags `evaluate` reads.
                    let _replies = game.get_legal_moves();
                    best = best.max(opponent_sign * evaluate(&game));
                    game.undo_move();
                }
                best
            };
            game.undo_move();

            if best_reply_score < lowest_reply_score {
                lowest_reply_score = best_reply_score;
                out.best_move = Some(*mv);
            }
        }

        if out.best_move.is_some() {
            out.info_lines.push(format!(
                "info string greedy_engine opponent_best_reply {lowest_reply_score}"
            ));
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Color, Coord};

    #[test]
    fn greedy_takes_free_material() {
        let game = GameState::from_diagram(
            "....k...
             ........
             ........
             ...q....
             ........
             ........
             ........
             ...R..K.",
            Color::White,
        )
        .expect("diagram should parse");
        let out = GreedyEngine::with_seed(5)
            .choose_move(&game, &SearchParams::default())
            .expect("greedy engine should not fail");
        let mv = out.best_move.expect("a move exists");
        assert_eq!(mv.end, Coord::new(3, 3));
    }

    #[test]
    fn greedy_plays_mate_in_one() {
        let game = GameState::from_diagram(
            "......k.
             .....ppp
             ........
             ........
             ........
             ........
             ........
             R.....K.",
            Color::White,
        )
        .expect("diagram should parse");
        let out = GreedyEngine::with_seed(5)
            .choose_move(&game, &SearchParams::default())
            .expect("greedy engine should not fail");
        assert_eq!(out.best_move.map(|mv| mv.end), Some(Coord::new(0, 0)));
        assert!(out
            .info_lines
            .iter()
            .any(|line| line == &format!("info string greedy_engine opponent_best_reply {}", -CHECKMATE)));
    }

    #[test]
    fn greedy_leaves_caller_state_alone() {
        let game = GameState::new_game();
        let before = game.clone();
        GreedyEngine::new()
            .choose_move(&game, &SearchParams { depth: Some(2) })
            .expect("greedy engine should not fail");
        assert_eq!(game, before);
    }
}
