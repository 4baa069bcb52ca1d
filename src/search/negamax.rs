//! Fixed-depth negamax search with alpha-beta pruning.
//!
//! The root shuffles its candidates once so equal-valued moves vary from game
//! to game; a fixed seed makes that shuffle reproducible. Every node walks
//! the tree by apply/undo on one `GameState`, strictly nested.
//!
//! Pruning is fail-hard on the cutoff test (`alpha >= beta`) while the value
//! returned is the best score seen, which may lie outside the window.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::game_state::game_state::GameState;
use crate::moves::chess_move::Move;
use crate::search::board_scoring::{BoardScorer, MaterialScorer, CHECKMATE};

pub const DEFAULT_SEARCH_DEPTH: u8 = 3;

/// Strictly outside every reachable score.
const SCORE_BOUND: i32 = CHECKMATE + 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Plies to search. Zero is treated as one so a move is always chosen.
    pub depth: u8,
    /// Seed for the root shuffle; `None` draws from the thread RNG.
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_SEARCH_DEPTH,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    /// From the side to move's point of view.
    pub best_score: i32,
    pub depth: u8,
    pub nodes: u64,
}

/// Per-search scratch passed down the recursion.
pub struct SearchContext<'a, S: BoardScorer> {
    scorer: &'a S,
    nodes: u64,
}

impl<'a, S: BoardScorer> SearchContext<'a, S> {
    pub fn new(scorer: &'a S) -> Self {
        Self { scorer, nodes: 0 }
    }

    #[inline]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}

/// Best move among `legal_moves` by material negamax, or `None` when there
/// are no moves. `legal_moves` must come from `game_state.get_legal_moves()`.
pub fn select_move(
    game_state: &mut GameState,
    legal_moves: &[Move],
    config: SearchConfig,
) -> Option<Move> {
    search(game_state, legal_moves, &MaterialScorer, config).best_move
}

/// Root of the search. The state, including its terminal flags, is left
/// exactly as it was found.
pub fn search<S: BoardScorer>(
    game_state: &mut GameState,
    legal_moves: &[Move],
    scorer: &S,
    config: SearchConfig,
) -> SearchResult {
    let sign = side_sign(game_state);
    if legal_moves.is_empty() {
        return SearchResult {
            best_move: None,
            best_score: sign * scorer.score(game_state),
            depth: 0,
            nodes: 1,
        };
    }

    let depth = config.depth.max(1);
    let mut candidates = legal_moves.to_vec();
    candidates.shuffle(&mut search_rng(config.seed));

    let terminal_flags = game_state.terminal_state();
    let mut ctx = SearchContext::new(scorer);
    ctx.nodes += 1;

    let mut alpha = -SCORE_BOUND;
    let beta = SCORE_BOUND;
    let mut best_move = None;
    let mut best_score = -SCORE_BOUND;

    for mv in &candidates {
        game_state.apply_move(mv);
        let replies = game_state.get_legal_moves();
        let score = -negamax(game_state, &replies, depth - 1, -beta, -alpha, -sign, &mut ctx);
        game_state.undo_move();

        if best_move.is_none() || score > best_score {
            best_score = score;
            best_move = Some(*mv);
        }
        alpha = alpha.max(score);
    }

    (game_state.checkmate, game_state.stalemate) = terminal_flags;

    SearchResult {
        best_move,
        best_score,
        depth,
        nodes: ctx.nodes,
    }
}

/// Score of `game_state` for the side `sign` stands for (`1` White, `-1`
/// Black). `moves` are the legal moves of `game_state`, freshly generated so
/// the terminal flags are current. Positions without moves are evaluated in
/// place, so stalemate scores level rather than as a loss.
pub fn negamax<S: BoardScorer>(
    game_state: &mut GameState,
    moves: &[Move],
    depth: u8,
    mut alpha: i32,
    beta: i32,
    sign: i32,
    ctx: &mut SearchContext<'_, S>,
) -> i32 {
    ctx.nodes += 1;
    if depth == 0 || moves.is_empty() {
        return sign * ctx.scorer.score(game_state);
    }

    let mut best = -SCORE_BOUND;
    for mv in moves {
        game_state.apply_move(mv);
        let replies = game_state.get_legal_moves();
        let score = -negamax(game_state, &replies, depth - 1, -beta, -alpha, -sign, ctx);
        game_state.undo_move();

        best = best.max(score);
        alpha = alpha.max(best);
        if alpha >= beta {
            break;
        }
    }
    best
}

pub fn search_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    }
}

#[inline]
fn side_sign(game_state: &GameState) -> i32 {
    if game_state.white_to_move() {
        1
    } else {
        -1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Color, Coord};

    fn seeded(depth: u8) -> SearchConfig {
        SearchConfig {
            depth,
            seed: Some(7),
        }
    }

    #[test]
    fn takes_the_hanging_queen() {
        let mut game = GameState::from_diagram(
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
        let moves = game.get_legal_moves();
        let best = select_move(&mut game, &moves, seeded(3)).expect("a move exists");
        assert_eq!(best.start, Coord::new(7, 3));
        assert_eq!(best.end, Coord::new(3, 3));
        assert!(best.is_capture());
    }

    #[test]
    fn finds_back_rank_mate() {
        let mut game = GameState::from_diagram(
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
        let moves = game.get_legal_moves();
        let result = search(&mut game, &moves, &MaterialScorer, seeded(3));
        let best = result.best_move.expect("a move exists");
        assert_eq!(best.end, Coord::new(0, 0));
        assert_eq!(result.best_score, CHECKMATE);
        assert!(result.nodes > 1);
    }

    #[test]
    fn black_to_move_also_maximizes_its_own_score() {
        let mut game = GameState::from_diagram(
            "...r...k
             ........
             ........
             ...Q....
             ........
             ........
             ........
             ....K...",
            Color::Black,
        )
        .expect("diagram should parse");
        let moves = game.get_legal_moves();
        let best = select_move(&mut game, &moves, seeded(2)).expect("a move exists");
        assert_eq!(best.end, Coord::new(3, 3));
    }

    #[test]
    fn search_leaves_state_untouched() {
        let mut game = GameState::new_game();
        let moves = game.get_legal_moves();
        let before = game.clone();
        let result = search(&mut game, &moves, &MaterialScorer, seeded(2));
        assert!(result.best_move.is_some());
        assert_eq!(result.depth, 2);
        assert_eq!(game, before);
    }

    #[test]
    fn fixed_seed_is_reproducible() {
        let mut game = GameState::new_game();
        let moves = game.get_legal_moves();
        let first = select_move(&mut game, &moves, seeded(2));
        let second = select_move(&mut game, &moves, seeded(2));
        assert_eq!(first, second);
    }

    #[test]
    fn zero_depth_still_picks_a_move() {
        let mut game = GameState::new_game();
        let moves = game.get_legal_moves();
        assert!(select_move(&mut game, &moves, seeded(0)).is_some());
    }

    #[test]
    fn empty_move_list_returns_none() {
        let mut game = GameState::new_game();
        assert_eq!(select_move(&mut game, &[], SearchConfig::default()), None);
    }

    #[test]
    fn stalemate_inside_the_tree_scores_level() {
        let mut game = GameState::from_diagram(
            "k.......
             ..Q.....
             .K......
             ........
             ........
             ........
             ........
             ........",
            Color::Black,
        )
        .expect("diagram should parse");
        let moves = game.get_legal_moves();
        assert!(moves.is_empty());
        let mut ctx = SearchContext::new(&MaterialScorer);
        let score = negamax(&mut game, &moves, 2, -SCORE_BOUND, SCORE_BOUND, -1, &mut ctx);
        assert_eq!(score, 0);
        assert_eq!(ctx.nodes(), 1);
    }
}
