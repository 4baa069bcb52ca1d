//! Perft: exhaustive legal-move tree counts used to validate generation.
//!
//! Walks the tree with apply/undo on a single state, so it also exercises
//! the history stacks. Leaf statistics describe the moves made at the last ply.

use crate::game_state::game_state::GameState;
use crate::moves::chess_move::Move;
use crate::utils::algebraic::coord_to_algebraic;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
    pub checkmates: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Count leaf positions `depth` plies below `game_state`. The state is
/// restored before returning.
pub fn perft(game_state: &mut GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in game_state.get_legal_moves() {
        game_state.apply_move(&mv);
        if depth == 1 {
            total.merge(leaf_counts(game_state, &mv));
        } else {
            total.merge(perft(game_state, depth - 1));
        }
        game_state.undo_move();
    }
    total
}

/// Node count under each root move, keyed by `<from><to>` squares.
pub fn perft_divide(game_state: &mut GameState, depth: u8) -> Vec<(String, u64)> {
    let mut out = Vec::new();
    if depth == 0 {
        return out;
    }
    for mv in game_state.get_legal_moves() {
        game_state.apply_move(&mv);
        let nodes = perft(game_state, depth - 1).nodes;
        game_state.undo_move();
        out.push((
            format!("{}{}", coord_to_algebraic(mv.start), coord_to_algebraic(mv.end)),
            nodes,
        ));
    }
    out
}

/// Statistics for one leaf. `game_state` is the position after `mv`.
fn leaf_counts(game_state: &mut GameState, mv: &Move) -> PerftCounts {
    let mut counts = PerftCounts {
        nodes: 1,
        ..PerftCounts::default()
    };
    if mv.is_capture() {
        counts.captures += 1;
    }
    if mv.is_en_passant() {
        counts.en_passant += 1;
    }
    if mv.is_castle() {
        counts.castles += 1;
    }
    if mv.is_pawn_promotion() {
        counts.promotions += 1;
    }
    if game_state.in_check() {
        counts.checks += 1;
        if game_state.get_legal_moves().is_empty() {
            counts.checkmates += 1;
        }
    }
    counts
}
