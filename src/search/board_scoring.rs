//! Pluggable board evaluation interfaces and the baseline material scorer.
//!
//! Search delegates static scoring to `BoardScorer`, so alternate heuristics
//! can be swapped in without touching the negamax code. Scores are always
//! from White's point of view; the search applies the side-to-move sign.

use crate::game_state::board::Board;
use crate::game_state::{chess_types::*, game_state::GameState};

/// Score for a mated side, independent of distance to mate.
pub const CHECKMATE: i32 = 1000;
pub const STALEMATE: i32 = 0;

pub trait BoardScorer: Send + Sync {
    /// Score with White positive. Terminal flags on `game_state` must be
    /// fresh from a legal-move query.
    fn score(&self, game_state: &GameState) -> i32;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl MaterialScorer {
    #[inline]
    pub const fn piece_value(piece: PieceKind) -> i32 {
        match piece {
            PieceKind::Pawn => 1,
            PieceKind::Knight => 3,
            PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 10,
            PieceKind::King => 0,
        }
    }
}

impl BoardScorer for MaterialScorer {
    fn score(&self, game_state: &GameState) -> i32 {
        evaluate(game_state)
    }
}

/// White material minus Black material.
pub fn score_material(board: &Board) -> i32 {
    board
        .pieces()
        .map(|(_, piece)| {
            let value = MaterialScorer::piece_value(piece.kind);
            match piece.color {
                Color::White => value,
                Color::Black => -value,
            }
        })
        .sum()
}

/// Terminal-aware evaluation: a mated side scores `CHECKMATE` against it,
/// stalemate is level, and anything else is the material balance.
pub fn evaluate(game_state: &GameState) -> i32 {
    if game_state.is_checkmate() {
        return match game_state.side_to_move() {
            Color::White => -CHECKMATE,
            Color::Black => CHECKMATE,
        };
    }
    if game_state.is_stalemate() {
        return STALEMATE;
    }
    score_material(game_state.board())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_position_is_balanced() {
        let game = GameState::new_game();
        assert_eq!(score_material(game.board()), 0);
        assert_eq!(MaterialScorer.score(&game), 0);
    }

    #[test]
    fn material_favors_white_when_ahead() {
        let game = GameState::from_diagram(
            "....k...
             ........
             ........
             ........
             ........
             ........
             ...QR...
             ....K..n",
            Color::White,
        )
        .expect("diagram should parse");
        assert_eq!(score_material(game.board()), 10 + 5 - 3);
    }

    #[test]
    fn checkmate_is_signed_against_the_mated_side() {
        let mut black_mated = GameState::from_diagram(
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
        assert!(black_mated.get_legal_moves().is_empty());
        assert_eq!(evaluate(&black_mated), CHECKMATE);

        let mut white_mated = GameState::from_diagram(
            "......k.
             ........
             ........
             ........
             ........
             ........
             .....PPP
             r.....K.",
            Color::White,
        )
        .expect("diagram should parse");
        assert!(white_mated.get_legal_moves().is_empty());
        assert_eq!(evaluate(&white_mated), -CHECKMATE);
    }

    #[test]
    fn stalemate_scores_level_despite_material() {
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
        assert!(game.get_legal_moves().is_empty());
        assert_eq!(evaluate(&game), STALEMATE);
    }
}
