//! Pawn move generation.
//!
//! Single and double pushes, diagonal captures, and en passant. Promotion is
//! recorded on the move itself; the pawn always becomes a queen when applied.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::CheckInfo;
use crate::move_generation::legal_move_shared::move_keeps_pin;
use crate::moves::chess_move::Move;

pub fn generate_pawn_moves(
    game_state: &GameState,
    from: Coord,
    piece: Piece,
    check_info: &CheckInfo,
    out: &mut Vec<Move>,
) {
    let board = game_state.board();
    let color = piece.color;
    let forward = color.pawn_forward();
    let pin = check_info.pin_on(from);

    if move_keeps_pin(pin, Direction::new(forward, 0)) {
        if let Some(one_step) = from.step(forward, 0).filter(|to| board.is_empty_at(*to)) {
            out.push(Move::new(from, one_step, piece, None));

            if from.row == color.pawn_start_row() {
                if let Some(two_step) = from.step(2 * forward, 0).filter(|to| board.is_empty_at(*to)) {
                    out.push(Move::new(from, two_step, piece, None));
                }
            }
        }
    }

    for d_col in [-1i8, 1i8] {
        let step = Direction::new(forward, d_col);
        let Some(to) = from.offset(step, 1) else {
            continue;
        };
        if !move_keeps_pin(pin, step) {
            continue;
        }

        match board.get(to) {
            Some(target) if target.color != color => {
                out.push(Move::new(from, to, piece, Some(target)));
            }
            None if game_state.en_passant_target() == Some(to) => {
                let victim_at = Coord::new(from.row, to.col);
                let Some(victim) = board
                    .get(victim_at)
                    .filter(|victim| victim.is(color.opposite(), PieceKind::Pawn))
                else {
                    continue;
                };
                if !en_passant_exposes_king(game_state, color, from, victim_at) {
                    out.push(Move::en_passant(from, to, piece, victim));
                }
            }
            _ => {}
        }
    }
}

/// An en-passant capture empties two squares on the capturing pawn's rank.
/// If the king shares that rank, an enemy rook or queen may see it afterwards.
fn en_passant_exposes_king(
    game_state: &GameState,
    color: Color,
    pawn_at: Coord,
    victim_at: Coord,
) -> bool {
    let king_at = game_state.king_location(color);
    if king_at.row != pawn_at.row {
        return false;
    }

    let board = game_state.board();
    let direction = king_at.direction_to(pawn_at);
    for distance in 1..8 {
        let Some(at) = king_at.offset(direction, distance) else {
            return false;
        };
        if at == pawn_at || at == victim_at {
            continue;
        }
        if let Some(piece) = board.get(at) {
            return piece.color != color
                && matches!(piece.kind, PieceKind::Rook | PieceKind::Queen);
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_checks::detect_pins_and_checks;

    fn pawn_moves(game: &GameState, from: Coord) -> Vec<Move> {
        let info = detect_pins_and_checks(game);
        let piece = game.board().get(from).expect("pawn should be on the square");
        let mut moves = Vec::new();
        generate_pawn_moves(game, from, piece, &info, &mut moves);
        moves
    }

    #[test]
    fn start_rank_pawn_pushes_once_or_twice() {
        let game = GameState::new_game();
        let moves = pawn_moves(&game, Coord::new(6, 4));
        let ends: Vec<Coord> = moves.iter().map(|mv| mv.end).collect();
        assert_eq!(ends, vec![Coord::new(5, 4), Coord::new(4, 4)]);
    }

    #[test]
    fn blocked_pawn_cannot_jump() {
        let game = GameState::from_diagram(
            "....k...
             ........
             ........
             ........
             ........
             ....n...
             ....P...
             ....K...",
            Color::White,
        )
        .expect("diagram should parse");
        assert!(pawn_moves(&game, Coord::new(6, 4)).is_empty());
    }

    #[test]
    fn en_passant_blocked_by_rank_exposure() {
        let game = GameState::from_diagram_with(
            "....k...
             ........
             ........
             K..Pp..r
             ........
             ........
             ........
             ........",
            Color::White,
            CastleRights::none(),
            Some(Coord::new(2, 4)),
        )
        .expect("diagram should parse");
        let moves = pawn_moves(&game, Coord::new(3, 3));
        assert!(moves.iter().all(|mv| !mv.is_en_passant()));
        assert_eq!(moves.len(), 1);
    }

    #[test]
    fn en_passant_available_when_rank_is_safe() {
        let game = GameState::from_diagram_with(
            "....k...
             ........
             ........
             ...Pp...
             ........
             ........
             ........
             ....K...",
            Color::White,
            CastleRights::none(),
            Some(Coord::new(2, 4)),
        )
        .expect("diagram should parse");
        let moves = pawn_moves(&game, Coord::new(3, 3));
        let ep = moves
            .iter()
            .find(|mv| mv.is_en_passant())
            .expect("en passant should be generated");
        assert_eq!(ep.end, Coord::new(2, 4));
        assert_eq!(ep.en_passant_victim_square(), Coord::new(3, 4));
    }

    #[test]
    fn diagonal_pin_allows_capturing_the_pinner() {
        let game = GameState::from_diagram(
            "....k...
             ........
             ........
             ........
             ........
             .....b..
             ....P...
             ...K....",
            Color::White,
        )
        .expect("diagram should parse");
        let moves = pawn_moves(&game, Coord::new(6, 4));
        assert_eq!(moves.len(), 1);
        assert!(moves[0].is_capture());
    }
}
