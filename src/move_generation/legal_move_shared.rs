use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::chess_move::Move;

/// A pinned piece may only travel along its pin line, in either direction.
#[inline]
pub fn move_keeps_pin(pin: Option<Direction>, step: Direction) -> bool {
    match pin {
        None => true,
        Some(axis) => step == axis || step == -axis,
    }
}

/// Ray-cast from `from` in each direction, adding quiet moves onto empty
/// squares and a single capture of the first enemy piece met.
pub fn generate_sliding_moves(
    game_state: &GameState,
    from: Coord,
    piece: Piece,
    directions: &[Direction],
    pin: Option<Direction>,
    out: &mut Vec<Move>,
) {
    let board = game_state.board();
    for direction in directions.iter().copied() {
        if !move_keeps_pin(pin, direction) {
            continue;
        }
        for distance in 1..8 {
            let Some(to) = from.offset(direction, distance) else {
                break;
            };
            match board.get(to) {
                None => out.push(Move::new(from, to, piece, None)),
                Some(target) if target.color != piece.color => {
                    out.push(Move::new(from, to, piece, Some(target)));
                    break;
                }
                Some(_) => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::move_keeps_pin;
    use crate::game_state::chess_types::Direction;

    #[test]
    fn pin_allows_both_directions_on_axis() {
        let axis = Some(Direction::new(-1, -1));
        assert!(move_keeps_pin(axis, Direction::new(-1, -1)));
        assert!(move_keeps_pin(axis, Direction::new(1, 1)));
        assert!(!move_keeps_pin(axis, Direction::new(-1, 1)));
        assert!(move_keeps_pin(None, Direction::new(0, 1)));
    }
}
