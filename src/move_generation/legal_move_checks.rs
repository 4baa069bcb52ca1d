//! Check, pin, and attack detection.
//!
//! Everything here is a pure query over `&GameState`: nothing is cached on the
//! state and nothing is temporarily moved. Hypothetical king squares are
//! passed in as parameters instead.

use crate::game_state::chess_rules::{COMPASS_DIRECTIONS, KNIGHT_OFFSETS};
use crate::game_state::{chess_types::*, game_state::GameState};

/// A friendly piece that shields its king from an enemy slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pin {
    pub at: Coord,
    /// Direction from the king toward the pinned piece.
    pub direction: Direction,
}

/// An enemy piece giving check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Check {
    pub at: Coord,
    /// Direction from the king toward the checker (a knight offset for knights).
    pub direction: Direction,
    pub attacker: PieceKind,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckInfo {
    pub in_check: bool,
    pub pins: Vec<Pin>,
    pub checks: Vec<Check>,
}

impl CheckInfo {
    pub fn pin_on(&self, at: Coord) -> Option<Direction> {
        self.pins
            .iter()
            .find(|pin| pin.at == at)
            .map(|pin| pin.direction)
    }

    #[inline]
    pub fn is_double_check(&self) -> bool {
        self.checks.len() >= 2
    }
}

/// Pins and checks against the side to move's king.
pub fn detect_pins_and_checks(game_state: &GameState) -> CheckInfo {
    let color = game_state.side_to_move();
    inspect_king_square(game_state, color, game_state.king_location(color))
}

/// Pins and checks against a king of `color` standing on `king_at`.
///
/// `king_at` may differ from the cached king location. The real king's square
/// is treated as empty so a king stepping back along a checking ray is still
/// seen as attacked.
pub fn inspect_king_square(game_state: &GameState, color: Color, king_at: Coord) -> CheckInfo {
    let board = game_state.board();
    let enemy = color.opposite();
    let mut info = CheckInfo::default();

    for (ray_index, direction) in COMPASS_DIRECTIONS.iter().copied().enumerate() {
        let mut pin_candidate: Option<Coord> = None;
        for distance in 1..8 {
            let Some(at) = king_at.offset(direction, distance) else {
                break;
            };
            let Some(piece) = board.get(at) else {
                continue;
            };

            if piece.color == color {
                if piece.kind == PieceKind::King {
                    continue;
                }
                if pin_candidate.is_some() {
                    break;
                }
                pin_candidate = Some(at);
                continue;
            }

            if attacks_along_ray(piece.kind, enemy, ray_index, distance) {
                match pin_candidate {
                    None => {
                        info.in_check = true;
                        info.checks.push(Check {
                            at,
                            direction,
                            attacker: piece.kind,
                        });
                    }
                    Some(pinned) => info.pins.push(Pin {
                        at: pinned,
                        direction,
                    }),
                }
            }
            break;
        }
    }

    for offset in KNIGHT_OFFSETS {
        let Some(at) = king_at.offset(offset, 1) else {
            continue;
        };
        if board
            .get(at)
            .is_some_and(|piece| piece.is(enemy, PieceKind::Knight))
        {
            info.in_check = true;
            info.checks.push(Check {
                at,
                direction: offset,
                attacker: PieceKind::Knight,
            });
        }
    }

    info
}

/// Would a king of `color` be in check standing on `king_at`?
#[inline]
pub fn king_would_be_in_check(game_state: &GameState, color: Color, king_at: Coord) -> bool {
    inspect_king_square(game_state, color, king_at).in_check
}

/// Is `at` attacked by the opponent of the side to move?
#[inline]
pub fn square_under_attack(game_state: &GameState, at: Coord) -> bool {
    is_square_attacked_by(game_state, at, game_state.side_to_move().opposite())
}

/// Exact attack test: every piece blocks, pawns count only their diagonals.
pub fn is_square_attacked_by(game_state: &GameState, at: Coord, attacker: Color) -> bool {
    let board = game_state.board();

    for (ray_index, direction) in COMPASS_DIRECTIONS.iter().copied().enumerate() {
        for distance in 1..8 {
            let Some(probe) = at.offset(direction, distance) else {
                break;
            };
            let Some(piece) = board.get(probe) else {
                continue;
            };
            if piece.color == attacker && attacks_along_ray(piece.kind, attacker, ray_index, distance)
            {
                return true;
            }
            break;
        }
    }

    KNIGHT_OFFSETS.iter().any(|offset| {
        at.offset(*offset, 1)
            .and_then(|probe| board.get(probe))
            .is_some_and(|piece| piece.is(attacker, PieceKind::Knight))
    })
}

/// Can a piece of `kind` and `color`, found `distance` squares out along
/// `COMPASS_DIRECTIONS[ray_index]` from a target, attack that target?
fn attacks_along_ray(kind: PieceKind, color: Color, ray_index: usize, distance: i8) -> bool {
    match kind {
        PieceKind::Rook => ray_index < 4,
        PieceKind::Bishop => ray_index >= 4,
        PieceKind::Queen => true,
        PieceKind::King => distance == 1,
        // White pawns capture toward row 0, so they sit below their target.
        PieceKind::Pawn => {
            distance == 1
                && match color {
                    Color::White => ray_index == 6 || ray_index == 7,
                    Color::Black => ray_index == 4 || ray_index == 5,
                }
        }
        PieceKind::Knight => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(diagram: &str, side: Color) -> GameState {
        GameState::from_diagram(diagram, side).expect("test diagram should parse")
    }

    #[test]
    fn start_position_has_no_pins_or_checks() {
        let game = GameState::new_game();
        assert_eq!(detect_pins_and_checks(&game), CheckInfo::default());
    }

    #[test]
    fn rook_behind_friendly_piece_is_a_pin() {
        let game = state(
            "....r..k
             ........
             ........
             ........
             ........
             ........
             ....N...
             ....K...",
            Color::White,
        );
        let info = detect_pins_and_checks(&game);
        assert!(!info.in_check);
        assert_eq!(
            info.pins,
            vec![Pin {
                at: Coord::new(6, 4),
                direction: Direction::new(-1, 0),
            }]
        );
    }

    #[test]
    fn two_friendly_pieces_cancel_the_pin() {
        let game = state(
            "....r..k
             ........
             ........
             ........
             ........
             ....B...
             ....N...
             ....K...",
            Color::White,
        );
        let info = detect_pins_and_checks(&game);
        assert!(info.pins.is_empty());
        assert!(!info.in_check);
    }

    #[test]
    fn pawn_checks_only_from_its_attack_side() {
        let attacking = state(
            "....k...
             ........
             ........
             ........
             ........
             ...p....
             ....K...
             ........",
            Color::White,
        );
        assert!(detect_pins_and_checks(&attacking).in_check);

        let behind = state(
            "....k...
             ........
             ........
             ........
             ........
             ........
             ....K...
             ...p....",
            Color::White,
        );
        assert!(!detect_pins_and_checks(&behind).in_check);
    }

    #[test]
    fn knight_and_slider_give_double_check() {
        let game = state(
            "....r..k
             ........
             ........
             ........
             ........
             ...n....
             ........
             ....K...",
            Color::White,
        );
        let info = detect_pins_and_checks(&game);
        assert!(info.in_check);
        assert!(info.is_double_check());
        assert!(info.checks.iter().any(|c| c.attacker == PieceKind::Knight));
        assert!(info
            .checks
            .iter()
            .any(|c| c.attacker == PieceKind::Rook && c.direction == Direction::new(-1, 0)));
    }

    #[test]
    fn stepping_back_along_a_checking_ray_is_still_check() {
        let open_file = state(
            "r......k
             ........
             ........
             ........
             ........
             ........
             ........
             ...K....",
            Color::White,
        );
        assert!(!detect_pins_and_checks(&open_file).in_check);
        assert!(king_would_be_in_check(&open_file, Color::White, Coord::new(7, 0)));

        let checked = state(
            "...r...k
             ........
             ........
             ........
             ........
             ........
             ...K....
             ........",
            Color::White,
        );
        assert!(detect_pins_and_checks(&checked).in_check);
        // The king's current square must not shield the square behind it.
        assert!(king_would_be_in_check(&checked, Color::White, Coord::new(7, 3)));
        assert!(!king_would_be_in_check(&checked, Color::White, Coord::new(7, 4)));
    }

    #[test]
    fn pawn_attacks_empty_squares() {
        let game = state(
            "....k...
             ........
             ........
             ........
             ........
             ........
             ....p...
             ....K..R",
            Color::White,
        );
        assert!(square_under_attack(&game, Coord::new(7, 5)));
        assert!(square_under_attack(&game, Coord::new(7, 3)));
        assert!(!square_under_attack(&game, Coord::new(7, 6)));
    }
}
