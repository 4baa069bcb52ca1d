//! Full legal move generation pipeline.
//!
//! Detects pins and checks for the side to move, runs pin-aware per-piece
//! generation, narrows the result when in check, appends castling, and records
//! checkmate or stalemate. This is the single source of truth for legality.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::{detect_pins_and_checks, Check, CheckInfo};
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::{generate_castling_moves, generate_king_moves};
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::chess_move::Move;

impl GameState {
    /// Every legal move for the side to move, in generation order. Also sets
    /// the checkmate and stalemate flags for this position.
    pub fn get_legal_moves(&mut self) -> Vec<Move> {
        let check_info = detect_pins_and_checks(self);
        let color = self.side_to_move();

        let moves = match check_info.checks.as_slice() {
            [] => {
                let mut moves = generate_pseudo_legal_moves(self, &check_info);
                generate_castling_moves(self, &mut moves);
                moves
            }
            [check] => {
                let blocking = blocking_squares(self.king_location(color), check);
                let mut moves = generate_pseudo_legal_moves(self, &check_info);
                moves.retain(|mv| resolves_single_check(mv, &blocking));
                moves
            }
            _ => {
                let king_at = self.king_location(color);
                let mut moves = Vec::with_capacity(8);
                if let Some(king) = self.board().get(king_at) {
                    generate_king_moves(self, king_at, king, &mut moves);
                }
                moves
            }
        };

        self.checkmate = moves.is_empty() && check_info.in_check;
        self.stalemate = moves.is_empty() && !check_info.in_check;
        moves
    }

    /// Look up the legal move between two squares, as a click-to-move
    /// front end would.
    pub fn find_move(&mut self, start: Coord, end: Coord) -> Option<Move> {
        self.get_legal_moves()
            .into_iter()
            .find(|mv| mv.start == start && mv.end == end)
    }

    /// Is the side to move currently in check?
    pub fn in_check(&self) -> bool {
        detect_pins_and_checks(self).in_check
    }
}

/// Pin-aware moves for every piece of the side to move, king steps included,
/// castling and check evasion excluded.
pub fn generate_pseudo_legal_moves(game_state: &GameState, check_info: &CheckInfo) -> Vec<Move> {
    let color = game_state.side_to_move();
    let mut moves = Vec::with_capacity(64);
    for (from, piece) in game_state.board().pieces() {
        if piece.color != color {
            continue;
        }
        match piece.kind {
            PieceKind::Pawn => generate_pawn_moves(game_state, from, piece, check_info, &mut moves),
            PieceKind::Knight => {
                generate_knight_moves(game_state, from, piece, check_info, &mut moves)
            }
            PieceKind::Bishop => {
                generate_bishop_moves(game_state, from, piece, check_info, &mut moves)
            }
            PieceKind::Rook => generate_rook_moves(game_state, from, piece, check_info, &mut moves),
            PieceKind::Queen => {
                generate_queen_moves(game_state, from, piece, check_info, &mut moves)
            }
            PieceKind::King => generate_king_moves(game_state, from, piece, &mut moves),
        }
    }
    moves
}

/// Squares a non-king move may land on to answer a single check: the ray
/// between king and a sliding checker, ending on the checker itself.
fn blocking_squares(king_at: Coord, check: &Check) -> Vec<Coord> {
    if check.attacker == PieceKind::Knight {
        return vec![check.at];
    }
    let mut squares = Vec::with_capacity(7);
    for distance in 1..8 {
        let Some(at) = king_at.offset(check.direction, distance) else {
            break;
        };
        squares.push(at);
        if at == check.at {
            break;
        }
    }
    squares
}

fn resolves_single_check(mv: &Move, blocking: &[Coord]) -> bool {
    mv.piece_moved.kind == PieceKind::King
        || blocking.contains(&mv.end)
        || (mv.is_en_passant() && blocking.contains(&mv.en_passant_victim_square()))
}
