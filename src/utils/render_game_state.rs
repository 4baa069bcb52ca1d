//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view for debugging, tests, and the
//! self-play binary.

use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::rank_char;

/// Render the board to a Unicode string for terminal output, White at the
/// bottom.
pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in 0..BOARD_SIZE as i8 {
        out.push(rank_char(row));
        out.push(' ');

        for col in 0..BOARD_SIZE as i8 {
            match game_state.board().get(Coord::new(row, col)) {
                Some(piece) => out.push(piece_to_unicode(piece)),
                None => out.push('·'),
            }

            if col < BOARD_SIZE as i8 - 1 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank_char(row));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}
