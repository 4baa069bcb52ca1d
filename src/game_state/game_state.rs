//! Core game state representation.
//!
//! `GameState` is the central model for the engine. It owns the board, the
//! side to move, the cached king locations, and the history stacks used by the
//! apply/undo workflow. Apply and undo live in
//! `move_generation::legal_move_apply`; legality lives in
//! `move_generation::legal_move_generator`.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::{KING_HOME_COL, KINGSIDE_ROOK_COL, QUEENSIDE_ROOK_COL};
use crate::game_state::chess_types::*;
use crate::moves::chess_move::Move;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    /// Indexed by `Color::index`. Always agrees with the board.
    pub(crate) king_locations: [Coord; 2],

    // --- History stacks, one entry per applied move plus the initial one ---
    pub(crate) move_log: Vec<Move>,
    pub(crate) en_passant_log: Vec<Option<Coord>>,
    pub(crate) castle_rights_log: Vec<CastleRights>,

    // --- Terminal flags, valid only right after a legal-move query ---
    pub(crate) checkmate: bool,
    pub(crate) stalemate: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Fresh game: standard layout, White to move, all castling rights.
    pub fn new_game() -> Self {
        Self {
            board: Board::starting_position(),
            side_to_move: Color::White,
            king_locations: [Coord::new(7, KING_HOME_COL), Coord::new(0, KING_HOME_COL)],
            move_log: Vec::new(),
            en_passant_log: vec![None],
            castle_rights_log: vec![CastleRights::all()],
            checkmate: false,
            stalemate: false,
        }
    }

    /// Build a state from an arbitrary board. The board must hold exactly one
    /// king per color (checked by the diagram parser before calling this).
    /// Castling rights are dropped for any side whose king or rook is not on
    /// its home square.
    pub(crate) fn from_parts(
        board: Board,
        side_to_move: Color,
        king_locations: [Coord; 2],
        castle_rights: CastleRights,
        en_passant_target: Option<Coord>,
    ) -> Self {
        let castle_rights = sanitize_castle_rights(&board, castle_rights);
        Self {
            board,
            side_to_move,
            king_locations,
            move_log: Vec::new(),
            en_passant_log: vec![en_passant_target],
            castle_rights_log: vec![castle_rights],
            checkmate: false,
            stalemate: false,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn white_to_move(&self) -> bool {
        self.side_to_move == Color::White
    }

    #[inline]
    pub fn king_location(&self, color: Color) -> Coord {
        self.king_locations[color.index()]
    }

    #[inline]
    pub fn move_log(&self) -> &[Move] {
        &self.move_log
    }

    pub fn last_move(&self) -> Option<&Move> {
        self.move_log.last()
    }

    /// Notation of every applied move, oldest first.
    pub fn notation_log(&self) -> Vec<String> {
        self.move_log.iter().map(Move::notation).collect()
    }

    /// Square a pawn may capture onto en passant, if the last move allows it.
    #[inline]
    pub fn en_passant_target(&self) -> Option<Coord> {
        self.en_passant_log.last().copied().flatten()
    }

    #[inline]
    pub fn castle_rights(&self) -> CastleRights {
        self.castle_rights_log
            .last()
            .copied()
            .unwrap_or_else(CastleRights::none)
    }

    /// Valid only immediately after `get_legal_moves`.
    #[inline]
    pub fn is_checkmate(&self) -> bool {
        self.checkmate
    }

    /// Valid only immediately after `get_legal_moves`.
    #[inline]
    pub fn is_stalemate(&self) -> bool {
        self.stalemate
    }

    /// `(checkmate, stalemate)` as recorded by the last legal-move query.
    #[inline]
    pub fn terminal_state(&self) -> (bool, bool) {
        (self.checkmate, self.stalemate)
    }
}

fn sanitize_castle_rights(board: &Board, mut rights: CastleRights) -> CastleRights {
    for color in [Color::White, Color::Black] {
        let row = color.back_row();
        let has = |col: i8, kind: PieceKind| {
            board
                .get(Coord::new(row, col))
                .is_some_and(|piece| piece.is(color, kind))
        };
        if !has(KING_HOME_COL, PieceKind::King) {
            rights.revoke_all(color);
            continue;
        }
        if !has(KINGSIDE_ROOK_COL, PieceKind::Rook) {
            rights.revoke_kingside(color);
        }
        if !has(QUEENSIDE_ROOK_COL, PieceKind::Rook) {
            rights.revoke_queenside(color);
        }
    }
    rights
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_game_is_white_to_move_with_all_rights() {
        let game = GameState::new_game();
        assert!(game.white_to_move());
        assert_eq!(game.castle_rights(), CastleRights::all());
        assert_eq!(game.en_passant_target(), None);
        assert_eq!(game.king_location(Color::White), Coord::new(7, 4));
        assert_eq!(game.king_location(Color::Black), Coord::new(0, 4));
        assert!(game.move_log().is_empty());
        assert_eq!(game.terminal_state(), (false, false));
    }

    #[test]
    fn rights_dropped_when_rook_missing() {
        let mut board = Board::starting_position();
        board.set(Coord::new(7, 7), None);
        board.set(Coord::new(0, 4), None);
        board.set(Coord::new(1, 4), Some(Piece::new(Color::Black, PieceKind::King)));
        let game = GameState::from_parts(
            board,
            Color::White,
            [Coord::new(7, 4), Coord::new(1, 4)],
            CastleRights::all(),
            None,
        );
        let rights = game.castle_rights();
        assert!(!rights.white_kingside);
        assert!(rights.white_queenside);
        assert!(!rights.black_kingside && !rights.black_queenside);
    }
}
