//! Text-diagram positions.
//!
//! A diagram is eight non-blank lines of eight cells each, top line is rank 8.
//! `.` marks an empty square, upper case is White and lower case is Black,
//! using the usual `PNBRQK` letters. Whitespace inside a line is ignored so
//! diagrams can be indented in source or spaced out for readability.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::{chess_types::*, game_state::GameState};

const EMPTY_CELL: char = '.';

impl GameState {
    /// Position from a diagram with every castling right the layout allows
    /// and no en-passant target.
    pub fn from_diagram(diagram: &str, side_to_move: Color) -> ChessResult<GameState> {
        Self::from_diagram_with(diagram, side_to_move, CastleRights::all(), None)
    }

    /// Position from a diagram with explicit rights and en-passant target.
    /// Rights that the layout cannot support are dropped.
    pub fn from_diagram_with(
        diagram: &str,
        side_to_move: Color,
        castle_rights: CastleRights,
        en_passant_target: Option<Coord>,
    ) -> ChessResult<GameState> {
        let board = parse_board(diagram)?;
        let king_locations = [
            single_king(&board, Color::White)?,
            single_king(&board, Color::Black)?,
        ];
        Ok(GameState::from_parts(
            board,
            side_to_move,
            king_locations,
            castle_rights,
            en_passant_target,
        ))
    }

    /// The board as a diagram accepted by `from_diagram`.
    pub fn to_diagram(&self) -> String {
        board_to_diagram(self.board())
    }
}

pub fn board_to_diagram(board: &Board) -> String {
    let mut out = String::with_capacity(BOARD_SIZE * (BOARD_SIZE + 1));
    for row in 0..BOARD_SIZE as i8 {
        for col in 0..BOARD_SIZE as i8 {
            out.push(match board.get(Coord::new(row, col)) {
                Some(piece) => piece_to_char(piece),
                None => EMPTY_CELL,
            });
        }
        out.push('\n');
    }
    out
}

fn parse_board(diagram: &str) -> ChessResult<Board> {
    let rows: Vec<String> = diagram
        .lines()
        .map(|line| line.chars().filter(|ch| !ch.is_whitespace()).collect::<String>())
        .filter(|line| !line.is_empty())
        .collect();
    if rows.len() != BOARD_SIZE {
        return Err(ChessError::InvalidDiagram(format!(
            "expected {BOARD_SIZE} rows, found {}",
            rows.len()
        )));
    }

    let mut board = Board::empty();
    for (row, cells) in rows.iter().enumerate() {
        let count = cells.chars().count();
        if count != BOARD_SIZE {
            return Err(ChessError::InvalidDiagram(format!(
                "row {} has {count} cells",
                row + 1
            )));
        }
        for (col, ch) in cells.chars().enumerate() {
            if ch == EMPTY_CELL {
                continue;
            }
            let piece = piece_from_char(ch).ok_or_else(|| {
                ChessError::InvalidDiagram(format!("unknown piece character '{ch}'"))
            })?;
            board.set(Coord::new(row as i8, col as i8), Some(piece));
        }
    }
    Ok(board)
}

fn single_king(board: &Board, color: Color) -> ChessResult<Coord> {
    match board.find_kings(color).as_slice() {
        [at] => Ok(*at),
        kings => Err(ChessError::InvalidDiagram(format!(
            "{color:?} must have exactly one king, found {}",
            kings.len()
        ))),
    }
}

fn piece_from_char(ch: char) -> Option<Piece> {
    let kind = PieceKind::from_letter(ch)?;
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else {
        Color::Black
    };
    Some(Piece::new(color, kind))
}

fn piece_to_char(piece: Piece) -> char {
    match piece.color {
        Color::White => piece.kind.letter(),
        Color::Black => piece.kind.letter().to_ascii_lowercase(),
    }
}
