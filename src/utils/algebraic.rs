//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and internal
//! row/column coordinates reused by notation, diagrams, and callers.

use crate::errors::ChessError;
use crate::game_state::chess_types::Coord;

/// Convert algebraic notation (for example: "e4") to a board coordinate.
pub fn algebraic_to_coord(square: &str) -> Result<Coord, ChessError> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidSquare(square.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidSquare(square.to_owned()));
    }

    let col = (file - b'a') as i8;
    let row = 7 - (rank - b'1') as i8;
    Ok(Coord::new(row, col))
}

#[inline]
pub fn file_char(col: i8) -> char {
    char::from(b'a' + col as u8)
}

#[inline]
pub fn rank_char(row: i8) -> char {
    char::from(b'1' + (7 - row) as u8)
}

/// Convert a board coordinate to algebraic notation (for example: "e4").
pub fn coord_to_algebraic(at: Coord) -> String {
    format!("{}{}", file_char(at.col), rank_char(at.row))
}
