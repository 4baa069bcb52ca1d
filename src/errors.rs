//! Errors used throughout the crate.
//!
//! Rules operations (generation, apply, undo) are infallible by contract and
//! never produce these. `ChessError` covers the edges where outside input
//! enters: validated move application, square and diagram parsing, engine
//! configuration, and the off-thread search handoff.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    /// The move is not in the legal list for the current position.
    #[error("illegal move in this position: {notation}")]
    IllegalMove { notation: String },

    #[error("invalid algebraic square: {0}")]
    InvalidSquare(String),

    #[error("invalid board diagram: {0}")]
    InvalidDiagram(String),

    #[error("unknown engine option: {0}")]
    UnknownOption(String),

    #[error("invalid value {value:?} for engine option {name}")]
    InvalidOptionValue { name: String, value: String },

    /// An engine came back without a move.
    #[error("no legal moves available")]
    NoLegalMoves,

    #[error("search worker exited without reporting a move")]
    SearchWorkerLost,
}

pub type ChessResult<T> = Result<T, ChessError>;
