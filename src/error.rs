//! Error types for board access, move execution and session lookup.

use thiserror::Error;

use crate::constants::{MAX_SIZE, MIN_SIZE};

/// Failure of a bounds-checked board operation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    #[error("({x}, {y}) is outside the {size}x{size} board")]
    OutOfBounds { x: i64, y: i64, size: usize },
    #[error("board size {0} is not supported (expected {min}..={max})", min = MIN_SIZE, max = MAX_SIZE)]
    UnsupportedSize(usize),
}

/// Why a move was rejected.
///
/// A rejected move never changes the game.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("illegal move: ({x}, {y}) is off the board")]
    OutOfBounds { x: i64, y: i64 },
    #[error("illegal move: point not empty")]
    CellOccupied,
    #[error("illegal move: retakes ko")]
    KoViolation,
    /// The placement was undone by self-capture and left the board as it was.
    #[error("illegal move: board unchanged after self-capture")]
    VoidMove,
    #[error("game already over")]
    GameAlreadyOver,
}

/// Failure of a session registry operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("unknown session {0}")]
    UnknownSession(uuid::Uuid),
    #[error(transparent)]
    Board(#[from] BoardError),
}
