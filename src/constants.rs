//! Board dimensions, scoring constants and self-play limits.
//!
//! The board size is chosen at runtime (see [`Board::new`](crate::board::Board::new)),
//! but it must fall inside [`MIN_SIZE`]`..=`[`MAX_SIZE`]. The upper bound keeps
//! every column addressable by a GTP vertex letter (A-Z without I).

// =============================================================================
// Board Geometry
// =============================================================================

/// Default board size (NxN). Standard Go sizes are 9, 13, or 19.
pub const DEFAULT_SIZE: usize = 19;

/// Smallest accepted board size.
pub const MIN_SIZE: usize = 1;

/// Largest accepted board size.
pub const MAX_SIZE: usize = 25;

// =============================================================================
// Scoring
// =============================================================================

/// Komi: fixed compensation awarded to White for moving second.
///
/// The half point means a game can never end in a tie.
pub const KOMI: f64 = 6.5;

// =============================================================================
// Game Flow
// =============================================================================

/// Number of consecutive passes that ends the game.
pub const PASSES_TO_END: u32 = 2;

/// Maximum self-play length (3 times board area to allow for captures and replays).
pub const fn max_game_len(size: usize) -> usize {
    size * size * 3
}
