//! Uniform random move selection.
//!
//! This is the engine's opponent: it has no strategy beyond picking among the
//! moves the rules allow.

use tracing::debug;

use crate::board::Point;
use crate::game::{Game, Phase, Placement};
use crate::error::MoveError;

/// What the random player did with its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Placed(Placement),
    Passed(Phase),
}

pub struct RandomPlayer {
    rng: fastrand::Rng,
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomPlayer {
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    /// A player whose choices are reproducible for a given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    /// Pick uniformly among the legal moves, or `None` if there are none.
    ///
    /// The chosen point may still turn out to be a void self-capture.
    pub fn choose_move(&mut self, game: &Game) -> Option<Point> {
        let moves = game.legal_moves();
        if moves.is_empty() {
            return None;
        }
        Some(moves[self.rng.usize(..moves.len())])
    }

    /// Play one turn for the player to move.
    ///
    /// Candidates are tried in random order until the engine accepts one;
    /// if none is accepted the player passes.
    pub fn play_turn(&mut self, game: &mut Game) -> Result<Turn, MoveError> {
        if game.is_over() {
            return Err(MoveError::GameAlreadyOver);
        }
        let mut candidates = game.legal_moves();
        self.rng.shuffle(&mut candidates);

        for (x, y) in candidates {
            match game.place_stone(x as i64, y as i64) {
                Ok(placement) => return Ok(Turn::Placed(placement)),
                Err(MoveError::VoidMove) => continue,
                Err(err) => return Err(err),
            }
        }
        debug!(player = %game.current_player(), "no playable move, passing");
        game.pass_turn().map(Turn::Passed)
    }
}
