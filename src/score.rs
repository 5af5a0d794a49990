//! Territory counting and final score.
//!
//! Empty regions are scored by adjacency alone: a region bordered only by one
//! color belongs to that color, anything else is neutral. No attempt is made
//! to decide which stones are dead.

use std::fmt;

use crate::board::{Board, Cell, Player, Point};
use crate::constants::KOMI;
use crate::group::flood;

/// Empty points owned by each side after the region sweep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Territory {
    pub black: usize,
    pub white: usize,
    pub neutral: usize,
}

impl Territory {
    pub fn of(&self, player: Player) -> usize {
        match player {
            Player::Black => self.black,
            Player::White => self.white,
        }
    }
}

/// Which color, if any, owns an empty region.
fn region_owner(board: &Board, region: &[Point]) -> Option<Player> {
    let mut black = false;
    let mut white = false;
    for &pt in region {
        for n in board.neighbors(pt) {
            match board.at(n) {
                Cell::Black => black = true,
                Cell::White => white = true,
                Cell::Empty => {}
            }
        }
    }
    match (black, white) {
        (true, false) => Some(Player::Black),
        (false, true) => Some(Player::White),
        _ => None,
    }
}

/// Partition empty points into regions and assign each to its bordering color.
pub fn territory(board: &Board) -> Territory {
    let size = board.size();
    let mut visited = vec![false; size * size];
    let mut result = Territory::default();

    for pt in board.points() {
        let (x, y) = pt;
        if visited[y * size + x] || !board.at(pt).is_empty() {
            continue;
        }
        let region = flood(board, pt, Cell::is_empty);
        for &(rx, ry) in &region {
            visited[ry * size + rx] = true;
        }
        match region_owner(board, &region) {
            Some(Player::Black) => result.black += region.len(),
            Some(Player::White) => result.white += region.len(),
            None => result.neutral += region.len(),
        }
    }
    result
}

/// Final score: captures plus territory, with komi added for White.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Score {
    pub black: f64,
    pub white: f64,
}

impl Score {
    /// Komi is fractional, so there is always a winner.
    pub fn winner(&self) -> Player {
        if self.black > self.white {
            Player::Black
        } else {
            Player::White
        }
    }

    pub fn margin(&self) -> f64 {
        (self.black - self.white).abs()
    }

    pub fn as_tuple(&self) -> (f64, f64) {
        (self.black, self.white)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self.winner() {
            Player::Black => 'B',
            Player::White => 'W',
        };
        write!(f, "{letter}+{}", self.margin())
    }
}

/// Score the board given each player's capture tally, `[black, white]`.
pub fn score(board: &Board, captured: [usize; 2]) -> Score {
    let t = territory(board);
    Score {
        black: (captured[Player::Black.index()] + t.black) as f64,
        white: (captured[Player::White.index()] + t.white) as f64 + KOMI,
    }
}
