//! Single-position ko detection.
//!
//! Only the position immediately before the last placement is consulted.
//! There is no whole-game history, so longer repetition cycles are allowed.

use crate::board::{Board, Point};

/// Outcome of comparing the board before and after a placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KoCheck {
    /// Captures undid the placement and the board is exactly as before.
    Unchanged,
    /// The placement stands; `ko_point` is the restriction for the next move.
    Changed { ko_point: Option<Point> },
}

/// Compare `pre` with `post` after placing at `placed`.
///
/// Apart from the placed point, if exactly one cell differs then a single
/// stone was removed and that point becomes the ko point.
pub fn check(pre: &Board, post: &Board, placed: Point) -> KoCheck {
    if pre == post {
        return KoCheck::Unchanged;
    }
    let mut changed = pre.diff(post).into_iter().filter(|&pt| pt != placed);
    let ko_point = match (changed.next(), changed.next()) {
        (Some(pt), None) => Some(pt),
        _ => None,
    };
    KoCheck::Changed { ko_point }
}
