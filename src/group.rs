//! Connectivity analysis: groups, liberties and the shared flood fill.

use crate::board::{Board, Cell, Point};

/// Collect the 4-connected region around `seed` whose cells satisfy `include`.
///
/// Iterative depth-first search with an explicit stack, so region size is
/// not limited by recursion depth. The seed is included only if it satisfies
/// the predicate itself, and an off-board seed yields nothing. Points come
/// back in visit order.
pub fn flood<F>(board: &Board, seed: Point, include: F) -> Vec<Point>
where
    F: Fn(Cell) -> bool,
{
    if !board.contains(seed) {
        return Vec::new();
    }
    let size = board.size();
    let mut visited = vec![false; size * size];
    let mut out = Vec::new();
    let mut stack = vec![seed];

    while let Some((x, y)) = stack.pop() {
        let i = y * size + x;
        if visited[i] {
            continue;
        }
        visited[i] = true;
        if !include(board.at((x, y))) {
            continue;
        }
        out.push((x, y));
        for (nx, ny) in board.neighbors((x, y)) {
            if !visited[ny * size + nx] && include(board.at((nx, ny))) {
                stack.push((nx, ny));
            }
        }
    }
    out
}

/// The maximal same-color group containing `pt`, sorted row-major.
///
/// An empty or off-board seed has no group.
pub fn connected_group(board: &Board, pt: Point) -> Vec<Point> {
    let color = match board.cell(pt) {
        Some(color) if !color.is_empty() => color,
        _ => return Vec::new(),
    };
    let mut group = flood(board, pt, |c| c == color);
    group.sort_unstable_by_key(|&(x, y)| (y, x));
    group
}

/// True iff any neighbor of `pt` is empty. Off-board points have none.
pub fn has_liberty(board: &Board, pt: Point) -> bool {
    board.neighbors(pt).any(|n| board.at(n).is_empty())
}

/// True iff any member of the group has a liberty.
pub fn group_has_liberties(board: &Board, group: &[Point]) -> bool {
    group.iter().any(|&pt| has_liberty(board, pt))
}

/// Distinct liberties of a group, sorted row-major.
pub fn liberties(board: &Board, group: &[Point]) -> Vec<Point> {
    let mut libs: Vec<Point> = group
        .iter()
        .flat_map(|&pt| board.neighbors(pt))
        .filter(|&n| board.at(n).is_empty())
        .collect();
    libs.sort_unstable_by_key(|&(x, y)| (y, x));
    libs.dedup();
    libs
}
