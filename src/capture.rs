//! Removal of groups left without liberties.

use tracing::trace;

use crate::board::{Board, Cell, Player};
use crate::group::{connected_group, group_has_liberties};

/// Remove every group of `color` that has no liberties.
///
/// The board is scanned row-major and each group is judged on the board as it
/// stands when its first stone is reached, so removing one group can free
/// liberties for another later in the scan. Returns the number of stones
/// removed.
pub fn remove_dead_groups(board: &mut Board, color: Player) -> usize {
    let stone = Cell::from(color);
    let size = board.size();
    let mut visited = vec![false; size * size];
    let mut removed = 0;

    for pt in board.points() {
        let (x, y) = pt;
        if visited[y * size + x] || board.at(pt) != stone {
            continue;
        }
        let group = connected_group(board, pt);
        for &(gx, gy) in &group {
            visited[gy * size + gx] = true;
        }
        if group_has_liberties(board, &group) {
            continue;
        }
        trace!(?pt, stones = group.len(), %color, "removing dead group");
        for &member in &group {
            board.put(member, Cell::Empty);
        }
        removed += group.len();
    }
    removed
}
