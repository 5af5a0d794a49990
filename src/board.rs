//! The board grid: typed cells in a flat row-major buffer.
//!
//! Public accessors take signed coordinates and return [`BoardError`] when the
//! point falls off the board, so negative input is a rejection rather than a
//! panic. [`Point`]s are plain `(x, y)` pairs; [`Board::cell`] and
//! [`Board::neighbors`] check them against the board before reading, so a
//! point from a different board never aliases another cell.

use std::fmt;

use crate::constants::{DEFAULT_SIZE, MAX_SIZE, MIN_SIZE};
use crate::error::BoardError;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    Black,
    White,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Player::Black => 0,
            Player::White => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Black => write!(f, "Black"),
            Player::White => write!(f, "White"),
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// The player owning the stone on this cell, if any.
    pub fn stone(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Player::Black),
            Cell::White => Some(Player::White),
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }
}

/// An `(x, y)` coordinate: column, then row counted from the top.
pub type Point = (usize, usize);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Default for Board {
    fn default() -> Self {
        Self::blank(DEFAULT_SIZE)
    }
}

impl Board {
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
            return Err(BoardError::UnsupportedSize(size));
        }
        Ok(Self::blank(size))
    }

    fn blank(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn idx(&self, (x, y): Point) -> usize {
        debug_assert!(self.contains((x, y)));
        y * self.size + x
    }

    pub fn contains(&self, (x, y): Point) -> bool {
        x < self.size && y < self.size
    }

    /// Convert signed coordinates into a [`Point`], checking bounds.
    pub fn locate(&self, x: i64, y: i64) -> Result<Point, BoardError> {
        let size = self.size as i64;
        if x < 0 || y < 0 || x >= size || y >= size {
            return Err(BoardError::OutOfBounds {
                x,
                y,
                size: self.size,
            });
        }
        Ok((x as usize, y as usize))
    }

    pub fn get(&self, x: i64, y: i64) -> Result<Cell, BoardError> {
        let pt = self.locate(x, y)?;
        Ok(self.at(pt))
    }

    pub fn set(&mut self, x: i64, y: i64, cell: Cell) -> Result<(), BoardError> {
        let pt = self.locate(x, y)?;
        self.put(pt, cell);
        Ok(())
    }

    /// Read a cell by point, or `None` if the point is off the board.
    pub fn cell(&self, pt: Point) -> Option<Cell> {
        self.contains(pt).then(|| self.at(pt))
    }

    /// Unchecked read for points produced by this board.
    pub(crate) fn at(&self, pt: Point) -> Cell {
        self.cells[self.idx(pt)]
    }

    pub(crate) fn put(&mut self, pt: Point, cell: Cell) {
        let i = self.idx(pt);
        self.cells[i] = cell;
    }

    /// In-bounds cardinal neighbors, always in the order west, east, north, south.
    ///
    /// An off-board point has no neighbors.
    pub fn neighbors(&self, (x, y): Point) -> impl Iterator<Item = Point> + use<> {
        let s = self.size;
        let on_board = self.contains((x, y));
        [
            (on_board && x > 0).then(|| (x - 1, y)),
            (on_board && x + 1 < s).then(|| (x + 1, y)),
            (on_board && y > 0).then(|| (x, y - 1)),
            (on_board && y + 1 < s).then(|| (x, y + 1)),
        ]
        .into_iter()
        .flatten()
    }

    /// Every point on the board in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> + use<> {
        let s = self.size;
        (0..s).flat_map(move |y| (0..s).map(move |x| (x, y)))
    }

    /// An independent copy of the grid for later comparison.
    pub fn snapshot(&self) -> Board {
        self.clone()
    }

    /// Points whose contents differ between the two boards, row-major.
    ///
    /// Boards of different sizes differ everywhere on `self`.
    pub fn diff(&self, other: &Board) -> Vec<Point> {
        if self.size != other.size {
            return self.points().collect();
        }
        self.points()
            .filter(|&pt| self.at(pt) != other.at(pt))
            .collect()
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.size {
            for x in 0..self.size {
                let ch = match self.at((x, y)) {
                    Cell::Black => 'X',
                    Cell::White => 'O',
                    Cell::Empty => '.',
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
impl Board {
    /// Build a square board from rows of `X` (black), `O` (white) and `.`.
    pub(crate) fn from_rows(rows: &[&str]) -> Board {
        let mut board = Board::new(rows.len()).unwrap();
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                let cell = match ch {
                    'X' => Cell::Black,
                    'O' => Cell::White,
                    _ => Cell::Empty,
                };
                board.put((x, y), cell);
            }
        }
        board
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(9).unwrap();
        assert_eq!(board.size(), 9);
        assert_eq!(board.count(Cell::Empty), 81);
        assert!(board.points().all(|pt| board.cell(pt) == Some(Cell::Empty)));
    }

    #[test]
    fn test_default_board() {
        assert_eq!(Board::default(), Board::new(DEFAULT_SIZE).unwrap());
    }

    #[test]
    fn test_unsupported_sizes() {
        assert_eq!(Board::new(0), Err(BoardError::UnsupportedSize(0)));
        assert_eq!(
            Board::new(MAX_SIZE + 1),
            Err(BoardError::UnsupportedSize(MAX_SIZE + 1))
        );
        assert!(Board::new(MAX_SIZE).is_ok());
    }

    #[test]
    fn test_get_set_bounds() {
        let mut board = Board::new(5).unwrap();
        board.set(4, 0, Cell::White).unwrap();
        assert_eq!(board.get(4, 0), Ok(Cell::White));

        assert_eq!(
            board.get(-1, 0),
            Err(BoardError::OutOfBounds { x: -1, y: 0, size: 5 })
        );
        assert_eq!(
            board.set(2, 5, Cell::Black),
            Err(BoardError::OutOfBounds { x: 2, y: 5, size: 5 })
        );
        assert_eq!(board.count(Cell::Black), 0);
    }

    #[test]
    fn test_neighbors_order() {
        let board = Board::new(5).unwrap();
        let center: Vec<Point> = board.neighbors((2, 2)).collect();
        assert_eq!(center, vec![(1, 2), (3, 2), (2, 1), (2, 3)]);

        let corner: Vec<Point> = board.neighbors((0, 0)).collect();
        assert_eq!(corner, vec![(1, 0), (0, 1)]);

        let edge: Vec<Point> = board.neighbors((4, 2)).collect();
        assert_eq!(edge, vec![(3, 2), (4, 1), (4, 3)]);
    }

    #[test]
    fn test_off_board_points_are_rejected() {
        let mut board = Board::new(5).unwrap();
        board.set(0, 1, Cell::Black).unwrap();

        // (5, 0) would alias (0, 1) in the flat buffer
        assert!(!board.contains((5, 0)));
        assert_eq!(board.cell((5, 0)), None);
        assert_eq!(board.cell((9, 9)), None);
        assert_eq!(board.cell((0, 1)), Some(Cell::Black));
        assert_eq!(board.neighbors((5, 0)).count(), 0);
        assert_eq!(board.neighbors((9, 9)).count(), 0);
    }

    #[test]
    fn test_single_point_board_has_no_neighbors() {
        let board = Board::new(1).unwrap();
        assert_eq!(board.neighbors((0, 0)).count(), 0);
    }

    #[test]
    fn test_points_row_major() {
        let board = Board::new(2).unwrap();
        let pts: Vec<Point> = board.points().collect();
        assert_eq!(pts, vec![(0, 0), (1, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut board = Board::new(5).unwrap();
        let snap = board.snapshot();
        board.set(1, 1, Cell::Black).unwrap();

        assert_eq!(snap.get(1, 1), Ok(Cell::Empty));
        assert_ne!(board, snap);
        assert_eq!(board.diff(&snap), vec![(1, 1)]);
    }

    #[test]
    fn test_display() {
        let board = Board::from_rows(&["X..", "..O", "..."]);
        assert_eq!(board.to_string(), "X . . \n. . O \n. . . \n");
    }

    #[test]
    fn test_cell_stone() {
        assert_eq!(Cell::from(Player::Black).stone(), Some(Player::Black));
        assert_eq!(Cell::from(Player::White).stone(), Some(Player::White));
        assert_eq!(Cell::Empty.stone(), None);
        assert_eq!(Player::Black.opponent(), Player::White);
    }
}
