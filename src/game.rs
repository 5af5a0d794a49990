//! Game state and turn sequencing.
//!
//! A [`Game`] is an explicit value: it is created with [`Game::new`] and only
//! changes through [`Game::place_stone`] and [`Game::pass_turn`]. Every
//! rejected call leaves it exactly as it was.
//!
//! Two deliberate simplifications relative to common rule sets:
//! - Ko only compares against the position before the last placement; there
//!   is no superko.
//! - Suicide is not rejected up front. A stone whose group has no liberties
//!   after opponent captures is removed together with that group. If that
//!   restores the previous position the move is void
//!   ([`MoveError::VoidMove`]), otherwise it stands.

use tracing::{debug, info};

use crate::board::{Board, Cell, Player, Point};
use crate::capture::remove_dead_groups;
use crate::constants::PASSES_TO_END;
use crate::error::{BoardError, MoveError};
use crate::ko::{self, KoCheck};
use crate::score::{self, Score};

/// Where the game stands between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingMove(Player),
    GameOver,
}

/// What a successful placement did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub point: Point,
    pub player: Player,
    /// Opponent stones removed and credited to `player`.
    pub captured: usize,
    /// Own stones removed by self-capture; credited to no one.
    pub self_captured: usize,
    pub ko_point: Option<Point>,
}

#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    current: Player,
    previous_board: Option<Board>,
    ko_point: Option<Point>,
    passes: u32,
    captured: [usize; 2],
    game_over: bool,
    moves: usize,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// A fresh game on the default 19x19 board.
    pub fn new() -> Self {
        Self::from_board(Board::default())
    }

    pub fn with_size(size: usize) -> Result<Self, BoardError> {
        Ok(Self::from_board(Board::new(size)?))
    }

    fn from_board(board: Board) -> Self {
        Self {
            board,
            current: Player::Black,
            previous_board: None,
            ko_point: None,
            passes: 0,
            captured: [0, 0],
            game_over: false,
            moves: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    pub fn current_player(&self) -> Player {
        self.current
    }

    pub fn phase(&self) -> Phase {
        if self.game_over {
            Phase::GameOver
        } else {
            Phase::AwaitingMove(self.current)
        }
    }

    pub fn is_over(&self) -> bool {
        self.game_over
    }

    pub fn ko_point(&self) -> Option<Point> {
        self.ko_point
    }

    pub fn passes(&self) -> u32 {
        self.passes
    }

    /// Opponent stones removed by `player`'s placements.
    pub fn captured(&self, player: Player) -> usize {
        self.captured[player.index()]
    }

    /// The board as it was before the most recent successful placement.
    pub fn previous_board(&self) -> Option<&Board> {
        self.previous_board.as_ref()
    }

    /// Number of turns taken so far, passes included.
    pub fn move_count(&self) -> usize {
        self.moves
    }

    /// Validate a placement for the player to move without playing it.
    ///
    /// Does not predict suicide; that is resolved after placement.
    pub fn check_move(&self, x: i64, y: i64) -> Result<Point, MoveError> {
        let pt = self
            .board
            .locate(x, y)
            .map_err(|_| MoveError::OutOfBounds { x, y })?;
        if !self.board.at(pt).is_empty() {
            return Err(MoveError::CellOccupied);
        }
        if self.ko_point == Some(pt) {
            return Err(MoveError::KoViolation);
        }
        Ok(pt)
    }

    pub fn is_valid_move(&self, x: i64, y: i64) -> bool {
        self.check_move(x, y).is_ok()
    }

    /// Every point that passes [`check_move`](Self::check_move), row-major.
    pub fn legal_moves(&self) -> Vec<Point> {
        self.board
            .points()
            .filter(|&pt| self.board.at(pt).is_empty() && self.ko_point != Some(pt))
            .collect()
    }

    /// Place a stone for the player to move.
    pub fn place_stone(&mut self, x: i64, y: i64) -> Result<Placement, MoveError> {
        if self.game_over {
            return Err(MoveError::GameAlreadyOver);
        }
        let pt = self.check_move(x, y)?;
        let player = self.current;

        let pre = self.board.snapshot();
        self.board.put(pt, Cell::from(player));

        let captured = remove_dead_groups(&mut self.board, player.opponent());
        let self_captured = if captured == 0 {
            remove_dead_groups(&mut self.board, player)
        } else {
            0
        };

        let ko_point = match ko::check(&pre, &self.board, pt) {
            KoCheck::Unchanged => {
                self.board = pre;
                debug!(?pt, %player, "void move: board unchanged after self-capture");
                return Err(MoveError::VoidMove);
            }
            KoCheck::Changed { ko_point } => ko_point,
        };

        self.previous_board = Some(pre);
        self.ko_point = ko_point;
        self.captured[player.index()] += captured;
        self.passes = 0;
        self.moves += 1;
        self.current = player.opponent();

        debug!(?pt, %player, captured, self_captured, ?ko_point, "stone placed");
        Ok(Placement {
            point: pt,
            player,
            captured,
            self_captured,
            ko_point,
        })
    }

    /// Pass the turn. The second consecutive pass ends the game.
    ///
    /// The ko point is left as it is.
    pub fn pass_turn(&mut self) -> Result<Phase, MoveError> {
        if self.game_over {
            return Err(MoveError::GameAlreadyOver);
        }
        self.passes += 1;
        self.moves += 1;
        if self.passes >= PASSES_TO_END {
            self.game_over = true;
            info!(score = %self.score(), "game over after consecutive passes");
        } else {
            debug!(player = %self.current, "pass");
            self.current = self.current.opponent();
        }
        Ok(self.phase())
    }

    /// Captures plus territory for each side, komi included.
    ///
    /// Can be called at any time, but only means something once the game is over.
    pub fn score(&self) -> Score {
        score::score(&self.board, self.captured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DEFAULT_SIZE, KOMI};

    #[test]
    fn test_new_game() {
        let game = Game::new();
        assert_eq!(game.size(), DEFAULT_SIZE);
        assert_eq!(game.phase(), Phase::AwaitingMove(Player::Black));
        assert_eq!(game.ko_point(), None);
        assert_eq!(game.passes(), 0);
        assert_eq!(game.captured(Player::Black), 0);
        assert_eq!(game.captured(Player::White), 0);
        assert!(game.previous_board().is_none());
    }

    #[test]
    fn test_place_alternates_players() {
        let mut game = Game::with_size(9).unwrap();
        let placement = game.place_stone(2, 3).unwrap();
        assert_eq!(placement.player, Player::Black);
        assert_eq!(placement.point, (2, 3));
        assert_eq!(game.board().get(2, 3), Ok(Cell::Black));
        assert_eq!(game.current_player(), Player::White);

        game.place_stone(3, 3).unwrap();
        assert_eq!(game.board().get(3, 3), Ok(Cell::White));
        assert_eq!(game.current_player(), Player::Black);
        assert_eq!(game.move_count(), 2);
    }

    #[test]
    fn test_previous_board_tracks_last_placement() {
        let mut game = Game::with_size(9).unwrap();
        game.place_stone(0, 0).unwrap();
        game.place_stone(1, 1).unwrap();
        let prev = game.previous_board().unwrap();
        assert_eq!(prev.get(0, 0), Ok(Cell::Black));
        assert_eq!(prev.get(1, 1), Ok(Cell::Empty));
    }

    #[test]
    fn test_rejections_leave_state_unchanged() {
        let mut game = Game::with_size(5).unwrap();
        game.place_stone(1, 1).unwrap();
        let board = game.board().clone();

        assert_eq!(game.place_stone(1, 1), Err(MoveError::CellOccupied));
        assert_eq!(
            game.place_stone(-1, 0),
            Err(MoveError::OutOfBounds { x: -1, y: 0 })
        );
        assert_eq!(
            game.place_stone(0, 5),
            Err(MoveError::OutOfBounds { x: 0, y: 5 })
        );
        assert_eq!(game.board(), &board);
        assert_eq!(game.current_player(), Player::White);
        assert_eq!(game.move_count(), 1);
    }

    #[test]
    fn test_is_valid_move() {
        let mut game = Game::with_size(5).unwrap();
        assert!(game.is_valid_move(0, 0));
        assert!(!game.is_valid_move(5, 0));
        assert!(!game.is_valid_move(0, -3));
        game.place_stone(0, 0).unwrap();
        assert!(!game.is_valid_move(0, 0));
        assert_eq!(game.legal_moves().len(), 24);
    }

    #[test]
    fn test_two_passes_end_game() {
        let mut game = Game::with_size(5).unwrap();
        assert_eq!(game.pass_turn(), Ok(Phase::AwaitingMove(Player::White)));
        assert_eq!(game.passes(), 1);
        assert_eq!(game.pass_turn(), Ok(Phase::GameOver));
        assert!(game.is_over());
        assert_eq!(game.score().as_tuple(), (0.0, KOMI));
    }

    #[test]
    fn test_placement_resets_passes() {
        let mut game = Game::with_size(5).unwrap();
        game.pass_turn().unwrap();
        game.place_stone(2, 2).unwrap();
        assert_eq!(game.passes(), 0);
        game.pass_turn().unwrap();
        assert!(!game.is_over());
        assert_eq!(game.current_player(), Player::White);
    }

    #[test]
    fn test_game_over_is_absorbing() {
        let mut game = Game::with_size(5).unwrap();
        game.pass_turn().unwrap();
        game.pass_turn().unwrap();
        let player = game.current_player();

        assert_eq!(game.pass_turn(), Err(MoveError::GameAlreadyOver));
        assert_eq!(game.place_stone(2, 2), Err(MoveError::GameAlreadyOver));
        assert_eq!(game.passes(), 2);
        assert_eq!(game.current_player(), player);
        assert_eq!(game.board().get(2, 2), Ok(Cell::Empty));
        assert_eq!(game.phase(), Phase::GameOver);
    }

    #[test]
    fn test_single_point_board_is_always_void() {
        let mut game = Game::with_size(1).unwrap();
        assert_eq!(game.place_stone(0, 0), Err(MoveError::VoidMove));
        assert_eq!(game.board().get(0, 0), Ok(Cell::Empty));
        assert_eq!(game.current_player(), Player::Black);
        assert!(game.previous_board().is_none());
    }
}
