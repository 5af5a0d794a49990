//! go-rules: a Go board-rules engine.
//!
//! This crate implements move legality, stone capture, a single-position ko
//! restriction, turn sequencing and territory scoring, plus a random-move
//! opponent and a GTP front end to play against it.
//!
//! ## Modules
//!
//! - [`constants`] - Board size limits, komi and game-flow constants
//! - [`board`] - Typed board grid with bounds-checked access
//! - [`group`] - Flood fill, groups and liberties
//! - [`capture`] - Removal of groups without liberties
//! - [`ko`] - Pre/post snapshot comparison for the ko rule
//! - [`score`] - Territory counting and final score
//! - [`game`] - Game state and the turn/pass state machine
//! - [`player`] - Uniform random move selection
//! - [`session`] - Independent games for multi-session hosts
//! - [`gtp`] - Go Text Protocol front end
//!
//! ## Example
//!
//! ```
//! use go_rules::board::{Cell, Player};
//! use go_rules::game::{Game, Phase};
//!
//! let mut game = Game::with_size(9).unwrap();
//! game.place_stone(2, 2).unwrap();
//! assert_eq!(game.board().get(2, 2), Ok(Cell::Black));
//!
//! game.pass_turn().unwrap();
//! assert_eq!(game.pass_turn(), Ok(Phase::GameOver));
//! println!("Final score: {}", game.score());
//! // The lone black stone borders every empty point
//! assert_eq!(game.score().winner(), Player::Black);
//! ```

pub mod board;
pub mod capture;
pub mod constants;
pub mod error;
pub mod game;
pub mod group;
pub mod gtp;
pub mod ko;
pub mod player;
pub mod score;
pub mod session;
