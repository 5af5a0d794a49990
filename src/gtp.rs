//! Go Text Protocol (GTP) front end.
//!
//! GTP is a text-based protocol for communicating with Go-playing programs.
//! This module implements the subset of GTP version 2 needed to play a game
//! against the random player from a graphical client such as Sabaki or GoGui,
//! or by hand in a terminal.
//!
//! ## Supported Commands
//!
//! - `name`, `version`, `protocol_version` - Engine identification
//! - `list_commands`, `known_command <cmd>` - Command discovery
//! - `quit` - Exit the command loop
//! - `boardsize <size>` - Start a new game on a `size`x`size` board
//! - `clear_board` - Start a new game on the current size
//! - `komi <value>` - Only the fixed komi of 6.5 is accepted
//! - `play <color> <vertex>` - Play a move (or `pass`) for the player to move.
//!   Unlike plain GTP v2, `play` for the color not on turn is rejected with
//!   `? it is <player>'s turn`; the engine only accepts stones in turn order,
//!   so clients cannot set up positions with consecutive same-color moves.
//! - `genmove <color>` - Let the random player move for the player to move
//! - `showboard` - Render the board
//! - `final_score` - Score the current position (e.g. `W+6.5`)
//! - `captures <color>` - Stones captured by a color
//!
//! Vertices use columns `A`-`Z` without `I` and rows counted from the bottom,
//! so on a 19x19 board `A19` is the top-left point `(0, 0)`.

use std::io::{self, BufRead, Write};

use anyhow::Context;
use tracing::{debug, warn};

use crate::board::{Player, Point};
use crate::constants::KOMI;
use crate::game::Game;
use crate::player::{RandomPlayer, Turn};

/// The list of known GTP commands.
const KNOWN_COMMANDS: &[&str] = &[
    "boardsize",
    "captures",
    "clear_board",
    "final_score",
    "genmove",
    "known_command",
    "komi",
    "list_commands",
    "name",
    "play",
    "protocol_version",
    "quit",
    "showboard",
    "version",
];

/// Column letters; `I` is skipped to avoid confusion with `J`.
const COLUMNS: &[u8] = b"ABCDEFGHJKLMNOPQRSTUVWXYZ";

/// A parsed GTP vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vertex {
    Pass,
    Point(Point),
}

/// Parse a vertex such as `D4` or `pass` on a board of the given size.
pub fn parse_vertex(s: &str, size: usize) -> Option<Vertex> {
    if s.eq_ignore_ascii_case("pass") {
        return Some(Vertex::Pass);
    }
    let col_char = s.as_bytes().first()?.to_ascii_uppercase();
    let x = COLUMNS.iter().position(|&c| c == col_char)?;
    let row: usize = s.get(1..)?.parse().ok()?;
    if x >= size || row == 0 || row > size {
        return None;
    }
    Some(Vertex::Point((x, size - row)))
}

/// Format a point as a GTP vertex, or `None` if it is off a `size` board.
pub fn format_vertex((x, y): Point, size: usize) -> Option<String> {
    if x >= size || y >= size {
        return None;
    }
    let col = COLUMNS.get(x)?;
    Some(format!("{}{}", *col as char, size - y))
}

fn parse_color(s: &str) -> Option<Player> {
    match s.to_ascii_lowercase().as_str() {
        "b" | "black" => Some(Player::Black),
        "w" | "white" => Some(Player::White),
        _ => None,
    }
}

/// GTP engine state.
pub struct GtpEngine {
    /// Current game
    game: Game,
    /// Move generator for `genmove`
    player: RandomPlayer,
}

impl Default for GtpEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GtpEngine {
    /// Create a new GTP engine on the default board size.
    pub fn new() -> Self {
        Self::with_player(Game::new(), RandomPlayer::new())
    }

    /// Create a GTP engine around an existing game and move generator.
    pub fn with_player(game: Game, player: RandomPlayer) -> Self {
        Self { game, player }
    }

    /// A GTP engine on a board of the given size with an optionally seeded move generator.
    pub fn with_size(size: usize, seed: Option<u64>) -> anyhow::Result<Self> {
        let game = Game::with_size(size)?;
        let player = match seed {
            Some(seed) => RandomPlayer::with_seed(seed),
            None => RandomPlayer::new(),
        };
        Ok(Self::with_player(game, player))
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Run the GTP command loop on stdin and stdout.
    pub fn run(&mut self) -> anyhow::Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(stdin.lock(), stdout.lock())
    }

    /// Run the GTP command loop until `quit` or end of input.
    pub fn run_with<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> anyhow::Result<()> {
        for line in input.lines() {
            let line = line.context("failed to read GTP command")?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            // Parse optional command ID
            let (id, command_line) = Self::parse_id(line);

            // Parse command and arguments
            let parts: Vec<&str> = command_line.split_whitespace().collect();
            if parts.is_empty() {
                continue;
            }

            let command = parts[0].to_lowercase();
            let args = &parts[1..];

            debug!(%command, ?args, "gtp command");
            let (success, message) = self.execute(&command, args);
            if !success {
                warn!(%command, %message, "gtp command failed");
            }

            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();

            write!(output, "{prefix}{id_str} {message}\n\n")
                .context("failed to write GTP response")?;
            output.flush().context("failed to flush GTP response")?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Parse an optional numeric command ID from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        if end > 0 {
            if let Ok(id) = trimmed[..end].parse::<u32>() {
                return (Some(id), trimmed[end..].trim());
            }
        }
        (None, trimmed)
    }

    /// Start a fresh game on a board of the given size.
    fn reset(&mut self, size: usize) -> Result<(), String> {
        self.game = Game::with_size(size).map_err(|err| err.to_string())?;
        Ok(())
    }

    /// Check that `color` names the player to move.
    fn expect_turn(&self, color: &str) -> Result<Player, String> {
        let player = parse_color(color).ok_or_else(|| "invalid color".to_string())?;
        if player != self.game.current_player() {
            return Err(format!("it is {}'s turn", self.game.current_player()));
        }
        Ok(player)
    }

    /// Execute a GTP command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        let result = match command {
            "name" => Ok("go-rules".to_string()),

            "version" => Ok(env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => Ok("2".to_string()),

            "list_commands" => Ok(KNOWN_COMMANDS.join("\n")),

            "known_command" => match args.first() {
                Some(cmd) => {
                    let known = KNOWN_COMMANDS.contains(&cmd.to_lowercase().as_str());
                    Ok(known.to_string())
                }
                None => Err("missing argument".to_string()),
            },

            "quit" => Ok(String::new()),

            "boardsize" => match args.first().map(|s| s.parse::<usize>()) {
                Some(Ok(size)) => self
                    .reset(size)
                    .map(|_| String::new())
                    .map_err(|_| "unacceptable size".to_string()),
                Some(Err(_)) => Err("invalid size".to_string()),
                None => Err("missing argument".to_string()),
            },

            "clear_board" => self.reset(self.game.size()).map(|_| String::new()),

            "komi" => match args.first().map(|s| s.parse::<f64>()) {
                Some(Ok(komi)) if komi == KOMI => Ok(String::new()),
                Some(Ok(_)) => Err(format!("only komi {KOMI} is supported")),
                Some(Err(_)) => Err("invalid komi".to_string()),
                None => Err("missing argument".to_string()),
            },

            "play" => self.play(args),

            "genmove" => self.genmove(args),

            "showboard" => Ok(format!("\n{}", self.game.board())),

            "final_score" => Ok(self.game.score().to_string()),

            "captures" => match args.first().map(|s| parse_color(s)) {
                Some(Some(player)) => Ok(self.game.captured(player).to_string()),
                Some(None) => Err("invalid color".to_string()),
                None => Err("missing argument".to_string()),
            },

            _ => Err(format!("unknown command: {command}")),
        };

        match result {
            Ok(message) => (true, message),
            Err(message) => (false, message),
        }
    }

    fn play(&mut self, args: &[&str]) -> Result<String, String> {
        if args.len() < 2 {
            return Err("missing arguments".to_string());
        }
        self.expect_turn(args[0])?;

        let vertex =
            parse_vertex(args[1], self.game.size()).ok_or_else(|| "invalid vertex".to_string())?;
        let result = match vertex {
            Vertex::Pass => self.game.pass_turn().map(|_| ()),
            Vertex::Point((x, y)) => self.game.place_stone(x as i64, y as i64).map(|_| ()),
        };
        result.map(|_| String::new()).map_err(|err| err.to_string())
    }

    fn genmove(&mut self, args: &[&str]) -> Result<String, String> {
        let Some(color) = args.first() else {
            return Err("missing argument".to_string());
        };
        if self.game.is_over() {
            return Ok("pass".to_string());
        }
        self.expect_turn(color)?;

        match self.player.play_turn(&mut self.game) {
            Ok(Turn::Placed(placement)) => format_vertex(placement.point, self.game.size())
                .ok_or_else(|| "invalid vertex".to_string()),
            Ok(Turn::Passed(_)) => Ok("pass".to_string()),
            Err(err) => Err(err.to_string()),
        }
    }
}
