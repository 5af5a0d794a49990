//! go-rules: play Go against a random opponent.
//!
//! ## Usage
//!
//! - `go-rules` - Run a random self-play demo on the default board
//! - `go-rules gtp` - Start GTP server for GUI integration
//! - `go-rules demo` - Run a random self-play demo
//!
//! Logs go to stderr so they never mix with GTP responses on stdout.

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{Level, info};

use go_rules::board::Player;
use go_rules::constants::{DEFAULT_SIZE, max_game_len};
use go_rules::game::Game;
use go_rules::gtp::GtpEngine;
use go_rules::player::{RandomPlayer, Turn};

/// go-rules: a Go rules engine with a random opponent
#[derive(Parser)]
#[command(name = "go-rules")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the GTP (Go Text Protocol) server for use with GUI applications
    Gtp {
        /// Board size
        #[arg(long, default_value_t = DEFAULT_SIZE)]
        size: usize,
        /// Seed for the random move generator
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Play a random game against itself and print the result
    Demo {
        /// Board size
        #[arg(long, default_value_t = 9)]
        size: usize,
        /// Seed for the random move generator
        #[arg(long)]
        seed: Option<u64>,
        /// Stop placing stones after this many turns (default: 3 * size^2)
        #[arg(long)]
        max_moves: Option<usize>,
    },
}

fn init_logging(verbose: u8, json: bool) {
    let level = match verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let builder = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.json);

    match cli.command {
        Some(Commands::Gtp { size, seed }) => {
            let mut engine = GtpEngine::with_size(size, seed)?;
            info!(size, "starting GTP server");
            engine.run()
        }
        Some(Commands::Demo {
            size,
            seed,
            max_moves,
        }) => run_demo(size, seed, max_moves),
        None => run_demo(9, None, None),
    }
}

fn run_demo(size: usize, seed: Option<u64>, max_moves: Option<usize>) -> anyhow::Result<()> {
    let mut game = Game::with_size(size).context("cannot start demo game")?;
    let mut player = match seed {
        Some(seed) => RandomPlayer::with_seed(seed),
        None => RandomPlayer::new(),
    };
    let limit = max_moves.unwrap_or(max_game_len(size));

    println!("go-rules: random self-play on {size}x{size}\n");

    while !game.is_over() {
        if game.move_count() >= limit {
            info!(limit, "move limit reached, passing out");
            game.pass_turn()?;
            continue;
        }
        if let Turn::Placed(placement) = player.play_turn(&mut game)? {
            if placement.captured > 0 {
                info!(
                    player = %placement.player,
                    captured = placement.captured,
                    "capture"
                );
            }
        }
    }

    let score = game.score();
    println!("{}", game.board());
    println!("Moves played: {}", game.move_count());
    println!(
        "Captures: Black {}, White {}",
        game.captured(Player::Black),
        game.captured(Player::White)
    );
    println!("Black: {}, White: {}", score.black, score.white);
    println!("Result: {score}");
    Ok(())
}
