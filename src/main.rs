//! Greedy-Chess: a minimal chess rules engine.
//!
//! ## Usage
//!
//! - `greedy-chess` - Play the demo mate positions
//! - `greedy-chess selfplay [--seed N] [--max-plies N]` - Engine-versus-engine game
//! - `greedy-chess protocol` - Start the text command loop on stdin/stdout
//!
//! Set `RUST_LOG=debug` to trace every selected move.

use anyhow::Result;
use clap::{Parser, Subcommand};

use greedy_chess::board::Board;
use greedy_chess::constants::MAX_GAME_LEN;
use greedy_chess::coord::Coordinate;
use greedy_chess::game::Game;
use greedy_chess::piece::{Color, Piece, PieceKind};
use greedy_chess::playout::play_game;
use greedy_chess::protocol::Engine;

/// Greedy-Chess: a minimal chess rules engine with a greedy move selector
#[derive(Parser)]
#[command(name = "greedy-chess")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a full engine-versus-engine game from the initial position
    Selfplay {
        /// Seed for the quiet-move choice (random if omitted)
        #[arg(long)]
        seed: Option<u64>,
        /// Stop after this many plies
        #[arg(long, default_value_t = MAX_GAME_LEN)]
        max_plies: usize,
    },
    /// Start the text command loop
    Protocol {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Play the demo mate positions
    Demo,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Selfplay { seed, max_plies }) => run_selfplay(seed, max_plies),
        Some(Commands::Protocol { seed }) => {
            let mut engine = match seed {
                Some(seed) => Engine::with_seed(seed),
                None => Engine::new(),
            };
            engine.run()?;
        }
        Some(Commands::Demo) | None => run_demo()?,
    }
    Ok(())
}

fn run_selfplay(seed: Option<u64>, max_plies: usize) {
    let rng = seed.map_or_else(fastrand::Rng::new, fastrand::Rng::with_seed);
    let mut game = Game::with_rng(&Board::standard(), rng);
    let record = play_game(&mut game, max_plies);

    for (i, mv) in record.moves.iter().enumerate() {
        println!("{i}: {mv}");
    }
    println!("{}", game.board());
    println!("game over: {:?}", record.end);
}

fn run_demo() -> Result<()> {
    println!("Greedy-Chess: minimal chess rules engine\n");

    let positions: [&[(&str, Color, PieceKind)]; 2] = [
        &[
            ("f8", Color::Black, PieceKind::King),
            ("e8", Color::Black, PieceKind::Rook),
            ("g7", Color::Black, PieceKind::Pawn),
            ("f6", Color::Black, PieceKind::Pawn),
            ("d5", Color::White, PieceKind::Bishop),
            ("f4", Color::White, PieceKind::Knight),
            ("g4", Color::White, PieceKind::Pawn),
        ],
        &[
            ("h7", Color::Black, PieceKind::King),
            ("g8", Color::Black, PieceKind::Rook),
            ("f7", Color::Black, PieceKind::Pawn),
            ("d4", Color::White, PieceKind::Rook),
            ("e5", Color::White, PieceKind::Knight),
            ("f6", Color::White, PieceKind::Pawn),
        ],
    ];

    for pieces in positions {
        let board = pieces
            .iter()
            .map(|&(sq, color, kind)| -> Result<(Coordinate, Piece)> {
                Ok((sq.parse()?, Piece::new(color, kind)))
            })
            .collect::<Result<Board>>()?;
        println!("{board}");

        let mut game = Game::from_board(&board);
        match game.next_move(Color::White) {
            Some(mv) => println!("White plays {mv}"),
            None => println!("White has no move"),
        }
        println!("{}", game.board());
        println!("Black to move: {:?}\n", game.status(Color::Black));
    }
    Ok(())
}
