//! Line-oriented text protocol for driving the engine.
//!
//! Requests are one command per line, optionally prefixed by a numeric id.
//! Responses start with `=` on success or `?` on failure, followed by the id
//! (if any), a space, the message, and a blank line, in the manner of GTP.
//!
//! ## Supported Commands
//!
//! - `name` / `version` - Engine identification
//! - `list_commands` / `known_command <cmd>` - Command discovery
//! - `quit` - Exit the loop
//! - `clear_board` - Reset to the standard initial arrangement
//! - `empty_board` - Remove every piece
//! - `put <color> <piece> <square>` - Place a piece, e.g. `put white knight f4`
//! - `remove <square>` - Clear a square
//! - `genmove <color>` - Choose and play a move; answers its notation, or `none`
//! - `status <color>` - `ongoing`, `checkmate` or `stalemate`
//! - `showboard` - Dump the board
//!
//! ## Example
//!
//! ```ignore
//! use greedy_chess::protocol::Engine;
//! let mut engine = Engine::new();
//! engine.run()?;
//! ```

use std::io::{self, BufRead, Write};

use log::debug;

use crate::board::Board;
use crate::coord::Coordinate;
use crate::error::ChessError;
use crate::game::{Game, GameStatus};
use crate::piece::{Color, Piece, PieceKind};

/// The list of known commands.
const KNOWN_COMMANDS: &[&str] = &[
    "clear_board",
    "empty_board",
    "genmove",
    "known_command",
    "list_commands",
    "name",
    "put",
    "quit",
    "remove",
    "showboard",
    "status",
    "version",
];

/// Protocol engine state.
pub struct Engine {
    game: Game,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    pub fn new() -> Self {
        Self { game: Game::new() }
    }

    /// An engine whose move selector draws from a seeded source.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            game: Game::with_rng(&Board::standard(), fastrand::Rng::with_seed(seed)),
        }
    }

    /// Run the command loop on stdin/stdout until `quit` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        self.serve(stdin.lock(), &mut stdout)
    }

    /// Run the command loop over arbitrary streams.
    pub fn serve<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);
            let parts: Vec<&str> = command_line.split_whitespace().collect();
            let Some((command, args)) = parts.split_first() else {
                continue;
            };
            let command = command.to_lowercase();

            let (success, message) = match self.execute(&command, args) {
                Ok(message) => (true, message),
                Err(e) => (false, e.to_string()),
            };
            debug!("{command_line} -> {message}");
            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();

            writeln!(output, "{prefix}{id_str} {message}\n")?;
            output.flush()?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Split an optional numeric command id from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        match trimmed[..end].parse::<u32>() {
            Ok(id) => (Some(id), trimmed[end..].trim()),
            Err(_) => (None, trimmed),
        }
    }

    /// Execute a command, returning the response message.
    fn execute(&mut self, command: &str, args: &[&str]) -> anyhow::Result<String> {
        match command {
            "name" => Ok(env!("CARGO_PKG_NAME").to_string()),

            "version" => Ok(env!("CARGO_PKG_VERSION").to_string()),

            "list_commands" => Ok(KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                let [cmd] = args else {
                    anyhow::bail!("expected: known_command <cmd>");
                };
                let known = KNOWN_COMMANDS.contains(&cmd.to_lowercase().as_str());
                Ok(known.to_string())
            }

            "quit" => Ok(String::new()),

            "clear_board" => {
                self.game.set_board(&Board::standard());
                Ok(String::new())
            }

            "empty_board" => {
                self.game.set_board(&Board::empty());
                Ok(String::new())
            }

            "put" => {
                let [color, kind, square] = args else {
                    anyhow::bail!("expected: put <color> <piece> <square>");
                };
                let piece = Piece::new(color.parse::<Color>()?, kind.parse::<PieceKind>()?);
                let square: Coordinate = square.parse()?;
                let mut board = *self.game.board();
                board.place(square, piece);
                self.game.set_board(&board);
                Ok(String::new())
            }

            "remove" => {
                let [square] = args else {
                    anyhow::bail!("expected: remove <square>");
                };
                let square: Coordinate = square.parse()?;
                let mut board = *self.game.board();
                board
                    .remove(square)
                    .ok_or(ChessError::EmptySquare(square))?;
                self.game.set_board(&board);
                Ok(String::new())
            }

            "genmove" => {
                let [color] = args else {
                    anyhow::bail!("expected: genmove <color>");
                };
                let color: Color = color.parse()?;
                Ok(self
                    .game
                    .next_move(color)
                    .map_or_else(|| "none".to_string(), |mv| mv.to_notation()))
            }

            "status" => {
                let [color] = args else {
                    anyhow::bail!("expected: status <color>");
                };
                let status = match self.game.status(color.parse::<Color>()?) {
                    GameStatus::Ongoing => "ongoing",
                    GameStatus::Checkmate => "checkmate",
                    GameStatus::Stalemate => "stalemate",
                };
                Ok(status.to_string())
            }

            "showboard" => Ok(format!("\n{}", self.game.board())),

            _ => anyhow::bail!("unknown command: {command}"),
        }
    }
}
