//! Greedy-Chess: a minimal chess rules engine with a greedy move selector.
//!
//! Given a position and a side to move, the engine enumerates legal moves,
//! detects check and checkmate, and picks one move by a fixed priority ladder:
//! mate, then check, then the most valuable capture, then a random quiet move.
//! Castling, en passant, underpromotion and draw rules are not modelled.
//!
//! ## Modules
//!
//! - [`constants`] - Board geometry and engine parameters
//! - [`coord`] - Squares, algebraic notation and line geometry
//! - [`piece`] - Colors, piece kinds and their movement rules
//! - [`board`] - Board snapshots, check detection and move application
//! - [`moves`] - A move with its precomputed outcome
//! - [`movegen`] - Legal move generation and mate detection
//! - [`game`] - The selection ladder and turn-taking
//! - [`playout`] - Engine-versus-engine games
//! - [`protocol`] - Line-oriented text protocol
//!
//! ## Example
//!
//! ```
//! use greedy_chess::board::Board;
//! use greedy_chess::coord::Coordinate;
//! use greedy_chess::game::Game;
//! use greedy_chess::piece::{Color, Piece, PieceKind};
//!
//! let board: Board = [
//!     ("h7", Piece::new(Color::Black, PieceKind::King)),
//!     ("g8", Piece::new(Color::Black, PieceKind::Rook)),
//!     ("f7", Piece::new(Color::Black, PieceKind::Pawn)),
//!     ("d4", Piece::new(Color::White, PieceKind::Rook)),
//!     ("e5", Piece::new(Color::White, PieceKind::Knight)),
//!     ("f6", Piece::new(Color::White, PieceKind::Pawn)),
//! ]
//! .into_iter()
//! .map(|(sq, piece)| (sq.parse::<Coordinate>().unwrap(), piece))
//! .collect();
//!
//! let mut game = Game::from_board(&board);
//! let mv = game.next_move(Color::White).unwrap();
//! assert_eq!(mv.to_notation(), "Rh4");
//! assert!(game.next_move(Color::Black).is_none());
//! ```

pub mod board;
pub mod constants;
pub mod coord;
pub mod error;
pub mod game;
pub mod movegen;
pub mod moves;
pub mod piece;
pub mod playout;
pub mod protocol;

pub use error::ChessError;
