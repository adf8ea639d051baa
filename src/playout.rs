//! Engine-versus-engine games.
//!
//! A playout alternates sides, White first, asking the selector for one ply at
//! a time until a side has no move, only the two kings remain, or the ply limit
//! is hit. Every played [`Move`] keeps its before/after snapshots, so a record
//! can be replayed ply by ply.

use log::{debug, info};

use crate::game::{Game, GameStatus};
use crate::moves::Move;
use crate::piece::Color;

/// Why a playout stopped.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameEnd {
    /// The side to move was checkmated.
    Checkmate { loser: Color },
    /// The side to move had no legal move and was not in check.
    Stalemate { color: Color },
    /// Nothing but the two kings is left on the board.
    OnlyKings,
    /// The ply limit was reached.
    MoveLimit,
}

/// Moves of a finished playout and how it ended.
#[derive(Clone, Debug)]
pub struct GameRecord {
    pub moves: Vec<Move>,
    pub end: GameEnd,
}

impl GameRecord {
    /// The moves as space-separated notation.
    pub fn notation(&self) -> String {
        self.moves
            .iter()
            .map(Move::to_notation)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Play `game` to the end, at most `max_plies` plies.
pub fn play_game(game: &mut Game, max_plies: usize) -> GameRecord {
    let mut moves = Vec::new();
    let mut color = Color::White;

    let end = loop {
        if moves.len() >= max_plies {
            break GameEnd::MoveLimit;
        }
        let Some(mv) = game.next_move(color) else {
            break match game.status(color) {
                GameStatus::Checkmate => GameEnd::Checkmate { loser: color },
                _ => GameEnd::Stalemate { color },
            };
        };
        debug!("{}: {}\n{}", moves.len(), mv, game.board());
        moves.push(mv);
        if game.pieces_left() == 2 {
            break GameEnd::OnlyKings;
        }
        color = color.opponent();
    };

    info!("game over after {} plies: {:?}", moves.len(), end);
    GameRecord { moves, end }
}
