//! Integration tests for greedy-chess
//!
//! End-to-end games through the public `Game` API: the selector's tier
//! ordering on small hand-built positions, the two mate positions, and
//! self-play termination.

use greedy_chess::board::Board;
use greedy_chess::coord::Coordinate;
use greedy_chess::game::{Game, GameStatus};
use greedy_chess::movegen::legal_moves;
use greedy_chess::piece::{Color, Piece, PieceKind};
use greedy_chess::playout::{GameEnd, play_game};

// =============================================================================
// Helper functions for setting up test positions
// =============================================================================

fn sq(s: &str) -> Coordinate {
    Coordinate::from_algebraic(s).unwrap()
}

/// Build a board from `(square, color, kind)` triples.
fn setpos(pieces: &[(&str, Color, PieceKind)]) -> Board {
    pieces
        .iter()
        .map(|&(s, color, kind)| (sq(s), Piece::new(color, kind)))
        .collect()
}

fn seeded_game(board: &Board, seed: u64) -> Game {
    Game::with_rng(board, fastrand::Rng::with_seed(seed))
}

// =============================================================================
// Selection ladder
// =============================================================================

#[test]
fn test_game_prefers_check() {
    let board = setpos(&[
        ("d4", Color::White, PieceKind::Pawn),
        ("e6", Color::Black, PieceKind::King),
        ("a1", Color::White, PieceKind::Pawn),
        ("b2", Color::Black, PieceKind::Queen),
    ]);
    let mut game = seeded_game(&board, 1);
    let mv = game.next_move(Color::White).expect("white has moves");
    assert!(mv.in_check(Color::Black), "expected a checking move, got {mv}");
    assert_eq!(mv.to_notation(), "d5");
}

#[test]
fn test_game_prefers_capture() {
    let board = setpos(&[
        ("d4", Color::White, PieceKind::Pawn),
        ("e6", Color::Black, PieceKind::Rook),
        ("a1", Color::White, PieceKind::Pawn),
        ("b2", Color::Black, PieceKind::Queen),
    ]);
    let mut game = seeded_game(&board, 1);
    let mv = game.next_move(Color::White).expect("white has moves");
    assert_eq!(
        mv.board_after.piece_at(sq("b2")),
        Some(Piece::new(Color::White, PieceKind::Pawn))
    );
    assert_eq!(mv.to_notation(), "xb2");
    assert_eq!(game.board(), &mv.board_after);
}

#[test]
fn test_same_seed_same_game() {
    let play = |seed| {
        let mut game = seeded_game(&Board::standard(), seed);
        play_game(&mut game, 40).notation()
    };
    assert_eq!(play(2024), play(2024));
}

// =============================================================================
// Checkmate positions
// =============================================================================

#[test]
fn test_game_check_mate() {
    let board = setpos(&[
        ("f8", Color::Black, PieceKind::King),
        ("e8", Color::Black, PieceKind::Rook),
        ("g7", Color::Black, PieceKind::Pawn),
        ("f6", Color::Black, PieceKind::Pawn),
        ("d5", Color::White, PieceKind::Bishop),
        ("f4", Color::White, PieceKind::Knight),
        ("g4", Color::White, PieceKind::Pawn),
    ]);
    let mut game = Game::from_board(&board);
    let mv = game.next_move(Color::White).expect("white has moves");
    assert_eq!(mv.to_notation(), "Ng6");
    assert!(game.next_move(Color::Black).is_none());
    assert_eq!(game.status(Color::Black), GameStatus::Checkmate);
}

#[test]
fn test_game_check_mate2() {
    let board = setpos(&[
        ("h7", Color::Black, PieceKind::King),
        ("g8", Color::Black, PieceKind::Rook),
        ("f7", Color::Black, PieceKind::Pawn),
        ("d4", Color::White, PieceKind::Rook),
        ("e5", Color::White, PieceKind::Knight),
        ("f6", Color::White, PieceKind::Pawn),
    ]);
    let mut game = Game::from_board(&board);
    let mv = game.next_move(Color::White).expect("white has moves");
    assert_eq!(mv.to_notation(), "Rh4");
    assert!(game.next_move(Color::Black).is_none());
    assert_eq!(game.status(Color::Black), GameStatus::Checkmate);
}

#[test]
fn test_mate_leaves_starting_board_untouched() {
    let board = setpos(&[
        ("h7", Color::Black, PieceKind::King),
        ("g8", Color::Black, PieceKind::Rook),
        ("f7", Color::Black, PieceKind::Pawn),
        ("d4", Color::White, PieceKind::Rook),
        ("e5", Color::White, PieceKind::Knight),
        ("f6", Color::White, PieceKind::Pawn),
    ]);
    let mut game = Game::from_board(&board);
    let mv = game.next_move(Color::White).unwrap();
    assert_eq!(mv.board_before, board);
    assert_eq!(board.piece_at(sq("d4")), Some(Piece::new(Color::White, PieceKind::Rook)));
    assert!(mv.board_after.piece_at(sq("d4")).is_none());
    assert!(!legal_moves(&board, Color::Black).is_empty());
}

// =============================================================================
// Self-play
// =============================================================================

#[test]
fn test_selfplay_terminates() {
    for seed in 0..4 {
        let mut game = seeded_game(&Board::standard(), seed);
        let record = play_game(&mut game, 300);
        assert!(record.moves.len() <= 300);
        assert!(!record.moves.is_empty());
        match record.end {
            GameEnd::MoveLimit => assert_eq!(record.moves.len(), 300),
            GameEnd::OnlyKings => assert_eq!(game.pieces_left(), 2),
            GameEnd::Checkmate { loser } => {
                assert_eq!(game.status(loser), GameStatus::Checkmate)
            }
            GameEnd::Stalemate { color } => {
                assert_eq!(game.status(color), GameStatus::Stalemate)
            }
        }
        // Every recorded position is legal for the side that just moved.
        for mv in &record.moves {
            assert!(!mv.in_check(mv.piece.color), "{mv} left its own king in check");
        }
    }
}
