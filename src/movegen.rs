//! Legal move generation, check classification and mate detection.
//!
//! Candidates are produced target-first: for each target square (rank-major),
//! every own piece that reaches it is tried in rank-major order. Captures and
//! quiet moves are generated separately, and any candidate that leaves the
//! mover's own king in check is dropped. The enemy king is never a target.
//!
//! Generation order is observable: the move selector picks the first checking
//! or mating move found, and breaks capture ties by it.

use crate::board::Board;
use crate::constants::MATE_MIN_CHECKS;
use crate::coord::Coordinate;
use crate::moves::Move;
use crate::piece::Color;

/// Legal moves for one side, split by whether they capture.
#[derive(Clone, Debug, Default)]
pub struct MoveList {
    pub captures: Vec<Move>,
    pub quiet: Vec<Move>,
}

impl MoveList {
    pub fn len(&self) -> usize {
        self.captures.len() + self.quiet.len()
    }

    pub fn is_empty(&self) -> bool {
        self.captures.is_empty() && self.quiet.is_empty()
    }

    /// Captures first, then quiet moves.
    pub fn iter(&self) -> impl Iterator<Item = &Move> {
        self.captures.iter().chain(self.quiet.iter())
    }
}

/// Capture targets of `color`: enemy-occupied squares without the enemy king.
fn capture_targets(board: &Board, color: Color) -> Vec<Coordinate> {
    board.excluding_king(board.occupied_by(color.opponent()))
}

/// Legal candidates of `color` landing on `targets`.
///
/// `attacks` selects the attack predicate (captures) or the move predicate
/// (quiet moves).
fn candidates<'a>(
    board: &'a Board,
    color: Color,
    targets: Vec<Coordinate>,
    attacks: bool,
) -> impl Iterator<Item = Move> + 'a {
    let own = board.occupied_by(color);
    targets.into_iter().flat_map(move |to| {
        own.clone().into_iter().filter_map(move |from| {
            let piece = board.piece_at(from)?;
            let reaches = if attacks {
                piece.can_attack(from, to, board)
            } else {
                piece.can_move(from, to, board)
            };
            if !reaches {
                return None;
            }
            let mv = Move::with_piece(from, to, piece, board);
            (!mv.in_check(color)).then_some(mv)
        })
    })
}

/// Legal captures of `color`, in generation order.
pub fn legal_captures(board: &Board, color: Color) -> Vec<Move> {
    candidates(board, color, capture_targets(board, color), true).collect()
}

/// Legal non-capturing moves of `color`, in generation order.
pub fn legal_quiet_moves(board: &Board, color: Color) -> Vec<Move> {
    candidates(board, color, board.empty_squares(), false).collect()
}

/// All legal moves of `color`.
pub fn legal_moves(board: &Board, color: Color) -> MoveList {
    MoveList {
        captures: legal_captures(board, color),
        quiet: legal_quiet_moves(board, color),
    }
}

/// Does `color` have any legal move? Stops at the first one found.
pub fn has_legal_move(board: &Board, color: Color) -> bool {
    candidates(board, color, capture_targets(board, color), true)
        .chain(candidates(board, color, board.empty_squares(), false))
        .next()
        .is_some()
}

/// Moves of `color` that put the opponent's king in check.
pub fn checking_moves(moves: &MoveList, color: Color) -> Vec<Move> {
    let opponent = color.opponent();
    moves.iter().filter(|m| m.in_check(opponent)).cloned().collect()
}

/// Checking moves after which the opponent has no legal reply.
///
/// Only evaluated when at least [`MATE_MIN_CHECKS`] checking moves exist; with
/// a single checking move this returns nothing, even if that move mates.
pub fn mating_moves(checks: &[Move], color: Color) -> Vec<Move> {
    if checks.len() < MATE_MIN_CHECKS {
        return Vec::new();
    }
    let opponent = color.opponent();
    checks
        .iter()
        .filter(|m| !has_legal_move(&m.board_after, opponent))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::{Piece, PieceKind};

    fn sq(s: &str) -> Coordinate {
        s.parse().unwrap()
    }

    fn board(pieces: &[(&str, Color, PieceKind)]) -> Board {
        pieces
            .iter()
            .map(|&(s, color, kind)| (sq(s), Piece::new(color, kind)))
            .collect()
    }

    #[test]
    fn test_opening_has_twenty_moves() {
        let moves = legal_moves(&Board::standard(), Color::White);
        assert!(moves.captures.is_empty());
        assert_eq!(moves.quiet.len(), 20);
        let moves = legal_moves(&Board::standard(), Color::Black);
        assert_eq!(moves.len(), 20);
    }

    #[test]
    fn test_generation_order_is_target_first() {
        let moves = legal_quiet_moves(&Board::standard(), Color::White);
        let names: Vec<String> = moves.iter().map(|m| format!("{}{}", m.from, m.to)).collect();
        assert_eq!(&names[..4], ["b1a3", "a2a3", "b2b3", "b1c3"]);
        assert_eq!(names.last().map(String::as_str), Some("h2h4"));
    }

    #[test]
    fn test_king_never_captured() {
        let b = board(&[
            ("e1", Color::White, PieceKind::King),
            ("e4", Color::White, PieceKind::Rook),
            ("e8", Color::Black, PieceKind::King),
        ]);
        assert!(legal_captures(&b, Color::White).is_empty());
    }

    #[test]
    fn test_own_pieces_not_captured() {
        let b = board(&[
            ("a1", Color::White, PieceKind::Rook),
            ("a4", Color::White, PieceKind::Pawn),
        ]);
        assert!(legal_captures(&b, Color::White).is_empty());
        let quiet = legal_quiet_moves(&b, Color::White);
        assert!(quiet.iter().all(|m| m.to != sq("a4")));
        assert!(quiet.iter().all(|m| m.to != sq("a5") || m.from == sq("a4")));
    }

    #[test]
    fn test_pinned_piece_cannot_capture() {
        // The e2 rook is pinned against the king by the e8 rook; both of its
        // captures would open the file.
        let b = board(&[
            ("e1", Color::White, PieceKind::King),
            ("e2", Color::White, PieceKind::Rook),
            ("e8", Color::Black, PieceKind::Rook),
            ("a2", Color::Black, PieceKind::Knight),
            ("h2", Color::Black, PieceKind::Bishop),
        ]);
        let captures = legal_captures(&b, Color::White);
        assert!(captures.iter().all(|m| m.from != sq("e2") || m.to == sq("e8")));
        assert!(captures.iter().any(|m| m.to == sq("e8")));
        assert!(!captures.iter().any(|m| m.to == sq("a2") || m.to == sq("h2")));
    }

    #[test]
    fn test_self_check_filter_empties_exposed_piece() {
        let b = board(&[
            ("a1", Color::White, PieceKind::King),
            ("b2", Color::White, PieceKind::Knight),
            ("h8", Color::Black, PieceKind::Bishop),
            ("d3", Color::Black, PieceKind::Pawn),
            ("c4", Color::Black, PieceKind::Pawn),
        ]);
        let moves = legal_moves(&b, Color::White);
        assert!(moves.iter().all(|m| m.from != sq("b2")));
        assert!(moves.iter().all(|m| !m.in_check(Color::White)));
    }

    #[test]
    fn test_king_cannot_step_into_check() {
        let b = board(&[
            ("e1", Color::White, PieceKind::King),
            ("a2", Color::Black, PieceKind::Rook),
        ]);
        let moves = legal_moves(&b, Color::White);
        assert!(moves.iter().all(|m| m.to.rank() == 0));
        assert_eq!(moves.len(), 2);
    }

    #[test]
    fn test_checking_moves() {
        let b = board(&[
            ("a1", Color::White, PieceKind::Rook),
            ("h8", Color::Black, PieceKind::King),
        ]);
        let moves = legal_moves(&b, Color::White);
        let checks = checking_moves(&moves, Color::White);
        let targets: Vec<_> = checks.iter().map(|m| m.to).collect();
        assert_eq!(targets, vec![sq("h1"), sq("a8")]);
    }

    #[test]
    fn test_no_moves_without_pieces() {
        let b = board(&[("h8", Color::Black, PieceKind::King)]);
        assert!(!has_legal_move(&b, Color::White));
        assert!(legal_moves(&b, Color::White).is_empty());
        assert!(has_legal_move(&b, Color::Black));
    }

    #[test]
    fn test_has_legal_move_agrees_with_generation() {
        let b = board(&[
            ("h8", Color::Black, PieceKind::King),
            ("g6", Color::White, PieceKind::Queen),
            ("a1", Color::White, PieceKind::King),
        ]);
        // Black king on h8 with the queen on g6 is stalemated.
        assert!(!has_legal_move(&b, Color::Black));
        assert!(legal_moves(&b, Color::Black).is_empty());
        assert!(!b.king_in_check(Color::Black));
        assert!(has_legal_move(&b, Color::White));
    }

    #[test]
    fn test_single_check_never_classified_as_mate() {
        // Back-rank mate with one checking move only.
        let b = board(&[
            ("g8", Color::Black, PieceKind::King),
            ("f7", Color::Black, PieceKind::Pawn),
            ("g7", Color::Black, PieceKind::Pawn),
            ("h7", Color::Black, PieceKind::Pawn),
            ("a1", Color::White, PieceKind::Rook),
            ("b3", Color::White, PieceKind::Pawn),
            ("c2", Color::White, PieceKind::Pawn),
        ]);
        let moves = legal_moves(&b, Color::White);
        let checks = checking_moves(&moves, Color::White);
        assert_eq!(checks.len(), 1);
        assert!(!has_legal_move(&checks[0].board_after, Color::Black));
        assert!(mating_moves(&checks, Color::White).is_empty());
    }
}
