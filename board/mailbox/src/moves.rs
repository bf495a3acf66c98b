//! Pseudo-legal move generation for every kind of piece
//!
//! These moves follow each piece's movement pattern and the occupancy of the
//! board, without regard to whether the mover's own king ends up attacked.

use board::{BoardSquare, Color, Piece, PieceKind};

use crate::MailboxBoard;

/// The four orthogonal directions a rook slides along
const ORTHOGONAL: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// The four diagonal directions a bishop slides along
const DIAGONAL: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Every direction, for queens and kings
const EVERY_DIRECTION: [(i8, i8); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// The eight jumps a knight can make
const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// All pseudo-legal destinations for the piece on `square`
///
/// Computed fresh on every call. A vacant square yields no moves, and any
/// destination off the board is silently excluded.
pub fn pseudo_legal_moves(board: &MailboxBoard, square: BoardSquare) -> Vec<BoardSquare> {
    let Some(piece) = board.at(square) else {
        return Vec::new();
    };
    match piece.kind {
        PieceKind::King => step_moves(board, square, piece, &EVERY_DIRECTION),
        PieceKind::Knight => step_moves(board, square, piece, &KNIGHT_JUMPS),
        PieceKind::Rook => sliding_moves(board, square, piece, &ORTHOGONAL),
        PieceKind::Bishop => sliding_moves(board, square, piece, &DIAGONAL),
        PieceKind::Queen => sliding_moves(board, square, piece, &EVERY_DIRECTION),
        PieceKind::Pawn => pawn_moves(board, square, piece.color),
    }
}

/// Destinations one offset away which are empty or hold an opponent
fn step_moves(
    board: &MailboxBoard,
    origin: BoardSquare,
    piece: Piece,
    offsets: &[(i8, i8)],
) -> Vec<BoardSquare> {
    offsets
        .iter()
        .filter_map(|&(rows, cols)| origin.offset(rows, cols))
        .filter(|&target| {
            let occupant = board.at(target);
            occupant.is_none() || piece.is_opponent_of(occupant)
        })
        .collect()
}

/// Walk outward from `origin` one step at a time along each direction
///
/// An empty square is a destination and the walk continues. The first
/// occupied square stops the walk, and is a destination only when it holds
/// an opponent piece to capture.
fn sliding_moves(
    board: &MailboxBoard,
    origin: BoardSquare,
    piece: Piece,
    directions: &[(i8, i8)],
) -> Vec<BoardSquare> {
    let mut moves = Vec::new();
    for &(rows, cols) in directions {
        let mut square = origin;
        while let Some(next) = square.offset(rows, cols) {
            match board.at(next) {
                None => moves.push(next),
                occupant => {
                    if piece.is_opponent_of(occupant) {
                        moves.push(next);
                    }
                    break;
                }
            }
            square = next;
        }
    }
    moves
}

/// Pawn moves: forward steps onto empty squares, diagonal steps only to capture
///
/// The double step is gated on starting from the pawn's home row with both
/// squares ahead empty. Forward and diagonal moves are evaluated
/// independently, so no destination is counted twice.
fn pawn_moves(board: &MailboxBoard, origin: BoardSquare, color: Color) -> Vec<BoardSquare> {
    let mut moves = Vec::new();
    let step = color.pawn_step();
    let piece = Piece::new(PieceKind::Pawn, color);
    if let Some(one) = origin.offset(step, 0) {
        if board.at(one).is_none() {
            moves.push(one);
            if origin.row == color.pawn_start_row() {
                if let Some(two) = origin.offset(2 * step, 0) {
                    if board.at(two).is_none() {
                        moves.push(two);
                    }
                }
            }
        }
    }
    for cols in [-1, 1] {
        if let Some(target) = origin.offset(step, cols) {
            if piece.is_opponent_of(board.at(target)) {
                moves.push(target);
            }
        }
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashSet;

    use quickcheck::{quickcheck, Arbitrary, Gen};

    fn moves_from(board: &MailboxBoard, square: BoardSquare) -> HashSet<BoardSquare> {
        pseudo_legal_moves(board, square).into_iter().collect()
    }

    fn board_with(pieces: &[(BoardSquare, PieceKind, Color)]) -> MailboxBoard {
        let mut board = MailboxBoard::empty();
        for &(square, kind, color) in pieces {
            board.place(square, Piece::new(kind, color));
        }
        board
    }

    #[test]
    fn test_rook_stops_before_a_friendly_blocker() {
        let board = board_with(&[
            (BoardSquare::D4, PieceKind::Rook, Color::White),
            (BoardSquare::D6, PieceKind::Pawn, Color::White),
        ]);
        let moves = moves_from(&board, BoardSquare::D4);
        assert!(moves.contains(&BoardSquare::D5));
        assert!(!moves.contains(&BoardSquare::D6));
        assert!(!moves.contains(&BoardSquare::D7));
        assert!(!moves.contains(&BoardSquare::D8));
    }

    #[test]
    fn test_rook_stops_on_an_opposing_blocker() {
        let board = board_with(&[
            (BoardSquare::D4, PieceKind::Rook, Color::White),
            (BoardSquare::D6, PieceKind::Pawn, Color::Black),
        ]);
        let moves = moves_from(&board, BoardSquare::D4);
        assert!(moves.contains(&BoardSquare::D5));
        assert!(moves.contains(&BoardSquare::D6));
        assert!(!moves.contains(&BoardSquare::D7));
        assert!(!moves.contains(&BoardSquare::D8));
    }

    #[test]
    fn test_queen_covers_rook_and_bishop_lines() {
        let rook = board_with(&[(BoardSquare::E4, PieceKind::Rook, Color::White)]);
        let bishop = board_with(&[(BoardSquare::E4, PieceKind::Bishop, Color::White)]);
        let queen = board_with(&[(BoardSquare::E4, PieceKind::Queen, Color::White)]);
        let mut expected = moves_from(&rook, BoardSquare::E4);
        expected.extend(moves_from(&bishop, BoardSquare::E4));
        assert_eq!(moves_from(&queen, BoardSquare::E4), expected);
    }

    #[test]
    fn test_king_reaches_the_adjacent_squares() {
        let center = board_with(&[(BoardSquare::E4, PieceKind::King, Color::White)]);
        assert_eq!(moves_from(&center, BoardSquare::E4).len(), 8);

        let corner = board_with(&[(BoardSquare::A1, PieceKind::King, Color::White)]);
        assert_eq!(
            moves_from(&corner, BoardSquare::A1),
            HashSet::from([BoardSquare::A2, BoardSquare::B1, BoardSquare::B2]),
        );
    }

    #[test]
    fn test_knight_jumps_are_pruned_at_the_edge() {
        let board = board_with(&[(BoardSquare::A1, PieceKind::Knight, Color::White)]);
        assert_eq!(
            moves_from(&board, BoardSquare::A1),
            HashSet::from([BoardSquare::B3, BoardSquare::C2]),
        );
    }

    #[test]
    fn test_knight_jumps_over_the_pawn_rank() {
        let board = MailboxBoard::initial_state();
        assert_eq!(
            moves_from(&board, BoardSquare::B1),
            HashSet::from([BoardSquare::A3, BoardSquare::C3]),
        );
    }

    #[test]
    fn test_pawn_double_step_only_from_the_start_row() {
        let home = board_with(&[(BoardSquare::E2, PieceKind::Pawn, Color::White)]);
        assert_eq!(
            moves_from(&home, BoardSquare::E2),
            HashSet::from([BoardSquare::E3, BoardSquare::E4]),
        );

        let advanced = board_with(&[(BoardSquare::E3, PieceKind::Pawn, Color::White)]);
        assert_eq!(
            moves_from(&advanced, BoardSquare::E3),
            HashSet::from([BoardSquare::E4]),
        );
    }

    #[test]
    fn test_pawn_double_step_needs_both_squares_empty() {
        let blocked_far = board_with(&[
            (BoardSquare::E2, PieceKind::Pawn, Color::White),
            (BoardSquare::E4, PieceKind::Pawn, Color::Black),
        ]);
        assert_eq!(
            moves_from(&blocked_far, BoardSquare::E2),
            HashSet::from([BoardSquare::E3]),
        );

        let blocked_near = board_with(&[
            (BoardSquare::E2, PieceKind::Pawn, Color::White),
            (BoardSquare::E3, PieceKind::Pawn, Color::Black),
        ]);
        assert!(moves_from(&blocked_near, BoardSquare::E2).is_empty());
    }

    #[test]
    fn test_pawn_diagonals_require_an_opponent() {
        let lone = board_with(&[(BoardSquare::E2, PieceKind::Pawn, Color::White)]);
        assert_eq!(
            moves_from(&lone, BoardSquare::E2),
            HashSet::from([BoardSquare::E3, BoardSquare::E4]),
        );

        let capture = board_with(&[
            (BoardSquare::E2, PieceKind::Pawn, Color::White),
            (BoardSquare::D3, PieceKind::Rook, Color::Black),
            (BoardSquare::F3, PieceKind::Rook, Color::White),
        ]);
        let moves = moves_from(&capture, BoardSquare::E2);
        assert!(moves.contains(&BoardSquare::D3));
        assert!(!moves.contains(&BoardSquare::F3));
    }

    #[test]
    fn test_black_pawns_walk_the_other_way() {
        let board = board_with(&[(BoardSquare::E7, PieceKind::Pawn, Color::Black)]);
        assert_eq!(
            moves_from(&board, BoardSquare::E7),
            HashSet::from([BoardSquare::E6, BoardSquare::E5]),
        );
    }

    /// A square drawn uniformly from the 64 on the board
    #[derive(Clone, Copy, Debug)]
    struct SomeSquare(BoardSquare);
    impl Arbitrary for SomeSquare {
        fn arbitrary(g: &mut Gen) -> Self {
            Self(BoardSquare {
                row: u8::arbitrary(g) % 8,
                col: u8::arbitrary(g) % 8,
            })
        }
    }

    quickcheck! {
        fn test_no_destination_is_counted_twice(square: SomeSquare) -> bool {
            let moves = pseudo_legal_moves(&MailboxBoard::initial_state(), square.0);
            moves.iter().copied().collect::<HashSet<_>>().len() == moves.len()
        }

        fn test_destinations_never_hold_friendly_pieces(square: SomeSquare) -> bool {
            let board = MailboxBoard::initial_state();
            let Some(piece) = board.at(square.0) else {
                return true;
            };
            pseudo_legal_moves(&board, square.0)
                .into_iter()
                .all(|target| !board.at(target).is_some_and(|occ| occ.color == piece.color))
        }
    }
}
