use core::fmt;

use board::{BoardSquare, Color, Piece, PieceKind};

pub mod moves;

pub use moves::pseudo_legal_moves;

/// The error returned for any rejected move
///
/// Every failure mode (vacant source, self-capture, movement-rule violation)
/// collapses into this one undifferentiated error; no cause detail is
/// surfaced.
#[derive(Debug, thiserror::Error)]
#[error("illegal move")]
pub struct IllegalMove;

/// An 8x8 grid holding at most one piece per square
///
/// The board owns every piece on it exclusively. All mutation goes through
/// [`Self::apply_move`], so a rejected move never leaves partial state
/// behind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MailboxBoard {
    grid: [[Option<Piece>; 8]; 8],
}

impl MailboxBoard {
    /// The standard starting position
    ///
    /// Pawns fill rows 1 and 6, with the back ranks in
    /// rook-knight-bishop-queen-king-bishop-knight-rook order. Black sits on
    /// row 0 and white on row 7.
    pub fn initial_state() -> Self {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        let mut grid: [[Option<Piece>; 8]; 8] = [[None; 8]; 8];
        for col in 0..8 {
            grid[1][col] = Some(Piece::new(PieceKind::Pawn, Color::Black));
            grid[6][col] = Some(Piece::new(PieceKind::Pawn, Color::White));
        }
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            grid[0][col] = Some(Piece::new(kind, Color::Black));
            grid[7][col] = Some(Piece::new(kind, Color::White));
        }
        Self { grid }
    }

    /// A board with no pieces on it, for building up test positions
    pub(crate) const fn empty() -> Self {
        Self {
            grid: [[None; 8]; 8],
        }
    }

    pub(crate) fn place(&mut self, square: BoardSquare, piece: Piece) {
        self.grid[square.row as usize][square.col as usize] = Some(piece);
    }

    /// The piece on the given square, if any
    pub fn at(&self, square: BoardSquare) -> Option<Piece> {
        self.grid[square.row as usize][square.col as usize]
    }

    /// All pseudo-legal destinations from `square`, or none if it is vacant
    pub fn legal_moves_from(&self, square: BoardSquare) -> Vec<BoardSquare> {
        moves::pseudo_legal_moves(self, square)
    }

    /// Move the piece on `source` to `target`
    ///
    /// The one mutating entry point. The move is rejected when `source` is
    /// vacant, when `target` holds a piece of the mover's own color, or when
    /// `target` is not among the mover's pseudo-legal destinations. On
    /// success the piece relocates, capturing whatever stood on `target`,
    /// and a pawn reaching the far back rank is replaced by a queen of its
    /// color. A rejected move leaves the board untouched.
    pub fn apply_move(
        &mut self,
        source: BoardSquare,
        target: BoardSquare,
    ) -> Result<(), IllegalMove> {
        let piece = self.at(source).ok_or(IllegalMove)?;
        if self
            .at(target)
            .is_some_and(|occupant| occupant.color == piece.color)
        {
            return Err(IllegalMove);
        }
        if !moves::pseudo_legal_moves(self, source).contains(&target) {
            return Err(IllegalMove);
        }
        let moved = if piece.kind == PieceKind::Pawn && target.row == piece.color.promotion_row() {
            Piece::new(PieceKind::Queen, piece.color)
        } else {
            piece
        };
        self.grid[target.row as usize][target.col as usize] = Some(moved);
        self.grid[source.row as usize][source.col as usize] = None;
        Ok(())
    }

    /// How many pieces of the given color are on the board
    pub fn piece_count(&self, color: Color) -> usize {
        BoardSquare::all_squares()
            .filter(|&square| self.at(square).is_some_and(|piece| piece.color == color))
            .count()
    }
}

impl Default for MailboxBoard {
    fn default() -> Self {
        Self::initial_state()
    }
}

/// Display as a grid of piece letters, rank 8 at the top
///
/// ```
/// assert_eq!(
///     mailbox::MailboxBoard::initial_state().to_string(),
///     "rnbqkbnr\npppppppp\n........\n........\n........\n........\nPPPPPPPP\nRNBQKBNR\n",
/// );
/// ```
impl fmt::Display for MailboxBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;
        for row in &self.grid {
            for cell in row {
                f.write_char(cell.map_or('.', Piece::letter))?;
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}
