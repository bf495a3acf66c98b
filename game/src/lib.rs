//! Turn orchestration on top of the board
//!
//! A [`Game`] owns one board, tracks whose turn it is, and records every
//! applied move. The surrounding text interface drives it through these
//! operations and nothing else.

use core::fmt;

use board::{BoardSquare, Color};
use mailbox::MailboxBoard;

pub use mailbox::IllegalMove;

/// One applied move, recorded as its source and destination squares
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    pub source: BoardSquare,
    pub target: BoardSquare,
}
impl fmt::Display for HistoryEntry {
    /// ```
    /// use board::BoardSquare;
    /// let entry = game::HistoryEntry {
    ///     source: BoardSquare::E2,
    ///     target: BoardSquare::E4,
    /// };
    /// assert_eq!(entry.to_string(), "e2 -> e4");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.target)
    }
}

/// A two-player game in progress
pub struct Game {
    board: MailboxBoard,
    side_to_move: Color,
    history: Vec<HistoryEntry>,
    running: bool,
}

impl Game {
    /// Start a game from the standard position, white to move
    pub fn new() -> Self {
        Self {
            board: MailboxBoard::initial_state(),
            side_to_move: Color::White,
            history: Vec::new(),
            running: true,
        }
    }

    pub fn board(&self) -> &MailboxBoard {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Every applied move, oldest first
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// End the game; the command loop exits after this
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// All pseudo-legal destinations from `square`, or none if it is vacant
    pub fn legal_moves_from(&self, square: BoardSquare) -> Vec<BoardSquare> {
        self.board.legal_moves_from(square)
    }

    /// Apply a move for the side whose turn it is
    ///
    /// On top of the board's own checks this rejects moving a piece that
    /// does not belong to the side to move. On success the move is appended
    /// to the history and the turn flips; the turn never flips on a
    /// rejected move.
    pub fn apply_move(
        &mut self,
        source: BoardSquare,
        target: BoardSquare,
    ) -> Result<(), IllegalMove> {
        match self.board.at(source) {
            Some(piece) if piece.color == self.side_to_move => {}
            _ => return Err(IllegalMove),
        }
        self.board.apply_move(source, target)?;
        self.history.push(HistoryEntry { source, target });
        self.side_to_move = self.side_to_move.other();
        Ok(())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turns_alternate_only_on_applied_moves() {
        let mut game = Game::new();
        game.apply_move(BoardSquare::E2, BoardSquare::E4).unwrap();
        assert_eq!(game.side_to_move(), Color::Black);

        // The square just vacated has nothing left to move
        assert!(game.apply_move(BoardSquare::E2, BoardSquare::E4).is_err());
        assert_eq!(game.side_to_move(), Color::Black);

        game.apply_move(BoardSquare::E7, BoardSquare::E5).unwrap();
        assert_eq!(game.side_to_move(), Color::White);
    }

    #[test]
    fn test_moving_the_opponents_piece_is_rejected() {
        let mut game = Game::new();
        assert!(game.apply_move(BoardSquare::E7, BoardSquare::E5).is_err());
        assert_eq!(game.side_to_move(), Color::White);
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_history_records_moves_in_order() {
        let mut game = Game::new();
        game.apply_move(BoardSquare::E2, BoardSquare::E4).unwrap();
        game.apply_move(BoardSquare::E7, BoardSquare::E5).unwrap();
        game.apply_move(BoardSquare::G1, BoardSquare::F3).unwrap();
        assert_eq!(
            game.history()
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>(),
            ["e2 -> e4", "e7 -> e5", "g1 -> f3"],
        );
    }

    #[test]
    fn test_rejected_moves_leave_no_history() {
        let mut game = Game::new();
        assert!(game.apply_move(BoardSquare::A1, BoardSquare::A4).is_err());
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_stop_clears_the_running_flag() {
        let mut game = Game::new();
        assert!(game.is_running());
        game.stop();
        assert!(!game.is_running());
    }
}
