//! The text interface for a two-player game at one terminal
//!
//! Everything here is presentation: parsing typed commands, drawing the
//! board, and the prompt loop. The rules all live behind [`Game`].

use core::str::FromStr;
use std::io::{self, Write};

use board::{BoardSquare, Color, Piece, PieceKind};
use game::Game;
use mailbox::MailboxBoard;

/// One command typed at the prompt
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// End the game (`quit` or `exit`)
    Quit,
    /// Print the board again (`board`)
    ShowBoard,
    /// Print every move made so far (`history`)
    ShowHistory,
    /// Print the legal destinations from a square (`moves e2`)
    ShowMoves(BoardSquare),
    /// Move a piece (`e2 e4`)
    Move(BoardSquare, BoardSquare),
}

/// The error returned for input that is not a command
///
/// The loop reacts to this by ignoring the line and prompting again, so it
/// carries no detail.
#[derive(Debug, thiserror::Error)]
#[error("unrecognized command")]
pub struct CommandParseError;

impl FromStr for Command {
    type Err = CommandParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let command = match (words.next(), words.next(), words.next()) {
            (Some("quit" | "exit"), None, None) => Self::Quit,
            (Some("board"), None, None) => Self::ShowBoard,
            (Some("history"), None, None) => Self::ShowHistory,
            (Some("moves"), Some(square), None) => {
                Self::ShowMoves(square.parse().map_err(|_| CommandParseError)?)
            }
            (Some(source), Some(target), None) => Self::Move(
                source.parse().map_err(|_| CommandParseError)?,
                target.parse().map_err(|_| CommandParseError)?,
            ),
            _ => return Err(CommandParseError),
        };
        Ok(command)
    }
}

/// The display glyph for each piece
///
/// Total over every (kind, color) pair, with all twelve glyphs distinct.
pub const fn glyph(piece: Piece) -> char {
    match (piece.kind, piece.color) {
        (PieceKind::King, Color::White) => '♔',
        (PieceKind::Queen, Color::White) => '♕',
        (PieceKind::Rook, Color::White) => '♖',
        (PieceKind::Bishop, Color::White) => '♗',
        (PieceKind::Knight, Color::White) => '♘',
        (PieceKind::Pawn, Color::White) => '♙',
        (PieceKind::King, Color::Black) => '♚',
        (PieceKind::Queen, Color::Black) => '♛',
        (PieceKind::Rook, Color::Black) => '♜',
        (PieceKind::Bishop, Color::Black) => '♝',
        (PieceKind::Knight, Color::Black) => '♞',
        (PieceKind::Pawn, Color::Black) => '♟',
    }
}

/// Render the full board as a fixed-width text grid
///
/// Ranks are labeled 8 down to 1 on the left and files a to h along the
/// bottom, with each cell holding the glyph for its piece.
pub fn render(board: &MailboxBoard) -> String {
    const SEPARATOR: &str = "  +---+---+---+---+---+---+---+---+";
    let mut out = String::new();
    for row in 0..8u8 {
        out.push_str(SEPARATOR);
        out.push('\n');
        let cells = (0..8u8)
            .map(|col| {
                let square = BoardSquare { row, col };
                board.at(square).map_or(' ', glyph).to_string()
            })
            .collect::<Vec<_>>()
            .join(" | ");
        out.push_str(&format!("{} | {} |\n", 8 - row, cells));
    }
    out.push_str(SEPARATOR);
    out.push('\n');
    out.push_str("    a   b   c   d   e   f   g   h");
    out
}

const fn prompt(color: Color) -> &'static str {
    match color {
        Color::White => "white",
        Color::Black => "black",
    }
}

/// Drive the game from stdin until it stops
///
/// Prints the board, then repeatedly prompts the side to move for one
/// command. Unparsable input and illegal moves are ignored and the prompt
/// comes back; the board is re-rendered after each applied move.
pub fn run(game: &mut Game) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    writeln!(stdout, "{}", render(game.board()))?;
    let mut buffer = String::new();
    while game.is_running() {
        write!(stdout, "{} >> ", prompt(game.side_to_move()))?;
        stdout.flush()?;
        buffer.clear();
        if stdin.read_line(&mut buffer)? == 0 {
            // EOF ends the session like a quit
            break;
        }
        let Ok(command) = buffer.parse::<Command>() else {
            continue;
        };
        match command {
            Command::Quit => game.stop(),
            Command::ShowBoard => writeln!(stdout, "{}", render(game.board()))?,
            Command::ShowHistory => {
                for entry in game.history() {
                    writeln!(stdout, "{entry}")?;
                }
            }
            Command::ShowMoves(square) => {
                let moves = game
                    .legal_moves_from(square)
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                writeln!(stdout, "{moves}")?;
            }
            Command::Move(source, target) => {
                if game.apply_move(source, target).is_ok() {
                    writeln!(stdout, "{}", render(game.board()))?;
                }
            }
        }
    }
    Ok(())
}
