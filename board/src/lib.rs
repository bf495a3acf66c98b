use core::{fmt, str::FromStr};

/// The types of pieces there are
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}
impl PieceKind {
    /// All the kinds of pieces there are
    pub const KINDS: [PieceKind; 6] = [
        Self::Pawn,
        Self::Rook,
        Self::Knight,
        Self::Bishop,
        Self::Queen,
        Self::King,
    ];

    /// The capitalized version of the letter used for this piece
    pub const fn letter(self) -> char {
        match self {
            Self::Pawn => 'P',
            Self::Rook => 'R',
            Self::Knight => 'N',
            Self::Bishop => 'B',
            Self::Queen => 'Q',
            Self::King => 'K',
        }
    }
}

/// The colors a piece can have
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}
impl Color {
    pub const fn other(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// The row delta a pawn of this color advances by
    ///
    /// White pawns walk towards row 0 and black pawns towards row 7.
    pub const fn pawn_step(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// The row this color's pawns start the game on
    pub const fn pawn_start_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// The row on which this color's pawns promote
    ///
    /// This is the back rank of the opposing side.
    pub const fn promotion_row(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }
}

/// A piece
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}
impl Piece {
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }

    /// The letter for this piece, capitalized for white and lowered for black
    pub const fn letter(self) -> char {
        match self.color {
            Color::White => self.kind.letter().to_ascii_uppercase(),
            Color::Black => self.kind.letter().to_ascii_lowercase(),
        }
    }

    /// Whether `other` holds a piece belonging to the opposing side
    pub fn is_opponent_of(self, other: Option<Piece>) -> bool {
        other.is_some_and(|other| other.color != self.color)
    }
}

/// Boilerplate reduction for naming all 64 squares
macro_rules! board_squares {
    ($($name:ident => ($row:expr, $col:expr)),* $(,)?) => {$(
        pub const $name: Self = Self { row: $row, col: $col };
    )*};
}

/// A square on the board
///
/// Stored as a row and column, each on `0..8`. Row 0 is rank 8 (the top of
/// the board as conventionally printed) and row 7 is rank 1, while column 0
/// is the a-file. The name codec below preserves that inversion exactly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BoardSquare {
    pub row: u8,
    pub col: u8,
}
impl BoardSquare {
    board_squares! {
        A1 => (7, 0), B1 => (7, 1), C1 => (7, 2), D1 => (7, 3),
        E1 => (7, 4), F1 => (7, 5), G1 => (7, 6), H1 => (7, 7),
        A2 => (6, 0), B2 => (6, 1), C2 => (6, 2), D2 => (6, 3),
        E2 => (6, 4), F2 => (6, 5), G2 => (6, 6), H2 => (6, 7),
        A3 => (5, 0), B3 => (5, 1), C3 => (5, 2), D3 => (5, 3),
        E3 => (5, 4), F3 => (5, 5), G3 => (5, 6), H3 => (5, 7),
        A4 => (4, 0), B4 => (4, 1), C4 => (4, 2), D4 => (4, 3),
        E4 => (4, 4), F4 => (4, 5), G4 => (4, 6), H4 => (4, 7),
        A5 => (3, 0), B5 => (3, 1), C5 => (3, 2), D5 => (3, 3),
        E5 => (3, 4), F5 => (3, 5), G5 => (3, 6), H5 => (3, 7),
        A6 => (2, 0), B6 => (2, 1), C6 => (2, 2), D6 => (2, 3),
        E6 => (2, 4), F6 => (2, 5), G6 => (2, 6), H6 => (2, 7),
        A7 => (1, 0), B7 => (1, 1), C7 => (1, 2), D7 => (1, 3),
        E7 => (1, 4), F7 => (1, 5), G7 => (1, 6), H7 => (1, 7),
        A8 => (0, 0), B8 => (0, 1), C8 => (0, 2), D8 => (0, 3),
        E8 => (0, 4), F8 => (0, 5), G8 => (0, 6), H8 => (0, 7),
    }

    /// Produce a square from the given row and column, if both are in range
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// The rank (1 to 8) this square sits on
    pub const fn rank(self) -> u8 {
        8 - self.row
    }

    /// The file letter (a to h) this square sits on
    pub const fn file(self) -> char {
        (b'a' + self.col) as char
    }

    /// Offset the given number of rows and columns
    ///
    /// Positive rows move towards rank 1 and positive columns towards the
    /// h-file. A result off the board is `None`, never an error.
    ///
    /// ```
    /// use board::BoardSquare;
    /// assert_eq!(BoardSquare::E2.offset(-2, 0), Some(BoardSquare::E4));
    /// assert_eq!(BoardSquare::F7.offset(0, 0), Some(BoardSquare::F7));
    /// assert_eq!(BoardSquare::A1.offset(1, 0), None);
    /// assert_eq!(BoardSquare::H8.offset(0, 1), None);
    /// ```
    pub const fn offset(self, rows: i8, cols: i8) -> Option<Self> {
        let row = self.row as i8 + rows;
        let col = self.col as i8 + cols;
        if 0 <= row && row < 8 && 0 <= col && col < 8 {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// An iterator over all valid squares on the board
    ///
    /// ```
    /// assert_eq!(board::BoardSquare::all_squares().count(), 64);
    /// ```
    pub fn all_squares() -> impl Iterator<Item = Self> {
        (0..8).flat_map(|row| (0..8).map(move |col| Self { row, col }))
    }
}
impl fmt::Display for BoardSquare {
    /// ```
    /// assert_eq!(board::BoardSquare::E4.to_string(), "e4");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

/// The error returned when a square name fails to parse
#[derive(Debug, thiserror::Error)]
#[error("square name was not a file in a-h followed by a rank in 1-8")]
pub struct SquareParseError;

impl FromStr for BoardSquare {
    type Err = SquareParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let &[file, rank] = s.trim().as_bytes() else {
            return Err(SquareParseError);
        };
        let col = match file.to_ascii_lowercase() {
            b @ b'a'..=b'h' => b - b'a',
            _ => return Err(SquareParseError),
        };
        let row = match rank {
            b @ b'1'..=b'8' => 8 - (b - b'0'),
            _ => return Err(SquareParseError),
        };
        Ok(Self { row, col })
    }
}
