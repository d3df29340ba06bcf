use super::Board;
use crate::types::{Color, CoordinateOutOfRange, Piece, PieceType, Square};

const EMPTY: &str = "xx";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsePositionError {
    /// The token is neither `xx` nor a `<kind><color>` pair.
    UnrecognizedToken { token: String, square: Square },
    /// The position has a token past the 8th file or the 1st rank.
    CoordinateOutOfRange(CoordinateOutOfRange),
}

impl From<CoordinateOutOfRange> for ParsePositionError {
    fn from(value: CoordinateOutOfRange) -> Self {
        Self::CoordinateOutOfRange(value)
    }
}

impl std::fmt::Display for ParsePositionError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::UnrecognizedToken { token, square } => write!(f, "unrecognized token '{token}' on {square}"),
            Self::CoordinateOutOfRange(inner) => write!(f, "{inner}"),
        }
    }
}

impl std::error::Error for ParsePositionError {}

impl std::str::FromStr for Board {
    type Err = ParsePositionError;

    /// Parses a position file: one line per rank from the 8th down to the 1st, each holding
    /// whitespace-separated tokens for files 1 to 8.
    ///
    /// Missing lines or tokens leave the remaining squares empty. Blank lines still consume
    /// a rank.
    fn from_str(position: &str) -> Result<Self, Self::Err> {
        let mut board = Self::default();

        for (row, line) in position.lines().enumerate() {
            let y = 8 - row as i32;

            for (column, token) in line.split_whitespace().enumerate() {
                let square = Square::from_coordinates(column as i32 + 1, y)?;
                if token == EMPTY {
                    continue;
                }

                board.add_piece(parse_piece(token, square)?);
            }
        }

        Ok(board)
    }
}

fn parse_piece(token: &str, square: Square) -> Result<Piece, ParsePositionError> {
    let unrecognized = || ParsePositionError::UnrecognizedToken { token: token.to_string(), square };

    let mut chars = token.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(kind), Some(color), None) => {
            let piece_type = PieceType::try_from(kind).map_err(|()| unrecognized())?;
            let color = Color::try_from(color).map_err(|()| unrecognized())?;
            Ok(Piece::new(piece_type, color, square))
        }
        _ => Err(unrecognized()),
    }
}

impl Board {
    /// Renders the board in the position file format.
    pub fn to_position(&self) -> String {
        let mut position = String::new();

        for rank in (0..8).rev() {
            let row = (0..8)
                .map(|file| match self.piece_on(Square::from_rank_file(rank, file)) {
                    Some(piece) => piece.to_string(),
                    None => EMPTY.to_string(),
                })
                .collect::<Vec<_>>();

            position.push_str(&row.join(" "));
            position.push('\n');
        }

        position
    }
}
