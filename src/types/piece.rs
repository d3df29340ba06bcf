use super::{Color, Square};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceType {
    /// Base material value of the piece type.
    pub const fn value(self) -> f64 {
        match self {
            Self::Pawn => 1.0,
            Self::Knight => 3.0,
            Self::Bishop => 3.0,
            Self::Rook => 5.0,
            Self::Queen => 9.0,
            Self::King => 100.0,
        }
    }

    /// The kind letter used by the position file format.
    pub const fn symbol(self) -> char {
        match self {
            Self::Pawn => 'p',
            Self::Knight => 'a',
            Self::Bishop => 'f',
            Self::Rook => 'k',
            Self::Queen => 'v',
            Self::King => 's',
        }
    }
}

impl TryFrom<char> for PieceType {
    type Error = ();

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'p' => Ok(Self::Pawn),
            'a' => Ok(Self::Knight),
            'f' => Ok(Self::Bishop),
            'k' => Ok(Self::Rook),
            'v' => Ok(Self::Queen),
            's' => Ok(Self::King),
            _ => Err(()),
        }
    }
}

/// A piece placed on the board. Immutable once created.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Piece {
    piece_type: PieceType,
    color: Color,
    square: Square,
}

impl Piece {
    pub const fn new(piece_type: PieceType, color: Color, square: Square) -> Self {
        Self { piece_type, color, square }
    }

    pub const fn piece_type(self) -> PieceType {
        self.piece_type
    }

    pub const fn piece_color(self) -> Color {
        self.color
    }

    pub const fn square(self) -> Square {
        self.square
    }

    pub const fn value(self) -> f64 {
        self.piece_type.value()
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.piece_type.symbol(), self.color.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::{Piece, PieceType};
    use crate::types::{Color, Square};

    #[test]
    fn values_follow_the_piece_type() {
        let square = Square::from_coordinates(1, 1).unwrap();
        let values = [
            (PieceType::Pawn, 1.0),
            (PieceType::Knight, 3.0),
            (PieceType::Bishop, 3.0),
            (PieceType::Rook, 5.0),
            (PieceType::Queen, 9.0),
            (PieceType::King, 100.0),
        ];

        for (piece_type, value) in values {
            assert_eq!(Piece::new(piece_type, Color::White, square).value(), value);
            assert_eq!(Piece::new(piece_type, Color::Black, square).value(), value);
        }
    }

    #[test]
    fn symbols_round_trip() {
        for symbol in ['p', 'a', 'f', 'k', 'v', 's'] {
            let piece_type = PieceType::try_from(symbol).unwrap();
            assert_eq!(piece_type.symbol(), symbol);
        }
        assert!(PieceType::try_from('x').is_err());
    }
}
