use crate::types::{Bitboard, Color, CoordinateOutOfRange, Piece, PieceType, Square};

pub use self::parser::ParsePositionError;


mod parser;

/// An insertion-ordered collection of the pieces of a single static position.
///
/// The board is built once, either piece by piece or from a position file, and is only
/// read afterwards. Nothing checks that a square holds at most one piece; lookups resolve
/// such collisions in favor of the piece that was added first.
#[derive(Clone, Default, Debug)]
pub struct Board {
    pieces: Vec<Piece>,
    occupancies: Bitboard,
}

impl Board {
    /// Returns the board described by the position file contents.
    pub fn new(position: &str) -> Result<Self, ParsePositionError> {
        position.parse()
    }

    /// Appends a piece to the board.
    pub fn add_piece(&mut self, piece: Piece) {
        self.occupancies.set(piece.square());
        self.pieces.push(piece);
    }

    /// Returns all pieces in insertion order.
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Returns a `Bitboard` for all occupied squares.
    pub fn occupancies(&self) -> Bitboard {
        self.occupancies
    }

    /// Returns the first piece, in insertion order, standing on the square.
    pub fn piece_on(&self, square: Square) -> Option<&Piece> {
        self.pieces.iter().find(|piece| piece.square() == square)
    }

    /// Same as `piece_on`, addressed by 1-based `(x, y)` coordinates.
    pub fn piece_at(&self, x: i32, y: i32) -> Result<Option<&Piece>, CoordinateOutOfRange> {
        Ok(self.piece_on(Square::from_coordinates(x, y)?))
    }

    /// Returns the squares of all bishops of the specified color in insertion order.
    pub fn bishops_of(&self, color: Color) -> Vec<Square> {
        self.pieces
            .iter()
            .filter(|piece| piece.piece_type() == PieceType::Bishop && piece.piece_color() == color)
            .map(|piece| piece.square())
            .collect()
    }
}
