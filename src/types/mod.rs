pub mod bitboard;
pub mod color;
pub mod piece;
pub mod square;

pub use bitboard::*;
pub use color::*;
pub use piece::*;
pub use square::*;
