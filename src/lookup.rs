use crate::types::{Bitboard, Square};

include!(concat!(env!("OUT_DIR"), "/lookup.rs"));

/// Squares a knight standing on `square` attacks.
pub fn knight_attacks(square: Square) -> Bitboard {
    Bitboard(KNIGHT_MAP[square])
}

/// Squares sharing a diagonal with `square` on an empty board.
pub fn diagonals(square: Square) -> Bitboard {
    Bitboard(DIAGONAL_MAP[square])
}

/// Squares strictly between `a` and `b` if they share a diagonal, otherwise an empty set.
pub fn between(a: Square, b: Square) -> Bitboard {
    Bitboard(BETWEEN_MAP[a.index() * Square::NUM + b.index()])
}
