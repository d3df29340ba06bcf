//! Knight and bishop threat detection.
//!
//! Knight attacks are symmetric: a knight on `a` attacks `b` iff a knight on `b` attacks `a`.
//! The evaluation relies on this and asks which squares a knight standing on the piece's own
//! square would reach, then looks for enemy knights there.

use crate::{
    board::Board,
    lookup,
    types::{Bitboard, Square},
};

/// The bishop check needs two enemy bishop candidates and fewer were available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsufficientBishops {
    pub found: usize,
}

impl std::fmt::Display for InsufficientBishops {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "bishop threat check needs two enemy bishops, found {}", self.found)
    }
}

impl std::error::Error for InsufficientBishops {}

/// Returns the on-board squares a knight standing on `square` would attack.
pub fn knight_targets(square: Square) -> Bitboard {
    lookup::knight_attacks(square)
}

/// Returns the first of the two bishop candidates sharing a diagonal with `square`.
///
/// Only the first two entries of `bishops` are considered; a bishop on the same file is never
/// aligned.
///
/// # Errors
///
/// Returns `InsufficientBishops` if fewer than two candidates are supplied.
pub fn aligned_bishop(square: Square, bishops: &[Square]) -> Result<Option<Square>, InsufficientBishops> {
    match bishops {
        [first, second, ..] => Ok([*first, *second].into_iter().find(|&bishop| is_aligned(square, bishop))),
        _ => Err(InsufficientBishops { found: bishops.len() }),
    }
}

/// Returns the first bishop, in the given order, sharing a diagonal with `square`.
pub fn aligned_bishop_any(square: Square, bishops: &[Square]) -> Option<Square> {
    bishops.iter().copied().find(|&bishop| is_aligned(square, bishop))
}

/// Checks if any piece stands strictly between two squares on a common diagonal.
pub fn blocked(a: Square, b: Square, board: &Board) -> bool {
    debug_assert!(is_aligned(a, b), "{a} and {b} do not share a diagonal");

    !(lookup::between(a, b) & board.occupancies()).is_empty()
}

/// A slope of exactly `1` or `-1` between the two squares.
fn is_aligned(square: Square, bishop: Square) -> bool {
    lookup::diagonals(square).contains(bishop)
}
