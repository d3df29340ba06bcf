use std::ops::{BitAnd, BitOr};

use super::Square;

/// Represents a 64-bit unsigned integer with each bit indicating square occupancy.
///
/// See [Bitboards](https://www.chessprogramming.org/Bitboards) for more information.
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug)]
#[repr(transparent)]
pub struct Bitboard(pub u64);

impl Bitboard {
    /// Checks if the bitboard has zero bits set.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn contains(self, square: Square) -> bool {
        self.0 & square.to_bb().0 != 0
    }

    /// Counts the number of set bits in the bitboard.
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns the least significant set bit. The bitboard must not be empty.
    const fn lsb(self) -> Square {
        Square::new(self.0.trailing_zeros() as u8)
    }

    /// Sets the bit corresponding to the specified square.
    pub fn set(&mut self, square: Square) {
        self.0 |= square.to_bb().0;
    }
}

impl Iterator for Bitboard {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_empty() {
            None
        } else {
            let lsb = self.lsb();
            self.0 &= self.0 - 1;
            Some(lsb)
        }
    }
}

impl BitAnd for Bitboard {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self(self.0 & rhs.0)
    }
}

impl BitOr for Bitboard {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::{Bitboard, Square};

    #[test]
    fn iterates_squares_from_a1_up() {
        let a1 = Square::from_coordinates(1, 1).unwrap();
        let e4 = Square::from_coordinates(5, 4).unwrap();
        let h8 = Square::from_coordinates(8, 8).unwrap();

        let bitboard = h8.to_bb() | a1.to_bb() | e4.to_bb();
        assert_eq!(bitboard.collect::<Vec<_>>(), vec![a1, e4, h8]);
    }

    #[test]
    fn empty_bitboard_yields_nothing() {
        assert_eq!(Bitboard::default().next(), None);
        assert_eq!(Bitboard::default().count(), 0);
    }
}
