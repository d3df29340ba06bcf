use std::ops::Index;

use super::Bitboard;

/// Represents a board square corresponding to the [Little-Endian Rank-File Mapping][LERFM].
///
/// The public coordinate form is the 1-based pair `(x, y)`, where `x` is the file and `y`
/// is the rank, each in `1..=8`. A `Square` can only be built from an in-range pair, so every
/// value reaching the board or the threat detector is already on the board.
///
/// [LERFM]: https://www.chessprogramming.org/Square_Mapping_Considerations#Little-Endian_Rank-File_Mapping
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(transparent)]
pub struct Square(u8);

/// A coordinate component fell outside of `1..=8`.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct CoordinateOutOfRange {
    pub x: i32,
    pub y: i32,
}

impl Square {
    pub const NUM: usize = 64;

    /// Returns the square for the 1-based `(x, y)` coordinates.
    ///
    /// # Errors
    ///
    /// Returns `CoordinateOutOfRange` if either component is not in `1..=8`.
    pub fn from_coordinates(x: i32, y: i32) -> Result<Self, CoordinateOutOfRange> {
        if (1..=8).contains(&x) && (1..=8).contains(&y) {
            Ok(Self::from_rank_file((y - 1) as u8, (x - 1) as u8))
        } else {
            Err(CoordinateOutOfRange { x, y })
        }
    }

    pub(crate) const fn new(value: u8) -> Self {
        debug_assert!(value < Self::NUM as u8);
        Self(value)
    }

    pub(crate) const fn from_rank_file(rank: u8, file: u8) -> Self {
        Self::new((rank << 3) | file)
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Zero-based file index.
    pub const fn file(self) -> u8 {
        self.0 & 7
    }

    /// Zero-based rank index.
    pub const fn rank(self) -> u8 {
        self.0 >> 3
    }

    /// One-based file, the `x` of the coordinate pair.
    pub const fn x(self) -> i32 {
        self.file() as i32 + 1
    }

    /// One-based rank, the `y` of the coordinate pair.
    pub const fn y(self) -> i32 {
        self.rank() as i32 + 1
    }

    pub const fn to_bb(self) -> Bitboard {
        Bitboard(1 << self.0)
    }
}

impl<T> Index<Square> for [T] {
    type Output = T;

    fn index(&self, square: Square) -> &Self::Output {
        &self[square.0 as usize]
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let rank = self.rank() + b'1';
        let file = self.file() + b'a';
        write!(f, "{}{}", file as char, rank as char)
    }
}

impl std::fmt::Display for CoordinateOutOfRange {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "coordinate ({}, {}) is outside of the board", self.x, self.y)
    }
}

impl std::error::Error for CoordinateOutOfRange {}
