//! Contains functions for generating the lookup masks on the fly. Knight steps are calculated
//! by left or right shift with an appropriate shift mask to avoid wrapping A/H files.
//! In the case of a 1st/8th rank wrapping, the bit is pruned after the shift,
//! so no mask is required.

const A_FILE: u64 = 0x101010101010101;
const B_FILE: u64 = A_FILE << 1;
const H_FILE: u64 = A_FILE << 7;
const G_FILE: u64 = A_FILE << 6;

const AB_FILE: u64 = A_FILE | B_FILE;
const GH_FILE: u64 = G_FILE | H_FILE;

const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub fn knight_attacks(square: u8) -> u64 {
    let bitboard = 1 << square;

    (bitboard & !A_FILE) >> 17
        | (bitboard & !A_FILE) << 15
        | (bitboard & !H_FILE) >> 15
        | (bitboard & !H_FILE) << 17
        | (bitboard & !AB_FILE) >> 10
        | (bitboard & !AB_FILE) << 6
        | (bitboard & !GH_FILE) >> 6
        | (bitboard & !GH_FILE) << 10
}

/// Every square sharing a diagonal with `square` on an empty board.
pub fn diagonal_rays(square: u8) -> u64 {
    DIAGONALS.iter().fold(0, |output, &direction| output | walk(square, direction, None))
}

/// Squares strictly between `a` and `b` when both lie on a common diagonal, otherwise empty.
pub fn diagonal_between(a: u8, b: u8) -> u64 {
    for &direction in &DIAGONALS {
        let ray = walk(a, direction, Some(b));
        if ray & (1 << b) != 0 {
            return ray & !(1 << b);
        }
    }
    0
}

fn walk(square: u8, direction: (i8, i8), stop: Option<u8>) -> u64 {
    let mut output = 0;

    let mut rank = (square / 8) as i8 + direction.0;
    let mut file = (square % 8) as i8 + direction.1;

    while (0..8).contains(&file) && (0..8).contains(&rank) {
        let index = (rank * 8 + file) as u8;
        output |= 1 << index;

        if stop == Some(index) {
            break;
        }

        rank += direction.0;
        file += direction.1;
    }

    output
}

pub fn generate_knight_map() -> Vec<u64> {
    (0..64).map(knight_attacks).collect()
}

pub fn generate_diagonal_map() -> Vec<u64> {
    (0..64).map(diagonal_rays).collect()
}

pub fn generate_between_map() -> Vec<u64> {
    (0..64).flat_map(|a| (0..64).map(move |b| diagonal_between(a, b))).collect()
}
