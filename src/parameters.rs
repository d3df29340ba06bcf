/// Starting score of each side: 8 pawns, 2 knights, 2 bishops, 2 rooks, a queen and a king.
///
/// The score is not recomputed from the pieces actually present on the board.
pub const BASE_SCORE: f64 = 8.0 * 1.0 + 2.0 * 3.0 + 2.0 * 3.0 + 2.0 * 5.0 + 9.0 + 100.0;

/// A threatened piece costs its side `value / THREAT_DIVISOR` per threat.
pub const THREAT_DIVISOR: f64 = 2.0;

/// Which enemy bishops take part in the bishop threat check.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum BishopScan {
    /// The first two enemy bishops in insertion order. Exactly one enemy bishop is an error.
    FirstPair,
    /// Every enemy bishop.
    All,
}

impl Default for BishopScan {
    fn default() -> Self {
        if cfg!(feature = "all-bishops") {
            Self::All
        } else {
            Self::FirstPair
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct Options {
    pub bishop_scan: BishopScan,
}

#[cfg(test)]
mod tests {
    use super::BASE_SCORE;

    #[test]
    fn base_score() {
        assert_eq!(BASE_SCORE, 139.0);
    }
}
