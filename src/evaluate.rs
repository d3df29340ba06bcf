use crate::{
    board::Board,
    parameters::{BishopScan, Options, BASE_SCORE, THREAT_DIVISOR},
    threats::{aligned_bishop, aligned_bishop_any, blocked, knight_targets, InsufficientBishops},
    types::{Color, Piece, PieceType, Square},
};

/// The attacker responsible for a penalty.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Threat {
    /// An enemy knight on the square.
    Knight(Square),
    /// An unblocked enemy bishop on the square.
    Bishop(Square),
}

/// A single deduction from the score of the threatened piece's side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Penalty {
    pub piece: Piece,
    pub threat: Threat,
    pub amount: f64,
}

/// Returns `(white_score, black_score)` using the default `Options`.
///
/// # Errors
///
/// Returns `InsufficientBishops` if a bishop check runs against a side with exactly one bishop.
pub fn evaluate(board: &Board) -> Result<(f64, f64), InsufficientBishops> {
    evaluate_with(board, &Options::default())
}

/// Returns `(white_score, black_score)`.
///
/// Both sides start at `BASE_SCORE` regardless of the pieces present, and lose half a piece's
/// value for every enemy knight attacking it and once more if an unblocked enemy bishop shares
/// its diagonal. No floor is applied.
pub fn evaluate_with(board: &Board, options: &Options) -> Result<(f64, f64), InsufficientBishops> {
    Ok(totals(&penalties(board, options)?))
}

/// Lists every threat penalty in board order.
pub fn penalties(board: &Board, options: &Options) -> Result<Vec<Penalty>, InsufficientBishops> {
    let bishops = [board.bishops_of(Color::White), board.bishops_of(Color::Black)];
    let mut penalties = Vec::new();

    for &piece in board.pieces() {
        let enemy = !piece.piece_color();
        let amount = piece.value() / THREAT_DIVISOR;

        if piece.piece_type() != PieceType::Knight {
            for target in knight_targets(piece.square()) {
                let attacker = board.piece_on(target);
                if attacker.is_some_and(|p| p.piece_type() == PieceType::Knight && p.piece_color() == enemy) {
                    penalties.push(Penalty { piece, threat: Threat::Knight(target), amount });
                }
            }
        }

        if piece.piece_type() != PieceType::Bishop {
            if let Some(bishop) = bishop_threat(piece.square(), &bishops[enemy], options.bishop_scan)? {
                if !blocked(piece.square(), bishop, board) {
                    penalties.push(Penalty { piece, threat: Threat::Bishop(bishop), amount });
                }
            }
        }
    }

    Ok(penalties)
}

/// A side without bishops poses no bishop threat, so only a lone bishop trips the pair check.
fn bishop_threat(square: Square, bishops: &[Square], scan: BishopScan) -> Result<Option<Square>, InsufficientBishops> {
    match scan {
        BishopScan::FirstPair if bishops.is_empty() => Ok(None),
        BishopScan::FirstPair => aligned_bishop(square, bishops),
        BishopScan::All => Ok(aligned_bishop_any(square, bishops)),
    }
}

fn totals(penalties: &[Penalty]) -> (f64, f64) {
    let mut scores = [BASE_SCORE; Color::NUM];
    for penalty in penalties {
        scores[penalty.piece.piece_color()] -= penalty.amount;
    }
    (scores[Color::White], scores[Color::Black])
}

/// Returns a `String` containing a human-readable representation of the evaluation.
///
/// ```plaintext
///  PIECE  |    THREAT    | PENALTY
/// --------|--------------|--------
///  pb e5  |    bishop h2 |     0.5
///  ab c4  |    bishop a3 |     1.5
/// --------|--------------|--------
///   White |              |   137.0
///   Black |              |   139.0
/// ```
pub fn evaluate_debug(board: &Board, options: &Options) -> Result<String, InsufficientBishops> {
    let penalties = penalties(board, options)?;
    let (white, black) = totals(&penalties);

    let mut result = String::new();
    result.push_str(" PIECE  |    THREAT    | PENALTY\n");
    result.push_str("--------|--------------|--------\n");

    for penalty in &penalties {
        let threat = match penalty.threat {
            Threat::Knight(square) => format!("knight {square}"),
            Threat::Bishop(square) => format!("bishop {square}"),
        };
        let piece = penalty.piece;
        result.push_str(&format!(" {} {}  | {:>12} | {:>7.1}\n", piece, piece.square(), threat, penalty.amount));
    }

    result.push_str("--------|--------------|--------\n");
    result.push_str(&format!("{:>7} | {:>12} | {:>7.1}\n", Color::White.name(), "", white));
    result.push_str(&format!("{:>7} | {:>12} | {:>7.1}\n", Color::Black.name(), "", black));

    Ok(result)
}
