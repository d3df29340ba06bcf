//! Static threat-aware material evaluation of a single 8×8 position.
//!
//! Both sides start from a fixed base score and lose half a piece's value for every enemy
//! knight attacking it and for an unblocked enemy bishop on its diagonal.

pub mod board;
pub mod evaluate;
pub mod parameters;
pub mod threats;
pub mod types;

mod lookup;

pub use board::Board;
pub use evaluate::{evaluate, evaluate_with};
