//! Text notations for positions and moves: SFEN for whole boards, USI for
//! squares and moves, and Japanese rendering for display.

pub mod japanese;
pub mod sfen;
pub mod usi;
