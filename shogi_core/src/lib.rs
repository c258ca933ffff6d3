//! Core shogi board model: snapshots, diffing, movement and rules,
//! notation, and formation detection. Boards are values; every game
//! operation returns a new snapshot, which is what makes the diffing in
//! [`diff`] meaningful for incremental consumers.

pub mod board;
pub mod diff;
pub mod moves;
pub mod notation;
pub mod prelude;
pub mod rules;
pub mod strategy;
