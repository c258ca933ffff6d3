//! Board diffing: compares two snapshots of the same game and reports which
//! squares changed, so a consumer (e.g. an incremental renderer) can redraw
//! only those cells.

use thiserror::Error;

use crate::board::{Board, Position};

/// The two boards handed to [`diff_cells`] did not have the same dimensions.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
#[error("board shapes do not match: previous is {previous}x{previous}, current is {current}x{current}")]
pub struct InvalidShapeError {
    pub previous: usize,
    pub current: usize,
}

/// Compares two board snapshots and returns every position whose content
/// differs, in ascending row-major order.
///
/// A square counts as changed when either the piece kind or the owner
/// differs; an empty square only equals another empty square. Hands and
/// turn are not part of the comparison. Neither input is mutated, and the
/// result never contains duplicates.
///
/// The scan bound comes from the boards themselves; mismatched dimensions
/// are rejected rather than silently scanning a fixed range.
pub fn diff_cells(
    previous: &Board,
    current: &Board,
) -> Result<Vec<Position>, InvalidShapeError> {
    if previous.size() != current.size() {
        return Err(InvalidShapeError {
            previous: previous.size(),
            current: current.size(),
        });
    }

    let mut diff = Vec::new();
    for pos in previous.positions() {
        if previous.cell(pos) != current.cell(pos) {
            diff.push(pos);
        }
    }
    Ok(diff)
}
