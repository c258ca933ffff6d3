//! Piece movement: per-piece direction tables, pseudo-legal destination
//! generation, and applying a move to produce the next board snapshot.

use thiserror::Error;

use crate::board::{Board, Piece, PieceType, Player, Position};

/// A relative movement direction. Ranged directions slide until blocked.
#[derive(Clone, Copy, Debug)]
struct Direction {
    row: isize,
    col: isize,
    ranged: bool,
}

impl Direction {
    const fn step(row: isize, col: isize) -> Self {
        Direction {
            row,
            col,
            ranged: false,
        }
    }

    const fn slide(row: isize, col: isize) -> Self {
        Direction {
            row,
            col,
            ranged: true,
        }
    }
}

/// Directions a piece may move in. `forward` is negative for Sente (toward
/// row 0) and positive for Gote.
fn piece_directions(kind: PieceType, owner: Player) -> Vec<Direction> {
    let forward = owner.forward();
    match kind {
        PieceType::King => vec![
            Direction::step(-1, 0),
            Direction::step(-1, 1),
            Direction::step(0, 1),
            Direction::step(1, 1),
            Direction::step(1, 0),
            Direction::step(1, -1),
            Direction::step(0, -1),
            Direction::step(-1, -1),
        ],
        PieceType::Rook => vec![
            Direction::slide(-1, 0),
            Direction::slide(1, 0),
            Direction::slide(0, 1),
            Direction::slide(0, -1),
        ],
        // Rook plus single-step diagonals
        PieceType::PromotedRook => vec![
            Direction::slide(-1, 0),
            Direction::slide(1, 0),
            Direction::slide(0, 1),
            Direction::slide(0, -1),
            Direction::step(-1, 1),
            Direction::step(1, 1),
            Direction::step(1, -1),
            Direction::step(-1, -1),
        ],
        PieceType::Bishop => vec![
            Direction::slide(-1, 1),
            Direction::slide(1, 1),
            Direction::slide(1, -1),
            Direction::slide(-1, -1),
        ],
        // Bishop plus single-step orthogonals
        PieceType::PromotedBishop => vec![
            Direction::slide(-1, 1),
            Direction::slide(1, 1),
            Direction::slide(1, -1),
            Direction::slide(-1, -1),
            Direction::step(-1, 0),
            Direction::step(1, 0),
            Direction::step(0, 1),
            Direction::step(0, -1),
        ],
        PieceType::Gold
        | PieceType::PromotedSilver
        | PieceType::PromotedKnight
        | PieceType::PromotedLance
        | PieceType::PromotedPawn => vec![
            Direction::step(forward, 0),
            Direction::step(forward, 1),
            Direction::step(forward, -1),
            Direction::step(0, 1),
            Direction::step(0, -1),
            Direction::step(-forward, 0),
        ],
        PieceType::Silver => vec![
            Direction::step(forward, 0),
            Direction::step(forward, 1),
            Direction::step(forward, -1),
            Direction::step(-forward, 1),
            Direction::step(-forward, -1),
        ],
        PieceType::Knight => vec![
            Direction::step(forward * 2, 1),
            Direction::step(forward * 2, -1),
        ],
        PieceType::Lance => vec![Direction::slide(forward, 0)],
        PieceType::Pawn => vec![Direction::step(forward, 0)],
    }
}

/// Pseudo-legal destinations for the piece at `from`: empty squares and
/// captures, sliding pieces blocked by the first occupied square. An empty
/// square yields an empty list. Self-check is not considered here; see
/// [`crate::rules::is_legal_move`].
pub fn possible_moves(board: &Board, from: Position) -> Vec<Position> {
    let Some(piece) = board.cell(from) else {
        return Vec::new();
    };

    let size = board.size();
    let mut moves = Vec::new();
    for dir in piece_directions(piece.kind, piece.owner) {
        let mut step = 1isize;
        while let Some(to) = from.offset(dir.row * step, dir.col * step, size) {
            match board.cell(to) {
                Some(occupant) => {
                    if occupant.owner != piece.owner {
                        moves.push(to);
                    }
                    break;
                },
                None => moves.push(to),
            }
            if !dir.ranged {
                break;
            }
            step += 1;
        }
    }
    moves
}

/// A single move: either sliding a board piece (optionally promoting) or
/// dropping a piece from hand.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Move {
    Normal {
        from: Position,
        to: Position,
        promote: bool,
    },
    Drop {
        piece: PieceType,
        to: Position,
    },
}

impl Move {
    pub fn to(&self) -> Position {
        match self {
            Move::Normal { to, .. } | Move::Drop { to, .. } => *to,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum MoveError {
    #[error("no piece at row {} col {}", .0.row, .0.col)]
    NoPieceAtOrigin(Position),
    #[error("piece not found in hand: {0:?}")]
    PieceNotInHand(PieceType),
    #[error("destination row {} col {} is off the board", .0.row, .0.col)]
    OutOfBounds(Position),
}

/// Applies a move and returns the resulting board. The input board is left
/// untouched. Captured pieces demote into the mover's hand, and the turn
/// passes to the opponent.
///
/// Only basic structural checks are performed; use
/// [`crate::rules::is_legal_move`] to vet a move against the full rules
/// first.
pub fn apply_move(board: &Board, mv: &Move) -> Result<Board, MoveError> {
    let mut next = board.clone();
    let mover = board.turn();

    match *mv {
        Move::Drop { piece, to } => {
            if !to.in_bounds(board.size()) {
                return Err(MoveError::OutOfBounds(to));
            }
            if !next.take_from_hand(mover, piece) {
                return Err(MoveError::PieceNotInHand(piece));
            }
            next.set_cell(to, Some(Piece::new(piece, mover)));
        },
        Move::Normal { from, to, promote } => {
            if !to.in_bounds(board.size()) {
                return Err(MoveError::OutOfBounds(to));
            }
            let mut piece = board.cell(from).ok_or(MoveError::NoPieceAtOrigin(from))?;
            if let Some(captured) = board.cell(to) {
                next.add_to_hand(piece.owner, captured.kind.demoted());
            }
            if promote {
                piece.kind = piece.kind.promoted().unwrap_or(piece.kind);
            }
            next.set_cell(to, Some(piece));
            next.set_cell(from, None);
        },
    }

    next.set_turn(mover.opponent());
    Ok(next)
}
