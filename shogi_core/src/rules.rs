//! Game rules above raw movement: drop restrictions, check and checkmate
//! detection, and full move legality.

use log::debug;

use crate::board::{Board, PieceType, Player, Position};
use crate::moves::{apply_move, possible_moves, Move};

/// Whether a piece of the given kind may be dropped on `row` at all.
/// Pawns and lances may not be dropped on the last rank, knights not on
/// the last two, since they would never be able to move again.
pub fn can_drop_at(board: &Board, kind: PieceType, row: usize, owner: Player) -> bool {
    let last = board.size().saturating_sub(1);
    match kind {
        PieceType::Pawn | PieceType::Lance => match owner {
            Player::Sente => row != 0,
            Player::Gote => row != last,
        },
        PieceType::Knight => match owner {
            Player::Sente => row > 1,
            Player::Gote => row < last.saturating_sub(1),
        },
        _ => true,
    }
}

/// Whether the player already has an unpromoted pawn on the file (the
/// nifu restriction).
fn has_pawn_on_file(board: &Board, col: usize, owner: Player) -> bool {
    (0..board.size()).any(|row| {
        matches!(
            board.cell(Position::new(row, col)),
            Some(piece) if piece.owner == owner && piece.kind == PieceType::Pawn
        )
    })
}

/// Whether dropping a pawn on `pos` would deliver immediate checkmate
/// (uchifuzume, which is forbidden).
fn is_pawn_drop_mate(board: &Board, pos: Position, owner: Player) -> bool {
    let mut probe = board.clone();
    probe.set_turn(owner);
    probe.add_to_hand(owner, PieceType::Pawn);
    let Ok(next) = apply_move(
        &probe,
        &Move::Drop {
            piece: PieceType::Pawn,
            to: pos,
        },
    ) else {
        return false;
    };
    is_checkmate(&next, owner.opponent())
}

/// Every square the player may legally drop the given piece on: empty
/// squares minus rank restrictions, minus nifu and uchifuzume for pawns.
/// Row-major order.
pub fn drop_positions(board: &Board, kind: PieceType, owner: Player) -> Vec<Position> {
    board
        .positions()
        .filter(|&pos| board.cell(pos).is_none())
        .filter(|&pos| can_drop_at(board, kind, pos.row, owner))
        .filter(|&pos| {
            if kind != PieceType::Pawn {
                return true;
            }
            !has_pawn_on_file(board, pos.col, owner) && !is_pawn_drop_mate(board, pos, owner)
        })
        .collect()
}

/// Whether any of the attacker's pieces could move onto `target`.
fn is_under_attack(board: &Board, target: Position, attacker: Player) -> bool {
    board.positions().any(|from| {
        matches!(board.cell(from), Some(piece) if piece.owner == attacker)
            && possible_moves(board, from).contains(&target)
    })
}

/// Whether the player's king is currently attacked. A board without that
/// king is not in check.
pub fn is_in_check(board: &Board, player: Player) -> bool {
    match board.find_king(player) {
        Some(king) => is_under_attack(board, king, player.opponent()),
        None => false,
    }
}

/// Simulates a move for the given player regardless of whose turn the
/// board says it is.
fn simulate_for(board: &Board, player: Player, mv: &Move) -> Option<Board> {
    let mut probe = board.clone();
    probe.set_turn(player);
    apply_move(&probe, mv).ok()
}

/// Whether the player is checkmated: in check, with no board move and no
/// drop that leaves the king safe.
pub fn is_checkmate(board: &Board, player: Player) -> bool {
    if !is_in_check(board, player) {
        return false;
    }

    // Any board move that resolves the check?
    for from in board.positions() {
        let Some(piece) = board.cell(from) else {
            continue;
        };
        if piece.owner != player {
            continue;
        }
        for to in possible_moves(board, from) {
            let mv = Move::Normal {
                from,
                to,
                promote: false,
            };
            if let Some(next) = simulate_for(board, player, &mv) {
                if !is_in_check(&next, player) {
                    return false;
                }
            }
        }
    }

    // Any drop that resolves it?
    let mut kinds: Vec<PieceType> = board.hand(player).to_vec();
    kinds.sort();
    kinds.dedup();
    for kind in kinds {
        for to in drop_positions(board, kind, player) {
            let mv = Move::Drop { piece: kind, to };
            if let Some(next) = simulate_for(board, player, &mv) {
                if !is_in_check(&next, player) {
                    return false;
                }
            }
        }
    }

    debug!("checkmate detected against {player:?}");
    true
}

/// The winner if the side to move is checkmated, otherwise [`None`].
pub fn winner(board: &Board) -> Option<Player> {
    is_checkmate(board, board.turn()).then(|| board.turn().opponent())
}

/// Whether `row` lies in the player's promotion zone (the opponent's
/// first three ranks). On boards smaller than three rows the whole board
/// is the zone.
pub fn is_promotion_zone(board: &Board, row: usize, player: Player) -> bool {
    match player {
        Player::Sente => row < 3,
        Player::Gote => row >= board.size().saturating_sub(3),
    }
}

/// Full legality check for a move by the side to move: ownership,
/// reachability, promotion-zone and drop restrictions, and the mover's
/// king must not be left in check.
pub fn is_legal_move(board: &Board, mv: &Move) -> bool {
    let player = board.turn();
    match *mv {
        Move::Normal { from, to, promote } => {
            let Some(piece) = board.cell(from) else {
                return false;
            };
            if piece.owner != player {
                return false;
            }
            if !possible_moves(board, from).contains(&to) {
                return false;
            }
            if promote {
                if !piece.kind.can_promote() {
                    return false;
                }
                if !is_promotion_zone(board, from.row, player)
                    && !is_promotion_zone(board, to.row, player)
                {
                    return false;
                }
            }
            match apply_move(board, mv) {
                Ok(next) => !is_in_check(&next, player),
                Err(_) => false,
            }
        },
        Move::Drop { piece, to } => {
            if !board.hand(player).contains(&piece) {
                return false;
            }
            if board.cell(to).is_some() {
                return false;
            }
            if !drop_positions(board, piece, player).contains(&to) {
                return false;
            }
            match apply_move(board, mv) {
                Ok(next) => !is_in_check(&next, player),
                Err(_) => false,
            }
        },
    }
}
