//! Japanese rendering of squares and moves, e.g. "7六歩(7七)" or
//! "5五金打", for logs and user-facing summaries.

use crate::board::{Board, Position, BOARD_SIZE};
use crate::moves::Move;

const RANK_NUMERALS: [&str; 9] = ["一", "二", "三", "四", "五", "六", "七", "八", "九"];

/// "7六"-style coordinate: file digit plus rank numeral.
pub fn position_to_japanese(pos: Position) -> String {
    let file = BOARD_SIZE - pos.col;
    let rank = RANK_NUMERALS.get(pos.row).copied().unwrap_or("");
    format!("{file}{rank}")
}

/// Renders a move for display. The board supplies the piece name; drops
/// are marked 打 and promotions 成.
///
/// Examples: "7六歩(7七)", "7七-2二成", "5五金打".
pub fn format_move(mv: &Move, board: &Board) -> String {
    match *mv {
        Move::Drop { piece, to } => {
            format!(
                "{}{}打",
                position_to_japanese(to),
                piece.japanese_name()
            )
        },
        Move::Normal { from, to, promote } => {
            let piece_name = board
                .cell(from)
                .map(|piece| piece.kind.japanese_name())
                .unwrap_or("");
            let from_jp = position_to_japanese(from);
            let to_jp = position_to_japanese(to);
            if promote {
                if piece_name.is_empty() {
                    format!("{from_jp}-{to_jp}成")
                } else {
                    format!("{from_jp}{piece_name}-{to_jp}成")
                }
            } else if piece_name.is_empty() {
                format!("{to_jp}({from_jp})")
            } else {
                format!("{to_jp}{piece_name}({from_jp})")
            }
        },
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::board::{Piece, PieceType, Player};

    #[test]
    fn positions() {
        assert_eq!(position_to_japanese(Position::new(0, 0)), "9一");
        assert_eq!(position_to_japanese(Position::new(6, 2)), "7七");
        assert_eq!(position_to_japanese(Position::new(8, 8)), "1九");
    }

    #[test]
    fn pawn_push() {
        let board = Board::starting_position();
        let mv = Move::Normal {
            from: Position::new(6, 2),
            to: Position::new(5, 2),
            promote: false,
        };
        assert_eq!(format_move(&mv, &board), "7六歩(7七)");
    }

    #[test]
    fn promoting_bishop_trade() {
        let board = Board::starting_position();
        let mv = Move::Normal {
            from: Position::new(7, 1),
            to: Position::new(1, 7),
            promote: true,
        };
        assert_eq!(format_move(&mv, &board), "8八角-2二成");
    }

    #[test]
    fn drops_marked() {
        let board = Board::empty();
        let mv = Move::Drop {
            piece: PieceType::Gold,
            to: Position::new(4, 4),
        };
        assert_eq!(format_move(&mv, &board), "5五金打");
    }

    #[test]
    fn unknown_origin_falls_back_to_coordinates() {
        let mut board = Board::empty();
        board.set_cell(Position::new(4, 4), Some(Piece::new(PieceType::Rook, Player::Sente)));
        let mv = Move::Normal {
            from: Position::new(3, 3),
            to: Position::new(2, 3),
            promote: false,
        };
        assert_eq!(format_move(&mv, &board), "6三(6四)");
    }
}
