pub use crate::board::{
    Board, BoardIndex, Cell, Piece, PieceType, Player, Position, BOARD_SIZE,
};
pub use crate::diff::{diff_cells, InvalidShapeError};
pub use crate::moves::{apply_move, possible_moves, Move, MoveError};
pub use crate::rules::{drop_positions, is_checkmate, is_in_check, is_legal_move, winner};
