use getset::CopyGetters;
use serde::{Deserialize, Serialize};

/// Standard shogi board dimension. Code that scans a board should read the
/// bound from [`Board::size`] rather than this constant, so that boards of
/// other sizes (tests, variants) are scanned correctly.
pub const BOARD_SIZE: usize = 9;

/// A valid row or column index, 0-based, exclusive at the board size.
pub type BoardIndex = usize;

/// The two sides of a game. Sente moves first and plays "up" the board
/// (toward row 0); Gote plays toward row 8.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    Sente,
    Gote,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::Sente => Player::Gote,
            Player::Gote => Player::Sente,
        }
    }

    /// Row delta for this player's forward direction.
    pub fn forward(self) -> isize {
        match self {
            Player::Sente => -1,
            Player::Gote => 1,
        }
    }
}

/// Kinds of shogi pieces, promoted forms included.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PieceType {
    King,
    Rook,
    Bishop,
    Gold,
    Silver,
    Knight,
    Lance,
    Pawn,
    PromotedRook,
    PromotedBishop,
    PromotedSilver,
    PromotedKnight,
    PromotedLance,
    PromotedPawn,
}

impl PieceType {
    /// The promoted form of this piece, or [`None`] if it cannot promote.
    pub fn promoted(self) -> Option<PieceType> {
        match self {
            PieceType::Rook => Some(PieceType::PromotedRook),
            PieceType::Bishop => Some(PieceType::PromotedBishop),
            PieceType::Silver => Some(PieceType::PromotedSilver),
            PieceType::Knight => Some(PieceType::PromotedKnight),
            PieceType::Lance => Some(PieceType::PromotedLance),
            PieceType::Pawn => Some(PieceType::PromotedPawn),
            _ => None,
        }
    }

    /// The base form of a promoted piece, or [`None`] if this is not a
    /// promoted piece.
    pub fn unpromoted(self) -> Option<PieceType> {
        match self {
            PieceType::PromotedRook => Some(PieceType::Rook),
            PieceType::PromotedBishop => Some(PieceType::Bishop),
            PieceType::PromotedSilver => Some(PieceType::Silver),
            PieceType::PromotedKnight => Some(PieceType::Knight),
            PieceType::PromotedLance => Some(PieceType::Lance),
            PieceType::PromotedPawn => Some(PieceType::Pawn),
            _ => None,
        }
    }

    /// The form a piece takes when captured into hand.
    pub fn demoted(self) -> PieceType {
        self.unpromoted().unwrap_or(self)
    }

    pub fn is_promoted(self) -> bool {
        self.unpromoted().is_some()
    }

    pub fn can_promote(self) -> bool {
        self.promoted().is_some()
    }

    pub fn japanese_name(self) -> &'static str {
        match self {
            PieceType::King => "王",
            PieceType::Rook => "飛",
            PieceType::Bishop => "角",
            PieceType::Gold => "金",
            PieceType::Silver => "銀",
            PieceType::Knight => "桂",
            PieceType::Lance => "香",
            PieceType::Pawn => "歩",
            PieceType::PromotedRook => "竜",
            PieceType::PromotedBishop => "馬",
            PieceType::PromotedSilver => "成銀",
            PieceType::PromotedKnight => "成桂",
            PieceType::PromotedLance => "成香",
            PieceType::PromotedPawn => "と",
        }
    }
}

/// A piece on the board: what it is and who owns it.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
pub struct Piece {
    pub kind: PieceType,
    pub owner: Player,
}

impl Piece {
    pub fn new(kind: PieceType, owner: Player) -> Self {
        Piece { kind, owner }
    }
}

/// A single square's content. [`None`] is an empty square.
pub type Cell = Option<Piece>;

/// A 0-based (row, col) coordinate into a board. The derived [`Ord`] is
/// row-major: all of row 0 left to right, then row 1, and so on.
#[derive(
    Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Deserialize, Serialize,
)]
pub struct Position {
    pub row: BoardIndex,
    pub col: BoardIndex,
}

impl Position {
    pub fn new(row: BoardIndex, col: BoardIndex) -> Self {
        Position { row, col }
    }

    pub fn in_bounds(&self, size: usize) -> bool {
        self.row < size && self.col < size
    }

    /// Offsets this position, returning [`None`] if the result leaves a
    /// board of the given size.
    pub fn offset(&self, d_row: isize, d_col: isize, size: usize) -> Option<Position> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        let pos = Position { row, col };
        pos.in_bounds(size).then_some(pos)
    }
}

/// A snapshot of one position: the grid, both players' hands, and whose
/// turn it is. Game operations never mutate a board in place; they return
/// a new value (see [`crate::moves::apply_move`]).
#[derive(Clone, CopyGetters, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub struct Board {
    cells: Vec<Vec<Cell>>,
    sente_hand: Vec<PieceType>,
    gote_hand: Vec<PieceType>,
    #[get_copy = "pub"]
    turn: Player,
}

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}

impl Board {
    /// An empty board of the standard dimension, Sente to move.
    pub fn empty() -> Self {
        Board::with_size(BOARD_SIZE)
    }

    /// An empty square board of an arbitrary dimension.
    pub fn with_size(size: usize) -> Self {
        Board {
            cells: vec![vec![None; size]; size],
            sente_hand: Vec::new(),
            gote_hand: Vec::new(),
            turn: Player::Sente,
        }
    }

    /// The standard initial position.
    pub fn starting_position() -> Self {
        use PieceType::*;
        let mut board = Board::empty();
        let back_rank = [Lance, Knight, Silver, Gold, King, Gold, Silver, Knight, Lance];
        for (col, &kind) in back_rank.iter().enumerate() {
            board.set_cell(Position::new(0, col), Some(Piece::new(kind, Player::Gote)));
            board.set_cell(Position::new(8, col), Some(Piece::new(kind, Player::Sente)));
        }
        board.set_cell(Position::new(1, 1), Some(Piece::new(Rook, Player::Gote)));
        board.set_cell(Position::new(1, 7), Some(Piece::new(Bishop, Player::Gote)));
        board.set_cell(Position::new(7, 1), Some(Piece::new(Bishop, Player::Sente)));
        board.set_cell(Position::new(7, 7), Some(Piece::new(Rook, Player::Sente)));
        for col in 0..BOARD_SIZE {
            board.set_cell(Position::new(2, col), Some(Piece::new(Pawn, Player::Gote)));
            board.set_cell(Position::new(6, col), Some(Piece::new(Pawn, Player::Sente)));
        }
        board
    }

    /// The board dimension. Boards are always square.
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// The content of a square, [`None`] if empty or out of range.
    pub fn cell(&self, pos: Position) -> Cell {
        self.cells
            .get(pos.row)
            .and_then(|row| row.get(pos.col))
            .copied()
            .flatten()
    }

    pub fn set_cell(&mut self, pos: Position, cell: Cell) {
        if let Some(square) = self
            .cells
            .get_mut(pos.row)
            .and_then(|row| row.get_mut(pos.col))
        {
            *square = cell;
        }
    }

    pub fn set_turn(&mut self, player: Player) {
        self.turn = player;
    }

    pub fn hand(&self, player: Player) -> &[PieceType] {
        match player {
            Player::Sente => &self.sente_hand,
            Player::Gote => &self.gote_hand,
        }
    }

    pub fn add_to_hand(&mut self, player: Player, kind: PieceType) {
        self.hand_mut(player).push(kind);
    }

    /// Removes one piece of the given kind from a player's hand. Returns
    /// false if the hand does not hold one.
    pub fn take_from_hand(&mut self, player: Player, kind: PieceType) -> bool {
        let hand = self.hand_mut(player);
        match hand.iter().position(|&held| held == kind) {
            Some(index) => {
                hand.remove(index);
                true
            },
            None => false,
        }
    }

    fn hand_mut(&mut self, player: Player) -> &mut Vec<PieceType> {
        match player {
            Player::Sente => &mut self.sente_hand,
            Player::Gote => &mut self.gote_hand,
        }
    }

    /// Iterates every coordinate of the board in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let size = self.size();
        (0..size).flat_map(move |row| (0..size).map(move |col| Position::new(row, col)))
    }

    pub fn find_king(&self, player: Player) -> Option<Position> {
        self.positions().find(|&pos| {
            matches!(
                self.cell(pos),
                Some(piece) if piece.owner == player && piece.kind == PieceType::King
            )
        })
    }

    /// Number of pieces the player has on the board (hands not counted).
    pub fn count_pieces(&self, player: Player) -> usize {
        self.positions()
            .filter(|&pos| matches!(self.cell(pos), Some(piece) if piece.owner == player))
            .count()
    }

    /// Whether any square holds the given kind, optionally restricted to
    /// one owner.
    pub fn has_piece(&self, kind: PieceType, owner: Option<Player>) -> bool {
        self.positions().any(|pos| {
            matches!(
                self.cell(pos),
                Some(piece) if piece.kind == kind && owner.map_or(true, |p| piece.owner == p)
            )
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn starting_position_layout() {
        let board = Board::starting_position();
        assert_eq!(board.size(), BOARD_SIZE);
        assert_eq!(board.turn(), Player::Sente);
        assert_eq!(
            board.cell(Position::new(8, 4)),
            Some(Piece::new(PieceType::King, Player::Sente))
        );
        assert_eq!(
            board.cell(Position::new(0, 4)),
            Some(Piece::new(PieceType::King, Player::Gote))
        );
        assert_eq!(
            board.cell(Position::new(7, 7)),
            Some(Piece::new(PieceType::Rook, Player::Sente))
        );
        assert_eq!(
            board.cell(Position::new(1, 1)),
            Some(Piece::new(PieceType::Rook, Player::Gote))
        );
        assert_eq!(board.cell(Position::new(4, 4)), None);
        assert_eq!(board.count_pieces(Player::Sente), 20);
        assert_eq!(board.count_pieces(Player::Gote), 20);
    }

    #[test]
    fn promotion_round_trip() {
        assert_eq!(PieceType::Pawn.promoted(), Some(PieceType::PromotedPawn));
        assert_eq!(PieceType::PromotedPawn.demoted(), PieceType::Pawn);
        assert_eq!(PieceType::Gold.promoted(), None);
        assert_eq!(PieceType::Gold.demoted(), PieceType::Gold);
        assert!(PieceType::PromotedRook.is_promoted());
        assert!(!PieceType::King.can_promote());
    }

    #[test]
    fn hand_bookkeeping() {
        let mut board = Board::empty();
        board.add_to_hand(Player::Sente, PieceType::Pawn);
        board.add_to_hand(Player::Sente, PieceType::Gold);
        assert_eq!(board.hand(Player::Sente), &[PieceType::Pawn, PieceType::Gold]);
        assert!(board.take_from_hand(Player::Sente, PieceType::Pawn));
        assert!(!board.take_from_hand(Player::Sente, PieceType::Pawn));
        assert_eq!(board.hand(Player::Sente), &[PieceType::Gold]);
        assert!(board.hand(Player::Gote).is_empty());
    }

    #[test]
    fn position_ordering_is_row_major() {
        let mut positions = vec![
            Position::new(8, 0),
            Position::new(0, 8),
            Position::new(0, 0),
            Position::new(3, 4),
        ];
        positions.sort();
        assert_eq!(
            positions,
            vec![
                Position::new(0, 0),
                Position::new(0, 8),
                Position::new(3, 4),
                Position::new(8, 0),
            ]
        );
    }

    #[test]
    fn board_survives_json_round_trip() {
        let mut board = Board::starting_position();
        board.add_to_hand(Player::Gote, PieceType::Pawn);
        let json = serde_json::to_string(&board).unwrap();
        assert!(json.contains("\"turn\":\"sente\""));
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(back, board);
    }

    #[test]
    fn offset_stays_in_bounds() {
        let pos = Position::new(0, 4);
        assert_eq!(pos.offset(-1, 0, 9), None);
        assert_eq!(pos.offset(1, 1, 9), Some(Position::new(1, 5)));
        assert_eq!(Position::new(8, 8).offset(0, 1, 9), None);
    }
}
