//! Recognition of named formations: castles and opening tactics. Each
//! formation is a set of piece/position conditions written from Sente's
//! point of view; for Gote the coordinates are mirrored.

pub mod castles;
pub mod tactics;

use crate::board::{Board, PieceType, Player, Position};

pub use self::castles::CASTLES;
pub use self::tactics::TACTICS;

/// One required piece. An axis left as [`None`] matches anywhere on that
/// axis (e.g. "a silver somewhere on row 5").
#[derive(Clone, Copy, Debug)]
pub struct PieceAt {
    pub kind: PieceType,
    pub row: Option<usize>,
    pub col: Option<usize>,
}

/// A condition tree over piece placements.
#[derive(Clone, Debug)]
pub enum Condition {
    Piece(PieceAt),
    All(Vec<Condition>),
    Any(Vec<Condition>),
}

/// A piece of `kind` exactly at (row, col), Sente's orientation.
pub fn at(kind: PieceType, row: usize, col: usize) -> Condition {
    Condition::Piece(PieceAt {
        kind,
        row: Some(row),
        col: Some(col),
    })
}

pub fn all(conditions: Vec<Condition>) -> Condition {
    Condition::All(conditions)
}

pub fn any(conditions: Vec<Condition>) -> Condition {
    Condition::Any(conditions)
}

fn mirror(index: Option<usize>, player: Player, size: usize) -> Option<usize> {
    match player {
        Player::Sente => index,
        Player::Gote => index.map(|i| size - 1 - i),
    }
}

fn has_piece_at(board: &Board, spec: PieceAt, player: Player) -> bool {
    let size = board.size();
    let row = mirror(spec.row, player, size);
    let col = mirror(spec.col, player, size);
    row.map_or(0..size, |r| r..r + 1).any(|r| {
        col.map_or(0..size, |c| c..c + 1).any(|c| {
            matches!(
                board.cell(Position::new(r, c)),
                Some(piece) if piece.kind == spec.kind && piece.owner == player
            )
        })
    })
}

impl Condition {
    /// Whether the board satisfies this condition for the given player,
    /// mirroring coordinates when the player is Gote.
    pub fn matches(&self, board: &Board, player: Player) -> bool {
        match self {
            Condition::Piece(spec) => has_piece_at(board, *spec, player),
            Condition::All(conditions) => {
                conditions.iter().all(|c| c.matches(board, player))
            },
            Condition::Any(conditions) => {
                conditions.iter().any(|c| c.matches(board, player))
            },
        }
    }
}

/// How a strategy's conditions apply to the two sides.
#[derive(Clone, Debug)]
pub enum Criteria {
    /// The shape belongs to one player.
    Single(Condition),
    /// The shape requires something of the opponent too (e.g. Mukaibisha
    /// is only Mukaibisha against a static rook).
    Versus {
        own: Condition,
        opponent: Condition,
    },
}

/// Move numbers for which detection is meaningful. An open bound means no
/// limit on that side.
#[derive(Clone, Copy, Debug, Default)]
pub struct TurnRange {
    pub from: Option<u32>,
    pub to: Option<u32>,
}

impl TurnRange {
    pub fn contains(&self, turn: u32) -> bool {
        self.from.map_or(true, |from| turn >= from)
            && self.to.map_or(true, |to| turn <= to)
    }
}

/// A named formation with its detection conditions.
#[derive(Clone, Debug)]
pub struct Strategy {
    pub name: &'static str,
    pub turn_range: TurnRange,
    pub criteria: Criteria,
}

impl Strategy {
    pub fn matches(&self, board: &Board, player: Player, turn: u32) -> bool {
        if !self.turn_range.contains(turn) {
            return false;
        }
        match &self.criteria {
            Criteria::Single(condition) => condition.matches(board, player),
            Criteria::Versus { own, opponent } => {
                own.matches(board, player) && opponent.matches(board, player.opponent())
            },
        }
    }
}

/// All castles and tactics the given player has on the board at the given
/// move number, in registry order.
pub fn detect(board: &Board, player: Player, turn: u32) -> Vec<&'static Strategy> {
    CASTLES
        .iter()
        .chain(TACTICS.iter())
        .filter(|strategy| strategy.matches(board, player, turn))
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::board::Piece;

    fn place(board: &mut Board, row: usize, col: usize, kind: PieceType, owner: Player) {
        board.set_cell(Position::new(row, col), Some(Piece::new(kind, owner)));
    }

    fn mino_board(player: Player) -> Board {
        // Mino: K2八 G3八 G5八 in Sente's orientation.
        let mut board = Board::empty();
        let coords = [
            (7, 7, PieceType::King),
            (7, 6, PieceType::Gold),
            (7, 4, PieceType::Gold),
        ];
        for (row, col, kind) in coords {
            let (row, col) = match player {
                Player::Sente => (row, col),
                Player::Gote => (8 - row, 8 - col),
            };
            place(&mut board, row, col, kind, player);
        }
        board
    }

    fn named(board: &Board, player: Player, turn: u32) -> Vec<&'static str> {
        detect(board, player, turn)
            .iter()
            .map(|strategy| strategy.name)
            .collect()
    }

    #[test]
    fn mino_detected_for_sente() {
        let board = mino_board(Player::Sente);
        assert!(named(&board, Player::Sente, 20).contains(&"美濃囲い"));
        assert!(!named(&board, Player::Gote, 20).contains(&"美濃囲い"));
    }

    #[test]
    fn mino_coordinates_mirror_for_gote() {
        let board = mino_board(Player::Gote);
        assert!(named(&board, Player::Gote, 20).contains(&"美濃囲い"));
        assert!(!named(&board, Player::Sente, 20).contains(&"美濃囲い"));
    }

    #[test]
    fn wildcard_axis_matches_anywhere_on_it() {
        let silver_somewhere_row5 = Condition::Piece(PieceAt {
            kind: PieceType::Silver,
            row: Some(5),
            col: None,
        });
        let mut board = Board::empty();
        place(&mut board, 5, 2, PieceType::Silver, Player::Sente);
        assert!(silver_somewhere_row5.matches(&board, Player::Sente));

        let mut board = Board::empty();
        place(&mut board, 4, 2, PieceType::Silver, Player::Sente);
        assert!(!silver_somewhere_row5.matches(&board, Player::Sente));
    }

    #[test]
    fn any_condition_accepts_either_shape() {
        // Bogin wants the silver on 2六 or 2五.
        let mut board = Board::empty();
        place(&mut board, 7, 7, PieceType::Rook, Player::Sente);
        place(&mut board, 4, 7, PieceType::Silver, Player::Sente);
        assert!(named(&board, Player::Sente, 12).contains(&"棒銀"));

        let mut board = Board::empty();
        place(&mut board, 7, 7, PieceType::Rook, Player::Sente);
        place(&mut board, 5, 7, PieceType::Silver, Player::Sente);
        assert!(named(&board, Player::Sente, 12).contains(&"棒銀"));
    }

    #[test]
    fn turn_range_gates_detection() {
        let mut board = Board::empty();
        place(&mut board, 7, 7, PieceType::Rook, Player::Sente);
        place(&mut board, 4, 7, PieceType::Silver, Player::Sente);
        // Bogin is only reported from move 10 on.
        assert!(!named(&board, Player::Sente, 9).contains(&"棒銀"));
        assert!(named(&board, Player::Sente, 10).contains(&"棒銀"));
    }

    #[test]
    fn versus_criteria_checks_the_opponent() {
        // Mukaibisha: own rook to file 8 against an opponent static rook.
        let mut board = Board::empty();
        place(&mut board, 7, 1, PieceType::Rook, Player::Sente);
        place(&mut board, 1, 1, PieceType::Rook, Player::Gote);
        assert!(named(&board, Player::Sente, 8).contains(&"向かい飛車"));

        // Opponent rook elsewhere: not mukaibisha.
        let mut board = Board::empty();
        place(&mut board, 7, 1, PieceType::Rook, Player::Sente);
        place(&mut board, 1, 4, PieceType::Rook, Player::Gote);
        assert!(!named(&board, Player::Sente, 8).contains(&"向かい飛車"));
    }

    #[test]
    fn yagura_family_from_sfen() {
        // Kin-Yagura head: K8八 G7八 G6七 S7七.
        let mut board = Board::empty();
        place(&mut board, 7, 1, PieceType::King, Player::Sente);
        place(&mut board, 7, 2, PieceType::Gold, Player::Sente);
        place(&mut board, 6, 3, PieceType::Gold, Player::Sente);
        place(&mut board, 6, 2, PieceType::Silver, Player::Sente);
        let names = named(&board, Player::Sente, 30);
        assert!(names.contains(&"金矢倉"));
        assert!(!names.contains(&"銀矢倉"));
    }

    #[test]
    fn ginkanmuri_distinguished_from_mino_family() {
        // 銀冠: K2八 G3八 G4七 S2七.
        let mut board = Board::empty();
        place(&mut board, 7, 7, PieceType::King, Player::Sente);
        place(&mut board, 7, 6, PieceType::Gold, Player::Sente);
        place(&mut board, 6, 5, PieceType::Gold, Player::Sente);
        place(&mut board, 6, 7, PieceType::Silver, Player::Sente);
        let names = named(&board, Player::Sente, 30);
        assert!(names.contains(&"銀冠"));
        assert!(!names.contains(&"高美濃"));
        assert!(!names.contains(&"ダイヤモンド美濃"));
    }

    #[test]
    fn gokigen_nakabisha_needs_the_advanced_pawn() {
        let mut board = Board::empty();
        place(&mut board, 7, 4, PieceType::Rook, Player::Sente);
        place(&mut board, 6, 2, PieceType::Bishop, Player::Sente);
        let names = named(&board, Player::Sente, 8);
        assert!(names.contains(&"中飛車"));
        assert!(!names.contains(&"ゴキゲン中飛車"));

        place(&mut board, 4, 4, PieceType::Pawn, Player::Sente);
        let names = named(&board, Player::Sente, 8);
        assert!(names.contains(&"ゴキゲン中飛車"));
    }

    #[test]
    fn starting_position_strategies() {
        let board = Board::starting_position();
        let names = named(&board, Player::Sente, 1);
        assert!(names.contains(&"居飛車"));
        // The untouched king and right gold already sit on 5九/4九.
        assert!(names.contains(&"中住まい"));
        assert!(!names.contains(&"美濃囲い"));
        assert!(!names.contains(&"中飛車"));
    }
}
