//! SFEN parsing and formatting, plus a text rendering of a board for
//! terminals and logs.

use thiserror::Error;

use crate::board::{Board, Piece, PieceType, Player, Position, BOARD_SIZE};

/// SFEN for the standard initial position.
pub const STARTING_POSITION: &str =
    "lnsgkgsnl/1r5b1/ppppppppp/9/9/9/PPPPPPPPP/1B5R1/LNSGKGSNL b - 1";

#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum SfenError {
    #[error("invalid SFEN: insufficient parts")]
    MissingParts,
    #[error("invalid SFEN: expected {expected} rows, got {got}")]
    RowCount { expected: usize, got: usize },
    #[error("invalid SFEN: expected {expected} columns in row {row}, got {got}")]
    ColumnCount {
        row: usize,
        expected: usize,
        got: usize,
    },
    #[error("invalid SFEN: unknown piece [{0}]")]
    UnknownPiece(char),
    #[error("invalid SFEN: incomplete promoted piece")]
    IncompletePromotion,
    #[error("invalid SFEN hand: number without piece")]
    HandNumberWithoutPiece,
}

fn base_kind(letter: char) -> Option<PieceType> {
    match letter.to_ascii_lowercase() {
        'k' => Some(PieceType::King),
        'r' => Some(PieceType::Rook),
        'b' => Some(PieceType::Bishop),
        'g' => Some(PieceType::Gold),
        's' => Some(PieceType::Silver),
        'n' => Some(PieceType::Knight),
        'l' => Some(PieceType::Lance),
        'p' => Some(PieceType::Pawn),
        _ => None,
    }
}

fn kind_letter(kind: PieceType) -> &'static str {
    match kind {
        PieceType::King => "k",
        PieceType::Rook => "r",
        PieceType::Bishop => "b",
        PieceType::Gold => "g",
        PieceType::Silver => "s",
        PieceType::Knight => "n",
        PieceType::Lance => "l",
        PieceType::Pawn => "p",
        PieceType::PromotedRook => "+r",
        PieceType::PromotedBishop => "+b",
        PieceType::PromotedSilver => "+s",
        PieceType::PromotedKnight => "+n",
        PieceType::PromotedLance => "+l",
        PieceType::PromotedPawn => "+p",
    }
}

fn owner_of(letter: char) -> Player {
    if letter.is_ascii_uppercase() {
        Player::Sente
    } else {
        Player::Gote
    }
}

/// Parses an SFEN string (board, turn, hands; the move counter is
/// ignored) into a [`Board`].
pub fn parse(sfen: &str) -> Result<Board, SfenError> {
    let mut parts = sfen.split_whitespace();
    let board_part = parts.next().ok_or(SfenError::MissingParts)?;
    let turn_part = parts.next().ok_or(SfenError::MissingParts)?;
    let hand_part = parts.next().unwrap_or("-");

    let rows: Vec<&str> = board_part.split('/').collect();
    if rows.len() != BOARD_SIZE {
        return Err(SfenError::RowCount {
            expected: BOARD_SIZE,
            got: rows.len(),
        });
    }

    let mut board = Board::empty();
    for (row, row_str) in rows.iter().enumerate() {
        let mut col = 0usize;
        let mut chars = row_str.chars().peekable();
        while let Some(ch) = chars.next() {
            if let Some(empty_count) = ch.to_digit(10) {
                col += empty_count as usize;
            } else if ch == '+' {
                let letter = chars.next().ok_or(SfenError::IncompletePromotion)?;
                let kind = base_kind(letter)
                    .and_then(PieceType::promoted)
                    .ok_or(SfenError::UnknownPiece(letter))?;
                board.set_cell(
                    Position::new(row, col),
                    Some(Piece::new(kind, owner_of(letter))),
                );
                col += 1;
            } else {
                let kind = base_kind(ch).ok_or(SfenError::UnknownPiece(ch))?;
                board.set_cell(Position::new(row, col), Some(Piece::new(kind, owner_of(ch))));
                col += 1;
            }
        }
        if col != BOARD_SIZE {
            return Err(SfenError::ColumnCount {
                row,
                expected: BOARD_SIZE,
                got: col,
            });
        }
    }

    board.set_turn(if turn_part == "b" {
        Player::Sente
    } else {
        Player::Gote
    });

    parse_hand(hand_part, &mut board)?;
    Ok(board)
}

fn parse_hand(hand_part: &str, board: &mut Board) -> Result<(), SfenError> {
    if hand_part == "-" {
        return Ok(());
    }

    let mut chars = hand_part.chars().peekable();
    while chars.peek().is_some() {
        let mut count = 0usize;
        while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
            count = count * 10 + digit as usize;
            chars.next();
        }
        let letter = chars.next().ok_or(SfenError::HandNumberWithoutPiece)?;
        let kind = base_kind(letter).ok_or(SfenError::UnknownPiece(letter))?;
        for _ in 0..count.max(1) {
            board.add_to_hand(owner_of(letter), kind);
        }
    }
    Ok(())
}

/// Formats a board as SFEN. The move counter is not tracked and is always
/// written as 1.
pub fn format(board: &Board) -> String {
    let size = board.size();
    let mut rows = Vec::with_capacity(size);
    for row in 0..size {
        let mut row_str = String::new();
        let mut empty_run = 0usize;
        for col in 0..size {
            match board.cell(Position::new(row, col)) {
                None => empty_run += 1,
                Some(piece) => {
                    if empty_run > 0 {
                        row_str.push_str(&empty_run.to_string());
                        empty_run = 0;
                    }
                    let letter = kind_letter(piece.kind);
                    match piece.owner {
                        Player::Sente => row_str.push_str(&letter.to_ascii_uppercase()),
                        Player::Gote => row_str.push_str(letter),
                    }
                },
            }
        }
        if empty_run > 0 {
            row_str.push_str(&empty_run.to_string());
        }
        rows.push(row_str);
    }

    let turn = match board.turn() {
        Player::Sente => "b",
        Player::Gote => "w",
    };

    format!("{} {} {} 1", rows.join("/"), turn, format_hands(board))
}

// SFEN hand ordering: rook, bishop, gold, silver, knight, lance, pawn.
const HAND_ORDER: [PieceType; 7] = [
    PieceType::Rook,
    PieceType::Bishop,
    PieceType::Gold,
    PieceType::Silver,
    PieceType::Knight,
    PieceType::Lance,
    PieceType::Pawn,
];

fn format_hands(board: &Board) -> String {
    let mut out = String::new();
    for player in [Player::Sente, Player::Gote] {
        for kind in HAND_ORDER {
            let count = board.hand(player).iter().filter(|&&held| held == kind).count();
            if count == 0 {
                continue;
            }
            if count > 1 {
                out.push_str(&count.to_string());
            }
            let letter = kind_letter(kind);
            match player {
                Player::Sente => out.push_str(&letter.to_ascii_uppercase()),
                Player::Gote => out.push_str(letter),
            }
        }
    }
    if out.is_empty() {
        out.push('-');
    }
    out
}

/// Extracts just the side to move from an SFEN string.
pub fn turn_of(sfen: &str) -> Result<Player, SfenError> {
    let mut parts = sfen.split_whitespace();
    parts.next().ok_or(SfenError::MissingParts)?;
    let turn_part = parts.next().ok_or(SfenError::MissingParts)?;
    Ok(if turn_part == "b" {
        Player::Sente
    } else {
        Player::Gote
    })
}

fn cell_text(cell: Option<Piece>) -> String {
    match cell {
        None => "  ・".to_string(),
        Some(piece) => {
            let side = match piece.owner {
                Player::Sente => "先",
                Player::Gote => "後",
            };
            format!("{}{}", side, piece.kind.japanese_name())
        },
    }
}

fn hand_text(hand: &[PieceType]) -> String {
    if hand.is_empty() {
        return "なし".to_string();
    }
    // Count per kind, preserving first-appearance order.
    let mut counts: Vec<(PieceType, usize)> = Vec::new();
    for &kind in hand {
        match counts.iter_mut().find(|(counted, _)| *counted == kind) {
            Some((_, count)) => *count += 1,
            None => counts.push((kind, 1)),
        }
    }
    counts
        .iter()
        .map(|&(kind, count)| {
            if count == 1 {
                kind.japanese_name().to_string()
            } else {
                format!("{}{}", kind.japanese_name(), count)
            }
        })
        .collect::<Vec<_>>()
        .join("、")
}

const ROW_LABELS: [&str; 9] = ["一", "二", "三", "四", "五", "六", "七", "八", "九"];

/// Renders a board the way the CLI shows it: file header, bordered grid,
/// turn and hands.
pub fn ascii(board: &Board) -> String {
    let mut lines = Vec::new();
    lines.push("   9    8    7    6    5    4    3    2    1".to_string());
    lines.push("+-----------------------------------------------+".to_string());
    for row in 0..board.size() {
        let cells: Vec<String> = (0..board.size())
            .map(|col| cell_text(board.cell(Position::new(row, col))))
            .collect();
        let label = ROW_LABELS.get(row).copied().unwrap_or("");
        lines.push(format!("|{}| {}", cells.join(" "), label));
    }
    lines.push("+-----------------------------------------------+".to_string());
    lines.push(String::new());
    let turn = match board.turn() {
        Player::Sente => "先手",
        Player::Gote => "後手",
    };
    lines.push(format!("手番: {turn}"));
    lines.push(format!(
        "持ち駒: 先手={} / 後手={}",
        hand_text(board.hand(Player::Sente)),
        hand_text(board.hand(Player::Gote))
    ));
    lines.push(String::new());
    lines.join("\n")
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_starting_position() {
        let board = parse(STARTING_POSITION).unwrap();
        assert_eq!(board, Board::starting_position());
    }

    #[test]
    fn round_trip_starting_position() {
        assert_eq!(format(&Board::starting_position()), STARTING_POSITION);
    }

    #[test]
    fn round_trip_with_hands_and_promotions() {
        let sfen = "lnsgk1snl/1r4g2/p1pppp1pp/6p2/9/2P6/PP1PPPPPP/7R1/LNSGKGSNL w Bb 1";
        let board = parse(sfen).unwrap();
        assert_eq!(board.turn(), Player::Gote);
        assert_eq!(board.hand(Player::Sente), &[PieceType::Bishop]);
        assert_eq!(board.hand(Player::Gote), &[PieceType::Bishop]);
        assert_eq!(format(&board), sfen);

        let promoted = "9/9/9/9/4+P4/9/9/9/9 b - 1";
        let board = parse(promoted).unwrap();
        assert_eq!(
            board.cell(Position::new(4, 4)),
            Some(Piece::new(PieceType::PromotedPawn, Player::Sente))
        );
        assert_eq!(format(&board), promoted);
    }

    #[test]
    fn hand_counts_parse_and_format() {
        let board = parse("9/9/9/9/9/9/9/9/9 b 2P3p 1").unwrap();
        assert_eq!(
            board.hand(Player::Sente),
            &[PieceType::Pawn, PieceType::Pawn]
        );
        assert_eq!(board.hand(Player::Gote).len(), 3);
        assert_eq!(format(&board), "9/9/9/9/9/9/9/9/9 b 2P3p 1");
    }

    #[test]
    fn parse_errors() {
        assert_eq!(parse("lnsgkgsnl"), Err(SfenError::MissingParts));
        assert_eq!(
            parse("9/9/9 b - 1"),
            Err(SfenError::RowCount {
                expected: 9,
                got: 3
            })
        );
        assert_eq!(
            parse("8/9/9/9/9/9/9/9/9 b - 1"),
            Err(SfenError::ColumnCount {
                row: 0,
                expected: 9,
                got: 8
            })
        );
        assert_eq!(
            parse("x8/9/9/9/9/9/9/9/9 b - 1"),
            Err(SfenError::UnknownPiece('x'))
        );
        assert_eq!(
            parse("8+/9/9/9/9/9/9/9/9 b - 1"),
            Err(SfenError::IncompletePromotion)
        );
        assert_eq!(
            parse("9/9/9/9/9/9/9/9/9 b 2 1"),
            Err(SfenError::HandNumberWithoutPiece)
        );
    }

    #[test]
    fn turn_extraction() {
        assert_eq!(turn_of(STARTING_POSITION), Ok(Player::Sente));
        assert_eq!(turn_of("9/9/9/9/9/9/9/9/9 w - 1"), Ok(Player::Gote));
        assert_eq!(turn_of("9/9/9/9/9/9/9/9/9"), Err(SfenError::MissingParts));
    }

    #[test]
    fn ascii_rendering() {
        let rendered = ascii(&Board::starting_position());
        assert!(rendered.starts_with("   9    8    7    6    5    4    3    2    1"));
        assert!(rendered.contains("後香 後桂 後銀 後金 後王 後金 後銀 後桂 後香"));
        assert!(rendered.contains("手番: 先手"));
        assert!(rendered.contains("持ち駒: 先手=なし / 後手=なし"));

        let mut board = Board::empty();
        board.add_to_hand(Player::Sente, PieceType::Pawn);
        board.add_to_hand(Player::Sente, PieceType::Pawn);
        board.add_to_hand(Player::Sente, PieceType::Gold);
        assert!(ascii(&board).contains("先手=歩2、金"));
    }
}
