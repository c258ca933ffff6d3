//! USI coordinates and moves. Files count 9..1 from the left edge of the
//! internal grid, ranks a..i from the top, so column 0 is file 9 and
//! row 0 is rank a.

use thiserror::Error;

use crate::board::{PieceType, Position, BOARD_SIZE};
use crate::moves::Move;

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum UsiError {
    #[error("invalid USI position [{0}]")]
    InvalidPosition(String),
    #[error("unknown USI piece letter [{0}]")]
    UnknownPiece(char),
    #[error("invalid USI move [{0}]")]
    InvalidMove(String),
}

/// "7g"-style coordinate for a position.
pub fn position_to_usi(pos: Position) -> String {
    let file = BOARD_SIZE - pos.col;
    let rank = (b'a' + pos.row as u8) as char;
    format!("{file}{rank}")
}

/// Parses a "7g"-style coordinate.
pub fn parse_position(text: &str) -> Result<Position, UsiError> {
    let bad = || UsiError::InvalidPosition(text.to_string());
    let mut chars = text.chars();
    let file = chars
        .next()
        .and_then(|c| c.to_digit(10))
        .filter(|&f| (1..=BOARD_SIZE as u32).contains(&f))
        .ok_or_else(bad)? as usize;
    let rank = chars.next().filter(|c| ('a'..='i').contains(c)).ok_or_else(bad)?;
    if chars.next().is_some() {
        return Err(bad());
    }
    Ok(Position::new(rank as usize - 'a' as usize, BOARD_SIZE - file))
}

/// The USI letter for a piece kind, "+"-prefixed for promoted forms.
pub fn piece_to_usi(kind: PieceType) -> &'static str {
    match kind {
        PieceType::King => "K",
        PieceType::Rook => "R",
        PieceType::Bishop => "B",
        PieceType::Gold => "G",
        PieceType::Silver => "S",
        PieceType::Knight => "N",
        PieceType::Lance => "L",
        PieceType::Pawn => "P",
        PieceType::PromotedRook => "+R",
        PieceType::PromotedBishop => "+B",
        PieceType::PromotedSilver => "+S",
        PieceType::PromotedKnight => "+N",
        PieceType::PromotedLance => "+L",
        PieceType::PromotedPawn => "+P",
    }
}

/// Parses a droppable piece letter (promoted forms are never in hand).
fn parse_drop_piece(letter: char) -> Result<PieceType, UsiError> {
    match letter {
        'K' => Ok(PieceType::King),
        'R' => Ok(PieceType::Rook),
        'B' => Ok(PieceType::Bishop),
        'G' => Ok(PieceType::Gold),
        'S' => Ok(PieceType::Silver),
        'N' => Ok(PieceType::Knight),
        'L' => Ok(PieceType::Lance),
        'P' => Ok(PieceType::Pawn),
        _ => Err(UsiError::UnknownPiece(letter)),
    }
}

/// Formats a move as USI: "7g7f", "8h2b+", or "P*5e".
pub fn format_move(mv: &Move) -> String {
    match *mv {
        Move::Normal { from, to, promote } => format!(
            "{}{}{}",
            position_to_usi(from),
            position_to_usi(to),
            if promote { "+" } else { "" }
        ),
        Move::Drop { piece, to } => {
            format!("{}*{}", piece_to_usi(piece.demoted()), position_to_usi(to))
        },
    }
}

/// Parses a USI move string.
pub fn parse_move(text: &str) -> Result<Move, UsiError> {
    let bad = || UsiError::InvalidMove(text.to_string());

    if let Some((piece_part, to_part)) = text.split_once('*') {
        let mut letters = piece_part.chars();
        let letter = letters.next().ok_or_else(bad)?;
        if letters.next().is_some() {
            return Err(bad());
        }
        let piece = parse_drop_piece(letter)?;
        let to = parse_position(to_part)?;
        return Ok(Move::Drop { piece, to });
    }

    let (body, promote) = match text.strip_suffix('+') {
        Some(body) => (body, true),
        None => (text, false),
    };
    if body.len() != 4 || !body.is_ascii() {
        return Err(bad());
    }
    let from = parse_position(&body[..2])?;
    let to = parse_position(&body[2..])?;
    Ok(Move::Normal { from, to, promote })
}
