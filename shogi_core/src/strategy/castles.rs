//! Castle definitions. Coordinates are Sente's orientation; comments give
//! the traditional square names.

use lazy_static::lazy_static;

use super::{all, any, at, Criteria, Strategy, TurnRange};
use crate::board::PieceType::{Bishop, Gold, King, Lance, Rook, Silver};

fn castle(name: &'static str, condition: super::Condition) -> Strategy {
    Strategy {
        name,
        turn_range: TurnRange::default(),
        criteria: Criteria::Single(condition),
    }
}

lazy_static! {
    pub static ref CASTLES: Vec<Strategy> = vec![
        // 玉8八、金7八・6七、銀7七
        castle(
            "金矢倉",
            all(vec![
                at(King, 7, 1),
                at(Gold, 7, 2),
                at(Gold, 6, 3),
                at(Silver, 6, 2),
            ]),
        ),
        // 玉8八、金7八・6七、銀6八
        castle(
            "銀矢倉",
            all(vec![
                at(King, 7, 1),
                at(Gold, 7, 2),
                at(Gold, 6, 3),
                at(Silver, 7, 3),
            ]),
        ),
        // 玉7八、金6七・6八、銀7七
        castle(
            "片矢倉",
            all(vec![
                at(King, 7, 2),
                at(Gold, 6, 3),
                at(Gold, 7, 3),
                at(Silver, 6, 2),
            ]),
        ),
        // 玉6九、金5八・7八、銀6八
        castle(
            "カニ囲い",
            all(vec![
                at(King, 8, 3),
                at(Gold, 7, 4),
                at(Gold, 7, 2),
                at(Silver, 7, 3),
            ]),
        ),
        // 玉6九or7九、金5八・7八、銀4七・6七
        castle(
            "雁木囲い",
            all(vec![
                any(vec![at(King, 8, 3), at(King, 8, 2)]),
                at(Gold, 7, 4),
                at(Gold, 7, 2),
                at(Silver, 6, 5),
                at(Silver, 6, 3),
            ]),
        ),
        // 玉2八、金3八・5八
        castle(
            "美濃囲い",
            all(vec![at(King, 7, 7), at(Gold, 7, 6), at(Gold, 7, 4)]),
        ),
        // 玉2八、金3八、銀4九
        castle(
            "片美濃",
            all(vec![at(King, 7, 7), at(Gold, 7, 6), at(Silver, 8, 5)]),
        ),
        // 玉2八、金3八・4七、銀4九
        castle(
            "高美濃",
            all(vec![
                at(King, 7, 7),
                at(Gold, 7, 6),
                at(Gold, 6, 5),
                at(Silver, 8, 5),
            ]),
        ),
        // 玉2八、金3八・4七、銀2七
        castle(
            "銀冠",
            all(vec![
                at(King, 7, 7),
                at(Gold, 7, 6),
                at(Gold, 6, 5),
                at(Silver, 6, 7),
            ]),
        ),
        // 玉2八、金3八・4七、銀3七
        castle(
            "ダイヤモンド美濃",
            all(vec![
                at(King, 7, 7),
                at(Gold, 7, 6),
                at(Gold, 6, 5),
                at(Silver, 6, 6),
            ]),
        ),
        // 玉2八、金3八・5七、銀4六
        castle(
            "木村美濃",
            all(vec![
                at(King, 7, 7),
                at(Gold, 7, 6),
                at(Gold, 6, 4),
                at(Silver, 5, 5),
            ]),
        ),
        // 飛2八、玉8八、金5八・6九、銀7九、角7七
        castle(
            "左美濃",
            all(vec![
                at(Rook, 7, 7),
                at(King, 7, 1),
                at(Gold, 7, 4),
                at(Gold, 8, 3),
                at(Silver, 8, 2),
                at(Bishop, 6, 2),
            ]),
        ),
        // 飛2八、玉8七、金5八・6八、銀7八
        castle(
            "天守閣美濃",
            all(vec![
                at(Rook, 7, 7),
                at(King, 6, 1),
                at(Gold, 7, 4),
                at(Gold, 7, 3),
                at(Silver, 7, 2),
            ]),
        ),
        // 飛2八、玉7八、金5八・6九、銀7九、角8八
        castle(
            "舟囲い",
            all(vec![
                at(Rook, 7, 7),
                at(King, 7, 2),
                at(Gold, 7, 4),
                at(Gold, 8, 3),
                at(Silver, 8, 2),
                at(Bishop, 7, 1),
            ]),
        ),
        // 飛2八、玉7八、金7九・5八、銀6八or5七
        castle(
            "elmo囲い",
            all(vec![
                at(Rook, 7, 7),
                at(King, 7, 2),
                at(Gold, 8, 2),
                at(Gold, 7, 4),
                any(vec![at(Silver, 7, 3), at(Silver, 6, 4)]),
            ]),
        ),
        // 飛2八、玉9九、金7八・7九、銀8八、香9八
        castle(
            "居飛車穴熊",
            all(vec![
                at(Rook, 7, 7),
                at(King, 8, 0),
                at(Gold, 7, 2),
                at(Gold, 8, 2),
                at(Silver, 7, 1),
                at(Lance, 7, 0),
            ]),
        ),
        // 飛2八、玉9九、金7九・8八、銀7八、香9八
        castle(
            "松尾流穴熊",
            all(vec![
                at(Rook, 7, 7),
                at(King, 8, 0),
                at(Gold, 8, 2),
                at(Gold, 7, 1),
                at(Silver, 7, 2),
                at(Lance, 7, 0),
            ]),
        ),
        // 飛2八、玉9九、金7九・6八、銀8八・7七、香9八
        castle(
            "銀冠穴熊",
            all(vec![
                at(Rook, 7, 7),
                at(King, 8, 0),
                at(Gold, 8, 2),
                at(Gold, 7, 3),
                at(Silver, 7, 1),
                at(Silver, 6, 2),
                at(Lance, 7, 0),
            ]),
        ),
        // 玉1九、金2八・3九、銀2九、香1八
        castle(
            "振り飛車穴熊",
            all(vec![
                at(King, 8, 8),
                at(Gold, 7, 7),
                at(Gold, 8, 6),
                at(Silver, 8, 7),
                at(Lance, 7, 8),
            ]),
        ),
        // 玉3八、金4八・5八、銀2八
        castle(
            "金無双",
            all(vec![
                at(King, 7, 6),
                at(Gold, 7, 5),
                at(Gold, 7, 4),
                at(Silver, 7, 7),
            ]),
        ),
        // 飛2八、玉6八、金7八・7九、銀8八
        castle(
            "ミレニアム",
            all(vec![
                at(Rook, 7, 7),
                at(King, 7, 3),
                at(Gold, 7, 2),
                at(Gold, 8, 2),
                at(Silver, 7, 1),
            ]),
        ),
        // 玉5九or5八、金4九or4八
        castle(
            "中住まい",
            all(vec![
                any(vec![at(King, 8, 4), at(King, 7, 4)]),
                any(vec![at(Gold, 8, 5), at(Gold, 7, 5)]),
            ]),
        ),
        // 玉4八、金5八・3八
        castle(
            "中原囲い",
            all(vec![at(King, 7, 5), at(Gold, 7, 4), at(Gold, 7, 6)]),
        ),
        // 玉7九、金6八・7八
        castle(
            "ボナンザ囲い",
            all(vec![at(King, 8, 2), at(Gold, 7, 3), at(Gold, 7, 2)]),
        ),
        // 玉2八、金3八、銀4八
        castle(
            "右玉",
            all(vec![at(King, 7, 7), at(Gold, 7, 6), at(Silver, 7, 5)]),
        ),
    ];
}
