//! Opening tactic definitions, Sente's orientation.

use lazy_static::lazy_static;

use super::{all, any, at, Criteria, Strategy, TurnRange};
use crate::board::PieceType::{Bishop, Pawn, Rook, Silver};

fn single(name: &'static str, from: Option<u32>, condition: super::Condition) -> Strategy {
    Strategy {
        name,
        turn_range: TurnRange { from, to: None },
        criteria: Criteria::Single(condition),
    }
}

lazy_static! {
    pub static ref TACTICS: Vec<Strategy> = vec![
        // 飛2八
        single("居飛車", None, at(Rook, 7, 7)),
        // 飛8八、ただし相手が居飛車のときのみ
        Strategy {
            name: "向かい飛車",
            turn_range: TurnRange {
                from: Some(5),
                to: None,
            },
            criteria: Criteria::Versus {
                own: at(Rook, 7, 1),
                opponent: at(Rook, 7, 7),
            },
        },
        // 飛7八
        single("三間飛車", None, at(Rook, 7, 2)),
        // 飛6八、角7七、銀7八
        single(
            "四間飛車",
            None,
            all(vec![at(Rook, 7, 3), at(Bishop, 6, 2), at(Silver, 7, 2)]),
        ),
        // 飛5八
        single("中飛車", None, at(Rook, 7, 4)),
        // 飛4八、銀5六
        single(
            "右四間飛車",
            None,
            all(vec![at(Rook, 7, 5), at(Silver, 5, 4)]),
        ),
        // 飛5八、歩5五、角7七
        single(
            "ゴキゲン中飛車",
            None,
            all(vec![at(Rook, 7, 4), at(Pawn, 4, 4), at(Bishop, 6, 2)]),
        ),
        // 飛2八、銀2六or2五
        single(
            "棒銀",
            Some(10),
            all(vec![
                at(Rook, 7, 7),
                any(vec![at(Silver, 5, 7), at(Silver, 4, 7)]),
            ]),
        ),
        // 銀3六or4六
        single(
            "早繰り銀",
            Some(10),
            any(vec![at(Silver, 5, 6), at(Silver, 5, 5)]),
        ),
        // 銀5六
        single("腰掛け銀", Some(10), at(Silver, 5, 4)),
    ];
}
