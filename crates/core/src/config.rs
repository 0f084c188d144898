use crate::HandKind;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct LevelRule {
    pub chips: i64,
    pub mult: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandRule {
    pub kind: HandKind,
    /// Index 0 is level 1.
    pub levels: Vec<LevelRule>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BlindRule {
    pub target_mult: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnteRule {
    pub ante: usize,
    pub base_target: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundRule {
    pub default_deal: usize,
    pub hands: u8,
    pub discards: u8,
    pub max_selected: usize,
    pub joker_slots: usize,
}

impl Default for RoundRule {
    fn default() -> Self {
        Self {
            default_deal: 8,
            hands: 4,
            discards: 3,
            max_selected: 5,
            joker_slots: 5,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameConfig {
    pub rules: RoundRule,
    pub hands: Vec<HandRule>,
    pub blinds: Vec<BlindRule>,
    pub antes: Vec<AnteRule>,
}

const STANDARD_BLINDS: [f64; 3] = [1.0, 1.5, 2.0];

const STANDARD_ANTES: [i64; 15] = [
    300,
    800,
    2_800,
    6_000,
    11_000,
    20_000,
    35_000,
    50_000,
    110_000,
    560_000,
    7_200_000,
    300_000_000,
    47_000_000_000,
    2_900 * 100_000_000_000,
    7_700 * 1_000_000_000_000,
];

const STANDARD_HANDS: [(HandKind, i64, [i64; 10]); 10] = [
    (HandKind::HighCard, 1, [5, 10, 15, 20, 25, 30, 35, 40, 45, 50]),
    (HandKind::OnePair, 2, [10, 15, 20, 25, 30, 35, 40, 45, 50, 60]),
    (HandKind::TwoPair, 2, [20, 25, 30, 35, 40, 45, 50, 55, 60, 70]),
    (HandKind::ThreeOfAKind, 3, [30, 40, 50, 60, 70, 80, 90, 100, 110, 130]),
    (HandKind::Straight, 4, [30, 40, 50, 60, 70, 80, 90, 100, 110, 130]),
    (HandKind::Flush, 4, [35, 45, 55, 65, 75, 85, 95, 105, 115, 135]),
    (HandKind::FullHouse, 4, [40, 55, 70, 85, 100, 115, 130, 145, 160, 190]),
    (HandKind::FourOfAKind, 7, [60, 80, 100, 120, 140, 160, 180, 200, 220, 260]),
    (HandKind::StraightFlush, 8, [100, 130, 160, 190, 220, 250, 280, 310, 340, 400]),
    (HandKind::RoyalFlush, 8, [100, 140, 180, 220, 260, 300, 340, 380, 420, 500]),
];

impl GameConfig {
    /// The built-in balance tables.
    pub fn standard() -> Self {
        let hands = STANDARD_HANDS
            .iter()
            .map(|(kind, mult, chips)| HandRule {
                kind: *kind,
                levels: chips
                    .iter()
                    .map(|chips| LevelRule {
                        chips: *chips,
                        mult: *mult,
                    })
                    .collect(),
            })
            .collect();
        let blinds = STANDARD_BLINDS
            .iter()
            .map(|target_mult| BlindRule {
                target_mult: *target_mult,
            })
            .collect();
        let antes = STANDARD_ANTES
            .iter()
            .enumerate()
            .map(|(ante, base_target)| AnteRule {
                ante,
                base_target: *base_target,
            })
            .collect();
        Self {
            rules: RoundRule::default(),
            hands,
            blinds,
            antes,
        }
    }

    pub fn blind_rule(&self, index: usize) -> Option<&BlindRule> {
        self.blinds.get(index)
    }

    pub fn ante_rule(&self, ante: usize) -> Option<&AnteRule> {
        self.antes.iter().find(|rule| rule.ante == ante)
    }

    /// Score needed to win the round at this ante and blind, truncated toward zero.
    pub fn target_for(&self, ante: usize, blind: usize) -> Option<i64> {
        let base = self.ante_rule(ante)?.base_target;
        let mult = self.blind_rule(blind)?.target_mult;
        Some((base as f64 * mult).trunc() as i64)
    }

    pub fn max_ante(&self) -> Option<usize> {
        self.antes.iter().map(|rule| rule.ante).max()
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::standard()
    }
}
