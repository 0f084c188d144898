use crate::{evaluate_hand, Card, GameConfig, HandKind, JokerDef, LevelRule, Score, ScoreTraceStep};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const MAX_HAND_LEVEL: u32 = 10;

/// Chip and mult per hand kind and level.
#[derive(Debug, Clone)]
pub struct ScoreTables {
    levels: HashMap<HandKind, Vec<LevelRule>>,
}

impl ScoreTables {
    pub fn from_config(config: &GameConfig) -> Self {
        let levels = config
            .hands
            .iter()
            .map(|rule| (rule.kind, rule.levels.clone()))
            .collect();
        Self { levels }
    }

    pub fn standard() -> Self {
        Self::from_config(&GameConfig::standard())
    }

    /// `(chips, mult)` for a kind at `level`. Missing entries yield `(0, 0)`.
    pub fn chip_and_mult(&self, kind: HandKind, level: u32) -> (i64, i64) {
        if level == 0 {
            return (0, 0);
        }
        self.levels
            .get(&kind)
            .and_then(|levels| levels.get(level as usize - 1))
            .map(|rule| (rule.chips, rule.mult))
            .unwrap_or((0, 0))
    }

    pub fn max_level(&self, kind: HandKind) -> u32 {
        self.levels
            .get(&kind)
            .map(|levels| levels.len() as u32)
            .unwrap_or(0)
    }
}

impl Default for ScoreTables {
    fn default() -> Self {
        Self::standard()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub hand: HandKind,
    pub level: u32,
    pub base: Score,
    pub rank_chips: i64,
    pub total: Score,
    pub trace: Vec<ScoreTraceStep>,
}

impl ScoreBreakdown {
    pub fn chips(&self) -> i64 {
        self.total.chips
    }

    pub fn mult(&self) -> i64 {
        self.total.mult
    }

    pub fn score(&self) -> i64 {
        self.total.total()
    }
}

/// Scores `cards` as played hand `hand` at `level`, then runs the jokers over it.
pub fn score_hand(
    hand: HandKind,
    level: u32,
    cards: &[Card],
    tables: &ScoreTables,
    jokers: &[JokerDef],
) -> ScoreBreakdown {
    let (base_chips, base_mult) = tables.chip_and_mult(hand, level);
    let base = Score {
        chips: base_chips,
        mult: base_mult,
    };
    let rank_chips: i64 = cards.iter().map(Card::value).sum();
    let mut total = Score {
        chips: base.chips.saturating_add(rank_chips),
        mult: base.mult,
    };

    let mut ordered: Vec<&JokerDef> = jokers.iter().collect();
    // Stable, so jokers of the same kind keep their slot order.
    ordered.sort_by_key(|joker| joker.effect.stage());
    let mut trace = Vec::with_capacity(ordered.len());
    for joker in ordered {
        let before = total;
        total.apply(&joker.effect);
        trace.push(ScoreTraceStep {
            source: joker.id.clone(),
            effect: joker.effect,
            before,
            after: total,
        });
    }

    ScoreBreakdown {
        hand,
        level,
        base,
        rank_chips,
        total,
        trace,
    }
}

/// Evaluates and scores `cards` at the level recorded in `hand_levels` (default 1).
pub fn score_cards(
    cards: &[Card],
    tables: &ScoreTables,
    hand_levels: &HashMap<HandKind, u32>,
    jokers: &[JokerDef],
) -> ScoreBreakdown {
    let hand = evaluate_hand(cards);
    let level = hand_levels.get(&hand).copied().unwrap_or(1);
    score_hand(hand, level, cards, tables, jokers)
}
