use crate::JokerEffect;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Score {
    pub chips: i64,
    pub mult: i64,
}

impl Score {
    pub fn total(&self) -> i64 {
        self.chips.saturating_mul(self.mult)
    }

    pub fn apply(&mut self, effect: &JokerEffect) {
        match effect {
            JokerEffect::AddChips(value) => self.chips = self.chips.saturating_add(*value),
            JokerEffect::AddMult(value) => self.mult = self.mult.saturating_add(*value),
            JokerEffect::MultiplyMult(value) => self.mult = self.mult.saturating_mul(*value),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoreTraceStep {
    pub source: String,
    pub effect: JokerEffect,
    pub before: Score,
    pub after: Score,
}
