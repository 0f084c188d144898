use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum JokerRarity {
    Common,
    Uncommon,
    Rare,
    Legendary,
}

/// What a joker does to a scored hand. One effect per joker.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum JokerEffect {
    AddChips(i64),
    AddMult(i64),
    MultiplyMult(i64),
}

impl JokerEffect {
    /// Application pass: chips, then additive mult, then multiplicative mult.
    pub fn stage(&self) -> u8 {
        match self {
            JokerEffect::AddChips(_) => 0,
            JokerEffect::AddMult(_) => 1,
            JokerEffect::MultiplyMult(_) => 2,
        }
    }
}

impl fmt::Display for JokerEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JokerEffect::AddChips(value) => write!(f, "+{value} chips"),
            JokerEffect::AddMult(value) => write!(f, "+{value} mult"),
            JokerEffect::MultiplyMult(value) => write!(f, "x{value} mult"),
        }
    }
}

/// A joker as handed over by whatever loads the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JokerDef {
    pub id: String,
    pub name: String,
    pub rarity: JokerRarity,
    #[serde(default)]
    pub description: String,
    pub effect: JokerEffect,
}
