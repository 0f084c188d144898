use crate::JokerDef;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Inventory {
    pub joker_slots: usize,
    pub jokers: Vec<JokerDef>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    #[error("no joker slots")]
    NoJokerSlots,
}

impl Inventory {
    pub fn new() -> Self {
        Self::with_slots(5)
    }

    pub fn with_slots(joker_slots: usize) -> Self {
        Self {
            joker_slots,
            jokers: Vec::new(),
        }
    }

    pub fn add_joker(&mut self, joker: JokerDef) -> Result<(), InventoryError> {
        if self.joker_count() >= self.joker_slots {
            return Err(InventoryError::NoJokerSlots);
        }
        self.jokers.push(joker);
        Ok(())
    }

    pub fn joker_count(&self) -> usize {
        self.jokers.len()
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}
