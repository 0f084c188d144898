use crate::{
    Deck, DeckError, GameConfig, HandKind, Inventory, InventoryError, RngState, Round, RoundError,
    ScoreTables,
};
use std::collections::HashMap;
use thiserror::Error;

mod blind;
mod hand;
mod state;

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Round(#[from] RoundError),
    #[error(transparent)]
    Deck(#[from] DeckError),
    #[error("missing config for ante {0}")]
    MissingAnteRule(usize),
    #[error("missing config for blind {0}")]
    MissingBlindRule(usize),
    #[error("round not started")]
    RoundNotStarted,
    #[error("round not won")]
    RoundNotWon,
    #[error("inventory error: {0}")]
    Inventory(#[from] InventoryError),
}

/// A whole session: the ante/blind ladder, the deck, scoring levels and jokers.
#[derive(Debug)]
pub struct RunState {
    pub config: GameConfig,
    pub tables: ScoreTables,
    pub inventory: Inventory,
    pub rng: RngState,
    pub deck: Deck,
    pub round: Round,
    pub hand_levels: HashMap<HandKind, u32>,
    ante_index: usize,
    blind_index: usize,
    round_count: u32,
    start_next: bool,
}
