use crate::{Card, HandKind};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Event {
    RoundStarted {
        round: u32,
        ante: usize,
        blind: usize,
        target: i64,
        hands: u8,
        discards: u8,
    },
    DeckShuffled { cards: usize },
    HandDealt { cards: Vec<Card> },
    CardsSelected { count: usize, dropped: usize },
    HandScored {
        hand: HandKind,
        level: u32,
        chips: i64,
        mult: i64,
        score: i64,
        total: i64,
    },
    HandDiscarded { count: usize, discards_left: u8 },
    SelectionCancelled,
    RoundWon { score: i64, target: i64 },
    RoundLost { score: i64, target: i64 },
    AnteAdvanced { ante: usize },
    JokerAdded { id: String },
    HandUpgraded { hand: HandKind, level: u32 },
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        log::debug!("event: {event:?}");
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
