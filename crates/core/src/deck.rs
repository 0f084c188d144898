use crate::{Card, Rank, RngState, Suit};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckError {
    #[error("not enough cards: requested {requested}, {available} left")]
    InsufficientCards { requested: usize, available: usize },
    #[error("random source failure: {0}")]
    RandomSourceFailure(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn new() -> Self {
        Self::standard52()
    }

    pub fn standard52() -> Self {
        let mut cards = Vec::with_capacity(52);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }
        Self { cards }
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Fisher-Yates from the back. Every swap index is drawn before the first swap,
    /// so on a random-source error the deck is left exactly as it was.
    pub fn shuffle(&mut self, rng: &mut RngState) -> Result<(), DeckError> {
        let mut swaps = Vec::with_capacity(self.cards.len().saturating_sub(1));
        for i in (1..self.cards.len()).rev() {
            let j = rng
                .try_index_inclusive(i)
                .map_err(|err| DeckError::RandomSourceFailure(err.to_string()))?;
            swaps.push((i, j));
        }
        for (i, j) in swaps {
            self.cards.swap(i, j);
        }
        Ok(())
    }

    /// Removes and returns the top `count` cards.
    pub fn draw(&mut self, count: usize) -> Result<Vec<Card>, DeckError> {
        if count > self.cards.len() {
            return Err(DeckError::InsufficientCards {
                requested: count,
                available: self.cards.len(),
            });
        }
        Ok(self.cards.drain(..count).collect())
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard52()
    }
}
