use pokerun_core::{Card, Deck, DeckError, Rank, RngState, Suit};
use rand::RngCore;
use std::collections::HashSet;

struct NoEntropy;

impl RngCore for NoEntropy {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn next_u64(&mut self) -> u64 {
        0
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(0);
    }

    fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand::Error> {
        Err(rand::Error::new(std::io::Error::new(
            std::io::ErrorKind::Other,
            "entropy unavailable",
        )))
    }
}

fn unique(cards: &[Card]) -> HashSet<Card> {
    cards.iter().copied().collect()
}

#[test]
fn standard_deck_is_suit_major() {
    let deck = Deck::standard52();
    assert_eq!(deck.len(), 52);
    assert_eq!(unique(deck.cards()).len(), 52);
    assert_eq!(deck.cards()[0], Card::new(Suit::Clubs, Rank::Two));
    assert_eq!(deck.cards()[12], Card::new(Suit::Clubs, Rank::Ace));
    assert_eq!(deck.cards()[13], Card::new(Suit::Diamonds, Rank::Two));
    assert_eq!(deck.cards()[51], Card::new(Suit::Spades, Rank::Ace));
}

#[test]
fn shuffle_is_a_permutation() {
    let base = unique(Deck::standard52().cards());
    for seed in 0..32 {
        let mut deck = Deck::standard52();
        deck.shuffle(&mut RngState::from_seed(seed)).expect("shuffle");
        assert_eq!(deck.len(), 52);
        assert_eq!(unique(deck.cards()), base);
    }
}

#[test]
fn shuffle_reorders() {
    let mut deck = Deck::standard52();
    deck.shuffle(&mut RngState::from_seed(7)).expect("shuffle");
    assert_ne!(deck, Deck::standard52());
}

#[test]
fn secure_shuffle_is_a_permutation() {
    let mut deck = Deck::standard52();
    deck.shuffle(&mut RngState::secure()).expect("os entropy");
    assert_eq!(unique(deck.cards()), unique(Deck::standard52().cards()));
}

#[test]
fn failed_shuffle_leaves_deck_untouched() {
    let mut deck = Deck::standard52();
    let mut rng = RngState::from_source(Box::new(NoEntropy));
    let err = deck.shuffle(&mut rng).unwrap_err();
    assert!(matches!(err, DeckError::RandomSourceFailure(_)));
    assert_eq!(deck, Deck::standard52());
}

#[test]
fn draw_takes_from_the_top() {
    let mut deck = Deck::standard52();
    let before = deck.len();
    let drawn = deck.draw(5).expect("draw");
    assert_eq!(before, deck.len() + 5);
    assert_eq!(drawn[0], Card::new(Suit::Clubs, Rank::Two));
    assert_eq!(drawn[4], Card::new(Suit::Clubs, Rank::Six));
    for card in &drawn {
        assert!(!deck.contains(card));
    }
}

#[test]
fn draw_conserves_cards_after_shuffle() {
    let mut deck = Deck::standard52();
    deck.shuffle(&mut RngState::from_seed(3)).expect("shuffle");
    let first = deck.draw(8).expect("draw");
    let second = deck.draw(13).expect("draw");
    assert_eq!(deck.len(), 52 - 21);
    let mut all = unique(deck.cards());
    all.extend(first);
    all.extend(second);
    assert_eq!(all.len(), 52);
}

#[test]
fn draw_zero_is_a_noop() {
    let mut deck = Deck::standard52();
    assert!(deck.draw(0).expect("draw").is_empty());
    assert_eq!(deck, Deck::standard52());
}

#[test]
fn overdraw_is_an_error() {
    let mut deck = Deck::standard52();
    deck.draw(50).expect("draw");
    let err = deck.draw(3).unwrap_err();
    assert_eq!(
        err,
        DeckError::InsufficientCards {
            requested: 3,
            available: 2
        }
    );
    assert_eq!(deck.len(), 2);
}
