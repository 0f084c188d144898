use crate::{Card, Rank};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandKind {
    HighCard,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
    RoyalFlush,
}

impl HandKind {
    pub const ALL: [HandKind; 10] = [
        HandKind::HighCard,
        HandKind::OnePair,
        HandKind::TwoPair,
        HandKind::ThreeOfAKind,
        HandKind::Straight,
        HandKind::Flush,
        HandKind::FullHouse,
        HandKind::FourOfAKind,
        HandKind::StraightFlush,
        HandKind::RoyalFlush,
    ];

    pub fn id(self) -> &'static str {
        match self {
            HandKind::HighCard => "high_card",
            HandKind::OnePair => "one_pair",
            HandKind::TwoPair => "two_pair",
            HandKind::ThreeOfAKind => "three_of_a_kind",
            HandKind::Straight => "straight",
            HandKind::Flush => "flush",
            HandKind::FullHouse => "full_house",
            HandKind::FourOfAKind => "four_of_a_kind",
            HandKind::StraightFlush => "straight_flush",
            HandKind::RoyalFlush => "royal_flush",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            HandKind::HighCard => "High Card",
            HandKind::OnePair => "One Pair",
            HandKind::TwoPair => "Two Pair",
            HandKind::ThreeOfAKind => "Three of a Kind",
            HandKind::Straight => "Straight",
            HandKind::Flush => "Flush",
            HandKind::FullHouse => "Full House",
            HandKind::FourOfAKind => "Four of a Kind",
            HandKind::StraightFlush => "Straight Flush",
            HandKind::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for HandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

pub fn evaluate_hand(cards: &[Card]) -> HandKind {
    let is_flush = is_flush(cards);
    let is_straight = is_straight(cards);

    // Checked ahead of the rank counts: a straight flush has no repeated ranks anyway,
    // and the royal case has to win over the plain straight flush.
    if is_flush && is_straight {
        return if is_royal(cards) {
            HandKind::RoyalFlush
        } else {
            HandKind::StraightFlush
        };
    }

    let mut rank_counts: HashMap<Rank, usize> = HashMap::new();
    for card in cards {
        *rank_counts.entry(card.rank).or_insert(0) += 1;
    }
    let (mut pairs, mut trips, mut quads) = (0, 0, 0);
    for count in rank_counts.values() {
        match count {
            2 => pairs += 1,
            3 => trips += 1,
            4 => quads += 1,
            _ => {}
        }
    }

    if quads > 0 {
        HandKind::FourOfAKind
    } else if trips == 1 && pairs == 1 {
        HandKind::FullHouse
    } else if is_flush {
        HandKind::Flush
    } else if is_straight {
        HandKind::Straight
    } else if trips == 1 {
        HandKind::ThreeOfAKind
    } else if pairs == 2 {
        HandKind::TwoPair
    } else if pairs == 1 {
        HandKind::OnePair
    } else {
        HandKind::HighCard
    }
}

fn is_flush(cards: &[Card]) -> bool {
    if cards.len() < 5 {
        return false;
    }
    let suit = cards[0].suit;
    cards.iter().all(|card| card.suit == suit)
}

fn is_straight(cards: &[Card]) -> bool {
    if cards.len() != 5 {
        return false;
    }
    let mut orders: Vec<u8> = cards.iter().map(Card::sort_order).collect();
    orders.sort_unstable();
    // Wheel: the ace plays low only here.
    if orders == [2, 3, 4, 5, 14] {
        return true;
    }
    orders.windows(2).all(|w| w[1] == w[0] + 1)
}

fn is_royal(cards: &[Card]) -> bool {
    let mut orders: Vec<u8> = cards.iter().map(Card::sort_order).collect();
    orders.sort_unstable();
    orders == [10, 11, 12, 13, 14]
}
