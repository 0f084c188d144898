use crate::{
    score_cards, sort_cards, Action, Card, Deck, DeckError, Event, EventBus, HandKind, JokerDef,
    RoundPhase, RoundRule, RoundStats, ScoreBreakdown, ScoreTables,
};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoundError {
    #[error("deck error: {0}")]
    Deck(#[from] DeckError),
    #[error("no card in hand matches {0:?}")]
    UnresolvedSelection(String),
    #[error("too many cards selected: {selected} (max {max})")]
    TooManyCards { selected: usize, max: usize },
    #[error("no cards selected")]
    EmptySelection,
    #[error("no discards left")]
    NoDiscardsRemaining,
    #[error("no hands left")]
    NoHandsLeft,
    #[error("invalid phase: {0:?}")]
    InvalidPhase(RoundPhase),
}

/// One blind's worth of play. The deck stays with the run and is passed in for draws.
#[derive(Debug, Clone)]
pub struct Round {
    pub hand: Vec<Card>,
    pub remain: Vec<Card>,
    pub selected: Vec<Card>,
    pub stats: RoundStats,
    phase: RoundPhase,
    last_action: Option<Action>,
    last_selected: usize,
    default_deal: usize,
    max_selected: usize,
}

impl Round {
    pub fn new(rules: &RoundRule, score_target: i64) -> Self {
        Self {
            hand: Vec::new(),
            remain: Vec::new(),
            selected: Vec::new(),
            stats: RoundStats {
                hands_left: rules.hands,
                discards_left: rules.discards,
                total_score: 0,
                score_target,
            },
            phase: RoundPhase::AwaitingDraw,
            last_action: None,
            last_selected: 0,
            default_deal: rules.default_deal,
            max_selected: rules.max_selected,
        }
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn last_action(&self) -> Option<Action> {
        self.last_action
    }

    pub fn stats(&self) -> RoundStats {
        self.stats
    }

    pub fn is_won(&self) -> bool {
        self.stats.total_score >= self.stats.score_target
    }

    /// Cards to draw next: the full deal on the first draw, nothing after a cancel,
    /// otherwise one for each card that just left the hand.
    pub fn next_draw_count(&self) -> usize {
        match self.last_action {
            None => self.default_deal,
            Some(Action::Cancel) => 0,
            Some(Action::Play | Action::Discard) => self.last_selected,
        }
    }

    pub fn draw(
        &mut self,
        deck: &mut Deck,
        count: usize,
        events: &mut EventBus,
    ) -> Result<Vec<Card>, RoundError> {
        self.expect_phase(&[RoundPhase::AwaitingDraw])?;
        let drawn = deck.draw(count)?;
        let mut hand = std::mem::take(&mut self.remain);
        hand.extend_from_slice(&drawn);
        sort_cards(&mut hand);
        self.hand = hand;
        self.selected.clear();
        self.phase = RoundPhase::AwaitingSelection;
        if !drawn.is_empty() {
            events.push(Event::HandDealt {
                cards: drawn.clone(),
            });
        }
        Ok(drawn)
    }

    /// Card in the current hand with this label.
    pub fn resolve_label(&self, label: &str) -> Result<Card, RoundError> {
        let unresolved = || RoundError::UnresolvedSelection(label.to_string());
        let card: Card = label.parse().map_err(|_| unresolved())?;
        if self.hand.contains(&card) {
            Ok(card)
        } else {
            Err(unresolved())
        }
    }

    /// Selects cards by label. Labels that match nothing in hand are skipped.
    pub fn select_cards<S: AsRef<str>>(
        &mut self,
        labels: &[S],
        events: &mut EventBus,
    ) -> Result<(), RoundError> {
        self.expect_phase(&[RoundPhase::AwaitingSelection, RoundPhase::AwaitingAction])?;
        let mut selected: Vec<Card> = Vec::with_capacity(labels.len());
        let mut dropped = 0;
        for label in labels {
            match self.resolve_label(label.as_ref()) {
                Ok(card) if !selected.contains(&card) => selected.push(card),
                Ok(_) => {}
                Err(err) => {
                    log::debug!("dropping selection: {err}");
                    dropped += 1;
                }
            }
        }
        if selected.len() > self.max_selected {
            return Err(RoundError::TooManyCards {
                selected: selected.len(),
                max: self.max_selected,
            });
        }
        self.remain = self
            .hand
            .iter()
            .filter(|card| !selected.contains(card))
            .copied()
            .collect();
        events.push(Event::CardsSelected {
            count: selected.len(),
            dropped,
        });
        self.selected = selected;
        self.phase = RoundPhase::AwaitingAction;
        Ok(())
    }

    pub fn play(
        &mut self,
        tables: &ScoreTables,
        hand_levels: &HashMap<HandKind, u32>,
        jokers: &[JokerDef],
        events: &mut EventBus,
    ) -> Result<ScoreBreakdown, RoundError> {
        self.expect_phase(&[RoundPhase::AwaitingAction])?;
        if self.selected.is_empty() {
            return Err(RoundError::EmptySelection);
        }
        if self.stats.hands_left == 0 {
            return Err(RoundError::NoHandsLeft);
        }
        let breakdown = score_cards(&self.selected, tables, hand_levels, jokers);
        self.stats.hands_left -= 1;
        self.stats.total_score = self.stats.total_score.saturating_add(breakdown.score());
        self.finish_action(Action::Play);
        events.push(Event::HandScored {
            hand: breakdown.hand,
            level: breakdown.level,
            chips: breakdown.chips(),
            mult: breakdown.mult(),
            score: breakdown.score(),
            total: self.stats.total_score,
        });

        if self.is_won() {
            self.phase = RoundPhase::Won;
            events.push(Event::RoundWon {
                score: self.stats.total_score,
                target: self.stats.score_target,
            });
        } else if self.stats.hands_left == 0 {
            self.phase = RoundPhase::Lost;
            events.push(Event::RoundLost {
                score: self.stats.total_score,
                target: self.stats.score_target,
            });
        }
        Ok(breakdown)
    }

    pub fn discard(&mut self, events: &mut EventBus) -> Result<(), RoundError> {
        self.expect_phase(&[RoundPhase::AwaitingAction])?;
        if self.stats.discards_left == 0 {
            return Err(RoundError::NoDiscardsRemaining);
        }
        self.stats.discards_left -= 1;
        let count = self.selected.len();
        self.finish_action(Action::Discard);
        events.push(Event::HandDiscarded {
            count,
            discards_left: self.stats.discards_left,
        });
        Ok(())
    }

    pub fn cancel(&mut self, events: &mut EventBus) -> Result<(), RoundError> {
        self.expect_phase(&[RoundPhase::AwaitingSelection, RoundPhase::AwaitingAction])?;
        self.remain = self.hand.clone();
        self.finish_action(Action::Cancel);
        events.push(Event::SelectionCancelled);
        Ok(())
    }

    fn finish_action(&mut self, action: Action) {
        self.last_selected = self.selected.len();
        self.last_action = Some(action);
        self.selected.clear();
        self.phase = RoundPhase::AwaitingDraw;
    }

    fn expect_phase(&self, allowed: &[RoundPhase]) -> Result<(), RoundError> {
        if allowed.contains(&self.phase) {
            Ok(())
        } else {
            Err(RoundError::InvalidPhase(self.phase))
        }
    }
}
