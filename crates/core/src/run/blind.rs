use super::*;
use crate::*;

impl RunState {
    /// Shuffles the deck and opens a fresh round at the current ante and blind.
    /// A failed shuffle leaves the round pending so the caller can retry.
    pub fn start_round(&mut self, events: &mut EventBus) -> Result<(), RunError> {
        let target = self.current_target()?;
        self.deck.shuffle(&mut self.rng)?;
        events.push(Event::DeckShuffled {
            cards: self.deck.len(),
        });
        self.round = Round::new(&self.config.rules, target);
        self.start_next = false;
        log::info!(
            "round {} started: ante {} blind {} target {}",
            self.round_count,
            self.ante_index,
            self.blind_index,
            target
        );
        events.push(Event::RoundStarted {
            round: self.round_count,
            ante: self.ante_index,
            blind: self.blind_index,
            target,
            hands: self.config.rules.hands,
            discards: self.config.rules.discards,
        });
        Ok(())
    }

    /// Moves past a won round: next blind, a full deck, and a new round waiting to start.
    pub fn next_round(&mut self, events: &mut EventBus) -> Result<(), RunError> {
        if !self.is_round_won() {
            return Err(RunError::RoundNotWon);
        }
        let prev_ante = self.ante_index;
        self.next_blind()?;
        if self.ante_index != prev_ante {
            events.push(Event::AnteAdvanced {
                ante: self.ante_index,
            });
        }
        self.round_count = self.round_count.saturating_add(1);
        self.start_next = true;
        self.deck = Deck::standard52();
        let target = self.current_target()?;
        self.round = Round::new(&self.config.rules, target);
        Ok(())
    }

    /// Steps the blind ladder; past the last blind the ante goes up instead.
    pub fn next_blind(&mut self) -> Result<(), RunError> {
        let next = self.blind_index + 1;
        if self.config.blind_rule(next).is_some() {
            self.blind_index = next;
            return Ok(());
        }
        self.next_ante()?;
        self.blind_index = 0;
        Ok(())
    }

    pub fn next_ante(&mut self) -> Result<(), RunError> {
        let next = self.ante_index + 1;
        if self.config.ante_rule(next).is_none() {
            return Err(RunError::MissingAnteRule(next));
        }
        self.ante_index = next;
        Ok(())
    }

    pub fn current_ante_amount(&self) -> i64 {
        self.config
            .ante_rule(self.ante_index)
            .map(|rule| rule.base_target)
            .unwrap_or(0)
    }

    pub fn current_blind_multiplier(&self) -> f64 {
        self.config
            .blind_rule(self.blind_index)
            .map(|rule| rule.target_mult)
            .unwrap_or(0.0)
    }

    fn current_target(&self) -> Result<i64, RunError> {
        if self.config.ante_rule(self.ante_index).is_none() {
            return Err(RunError::MissingAnteRule(self.ante_index));
        }
        self.config
            .target_for(self.ante_index, self.blind_index)
            .ok_or(RunError::MissingBlindRule(self.blind_index))
    }
}
