use super::*;
use crate::*;

impl RunState {
    pub fn next_draw_count(&self) -> usize {
        self.round.next_draw_count()
    }

    pub fn draw(&mut self, count: usize, events: &mut EventBus) -> Result<Vec<Card>, RunError> {
        self.ensure_started()?;
        Ok(self.round.draw(&mut self.deck, count, events)?)
    }

    pub fn select_cards<S: AsRef<str>>(
        &mut self,
        labels: &[S],
        events: &mut EventBus,
    ) -> Result<(), RunError> {
        self.ensure_started()?;
        Ok(self.round.select_cards(labels, events)?)
    }

    pub fn play_hand(&mut self, events: &mut EventBus) -> Result<ScoreBreakdown, RunError> {
        self.ensure_started()?;
        let breakdown =
            self.round
                .play(&self.tables, &self.hand_levels, &self.inventory.jokers, events)?;
        Ok(breakdown)
    }

    pub fn discard_hand(&mut self, events: &mut EventBus) -> Result<(), RunError> {
        self.ensure_started()?;
        Ok(self.round.discard(events)?)
    }

    pub fn cancel_hand(&mut self, events: &mut EventBus) -> Result<(), RunError> {
        self.ensure_started()?;
        Ok(self.round.cancel(events)?)
    }

    pub fn hand_card_labels(&self) -> Vec<String> {
        card_labels(&self.round.hand)
    }

    pub fn remain_card_labels(&self) -> Vec<String> {
        card_labels(&self.round.remain)
    }

    pub fn enabled_actions(&self) -> Vec<Action> {
        let mut actions = vec![Action::Play];
        if self.round.stats.discards_left > 0 {
            actions.push(Action::Discard);
        }
        actions.push(Action::Cancel);
        actions
    }

    fn ensure_started(&self) -> Result<(), RunError> {
        if self.start_next {
            Err(RunError::RoundNotStarted)
        } else {
            Ok(())
        }
    }
}
