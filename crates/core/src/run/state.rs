use super::*;
use crate::*;

impl RunState {
    pub fn new(config: GameConfig, rng: RngState) -> Self {
        let tables = ScoreTables::from_config(&config);
        let inventory = Inventory::with_slots(config.rules.joker_slots);
        let target = config.target_for(0, 0).unwrap_or(0);
        let round = Round::new(&config.rules, target);
        Self {
            config,
            tables,
            inventory,
            rng,
            deck: Deck::standard52(),
            round,
            hand_levels: HashMap::new(),
            ante_index: 0,
            blind_index: 0,
            round_count: 1,
            start_next: true,
        }
    }

    /// Shuffles with operating system entropy.
    pub fn secure(config: GameConfig) -> Self {
        Self::new(config, RngState::secure())
    }

    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::new(config, RngState::from_seed(seed))
    }

    pub fn ante_index(&self) -> usize {
        self.ante_index
    }

    pub fn blind_index(&self) -> usize {
        self.blind_index
    }

    pub fn round_count(&self) -> u32 {
        self.round_count
    }

    pub fn is_round_start(&self) -> bool {
        self.start_next
    }

    pub fn round_stats(&self) -> RoundStats {
        self.round.stats()
    }

    pub fn round_phase(&self) -> RoundPhase {
        self.round.phase()
    }

    pub fn is_round_won(&self) -> bool {
        self.round.phase() == RoundPhase::Won
    }

    pub fn is_round_lost(&self) -> bool {
        self.round.phase() == RoundPhase::Lost
    }

    pub fn hand_level(&self, kind: HandKind) -> u32 {
        self.hand_levels.get(&kind).copied().unwrap_or(1)
    }

    /// Raises a hand kind by one level, up to the last level in the table.
    pub fn upgrade_hand(&mut self, kind: HandKind, events: &mut EventBus) -> u32 {
        let max = self.tables.max_level(kind).max(1);
        let level = self.hand_level(kind).saturating_add(1).min(max);
        self.hand_levels.insert(kind, level);
        events.push(Event::HandUpgraded { hand: kind, level });
        level
    }

    pub fn chip_and_mult(&self, kind: HandKind, level: u32) -> (i64, i64) {
        self.tables.chip_and_mult(kind, level)
    }

    pub fn jokers(&self) -> &[JokerDef] {
        &self.inventory.jokers
    }

    pub fn add_joker(&mut self, joker: JokerDef, events: &mut EventBus) -> Result<(), RunError> {
        let id = joker.id.clone();
        self.inventory.add_joker(joker)?;
        events.push(Event::JokerAdded { id });
        Ok(())
    }
}
