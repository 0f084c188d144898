use pokerun_core::{
    card_labels, score_hand, Action, Card, Deck, DeckError, Event, EventBus, HandKind, JokerDef,
    JokerEffect, JokerRarity, Round, RoundError, RoundPhase, RoundRule, ScoreTables,
};
use std::collections::HashMap;

fn card(label: &str) -> Card {
    label.parse().expect("card label")
}

fn rules(hands: u8, discards: u8) -> RoundRule {
    RoundRule {
        hands,
        discards,
        ..RoundRule::default()
    }
}

/// Round over an unshuffled deck, first eight cards (2-9 of Clubs) already in hand.
fn dealt_round(hands: u8, discards: u8, target: i64) -> (Round, Deck) {
    let mut deck = Deck::standard52();
    let mut round = Round::new(&rules(hands, discards), target);
    round
        .draw(&mut deck, 8, &mut EventBus::default())
        .expect("deal");
    (round, deck)
}

fn joker(id: &str, effect: JokerEffect) -> JokerDef {
    JokerDef {
        id: id.to_string(),
        name: id.to_string(),
        rarity: JokerRarity::Common,
        description: String::new(),
        effect,
    }
}

fn play(round: &mut Round) -> Result<pokerun_core::ScoreBreakdown, RoundError> {
    round.play(
        &ScoreTables::standard(),
        &HashMap::new(),
        &[],
        &mut EventBus::default(),
    )
}

#[test]
fn single_ace_high_card_scores_sixteen() {
    let breakdown = score_hand(
        HandKind::HighCard,
        1,
        &[card("A of Spades")],
        &ScoreTables::standard(),
        &[],
    );
    assert_eq!(breakdown.chips(), 16);
    assert_eq!(breakdown.mult(), 1);
    assert_eq!(breakdown.score(), 16);
}

#[test]
fn every_played_card_adds_its_rank_value() {
    let cards = [card("K of Spades"), card("K of Hearts"), card("2 of Clubs")];
    let breakdown = score_hand(HandKind::OnePair, 1, &cards, &ScoreTables::standard(), &[]);
    assert_eq!(breakdown.rank_chips, 22);
    assert_eq!(breakdown.chips(), 32);
    assert_eq!(breakdown.score(), 64);
}

#[test]
fn jokers_apply_chips_then_mult_then_multiplier() {
    let jokers = [
        joker("double", JokerEffect::MultiplyMult(2)),
        joker("plus_mult", JokerEffect::AddMult(4)),
        joker("plus_chips", JokerEffect::AddChips(10)),
    ];
    let breakdown = score_hand(
        HandKind::HighCard,
        1,
        &[card("A of Spades")],
        &ScoreTables::standard(),
        &jokers,
    );
    assert_eq!(breakdown.chips(), 26);
    assert_eq!(breakdown.mult(), 10);
    assert_eq!(breakdown.score(), 260);
    let order: Vec<&str> = breakdown.trace.iter().map(|s| s.source.as_str()).collect();
    assert_eq!(order, ["plus_chips", "plus_mult", "double"]);
}

#[test]
fn table_lookup_misses_are_zero() {
    let tables = ScoreTables::standard();
    assert_eq!(tables.chip_and_mult(HandKind::HighCard, 0), (0, 0));
    assert_eq!(tables.chip_and_mult(HandKind::HighCard, 11), (0, 0));
    assert_eq!(tables.chip_and_mult(HandKind::OnePair, 2), (15, 2));
    assert_eq!(tables.chip_and_mult(HandKind::RoyalFlush, 10), (500, 8));
    let breakdown = score_hand(HandKind::Flush, 42, &[card("A of Spades")], &tables, &[]);
    assert_eq!(breakdown.score(), 0);
}

#[test]
fn draw_sorts_the_hand() {
    let mut deck = Deck::from_cards(vec![
        card("K of Hearts"),
        card("2 of Spades"),
        card("9 of Clubs"),
        card("A of Diamonds"),
    ]);
    let mut round = Round::new(&rules(4, 3), 300);
    let drawn = round
        .draw(&mut deck, 4, &mut EventBus::default())
        .expect("draw");
    assert_eq!(drawn.len(), 4);
    assert_eq!(
        card_labels(&round.hand),
        ["2 of Spades", "9 of Clubs", "K of Hearts", "A of Diamonds"]
    );
    assert_eq!(round.phase(), RoundPhase::AwaitingSelection);
}

#[test]
fn first_draw_is_the_default_deal() {
    let round = Round::new(&RoundRule::default(), 300);
    assert_eq!(round.next_draw_count(), 8);
    assert_eq!(round.phase(), RoundPhase::AwaitingDraw);
}

#[test]
fn selection_splits_hand_into_selected_and_remain() {
    let (mut round, _deck) = dealt_round(4, 3, 300);
    round
        .select_cards(&["3 of Clubs", "7 of Clubs"], &mut EventBus::default())
        .expect("select");
    assert_eq!(round.selected, [card("3 of Clubs"), card("7 of Clubs")]);
    assert_eq!(round.remain.len(), 6);
    assert!(round.selected.iter().all(|c| round.hand.contains(c)));
    assert!(round.selected.iter().all(|c| !round.remain.contains(c)));
    assert_eq!(round.phase(), RoundPhase::AwaitingAction);
}

#[test]
fn unmatched_labels_are_dropped() {
    let (mut round, _deck) = dealt_round(4, 3, 300);
    let mut events = EventBus::default();
    round
        .select_cards(
            &["A of Spades", "2 of Clubs", "nonsense", "2 of Clubs"],
            &mut events,
        )
        .expect("select");
    assert_eq!(round.selected, [card("2 of Clubs")]);
    let selected: Vec<Event> = events.drain().collect();
    assert_eq!(
        selected,
        [Event::CardsSelected {
            count: 1,
            dropped: 2
        }]
    );
    assert!(matches!(
        round.resolve_label("A of Spades"),
        Err(RoundError::UnresolvedSelection(_))
    ));
}

#[test]
fn more_than_five_cards_is_rejected() {
    let (mut round, _deck) = dealt_round(4, 3, 300);
    let labels = card_labels(&round.hand[..6]);
    let err = round
        .select_cards(&labels, &mut EventBus::default())
        .unwrap_err();
    assert_eq!(err, RoundError::TooManyCards { selected: 6, max: 5 });
    assert!(round.selected.is_empty());
    assert_eq!(round.phase(), RoundPhase::AwaitingSelection);
}

#[test]
fn play_scores_and_consumes_a_hand() {
    let (mut round, _deck) = dealt_round(4, 3, 300);
    round
        .select_cards(&["9 of Clubs"], &mut EventBus::default())
        .expect("select");
    let breakdown = play(&mut round).expect("play");
    assert_eq!(breakdown.hand, HandKind::HighCard);
    assert_eq!(breakdown.score(), 14);
    assert_eq!(round.stats.total_score, 14);
    assert_eq!(round.stats.hands_left, 3);
    assert_eq!(round.phase(), RoundPhase::AwaitingDraw);
    assert_eq!(round.next_draw_count(), 1);
    assert_eq!(round.remain.len(), 7);
}

#[test]
fn reaching_target_wins_on_the_last_hand() {
    let (mut round, _deck) = dealt_round(1, 3, 10);
    round
        .select_cards(&["9 of Clubs"], &mut EventBus::default())
        .expect("select");
    play(&mut round).expect("play");
    assert_eq!(round.stats.hands_left, 0);
    assert_eq!(round.phase(), RoundPhase::Won);
    assert!(round.is_won());
}

#[test]
fn running_out_of_hands_loses() {
    let (mut round, _deck) = dealt_round(1, 3, 100);
    let mut events = EventBus::default();
    round
        .select_cards(&["9 of Clubs"], &mut events)
        .expect("select");
    round
        .play(&ScoreTables::standard(), &HashMap::new(), &[], &mut events)
        .expect("play");
    assert_eq!(round.phase(), RoundPhase::Lost);
    assert!(events
        .drain()
        .any(|event| event == Event::RoundLost { score: 14, target: 100 }));
    assert_eq!(
        round.draw(&mut Deck::standard52(), 1, &mut EventBus::default()),
        Err(RoundError::InvalidPhase(RoundPhase::Lost))
    );
}

#[test]
fn play_needs_a_selection() {
    let (mut round, _deck) = dealt_round(4, 3, 300);
    round
        .select_cards::<&str>(&[], &mut EventBus::default())
        .expect("select");
    assert_eq!(play(&mut round).unwrap_err(), RoundError::EmptySelection);
    assert_eq!(round.stats.hands_left, 4);
}

#[test]
fn actions_before_selection_are_out_of_phase() {
    let mut round = Round::new(&RoundRule::default(), 300);
    assert_eq!(
        play(&mut round).unwrap_err(),
        RoundError::InvalidPhase(RoundPhase::AwaitingDraw)
    );
    assert_eq!(
        round.discard(&mut EventBus::default()),
        Err(RoundError::InvalidPhase(RoundPhase::AwaitingDraw))
    );
}

#[test]
fn discard_replaces_selected_cards() {
    let (mut round, mut deck) = dealt_round(4, 3, 300);
    let mut events = EventBus::default();
    round
        .select_cards(&["2 of Clubs", "3 of Clubs"], &mut events)
        .expect("select");
    round.discard(&mut events).expect("discard");
    assert_eq!(round.stats.discards_left, 2);
    assert_eq!(round.stats.total_score, 0);
    assert_eq!(round.stats.hands_left, 4);
    assert_eq!(round.last_action(), Some(Action::Discard));

    let count = round.next_draw_count();
    assert_eq!(count, 2);
    let drawn = round.draw(&mut deck, count, &mut events).expect("draw");
    assert_eq!(drawn, [card("T of Clubs"), card("J of Clubs")]);
    assert_eq!(round.hand.len(), 8);
    assert!(!round.hand.contains(&card("2 of Clubs")));
    assert!(!round.hand.contains(&card("3 of Clubs")));
    assert!(round.remain.is_empty());
}

#[test]
fn discard_needs_discards_left() {
    let (mut round, _deck) = dealt_round(4, 0, 300);
    round
        .select_cards(&["2 of Clubs"], &mut EventBus::default())
        .expect("select");
    assert_eq!(
        round.discard(&mut EventBus::default()),
        Err(RoundError::NoDiscardsRemaining)
    );
    assert_eq!(round.phase(), RoundPhase::AwaitingAction);
}

#[test]
fn cancel_keeps_counters_and_hand() {
    let (mut round, mut deck) = dealt_round(4, 3, 300);
    let stats = round.stats();
    let hand = round.hand.clone();
    let mut events = EventBus::default();
    for _ in 0..3 {
        round
            .select_cards(&["4 of Clubs", "5 of Clubs"], &mut events)
            .expect("select");
        round.cancel(&mut events).expect("cancel");
        assert_eq!(round.stats(), stats);
        assert!(round.selected.is_empty());
        assert_eq!(round.next_draw_count(), 0);
        let drawn = round.draw(&mut deck, 0, &mut events).expect("draw");
        assert!(drawn.is_empty());
        assert_eq!(round.hand, hand);
    }
    assert_eq!(deck.len(), 44);
}

#[test]
fn overdraw_leaves_round_untouched() {
    let mut deck = Deck::from_cards(vec![card("2 of Clubs"), card("3 of Clubs")]);
    let mut round = Round::new(&RoundRule::default(), 300);
    let err = round
        .draw(&mut deck, 8, &mut EventBus::default())
        .unwrap_err();
    assert_eq!(
        err,
        RoundError::Deck(DeckError::InsufficientCards {
            requested: 8,
            available: 2
        })
    );
    assert!(round.hand.is_empty());
    assert_eq!(deck.len(), 2);
    assert_eq!(round.phase(), RoundPhase::AwaitingDraw);
}
