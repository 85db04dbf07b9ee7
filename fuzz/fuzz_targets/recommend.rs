#![no_main]

extern crate arbitrary;
extern crate hand_advisor;
extern crate libfuzzer_sys;

use hand_advisor::core::StartingHand;
use hand_advisor::holdem::{
    recommend, Action, Explanation, HandTable, Situation, MAX_PLAYERS, MAX_STACK_DEPTH,
    MIN_PLAYERS, MIN_STACK_DEPTH,
};

use libfuzzer_sys::fuzz_target;

#[derive(Debug, Clone, arbitrary::Arbitrary)]
struct RecommendInput {
    situation: Situation,
    hand: StartingHand,
}

fuzz_target!(|input: RecommendInput| {
    let table = HandTable::standard();
    let situation = input.situation;

    // Any string resolves, unknown ones to the fallback entry
    let entry = table.lookup(&situation.hand);
    assert!(table.get(&entry.hand).is_some());

    // Canonical notation always resolves to itself
    let canonical = table.lookup(&input.hand.to_notation());
    assert_eq!(canonical.hand, input.hand);

    let first = recommend(table, &situation);
    let second = recommend(table, &situation);
    assert_eq!(first, second);

    match first.explanation {
        Explanation::PremiumRaise => assert_eq!(first.action, Action::Raise),
        Explanation::DefaultFold => assert_eq!(first.action, Action::Fold),
        Explanation::PairCall => assert_eq!(first.action, Action::Call),
        Explanation::StrongRaise => {}
    }

    // The builder only accepts the form's ranges
    let built = Situation::builder()
        .hand(situation.hand.clone())
        .position(situation.position)
        .stack_depth(situation.stack_depth)
        .player_count(situation.player_count)
        .game_type(situation.game_type)
        .build();
    let in_range = (MIN_STACK_DEPTH..=MAX_STACK_DEPTH).contains(&situation.stack_depth)
        && (MIN_PLAYERS..=MAX_PLAYERS).contains(&situation.player_count);
    assert_eq!(built.is_ok(), in_range);
});
