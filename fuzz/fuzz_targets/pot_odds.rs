#![no_main]

extern crate arbitrary;
extern crate hand_advisor;
extern crate libfuzzer_sys;

use hand_advisor::holdem::{calculate_from_input, calculate_pot_odds, Verdict};

use libfuzzer_sys::fuzz_target;

#[derive(Debug, Clone, arbitrary::Arbitrary)]
struct PotOddsInput {
    outs: i64,
    pot: f64,
    bet: f64,
    raw: (String, String, String),
}

fuzz_target!(|input: PotOddsInput| {
    // Raw text never panics
    let (outs, pot, bet) = &input.raw;
    let _ = calculate_from_input(outs, pot, bet);

    if let Ok(odds) = calculate_pot_odds(input.outs, input.pot, input.bet) {
        assert!((1..=20).contains(&odds.outs));
        assert!(odds.total_pot_after_call.is_finite());
        assert!((0.0..=100.0).contains(&odds.equity_required));
        let expected = if odds.hit_odds_turn_to_river >= odds.equity_required {
            Verdict::Call
        } else {
            Verdict::Fold
        };
        assert_eq!(odds.verdict, expected);
    }
});
