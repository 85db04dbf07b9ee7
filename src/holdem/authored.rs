//! Hand-written chart rows. Every hand not listed here is synthesized by
//! `HandTable::new`. The data stops at 55; smaller pairs take the worst
//! hand values.

use super::hand_table::{Action, Category};
use super::position::PositionGroup;

use Action::{Call, Fold, Raise};
use Category::{Premium, Situational, Strong, Weak};
use PositionGroup::{Blinds, EarlyPosition as Ep, LatePosition as Lp, MiddlePosition as Mp};

pub(crate) struct AuthoredHand {
    pub(crate) notation: &'static str,
    pub(crate) win_rate: f32,
    pub(crate) category: Category,
    pub(crate) recommendation: Action,
    pub(crate) positions: &'static [PositionGroup],
    pub(crate) beginner: &'static str,
    pub(crate) intermediate: &'static str,
}

const fn hand(
    notation: &'static str,
    win_rate: f32,
    category: Category,
    recommendation: Action,
    positions: &'static [PositionGroup],
    tips: [&'static str; 2],
) -> AuthoredHand {
    AuthoredHand {
        notation,
        win_rate,
        category,
        recommendation,
        positions,
        beginner: tips[0],
        intermediate: tips[1],
    }
}

const EVERYWHERE: &[PositionGroup] = &[Ep, Mp, Lp, Blinds];
const MIDDLE_ON: &[PositionGroup] = &[Mp, Lp, Blinds];
const LATE_AND_BLINDS: &[PositionGroup] = &[Lp, Blinds];
const LATE: &[PositionGroup] = &[Lp];
const NOWHERE: &[PositionGroup] = &[];

pub(crate) const AUTHORED_HANDS: &[AuthoredHand] = &[
    // Pocket pairs
    hand("AA", 85.3, Premium, Raise, EVERYWHERE, [
        "Always bet strong with pocket aces. It is the best possible starting hand.",
        "Vary the raise size by position and prior action. Slow-play only in very specific spots.",
    ]),
    hand("KK", 82.4, Premium, Raise, EVERYWHERE, [
        "Second best starting hand. Bet aggressively pre-flop.",
        "Careful on flops with an Ace. Consider bet-folding very dangerous boards against strong action.",
    ]),
    hand("QQ", 79.9, Premium, Raise, EVERYWHERE, [
        "Very strong hand. Raise from any position.",
        "Boards with overcards (A or K) need caution. Bet for value but be ready to fold to resistance.",
    ]),
    hand("JJ", 77.5, Premium, Raise, EVERYWHERE, [
        "Good hand to raise. Watch out for high flops.",
        "Play aggressively pre-flop. Post-flop be careful on boards with Q, K or A.",
    ]),
    hand("TT", 75.1, Strong, Raise, MIDDLE_ON, [
        "Pocket tens are strong. Raise from most positions.",
        "From early position you can call 3-bets. Very vulnerable to overcards on the flop.",
    ]),
    hand("99", 72.1, Strong, Raise, MIDDLE_ON, [
        "Solid hand to raise in position.",
        "Set mining hand against raises. Fold to heavy pre-flop action in early position.",
    ]),
    hand("88", 69.1, Strong, Call, LATE_AND_BLINDS, [
        "Good for a call. Look to hit a set on the flop.",
        "Mostly set mining. Can raise in late position when nobody has acted.",
    ]),
    hand("77", 66.2, Situational, Call, LATE_AND_BLINDS, [
        "Call in position. Fold if there is a lot of action.",
        "Set mining hand. Fold to 3-bets most of the time.",
    ]),
    hand("66", 63.4, Situational, Call, LATE, [
        "Only in late position with no action.",
        "Mostly for set mining. Fold to pre-flop resistance.",
    ]),
    hand("55", 60.7, Situational, Call, LATE, [
        "Only in a favorable position.",
        "Set mining. Needs good implied odds to be profitable.",
    ]),
    // Big aces
    hand("AKs", 78.2, Premium, Raise, EVERYWHERE, [
        "Big Slick suited is very strong. Always raise.",
        "Can 4-bet against 3-bets. Play aggressively post-flop with draws.",
    ]),
    hand("AKo", 74.7, Premium, Raise, EVERYWHERE, [
        "Ace-King offsuit is still very strong.",
        "Slightly weaker than suited but still premium. Play aggressively.",
    ]),
    hand("AQs", 71.4, Strong, Raise, MIDDLE_ON, [
        "Ace-Queen suited is a good hand to raise.",
        "Careful against 4-bets. Dominated by AK in many spots.",
    ]),
    hand("AQo", 68.1, Strong, Raise, LATE_AND_BLINDS, [
        "Good hand in position.",
        "More vulnerable than the suited version. Careful in early position.",
    ]),
    hand("AJs", 68.7, Strong, Raise, MIDDLE_ON, [
        "Ace-Jack suited is playable from several positions.",
        "Good stealing hand in late position. Watch out for reverse implied odds.",
    ]),
    hand("AJo", 65.4, Situational, Call, LATE_AND_BLINDS, [
        "Only in late position.",
        "Prone to domination. Fold in early position against action.",
    ]),
    hand("ATs", 66.2, Strong, Raise, LATE_AND_BLINDS, [
        "Ace-Ten suited is good in position.",
        "Excellent stealing hand. Good post-flop playability.",
    ]),
    hand("ATo", 62.9, Situational, Call, LATE, [
        "Only in favorable spots.",
        "Weak ace. Fold in early position, call or raise in late position.",
    ]),
    hand("A9s", 63.1, Situational, Call, LATE, [
        "Suited aces are better than they look.",
        "Good for bluff-catching. Flush potential adds value.",
    ]),
    hand("A8s", 60.8, Situational, Call, LATE, [
        "Only in late position with no action.",
        "Weak suited ace. Mostly for value in position.",
    ]),
    hand("A7s", 58.5, Weak, Fold, NOWHERE, [
        "Usually fold.",
        "Can be played on the button against the blinds. Too weak for early position.",
    ]),
    // Broadway
    hand("KQs", 67.3, Strong, Raise, LATE_AND_BLINDS, [
        "King-Queen suited is a strong hand.",
        "Excellent playability. Can flop straight draws and flushes.",
    ]),
    hand("KQo", 64.1, Situational, Call, LATE, [
        "Good in position.",
        "Reverse implied odds against aces. Fold in early position.",
    ]),
    hand("KJs", 64.8, Strong, Raise, LATE_AND_BLINDS, [
        "King-Jack suited is playable.",
        "Good stealing hand. Straight and flush possibilities.",
    ]),
    hand("KJo", 61.6, Situational, Call, LATE, [
        "Only in position.",
        "Dominated by hands like AJ, AQ and AK. Careful in early position.",
    ]),
    hand("KTs", 62.1, Situational, Call, LATE, [
        "King-Ten suited has potential.",
        "Good connectivity. Can flop straights and flushes.",
    ]),
    hand("QJs", 62.4, Situational, Call, LATE, [
        "Queen-Jack suited is playable in position.",
        "High card strength with straight possibilities.",
    ]),
    hand("QTs", 59.8, Situational, Call, LATE, [
        "Only in favorable spots.",
        "Suited connector with decent high card strength.",
    ]),
    hand("JTs", 59.1, Situational, Call, LATE, [
        "Jack-Ten suited is speculative.",
        "Excellent for implied odds. Many straight possibilities.",
    ]),
    // Suited connectors
    hand("T9s", 56.2, Weak, Fold, NOWHERE, [
        "Usually fold.",
        "Can be played in position with implied odds. Good connectivity.",
    ]),
    hand("98s", 53.8, Weak, Fold, NOWHERE, [
        "Fold most of the time.",
        "Suited connector. Only with deep stacks and position.",
    ]),
    hand("87s", 51.4, Weak, Fold, NOWHERE, [
        "Fold.",
        "Marginal suited connector. Needs perfect conditions.",
    ]),
    hand("76s", 49.1, Category::Fold, Fold, NOWHERE, [
        "Always fold.",
        "Too weak even suited. Fold in every situation.",
    ]),
    // The worst hand
    hand("72o", 32.4, Category::Fold, Fold, NOWHERE, [
        "The worst hand in poker. Always fold.",
        "Worst starting hand. Never play it unless heads-up with deep stacks.",
    ]),
];
