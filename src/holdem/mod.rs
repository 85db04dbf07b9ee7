/// Hand written chart rows.
mod authored;

/// Module with seats and the strategic groups they fall in.
mod position;
/// Export position types
pub use self::position::{Position, PositionGroup, PositionGroupSet};

/// Module for the table of all 169 starting hands.
mod hand_table;
/// Export `HandTable` and the entry types
pub use self::hand_table::{Action, Category, HandEntry, HandTable, Tips};

/// Module for the derived strategic information about a hand.
mod insight;
/// Export `HandInsight`
pub use self::insight::{HandInsight, StackAdvice, StrengthLevel};

/// Module laying the table out as the 13x13 chart.
mod grid;
/// Export `HandGrid`
pub use self::grid::{GridCell, HandGrid, GRID_SIZE};

/// Module for the rule based pre-flop recommendation.
mod simulator;
/// Export the simulator
pub use self::simulator::{
    recommend, suggest_hands, Explanation, GameType, Recommendation, Situation,
    SituationBuilder, SituationError, MAX_PLAYERS, MAX_STACK_DEPTH, MIN_PLAYERS,
    MIN_STACK_DEPTH, QUICK_PICK_HANDS, QUICK_STACK_OPTIONS,
};

/// Module for pot odds against drawing odds.
mod pot_odds;
/// Export the pot odds calculator
pub use self::pot_odds::{
    calculate_from_input, calculate_pot_odds, PotOdds, PotOddsError, Verdict, MAX_OUTS, MIN_OUTS,
};
