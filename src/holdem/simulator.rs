//! Rule based pre-flop situation simulator.
//!
//! Given a starting hand, a seat and a stack depth this recommends Raise,
//! Call or Fold from a short ordered list of win rate thresholds. The
//! player count and game type are carried along for display but never
//! change the decision.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{event, instrument};

use super::hand_table::{Action, Category, HandEntry, HandTable};
use super::position::Position;

/// Hands offered as autocomplete suggestions.
pub const QUICK_PICK_HANDS: [&str; 37] = [
    "AA", "KK", "QQ", "JJ", "TT", "99", "88", "77", "66", "55", "44", "33", "22", "AKs", "AQs",
    "AJs", "ATs", "A9s", "A8s", "A7s", "A6s", "A5s", "A4s", "A3s", "A2s", "KQs", "KJs", "KTs",
    "QJs", "QTs", "JTs", "AKo", "AQo", "AJo", "KQo", "KJo", "QJo",
];

/// Stack depths offered as one click options, in big blinds.
pub const QUICK_STACK_OPTIONS: [u16; 5] = [10, 20, 30, 50, 100];

pub const MIN_STACK_DEPTH: u16 = 1;
pub const MAX_STACK_DEPTH: u16 = 300;
pub const MIN_PLAYERS: u8 = 2;
pub const MAX_PLAYERS: u8 = 10;

/// Win rate at or above which a hand is always raised.
const PREMIUM_WIN_RATE: f32 = 70.0;
/// Win rate at or above which a hand is played from its listed positions.
const STRONG_WIN_RATE: f32 = 60.0;
/// Big blinds needed to call speculatively.
const SET_MINING_STACK: u16 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum GameType {
    #[default]
    Cash,
    Tournament,
    #[serde(rename = "sitngo")]
    SitAndGo,
}

impl GameType {
    pub fn code(self) -> &'static str {
        match self {
            Self::Cash => "cash",
            Self::Tournament => "tournament",
            Self::SitAndGo => "sitngo",
        }
    }

    pub fn translation_key(self) -> String {
        format!("simulator.gameTypes.{}", self.code())
    }
}

/// Why the simulator picked its action. Each maps to a localized
/// explanation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Explanation {
    /// Win rate of 70 or more.
    PremiumRaise,
    /// Win rate of 60 or more and playable from this seat.
    StrongRaise,
    /// Speculative call with a deep stack, e.g. set mining.
    PairCall,
    DefaultFold,
}

impl Explanation {
    pub fn translation_key(self) -> &'static str {
        match self {
            Self::PremiumRaise => "simulator.results.premiumRaise",
            Self::StrongRaise => "simulator.results.strongRaise",
            Self::PairCall => "simulator.results.pairCall",
            Self::DefaultFold => "simulator.results.defaultFold",
        }
    }
}

/// The simulator's answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Recommendation {
    pub action: Action,
    pub explanation: Explanation,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.action, self.explanation.translation_key())
    }
}

#[derive(Error, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum SituationError {
    #[error("Stack depth must be between 1 and 300 big blinds, got {0}")]
    StackDepthOutOfRange(u16),
    #[error("Player count must be between 2 and 10, got {0}")]
    PlayerCountOutOfRange(u8),
}

/// The table situation fed to [`recommend`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct Situation {
    /// Starting hand as typed by the user.
    pub hand: String,
    pub position: Position,
    /// Effective stack in big blinds.
    pub stack_depth: u16,
    pub player_count: u8,
    pub game_type: GameType,
}

impl Situation {
    pub fn builder() -> SituationBuilder {
        SituationBuilder::default()
    }
}

/// Builder for a [`Situation`]. Starts from the form defaults: AKs under
/// the gun, 50 big blinds, six players, cash game.
///
/// ```
/// use hand_advisor::holdem::{Position, Situation};
///
/// let situation = Situation::builder()
///     .hand("QQ")
///     .position(Position::Button)
///     .stack_depth(100)
///     .build()
///     .unwrap();
/// assert_eq!(situation.player_count, 6);
///
/// assert!(Situation::builder().stack_depth(0).build().is_err());
/// ```
#[derive(Debug, Clone)]
pub struct SituationBuilder {
    hand: String,
    position: Position,
    stack_depth: u16,
    player_count: u8,
    game_type: GameType,
}

impl Default for SituationBuilder {
    fn default() -> Self {
        Self {
            hand: "AKs".to_string(),
            position: Position::UnderTheGun,
            stack_depth: 50,
            player_count: 6,
            game_type: GameType::Cash,
        }
    }
}

impl SituationBuilder {
    pub fn hand(mut self, hand: impl Into<String>) -> Self {
        self.hand = hand.into();
        self
    }

    pub fn position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn stack_depth(mut self, stack_depth: u16) -> Self {
        self.stack_depth = stack_depth;
        self
    }

    pub fn player_count(mut self, player_count: u8) -> Self {
        self.player_count = player_count;
        self
    }

    pub fn game_type(mut self, game_type: GameType) -> Self {
        self.game_type = game_type;
        self
    }

    pub fn build(self) -> Result<Situation, SituationError> {
        if !(MIN_STACK_DEPTH..=MAX_STACK_DEPTH).contains(&self.stack_depth) {
            return Err(SituationError::StackDepthOutOfRange(self.stack_depth));
        }
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.player_count) {
            return Err(SituationError::PlayerCountOutOfRange(self.player_count));
        }
        Ok(Situation {
            hand: self.hand,
            position: self.position,
            stack_depth: self.stack_depth,
            player_count: self.player_count,
            game_type: self.game_type,
        })
    }
}

/// Recommend an action for a situation.
///
/// Rules are checked in order and the first match wins:
///
/// 1. Win rate of 70 or more raises.
/// 2. Win rate of 60 or more plays the stored recommendation when the
///    seat's group is one of the hand's positions, otherwise folds.
/// 3. A situational hand with at least one position calls with 50 or more
///    big blinds behind.
/// 4. Everything else folds.
///
/// The hand is resolved through [`HandTable::lookup`], so an unknown hand
/// is treated as the worst hand rather than rejected.
///
/// ```
/// use hand_advisor::holdem::{recommend, Action, HandTable, Position, Situation};
///
/// let table = HandTable::standard();
/// let situation = Situation::builder()
///     .hand("88")
///     .position(Position::UnderTheGun)
///     .build()
///     .unwrap();
/// assert_eq!(recommend(table, &situation).action, Action::Fold);
/// ```
#[instrument(level = "trace", skip(table))]
pub fn recommend(table: &HandTable, situation: &Situation) -> Recommendation {
    let entry = table.lookup(&situation.hand);
    let recommendation = decide(entry, situation.position, situation.stack_depth);
    event!(
        tracing::Level::DEBUG,
        hand = %entry.hand,
        win_rate = entry.win_rate,
        action = %recommendation.action,
        explanation = ?recommendation.explanation,
        "Simulated situation"
    );
    recommendation
}

fn decide(entry: &HandEntry, position: Position, stack_depth: u16) -> Recommendation {
    if entry.win_rate >= PREMIUM_WIN_RATE {
        Recommendation {
            action: Action::Raise,
            explanation: Explanation::PremiumRaise,
        }
    } else if entry.win_rate >= STRONG_WIN_RATE {
        if entry.playable_from(position.group()) {
            Recommendation {
                action: entry.recommendation,
                explanation: Explanation::StrongRaise,
            }
        } else {
            fold()
        }
    } else if entry.category == Category::Situational
        && stack_depth >= SET_MINING_STACK
        && !entry.positions.is_empty()
    {
        Recommendation {
            action: Action::Call,
            explanation: Explanation::PairCall,
        }
    } else {
        fold()
    }
}

fn fold() -> Recommendation {
    Recommendation {
        action: Action::Fold,
        explanation: Explanation::DefaultFold,
    }
}

/// Autocomplete for the hand field.
///
/// Ranks are matched case-insensitively. An empty prefix, or one that
/// already names a quick pick hand exactly, suggests nothing further for
/// that hand.
///
/// ```
/// use hand_advisor::holdem::suggest_hands;
///
/// assert_eq!(suggest_hands("KJ"), vec!["KJs", "KJo"]);
/// assert!(suggest_hands("").is_empty());
/// ```
pub fn suggest_hands(prefix: &str) -> Vec<&'static str> {
    let prefix = normalize_prefix(prefix);
    if prefix.is_empty() {
        return Vec::new();
    }
    QUICK_PICK_HANDS
        .iter()
        .copied()
        .filter(|h| h.starts_with(&prefix) && *h != prefix)
        .collect()
}

/// Upper case ranks, lower case suffix.
fn normalize_prefix(prefix: &str) -> String {
    prefix
        .trim()
        .chars()
        .enumerate()
        .map(|(i, c)| {
            if i < 2 {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect()
}
