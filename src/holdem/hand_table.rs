//! The starting hand table.
//!
//! Every one of the 169 starting hands maps to exactly one [`HandEntry`]
//! holding a heuristic win rate, a strength category, the default action,
//! the position groups the hand is playable from, and two coaching tips.
//!
//! The table is built once into an immutable hash map. Hands with a
//! hand-written row use it verbatim, everything else is synthesized from
//! the rank indices of the two cards.

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::{debug, event, instrument};

use crate::core::{StartingHand, Value};

use super::authored::AUTHORED_HANDS;
use super::position::{PositionGroup, PositionGroupSet};

/// Pre-flop action recommended for a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum Action {
    Raise,
    Call,
    Fold,
}

impl Action {
    /// Translation key for the advice shown next to this action in the
    /// hand details.
    pub fn frequency_key(self) -> &'static str {
        match self {
            Self::Raise => "handModal.strategicInfo.frequencyAdvice.raise",
            Self::Call => "handModal.strategicInfo.frequencyAdvice.call",
            Self::Fold => "handModal.strategicInfo.frequencyAdvice.fold",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Raise => "Raise",
            Self::Call => "Call",
            Self::Fold => "Fold",
        };
        f.write_str(s)
    }
}

/// Strength bucket of a hand.
///
/// The category is stored with each entry and is authoritative. The win
/// rate bands in [`Category::from_win_rate`] are informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum Category {
    Premium,
    Strong,
    Situational,
    Weak,
    Fold,
}

impl Category {
    pub const fn all() -> [Self; 5] {
        [
            Self::Premium,
            Self::Strong,
            Self::Situational,
            Self::Weak,
            Self::Fold,
        ]
    }

    /// The band a win rate would fall in on the chart legend:
    /// premium 85+, strong 70-85, situational 55-70, weak 40-55, fold below
    /// 40.
    ///
    /// ```
    /// use hand_advisor::holdem::Category;
    ///
    /// assert_eq!(Category::from_win_rate(85.3), Category::Premium);
    /// assert_eq!(Category::from_win_rate(69.1), Category::Situational);
    /// assert_eq!(Category::from_win_rate(32.4), Category::Fold);
    /// ```
    pub fn from_win_rate(win_rate: f32) -> Self {
        if win_rate >= 85.0 {
            Self::Premium
        } else if win_rate >= 70.0 {
            Self::Strong
        } else if win_rate >= 55.0 {
            Self::Situational
        } else if win_rate >= 40.0 {
            Self::Weak
        } else {
            Self::Fold
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Premium => "premium",
            Self::Strong => "strong",
            Self::Situational => "situational",
            Self::Weak => "weak",
            Self::Fold => "fold",
        }
    }

    /// Translation key of the localized category name.
    pub fn translation_key(self) -> String {
        format!("handModal.categories.{}", self.name())
    }

    /// Translation key of the chart legend entry, which includes the band.
    pub fn legend_key(self) -> String {
        format!("pokerGrid.legend.{}", self.name())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Coaching text shown with a hand. Never consumed by any decision logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tips {
    pub beginner: &'static str,
    pub intermediate: &'static str,
}

/// One row of the starting hand table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HandEntry {
    pub hand: StartingHand,
    /// Heuristic equity against a random hand, in percent.
    pub win_rate: f32,
    pub category: Category,
    pub recommendation: Action,
    pub positions: PositionGroupSet,
    pub tips: Tips,
}

impl HandEntry {
    /// Is this hand playable from the given group?
    pub fn playable_from(&self, group: PositionGroup) -> bool {
        self.positions.contains(group)
    }
}

const SUITED_TIPS: Tips = Tips {
    beginner: "Speculative hand. Consider position and action.",
    intermediate: "Suited hand. Weigh implied odds and playability.",
};

const OFFSUIT_TIPS: Tips = Tips {
    beginner: "Weak hand. Usually fold.",
    intermediate: "Offsuit hand. Very limited playability.",
};

/// Returned for anything that doesn't parse as a starting hand.
static WORST_HAND: Lazy<HandEntry> = Lazy::new(|| HandEntry {
    hand: StartingHand::new(Value::Seven, Value::Two, false),
    win_rate: 35.0,
    category: Category::Fold,
    recommendation: Action::Fold,
    positions: PositionGroupSet::new(),
    tips: Tips {
        beginner: "Very weak hand. Always fold.",
        intermediate: "Has no playable value in any situation.",
    },
});

static STANDARD_TABLE: Lazy<HandTable> = Lazy::new(HandTable::new);

/// Row for a pair missing from the hand-written data: the worst hand's
/// values under the pair's own name.
fn unlisted_pair(hand: StartingHand) -> HandEntry {
    HandEntry {
        hand,
        ..*WORST_HAND
    }
}

/// Default row for a suited hand with no hand-written entry.
fn synthesize_suited(hand: StartingHand) -> HandEntry {
    let sum = hand.index_sum();
    let playable = sum < 6;
    HandEntry {
        hand,
        win_rate: (70.0 - sum as f32 * 2.0).max(35.0),
        category: if sum < 8 {
            Category::Situational
        } else {
            Category::Weak
        },
        recommendation: if playable { Action::Call } else { Action::Fold },
        positions: late_position_if(playable),
        tips: SUITED_TIPS,
    }
}

/// Default row for an offsuit hand with no hand-written entry.
fn synthesize_offsuit(hand: StartingHand) -> HandEntry {
    let sum = hand.index_sum();
    let playable = sum < 4;
    HandEntry {
        hand,
        win_rate: (65.0 - sum as f32 * 2.5).max(32.0),
        category: if sum < 6 {
            Category::Situational
        } else {
            Category::Weak
        },
        recommendation: if playable { Action::Call } else { Action::Fold },
        positions: late_position_if(playable),
        tips: OFFSUIT_TIPS,
    }
}

fn late_position_if(playable: bool) -> PositionGroupSet {
    let mut positions = PositionGroupSet::new();
    if playable {
        positions.insert(PositionGroup::LatePosition);
    }
    positions
}

/// Immutable lookup from every starting hand to its [`HandEntry`].
///
/// # Examples
///
/// ```
/// use hand_advisor::holdem::{Action, Category, HandTable};
///
/// let table = HandTable::standard();
/// assert_eq!(table.len(), 169);
///
/// let aces = table.lookup("AA");
/// assert_eq!(aces.category, Category::Premium);
/// assert_eq!(aces.recommendation, Action::Raise);
///
/// // Unknown input degrades to the worst hand instead of failing.
/// let junk = table.lookup("hello");
/// assert_eq!(junk.recommendation, Action::Fold);
/// ```
#[derive(Debug, Clone)]
pub struct HandTable {
    entries: HashMap<StartingHand, HandEntry>,
    authored: usize,
}

impl HandTable {
    /// Build the full table: hand-written rows first, then a synthesized
    /// row for every hand that has none. Unlisted pairs get the worst hand
    /// values.
    #[instrument(level = "debug")]
    pub fn new() -> Self {
        let mut entries = HashMap::with_capacity(169);

        for row in AUTHORED_HANDS {
            // Static data, a parse failure here is a bug in the rows.
            let Ok(hand) = StartingHand::from_notation(row.notation) else {
                event!(
                    tracing::Level::WARN,
                    notation = row.notation,
                    "Skipping unparseable authored hand"
                );
                continue;
            };
            entries.insert(
                hand,
                HandEntry {
                    hand,
                    win_rate: row.win_rate,
                    category: row.category,
                    recommendation: row.recommendation,
                    positions: row.positions.into(),
                    tips: Tips {
                        beginner: row.beginner,
                        intermediate: row.intermediate,
                    },
                },
            );
        }
        let authored = entries.len();

        for hand in StartingHand::all() {
            if entries.contains_key(&hand) {
                continue;
            }
            let entry = if hand.is_pair() {
                unlisted_pair(hand)
            } else if hand.suited() {
                synthesize_suited(hand)
            } else {
                synthesize_offsuit(hand)
            };
            entries.insert(hand, entry);
        }

        debug!(
            authored,
            synthesized = entries.len() - authored,
            "Built starting hand table"
        );

        Self { entries, authored }
    }

    /// The process wide table, built on first use.
    pub fn standard() -> &'static HandTable {
        &STANDARD_TABLE
    }

    /// The entry used when a hand string can't be resolved.
    pub fn worst_hand() -> &'static HandEntry {
        &WORST_HAND
    }

    /// Get the entry for a parsed hand.
    pub fn get(&self, hand: &StartingHand) -> Option<&HandEntry> {
        self.entries.get(hand)
    }

    /// Resolve a notation string to an entry.
    ///
    /// Parsing is case-insensitive. This never fails: anything that can't
    /// be resolved returns [`HandTable::worst_hand`].
    pub fn lookup(&self, notation: &str) -> &HandEntry {
        StartingHand::from_notation(notation.trim())
            .ok()
            .and_then(|hand| self.entries.get(&hand))
            .unwrap_or_else(|| {
                debug!(notation, "Unknown hand, using worst hand entry");
                Self::worst_hand()
            })
    }

    /// Iterate all entries in chart order, strongest ranks first.
    pub fn iter(&self) -> impl Iterator<Item = &HandEntry> + '_ {
        StartingHand::all()
            .into_iter()
            .filter_map(move |hand| self.entries.get(&hand))
    }

    /// Entries whose stored category matches.
    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &HandEntry> + '_ {
        self.iter().filter(move |e| e.category == category)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// How many rows came from the hand-written data rather than the
    /// defaults.
    pub fn authored_count(&self) -> usize {
        self.authored
    }

    /// Export the whole table as a JSON object keyed by notation.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let map: serde_json::Map<String, serde_json::Value> = self
            .iter()
            .map(|e| serde_json::to_value(e).map(|v| (e.hand.to_notation(), v)))
            .collect::<Result<_, _>>()?;
        serde_json::to_string_pretty(&map)
    }
}

impl Default for HandTable {
    fn default() -> Self {
        Self::new()
    }
}
