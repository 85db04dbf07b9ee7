use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse strategic zone at the table.
///
/// Per seat strategy is simplified into these four groups. The hand table
/// stores which groups a hand is playable from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum PositionGroup {
    #[serde(rename = "Early Position")]
    EarlyPosition,
    #[serde(rename = "Middle Position")]
    MiddlePosition,
    #[serde(rename = "Late Position")]
    LatePosition,
    #[serde(rename = "Blinds")]
    Blinds,
}

const GROUPS: [PositionGroup; 4] = [
    PositionGroup::EarlyPosition,
    PositionGroup::MiddlePosition,
    PositionGroup::LatePosition,
    PositionGroup::Blinds,
];

impl PositionGroup {
    pub const fn all() -> [Self; 4] {
        GROUPS
    }

    /// The display name used in the chart, e.g. `"Late Position"`.
    pub fn name(self) -> &'static str {
        match self {
            Self::EarlyPosition => "Early Position",
            Self::MiddlePosition => "Middle Position",
            Self::LatePosition => "Late Position",
            Self::Blinds => "Blinds",
        }
    }

    /// Translation key for the localized name.
    pub fn translation_key(self) -> &'static str {
        match self {
            Self::EarlyPosition => "handModal.positions.earlyPosition",
            Self::MiddlePosition => "handModal.positions.middlePosition",
            Self::LatePosition => "handModal.positions.latePosition",
            Self::Blinds => "handModal.positions.blinds",
        }
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for PositionGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A seat at a six handed table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum Position {
    /// Under the gun, first to act pre-flop.
    #[serde(rename = "UTG")]
    UnderTheGun,
    #[serde(rename = "MP")]
    Middle,
    #[serde(rename = "CO")]
    Cutoff,
    #[serde(rename = "BTN")]
    Button,
    #[serde(rename = "SB")]
    SmallBlind,
    #[serde(rename = "BB")]
    BigBlind,
}

const POSITIONS: [Position; 6] = [
    Position::UnderTheGun,
    Position::Middle,
    Position::Cutoff,
    Position::Button,
    Position::SmallBlind,
    Position::BigBlind,
];

impl Position {
    /// All seats in pre-flop acting order.
    pub const fn all() -> [Self; 6] {
        POSITIONS
    }

    /// Short code used on the form, e.g. `"BTN"`.
    pub fn code(self) -> &'static str {
        match self {
            Self::UnderTheGun => "UTG",
            Self::Middle => "MP",
            Self::Cutoff => "CO",
            Self::Button => "BTN",
            Self::SmallBlind => "SB",
            Self::BigBlind => "BB",
        }
    }

    /// Parse a seat code, ignoring case.
    pub fn from_code(code: &str) -> Option<Self> {
        POSITIONS
            .into_iter()
            .find(|p| p.code().eq_ignore_ascii_case(code.trim()))
    }

    /// The strategic group the recommendation engine checks this seat
    /// against.
    ///
    /// ```
    /// use hand_advisor::holdem::{Position, PositionGroup};
    ///
    /// assert_eq!(Position::Middle.group(), PositionGroup::EarlyPosition);
    /// assert_eq!(Position::Button.group(), PositionGroup::LatePosition);
    /// assert_eq!(Position::BigBlind.group(), PositionGroup::Blinds);
    /// ```
    pub fn group(self) -> PositionGroup {
        match self {
            Self::UnderTheGun | Self::Middle => PositionGroup::EarlyPosition,
            Self::Cutoff | Self::Button => PositionGroup::LatePosition,
            Self::SmallBlind | Self::BigBlind => PositionGroup::Blinds,
        }
    }

    /// Translation key for the long seat name.
    pub fn translation_key(self) -> String {
        format!("simulator.positions.{}", self.code())
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A set of [`PositionGroup`]s.
///
/// There are only four groups, so a `u8` holds the set with no heap
/// allocation and keeps `HandEntry` `Copy`.
#[derive(Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PositionGroupSet {
    bits: u8,
}

impl PositionGroupSet {
    /// Creates a new empty set.
    #[inline]
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    /// Inserts a group. Returns `true` if it was not already present.
    #[inline]
    pub fn insert(&mut self, group: PositionGroup) -> bool {
        let was_present = self.contains(group);
        self.bits |= group.bit();
        !was_present
    }

    #[inline]
    pub fn contains(&self, group: PositionGroup) -> bool {
        (self.bits & group.bit()) != 0
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.bits.count_ones() as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Iterate the groups in seating order.
    pub fn iter(&self) -> impl Iterator<Item = PositionGroup> + '_ {
        GROUPS.into_iter().filter(|g| self.contains(*g))
    }
}

impl FromIterator<PositionGroup> for PositionGroupSet {
    fn from_iter<T: IntoIterator<Item = PositionGroup>>(iter: T) -> Self {
        let mut set = Self::new();
        for group in iter {
            set.insert(group);
        }
        set
    }
}

impl From<&[PositionGroup]> for PositionGroupSet {
    fn from(groups: &[PositionGroup]) -> Self {
        groups.iter().copied().collect()
    }
}

impl fmt::Debug for PositionGroupSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl Serialize for PositionGroupSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for PositionGroupSet {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let groups: Vec<PositionGroup> = Vec::deserialize(deserializer)?;
        Ok(groups.into_iter().collect())
    }
}
