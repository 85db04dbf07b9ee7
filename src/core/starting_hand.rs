//! Canonical notation for the 169 distinct Texas Hold'em starting hands.

use std::fmt;
use std::str::FromStr;

use super::{AdvisorError, Value};

/// One cell of the 13x13 starting-hand matrix.
///
/// Represents one of the 169 unique pre-flop starting hands:
/// - 13 pocket pairs (e.g., AA, KK, 22)
/// - 78 suited hands (e.g., AKs, T9s)
/// - 78 offsuit hands (e.g., AKo, 72o)
///
/// # Examples
///
/// ```
/// use hand_advisor::core::{StartingHand, Value};
///
/// let aks = StartingHand::new(Value::Ace, Value::King, true);
/// assert_eq!(aks.to_notation(), "AKs");
///
/// let ako = StartingHand::from_notation("AKo").unwrap();
/// assert!(!ako.suited());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StartingHand {
    /// Higher or equal value card
    high: Value,
    /// Lower or equal value card
    low: Value,
    /// true = suited, false = offsuit (pairs always false)
    suited: bool,
}

/// Goes through [`StartingHand::new`] so fuzzed hands keep the pair and
/// ordering invariants.
#[cfg(feature = "arbitrary")]
impl<'a> arbitrary::Arbitrary<'a> for StartingHand {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        Ok(Self::new(u.arbitrary()?, u.arbitrary()?, u.arbitrary()?))
    }
}

impl StartingHand {
    /// Create a new StartingHand from two values and suitedness.
    ///
    /// Values are automatically ordered so that `high >= low` and pairs
    /// always have `suited = false` regardless of the input.
    ///
    /// ```
    /// use hand_advisor::core::{StartingHand, Value};
    ///
    /// let hand1 = StartingHand::new(Value::King, Value::Ace, true);
    /// let hand2 = StartingHand::new(Value::Ace, Value::King, true);
    /// assert_eq!(hand1, hand2);
    ///
    /// let pair = StartingHand::new(Value::Ace, Value::Ace, true);
    /// assert!(!pair.suited());
    /// ```
    pub fn new(v1: Value, v2: Value, suited: bool) -> Self {
        let (high, low) = if v1 >= v2 { (v1, v2) } else { (v2, v1) };
        // Pairs can't be suited
        let suited = if high == low { false } else { suited };
        Self { high, low, suited }
    }

    /// Returns true if this is a pocket pair.
    pub fn is_pair(&self) -> bool {
        self.high == self.low
    }

    /// Returns true if this hand is suited. Pairs always return false.
    pub fn suited(&self) -> bool {
        self.suited
    }

    pub fn high(&self) -> Value {
        self.high
    }

    pub fn low(&self) -> Value {
        self.low
    }

    /// Sum of the grid indices of both ranks (`0 = Ace .. 12 = Two`).
    ///
    /// The table synthesizes default values for unlisted hands from this
    /// number, so `AKs` is 1 and `32o` is 23.
    pub fn index_sum(&self) -> usize {
        self.high.grid_index() + self.low.grid_index()
    }

    /// Convert to standard notation string.
    ///
    /// - Pairs: "AA", "KK", "22"
    /// - Suited: "AKs", "T9s"
    /// - Offsuit: "AKo", "72o"
    pub fn to_notation(&self) -> String {
        let high_char = self.high.to_char();
        let low_char = self.low.to_char();

        if self.is_pair() {
            format!("{}{}", high_char, low_char)
        } else if self.suited {
            format!("{}{}s", high_char, low_char)
        } else {
            format!("{}{}o", high_char, low_char)
        }
    }

    /// Parse from notation string.
    ///
    /// Rank characters and the suitedness suffix are case-insensitive, and
    /// the two ranks may be given in either order.
    ///
    /// # Errors
    ///
    /// Returns `AdvisorError::InvalidHandNotation` if the notation is invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use hand_advisor::core::{StartingHand, Value};
    ///
    /// let aces = StartingHand::from_notation("AA").unwrap();
    /// assert!(aces.is_pair());
    /// assert_eq!(aces.high(), Value::Ace);
    ///
    /// let aks = StartingHand::from_notation("aks").unwrap();
    /// assert_eq!(aks.to_notation(), "AKs");
    ///
    /// assert!(StartingHand::from_notation("AK").is_err());
    /// ```
    pub fn from_notation(s: &str) -> Result<Self, AdvisorError> {
        let invalid = || AdvisorError::InvalidHandNotation(s.to_string());
        let chars: Vec<char> = s.chars().collect();

        if chars.len() < 2 || chars.len() > 3 {
            return Err(invalid());
        }

        let v1 = Value::from_char(chars[0]).ok_or_else(invalid)?;
        let v2 = Value::from_char(chars[1]).ok_or_else(invalid)?;

        let suited = if chars.len() == 2 {
            // Must be a pair for 2-char notation
            if v1 != v2 {
                return Err(invalid());
            }
            false
        } else {
            match chars[2].to_ascii_lowercase() {
                's' => {
                    if v1 == v2 {
                        return Err(invalid());
                    }
                    true
                }
                'o' => {
                    if v1 == v2 {
                        return Err(invalid());
                    }
                    false
                }
                _ => return Err(invalid()),
            }
        };

        Ok(Self::new(v1, v2, suited))
    }

    /// Generate all 169 unique starting hands, strongest ranks first.
    ///
    /// ```
    /// use hand_advisor::core::StartingHand;
    ///
    /// let all_hands = StartingHand::all();
    /// assert_eq!(all_hands.len(), 169);
    /// assert_eq!(all_hands[0].to_notation(), "AA");
    /// ```
    pub fn all() -> Vec<Self> {
        let mut hands = Vec::with_capacity(169);
        let values = Value::values();

        for (i, &high) in values.iter().enumerate().rev() {
            for &low in values[..=i].iter().rev() {
                if high == low {
                    hands.push(Self::new(high, low, false));
                } else {
                    hands.push(Self::new(high, low, true));
                    hands.push(Self::new(high, low, false));
                }
            }
        }

        hands
    }
}

impl fmt::Display for StartingHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_notation())
    }
}

impl FromStr for StartingHand {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_notation(s)
    }
}

impl TryFrom<String> for StartingHand {
    type Error = AdvisorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_notation(&value)
    }
}

impl From<StartingHand> for String {
    fn from(hand: StartingHand) -> Self {
        hand.to_notation()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_hand_ordering() {
        let hand1 = StartingHand::new(Value::King, Value::Ace, true);
        let hand2 = StartingHand::new(Value::Ace, Value::King, true);
        assert_eq!(hand1, hand2);
        assert_eq!(hand1.high(), Value::Ace);
        assert_eq!(hand1.low(), Value::King);
    }

    #[test]
    fn test_pair_not_suited() {
        let pair = StartingHand::new(Value::King, Value::King, true);
        assert!(pair.is_pair());
        assert!(!pair.suited());
    }

    #[test]
    fn test_all_count() {
        let all = StartingHand::all();
        assert_eq!(all.len(), 169);

        let pairs = all.iter().filter(|h| h.is_pair()).count();
        let suited = all.iter().filter(|h| h.suited()).count();
        let offsuit = all.iter().filter(|h| !h.is_pair() && !h.suited()).count();

        assert_eq!(pairs, 13);
        assert_eq!(suited, 78);
        assert_eq!(offsuit, 78);
    }

    #[test]
    fn test_all_unique() {
        let all = StartingHand::all();
        let unique: std::collections::HashSet<_> = all.iter().collect();
        assert_eq!(unique.len(), 169);
    }

    #[test]
    fn test_notation_suffixes() {
        for hand in StartingHand::all() {
            let notation = hand.to_notation();
            if hand.is_pair() {
                assert_eq!(notation.len(), 2, "{notation}");
            } else if hand.suited() {
                assert!(notation.ends_with('s'), "{notation}");
            } else {
                assert!(notation.ends_with('o'), "{notation}");
            }
            assert_eq!(hand, StartingHand::from_notation(&notation).unwrap());
        }
    }

    #[test]
    fn test_notation_case_insensitive() {
        let parsed_lower = StartingHand::from_notation("aks").unwrap();
        let parsed_upper = StartingHand::from_notation("AKS").unwrap();
        let parsed_mixed = StartingHand::from_notation("AkS").unwrap();

        assert_eq!(parsed_lower, parsed_upper);
        assert_eq!(parsed_lower, parsed_mixed);
        assert_eq!(parsed_lower.to_notation(), "AKs");
    }

    #[test]
    fn test_notation_reversed_ranks() {
        let hand = StartingHand::from_notation("27o").unwrap();
        assert_eq!(hand.to_notation(), "72o");
    }

    #[test]
    fn test_notation_invalid() {
        // Too short
        assert!(StartingHand::from_notation("A").is_err());
        assert!(StartingHand::from_notation("").is_err());
        // Too long
        assert!(StartingHand::from_notation("AKso").is_err());
        // Invalid value chars
        assert_eq!(
            StartingHand::from_notation("XKs"),
            Err(AdvisorError::InvalidHandNotation("XKs".to_string()))
        );
        // Non-pair without suitedness indicator
        assert!(StartingHand::from_notation("AK").is_err());
        // Pairs can't carry a suffix
        assert!(StartingHand::from_notation("AAs").is_err());
        assert!(StartingHand::from_notation("AAo").is_err());
        // Invalid suitedness char
        assert!(StartingHand::from_notation("AKx").is_err());
    }

    #[test]
    fn test_index_sum() {
        assert_eq!(StartingHand::from_notation("AKs").unwrap().index_sum(), 1);
        assert_eq!(StartingHand::from_notation("32o").unwrap().index_sum(), 23);
        assert_eq!(StartingHand::from_notation("T9s").unwrap().index_sum(), 9);
    }

    #[test]
    fn test_serde_roundtrip() {
        let hand = StartingHand::new(Value::Ace, Value::King, true);
        let json = serde_json::to_string(&hand).unwrap();
        assert_eq!(json, "\"AKs\"");

        let parsed: StartingHand = serde_json::from_str(&json).unwrap();
        assert_eq!(hand, parsed);

        assert!(serde_json::from_str::<StartingHand>("\"ZZ\"").is_err());
    }
}
